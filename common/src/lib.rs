//! Fortune Teller Common Library
//!
//! CLIとWeb(WASM)で共有される型・プロンプト・バッチ解析ロジック

pub mod types;
pub mod error;
pub mod i18n;
pub mod prompts;
pub mod gemini;
pub mod parser;
pub mod details;
pub mod client;
pub mod batch;
pub mod progress;
pub mod birth_time;
pub mod results;
pub mod session;

pub use types::{
    AnalysisStatus, CategoryInfo, CategoryKey, EncodedImage, FacePhoto, FortuneResult, Locale,
    PhotoSource, UserInput,
};
pub use error::{AnalysisError, Error, Result};
pub use i18n::{categories, category_name, t};
pub use parser::{extract_json, parse_fortune_response};
pub use details::{parse_details, DetailSection};
pub use client::{AnalysisClient, CategoryAnalyzer, GenerateRequest, GenerativeTransport};
pub use batch::{encode_photo, run_batch};
pub use progress::{
    status_short_key, CategoryProgress, ProgressTracker, RunOutcome, RESULTS_TRANSITION_DELAY,
};
pub use birth_time::{combine_birth_time, Meridiem};
pub use results::ResultsBrowser;
pub use session::{Page, RunId, Session};
