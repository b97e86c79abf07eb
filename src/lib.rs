//! Fortune Teller CLI
//!
//! 共通ライブラリのバッチ解析を端末から実行する

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod report;
pub mod runner;
pub mod transport;
