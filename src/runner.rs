//! 解析の実行
//!
//! セッションを生成ページに進め、バッチ解析のコールバックで進捗を更新し、
//! 全カテゴリ終了後に一定時間待ってから結果ページへ切り替える。

use fortune_common::{
    run_batch, CategoryAnalyzer, CategoryKey, ProgressTracker, RunOutcome, Session, UserInput,
};
use std::cell::RefCell;
use std::time::Duration;

use crate::error::{FortuneError, Result};

/// 解析の進捗通知先
pub trait ProgressSink {
    fn update(&self, tracker: &ProgressTracker, key: CategoryKey);
    fn finish(&self, tracker: &ProgressTracker);
}

/// 進捗を表示しない通知先
pub struct Silent;

impl ProgressSink for Silent {
    fn update(&self, _tracker: &ProgressTracker, _key: CategoryKey) {}
    fn finish(&self, _tracker: &ProgressTracker) {}
}

/// 1回分の解析を実行して結果ページまで進める
pub async fn run_analysis<A, P>(
    analyzer: &A,
    session: &mut Session,
    input: UserInput,
    sink: &P,
    transition_delay: Duration,
) -> Result<RunOutcome>
where
    A: CategoryAnalyzer + ?Sized,
    P: ProgressSink + ?Sized,
{
    let locale = session.locale();
    let run_id = session
        .start(input.clone())
        .ok_or_else(|| FortuneError::InvalidInput("analysis is already running".into()))?;
    tracing::info!(run_id, %locale, "analysis run started");

    let shared = RefCell::new(session);
    run_batch(
        analyzer,
        &input,
        locale,
        |key| {
            let mut session = shared.borrow_mut();
            if let Err(e) = session.on_start(run_id, key) {
                tracing::warn!(error = %e, "progress update rejected");
            }
            sink.update(session.progress(), key);
        },
        |key, outcome| {
            let mut session = shared.borrow_mut();
            if let Err(e) = session.on_complete(run_id, key, outcome) {
                tracing::warn!(error = %e, "progress update rejected");
            }
            sink.update(session.progress(), key);
        },
    )
    .await;

    let session = shared.into_inner();
    sink.finish(session.progress());
    let outcome = session.progress().outcome();
    tracing::info!(run_id, ?outcome, "analysis run finished");

    tokio::time::sleep(transition_delay).await;
    session.show_results(run_id);
    Ok(outcome)
}
