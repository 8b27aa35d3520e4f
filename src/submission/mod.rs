//! 作品投稿フロー
//!
//! 入力検証 → 解析待ち（3〜5秒）→ キーワード判定 → レポート組み立て → 保存（約1秒）。
//!
//! 状態遷移: Idle → Pending → Completed | Failed → (reset) → Idle
//! Pending 中の再投稿は待ち行列に入れず即座に拒否する。

pub mod service;
pub mod sink;
pub mod validate;

pub use service::{ClassificationService, KeywordClassifier};
pub use sink::{SimulatedSink, SubmissionReceipt, SubmissionSink};
pub use validate::{attachment_from_path, validate_form};

use crate::error::{ArtVisionError, Result};
use art_vision_common::{assemble, Jitter, SubmissionForm, SyntheticReport};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

/// 投稿の状態
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Pending,
    Completed(SyntheticReport),
    Failed(String),
}

/// 擬似的な待ち時間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub processing_min: Duration,
    pub processing_max: Duration,
    pub persistence: Duration,
}

impl Latency {
    /// 待ち時間なし
    pub const fn immediate() -> Self {
        Self {
            processing_min: Duration::ZERO,
            processing_max: Duration::ZERO,
            persistence: Duration::ZERO,
        }
    }

    /// 解析待ち時間を [min, max] から一様に選ぶ
    pub fn processing_delay(&self, jitter: &dyn Jitter) -> Duration {
        if self.processing_max <= self.processing_min {
            return self.processing_min;
        }
        let secs = jitter.sample(
            self.processing_min.as_secs_f64(),
            self.processing_max.as_secs_f64(),
        );
        Duration::from_secs_f64(secs)
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            processing_min: Duration::from_millis(3000),
            processing_max: Duration::from_millis(5000),
            persistence: Duration::from_millis(1000),
        }
    }
}

/// 投稿結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub report: SyntheticReport,
    pub receipt: SubmissionReceipt,
}

/// 1フォームにつき同時に1件だけ投稿を処理する
pub struct SubmissionController<C, S> {
    classifier: C,
    sink: S,
    jitter: Arc<dyn Jitter>,
    latency: Latency,
    state: Mutex<SubmissionState>,
}

impl<C: ClassificationService, S: SubmissionSink> SubmissionController<C, S> {
    pub fn new(classifier: C, sink: S, jitter: Arc<dyn Jitter>, latency: Latency) -> Self {
        Self {
            classifier,
            sink,
            jitter,
            latency,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    pub fn is_pending(&self) -> bool {
        matches!(*self.lock_state(), SubmissionState::Pending)
    }

    /// 結果を破棄して Idle に戻す（処理中は不可）
    pub fn reset(&self) -> Result<()> {
        let mut state = self.lock_state();
        if matches!(*state, SubmissionState::Pending) {
            return Err(ArtVisionError::SubmissionInFlight);
        }
        *state = SubmissionState::Idle;
        Ok(())
    }

    /// 次の作品の投稿に備えて、状態とフォームを空に戻す
    ///
    /// 処理中はフォームに触れずにエラーを返す。
    pub fn submit_another(&self, form: &mut SubmissionForm) -> Result<()> {
        self.reset()?;
        form.reset();
        debug!("form cleared for another submission");
        Ok(())
    }

    /// 投稿を処理する
    ///
    /// 検証エラーは状態を変えずに返す。解析・保存の失敗は Failed に遷移し、
    /// 再試行可能なエラーとして返す（自動リトライはしない）。
    pub async fn submit(&self, form: &SubmissionForm) -> Result<SubmissionOutcome> {
        let guard = self.begin(form)?;
        info!(title = %form.title, "analysis started");

        match self.run(form).await {
            Ok(outcome) => {
                info!(
                    style = %outcome.report.style,
                    confidence = outcome.report.confidence,
                    "analysis completed"
                );
                guard.finish(SubmissionState::Completed(outcome.report.clone()));
                Ok(outcome)
            }
            Err(e) => {
                let message = match e {
                    ArtVisionError::Processing(message) => message,
                    other => other.to_string(),
                };
                warn!(error = %message, "analysis failed");
                guard.finish(SubmissionState::Failed(message.clone()));
                Err(ArtVisionError::Processing(message))
            }
        }
    }

    fn begin(&self, form: &SubmissionForm) -> Result<PendingGuard<'_>> {
        let mut state = self.lock_state();
        if matches!(*state, SubmissionState::Pending) {
            warn!("submission rejected: another one is pending");
            return Err(ArtVisionError::SubmissionInFlight);
        }
        validate_form(form)?;
        *state = SubmissionState::Pending;

        Ok(PendingGuard {
            state: &self.state,
            finished: false,
        })
    }

    async fn run(&self, form: &SubmissionForm) -> Result<SubmissionOutcome> {
        let delay = self.latency.processing_delay(self.jitter.as_ref());
        debug!(delay_ms = delay.as_millis() as u64, "simulated processing");
        tokio::time::sleep(delay).await;

        let classification = self.classifier.classify(&form.title, &form.description)?;
        let report = assemble(&classification, self.jitter.as_ref());
        let receipt = self.sink.submit(form, &report).await?;

        Ok(SubmissionOutcome { report, receipt })
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Pending 中に処理が中断された場合でも Pending のまま残さない
struct PendingGuard<'a> {
    state: &'a Mutex<SubmissionState>,
    finished: bool,
}

impl PendingGuard<'_> {
    fn finish(mut self, next: SubmissionState) {
        self.set(next);
        self.finished = true;
    }

    fn set(&self, next: SubmissionState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = next;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.set(SubmissionState::Failed("interrupted".to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use art_vision_common::FixedJitter;

    #[test]
    fn test_processing_delay_bounds() {
        let latency = Latency::default();
        assert_eq!(
            latency.processing_delay(&FixedJitter(0.0)),
            Duration::from_millis(3000)
        );
        assert_eq!(
            latency.processing_delay(&FixedJitter(1.0)),
            Duration::from_millis(5000)
        );
        assert_eq!(
            latency.processing_delay(&FixedJitter(0.5)),
            Duration::from_millis(4000)
        );
    }

    #[test]
    fn test_processing_delay_degenerate_range() {
        let latency = Latency::immediate();
        assert_eq!(latency.processing_delay(&FixedJitter(0.7)), Duration::ZERO);
    }
}
