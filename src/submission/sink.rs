//! 投稿の保存先
//!
//! SimulatedSink は保存の待ち時間だけを再現し、実際には何も永続化しない。

use crate::error::Result;
use art_vision_common::{SubmissionForm, SyntheticReport};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::info;

/// 保存完了の控え
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// RFC 3339
    pub submitted_at: String,
}

impl SubmissionReceipt {
    pub fn now() -> Self {
        Self {
            submitted_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

pub trait SubmissionSink: Send + Sync {
    fn submit(
        &self,
        form: &SubmissionForm,
        report: &SyntheticReport,
    ) -> impl Future<Output = Result<SubmissionReceipt>> + Send;
}

pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SubmissionSink for SimulatedSink {
    async fn submit(
        &self,
        form: &SubmissionForm,
        report: &SyntheticReport,
    ) -> Result<SubmissionReceipt> {
        tokio::time::sleep(self.delay).await;
        let receipt = SubmissionReceipt::now();
        info!(
            title = %form.title,
            submitted_by = %form.submitted_by,
            style = %report.style,
            submitted_at = %receipt.submitted_at,
            "submission stored (simulated)"
        );
        Ok(receipt)
    }
}
