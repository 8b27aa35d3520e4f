//! 分類サービス
//!
//! 現状はキーワード判定のみ。実際の推論呼び出しに差し替える場合はこのトレイトを実装する。

use crate::error::Result;
use art_vision_common::{classify, Classification, Jitter};
use std::sync::Arc;

pub trait ClassificationService: Send + Sync {
    fn classify(&self, title: &str, description: &str) -> Result<Classification>;
}

/// キーワード判定 + 信頼度の揺らぎ
pub struct KeywordClassifier {
    jitter: Arc<dyn Jitter>,
}

impl KeywordClassifier {
    pub fn new(jitter: Arc<dyn Jitter>) -> Self {
        Self { jitter }
    }
}

impl ClassificationService for KeywordClassifier {
    fn classify(&self, title: &str, description: &str) -> Result<Classification> {
        Ok(classify(title, description, self.jitter.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use art_vision_common::FixedJitter;

    #[test]
    fn test_keyword_classifier() {
        let classifier = KeywordClassifier::new(Arc::new(FixedJitter(0.0)));
        let result = classifier.classify("Portrait of a lady", "").unwrap();
        assert_eq!(result.style, "Realism");
        assert_eq!(result.period, "19th–20th century");
        assert_eq!(result.confidence, 88.0);
    }
}
