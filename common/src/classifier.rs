//! キーワードによるスタイル判定
//!
//! タイトルと説明文を連結・小文字化した文字列に対し、順序付きルール表を
//! 先頭から評価し、最初に一致したルールを採用する（最良一致ではない）。
//! どれにも一致しなければデフォルト（Contemporary）を返す。
//!
//! ラベルの決定は純粋関数 `match_rule`、信頼度の揺らぎは `Jitter` に分離している。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// 判定ルール
#[derive(Debug, PartialEq)]
pub struct StyleRule {
    pub keywords: &'static [&'static str],
    pub style: &'static str,
    pub period: &'static str,
    pub techniques: &'static [&'static str],
    /// 信頼度の範囲（両端含む）
    pub confidence: (f64, f64),
}

/// 判定ルール（評価順）
pub const RULES: &[StyleRule] = &[
    StyleRule {
        keywords: &["impressionist", "plein air", "natural light", "luz natural"],
        style: "Impressionism",
        period: "19th century",
        techniques: &["Oil on canvas", "Loose brushwork", "Pure colors"],
        confidence: (90.0, 98.0),
    },
    StyleRule {
        keywords: &["realist", "portrait", "classic", "retrato"],
        style: "Realism",
        period: "19th–20th century",
        techniques: &["Oil on canvas", "Classical technique", "Chiaroscuro"],
        confidence: (88.0, 98.0),
    },
    StyleRule {
        keywords: &["abstract", "geometric", "modern", "geométric"],
        style: "Modern Art",
        period: "20th century",
        techniques: &["Acrylic on canvas", "Geometric abstraction"],
        confidence: (82.0, 94.0),
    },
    StyleRule {
        keywords: &["cubist", "fragment"],
        style: "Cubism",
        period: "20th century",
        techniques: &["Oil on canvas", "Geometric fragmentation"],
        confidence: (85.0, 95.0),
    },
];

/// どのルールにも一致しない場合
pub const DEFAULT_RULE: StyleRule = StyleRule {
    keywords: &[],
    style: "Contemporary",
    period: "21st century",
    techniques: &["Mixed media"],
    confidence: (85.0, 95.0),
};

impl StyleRule {
    pub fn is_triggered_by(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// 判定結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub style: String,
    pub period: String,
    pub techniques: Vec<String>,
    pub confidence: f64,
}

/// 数値の揺らぎ源
pub trait Jitter: Send + Sync {
    /// [low, high] の値を返す
    fn sample(&self, low: f64, high: f64) -> f64;
}

/// 乱数による揺らぎ
pub struct RandJitter {
    rng: Mutex<StdRng>,
}

impl RandJitter {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// 再現可能な系列（デバッグ用）
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandJitter {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Jitter for RandJitter {
    fn sample(&self, low: f64, high: f64) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        low + rng.gen::<f64>() * (high - low)
    }
}

/// 固定の揺らぎ（範囲内の位置を0.0〜1.0で指定）
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn sample(&self, low: f64, high: f64) -> f64 {
        low + self.0.clamp(0.0, 1.0) * (high - low)
    }
}

/// 小数第1位に丸める
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 判定対象の文字列を作る
pub fn search_text(title: &str, description: &str) -> String {
    format!("{} {}", description, title).to_lowercase()
}

/// 最初に一致したルール（なければデフォルト）
pub fn match_rule(title: &str, description: &str) -> &'static StyleRule {
    let text = search_text(title, description);
    RULES
        .iter()
        .find(|rule| rule.is_triggered_by(&text))
        .unwrap_or(&DEFAULT_RULE)
}

/// ラベル判定 + 信頼度
pub fn classify(title: &str, description: &str, jitter: &dyn Jitter) -> Classification {
    let rule = match_rule(title, description);
    let (low, high) = rule.confidence;

    Classification {
        style: rule.style.to_string(),
        period: rule.period.to_string(),
        techniques: rule.techniques.iter().map(|t| t.to_string()).collect(),
        confidence: round1(jitter.sample(low, high)),
    }
}
