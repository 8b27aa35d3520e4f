//! 表示用の評価区分と金額表記

use serde::Serialize;

/// 評価額を表記（100万以上は "€1.5M"、それ未満は桁区切り）
pub fn format_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        return format!("€{:.1}M", value / 1_000_000.0);
    }

    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-€{}", grouped)
    } else {
        format!("€{}", grouped)
    }
}

/// 信頼度の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceBand {
    High,
    Good,
    Moderate,
    Low,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 95.0 {
            ConfidenceBand::High
        } else if confidence >= 85.0 {
            ConfidenceBand::Good
        } else if confidence >= 70.0 {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }
}

/// 真正性の判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthenticityStatus {
    Authentic,
    Probable,
    Doubtful,
    Suspect,
}

impl AuthenticityStatus {
    pub fn from_score(score: f64) -> Self {
        if score >= 95.0 {
            AuthenticityStatus::Authentic
        } else if score >= 80.0 {
            AuthenticityStatus::Probable
        } else if score >= 60.0 {
            AuthenticityStatus::Doubtful
        } else {
            AuthenticityStatus::Suspect
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthenticityStatus::Authentic => "Authentic",
            AuthenticityStatus::Probable => "Probable",
            AuthenticityStatus::Doubtful => "Doubtful",
            AuthenticityStatus::Suspect => "Suspect",
        }
    }
}

impl std::fmt::Display for AuthenticityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
