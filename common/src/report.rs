//! 合成レポートの組み立て
//!
//! スタイル判定結果から、配色・真正性スコア・所見文を生成する。

use crate::classifier::{round1, Classification, Jitter, DEFAULT_RULE};
use crate::types::SyntheticReport;

/// 真正性スコアの範囲
pub const AUTHENTICITY_RANGE: (f64, f64) = (75.0, 95.0);

const PALETTES: &[(&str, [&str; 5])] = &[
    ("Impressionism", ["#87CEEB", "#98FB98", "#DDA0DD", "#F0E68C", "#FFB6C1"]),
    ("Realism", ["#8B4513", "#DEB887", "#F5DEB3", "#2F4F4F", "#000000"]),
    ("Modern Art", ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7"]),
    ("Cubism", ["#000000", "#FFFFFF", "#808080", "#A9A9A9", "#696969"]),
    ("Contemporary", ["#FF7675", "#74B9FF", "#00B894", "#FDCB6E", "#6C5CE7"]),
];

/// スタイルごとの配色（未知のスタイルはContemporary）
pub fn palette_for(style: &str) -> Vec<String> {
    let palette = PALETTES
        .iter()
        .find(|(name, _)| *name == style)
        .or_else(|| PALETTES.iter().find(|(name, _)| *name == DEFAULT_RULE.style))
        .map(|(_, colors)| colors.as_slice())
        .unwrap_or(&[]);

    palette.iter().map(|c| c.to_string()).collect()
}

/// 所見文
pub fn observation(style: &str, period: &str) -> String {
    format!(
        "Automatic analysis detected characteristics of {}. \
         The work presents techniques consistent with the {} period. \
         Further analysis by a specialist is recommended for definitive confirmation.",
        style.to_lowercase(),
        period.to_lowercase()
    )
}

/// 真正性スコア（小数第1位）
pub fn authenticity_score(jitter: &dyn Jitter) -> f64 {
    let (low, high) = AUTHENTICITY_RANGE;
    round1(jitter.sample(low, high))
}

pub fn assemble(classification: &Classification, jitter: &dyn Jitter) -> SyntheticReport {
    SyntheticReport {
        confidence: classification.confidence,
        style: classification.style.clone(),
        period: classification.period.clone(),
        techniques: classification.techniques.clone(),
        authenticity: authenticity_score(jitter),
        color_palette: palette_for(&classification.style),
        observations: observation(&classification.style, &classification.period),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{classify, FixedJitter, RandJitter};

    #[test]
    fn test_palette_per_style() {
        assert_eq!(palette_for("Cubism")[0], "#000000");
        assert_eq!(palette_for("Impressionism")[0], "#87CEEB");
        for (style, _) in PALETTES {
            assert_eq!(palette_for(style).len(), 5);
        }
    }

    #[test]
    fn test_palette_unknown_style_falls_back() {
        assert_eq!(palette_for("Baroque"), palette_for("Contemporary"));
    }

    #[test]
    fn test_observation_interpolates_lowercase_labels() {
        let text = observation("Modern Art", "20th century");
        assert!(text.contains("characteristics of modern art."));
        assert!(text.contains("consistent with the 20th century period"));
    }

    #[test]
    fn test_authenticity_bounds() {
        assert_eq!(authenticity_score(&FixedJitter(0.0)), 75.0);
        assert_eq!(authenticity_score(&FixedJitter(1.0)), 95.0);

        let jitter = RandJitter::seeded(3);
        for _ in 0..500 {
            let score = authenticity_score(&jitter);
            assert!((75.0..=95.0).contains(&score), "{}", score);
        }
    }

    #[test]
    fn test_assemble_report() {
        let jitter = FixedJitter(0.5);
        let classification = classify("Sunset", "painted en plein air with natural light", &jitter);
        let report = assemble(&classification, &jitter);

        assert_eq!(report.style, "Impressionism");
        assert_eq!(report.period, "19th century");
        assert_eq!(report.confidence, 94.0);
        assert_eq!(report.authenticity, 85.0);
        assert!(report.techniques.contains(&"Loose brushwork".to_string()));
        assert_eq!(report.color_palette, palette_for("Impressionism"));
        assert!(report.observations.contains("impressionism"));
    }
}
