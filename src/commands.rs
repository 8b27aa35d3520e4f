//! サブコマンドの実行と表示

use crate::config::Config;
use crate::error::{ArtVisionError, Result};
use crate::prompt;
use crate::submission::{
    attachment_from_path, KeywordClassifier, SimulatedSink, SubmissionController,
    SubmissionOutcome,
};
use art_vision_common::{
    format_value, Analysis, Artwork, AuthenticityStatus, BrowserState, Catalog,
    CollectionInsights, ConfidenceBand, Facet, FacetOptions, Jitter, RandJitter, SortKey,
    SubmissionForm, SyntheticReport,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// browse の絞り込み条件
#[derive(Debug, Default)]
pub struct BrowseArgs {
    pub query: String,
    pub period: Option<String>,
    pub artist: Option<String>,
    pub technique: Option<String>,
    pub sort: Option<SortKey>,
}

impl BrowseArgs {
    pub fn to_state(&self) -> BrowserState {
        let mut state = BrowserState::new();
        state.set_query(self.query.as_str());
        for (facet, value) in [
            (Facet::Period, &self.period),
            (Facet::Artist, &self.artist),
            (Facet::Technique, &self.technique),
        ] {
            if let Some(value) = value {
                state.set_facet(facet, value);
            }
        }
        state.set_sort(self.sort);
        state
    }
}

pub fn browse(catalog: &Catalog, args: &BrowseArgs, json: bool) -> Result<()> {
    let state = args.to_state();
    let visible = state.visible(catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!("🎨 art-vision - 作品ギャラリー\n");
    let active = state.filter.active_facet_count();
    if active > 0 {
        println!("絞り込み: {}件の条件", active);
    }
    println!("{} / {}件の作品\n", visible.len(), catalog.len());

    if visible.is_empty() {
        println!("条件に一致する作品はありません");
        return Ok(());
    }

    for artwork in visible {
        let marker = if catalog.analysis_for(artwork.id).is_some() { "✔" } else { " " };
        println!(
            "{} [{}] {} - {} ({}, {})  {}  {}",
            marker,
            artwork.id,
            artwork.title,
            artwork.artist,
            artwork.year,
            artwork.period,
            format_value(artwork.value),
            artwork.conservation,
        );
    }
    println!("\n✔ = AI解析済み");
    Ok(())
}

pub fn facets(catalog: &Catalog, json: bool) -> Result<()> {
    let options = FacetOptions::from_artworks(catalog.artworks());

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!("時代:");
    for period in &options.periods {
        println!("  - {}", period);
    }
    println!("作家:");
    for artist in &options.artists {
        println!("  - {}", artist);
    }
    println!("技法:");
    for technique in &options.techniques {
        println!("  - {}", technique);
    }
    Ok(())
}

#[derive(Serialize)]
struct ArtworkDetail<'a> {
    artwork: &'a Artwork,
    analysis: Option<&'a Analysis>,
}

pub fn show(catalog: &Catalog, id: u32, json: bool) -> Result<()> {
    let mut state = BrowserState::new();
    state.select(id);
    let artwork = state
        .selected_artwork(catalog)
        .ok_or(ArtVisionError::ArtworkNotFound(id))?;
    let analysis = state.selected_analysis(catalog);

    if json {
        let detail = ArtworkDetail { artwork, analysis };
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("🖼  {}", artwork.title);
    println!("  作家: {}", artwork.artist);
    println!("  制作年: {}", artwork.year);
    println!("  時代: {}", artwork.period);
    println!("  寸法: {}", artwork.dimensions);
    println!("  所蔵: {}", artwork.location);
    println!("  評価額: {}", format_value(artwork.value));
    println!("  保存状態: {}", artwork.conservation);
    println!("  技法: {}", artwork.techniques.join(", "));
    println!("\n{}", artwork.description);

    match analysis {
        Some(analysis) => print_analysis(analysis),
        None => println!("\nこの作品のAI解析はまだ処理されていません"),
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    let status = AuthenticityStatus::from_score(analysis.authenticity.score);

    println!("\n🔍 AI解析");
    println!(
        "  信頼度: {:.1}% ({:?})",
        analysis.confidence,
        ConfidenceBand::from_confidence(analysis.confidence)
    );
    println!(
        "  様式: {} ({:.1}%)",
        analysis.style.detected, analysis.style.confidence
    );
    println!(
        "  時代: {} ({:.1}%)",
        analysis.period.detected, analysis.period.confidence
    );
    println!(
        "  真正性: {:.1} / 確率 {:.1}% [{}]",
        analysis.authenticity.score, analysis.authenticity.probability, status
    );
    for indicator in &analysis.authenticity.indicators {
        println!("    - {}", indicator);
    }
    println!("  構図: {:.1}", analysis.composition);
    println!("  配色: {}", analysis.color_palette.join(" "));
    println!("  保存状態: {}", analysis.conservation.status);
    for issue in &analysis.conservation.issues {
        println!("    ! {}", issue);
    }
    for recommendation in &analysis.conservation.recommendations {
        println!("    → {}", recommendation);
    }
    println!("  推定評価額: {}", format_value(analysis.valuation.estimated));
    println!("  処理時間: {:.1}秒", analysis.processing_time);
    println!("\n  {}", analysis.observations);
}

pub fn insights(catalog: &Catalog, json: bool) -> Result<()> {
    let insights = CollectionInsights::compute(catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!("📊 コレクション統計\n");
    println!("  作品数: {}", insights.total_artworks);
    println!("  総評価額: {}", format_value(insights.total_value));
    println!("  解析済み: {}件", insights.analyses);
    match insights.average_authenticity {
        Some(avg) => println!("  平均真正性: {:.1}", avg),
        None => println!("  平均真正性: -"),
    }

    println!("\n時代別:");
    for entry in &insights.periods {
        println!("  {:<24} {:>3}件 ({:.1}%)", entry.label, entry.count, entry.percentage);
    }
    println!("\n保存状態:");
    for entry in &insights.conservation {
        println!("  {:<24} {:>3}件 ({:.1}%)", entry.label, entry.count, entry.percentage);
    }
    Ok(())
}

/// submit の入力（未指定項目は空のまま検証に回す）
#[derive(Debug, Default)]
pub struct SubmitArgs {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub submitter: Option<String>,
    pub email: Option<String>,
    pub image: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub interactive: bool,
}

impl SubmitArgs {
    pub fn to_form(&self) -> Result<SubmissionForm> {
        let image = match &self.image {
            Some(path) => Some(attachment_from_path(path)?),
            None => None,
        };
        Ok(SubmissionForm {
            title: self.title.clone().unwrap_or_default(),
            artist_name: self.artist.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            submitted_by: self.submitter.clone().unwrap_or_default(),
            submitted_email: self.email.clone().unwrap_or_default(),
            image,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionRecord<'a> {
    form: &'a SubmissionForm,
    #[serde(flatten)]
    outcome: &'a SubmissionOutcome,
}

pub async fn submit(config: &Config, args: &SubmitArgs) -> Result<()> {
    println!("📤 art-vision - 作品投稿\n");

    let mut form = if args.interactive {
        prompt::prompt_form()?
    } else {
        args.to_form()?
    };

    let jitter: Arc<dyn Jitter> = match config.seed {
        Some(seed) => Arc::new(RandJitter::seeded(seed)),
        None => Arc::new(RandJitter::from_entropy()),
    };
    let latency = config.latency();
    let controller = SubmissionController::new(
        KeywordClassifier::new(Arc::clone(&jitter)),
        SimulatedSink::new(latency.persistence),
        jitter,
        latency,
    );

    loop {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("AI解析中...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        let result = controller.submit(&form).await;
        spinner.finish_and_clear();

        let outcome = result?;
        println!("✔ 解析完了\n");
        print_report(&outcome.report);

        // 続けて投稿した場合は最後の結果で上書き
        if let Some(output) = &args.output {
            write_record(output, &form, &outcome)?;
            println!("\n✔ 結果を保存: {}", output.display());
        }

        println!("\n✅ 投稿を受け付けました ({})", outcome.receipt.submitted_at);

        if !args.interactive || !prompt::confirm_another()? {
            break;
        }
        controller.submit_another(&mut form)?;
        println!();
        prompt::fill_form(&mut form)?;
    }

    Ok(())
}

fn print_report(report: &SyntheticReport) {
    println!("  様式: {}", report.style);
    println!("  時代: {}", report.period);
    println!(
        "  信頼度: {:.1}% ({:?})",
        report.confidence,
        ConfidenceBand::from_confidence(report.confidence)
    );
    println!(
        "  真正性: {:.1} [{}]",
        report.authenticity,
        AuthenticityStatus::from_score(report.authenticity)
    );
    println!("  技法: {}", report.techniques.join(", "));
    println!("  配色: {}", report.color_palette.join(" "));
    println!("\n  {}", report.observations);
}

fn write_record(path: &Path, form: &SubmissionForm, outcome: &SubmissionOutcome) -> Result<()> {
    let record = SubmissionRecord { form, outcome };
    let json = serde_json::to_string_pretty(&record)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn config(mut config: Config, set_catalog: Option<PathBuf>, set_seed: Option<u64>, show: bool) -> Result<()> {
    if let Some(path) = set_catalog {
        config.set_catalog_path(path)?;
        println!("✔ カタログを設定しました");
    }

    if let Some(seed) = set_seed {
        config.set_seed(seed)?;
        println!("✔ 乱数シードを設定しました");
    }

    if show {
        println!("設定:");
        match &config.catalog_path {
            Some(path) => println!("  カタログ: {}", path.display()),
            None => println!("  カタログ: 組み込みサンプル"),
        }
        println!(
            "  解析待ち時間: {}〜{}ms",
            config.processing_min_ms, config.processing_max_ms
        );
        println!("  保存待ち時間: {}ms", config.persistence_ms);
        match config.seed {
            Some(seed) => println!("  乱数シード: {}", seed),
            None => println!("  乱数シード: 未設定"),
        }
    }
    Ok(())
}
