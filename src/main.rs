use anyhow::Context;
use art_vision::commands::{self, BrowseArgs, SubmitArgs};
use art_vision::{cli, config, logging, source};
use art_vision_common::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use std::path::PathBuf;

fn open_catalog(config: &Config, cli_override: Option<PathBuf>) -> anyhow::Result<Catalog> {
    let path = config.resolve_catalog_path(cli_override);
    let catalog = source::open_catalog(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("カタログを読み込めません: {}", path.display()),
        None => "組み込みカタログを読み込めません".to_string(),
    })?;
    Ok(catalog)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Browse { query, period, artist, technique, sort, json } => {
            let catalog = open_catalog(&config, cli.catalog)?;
            let args = BrowseArgs { query, period, artist, technique, sort };
            commands::browse(&catalog, &args, json)?;
        }

        Commands::Facets { json } => {
            let catalog = open_catalog(&config, cli.catalog)?;
            commands::facets(&catalog, json)?;
        }

        Commands::Show { id, json } => {
            let catalog = open_catalog(&config, cli.catalog)?;
            commands::show(&catalog, id, json)?;
        }

        Commands::Insights { json } => {
            let catalog = open_catalog(&config, cli.catalog)?;
            commands::insights(&catalog, json)?;
        }

        Commands::Submit { title, artist, description, submitter, email, image, output, interactive } => {
            let args = SubmitArgs { title, artist, description, submitter, email, image, output, interactive };
            commands::submit(&config, &args).await?;
        }

        Commands::Config { set_catalog, set_seed, show } => {
            commands::config(config, set_catalog, set_seed, show)?;
        }
    }

    Ok(())
}
