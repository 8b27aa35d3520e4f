//! カタログの読み込み元
//!
//! 起動時に一度だけ作品リストと解析リストを取得してカタログを構築する。
//! - JsonCatalogSource: `{ "artworks": [...], "analyses": [...] }` 形式のJSONファイル
//! - BuiltinCatalog: バイナリに埋め込んだサンプル（5作品）

use crate::error::{ArtVisionError, Result};
use art_vision_common::{Analysis, Artwork, Catalog};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// カタログの読み込み元
pub trait CatalogSource {
    fn list_artworks(&self) -> Result<Vec<Artwork>>;
    fn list_analyses(&self) -> Result<Vec<Analysis>>;
    fn describe(&self) -> String;

    /// 作品と解析を同じ時点の内容として取得する
    ///
    /// 1回の読み込みで両方を返せる実装はこれを上書きする。
    fn snapshot(&self) -> Result<(Vec<Artwork>, Vec<Analysis>)> {
        Ok((self.list_artworks()?, self.list_analyses()?))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogDocument {
    artworks: Vec<Artwork>,
    analyses: Vec<Analysis>,
}

impl CatalogDocument {
    fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// JSONファイルから読み込む
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<CatalogDocument> {
        if !self.path.exists() {
            return Err(ArtVisionError::FileNotFound(self.path.display().to_string()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        CatalogDocument::parse(&content)
    }
}

impl CatalogSource for JsonCatalogSource {
    fn list_artworks(&self) -> Result<Vec<Artwork>> {
        Ok(self.read()?.artworks)
    }

    fn list_analyses(&self) -> Result<Vec<Analysis>> {
        Ok(self.read()?.analyses)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn snapshot(&self) -> Result<(Vec<Artwork>, Vec<Analysis>)> {
        let document = self.read()?;
        Ok((document.artworks, document.analyses))
    }
}

/// 組み込みサンプルカタログ
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn list_artworks(&self) -> Result<Vec<Artwork>> {
        Ok(CatalogDocument::parse(BUILTIN_CATALOG)?.artworks)
    }

    fn list_analyses(&self) -> Result<Vec<Analysis>> {
        Ok(CatalogDocument::parse(BUILTIN_CATALOG)?.analyses)
    }

    fn describe(&self) -> String {
        "組み込みサンプル".to_string()
    }

    fn snapshot(&self) -> Result<(Vec<Artwork>, Vec<Analysis>)> {
        let document = CatalogDocument::parse(BUILTIN_CATALOG)?;
        Ok((document.artworks, document.analyses))
    }
}

/// カタログを構築（重複・範囲外スコアはここで検出）
pub fn load_catalog(source: &dyn CatalogSource) -> Result<Catalog> {
    let (artworks, analyses) = source.snapshot()?;
    debug!(
        artworks = artworks.len(),
        analyses = analyses.len(),
        "catalog source read"
    );

    let catalog = Catalog::new(artworks, analyses)?;
    info!(source = %source.describe(), artworks = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// パス指定があればJSON、なければ組み込みサンプル
pub fn open_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog(&JsonCatalogSource::new(path)),
        None => load_catalog(&BuiltinCatalog),
    }
}
