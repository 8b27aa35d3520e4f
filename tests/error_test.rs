//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use art_vision::error::{ArtVisionError, ValidationError};
use art_vision::source::{load_catalog, JsonCatalogSource};
use tempfile::tempdir;

/// 存在しないカタログファイル
#[test]
fn test_load_nonexistent_catalog() {
    let source = JsonCatalogSource::new("/nonexistent/path/12345/catalog.json");
    let result = load_catalog(&source);

    let err = result.unwrap_err();
    assert!(matches!(err, ArtVisionError::FileNotFound(_)));
}

/// 壊れたJSONのカタログ
#[test]
fn test_load_malformed_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ \"artworks\": [ ").unwrap();

    let result = load_catalog(&JsonCatalogSource::new(&path));
    assert!(matches!(result, Err(ArtVisionError::JsonParse(_))));
}

/// 空のカタログはエラーではない
#[test]
fn test_load_empty_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, r#"{ "artworks": [], "analyses": [] }"#).unwrap();

    let catalog = load_catalog(&JsonCatalogSource::new(&path)).unwrap();
    assert!(catalog.is_empty());
}

/// ArtVisionErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ArtVisionError::Config("テスト設定エラー".to_string()),
        ArtVisionError::FileNotFound("catalog.json".to_string()),
        ArtVisionError::SubmissionInFlight,
        ArtVisionError::Processing("timeout".to_string()),
        ArtVisionError::ArtworkNotFound(42),
        ArtVisionError::Prompt("interrupted".to_string()),
        ArtVisionError::Validation(ValidationError::MissingImage),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 処理エラーは再試行を促す
#[test]
fn test_processing_message_invites_retry() {
    let err = ArtVisionError::Processing("sink unavailable".to_string());
    let display = format!("{}", err);

    assert!(display.contains("もう一度"));
    assert!(display.contains("sink unavailable"));
}

/// 入力エラーの項目名がメッセージに含まれる
#[test]
fn test_validation_error_conversion() {
    let err: ArtVisionError = ValidationError::MissingField("title").into();

    assert!(matches!(
        err,
        ArtVisionError::Validation(ValidationError::MissingField("title"))
    ));
    assert!(format!("{}", err).contains("title"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ArtVisionError = io_err.into();

    assert!(matches!(err, ArtVisionError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ArtVisionError = json_err.into();

    assert!(matches!(err, ArtVisionError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = art_vision_common::Error::DuplicateArtwork(7);
    let err: ArtVisionError = common_err.into();

    assert!(matches!(err, ArtVisionError::Common(_)));
    let display = format!("{}", err);
    assert!(display.contains("Duplicate artwork id: 7"));
}
