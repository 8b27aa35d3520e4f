//! 投稿フォームの検証
//!
//! 必須項目 → メール形式 → 画像の有無 → 画像形式 の順に検査し、最初の違反を返す。

use crate::error::{ArtVisionError, Result, ValidationError};
use art_vision_common::{ImageAttachment, SubmissionForm};
use image::ImageFormat;
use regex::Regex;
use std::path::Path;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn validate_form(form: &SubmissionForm) -> std::result::Result<(), ValidationError> {
    let required = [
        ("title", &form.title),
        ("artist_name", &form.artist_name),
        ("description", &form.description),
        ("submitted_by", &form.submitted_by),
        ("submitted_email", &form.submitted_email),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(name));
        }
    }

    if !is_valid_email(&form.submitted_email) {
        return Err(ValidationError::InvalidEmail(form.submitted_email.clone()));
    }

    let image = form.image.as_ref().ok_or(ValidationError::MissingImage)?;
    if !is_image_path(Path::new(&image.path)) {
        return Err(ValidationError::UnsupportedImage(image.path.clone()));
    }

    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// 拡張子から画像形式を判定できるか
pub fn is_image_path(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok()
}

/// ファイルパスから添付画像を作る
pub fn attachment_from_path(path: &Path) -> Result<ImageAttachment> {
    if !path.is_file() {
        return Err(ArtVisionError::FileNotFound(path.display().to_string()));
    }
    if !is_image_path(path) {
        return Err(ValidationError::UnsupportedImage(path.display().to_string()).into());
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ImageAttachment {
        file_name,
        path: path.display().to_string(),
    })
}
