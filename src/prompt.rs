//! 対話式の投稿フォーム入力

use crate::error::{ArtVisionError, Result};
use crate::submission::{attachment_from_path, validate::is_valid_email};
use art_vision_common::SubmissionForm;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

fn ask(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| ArtVisionError::Prompt(e.to_string()))
}

/// 各項目を順に入力してフォームを作る
pub fn prompt_form() -> Result<SubmissionForm> {
    let mut form = SubmissionForm::default();
    fill_form(&mut form)?;
    Ok(form)
}

/// 空のフォームに各項目を入力する
pub fn fill_form(form: &mut SubmissionForm) -> Result<()> {
    println!("🖼  作品投稿フォーム（すべて必須）\n");

    let title = ask("作品タイトル")?;
    let artist_name = ask("作家名（不明なら「作者不詳」）")?;
    let description = ask("作品の説明（技法・時代・来歴など、詳しいほど解析精度が上がります）")?;
    let submitted_by = ask("あなたの氏名")?;
    let submitted_email = Input::<String>::new()
        .with_prompt("あなたのメールアドレス")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if is_valid_email(input) {
                Ok(())
            } else {
                Err("メールアドレスの形式が不正です")
            }
        })
        .interact_text()
        .map_err(|e| ArtVisionError::Prompt(e.to_string()))?;

    // 画像は正しいパスが入力されるまで繰り返す
    let image = loop {
        let path = PathBuf::from(ask("作品の画像ファイル (jpg/png/webp...)")?);
        match attachment_from_path(&path) {
            Ok(attachment) => break attachment,
            Err(e) => println!("  {}", e),
        }
    };

    *form = SubmissionForm {
        title,
        artist_name,
        description,
        submitted_by,
        submitted_email,
        image: Some(image),
    };
    Ok(())
}

/// 続けて別の作品を投稿するか
pub fn confirm_another() -> Result<bool> {
    Confirm::new()
        .with_prompt("別の作品を投稿しますか？")
        .default(false)
        .interact()
        .map_err(|e| ArtVisionError::Prompt(e.to_string()))
}
