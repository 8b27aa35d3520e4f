//! ログ初期化
//!
//! 結果表示は標準出力、ログは標準エラーに分ける。
//! RUST_LOG が設定されていればそれを優先する。

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("art_vision={}", default_level)));

    // 二重初期化（テスト等）は無視
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
