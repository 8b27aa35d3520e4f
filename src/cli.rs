use art_vision_common::SortKey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "art-vision")]
#[command(about = "美術作品カタログ閲覧・AI解析シミュレーションツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（省略時は設定値、なければ組み込みサンプル）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 作品を検索・絞り込み表示
    Browse {
        /// 検索語（タイトル・作家・時代）
        #[arg(short, long, default_value = "")]
        query: String,

        /// 時代で絞り込み（"all" で解除）
        #[arg(long)]
        period: Option<String>,

        /// 作家で絞り込み
        #[arg(long)]
        artist: Option<String>,

        /// 技法で絞り込み
        #[arg(long)]
        technique: Option<String>,

        /// 並び順 (recent/name/artist/period/value)
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 絞り込みに使える時代・作家・技法の一覧
    Facets {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 作品の詳細とAI解析を表示
    Show {
        /// 作品ID
        #[arg(required = true)]
        id: u32,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// コレクション統計
    Insights {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 作品を投稿してAI解析（シミュレーション）を受ける
    Submit {
        /// 作品タイトル
        #[arg(long)]
        title: Option<String>,

        /// 作家名
        #[arg(long)]
        artist: Option<String>,

        /// 作品の説明（技法・時代・来歴など）
        #[arg(short, long)]
        description: Option<String>,

        /// 投稿者名
        #[arg(long)]
        submitter: Option<String>,

        /// 投稿者メールアドレス
        #[arg(long)]
        email: Option<String>,

        /// 作品の画像ファイル
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// 解析結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 対話形式で入力
        #[arg(short = 'I', long)]
        interactive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のカタログJSONを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 揺らぎの乱数シードを設定
        #[arg(long)]
        set_seed: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
