use clap::{Parser, Subcommand};
use fortune_common::{CategoryKey, Locale, Meridiem};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fortune")]
#[command(about = "AI運勢解析ツール（8カテゴリを順番に解析）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名前と生年月日から運勢を解析
    Analyze {
        /// 名前
        #[arg(short, long)]
        name: Option<String>,

        /// 生年月日 (YYYY-MM-DD)
        #[arg(short, long)]
        dob: Option<String>,

        /// 出生時刻の時 (1-12)
        #[arg(long)]
        hour: Option<String>,

        /// 出生時刻の分 (0-59)
        #[arg(long)]
        minute: Option<String>,

        /// 午前/午後 (am/pm)
        #[arg(long, default_value = "am")]
        meridiem: Meridiem,

        /// 顔写真ファイル（任意）
        #[arg(short, long)]
        photo: Option<PathBuf>,

        /// 表示言語 (ko/en/zh)。省略時は設定ファイルの値
        #[arg(short, long)]
        locale: Option<Locale>,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 不足している項目を対話的に入力
        #[arg(short, long)]
        interactive: bool,
    },

    /// 保存済みの結果JSONを表示
    Show {
        /// 結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 詳細を表示するカテゴリ
        #[arg(short, long)]
        category: Option<CategoryKey>,

        /// 表示言語 (ko/en/zh)
        #[arg(short, long)]
        locale: Option<Locale>,

        /// 前後のカテゴリを循環しながら閲覧
        #[arg(short, long)]
        interactive: bool,
    },

    /// 設定を管理
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
