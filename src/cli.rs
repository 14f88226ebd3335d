use clap::{Args, Parser, Subcommand};
use storefront_common::{Action, FilterGroup, PriceBand, RatingBand, SortKey};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "商品一覧の検索・絞り込み・並べ替えビュー", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品一覧を取得して表示
    List(ListArgs),

    /// 指定可能な価格帯・評価帯・並び順を表示
    Options,

    /// 設定を表示/編集
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 既定の並び順を設定
        #[arg(long)]
        set_default_sort: Option<SortKey>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// タイトル検索（大文字小文字を区別しない部分一致）
    #[arg(short, long)]
    pub search: Option<String>,

    /// カテゴリ（複数指定可、同じ値を2回指定すると解除）
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// 価格帯 ($0-$50 / $50-$100 / $100-$200 / $200+)
    #[arg(short, long = "price")]
    pub prices: Vec<PriceBand>,

    /// 評価帯 (5 / 4+ / 3+ / 2+ / 1+)
    #[arg(short, long = "rating")]
    pub ratings: Vec<RatingBand>,

    /// 並び順 (popularity / price-low-high / price-high-low / rating)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// 取得元（URLまたはJSONファイル、省略時は設定のエンドポイント）
    #[arg(long)]
    pub source: Option<String>,

    /// 表示リストをJSONで出力
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// 指定されたフラグを、画面操作と同じイベント列に変換
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        if let Some(search) = &self.search {
            actions.push(Action::SetSearch(search.clone()));
        }
        for category in &self.categories {
            actions.push(Action::ToggleFilter {
                group: FilterGroup::Category,
                token: category.clone(),
            });
        }
        for band in &self.prices {
            actions.push(Action::ToggleFilter {
                group: FilterGroup::Price,
                token: band.label().to_string(),
            });
        }
        for band in &self.ratings {
            actions.push(Action::ToggleFilter {
                group: FilterGroup::Rating,
                token: band.label().to_string(),
            });
        }
        if let Some(sort) = self.sort {
            actions.push(Action::SetSort(sort));
        }
        actions
    }
}
