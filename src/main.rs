use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use storefront::{cli, config, error, loader, logging, render};
use storefront_common::{PriceBand, RatingBand, SortKey, ViewState};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use loader::{CatalogLoader, CatalogSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::List(args) => {
            let source = CatalogSource::parse(
                args.source.as_deref().unwrap_or(&config.endpoint()),
            );
            let mut state = ViewState::new().with_sort(config.default_sort);

            let spinner = loading_spinner(&source);
            state.apply(CatalogLoader::new(source).run().await);
            spinner.finish_and_clear();

            for action in args.actions() {
                tracing::debug!(?action, "apply");
                state.apply(action);
            }

            let displayed = state.displayed();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&displayed)?);
            } else {
                print!("{}", render::render_page(&state, &displayed, render::terminal_width()));
            }
        }

        Commands::Options => {
            println!("価格帯:");
            for band in &PriceBand::ALL {
                match band.max() {
                    Some(max) => println!("  {:<10} {:.0} 〜 {:.0}", band.label(), band.min(), max),
                    None => println!("  {:<10} {:.0} 〜", band.label(), band.min()),
                }
            }
            println!("評価帯:");
            for band in &RatingBand::ALL {
                println!("  {:<10} {:.0} 以上", band.label(), band.min());
            }
            println!("並び順:");
            for key in SortKey::ALL {
                println!("  {:<16} {}", key.as_str(), key.display_name());
            }
        }

        Commands::Config { set_endpoint, set_default_sort, show } => {
            let mut config = config;

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(sort) = set_default_sort {
                config.set_default_sort(sort)?;
                println!("✔ 既定の並び順を設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint());
                println!("  既定の並び順: {}", config.default_sort);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn loading_spinner(source: &CatalogSource) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("商品一覧を取得中... {}", source));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
