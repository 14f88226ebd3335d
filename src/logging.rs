//! ログ初期化

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` があればそれに従い、なければ `verbose` に応じて debug / warn。
///
/// 2回目以降の呼び出しは何もしない。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
