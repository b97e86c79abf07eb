use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "fortune_teller=info,fortune_common=info";
const VERBOSE_FILTER: &str = "fortune_teller=debug,fortune_common=debug";

/// ログ出力を初期化（stderr）
///
/// `RUST_LOG` があればそれを優先する。
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
