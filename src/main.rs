use anyhow::Result;

use sinsane::config::Config;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Worker thread count comes from config, so build the runtime by hand.
    let config = Config::load()?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    if config.general.worker_threads > 0 {
        builder.worker_threads(config.general.worker_threads);
    }

    builder.enable_all().build()?.block_on(sinsane::run())
}
