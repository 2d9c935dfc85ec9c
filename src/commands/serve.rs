use seobrief::config::Config;
use seobrief::error::{Result, SeoError};
use seobrief::server;

/// Run the HTTP API until Ctrl+C
pub fn cmd_serve(bind: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(bind) = bind {
        config.bind = bind;
    }
    // Fail on a bad address before starting the runtime
    config.bind_addr()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| SeoError::ServerError(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(server::serve(&config))
}
