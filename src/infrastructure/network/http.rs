// HTTP client utilities
use crate::domain::error::KelimeError;
use crate::infrastructure::config::Config;
use reqwest::{Client, Proxy};
use std::time::Duration;

const USER_AGENT: &str = concat!("kelime/", env!("CARGO_PKG_VERSION"));

/// Create the shared HTTP client. Timeouts and proxying live here, the
/// engine itself never retries or times out.
pub fn create_client(config: &Config) -> Result<Client, KelimeError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(config.providers.timeout_secs))
        .user_agent(USER_AGENT);

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
