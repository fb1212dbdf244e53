//! API Client Access
//!
//! One client per tab, configured at build time. The client is not `Send`,
//! so it lives in a thread local and components grab a clone per call.

use whitepaperiq_core::{ApiClient, ClientConfig, ReqwestTransport};

use crate::browser::{self, LocalStorage};

pub type Client = ApiClient<ReqwestTransport, LocalStorage>;

thread_local! {
    static CLIENT: Client = build();
}

pub fn config() -> ClientConfig {
    ClientConfig::from_env_values(option_env!("WHITEPAPERIQ_API_URL"), option_env!("WHITEPAPERIQ_APP_ENV"))
}

pub fn log_level() -> tracing::Level {
    if config().log_requests {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

fn build() -> Client {
    let config = config();
    tracing::info!(base_url = %config.base_url, "api client ready");
    ApiClient::new(ReqwestTransport::new(config.base_url.clone()), LocalStorage, config)
        .with_unauthorized_hook(|| browser::redirect("/login"))
}

pub fn client() -> Client {
    CLIENT.with(Clone::clone)
}
