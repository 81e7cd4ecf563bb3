use hyper::header::{HeaderMap, HeaderName, HeaderValue};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use sg_gateway::ChainId;
use tower::timeout::Timeout;

use crate::config::GatewayConfig;

type HttpsClient = Client<HttpsConnector<HttpConnector>, String>;
pub type TimeoutClient = Timeout<HttpsClient>;

/// Client for the Starknet gateway (transaction submission) and feeder gateway (state queries).
#[derive(Debug, Clone)]
pub struct GatewayProvider {
    pub(crate) client: TimeoutClient,
    pub(crate) config: GatewayConfig,
    pub(crate) headers: HeaderMap,
}

impl GatewayProvider {
    pub fn new(config: GatewayConfig) -> Self {
        let connector = HttpsConnector::new();
        let base_client = Client::builder(TokioExecutor::new()).build::<_, String>(connector);
        let client = Timeout::new(base_client, config.request_timeout);

        Self { client, config, headers: HeaderMap::new() }
    }

    pub fn new_with_headers(config: GatewayConfig, headers: &[(HeaderName, HeaderValue)]) -> Self {
        let provider = Self::new(config);
        let headers = headers.iter().cloned().collect();

        Self { headers, ..provider }
    }

    pub fn add_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    pub fn remove_header(&mut self, name: HeaderName) -> Option<HeaderValue> {
        self.headers.remove(name)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The chain this client was configured for. Never queries the gateway.
    pub fn chain_id(&self) -> &ChainId {
        &self.config.chain_id
    }

    pub fn starknet_alpha_mainnet() -> Self {
        Self::new(GatewayConfig::starknet_alpha_mainnet())
    }

    pub fn starknet_alpha_sepolia() -> Self {
        Self::new(GatewayConfig::starknet_alpha_sepolia())
    }

    pub fn starknet_integration_sepolia() -> Self {
        Self::new(GatewayConfig::starknet_integration_sepolia())
    }
}
