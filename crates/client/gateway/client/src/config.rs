use std::time::Duration;

use anyhow::Context;
use http::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use sg_gateway::ChainId;
use url::Url;

use crate::GatewayProvider;

/// Default timeout applied to every gateway request, in seconds.
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 20;

/// Immutable configuration of a [`GatewayProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    pub gateway_url: Url,
    pub feeder_gateway_url: Url,
    pub chain_id: ChainId,
    pub request_timeout: Duration,
}

impl GatewayConfig {
    pub fn new(gateway_url: Url, feeder_gateway_url: Url, chain_id: ChainId) -> Self {
        Self {
            gateway_url,
            feeder_gateway_url,
            chain_id,
            request_timeout: Duration::from_secs(DEFAULT_GATEWAY_TIMEOUT_SECS),
        }
    }

    /// Derives `{base}/gateway/` and `{base}/feeder_gateway/` from a single base url.
    pub fn from_base_url(base_url: &Url, chain_id: ChainId) -> Result<Self, url::ParseError> {
        Ok(Self::new(base_url.join("/gateway/")?, base_url.join("/feeder_gateway/")?, chain_id))
    }

    pub fn with_request_timeout(self, request_timeout: Duration) -> Self {
        Self { request_timeout, ..self }
    }

    pub fn starknet_alpha_mainnet() -> Self {
        Self::new(
            Url::parse("https://alpha-mainnet.starknet.io/gateway/")
                .expect("Failed to parse Starknet Alpha Mainnet gateway url. This should not fail in prod."),
            Url::parse("https://alpha-mainnet.starknet.io/feeder_gateway/")
                .expect("Failed to parse Starknet Alpha Mainnet feeder gateway url. This should not fail in prod."),
            ChainId::mainnet(),
        )
    }

    pub fn starknet_alpha_sepolia() -> Self {
        Self::new(
            Url::parse("https://alpha-sepolia.starknet.io/gateway/")
                .expect("Failed to parse Starknet Alpha Sepolia gateway url. This should not fail in prod."),
            Url::parse("https://alpha-sepolia.starknet.io/feeder_gateway/")
                .expect("Failed to parse Starknet Alpha Sepolia feeder gateway url. This should not fail in prod."),
            ChainId::sepolia(),
        )
    }

    pub fn starknet_integration_sepolia() -> Self {
        Self::new(
            Url::parse("https://integration-sepolia.starknet.io/gateway/")
                .expect("Failed to parse Starknet Integration Sepolia gateway url. This should not fail in prod."),
            Url::parse("https://integration-sepolia.starknet.io/feeder_gateway/").expect(
                "Failed to parse Starknet Integration Sepolia feeder gateway url. This should not fail in prod.",
            ),
            ChainId::integration_sepolia(),
        )
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    Mainnet,
    #[default]
    Sepolia,
    IntegrationSepolia,
}

impl Network {
    pub fn config(&self) -> GatewayConfig {
        match self {
            Network::Mainnet => GatewayConfig::starknet_alpha_mainnet(),
            Network::Sepolia => GatewayConfig::starknet_alpha_sepolia(),
            Network::IntegrationSepolia => GatewayConfig::starknet_integration_sepolia(),
        }
    }
}

/// Parameters used to configure the gateway client.
#[derive(Clone, Debug, clap::Args, Deserialize, Serialize)]
pub struct GatewayParams {
    /// Starknet network whose public gateway is used when no gateway url is given.
    #[arg(env = "SG_NETWORK", long, value_enum, default_value_t = Network::Sepolia)]
    pub network: Network,

    /// Base url of a custom gateway. `/gateway/` and `/feeder_gateway/` are appended to it.
    #[arg(env = "SG_GATEWAY_URL", long, value_name = "URL")]
    pub gateway_url: Option<Url>,

    /// Chain id of the custom gateway. Defaults to the chain id of the selected network.
    #[arg(env = "SG_CHAIN_ID", long, value_name = "CHAIN ID")]
    pub chain_id: Option<String>,

    /// Gateway api key to avoid rate limiting (optional).
    #[arg(env = "SG_GATEWAY_KEY", long, value_name = "API KEY")]
    pub gateway_key: Option<String>,

    /// Timeout of a single gateway request, in seconds.
    #[arg(env = "SG_GATEWAY_TIMEOUT", long, value_name = "SECONDS", default_value_t = DEFAULT_GATEWAY_TIMEOUT_SECS)]
    pub gateway_timeout: u64,
}

impl GatewayParams {
    pub fn gateway_config(&self) -> anyhow::Result<GatewayConfig> {
        let network_config = self.network.config();
        let chain_id = self.chain_id.clone().map(ChainId::from).unwrap_or_else(|| network_config.chain_id.clone());

        let config = match &self.gateway_url {
            Some(url) => GatewayConfig::from_base_url(url, chain_id)
                .with_context(|| format!("Invalid gateway url {url}"))?,
            None => GatewayConfig { chain_id, ..network_config },
        };

        Ok(config.with_request_timeout(Duration::from_secs(self.gateway_timeout)))
    }

    pub fn create_client(&self) -> anyhow::Result<GatewayProvider> {
        let config = self.gateway_config()?;
        tracing::debug!(
            gateway_url = %config.gateway_url,
            feeder_gateway_url = %config.feeder_gateway_url,
            chain_id = %config.chain_id,
            "Creating gateway client"
        );

        let mut client = GatewayProvider::new(config);

        if let Some(api_key) = &self.gateway_key {
            client.add_header(
                HeaderName::from_static("x-throttling-bypass"),
                HeaderValue::from_str(api_key).with_context(|| "Invalid API key format")?,
            )
        }

        Ok(client)
    }
}
