use std::fmt;

use serde::{Deserialize, Serialize};
use starknet_core::types::Felt;
use starknet_core::utils::{cairo_short_string_to_felt, CairoShortStringToFeltError};

/// Starknet chain identifier, a Cairo short string such as `SN_MAIN`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
    pub fn mainnet() -> Self {
        Self("SN_MAIN".to_string())
    }

    pub fn sepolia() -> Self {
        Self("SN_SEPOLIA".to_string())
    }

    pub fn integration_sepolia() -> Self {
        Self("SN_INTEGRATION_SEPOLIA".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_felt(&self) -> Result<Felt, CairoShortStringToFeltError> {
        cairo_short_string_to_felt(&self.0)
    }
}

impl From<String> for ChainId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ChainId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
