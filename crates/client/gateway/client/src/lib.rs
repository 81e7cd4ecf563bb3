mod builder;
mod config;
mod methods;
mod request_builder;

pub use sg_gateway::contract::{ContractDefinition, RawContractDefinition};
pub use sg_gateway::error::{SequencerError, StarknetError, StarknetErrorCode};
pub use sg_gateway::transaction::{
    AddTransactionResponse, DeployParams, FunctionCall, GatewayTransaction, InvokeFunction,
};
pub use sg_gateway::{BlockId, BlockTag, ChainId};

pub use builder::GatewayProvider;
pub use config::{GatewayConfig, GatewayParams, Network, DEFAULT_GATEWAY_TIMEOUT_SECS};
