use std::path::PathBuf;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use starknet_core::utils::NonAsciiNameError;

use crate::program::EncodeError;

#[derive(Debug, thiserror::Error)]
pub enum SequencerError {
    #[error("Starknet error: {0:#}")]
    StarknetError(#[from] StarknetError),
    #[error("Hyper error: {0:#}")]
    HyperError(#[from] hyper::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(url::Url),
    #[error("Failed to build URL: {0:#}")]
    UrlParse(#[from] url::ParseError),
    #[error("HTTP error: {0:#}")]
    HttpError(#[from] http::Error),
    #[error("Error calling HTTP client: {0:#}")]
    HttpCallError(Box<dyn std::error::Error + Send + Sync>),
    #[error("Error deserializing response: {serde_error:#}")]
    DeserializeBody { serde_error: serde_json::Error },
    #[error("Error serializing request: {0:#}")]
    SerializeRequest(#[source] serde_json::Error),
    #[error("Invalid entry point name: {0:#}")]
    InvalidEntryPointName(#[from] NonAsciiNameError),
    #[error("Failed to read contract file {path:?}: {source:#}")]
    ReadContractFile { path: PathBuf, source: std::io::Error },
    #[error("Invalid contract definition: {0:#}")]
    InvalidContractDefinition(#[source] serde_json::Error),
    #[error("Error encoding contract program: {0:#}")]
    EncodeProgram(#[from] EncodeError),
    #[error("Failed to parse returned error with http status {http_status}: {serde_error:#}")]
    InvalidStarknetError { http_status: StatusCode, serde_error: serde_json::Error },
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct StarknetError {
    pub code: StarknetErrorCode,
    pub message: String,
}

mod err {
    pub(crate) const RATE_LIMITED: &str = "Too many requests";
}

impl StarknetError {
    pub fn new(code: StarknetErrorCode, message: String) -> Self {
        Self { code, message }
    }

    pub fn rate_limited() -> Self {
        Self { code: StarknetErrorCode::RateLimited, message: err::RATE_LIMITED.to_string() }
    }
}

impl std::error::Error for StarknetError {}

impl std::fmt::Display for StarknetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum StarknetErrorCode {
    #[serde(rename = "StarknetErrorCode.BLOCK_NOT_FOUND")]
    BlockNotFound,
    #[serde(rename = "StarknetErrorCode.ENTRY_POINT_NOT_FOUND_IN_CONTRACT")]
    EntryPointNotFound,
    #[serde(rename = "StarknetErrorCode.OUT_OF_RANGE_CONTRACT_ADDRESS")]
    OutOfRangeContractAddress,
    #[serde(rename = "StarkErrorCode.SCHEMA_VALIDATION_ERROR")]
    SchemaValidationError,
    #[serde(rename = "StarknetErrorCode.TRANSACTION_FAILED")]
    TransactionFailed,
    #[serde(rename = "StarknetErrorCode.UNINITIALIZED_CONTRACT")]
    UninitializedContract,
    #[serde(rename = "StarknetErrorCode.OUT_OF_RANGE_BLOCK_HASH")]
    OutOfRangeBlockHash,
    #[serde(rename = "StarkErrorCode.MALFORMED_REQUEST")]
    MalformedRequest,
    #[serde(rename = "StarknetErrorCode.INVALID_CONTRACT_DEFINITION")]
    InvalidContractDefinition,
    #[serde(rename = "StarknetErrorCode.NON_PERMITTED_CONTRACT")]
    NotPermittedContract,
    #[serde(rename = "StarknetErrorCode.TRANSACTION_LIMIT_EXCEEDED")]
    TransactionLimitExceeded,
    #[serde(rename = "StarknetErrorCode.INVALID_TRANSACTION_NONCE")]
    InvalidTransactionNonce,
    #[serde(rename = "StarknetErrorCode.OUT_OF_RANGE_FEE")]
    OutOfRangeFee,
    #[serde(rename = "StarknetErrorCode.INVALID_TRANSACTION_VERSION")]
    InvalidTransactionVersion,
    #[serde(rename = "StarknetErrorCode.INVALID_PROGRAM")]
    InvalidProgram,
    #[serde(rename = "StarknetErrorCode.DEPRECATED_TRANSACTION")]
    DeprecatedTransaction,
    #[serde(rename = "StarknetErrorCode.INVALID_SIGNATURE")]
    InvalidSignature,
    #[serde(rename = "StarknetErrorCode.INSUFFICIENT_ACCOUNT_BALANCE")]
    InsufficientAccountBalance,
    #[serde(rename = "StarknetErrorCode.INSUFFICIENT_MAX_FEE")]
    InsufficientMaxFee,
    #[serde(rename = "StarknetErrorCode.CONTRACT_BYTECODE_SIZE_TOO_LARGE")]
    ContractBytecodeSizeTooLarge,
    #[serde(rename = "StarknetErrorCode.CONTRACT_CLASS_OBJECT_SIZE_TOO_LARGE")]
    ContractClassObjectSizeTooLarge,
    #[serde(rename = "StarknetErrorCode.DUPLICATED_TRANSACTION")]
    DuplicatedTransaction,
    #[serde(rename = "StarknetErrorCode.RATE_LIMITED")]
    RateLimited,
}
