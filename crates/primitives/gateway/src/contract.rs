use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use starknet_core::types::Felt;

use crate::program::{decode_program, encode_program, DecodeError, EncodeError};

/// A single ABI entry. ABI entries are passed through to the gateway untouched.
pub type AbiEntry = serde_json::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryPointType {
    Constructor,
    External,
    L1Handler,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub selector: Felt,
    pub offset: Felt,
}

pub type EntryPointsByType = BTreeMap<EntryPointType, Vec<EntryPoint>>;

/// A compiled contract as found in a compilation artifact, with its program still in plain json.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawContractDefinition {
    #[serde(default)]
    pub abi: Vec<AbiEntry>,
    pub entry_points_by_type: EntryPointsByType,
    pub program: serde_json::Value,
}

impl RawContractDefinition {
    pub fn from_artifact_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Encodes the program for transport. The abi and entry points are carried over as is.
    pub fn compress(self) -> Result<ContractDefinition, EncodeError> {
        let program = encode_program(&self.program)?;
        Ok(ContractDefinition { abi: self.abi, entry_points_by_type: self.entry_points_by_type, program })
    }
}

/// A contract definition ready to be embedded in a deploy transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractDefinition {
    pub abi: Vec<AbiEntry>,
    pub entry_points_by_type: EntryPointsByType,
    /// base64(gzip(json(program)))
    pub program: String,
}

impl ContractDefinition {
    pub fn decode_program(&self) -> Result<serde_json::Value, DecodeError> {
        decode_program(&self.program)
    }

    pub fn decompress(self) -> Result<RawContractDefinition, DecodeError> {
        let program = self.decode_program()?;
        Ok(RawContractDefinition { abi: self.abi, entry_points_by_type: self.entry_points_by_type, program })
    }
}
