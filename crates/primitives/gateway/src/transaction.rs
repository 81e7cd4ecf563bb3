use serde::{Deserialize, Serialize};
use starknet_core::types::Felt;
use starknet_core::utils::{get_selector_from_name, NonAsciiNameError};

use crate::contract::ContractDefinition;

/// A read-only call to a contract function, addressed by entry point name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionCall {
    pub contract_address: Felt,
    pub entry_point: String,
    pub calldata: Vec<Felt>,
}

impl FunctionCall {
    pub fn new(contract_address: Felt, entry_point: impl Into<String>, calldata: Vec<Felt>) -> Self {
        Self { contract_address, entry_point: entry_point.into(), calldata }
    }

    pub fn into_request(self) -> Result<CallContractRequest, NonAsciiNameError> {
        Ok(CallContractRequest {
            contract_address: self.contract_address,
            entry_point_selector: get_selector_from_name(&self.entry_point)?,
            calldata: self.calldata,
            signature: Vec::new(),
        })
    }
}

/// Body of a feeder gateway `call_contract` request.
///
/// `calldata` and `signature` are always serialized, an empty list is sent as `[]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContractRequest {
    pub contract_address: Felt,
    pub entry_point_selector: Felt,
    pub calldata: Vec<Felt>,
    pub signature: Vec<Felt>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContractResponse {
    pub result: Vec<Felt>,
}

/// An invoke transaction, addressed by entry point name. Signing happens upstream: the
/// signature is sent as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvokeFunction {
    pub contract_address: Felt,
    pub entry_point: String,
    pub calldata: Vec<Felt>,
    pub signature: Vec<Felt>,
    pub max_fee: Felt,
    pub nonce: Option<Felt>,
}

impl InvokeFunction {
    pub fn into_transaction(self) -> Result<GatewayTransaction, NonAsciiNameError> {
        Ok(GatewayTransaction::InvokeFunction(InvokeFunctionTransaction {
            contract_address: self.contract_address,
            entry_point_selector: get_selector_from_name(&self.entry_point)?,
            calldata: self.calldata,
            signature: self.signature,
            max_fee: self.max_fee,
            nonce: self.nonce,
            version: Felt::ZERO,
        }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeFunctionTransaction {
    pub contract_address: Felt,
    pub entry_point_selector: Felt,
    pub calldata: Vec<Felt>,
    pub signature: Vec<Felt>,
    pub max_fee: Felt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Felt>,
    pub version: Felt,
}

/// Parameters of a deploy transaction that do not come from the contract artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeployParams {
    pub contract_address_salt: Felt,
    pub constructor_calldata: Vec<Felt>,
}

impl DeployParams {
    pub fn into_transaction(self, contract_definition: ContractDefinition) -> GatewayTransaction {
        GatewayTransaction::Deploy(DeployTransaction {
            contract_address_salt: self.contract_address_salt,
            constructor_calldata: self.constructor_calldata,
            contract_definition,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeployTransaction {
    pub contract_address_salt: Felt,
    pub constructor_calldata: Vec<Felt>,
    pub contract_definition: ContractDefinition,
}

/// Body of a gateway `add_transaction` request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayTransaction {
    InvokeFunction(InvokeFunctionTransaction),
    Deploy(DeployTransaction),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTransactionResponse {
    pub code: String,
    pub transaction_hash: Felt,
    /// Set for deploy transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Felt>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::contract::RawContractDefinition;
    use crate::test::test_serialize_deserialize;

    #[test]
    fn call_request_hashes_entry_point_and_keeps_empty_lists() {
        let call = FunctionCall::new(Felt::from(0x1234u64), "get_balance", vec![]);
        let request = call.into_request().unwrap();

        assert_eq!(request.entry_point_selector, get_selector_from_name("get_balance").unwrap());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contract_address": "0x1234",
                "entry_point_selector": format!("{:#x}", request.entry_point_selector),
                "calldata": [],
                "signature": []
            })
        );
    }

    #[test]
    fn call_request_rejects_non_ascii_entry_point() {
        let call = FunctionCall::new(Felt::ONE, "bälance", vec![]);
        assert!(call.into_request().is_err());
    }

    #[test]
    fn invoke_transaction_is_tagged_and_keeps_empty_lists() {
        let invoke = InvokeFunction {
            contract_address: Felt::from(0x1234u64),
            entry_point: "increase_balance".to_string(),
            calldata: vec![],
            signature: vec![],
            max_fee: Felt::ZERO,
            nonce: None,
        };
        let transaction = serde_json::to_value(invoke.into_transaction().unwrap()).unwrap();

        assert_eq!(transaction["type"], json!("INVOKE_FUNCTION"));
        assert_eq!(transaction["calldata"], json!([]));
        assert_eq!(transaction["signature"], json!([]));
        assert_eq!(transaction["version"], json!("0x0"));
        assert!(transaction.get("nonce").is_none());
        assert_eq!(
            transaction["entry_point_selector"],
            json!(format!("{:#x}", get_selector_from_name("increase_balance").unwrap()))
        );
    }

    #[test]
    fn deploy_transaction_is_tagged_and_keeps_empty_constructor_calldata() {
        let raw = RawContractDefinition {
            abi: vec![],
            entry_points_by_type: Default::default(),
            program: json!({ "data": ["0x1"] }),
        };
        let transaction = DeployParams::default().into_transaction(raw.compress().unwrap());
        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(value["type"], json!("DEPLOY"));
        assert_eq!(value["constructor_calldata"], json!([]));
        assert_eq!(value["contract_address_salt"], json!("0x0"));
        assert!(value["contract_definition"]["program"].is_string());

        test_serialize_deserialize(transaction);
    }

    #[test]
    fn add_transaction_response_address_is_optional() {
        let invoke: AddTransactionResponse =
            serde_json::from_value(json!({ "code": "TRANSACTION_RECEIVED", "transaction_hash": "0xabc" })).unwrap();
        assert_eq!(invoke.address, None);

        let deploy: AddTransactionResponse = serde_json::from_value(json!({
            "code": "TRANSACTION_RECEIVED",
            "transaction_hash": "0xabc",
            "address": "0x5"
        }))
        .unwrap();
        assert_eq!(deploy.address, Some(Felt::from(5u64)));
    }
}
