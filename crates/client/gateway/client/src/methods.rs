use std::path::Path;

use sg_gateway::contract::{ContractDefinition, RawContractDefinition};
use sg_gateway::error::SequencerError;
use sg_gateway::transaction::{
    AddTransactionResponse, CallContractResponse, DeployParams, FunctionCall, GatewayTransaction, InvokeFunction,
};
use sg_gateway::BlockId;
use starknet_core::types::Felt;

use super::{builder::GatewayProvider, request_builder::RequestBuilder};

impl GatewayProvider {
    fn feeder_gateway_request(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.client, self.config.feeder_gateway_url.clone(), self.headers.clone())
    }

    fn gateway_request(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.client, self.config.gateway_url.clone(), self.headers.clone())
    }

    /// Calls a view function on the feeder gateway, against `block_id` if given or the gateway's
    /// default block otherwise.
    #[tracing::instrument(skip(self, call), fields(module = "GatewayClient", entry_point = %call.entry_point))]
    pub async fn call_contract(
        &self,
        call: FunctionCall,
        block_id: Option<BlockId>,
    ) -> Result<Vec<Felt>, SequencerError> {
        let request = call.into_request()?;

        let response: CallContractResponse = self
            .feeder_gateway_request()
            .add_uri_segment("call_contract")?
            .with_block_id(block_id.as_ref())
            .send_post(&request)
            .await?;

        Ok(response.result)
    }

    #[tracing::instrument(skip(self, invoke), fields(module = "GatewayClient", entry_point = %invoke.entry_point))]
    pub async fn add_invoke_transaction(
        &self,
        invoke: InvokeFunction,
    ) -> Result<AddTransactionResponse, SequencerError> {
        let transaction = invoke.into_transaction()?;
        self.add_transaction(&transaction).await
    }

    /// Reads a compiled contract artifact, encodes its program and submits a deploy transaction.
    #[tracing::instrument(
        skip(self, contract_path, deploy),
        fields(module = "GatewayClient", path = %contract_path.as_ref().display())
    )]
    pub async fn add_deploy_transaction(
        &self,
        contract_path: impl AsRef<Path>,
        deploy: DeployParams,
    ) -> Result<AddTransactionResponse, SequencerError> {
        let path = contract_path.as_ref();
        let artifact = tokio::fs::read(path)
            .await
            .map_err(|source| SequencerError::ReadContractFile { path: path.to_path_buf(), source })?;

        let raw_definition =
            RawContractDefinition::from_artifact_bytes(&artifact).map_err(SequencerError::InvalidContractDefinition)?;
        let contract_definition = raw_definition.compress()?;

        self.add_deploy_transaction_from_definition(contract_definition, deploy).await
    }

    pub async fn add_deploy_transaction_from_definition(
        &self,
        contract_definition: ContractDefinition,
        deploy: DeployParams,
    ) -> Result<AddTransactionResponse, SequencerError> {
        let transaction = deploy.into_transaction(contract_definition);
        self.add_transaction(&transaction).await
    }

    pub async fn add_transaction(
        &self,
        transaction: &GatewayTransaction,
    ) -> Result<AddTransactionResponse, SequencerError> {
        let response: AddTransactionResponse =
            self.gateway_request().add_uri_segment("add_transaction")?.send_post(transaction).await?;
        tracing::debug!(
            transaction_hash = %format!("{:#x}", response.transaction_hash),
            code = %response.code,
            "Transaction added"
        );
        Ok(response)
    }
}
