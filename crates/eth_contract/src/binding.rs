use crate::{
    BindingError, CallParams, Config, TransactionParams,
    config::{CallExecutedEventData, EventData, EventType, TransactionSentEventData},
    types::default_gas,
};
use derive_more::Debug;
use eth_contract_abi::{
    ABIValue, AbiSignature, ContractDescriptor, ContractFunction, Function, FunctionReturn,
    LogEntry,
};
use eth_rpc_client::{BlockchainClient, CallRequest, TransactionRequest};
use log::{debug, info};
use std::sync::Arc;

/// A contract descriptor bound to a deployed address and a client.
///
/// The descriptor is shared; any number of bindings may point at the same one.
#[derive(Debug, Clone)]
pub struct ContractBinding {
    contract: Arc<ContractDescriptor>,
    address: String,
    #[debug(skip)]
    client: Arc<dyn BlockchainClient>,
}

impl ContractBinding {
    pub fn new(
        contract: Arc<ContractDescriptor>,
        address: &str,
        client: Arc<dyn BlockchainClient>,
    ) -> Self {
        Self {
            contract,
            address: address.to_string(),
            client,
        }
    }

    pub fn contract(&self) -> &Arc<ContractDescriptor> {
        &self.contract
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn client(&self) -> &Arc<dyn BlockchainClient> {
        &self.client
    }

    fn function_entry(&self, name: &str) -> Result<&ContractFunction, BindingError> {
        self.contract
            .function(name)
            .ok_or_else(|| BindingError::FunctionNotFoundError {
                name: name.to_string(),
            })
    }

    fn prepare(&self, name: &str, args: &[ABIValue]) -> Result<(&Function, Vec<u8>), BindingError> {
        let function = self.function_entry(name)?.resolve(args)?;
        let call_data = function.build_call_data(args)?;
        if Config::debug() {
            debug!(
                "Encoded {} for {}: {}",
                function.signature(),
                self.address,
                hex::encode(&call_data)
            );
        }
        Ok((function, call_data))
    }

    /// Calls `name` without a transaction and returns the undecoded result.
    pub async fn call_raw(
        &self,
        name: &str,
        args: &[ABIValue],
        params: CallParams,
    ) -> Result<Vec<u8>, BindingError> {
        let (_, result) = self.execute_call(name, args, params).await?;
        Ok(result)
    }

    /// Calls `name` without a transaction and decodes the result.
    ///
    /// A single output is unwrapped unless `params.raw` is set.
    pub async fn call(
        &self,
        name: &str,
        args: &[ABIValue],
        params: CallParams,
    ) -> Result<FunctionReturn, BindingError> {
        let raw = params.raw;
        let (function, result) = self.execute_call(name, args, params).await?;
        Ok(function.decode_outputs(&result, raw)?)
    }

    async fn execute_call(
        &self,
        name: &str,
        args: &[ABIValue],
        params: CallParams,
    ) -> Result<(&Function, Vec<u8>), BindingError> {
        let (function, call_data) = self.prepare(name, args)?;
        debug!("Calling {} on {}", function.signature(), self.address);

        let request = CallRequest {
            to: self.address.clone(),
            data: call_data.clone(),
            from: params.from,
            gas: params.gas,
            value: params.value,
        };
        let result = self.client.call(request).await?;

        if Config::trace_calls() {
            let event = CallExecutedEventData {
                contract_name: self.contract.name().map(str::to_string),
                address: self.address.clone(),
                signature: function.signature(),
                call_data: hex::encode(&call_data),
                result_length: result.len(),
            };
            Config::events()
                .emit(EventType::CallExecuted, EventData::CallExecuted(event))
                .await;
        }

        Ok((function, result))
    }

    /// Sends a transaction invoking `name` and returns its hash.
    ///
    /// Without `params.gas`, the gas is [`crate::GAS_LIMIT_FRACTION`] of the client's maximum.
    pub async fn send_transaction(
        &self,
        name: &str,
        args: &[ABIValue],
        params: TransactionParams,
    ) -> Result<String, BindingError> {
        let (function, call_data) = self.prepare(name, args)?;

        let gas = match params.gas {
            Some(gas) => gas,
            None => {
                let max_gas = self.client.get_max_gas().await?;
                let gas = default_gas(max_gas);
                debug!("Using default gas {} of block limit {}", gas, max_gas);
                gas
            }
        };

        let request = TransactionRequest {
            to: self.address.clone(),
            data: call_data.clone(),
            from: params.from,
            gas: Some(gas),
            gas_price: params.gas_price,
            value: params.value,
        };
        let transaction_hash = self.client.send_transaction(request).await?;
        info!(
            "Sent {} to {}: {}",
            function.signature(),
            self.address,
            transaction_hash
        );

        if Config::trace_calls() {
            let event = TransactionSentEventData {
                contract_name: self.contract.name().map(str::to_string),
                address: self.address.clone(),
                signature: function.signature(),
                call_data: hex::encode(&call_data),
                gas,
                transaction_hash: transaction_hash.clone(),
            };
            Config::events()
                .emit(EventType::TransactionSent, EventData::TransactionSent(event))
                .await;
        }

        Ok(transaction_hash)
    }

    /// The logs of `transaction_hash` emitted as `event_name`.
    ///
    /// Returns `None` when the client has no receipt for the transaction.
    pub async fn transaction_logs(
        &self,
        event_name: &str,
        transaction_hash: &str,
    ) -> Result<Option<Vec<LogEntry>>, BindingError> {
        let event = self
            .contract
            .event(event_name)
            .ok_or_else(|| BindingError::EventNotFoundError {
                name: event_name.to_string(),
            })?;

        let Some(receipt) = self.client.get_transaction_receipt(transaction_hash).await? else {
            debug!("No receipt for transaction {}", transaction_hash);
            return Ok(None);
        };

        Ok(Some(event.matching_transaction_logs(&receipt.logs)))
    }
}
