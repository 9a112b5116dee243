use async_trait::async_trait;
use eth_contract_abi::TransactionReceipt;
use snafu::Snafu;

mod config;
mod json_rpc;

pub use config::RpcConfig;
pub use json_rpc::{JsonRpcRequest, JsonRpcResponse, RpcErrorObject};

#[cfg(feature = "default_client")]
mod default_client;
#[cfg(feature = "default_client")]
pub use default_client::DefaultRpcClient;

#[derive(Debug, Snafu)]
pub enum ClientError {
    #[snafu(display("RequestError: {message}"))]
    RequestError { message: String },

    #[snafu(display("RpcError {code}: {message}"))]
    RpcError { code: i64, message: String },

    #[snafu(display("ResponseError: {message}"))]
    ResponseError { message: String },
}

/// A read-only call against a deployed contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallRequest {
    pub to: String,
    pub data: Vec<u8>,
    pub from: Option<String>,
    pub gas: Option<u64>,
    pub value: Option<u128>,
}

/// A state-changing transaction against a deployed contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRequest {
    pub to: String,
    pub data: Vec<u8>,
    pub from: Option<String>,
    pub gas: Option<u64>,
    pub gas_price: Option<u128>,
    pub value: Option<u128>,
}

#[async_trait]
/// This trait must be implemented by any blockchain client used by contract bindings.
/// It is assumed the implementing type knows its endpoint and credentials.
///
/// By default, this trait requires the implementing type to be `Send + Sync`.
pub trait BlockchainClient: Send + Sync {
    /// Executes a call without creating a transaction and returns the raw result bytes.
    async fn call(&self, request: CallRequest) -> Result<Vec<u8>, ClientError>;

    /// Submits a transaction and returns its hash.
    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, ClientError>;

    /// The receipt for `transaction_hash`, or `None` while it is unknown or pending.
    async fn get_transaction_receipt(
        &self,
        transaction_hash: &str,
    ) -> Result<Option<TransactionReceipt>, ClientError>;

    /// The gas limit of the latest block.
    async fn get_max_gas(&self) -> Result<u64, ClientError>;
}
