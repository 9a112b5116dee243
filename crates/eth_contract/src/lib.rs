pub mod binding;
pub mod config;
pub mod error;
pub mod types;

pub use binding::ContractBinding;
pub use config::{
    AsyncEventEmitter, CallExecutedEventData, Config, EventData, EventType,
    TransactionSentEventData,
};
pub use error::BindingError;
pub use types::{CallParams, GAS_LIMIT_FRACTION, TransactionParams};

pub use eth_contract_abi::{ABIValue, ContractDescriptor, FunctionReturn, LogEntry};
pub use eth_rpc_client::{BlockchainClient, CallRequest, ClientError, TransactionRequest};
#[cfg(feature = "default_rpc_client")]
pub use eth_rpc_client::{DefaultRpcClient, RpcConfig};
