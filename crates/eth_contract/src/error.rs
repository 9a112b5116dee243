use eth_contract_abi::ContractError;
use eth_rpc_client::ClientError;
use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum BindingError {
    #[snafu(display("Contract error: {source}"))]
    ContractError { source: ContractError },
    #[snafu(display("Client error: {source}"))]
    ClientError { source: ClientError },
    #[snafu(display("Function not found: {name}"))]
    FunctionNotFoundError { name: String },
    #[snafu(display("Event not found: {name}"))]
    EventNotFoundError { name: String },
}

impl From<ContractError> for BindingError {
    fn from(e: ContractError) -> Self {
        Self::ContractError { source: e }
    }
}

impl From<ClientError> for BindingError {
    fn from(e: ClientError) -> Self {
        Self::ClientError { source: e }
    }
}
