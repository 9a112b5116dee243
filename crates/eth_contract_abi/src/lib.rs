//! Contract interface metadata for Ethereum ABI descriptions: signatures, overload resolution,
//! call data encoding and return/log decoding.
pub mod abi_type;
pub mod abi_value;
pub mod codec;
pub mod constants;
pub mod contract;
pub mod error;
pub mod event;
pub mod function;
pub mod function_group;
pub mod param;
pub mod signature;
pub mod utils;
pub mod validation;

pub use abi_type::TypeDescriptor;
pub use abi_value::ABIValue;
pub use contract::{
    ContractArtifacts, ContractDescriptor, DescriptionRecord, ParsedDescription,
    get_contract_name_from_source, parse_contract_abi,
};
pub use error::ContractError;
pub use event::{Event, LogEntry, TransactionReceipt};
pub use function::{Function, FunctionReturn};
pub use function_group::{ContractFunction, FunctionGroup};
pub use param::{ParamDescriptor, ParamRecord};
pub use signature::AbiSignature;
pub use validation::is_encodable;
