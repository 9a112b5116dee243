use crate::{ContractError, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single input or output entry as it appears in an interface description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParamRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
}

/// A named, typed parameter of a function or event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// The parameter name, possibly empty.
    pub name: String,
    /// The declared type.
    pub abi_type: TypeDescriptor,
    /// Whether the parameter is stored in a log topic (events only).
    pub indexed: bool,
}

impl ParamDescriptor {
    pub fn new(name: &str, abi_type: TypeDescriptor, indexed: bool) -> Self {
        Self {
            name: name.to_string(),
            abi_type,
            indexed,
        }
    }

    /// Parses `type_string` into a non-indexed parameter.
    pub fn parse(name: &str, type_string: &str) -> Result<Self, ContractError> {
        Ok(Self::new(name, TypeDescriptor::from_str(type_string)?, false))
    }

    /// Parses `type_string` into an indexed event parameter.
    pub fn indexed(name: &str, type_string: &str) -> Result<Self, ContractError> {
        Ok(Self::new(name, TypeDescriptor::from_str(type_string)?, true))
    }
}

impl TryFrom<&ParamRecord> for ParamDescriptor {
    type Error = ContractError;

    fn try_from(record: &ParamRecord) -> Result<Self, Self::Error> {
        let abi_type = TypeDescriptor::from_str(&record.type_string)?;
        Ok(Self::new(
            &record.name,
            abi_type,
            record.indexed.unwrap_or(false),
        ))
    }
}

pub(crate) fn parse_params(records: &[ParamRecord]) -> Result<Vec<ParamDescriptor>, ContractError> {
    records.iter().map(ParamDescriptor::try_from).collect()
}
