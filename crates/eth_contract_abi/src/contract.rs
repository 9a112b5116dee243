use crate::{
    ContractError, ContractFunction, Event, Function, FunctionGroup,
    constants::{CONSTRUCTOR_ITEM, CONSTRUCTOR_NAME, EVENT_ITEM, FUNCTION_ITEM},
    param::{ParamRecord, parse_params},
    utils::decode_hex,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

const CONTRACT_KEYWORD: &str = "contract";

/// One entry of an interface description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescriptionRecord {
    /// `constructor`, `function` or `event`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<ParamRecord>,
    #[serde(default)]
    pub outputs: Vec<ParamRecord>,
    #[serde(default)]
    pub constant: bool,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payable: Option<bool>,
    #[serde(
        rename = "stateMutability",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub state_mutability: Option<String>,
}

impl DescriptionRecord {
    fn required_name(&self) -> Result<&str, ContractError> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ContractError::InvalidDescriptionError {
                message: format!("A '{}' record requires a name", self.kind),
            })
    }

    fn is_constant(&self) -> bool {
        self.constant
            || matches!(self.state_mutability.as_deref(), Some("view") | Some("pure"))
    }
}

/// Deployment artifacts and an optional display name that accompany an interface description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractArtifacts {
    pub name: Option<String>,
    /// Creation bytecode as hex, with or without `0x`.
    pub code: Option<String>,
    /// Runtime bytecode as hex, with or without `0x`.
    pub runtime_code: Option<String>,
    pub source: Option<String>,
}

/// Parsed interface description entries, before a name and artifacts are attached.
#[derive(Debug, Clone, Default)]
pub struct ParsedDescription {
    pub constructor: Option<Function>,
    pub events: HashMap<String, Event>,
    pub functions: Vec<ContractFunction>,
}

/// Classifies description records into a constructor, events and functions.
///
/// Only the first constructor with inputs is kept. Functions sharing a name are grouped into a
/// [`FunctionGroup`] in description order; the entries keep the order in which each name first
/// appears.
pub fn parse_contract_abi(records: &[DescriptionRecord]) -> Result<ParsedDescription, ContractError> {
    let mut constructor: Option<Function> = None;
    let mut events: HashMap<String, Event> = HashMap::new();
    let mut grouped: Vec<(String, Vec<Function>)> = Vec::new();

    for record in records {
        match record.kind.as_str() {
            CONSTRUCTOR_ITEM => {
                if record.inputs.is_empty() {
                    continue;
                }
                if constructor.is_some() {
                    warn!("Skipping additional constructor record with {} inputs", record.inputs.len());
                    continue;
                }
                constructor = Some(Function::new(
                    CONSTRUCTOR_NAME,
                    parse_params(&record.inputs)?,
                    Vec::new(),
                    false,
                ));
            }
            FUNCTION_ITEM => {
                let name = record.required_name()?;
                let function = Function::new(
                    name,
                    parse_params(&record.inputs)?,
                    parse_params(&record.outputs)?,
                    record.is_constant(),
                );
                match grouped.iter_mut().find(|(existing, _)| existing == name) {
                    Some((_, functions)) => functions.push(function),
                    None => grouped.push((name.to_string(), vec![function])),
                }
            }
            EVENT_ITEM => {
                let name = record.required_name()?;
                if events.contains_key(name) {
                    return Err(ContractError::DuplicateEventNameError {
                        name: name.to_string(),
                    });
                }
                let event = Event::new(name, parse_params(&record.inputs)?, record.anonymous);
                events.insert(name.to_string(), event);
            }
            kind => {
                return Err(ContractError::UnknownDescriptionItemError {
                    kind: kind.to_string(),
                });
            }
        }
    }

    let functions = grouped
        .into_iter()
        .map(|(name, mut functions)| {
            if functions.len() == 1 {
                Ok(ContractFunction::Single(functions.remove(0)))
            } else {
                FunctionGroup::new(&name, functions).map(ContractFunction::Overloaded)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedDescription {
        constructor,
        events,
        functions,
    })
}

/// Finds the contract name between the `contract` keyword and the first `{` of `source`.
pub fn get_contract_name_from_source(source: &str) -> Option<String> {
    let left = source.find(CONTRACT_KEYWORD)? + CONTRACT_KEYWORD.len();
    let right = source.find('{')?;
    if left < right {
        Some(source[left..right].trim().to_string())
    } else {
        None
    }
}

/// A contract's interface and deployment artifacts.
///
/// Built once from an interface description and never mutated afterwards, so a single descriptor
/// can be shared by any number of bindings.
#[derive(Debug, Clone)]
pub struct ContractDescriptor {
    name: Option<String>,
    constructor: Option<Function>,
    events: HashMap<String, Event>,
    functions: Vec<ContractFunction>,
    code: Option<Vec<u8>>,
    runtime_code: Option<Vec<u8>>,
    source: Option<String>,
}

impl ContractDescriptor {
    /// Builds a descriptor from interface description records and artifacts.
    ///
    /// Without an explicit name, the constructor's name is used, then the name declared in the
    /// source text.
    pub fn new(
        records: &[DescriptionRecord],
        artifacts: ContractArtifacts,
    ) -> Result<Self, ContractError> {
        let ParsedDescription {
            constructor,
            events,
            functions,
        } = parse_contract_abi(records)?;

        let name = match (&artifacts.name, &constructor, &artifacts.source) {
            (Some(name), _, _) => Some(name.clone()),
            (None, Some(constructor), _) => Some(constructor.name.clone()),
            (None, None, Some(source)) => get_contract_name_from_source(source),
            (None, None, None) => None,
        };

        let code = artifacts.code.as_deref().map(decode_bytecode).transpose()?;
        let runtime_code = artifacts
            .runtime_code
            .as_deref()
            .map(decode_bytecode)
            .transpose()?;

        debug!(
            "Parsed contract {}: {} functions, {} events, constructor: {}",
            name.as_deref().unwrap_or("Unknown"),
            functions.len(),
            events.len(),
            constructor.is_some()
        );

        Ok(Self {
            name,
            constructor,
            events,
            functions,
            code,
            runtime_code,
            source: artifacts.source,
        })
    }

    /// Builds a descriptor from a JSON interface description.
    pub fn from_json(abi_json: &str, artifacts: ContractArtifacts) -> Result<Self, ContractError> {
        let records: Vec<DescriptionRecord> =
            serde_json::from_str(abi_json).map_err(|e| ContractError::InvalidDescriptionError {
                message: format!("Failed to parse interface description JSON: {}", e),
            })?;
        Self::new(&records, artifacts)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn constructor(&self) -> Option<&Function> {
        self.constructor.as_ref()
    }

    pub fn events(&self) -> &HashMap<String, Event> {
        &self.events
    }

    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.get(name)
    }

    /// Function entries in the order their names first appear in the description.
    pub fn functions(&self) -> &[ContractFunction] {
        &self.functions
    }

    pub fn function(&self, name: &str) -> Option<&ContractFunction> {
        self.functions.iter().find(|f| f.name() == name)
    }

    pub fn code(&self) -> Option<&[u8]> {
        self.code.as_deref()
    }

    pub fn runtime_code(&self) -> Option<&[u8]> {
        self.runtime_code.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Display for ContractDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name.as_deref().unwrap_or("Unknown"))
    }
}

fn decode_bytecode(code: &str) -> Result<Vec<u8>, ContractError> {
    decode_hex(code.trim()).map_err(|e| ContractError::InvalidDescriptionError {
        message: format!("Invalid bytecode hex: {}", e),
    })
}
