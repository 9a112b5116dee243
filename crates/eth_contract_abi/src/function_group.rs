use crate::{
    ABIValue, ContractError, Function, FunctionReturn, TypeDescriptor,
    signature::AbiSignature, validation::is_encodable,
};
use log::debug;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Functions sharing a name, disambiguated per call by the shape of the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionGroup {
    name: String,
    functions: Vec<Function>,
}

impl FunctionGroup {
    /// Creates a group from functions that all share `name`.
    pub fn new(name: &str, functions: Vec<Function>) -> Result<Self, ContractError> {
        if let Some(other) = functions.iter().find(|f| f.name != name) {
            return Err(ContractError::InvalidDescriptionError {
                message: format!(
                    "Function '{}' cannot be grouped with overloads of '{}'",
                    other.name, name
                ),
            });
        }
        Ok(Self {
            name: name.to_string(),
            functions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The overloads, in description order.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Picks the single overload that accepts `args`.
    ///
    /// A function is a candidate when its arity matches and every argument is encodable as the
    /// corresponding input type. There is no tie-break between several candidates.
    pub fn resolve(&self, args: &[ABIValue]) -> Result<&Function, ContractError> {
        let mut candidates = Vec::new();
        for function in &self.functions {
            if function.inputs.len() != args.len() {
                continue;
            }
            if accepts_all(&function.input_types(), args)? {
                candidates.push(function);
            }
        }

        match candidates.as_slice() {
            [function] => {
                debug!(
                    "Resolved call to '{}' with {} arguments to {}",
                    self.name,
                    args.len(),
                    function.signature()
                );
                Ok(function)
            }
            [] => Err(ContractError::NoMatchingOverloadError {
                name: self.name.clone(),
                arg_count: args.len(),
            }),
            _ => Err(ContractError::AmbiguousOverloadError {
                name: self.name.clone(),
                signatures: candidates.iter().map(|f| f.signature()).collect(),
            }),
        }
    }

    pub fn encode_arguments(&self, args: &[ABIValue]) -> Result<Vec<u8>, ContractError> {
        self.resolve(args)?.encode_arguments(args)
    }

    pub fn build_call_data(&self, args: &[ABIValue]) -> Result<Vec<u8>, ContractError> {
        self.resolve(args)?.build_call_data(args)
    }

    pub fn call_data_hex(&self, args: &[ABIValue]) -> Result<String, ContractError> {
        self.resolve(args)?.call_data_hex(args)
    }

    fn invalid_access<T>(&self, property: &'static str) -> Result<T, ContractError> {
        Err(ContractError::InvalidAccessError {
            name: self.name.clone(),
            property,
        })
    }

    /// Always fails: the input types depend on which overload is called.
    pub fn input_types(&self) -> Result<Vec<&TypeDescriptor>, ContractError> {
        self.invalid_access("input_types")
    }

    /// Always fails: the output types depend on which overload is called.
    pub fn output_types(&self) -> Result<Vec<&TypeDescriptor>, ContractError> {
        self.invalid_access("output_types")
    }

    /// Always fails: resolve to a specific overload first.
    pub fn signature(&self) -> Result<String, ContractError> {
        self.invalid_access("signature")
    }

    /// Always fails: resolve to a specific overload first.
    pub fn binary_signature(&self) -> Result<u32, ContractError> {
        self.invalid_access("binary_signature")
    }

    /// Always fails: resolve to a specific overload first.
    pub fn encoded_binary_signature(&self) -> Result<[u8; 4], ContractError> {
        self.invalid_access("encoded_binary_signature")
    }

    /// Always fails: return data carries no hint of which overload produced it.
    pub fn decode_outputs(&self, _data: &[u8], _raw: bool) -> Result<FunctionReturn, ContractError> {
        self.invalid_access("decode_outputs")
    }
}

/// Every position is checked, so an unsupported type fails even after an earlier mismatch.
fn accepts_all(input_types: &[&TypeDescriptor], args: &[ABIValue]) -> Result<bool, ContractError> {
    let checks = input_types
        .iter()
        .zip(args)
        .map(|(input_type, arg)| is_encodable(input_type, arg))
        .collect::<Result<Vec<bool>, _>>()?;
    Ok(checks.into_iter().all(|accepted| accepted))
}

impl Display for FunctionGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let lines: Vec<String> = self
            .functions
            .iter()
            .enumerate()
            .map(|(i, function)| format!("{}: {}", i, function.signature()))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// A contract function entry: either a single function or a group of overloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractFunction {
    Single(Function),
    Overloaded(FunctionGroup),
}

impl ContractFunction {
    pub fn name(&self) -> &str {
        match self {
            ContractFunction::Single(function) => &function.name,
            ContractFunction::Overloaded(group) => group.name(),
        }
    }

    pub fn is_overloaded(&self) -> bool {
        matches!(self, ContractFunction::Overloaded(_))
    }

    /// The function that handles a call with `args`.
    ///
    /// A single function is returned as is; its arguments are checked later by the codec.
    pub fn resolve(&self, args: &[ABIValue]) -> Result<&Function, ContractError> {
        match self {
            ContractFunction::Single(function) => Ok(function),
            ContractFunction::Overloaded(group) => group.resolve(args),
        }
    }

    pub fn encode_arguments(&self, args: &[ABIValue]) -> Result<Vec<u8>, ContractError> {
        self.resolve(args)?.encode_arguments(args)
    }

    pub fn build_call_data(&self, args: &[ABIValue]) -> Result<Vec<u8>, ContractError> {
        self.resolve(args)?.build_call_data(args)
    }

    pub fn call_data_hex(&self, args: &[ABIValue]) -> Result<String, ContractError> {
        self.resolve(args)?.call_data_hex(args)
    }

    /// The signature of a single function; an overload group fails with
    /// [`ContractError::InvalidAccessError`].
    pub fn signature(&self) -> Result<String, ContractError> {
        match self {
            ContractFunction::Single(function) => Ok(function.signature()),
            ContractFunction::Overloaded(group) => group.signature(),
        }
    }
}

impl Display for ContractFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ContractFunction::Single(function) => write!(f, "{}", function),
            ContractFunction::Overloaded(group) => write!(f, "{}", group),
        }
    }
}
