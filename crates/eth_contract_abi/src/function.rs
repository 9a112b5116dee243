use crate::{
    ABIValue, ContractError, ParamDescriptor, TypeDescriptor,
    codec,
    signature::AbiSignature,
};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The decoded result of a function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionReturn {
    /// The only declared output, unwrapped.
    Value(ABIValue),
    /// Every declared output, in declaration order.
    Tuple(Vec<ABIValue>),
}

impl FunctionReturn {
    /// Returns the unwrapped value, if this is a single value.
    pub fn value(&self) -> Option<&ABIValue> {
        match self {
            FunctionReturn::Value(value) => Some(value),
            FunctionReturn::Tuple(_) => None,
        }
    }

    /// Returns all values in order, wrapping a single value in a one-element vector.
    pub fn into_values(self) -> Vec<ABIValue> {
        match self {
            FunctionReturn::Value(value) => vec![value],
            FunctionReturn::Tuple(values) => values,
        }
    }
}

/// A contract function's static metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// The function name.
    pub name: String,
    /// Inputs in call-signature order.
    pub inputs: Vec<ParamDescriptor>,
    /// Outputs in declaration order.
    pub outputs: Vec<ParamDescriptor>,
    /// Whether the function does not modify state.
    pub constant: bool,
}

impl AbiSignature for Function {
    fn name(&self) -> &str {
        &self.name
    }

    fn inputs(&self) -> &[ParamDescriptor] {
        &self.inputs
    }
}

impl Function {
    /// Creates a new function descriptor.
    pub fn new(
        name: &str,
        inputs: Vec<ParamDescriptor>,
        outputs: Vec<ParamDescriptor>,
        constant: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            inputs,
            outputs,
            constant,
        }
    }

    /// The declared output types, in order.
    pub fn output_types(&self) -> Vec<&TypeDescriptor> {
        self.outputs.iter().map(|output| &output.abi_type).collect()
    }

    fn owned_input_types(&self) -> Vec<TypeDescriptor> {
        self.inputs.iter().map(|i| i.abi_type.clone()).collect()
    }

    fn owned_output_types(&self) -> Vec<TypeDescriptor> {
        self.outputs.iter().map(|o| o.abi_type.clone()).collect()
    }

    /// Encodes `args` against the declared inputs.
    ///
    /// The values are not validated against the input types beforehand; a mismatch surfaces as
    /// an encoding error from the codec.
    ///
    /// # Returns
    /// The encoded arguments, or [`ContractError::ArityError`] if the argument count is wrong.
    pub fn encode_arguments(&self, args: &[ABIValue]) -> Result<Vec<u8>, ContractError> {
        if args.len() != self.inputs.len() {
            return Err(ContractError::ArityError {
                expected: self.inputs.len(),
                actual: args.len(),
            });
        }
        codec::encode(&self.owned_input_types(), args)
    }

    /// The selector followed by the encoded arguments.
    pub fn build_call_data(&self, args: &[ABIValue]) -> Result<Vec<u8>, ContractError> {
        let suffix = self.encode_arguments(args)?;
        let mut call_data = self.encoded_binary_signature().to_vec();
        call_data.extend_from_slice(&suffix);
        Ok(call_data)
    }

    /// Call data as lowercase hex without a `0x` prefix.
    pub fn call_data_hex(&self, args: &[ABIValue]) -> Result<String, ContractError> {
        Ok(hex::encode(self.build_call_data(args)?))
    }

    /// Decodes data returned by a call to this function.
    ///
    /// A single declared output is returned unwrapped unless `raw` is set.
    pub fn decode_outputs(&self, data: &[u8], raw: bool) -> Result<FunctionReturn, ContractError> {
        if data.is_empty() && !self.outputs.is_empty() {
            return Err(ContractError::EmptyDataError {
                name: self.name.clone(),
                expected: self.outputs.len(),
            });
        }

        let mut values = codec::decode(&self.owned_output_types(), data)?;
        if !raw && values.len() == 1 {
            if let Some(value) = values.pop() {
                return Ok(FunctionReturn::Value(value));
            }
        }
        Ok(FunctionReturn::Tuple(values))
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let args: Vec<String> = self
            .inputs
            .iter()
            .map(|input| format!("{} {}", input.abi_type, input.name))
            .collect();
        write!(f, "{}({})", self.name, args.join(", "))
    }
}
