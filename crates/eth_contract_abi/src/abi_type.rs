use crate::{
    ContractError,
    constants::{
        ADDRESS_BASE, ARRAY_DIMENSION_REGEX, BITS_PER_BYTE, BOOL_BASE, BYTES_BASE,
        DEFAULT_BIT_SIZE, INT_BASE, MAX_BIT_SIZE, MAX_FIXED_BYTES_LENGTH, STRING_BASE, TYPE_REGEX,
        UINT_BASE,
    },
};
use ethabi::ParamType;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// A structured representation of an ABI type string.
///
/// `uint256` decomposes into base `uint`, width `256` and no array dimensions.
/// `bytes32[][3]` decomposes into base `bytes`, width `32` and array dimensions `[None, Some(3)]`.
///
/// Array dimensions are kept in declaration order, so the outermost dimension is the last one:
/// `bytes32[][3]` is a fixed array of three dynamic `bytes32` arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    base: String,
    width: Option<String>,
    array_dimensions: Vec<Option<usize>>,
}

impl TypeDescriptor {
    /// Creates a new [`TypeDescriptor`] from its parts.
    ///
    /// Fails with [`ContractError::InvalidTypeError`] when the width does not suit the base, e.g.
    /// `int` with width `0` or `bytes` with width `33`.
    pub fn new(
        base: &str,
        width: Option<&str>,
        array_dimensions: Vec<Option<usize>>,
    ) -> Result<Self, ContractError> {
        let descriptor = Self {
            base: base.to_string(),
            width: width.map(str::to_string),
            array_dimensions,
        };
        descriptor.validate_width()?;
        Ok(descriptor)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn width(&self) -> Option<&str> {
        self.width.as_deref()
    }

    pub fn array_dimensions(&self) -> &[Option<usize>] {
        &self.array_dimensions
    }

    /// Returns `true` when the descriptor has no array dimensions.
    pub fn is_scalar(&self) -> bool {
        self.array_dimensions.is_empty()
    }

    /// Splits off the outermost array dimension.
    ///
    /// # Returns
    /// The outermost dimension's fixed size (if any) and the element descriptor, or `None` for a
    /// scalar.
    pub fn split_outermost(&self) -> Option<(Option<usize>, TypeDescriptor)> {
        let (outermost, remainder) = self.array_dimensions.split_last()?;
        let element = TypeDescriptor {
            base: self.base.clone(),
            width: self.width.clone(),
            array_dimensions: remainder.to_vec(),
        };
        Some((*outermost, element))
    }

    /// Bit width for `int`/`uint`, defaulting to 256 when the width is omitted.
    pub(crate) fn bit_size(&self) -> Result<u16, ContractError> {
        match &self.width {
            None => Ok(DEFAULT_BIT_SIZE),
            Some(width) => width.parse::<u16>().map_err(|_| ContractError::InvalidTypeError {
                type_string: self.to_string(),
                message: format!("Invalid integer width: {}", width),
            }),
        }
    }

    /// Byte length for fixed `bytes<N>`, or `None` for dynamic `bytes`.
    pub(crate) fn fixed_bytes_length(&self) -> Result<Option<usize>, ContractError> {
        match &self.width {
            None => Ok(None),
            Some(width) => width
                .parse::<usize>()
                .map(Some)
                .map_err(|_| ContractError::InvalidTypeError {
                    type_string: self.to_string(),
                    message: format!("Invalid bytes length: {}", width),
                }),
        }
    }

    /// Whether values of this type are encoded out of line.
    pub fn is_dynamic(&self) -> bool {
        if self.array_dimensions.iter().any(Option::is_none) {
            return true;
        }
        match self.base.as_str() {
            STRING_BASE => true,
            BYTES_BASE => self.width.is_none(),
            _ => false,
        }
    }

    /// Converts the descriptor into the codec's parameter type.
    pub fn to_param_type(&self) -> Result<ParamType, ContractError> {
        let scalar = match self.base.as_str() {
            INT_BASE => ParamType::Int(self.bit_size()? as usize),
            UINT_BASE => ParamType::Uint(self.bit_size()? as usize),
            ADDRESS_BASE => ParamType::Address,
            BOOL_BASE => ParamType::Bool,
            STRING_BASE => ParamType::String,
            BYTES_BASE => match self.fixed_bytes_length()? {
                Some(length) => ParamType::FixedBytes(length),
                None => ParamType::Bytes,
            },
            base => {
                return Err(ContractError::UnsupportedTypeError {
                    base: base.to_string(),
                });
            }
        };

        Ok(self
            .array_dimensions
            .iter()
            .fold(scalar, |inner, dimension| match dimension {
                Some(size) => ParamType::FixedArray(Box::new(inner), *size),
                None => ParamType::Array(Box::new(inner)),
            }))
    }

    fn validate_width(&self) -> Result<(), ContractError> {
        match self.base.as_str() {
            INT_BASE | UINT_BASE => {
                let bits = self.bit_size()?;
                if bits < BITS_PER_BYTE || bits > MAX_BIT_SIZE || bits % BITS_PER_BYTE != 0 {
                    return Err(ContractError::InvalidTypeError {
                        type_string: self.to_string(),
                        message: format!(
                            "Bit size must be between {} and {} and divisible by {}, got {}",
                            BITS_PER_BYTE, MAX_BIT_SIZE, BITS_PER_BYTE, bits
                        ),
                    });
                }
            }
            BYTES_BASE => {
                if let Some(length) = self.fixed_bytes_length()? {
                    if length == 0 || length > MAX_FIXED_BYTES_LENGTH {
                        return Err(ContractError::InvalidTypeError {
                            type_string: self.to_string(),
                            message: format!(
                                "Fixed bytes length must be between 1 and {}, got {}",
                                MAX_FIXED_BYTES_LENGTH, length
                            ),
                        });
                    }
                }
            }
            ADDRESS_BASE | STRING_BASE | BOOL_BASE => {
                if let Some(width) = &self.width {
                    return Err(ContractError::InvalidTypeError {
                        type_string: self.to_string(),
                        message: format!("'{}' does not take a width, got {}", self.base, width),
                    });
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.base)?;
        if let Some(width) = &self.width {
            write!(f, "{}", width)?;
        }
        for dimension in &self.array_dimensions {
            match dimension {
                Some(size) => write!(f, "[{}]", size)?,
                None => write!(f, "[]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for TypeDescriptor {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = TYPE_REGEX
            .captures(s)
            .ok_or_else(|| ContractError::InvalidTypeError {
                type_string: s.to_string(),
                message: "Cannot convert string to an ABI type".to_string(),
            })?;

        let base = &captures[1];
        let width = captures.get(2).map(|m| m.as_str());
        let array_dimensions = match captures.get(3) {
            Some(dimensions) => ARRAY_DIMENSION_REGEX
                .captures_iter(dimensions.as_str())
                .map(|dimension| {
                    let size_str = &dimension[1];
                    if size_str.is_empty() {
                        Ok(None)
                    } else {
                        size_str.parse::<usize>().map(Some).map_err(|_| {
                            ContractError::InvalidTypeError {
                                type_string: s.to_string(),
                                message: format!("Invalid array length: {}", size_str),
                            }
                        })
                    }
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        TypeDescriptor::new(base, width, array_dimensions)
    }
}
