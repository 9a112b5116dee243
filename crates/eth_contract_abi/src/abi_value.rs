use num_bigint::BigInt;

/// Represents a value that can be encoded as, or was decoded from, an ABI type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ABIValue {
    /// A signed or unsigned integer of any width.
    Int(BigInt),
    /// A boolean value.
    Bool(bool),
    /// A text value. Addresses are carried as `0x`-prefixed lowercase hex text.
    String(String),
    /// A raw byte sequence.
    Bytes(Vec<u8>),
    /// A fixed or dynamic array of values.
    Array(Vec<ABIValue>),
}

impl ABIValue {
    /// Returns `true` for integral values.
    pub fn is_integer(&self) -> bool {
        matches!(self, ABIValue::Int(_))
    }

    /// Returns `true` for text values.
    pub fn is_text(&self) -> bool {
        matches!(self, ABIValue::String(_))
    }

    /// Returns `true` for values that can stand in for `bytes` or `string`.
    pub fn is_string_like(&self) -> bool {
        matches!(self, ABIValue::String(_) | ABIValue::Bytes(_))
    }

    /// Length used for fixed-size checks: byte length for string-like values, element count for
    /// arrays.
    pub fn len(&self) -> Option<usize> {
        match self {
            ABIValue::String(value) => Some(value.len()),
            ABIValue::Bytes(value) => Some(value.len()),
            ABIValue::Array(values) => Some(values.len()),
            ABIValue::Int(_) | ABIValue::Bool(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            ABIValue::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ABIValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ABIValue::Bytes(value) => Some(value),
            ABIValue::String(value) => Some(value.as_bytes()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ABIValue]> {
        match self {
            ABIValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Create an address value from hex text.
    pub fn from_address<S: Into<String>>(value: S) -> Self {
        ABIValue::String(value.into())
    }
}

impl From<bool> for ABIValue {
    fn from(value: bool) -> Self {
        ABIValue::Bool(value)
    }
}

impl From<BigInt> for ABIValue {
    fn from(value: BigInt) -> Self {
        ABIValue::Int(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ABIValue {
                fn from(value: $ty) -> Self {
                    ABIValue::Int(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<String> for ABIValue {
    fn from(value: String) -> Self {
        ABIValue::String(value)
    }
}

impl From<&str> for ABIValue {
    fn from(value: &str) -> Self {
        ABIValue::String(value.to_string())
    }
}

impl From<Vec<u8>> for ABIValue {
    fn from(value: Vec<u8>) -> Self {
        ABIValue::Bytes(value)
    }
}

impl From<&[u8]> for ABIValue {
    fn from(value: &[u8]) -> Self {
        ABIValue::Bytes(value.to_vec())
    }
}

impl From<Vec<ABIValue>> for ABIValue {
    fn from(value: Vec<ABIValue>) -> Self {
        ABIValue::Array(value)
    }
}
