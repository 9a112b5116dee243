//! Adapter between [`ABIValue`]s and the `ethabi` codec.
//!
//! The codec itself performs the binary head/tail encoding; this module maps values onto its
//! tokens against a [`TypeDescriptor`] and turns mismatches into [`ContractError`]s.

use crate::{
    ABIValue, ContractError, TypeDescriptor,
    constants::{ADDRESS_BYTES_LENGTH, WORD_BYTES_LENGTH},
    utils::{big_int_to_word, decode_hex, encode_hex_prefixed, word_to_big_int},
};
use ethabi::{Address, ParamType, Token, Uint};
use num_bigint::{BigInt, Sign};
use num_traits::One;

/// Encodes `values` as the codec's tuple encoding of `types`.
pub fn encode(types: &[TypeDescriptor], values: &[ABIValue]) -> Result<Vec<u8>, ContractError> {
    if types.len() != values.len() {
        return Err(ContractError::EncodingError {
            message: format!(
                "Expected {} values to encode, got {}",
                types.len(),
                values.len()
            ),
        });
    }

    let tokens = types
        .iter()
        .zip(values)
        .map(|(abi_type, value)| {
            let param_type = abi_type.to_param_type()?;
            to_token(&param_type, value, abi_type)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ethabi::encode(&tokens))
}

/// Decodes `data` as the codec's tuple encoding of `types`.
pub fn decode(types: &[TypeDescriptor], data: &[u8]) -> Result<Vec<ABIValue>, ContractError> {
    let param_types = types
        .iter()
        .map(TypeDescriptor::to_param_type)
        .collect::<Result<Vec<_>, _>>()?;

    let tokens =
        ethabi::decode(&param_types, data).map_err(|e| ContractError::DecodingError {
            message: format!("Failed to decode {} bytes: {}", data.len(), e),
        })?;

    Ok(tokens
        .into_iter()
        .zip(&param_types)
        .map(|(token, param_type)| from_token(token, param_type))
        .collect())
}

/// Decodes a single value of `abi_type` from `data`.
pub fn decode_single(abi_type: &TypeDescriptor, data: &[u8]) -> Result<ABIValue, ContractError> {
    decode(std::slice::from_ref(abi_type), data)?
        .pop()
        .ok_or_else(|| ContractError::DecodingError {
            message: format!("No value decoded for {}", abi_type),
        })
}

fn to_token(
    param_type: &ParamType,
    value: &ABIValue,
    abi_type: &TypeDescriptor,
) -> Result<Token, ContractError> {
    let mismatch = || ContractError::EncodingError {
        message: format!("Value {:?} cannot be encoded as {}", value, abi_type),
    };

    match param_type {
        ParamType::Int(bits) | ParamType::Uint(bits) => {
            let integer = value.as_int().ok_or_else(mismatch)?;
            let signed = matches!(param_type, ParamType::Int(_));
            check_integer_bounds(integer, *bits, signed, abi_type)?;
            let word = Uint::from_big_endian(&big_int_to_word(integer));
            Ok(if signed {
                Token::Int(word)
            } else {
                Token::Uint(word)
            })
        }
        ParamType::Address => {
            let bytes = match value {
                ABIValue::String(text) => decode_hex(text).map_err(|_| mismatch())?,
                ABIValue::Bytes(bytes) => bytes.clone(),
                _ => return Err(mismatch()),
            };
            if bytes.len() != ADDRESS_BYTES_LENGTH {
                return Err(ContractError::ValueOutOfBoundsError {
                    type_string: abi_type.to_string(),
                    message: format!("Address must be {} bytes, got {}", ADDRESS_BYTES_LENGTH, bytes.len()),
                });
            }
            Ok(Token::Address(Address::from_slice(&bytes)))
        }
        ParamType::Bool => match value {
            ABIValue::Bool(flag) => Ok(Token::Bool(*flag)),
            _ => Err(mismatch()),
        },
        ParamType::String => match value {
            ABIValue::String(text) => Ok(Token::String(text.clone())),
            ABIValue::Bytes(bytes) => String::from_utf8(bytes.clone())
                .map(Token::String)
                .map_err(|_| mismatch()),
            _ => Err(mismatch()),
        },
        ParamType::Bytes => {
            let bytes = value.as_bytes().ok_or_else(mismatch)?;
            Ok(Token::Bytes(bytes.to_vec()))
        }
        ParamType::FixedBytes(length) => {
            let bytes = value.as_bytes().ok_or_else(mismatch)?;
            if bytes.len() > *length {
                return Err(ContractError::ValueOutOfBoundsError {
                    type_string: abi_type.to_string(),
                    message: format!("{} bytes do not fit in {} bytes", bytes.len(), length),
                });
            }
            let mut padded = bytes.to_vec();
            padded.resize(*length, 0);
            Ok(Token::FixedBytes(padded))
        }
        ParamType::Array(element_type) => {
            let elements = value.as_array().ok_or_else(mismatch)?;
            let tokens = elements
                .iter()
                .map(|element| to_token(element_type, element, abi_type))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Token::Array(tokens))
        }
        ParamType::FixedArray(element_type, size) => {
            let elements = value.as_array().ok_or_else(mismatch)?;
            if elements.len() != *size {
                return Err(ContractError::EncodingError {
                    message: format!(
                        "Expected {} elements for {}, got {}",
                        size,
                        abi_type,
                        elements.len()
                    ),
                });
            }
            let tokens = elements
                .iter()
                .map(|element| to_token(element_type, element, abi_type))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Token::FixedArray(tokens))
        }
        ParamType::Tuple(_) => Err(ContractError::UnsupportedTypeError {
            base: "tuple".to_string(),
        }),
    }
}

fn check_integer_bounds(
    value: &BigInt,
    bits: usize,
    signed: bool,
    abi_type: &TypeDescriptor,
) -> Result<(), ContractError> {
    let (lower_bound, upper_bound) = if signed {
        (
            -(BigInt::one() << (bits - 1)),
            (BigInt::one() << (bits - 1)) - 1,
        )
    } else {
        (BigInt::from(0), (BigInt::one() << bits) - 1)
    };

    if value < &lower_bound || value > &upper_bound {
        return Err(ContractError::ValueOutOfBoundsError {
            type_string: abi_type.to_string(),
            message: format!(
                "{} is outside [{}, {}]",
                value, lower_bound, upper_bound
            ),
        });
    }
    Ok(())
}

fn uint_to_word(value: &Uint) -> [u8; WORD_BYTES_LENGTH] {
    let mut word = [0u8; WORD_BYTES_LENGTH];
    value.to_big_endian(&mut word);
    word
}

fn from_token(token: Token, param_type: &ParamType) -> ABIValue {
    match token {
        Token::Int(value) => ABIValue::Int(word_to_big_int(&uint_to_word(&value), true)),
        Token::Uint(value) => ABIValue::Int(BigInt::from_bytes_be(
            Sign::Plus,
            &uint_to_word(&value),
        )),
        Token::Address(address) => ABIValue::String(encode_hex_prefixed(address.as_bytes())),
        Token::Bool(flag) => ABIValue::Bool(flag),
        Token::String(text) => ABIValue::String(text),
        Token::Bytes(bytes) | Token::FixedBytes(bytes) => ABIValue::Bytes(bytes),
        Token::Array(tokens) | Token::FixedArray(tokens) => {
            let element_type = match param_type {
                ParamType::Array(element_type) | ParamType::FixedArray(element_type, _) => {
                    element_type.as_ref()
                }
                other => other,
            };
            ABIValue::Array(
                tokens
                    .into_iter()
                    .map(|token| from_token(token, element_type))
                    .collect(),
            )
        }
        Token::Tuple(tokens) => ABIValue::Array(
            tokens
                .into_iter()
                .map(|token| from_token(token, param_type))
                .collect(),
        ),
    }
}
