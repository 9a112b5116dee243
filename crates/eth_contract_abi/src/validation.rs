//! Decides whether a runtime value can be encoded as a declared ABI type.
//!
//! Used by overload resolution to pick a function by the shape of its call arguments.

use crate::{
    ABIValue, ContractError, TypeDescriptor,
    constants::{
        ADDRESS_BASE, ADDRESS_HEX_LENGTH, BYTES_BASE, INT_BASE, STRING_BASE, UINT_BASE,
    },
    utils::strip_0x_prefix,
};
use num_bigint::{BigInt, Sign};
use num_traits::One;

/// Returns whether `value` can be encoded as `abi_type`.
///
/// Mismatches are reported as `Ok(false)`. The only error is [`ContractError::UnsupportedTypeError`]
/// for a base outside `int`, `uint`, `address`, `bytes` and `string`.
///
/// Fixed-length `bytes<N>` accepts any string-like value of at most `N` bytes, not exactly `N`.
pub fn is_encodable(abi_type: &TypeDescriptor, value: &ABIValue) -> Result<bool, ContractError> {
    match abi_type.base() {
        INT_BASE | UINT_BASE | ADDRESS_BASE | BYTES_BASE | STRING_BASE => {}
        base => {
            return Err(ContractError::UnsupportedTypeError {
                base: base.to_string(),
            });
        }
    }

    if let Some((outermost, element_type)) = abi_type.split_outermost() {
        let Some(elements) = value.as_array() else {
            return Ok(false);
        };
        if let Some(size) = outermost {
            if elements.len() != size {
                return Ok(false);
            }
        }
        for element in elements {
            if !is_encodable(&element_type, element)? {
                return Ok(false);
            }
        }
        return Ok(true);
    }

    match abi_type.base() {
        INT_BASE => {
            let Some(integer) = value.as_int() else {
                return Ok(false);
            };
            let bits = abi_type.bit_size()? as usize;
            let lower_bound = -(BigInt::one() << (bits - 1));
            let upper_bound = (BigInt::one() << (bits - 1)) - 1;
            Ok(&lower_bound <= integer && integer <= &upper_bound)
        }
        UINT_BASE => {
            let Some(integer) = value.as_int() else {
                return Ok(false);
            };
            let bits = abi_type.bit_size()? as usize;
            let upper_bound = (BigInt::one() << bits) - 1;
            Ok(integer.sign() != Sign::Minus && integer <= &upper_bound)
        }
        ADDRESS_BASE => {
            let Some(text) = value.as_str() else {
                return Ok(false);
            };
            let hex_digits = strip_0x_prefix(text);
            Ok(hex_digits.len() == ADDRESS_HEX_LENGTH
                && hex_digits
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)))
        }
        BYTES_BASE => {
            if !value.is_string_like() {
                return Ok(false);
            }
            match abi_type.fixed_bytes_length()? {
                Some(max_length) => Ok(value.len().is_some_and(|len| len <= max_length)),
                None => Ok(true),
            }
        }
        _ => Ok(value.is_string_like()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn encodable(type_string: &str, value: ABIValue) -> bool {
        let abi_type = TypeDescriptor::from_str(type_string).unwrap();
        is_encodable(&abi_type, &value).unwrap()
    }

    #[rstest]
    #[case("uint8", 0, true)]
    #[case("uint8", 255, true)]
    #[case("uint8", 256, false)]
    #[case("uint8", -1, false)]
    #[case("int8", 127, true)]
    #[case("int8", 128, false)]
    #[case("int8", -128, true)]
    #[case("int8", -129, false)]
    #[case("uint", 1, true)]
    #[case("int256", -1, true)]
    fn checks_integer_bounds(#[case] type_string: &str, #[case] value: i64, #[case] expected: bool) {
        assert_eq!(encodable(type_string, ABIValue::from(value)), expected);
    }

    #[test]
    fn checks_full_width_bounds() {
        let max_uint256: BigInt = (BigInt::one() << 256usize) - 1;
        assert!(encodable("uint256", ABIValue::Int(max_uint256.clone())));
        assert!(!encodable("uint256", ABIValue::Int(max_uint256 + 1)));

        let min_int256: BigInt = -(BigInt::one() << 255usize);
        assert!(encodable("int256", ABIValue::Int(min_int256.clone())));
        assert!(!encodable("int256", ABIValue::Int(min_int256 - 1)));
    }

    #[rstest]
    #[case(ABIValue::from("12"))]
    #[case(ABIValue::from(true))]
    #[case(ABIValue::from(vec![1u8]))]
    fn integers_must_be_integral(#[case] value: ABIValue) {
        assert!(!encodable("uint256", value.clone()));
        assert!(!encodable("int256", value));
    }

    #[rstest]
    #[case("0xd3cda913deb6f67967b99d67acdfa1712c293601", true)]
    #[case("d3cda913deb6f67967b99d67acdfa1712c293601", true)]
    #[case("0xD3CDA913DEB6F67967B99D67ACDFA1712C293601", false)]
    #[case("0xd3cda913deb6f67967b99d67acdfa1712c2936", false)]
    #[case("0xd3cda913deb6f67967b99d67acdfa1712c29360g", false)]
    fn checks_addresses(#[case] address: &str, #[case] expected: bool) {
        assert_eq!(encodable("address", ABIValue::from(address)), expected);
    }

    #[test]
    fn addresses_must_be_text() {
        assert!(!encodable("address", ABIValue::from(vec![0u8; 20])));
        assert!(!encodable("address", ABIValue::from(1u8)));
    }

    #[rstest]
    #[case("bytes32", ABIValue::from("test-key-a"), true)]
    #[case("bytes32", ABIValue::from(vec![0u8; 32]), true)]
    #[case("bytes32", ABIValue::from(vec![0u8; 33]), false)]
    // Fixed-length bytes is a ceiling, shorter values are accepted.
    #[case("bytes4", ABIValue::from(vec![1u8]), true)]
    #[case("bytes4", ABIValue::from(1u8), false)]
    #[case("bytes", ABIValue::from(vec![0u8; 100]), true)]
    #[case("bytes", ABIValue::from(""), true)]
    #[case("string", ABIValue::from("hello"), true)]
    #[case("string", ABIValue::from(vec![104u8, 105]), true)]
    #[case("string", ABIValue::from(5u8), false)]
    fn checks_string_like_types(
        #[case] type_string: &str,
        #[case] value: ABIValue,
        #[case] expected: bool,
    ) {
        assert_eq!(encodable(type_string, value), expected);
    }

    #[rstest]
    #[case("uint8[]", ABIValue::from(vec![ABIValue::from(1u8), ABIValue::from(2u8)]), true)]
    #[case("uint8[]", ABIValue::from(vec![ABIValue::from(1u8), ABIValue::from(256u16)]), false)]
    #[case("uint8[]", ABIValue::Array(vec![]), true)]
    #[case("uint8[2]", ABIValue::from(vec![ABIValue::from(1u8)]), false)]
    #[case("uint8[2]", ABIValue::from(vec![ABIValue::from(1u8), ABIValue::from(2u8)]), true)]
    #[case("uint8[]", ABIValue::from("12"), false)]
    fn checks_arrays(#[case] type_string: &str, #[case] value: ABIValue, #[case] expected: bool) {
        assert_eq!(encodable(type_string, value), expected);
    }

    #[test]
    fn outermost_dimension_is_last_declared() {
        let inner = |n: usize| ABIValue::Array((0..n).map(|_| ABIValue::from("k")).collect());

        // Three dynamic arrays of any length.
        let three = ABIValue::Array(vec![inner(1), inner(0), inner(5)]);
        assert!(encodable("bytes32[][3]", three));

        let two = ABIValue::Array(vec![inner(1), inner(2)]);
        assert!(!encodable("bytes32[][3]", two));
    }

    #[rstest]
    #[case("bool")]
    #[case("ufixed128x18")]
    fn rejects_unsupported_bases(#[case] type_string: &str) {
        let abi_type = TypeDescriptor::from_str(type_string).unwrap();
        assert!(matches!(
            is_encodable(&abi_type, &ABIValue::from(true)),
            Err(ContractError::UnsupportedTypeError { .. })
        ));
    }

    #[test]
    fn zero_width_integers_cannot_reach_validation() {
        assert!(matches!(
            TypeDescriptor::new("int", Some("0"), vec![]),
            Err(ContractError::InvalidTypeError { .. })
        ));

        let smallest = TypeDescriptor::new("int", Some("8"), vec![]).unwrap();
        assert!(is_encodable(&smallest, &ABIValue::from(0u8)).unwrap());
        assert!(!is_encodable(&smallest, &ABIValue::from(-129i16)).unwrap());
        assert!(crate::codec::encode(&[smallest], &[ABIValue::from(-128i16)]).is_ok());
    }
}
