use crate::constants::{HEX_PREFIX, WORD_BYTES_LENGTH};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;

pub fn strip_0x_prefix(value: &str) -> &str {
    value.strip_prefix(HEX_PREFIX).unwrap_or(value)
}

/// Decodes hex text with an optional `0x` prefix.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(strip_0x_prefix(value))
}

/// Renders bytes as `0x`-prefixed lowercase hex.
pub fn encode_hex_prefixed(bytes: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(bytes))
}

pub fn big_uint_to_bytes(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = &value.to_bytes_be();
    let mut result = vec![0u8; len.saturating_sub(bytes.len())];
    result.extend_from_slice(bytes);
    result
}

/// Two's complement 256-bit word for an integer known to fit in 256 bits.
pub fn big_int_to_word(value: &BigInt) -> Vec<u8> {
    let modulus = BigInt::one() << (WORD_BYTES_LENGTH * 8);
    let unsigned = if value.sign() == Sign::Minus {
        modulus + value
    } else {
        value.clone()
    };
    let (_, magnitude) = unsigned.into_parts();
    big_uint_to_bytes(&magnitude, WORD_BYTES_LENGTH)
}

/// Reads a 256-bit big-endian word, as two's complement when `signed`.
pub fn word_to_big_int(word: &[u8], signed: bool) -> BigInt {
    let value = BigInt::from_bytes_be(Sign::Plus, word);
    let negative = signed && word.len() == WORD_BYTES_LENGTH && word[0] & 0x80 != 0;
    if negative {
        value - (BigInt::one() << (WORD_BYTES_LENGTH * 8))
    } else {
        value
    }
}
