use crate::{
    ParamDescriptor, TypeDescriptor,
    constants::{HASH_BYTES_LENGTH, SELECTOR_BYTES_LENGTH},
    utils::encode_hex_prefixed,
};
use sha3::{Digest, Keccak256};
use std::fmt::Display;

/// Returns the Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; HASH_BYTES_LENGTH] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let hash = hasher.finalize();

    let mut digest = [0u8; HASH_BYTES_LENGTH];
    digest.copy_from_slice(&hash);
    digest
}

/// Builds `name(type1,type2,...)` from the declared types, in order and without spaces.
pub fn text_signature<T: Display>(name: &str, input_types: &[T]) -> String {
    let arg_types: Vec<String> = input_types.iter().map(|t| t.to_string()).collect();
    format!("{}({})", name, arg_types.join(","))
}

/// The first four bytes of the signature hash, zero padded.
pub fn encoded_binary_signature(text_signature: &str) -> [u8; SELECTOR_BYTES_LENGTH] {
    let hash = keccak256(text_signature.as_bytes());
    let mut selector = [0u8; SELECTOR_BYTES_LENGTH];
    selector.copy_from_slice(&hash[..SELECTOR_BYTES_LENGTH]);
    selector
}

/// The first four bytes of the signature hash as a big-endian integer.
pub fn binary_signature(text_signature: &str) -> u32 {
    u32::from_be_bytes(encoded_binary_signature(text_signature))
}

/// The full signature hash as `0x`-prefixed hex, used to tag event logs.
pub fn log_topic(text_signature: &str) -> String {
    encode_hex_prefixed(&keccak256(text_signature.as_bytes()))
}

/// Signature accessors shared by functions and events.
///
/// Signatures are derived from the name and every input in declared order.
pub trait AbiSignature {
    fn name(&self) -> &str;

    fn inputs(&self) -> &[ParamDescriptor];

    /// The declared input types, in order.
    fn input_types(&self) -> Vec<&TypeDescriptor> {
        self.inputs().iter().map(|input| &input.abi_type).collect()
    }

    /// The canonical text signature, e.g. `add(int256,int256)`.
    fn signature(&self) -> String {
        text_signature(self.name(), &self.input_types())
    }

    /// The four byte selector as an integer.
    fn binary_signature(&self) -> u32 {
        binary_signature(&self.signature())
    }

    /// The four byte selector.
    fn encoded_binary_signature(&self) -> [u8; SELECTOR_BYTES_LENGTH] {
        encoded_binary_signature(&self.signature())
    }
}
