use regex::Regex;
use std::sync::LazyLock;

pub const HASH_BYTES_LENGTH: usize = 32;
pub const SELECTOR_BYTES_LENGTH: usize = 4;
pub const WORD_BYTES_LENGTH: usize = 32;
pub const ADDRESS_BYTES_LENGTH: usize = 20;
pub const ADDRESS_HEX_LENGTH: usize = 40;

pub const HEX_PREFIX: &str = "0x";

// Integer widths
pub const BITS_PER_BYTE: u16 = 8;
pub const MAX_BIT_SIZE: u16 = 256;
pub const DEFAULT_BIT_SIZE: u16 = 256;
pub const MAX_FIXED_BYTES_LENGTH: usize = 32;

// Interface description item kinds
pub const CONSTRUCTOR_ITEM: &str = "constructor";
pub const FUNCTION_ITEM: &str = "function";
pub const EVENT_ITEM: &str = "event";

/// Name given to the descriptor built from a constructor record.
pub const CONSTRUCTOR_NAME: &str = "constructor";

// Bases the type validator understands
pub const INT_BASE: &str = "int";
pub const UINT_BASE: &str = "uint";
pub const ADDRESS_BASE: &str = "address";
pub const BYTES_BASE: &str = "bytes";
pub const STRING_BASE: &str = "string";
pub const BOOL_BASE: &str = "bool";

// `<base><width>[<dim>]...`, e.g. `uint256`, `bytes32[][3]`, `ufixed128x18`
pub static TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)([1-9][\d]*(?:x[1-9][\d]*)?)?((?:\[(?:[1-9][\d]*)?\])*)$")
        .expect("Invalid type regex")
});

pub static ARRAY_DIMENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([\d]*)\]").expect("Invalid array dimension regex"));
