use snafu::Snafu;

/// Represents an error that can occur while building or using contract interface metadata.
#[derive(Debug, Snafu)]
pub enum ContractError {
    /// The number of call arguments does not match the number of declared inputs.
    #[snafu(display("Expected {expected} arguments, only got {actual}"))]
    ArityError { expected: usize, actual: usize },

    /// A type descriptor's base is not one the validator understands.
    #[snafu(display("Unsupported base: '{base}'"))]
    UnsupportedTypeError { base: String },

    /// A type string could not be parsed into a type descriptor.
    #[snafu(display("Invalid ABI type '{type_string}': {message}"))]
    InvalidTypeError {
        type_string: String,
        message: String,
    },

    /// No member of an overload group accepts the call arguments.
    #[snafu(display("No functions named '{name}' matched the calling signature ({arg_count} arguments)"))]
    NoMatchingOverloadError { name: String, arg_count: usize },

    /// More than one member of an overload group accepts the call arguments.
    #[snafu(display("More than one function named '{name}' matched: {}", signatures.join(", ")))]
    AmbiguousOverloadError {
        name: String,
        signatures: Vec<String>,
    },

    /// Two event records share a name.
    #[snafu(display("Duplicate Event name: {name}"))]
    DuplicateEventNameError { name: String },

    /// A description record has a kind other than constructor, function or event.
    #[snafu(display("Unknown signature item '{kind}'"))]
    UnknownDescriptionItemError { kind: String },

    /// The interface description itself is malformed.
    #[snafu(display("Invalid interface description: {message}"))]
    InvalidDescriptionError { message: String },

    /// Signature or type introspection was attempted on an unresolved overload group.
    #[snafu(display("Cannot read '{property}' on overloaded function '{name}', resolve it to a specific function first"))]
    InvalidAccessError {
        name: String,
        property: &'static str,
    },

    /// A value could not be encoded.
    #[snafu(display("ABI encoding failed: {message}"))]
    EncodingError { message: String },

    /// A value is outside the range representable by its declared type.
    #[snafu(display("Value out of bounds for '{type_string}': {message}"))]
    ValueOutOfBoundsError {
        type_string: String,
        message: String,
    },

    /// Bytes could not be decoded.
    #[snafu(display("ABI decoding failed: {message}"))]
    DecodingError { message: String },

    /// A call unexpectedly returned no data when a response was expected.
    #[snafu(display("Call to '{name}' returned empty data but {expected} output(s) were expected"))]
    EmptyDataError { name: String, expected: usize },

    /// A log entry has fewer topics than its event's indexed inputs require.
    #[snafu(display("Log entry for event '{event}' has {available} topics, topic {required} is required"))]
    InsufficientTopicsError {
        event: String,
        required: usize,
        available: usize,
    },
}

impl ContractError {
    /// Whether the error belongs to the encoding family.
    pub fn is_encoding_error(&self) -> bool {
        matches!(
            self,
            ContractError::EncodingError { .. } | ContractError::ValueOutOfBoundsError { .. }
        )
    }

    /// Whether the error belongs to the decoding family.
    pub fn is_decoding_error(&self) -> bool {
        matches!(
            self,
            ContractError::DecodingError { .. }
                | ContractError::EmptyDataError { .. }
                | ContractError::InsufficientTopicsError { .. }
        )
    }
}
