/// Share of the latest block gas limit used when a transaction gives no gas value.
pub const GAS_LIMIT_FRACTION: f64 = 0.9;

/// Options for a read-only call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallParams {
    /// Return every output as a tuple, even a single one.
    pub raw: bool,
    pub from: Option<String>,
    pub gas: Option<u64>,
    pub value: Option<u128>,
}

/// Options for a state-changing transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionParams {
    pub from: Option<String>,
    /// Defaults to [`GAS_LIMIT_FRACTION`] of the client's maximum gas.
    pub gas: Option<u64>,
    pub gas_price: Option<u128>,
    pub value: Option<u128>,
}

pub(crate) fn default_gas(max_gas: u64) -> u64 {
    (GAS_LIMIT_FRACTION * max_gas as f64).floor() as u64
}
