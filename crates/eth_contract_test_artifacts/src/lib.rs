//! # Test Artifacts
//!
//! Centralized contract artifacts for testing across the eth-contract crates.
//!
//! Each contract has its own folder named after the contract, containing
//! standardized file names: `contract.abi.json` for the interface description and,
//! where available, `contract.bin`, `contract.bin-runtime` and `contract.sol`.

/// Math contract artifacts
pub mod math {
    /// Interface description with five functions and one event.
    pub const CONTRACT_ABI: &str = include_str!("../contracts/math/contract.abi.json");

    /// Creation bytecode, `0x`-prefixed hex.
    pub const CONTRACT_CODE: &str = include_str!("../contracts/math/contract.bin");

    /// Runtime bytecode, `0x`-prefixed hex.
    pub const CONTRACT_RUNTIME: &str = include_str!("../contracts/math/contract.bin-runtime");

    /// Solidity source.
    pub const CONTRACT_SOURCE: &str = include_str!("../contracts/math/contract.sol");
}

/// Logs and events contract artifacts
pub mod logs_events {
    /// Interface description emitting events with one and two indexed topics.
    pub const CONTRACT_ABI: &str = include_str!("../contracts/logs_events/contract.abi.json");
}

/// Overloaded functions contract artifacts
pub mod overloaded {
    /// Interface description with overloads distinguished by arity, by type and not at all.
    ///
    /// - `f(uint256)` / `f(uint256,uint256)`: distinct arities
    /// - `set(uint256)` / `set(address)`: same arity, disjoint types
    /// - `store(string)` / `store(bytes)`: same arity, overlapping types
    pub const CONTRACT_ABI: &str = include_str!("../contracts/overloaded/contract.abi.json");
}
