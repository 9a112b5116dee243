#![allow(dead_code)]
pub mod mock_client;

pub use mock_client::MockClient;

use eth_contract::{ContractBinding, ContractDescriptor};
use eth_contract_abi::ContractArtifacts;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .format_target(true)
            .format_module_path(false)
            .try_init();
    });
}

pub type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub const CONTRACT_ADDRESS: &str = "0xd3cda913deb6f67967b99d67acdfa1712c293601";

pub fn bind(abi_json: &str, name: &str, client: Arc<MockClient>) -> ContractBinding {
    let contract = ContractDescriptor::from_json(
        abi_json,
        ContractArtifacts {
            name: Some(name.to_string()),
            ..Default::default()
        },
    )
    .expect("Test interface description should parse");
    ContractBinding::new(Arc::new(contract), CONTRACT_ADDRESS, client)
}
