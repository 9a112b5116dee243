mod common;

use common::{CONTRACT_ADDRESS, MockClient, TestResult, bind, init_test_logging};
use eth_contract::{
    ABIValue, BindingError, CallParams, ClientError, FunctionReturn, TransactionParams,
};
use eth_contract_abi::{
    ContractError, LogEntry, TransactionReceipt, TypeDescriptor, codec,
    utils::encode_hex_prefixed,
};
use eth_contract_test_artifacts::{math, overloaded};
use rstest::rstest;
use std::str::FromStr;
use std::sync::Arc;

fn int256_word(value: i64) -> Vec<u8> {
    codec::encode(
        &[TypeDescriptor::from_str("int256").unwrap()],
        &[ABIValue::from(value)],
    )
    .unwrap()
}

#[tokio::test]
async fn test_call_decodes_single_output() -> TestResult {
    init_test_logging();
    let client = Arc::new(MockClient::new(0).with_call_result(int256_word(13)));
    let binding = bind(math::CONTRACT_ABI, "Math", client.clone());

    let result = binding
        .call("return13", &[], CallParams::default())
        .await?;
    assert_eq!(result, FunctionReturn::Value(ABIValue::from(13u8)));

    let request = client.last_call().unwrap();
    assert_eq!(request.to, CONTRACT_ADDRESS);
    assert_eq!(hex::encode(&request.data), "16216f39");
    assert_eq!(request.gas, None);
    Ok(())
}

#[tokio::test]
async fn test_call_raw_and_tuple_results() -> TestResult {
    init_test_logging();
    let client = Arc::new(MockClient::new(0).with_call_result(int256_word(-21)));
    let binding = bind(math::CONTRACT_ABI, "Math", client.clone());
    let args = [ABIValue::from(-3i8)];

    let raw_bytes = binding
        .call_raw("multiply7", &args, CallParams::default())
        .await?;
    assert_eq!(raw_bytes, int256_word(-21));

    let tuple = binding
        .call(
            "multiply7",
            &args,
            CallParams {
                raw: true,
                from: Some("0x01".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(tuple, FunctionReturn::Tuple(vec![ABIValue::from(-21i8)]));
    assert_eq!(client.last_call().unwrap().from.as_deref(), Some("0x01"));
    Ok(())
}

#[tokio::test]
async fn test_call_with_empty_result_fails() {
    init_test_logging();
    let client = Arc::new(MockClient::new(0));
    let binding = bind(math::CONTRACT_ABI, "Math", client);

    let error = binding
        .call("return13", &[], CallParams::default())
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        BindingError::ContractError {
            source: ContractError::EmptyDataError { .. }
        }
    ));
}

#[rstest]
#[case(None, 4_712_388, 4_241_149)]
#[case(None, 30_000_000, 27_000_000)]
#[case(Some(100_000), 30_000_000, 100_000)]
#[tokio::test]
async fn test_send_transaction_gas(
    #[case] gas: Option<u64>,
    #[case] max_gas: u64,
    #[case] expected_gas: u64,
) -> TestResult {
    init_test_logging();
    let client = Arc::new(MockClient::new(max_gas));
    let binding = bind(math::CONTRACT_ABI, "Math", client.clone());

    let transaction_hash = binding
        .send_transaction(
            "increment",
            &[ABIValue::from(1u8)],
            TransactionParams {
                gas,
                value: Some(5),
                ..Default::default()
            },
        )
        .await?;
    assert!(transaction_hash.starts_with("0x"));

    let request = client.last_transaction().unwrap();
    assert_eq!(request.gas, Some(expected_gas));
    assert_eq!(request.value, Some(5));
    assert_eq!(
        hex::encode(&request.data),
        "7cf5dab00000000000000000000000000000000000000000000000000000000000000001"
    );
    Ok(())
}

#[tokio::test]
async fn test_overloaded_functions_dispatch_by_arguments() -> TestResult {
    init_test_logging();
    let client = Arc::new(MockClient::new(1_000));
    let binding = bind(overloaded::CONTRACT_ABI, "Overloaded", client.clone());

    binding
        .send_transaction(
            "set",
            &[ABIValue::from(CONTRACT_ADDRESS)],
            TransactionParams::default(),
        )
        .await?;
    assert_eq!(
        hex::encode(&client.last_transaction().unwrap().data[..4]),
        "2801617e"
    );

    binding
        .send_transaction("set", &[ABIValue::from(7u8)], TransactionParams::default())
        .await?;
    assert_eq!(
        hex::encode(&client.last_transaction().unwrap().data[..4]),
        "60fe47b1"
    );

    let error = binding
        .send_transaction(
            "store",
            &[ABIValue::from("payload")],
            TransactionParams::default(),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        BindingError::ContractError {
            source: ContractError::AmbiguousOverloadError { .. }
        }
    ));
    assert_eq!(client.transactions.lock().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_unknown_names_fail() {
    init_test_logging();
    let binding = bind(math::CONTRACT_ABI, "Math", Arc::new(MockClient::new(0)));

    let error = binding
        .call("missing", &[], CallParams::default())
        .await
        .unwrap_err();
    assert!(matches!(error, BindingError::FunctionNotFoundError { name } if name == "missing"));

    let error = binding
        .transaction_logs("Missing", "0xabc")
        .await
        .unwrap_err();
    assert!(matches!(error, BindingError::EventNotFoundError { .. }));
}

#[tokio::test]
async fn test_transaction_logs() -> TestResult {
    init_test_logging();
    let contract_event_topic = {
        let binding = bind(math::CONTRACT_ABI, "Math", Arc::new(MockClient::new(0)));
        binding.contract().event("Increased").unwrap().log_topic()
    };
    let increased = LogEntry {
        address: Some(CONTRACT_ADDRESS.to_string()),
        topics: vec![contract_event_topic.clone()],
        data: encode_hex_prefixed(&int256_word(2)),
        ..Default::default()
    };
    let unrelated = LogEntry {
        topics: vec![
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef".to_string(),
        ],
        data: "0x".to_string(),
        ..Default::default()
    };
    let client = Arc::new(
        MockClient::new(0)
            .with_receipt(TransactionReceipt {
                transaction_hash: "0xabc".to_string(),
                logs: vec![unrelated.clone(), increased.clone()],
                ..Default::default()
            })
            .with_receipt(TransactionReceipt {
                transaction_hash: "0x123".to_string(),
                logs: vec![unrelated],
                ..Default::default()
            }),
    );
    let binding = bind(math::CONTRACT_ABI, "Math", client);

    assert_eq!(
        contract_event_topic,
        "0x3496c3ede4ec3ab3686712aa1c238593ea6a42df83f98a5ec7df9834cfa577c5"
    );

    let logs = binding.transaction_logs("Increased", "0xabc").await?;
    assert_eq!(logs, Some(vec![increased.clone()]));

    let event = binding.contract().event("Increased").unwrap();
    let decoded = event.decode_log(&increased, false)?;
    assert_eq!(decoded["value"], ABIValue::from(2u8));

    // A known transaction without matching logs yields an empty list.
    assert_eq!(
        binding.transaction_logs("Increased", "0x123").await?,
        Some(vec![])
    );
    assert_eq!(binding.transaction_logs("Increased", "0xdef").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_client_errors_propagate() {
    use async_trait::async_trait;
    use eth_contract::{BlockchainClient, CallRequest, TransactionRequest};

    struct FailingClient;

    #[async_trait]
    impl BlockchainClient for FailingClient {
        async fn call(&self, _request: CallRequest) -> Result<Vec<u8>, ClientError> {
            Err(ClientError::RpcError {
                code: -32000,
                message: "execution reverted".to_string(),
            })
        }

        async fn send_transaction(
            &self,
            _request: TransactionRequest,
        ) -> Result<String, ClientError> {
            Err(ClientError::RequestError {
                message: "connection refused".to_string(),
            })
        }

        async fn get_transaction_receipt(
            &self,
            _transaction_hash: &str,
        ) -> Result<Option<TransactionReceipt>, ClientError> {
            Ok(None)
        }

        async fn get_max_gas(&self) -> Result<u64, ClientError> {
            Ok(0)
        }
    }

    init_test_logging();
    let contract = eth_contract::ContractDescriptor::from_json(
        math::CONTRACT_ABI,
        Default::default(),
    )
    .unwrap();
    let binding =
        eth_contract::ContractBinding::new(Arc::new(contract), CONTRACT_ADDRESS, Arc::new(FailingClient));

    assert!(matches!(
        binding.call("return13", &[], CallParams::default()).await,
        Err(BindingError::ClientError {
            source: ClientError::RpcError { code: -32000, .. }
        })
    ));
    assert!(matches!(
        binding
            .send_transaction("increment", &[ABIValue::from(1u8)], TransactionParams::default())
            .await,
        Err(BindingError::ClientError { .. })
    ));
}

#[test]
fn test_bindings_share_one_descriptor() {
    let first = bind(math::CONTRACT_ABI, "Math", Arc::new(MockClient::new(0)));
    let second = eth_contract::ContractBinding::new(
        first.contract().clone(),
        "0x0000000000000000000000000000000000000001",
        Arc::new(MockClient::new(0)),
    );

    assert!(Arc::ptr_eq(first.contract(), second.contract()));
    assert_ne!(first.address(), second.address());
    assert_eq!(
        second.contract().function("add").unwrap().signature().unwrap(),
        "add(int256,int256)"
    );
}
