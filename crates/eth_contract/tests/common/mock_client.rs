use async_trait::async_trait;
use eth_contract::{BlockchainClient, CallRequest, ClientError, TransactionRequest};
use eth_contract_abi::TransactionReceipt;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory client returning canned results and recording every request.
#[derive(Default)]
pub struct MockClient {
    pub call_result: Vec<u8>,
    pub max_gas: u64,
    pub receipts: HashMap<String, TransactionReceipt>,
    pub calls: Mutex<Vec<CallRequest>>,
    pub transactions: Mutex<Vec<TransactionRequest>>,
}

impl MockClient {
    pub fn new(max_gas: u64) -> Self {
        Self {
            max_gas,
            ..Default::default()
        }
    }

    pub fn with_call_result(mut self, result: Vec<u8>) -> Self {
        self.call_result = result;
        self
    }

    pub fn with_receipt(mut self, receipt: TransactionReceipt) -> Self {
        self.receipts
            .insert(receipt.transaction_hash.clone(), receipt);
        self
    }

    pub fn last_call(&self) -> Option<CallRequest> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn last_transaction(&self) -> Option<TransactionRequest> {
        self.transactions.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BlockchainClient for MockClient {
    async fn call(&self, request: CallRequest) -> Result<Vec<u8>, ClientError> {
        self.calls.lock().unwrap().push(request);
        Ok(self.call_result.clone())
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, ClientError> {
        let mut transactions = self.transactions.lock().unwrap();
        transactions.push(request);
        Ok(format!("0x{:064x}", transactions.len()))
    }

    async fn get_transaction_receipt(
        &self,
        transaction_hash: &str,
    ) -> Result<Option<TransactionReceipt>, ClientError> {
        Ok(self.receipts.get(transaction_hash).cloned())
    }

    async fn get_max_gas(&self) -> Result<u64, ClientError> {
        Ok(self.max_gas)
    }
}
