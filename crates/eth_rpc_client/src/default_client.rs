use crate::{
    BlockchainClient, CallRequest, ClientError, RpcConfig, TransactionRequest,
    json_rpc::{JsonRpcRequest, call_params, hex_bytes, hex_quantity, parse_response, transaction_params},
};
use async_trait::async_trait;
use eth_contract_abi::TransactionReceipt;
use log::debug;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};

/// A [`BlockchainClient`] speaking JSON-RPC 2.0 over HTTP.
pub struct DefaultRpcClient {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl DefaultRpcClient {
    pub fn new(url: &str) -> Self {
        DefaultRpcClient {
            client: reqwest::Client::new(),
            url: url.to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn from_config(config: &RpcConfig) -> Result<Self, ClientError> {
        let Some(token) = &config.token else {
            return Ok(Self::new(&config.url));
        };

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                ClientError::RequestError {
                    message: format!("Invalid token: {}", e),
                }
            })?,
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::RequestError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(DefaultRpcClient {
            client,
            url: config.url.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let payload = JsonRpcRequest::new(id, method, params);
        debug!("JSON-RPC {} (id {}) to {}", method, id, self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ClientError::RequestError {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response text".to_string());
            return Err(ClientError::RequestError {
                message: format!("Request failed with status {}: {}", status, text),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::RequestError {
                message: e.to_string(),
            })?;

        parse_response(&body)
    }
}

#[async_trait]
impl BlockchainClient for DefaultRpcClient {
    async fn call(&self, request: CallRequest) -> Result<Vec<u8>, ClientError> {
        let result = self.request("eth_call", call_params(&request)).await?;
        hex_bytes(&result)
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, ClientError> {
        let result = self
            .request("eth_sendTransaction", transaction_params(&request))
            .await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ClientError::ResponseError {
                message: format!("Expected a transaction hash, got {}", result),
            })
    }

    async fn get_transaction_receipt(
        &self,
        transaction_hash: &str,
    ) -> Result<Option<TransactionReceipt>, ClientError> {
        let result = self
            .request("eth_getTransactionReceipt", vec![json!(transaction_hash)])
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        serde_json::from_value(result)
            .map(Some)
            .map_err(|e| ClientError::ResponseError {
                message: format!("Invalid transaction receipt: {}", e),
            })
    }

    async fn get_max_gas(&self) -> Result<u64, ClientError> {
        let block = self
            .request("eth_getBlockByNumber", vec![json!("latest"), json!(false)])
            .await?;
        let gas_limit = block.get("gasLimit").ok_or_else(|| ClientError::ResponseError {
            message: "Latest block has no gasLimit".to_string(),
        })?;
        hex_quantity(gas_limit)
    }
}
