//! JSON-RPC 2.0 envelopes and the conversions between client requests and node parameters.

use crate::{CallRequest, ClientError, TransactionRequest};
use eth_contract_abi::utils::{decode_hex, encode_hex_prefixed, strip_0x_prefix};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

const JSON_RPC_VERSION: &str = "2.0";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION,
            id,
            method: method.to_string(),
            params,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl JsonRpcResponse {
    /// The `result` member, or the node's error object as [`ClientError::RpcError`].
    ///
    /// A missing result is returned as `Value::Null`.
    pub fn into_result(self) -> Result<Value, ClientError> {
        if let Some(error) = self.error {
            return Err(ClientError::RpcError {
                code: error.code,
                message: error.message,
            });
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

pub(crate) fn parse_response(body: &[u8]) -> Result<Value, ClientError> {
    let response: JsonRpcResponse =
        serde_json::from_slice(body).map_err(|e| ClientError::ResponseError {
            message: format!("Invalid JSON-RPC response: {}", e),
        })?;
    response.into_result()
}

fn quantity(value: impl Into<u128>) -> Value {
    Value::String(format!("0x{:x}", value.into()))
}

pub(crate) fn call_params(request: &CallRequest) -> Vec<Value> {
    let mut object = Map::new();
    object.insert("to".to_string(), json!(request.to));
    object.insert("data".to_string(), json!(encode_hex_prefixed(&request.data)));
    if let Some(from) = &request.from {
        object.insert("from".to_string(), json!(from));
    }
    if let Some(gas) = request.gas {
        object.insert("gas".to_string(), quantity(gas));
    }
    if let Some(value) = request.value {
        object.insert("value".to_string(), quantity(value));
    }
    vec![Value::Object(object), json!("latest")]
}

pub(crate) fn transaction_params(request: &TransactionRequest) -> Vec<Value> {
    let mut object = Map::new();
    object.insert("to".to_string(), json!(request.to));
    object.insert("data".to_string(), json!(encode_hex_prefixed(&request.data)));
    if let Some(from) = &request.from {
        object.insert("from".to_string(), json!(from));
    }
    if let Some(gas) = request.gas {
        object.insert("gas".to_string(), quantity(gas));
    }
    if let Some(gas_price) = request.gas_price {
        object.insert("gasPrice".to_string(), quantity(gas_price));
    }
    if let Some(value) = request.value {
        object.insert("value".to_string(), quantity(value));
    }
    vec![Value::Object(object)]
}

pub(crate) fn hex_bytes(value: &Value) -> Result<Vec<u8>, ClientError> {
    let text = value.as_str().ok_or_else(|| ClientError::ResponseError {
        message: format!("Expected hex data, got {}", value),
    })?;
    decode_hex(text).map_err(|e| ClientError::ResponseError {
        message: format!("Invalid hex data '{}': {}", text, e),
    })
}

pub(crate) fn hex_quantity(value: &Value) -> Result<u64, ClientError> {
    let text = value.as_str().ok_or_else(|| ClientError::ResponseError {
        message: format!("Expected hex quantity, got {}", value),
    })?;
    u64::from_str_radix(strip_0x_prefix(text), 16).map_err(|e| ClientError::ResponseError {
        message: format!("Invalid hex quantity '{}': {}", text, e),
    })
}
