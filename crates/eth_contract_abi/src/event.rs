use crate::{
    ABIValue, ContractError, ParamDescriptor, TypeDescriptor, codec,
    signature::{AbiSignature, log_topic},
    utils::decode_hex,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A log entry as reported in a transaction receipt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// The emitting contract's address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// `0x`-prefixed 32 byte topics; slot 0 holds the event's log topic.
    #[serde(default)]
    pub topics: Vec<String>,
    /// `0x`-prefixed hex of the ABI-encoded non-indexed values.
    #[serde(default)]
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

impl LogEntry {
    /// Whether any topic equals `topic`, ignoring hex case.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t.eq_ignore_ascii_case(topic))
    }
}

/// A transaction receipt, reduced to what event lookups need.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    #[serde(default)]
    pub transaction_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// A contract event's static metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    /// Every input, indexed or not, in declaration order.
    pub inputs: Vec<ParamDescriptor>,
    pub anonymous: bool,
}

impl AbiSignature for Event {
    fn name(&self) -> &str {
        &self.name
    }

    fn inputs(&self) -> &[ParamDescriptor] {
        &self.inputs
    }
}

impl Event {
    pub fn new(name: &str, inputs: Vec<ParamDescriptor>, anonymous: bool) -> Self {
        Self {
            name: name.to_string(),
            inputs,
            anonymous,
        }
    }

    /// The full signature hash, `0x`-prefixed, identifying this event's log entries.
    pub fn log_topic(&self) -> String {
        log_topic(&self.signature())
    }

    /// The non-indexed inputs, which make up a log entry's data segment.
    pub fn non_indexed_outputs(&self) -> Vec<&ParamDescriptor> {
        self.inputs.iter().filter(|input| !input.indexed).collect()
    }

    /// Keeps the entries whose topics include this event's log topic.
    pub fn matching_transaction_logs<'a, I>(&self, logs: I) -> Vec<LogEntry>
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let topic = self.log_topic();
        logs.into_iter()
            .filter(|log| log.has_topic(&topic))
            .cloned()
            .collect()
    }

    /// Decodes a log entry into a map from parameter name to value.
    ///
    /// Non-indexed values come from the data segment. With `with_indexed`, indexed values are read
    /// from topic slot `position + 1`, where `position` counts every input. Indexed inputs of dynamic
    /// type only have their hash in the topic, so the raw 32 bytes are returned for them.
    pub fn decode_log(
        &self,
        log_entry: &LogEntry,
        with_indexed: bool,
    ) -> Result<HashMap<String, ABIValue>, ContractError> {
        let data = decode_hex(&log_entry.data).map_err(|e| ContractError::DecodingError {
            message: format!("Invalid log data for event '{}': {}", self.name, e),
        })?;

        let outputs = self.non_indexed_outputs();
        let output_types: Vec<TypeDescriptor> =
            outputs.iter().map(|o| o.abi_type.clone()).collect();
        let values = codec::decode(&output_types, &data)?;

        let mut event_data: HashMap<String, ABIValue> = outputs
            .iter()
            .zip(values)
            .map(|(output, value)| (output.name.clone(), value))
            .collect();

        if with_indexed {
            for (position, input) in self.inputs.iter().enumerate() {
                if !input.indexed {
                    continue;
                }
                let slot = position + 1;
                let topic = log_entry.topics.get(slot).ok_or_else(|| {
                    ContractError::InsufficientTopicsError {
                        event: self.name.clone(),
                        required: slot,
                        available: log_entry.topics.len(),
                    }
                })?;
                let topic_bytes = decode_hex(topic).map_err(|e| ContractError::DecodingError {
                    message: format!("Invalid topic {} for event '{}': {}", slot, self.name, e),
                })?;

                let value = if input.abi_type.is_dynamic() {
                    ABIValue::Bytes(topic_bytes)
                } else {
                    codec::decode_single(&input.abi_type, &topic_bytes)?
                };
                event_data.insert(input.name.clone(), value);
            }
        }

        Ok(event_data)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let args: Vec<String> = self
            .inputs
            .iter()
            .map(|input| {
                if input.indexed {
                    format!("{} indexed {}", input.abi_type, input.name)
                } else {
                    format!("{} {}", input.abi_type, input.name)
                }
            })
            .collect();
        write!(f, "{}({})", self.name, args.join(", "))
    }
}
