use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

/// Lifecycle event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Emitted after a read-only call returns
    CallExecuted,
    /// Emitted after a transaction is accepted by the client
    TransactionSent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallExecutedEventData {
    pub contract_name: Option<String>,
    pub address: String,
    pub signature: String,
    /// Lowercase hex without `0x`.
    pub call_data: String,
    pub result_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionSentEventData {
    pub contract_name: Option<String>,
    pub address: String,
    pub signature: String,
    pub call_data: String,
    pub gas: u64,
    pub transaction_hash: String,
}

#[derive(Debug, Clone)]
pub enum EventData {
    CallExecuted(CallExecutedEventData),
    TransactionSent(TransactionSentEventData),
}

/// Async event emitter using Tokio broadcast
#[derive(Clone)]
pub struct AsyncEventEmitter {
    sender: broadcast::Sender<(EventType, EventData)>,
}

impl AsyncEventEmitter {
    pub fn new(buffer: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(buffer);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<(EventType, EventData)> {
        self.sender.subscribe()
    }

    pub async fn emit(&self, event_type: EventType, data: EventData) {
        // No subscribers is not an error
        let _ = self.sender.send((event_type, data));
    }
}

static DEBUG: AtomicBool = AtomicBool::new(false);
static TRACE_CALLS: AtomicBool = AtomicBool::new(false);
static EVENTS: Lazy<AsyncEventEmitter> = Lazy::new(|| AsyncEventEmitter::new(32));

/// Global runtime config singleton
pub struct Config;

impl Config {
    /// Whether encoded call data is logged.
    pub fn debug() -> bool {
        DEBUG.load(Ordering::Relaxed)
    }

    /// Whether calls and transactions emit lifecycle events.
    pub fn trace_calls() -> bool {
        TRACE_CALLS.load(Ordering::Relaxed)
    }

    pub fn events() -> AsyncEventEmitter {
        EVENTS.clone()
    }

    pub fn configure(new_debug: Option<bool>, new_trace_calls: Option<bool>) {
        if let Some(d) = new_debug {
            DEBUG.store(d, Ordering::Relaxed);
        }
        if let Some(t) = new_trace_calls {
            TRACE_CALLS.store(t, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emitter_delivers_to_subscribers() {
        let emitter = AsyncEventEmitter::new(4);
        let mut receiver = emitter.subscribe();

        let data = TransactionSentEventData {
            contract_name: Some("Math".to_string()),
            address: "0x01".to_string(),
            signature: "increment(uint256)".to_string(),
            call_data: "7cf5dab0".to_string(),
            gas: 900,
            transaction_hash: "0xabc".to_string(),
        };
        emitter
            .emit(EventType::TransactionSent, EventData::TransactionSent(data.clone()))
            .await;

        let (event_type, received) = receiver.recv().await.unwrap();
        assert_eq!(event_type, EventType::TransactionSent);
        match received {
            EventData::TransactionSent(received) => assert_eq!(received, data),
            other => panic!("Unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn emitting_without_subscribers_is_silent() {
        let emitter = AsyncEventEmitter::new(1);
        emitter
            .emit(
                EventType::CallExecuted,
                EventData::CallExecuted(CallExecutedEventData {
                    contract_name: None,
                    address: "0x01".to_string(),
                    signature: "return13()".to_string(),
                    call_data: "16216f39".to_string(),
                    result_length: 32,
                }),
            )
            .await;
    }
}
