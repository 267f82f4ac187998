use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::HookError;

pub const BIZ_TYPE: i32 = 0;
pub const TOPIC: &str = "inference_completed";
pub const QUEUE_TAG: i32 = -1;

/// Wire wrapper placed around every notification before it reaches the queue.
///
/// Only `payload` varies between messages; the routing fields are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportEnvelope {
    pub biz_type: i32,
    pub topic: String,
    pub metadata: Map<String, Value>,
    pub payload: String,
    pub queue_tag: i32,
    pub key: String,
}

impl TransportEnvelope {
    #[must_use]
    pub fn wrap(message: &str) -> Self {
        Self {
            biz_type: BIZ_TYPE,
            topic: TOPIC.to_string(),
            metadata: Map::new(),
            payload: general_purpose::STANDARD.encode(message.as_bytes()),
            queue_tag: QUEUE_TAG,
            key: String::new(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, HookError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Recovers the message that was wrapped.
    ///
    /// # Errors
    ///
    /// Returns an error if `payload` is not valid base64 or does not hold UTF-8 text.
    pub fn decode_payload(&self) -> Result<String, HookError> {
        let bytes = general_purpose::STANDARD.decode(&self.payload)?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_sets_routing_fields() {
        let envelope = TransportEnvelope::wrap(r#"{"id":"t-1"}"#);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["biz_type"], 0);
        assert_eq!(json["topic"], "inference_completed");
        assert_eq!(json["metadata"], serde_json::json!({}));
        assert_eq!(json["queue_tag"], -1);
        assert_eq!(json["key"], "");
        assert_eq!(json["payload"], "eyJpZCI6InQtMSJ9");
    }

    #[test]
    fn test_decode_payload_rejects_garbage() {
        let mut envelope = TransportEnvelope::wrap("ok");
        envelope.payload = "not base64!".to_string();
        assert!(matches!(
            envelope.decode_payload(),
            Err(HookError::DecodeError(_))
        ));
    }
}
