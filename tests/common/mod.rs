#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use inference_hook::core::models::{TaskKind, TaskRequest};
use inference_hook::errors::HookError;
use inference_hook::queue::{MessageQueue, SendReceipt, TransportEnvelope};
use serde_json::json;

/// In-memory queue that records every send and can be told to fail.
#[derive(Default)]
pub struct RecordingQueue {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail_with: Option<String>,
}

impl RecordingQueue {
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Decodes the transport body of the `index`-th message back into the notification JSON.
    pub fn notification(&self, index: usize) -> String {
        let (_, body) = &self.sent()[index];
        let transport: TransportEnvelope = serde_json::from_str(body).unwrap();
        transport.decode_payload().unwrap()
    }
}

#[async_trait]
impl MessageQueue for RecordingQueue {
    async fn send_message(&self, queue_url: &str, body: String) -> Result<SendReceipt, HookError> {
        if let Some(message) = &self.fail_with {
            return Err(HookError::queue(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message.clone(),
            )));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push((queue_url.to_string(), body));
        Ok(SendReceipt {
            message_id: Some(format!("msg-{}", sent.len())),
            ..SendReceipt::default()
        })
    }
}

pub fn sample_request(task: TaskKind) -> TaskRequest {
    TaskRequest {
        task,
        id: Some("c0ffee-01".to_string()),
        model: Some("sd_xl_base_1.0.safetensors".to_string()),
        vae: Some("sdxl_vae.safetensors".to_string()),
        quality: Some("high".to_string()),
        options: json!({"steps": 30, "cfg_scale": 7.5, "prompt": "a lighthouse at dusk"})
            .as_object()
            .cloned(),
    }
}
