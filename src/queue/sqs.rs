use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::config::Region;
use tracing::debug;

use super::{MessageQueue, SendReceipt};
use crate::core::config::HookConfig;
use crate::errors::HookError;

/// [`MessageQueue`] backed by Amazon SQS.
#[derive(Debug, Clone)]
pub struct SqsQueue {
    client: SqsClient,
}

impl SqsQueue {
    #[must_use]
    pub fn new(client: SqsClient) -> Self {
        Self { client }
    }

    /// Builds a client from the shared AWS environment, applying the configured region if any.
    pub async fn from_config(config: &HookConfig) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = &config.aws_region {
            loader = loader.region(Region::new(region.clone()));
        }
        let shared_config = loader.load().await;
        Self::new(SqsClient::new(&shared_config))
    }
}

#[async_trait]
impl MessageQueue for SqsQueue {
    async fn send_message(&self, queue_url: &str, body: String) -> Result<SendReceipt, HookError> {
        debug!(queue_url, bytes = body.len(), "Sending message to SQS");
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await?;

        Ok(SendReceipt {
            message_id: output.message_id().map(str::to_string),
            md5_of_message_body: output.md5_of_message_body().map(str::to_string),
            sequence_number: output.sequence_number().map(str::to_string),
        })
    }
}
