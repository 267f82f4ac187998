//! Per-task completion hooks.
//!
//! Every hook builds a [`NotificationEnvelope`], serializes it once, publishes it once
//! through the [`QueueSender`] and returns the serialized envelope. Outcomes without
//! usable images, refused tasks and exceptions are reported through `reason`, never
//! raised. Only a failure to publish surfaces as an error.

use std::error::Error;

use tracing::warn;

use super::envelope::NotificationEnvelope;
use crate::core::models::{ImageBatch, InvocationError, SingleImage, TaskOutcome, TaskRequest};
use crate::errors::HookError;
use crate::queue::{MessageQueue, QueueSender};

pub struct NotificationFormatter<Q> {
    sender: QueueSender<Q>,
}

impl<Q: MessageQueue> NotificationFormatter<Q> {
    pub fn new(sender: QueueSender<Q>) -> Self {
        Self { sender }
    }

    pub fn sender(&self) -> &QueueSender<Q> {
        &self.sender
    }

    async fn publish(
        &self,
        envelope: &NotificationEnvelope,
        destination: Option<&str>,
    ) -> Result<String, HookError> {
        if let Some(reason) = &envelope.reason {
            warn!(task = ?envelope.task, id = ?envelope.id, reason = %reason, "Task finished without images");
        }
        let message = envelope.to_json()?;
        self.sender.send(&message, destination).await?;
        Ok(message)
    }

    /// # Errors
    ///
    /// Returns an error if the notification cannot be published.
    #[tracing::instrument(level = "info", skip_all, fields(id = ?req.id))]
    pub async fn text_to_image(
        &self,
        req: &TaskRequest,
        images: &ImageBatch,
    ) -> Result<String, HookError> {
        self.publish(&NotificationEnvelope::from_images(req, images), None)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the notification cannot be published.
    #[tracing::instrument(level = "info", skip_all, fields(id = ?req.id))]
    pub async fn image_to_image(
        &self,
        req: &TaskRequest,
        images: &ImageBatch,
    ) -> Result<String, HookError> {
        self.publish(&NotificationEnvelope::from_images(req, images), None)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the notification cannot be published.
    #[tracing::instrument(level = "info", skip_all, fields(id = ?req.id))]
    pub async fn extras_batch_images(
        &self,
        req: &TaskRequest,
        images: &ImageBatch,
    ) -> Result<String, HookError> {
        self.publish(&NotificationEnvelope::from_images(req, images), None)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the notification cannot be published.
    #[tracing::instrument(level = "info", skip_all, fields(id = ?req.id))]
    pub async fn interrogate(
        &self,
        req: &TaskRequest,
        images: &ImageBatch,
    ) -> Result<String, HookError> {
        self.publish(&NotificationEnvelope::from_images(req, images), None)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the notification cannot be published.
    #[tracing::instrument(level = "info", skip_all, fields(id = ?req.id))]
    pub async fn extras_single_image(
        &self,
        req: &TaskRequest,
        image: &SingleImage,
    ) -> Result<String, HookError> {
        self.publish(&NotificationEnvelope::from_single_image(req, image), None)
            .await
    }

    /// Reports a task the inference endpoint refused to run.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be published.
    #[tracing::instrument(level = "info", skip_all, fields(id = ?req.id))]
    pub async fn invalid_task(
        &self,
        req: &TaskRequest,
        error: &InvocationError,
    ) -> Result<String, HookError> {
        self.publish(&NotificationEnvelope::from_error(req, error), None)
            .await
    }

    /// Reports a task that failed with an error, including its full cause chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be published.
    #[tracing::instrument(level = "info", skip_all, fields(id = ?req.id))]
    pub async fn exception_task(
        &self,
        req: &TaskRequest,
        error: &(dyn Error + Send + Sync + 'static),
    ) -> Result<String, HookError> {
        self.publish(&NotificationEnvelope::from_exception(req, error), None)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the notification cannot be published.
    pub async fn notify(
        &self,
        req: &TaskRequest,
        outcome: &TaskOutcome,
    ) -> Result<String, HookError> {
        self.notify_to(req, outcome, None).await
    }

    /// Like [`notify`](Self::notify) but publishes to `destination` when one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be published.
    #[tracing::instrument(level = "info", skip_all, fields(id = ?req.id))]
    pub async fn notify_to(
        &self,
        req: &TaskRequest,
        outcome: &TaskOutcome,
        destination: Option<&str>,
    ) -> Result<String, HookError> {
        self.publish(&NotificationEnvelope::from_outcome(req, outcome), destination)
            .await
    }
}
