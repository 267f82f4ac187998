use std::error::Error;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::models::{
    ImageBatch, InvocationError, SingleImage, TaskKind, TaskOutcome, TaskRequest,
};
use crate::errors::HookError;

/// Reason attached when a task produced no usable list of image locations.
pub const NO_IMAGES_REASON: &str = "the images is None or the image is a Base64 stream";
pub const SINGLE_IMAGE_PREFIX: &str = "extras_single_image_hook: ";
pub const INVALID_TASK_PREFIX: &str = "invalid_task_hook: ";
pub const EXCEPTION_PREFIX: &str = "exception_task_hook: ";

/// JSON body describing one finished inference task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEnvelope {
    pub task: TaskKind,
    pub id: Option<String>,
    pub model: Option<String>,
    pub vae: Option<String>,
    pub quality: Option<String>,
    pub options: Option<Map<String, Value>>,
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl NotificationEnvelope {
    fn echo(req: &TaskRequest, images: Option<Vec<String>>, reason: Option<String>) -> Self {
        Self {
            task: req.task,
            id: req.id.clone(),
            model: req.model.clone(),
            vae: req.vae.clone(),
            quality: req.quality.clone(),
            options: req.options.clone(),
            images,
            reason,
        }
    }

    #[must_use]
    pub fn from_images(req: &TaskRequest, images: &ImageBatch) -> Self {
        match images {
            ImageBatch::Locations(locations) => Self::echo(req, Some(locations.clone()), None),
            ImageBatch::Inline(_) | ImageBatch::Missing => {
                Self::echo(req, None, Some(NO_IMAGES_REASON.to_string()))
            }
        }
    }

    #[must_use]
    pub fn from_single_image(req: &TaskRequest, image: &SingleImage) -> Self {
        match image {
            SingleImage::Location(location) => {
                Self::from_images(req, &ImageBatch::Locations(vec![location.clone()]))
            }
            SingleImage::Inline(_) | SingleImage::Missing => Self::echo(
                req,
                None,
                Some(format!("{SINGLE_IMAGE_PREFIX}{NO_IMAGES_REASON}")),
            ),
        }
    }

    #[must_use]
    pub fn from_error(req: &TaskRequest, error: &InvocationError) -> Self {
        Self::echo(req, None, Some(format!("{INVALID_TASK_PREFIX}{}", error.error)))
    }

    #[must_use]
    pub fn from_exception(req: &TaskRequest, error: &(dyn Error + 'static)) -> Self {
        Self::echo(
            req,
            None,
            Some(format!("{EXCEPTION_PREFIX}{}", render_trace(error))),
        )
    }

    #[must_use]
    pub fn from_outcome(req: &TaskRequest, outcome: &TaskOutcome) -> Self {
        match outcome {
            TaskOutcome::Images(images) => Self::from_images(req, images),
            TaskOutcome::Image(image) => Self::from_single_image(req, image),
            TaskOutcome::Error(error) => Self::from_error(req, error),
            TaskOutcome::Exception(error) => Self::from_exception(req, &**error),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, HookError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The error's message followed by each underlying cause, joined with `": "`.
pub fn render_trace(error: &(dyn Error + 'static)) -> String {
    let mut trace = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        trace.push_str(": ");
        trace.push_str(&cause.to_string());
        source = cause.source();
    }
    trace
}
