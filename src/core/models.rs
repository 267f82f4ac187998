use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    TextToImage,
    ImageToImage,
    ExtrasSingleImage,
    ExtrasBatchImages,
    Interrogate,
}

/// The inference request a notification reports on. Echoed verbatim into every envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub task: TaskKind,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub vae: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub options: Option<Map<String, Value>>,
}

impl TaskRequest {
    #[must_use]
    pub fn new(task: TaskKind, id: impl Into<String>) -> Self {
        Self {
            task,
            id: Some(id.into()),
            model: None,
            vae: None,
            quality: None,
            options: None,
        }
    }
}

/// What a batch-producing task handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageBatch {
    /// Storage locations of the generated images, possibly none.
    Locations(Vec<String>),
    /// Image data returned inline as a base64 stream.
    Inline(String),
    Missing,
}

impl From<Vec<String>> for ImageBatch {
    fn from(locations: Vec<String>) -> Self {
        ImageBatch::Locations(locations)
    }
}

impl From<Value> for ImageBatch {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map_or(ImageBatch::Missing, ImageBatch::Locations),
            Value::String(stream) => ImageBatch::Inline(stream),
            _ => ImageBatch::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleImage {
    Location(String),
    Inline(String),
    Missing,
}

impl From<Option<String>> for SingleImage {
    fn from(location: Option<String>) -> Self {
        location.map_or(SingleImage::Missing, SingleImage::Location)
    }
}

/// Error body returned by the inference endpoint for a task it refused to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationError {
    pub error: String,
}

impl InvocationError {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug)]
pub enum TaskOutcome {
    Images(ImageBatch),
    Image(SingleImage),
    Error(InvocationError),
    Exception(anyhow::Error),
}
