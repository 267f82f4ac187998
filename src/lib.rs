//! Inference hook - publishes completion notices for image-generation tasks.
//!
//! When an inference task finishes, the pipeline hands the originating request and
//! the task outcome to a [`notify::NotificationFormatter`]. The formatter turns them
//! into a JSON notification and publishes it to SQS for downstream consumers.
//!
//! # Architecture
//!
//! - [`notify::envelope`] builds the notification JSON for each kind of outcome
//! - [`queue::TransportEnvelope`] base64-wraps it with fixed routing fields
//! - [`queue::QueueSender`] resolves the destination and issues a single send
//! - [`queue::SqsQueue`] is the `aws-sdk-sqs` client behind the [`queue::MessageQueue`] seam
//!
//! # Example
//!
//! ```no_run
//! use inference_hook::core::config::HookConfig;
//! use inference_hook::core::models::{ImageBatch, TaskKind, TaskRequest};
//! use inference_hook::notify::NotificationFormatter;
//! use inference_hook::queue::{QueueSender, SqsQueue};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! inference_hook::setup_logging();
//!
//! let config = HookConfig::from_env()?;
//! let sender = QueueSender::new(SqsQueue::from_config(&config).await, &config);
//! let hooks = NotificationFormatter::new(sender);
//!
//! let req = TaskRequest::new(TaskKind::TextToImage, "task-42");
//! let images = ImageBatch::Locations(vec!["s3://outputs/task-42/0.png".to_string()]);
//! let message = hooks.text_to_image(&req, &images).await?;
//! println!("published {message}");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod errors;
pub mod notify;
pub mod queue;

/// Configure structured logging with JSON format for `CloudWatch` Logs.
///
/// Builds with the `debug-logs` feature raise the level to DEBUG.
///
/// # Example
///
/// ```
/// inference_hook::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    #[cfg(feature = "debug-logs")]
    let level = tracing_subscriber::filter::LevelFilter::DEBUG;
    #[cfg(not(feature = "debug-logs"))]
    let level = tracing_subscriber::filter::LevelFilter::INFO;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_filter(level);

    // A subscriber may already be installed by the host process.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
