//! Building and publishing completion notifications.

pub mod envelope;
pub mod formatter;

pub use envelope::NotificationEnvelope;
pub use formatter::NotificationFormatter;
