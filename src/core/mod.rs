//! Configuration and the request/outcome types handed over by the inference pipeline.

pub mod config;
pub mod models;
