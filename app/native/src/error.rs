//! Error types for Multiview.
//!
//! This module provides the application-level error type used by the CLI.
//! Engine errors are converted into it at the boundary.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::mosaic::MosaicError;

/// Errors that can occur during application execution.
///
/// Serializes with a `kind` tag so JSON output carries structured errors.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum MultiviewError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Layout or ordering operation failed.
    #[error("Mosaic error: {0}")]
    MosaicError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for MultiviewError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for MultiviewError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<MosaicError> for MultiviewError {
    fn from(err: MosaicError) -> Self { Self::MosaicError(err.to_string()) }
}

impl From<ConfigError> for MultiviewError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<String> for MultiviewError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for MultiviewError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
