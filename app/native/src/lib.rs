//! Multiview - lay out many live streams in one viewport.
//!
//! This library contains the mosaic engine that places stream tiles on a
//! layout surface and tracks their order, plus the configuration and CLI
//! layers around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod mosaic;
