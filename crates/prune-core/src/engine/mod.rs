//! # Engine Module
//!
//! Shared plumbing between the pure [`core`](crate::core) layer and the batch
//! [`workflows`](crate::workflows):
//!
//! - [`config`] - The explicit batch configuration (file pattern, output suffix,
//!   atoms to delete, working directory) and its builder.
//! - [`error`] - [`EngineError`](error::EngineError), the error type returned by workflows.
//! - [`progress`] - Callback-based progress events for front-ends to render.

pub mod config;
pub mod error;
pub mod progress;
