//! High-level batch procedures built on the [`core`](crate::core) and [`engine`](crate::engine) layers.

pub mod delete;
