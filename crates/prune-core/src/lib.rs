//! # poscar-prune Core Library
//!
//! A small library for removing atoms from POSCAR/CONTCAR crystal-structure files,
//! renumbering the per-species atom counts, and writing the edited structure back out.
//!
//! ## Architectural Philosophy
//!
//! The library follows the same layered split used across our tooling:
//!
//! - **[`core`]: The Foundation.** Contains the stateless [`Poscar`](core::models::poscar::Poscar)
//!   record, the pure atom-deletion transformation, and the POSCAR reader/writer.
//!
//! - **[`engine`]: The Glue.** Holds the explicit [`DeletionConfig`](engine::config::DeletionConfig)
//!   that replaces hard-coded batch settings, the crate-wide error type, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Drives a complete batch: discovering input files,
//!   applying parse → delete → write to each one, and summarizing what was produced.

pub mod core;
pub mod engine;
pub mod workflows;
