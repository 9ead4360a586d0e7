//! # Core Module
//!
//! Fundamental building blocks for editing POSCAR-style structure files.
//!
//! - **Structure Representation** ([`models`]) - The [`Poscar`](models::poscar::Poscar) record and
//!   the atom-deletion transformation that keeps species counts consistent.
//! - **File I/O** ([`io`]) - Reading and writing the line-oriented POSCAR text format.
//!
//! Nothing in this module touches the filesystem except the path-based convenience
//! methods on [`io::traits::StructureFile`].

pub mod io;
pub mod models;
