//! Provides input/output functionality for structure file formats.
//!
//! The [`traits::StructureFile`] trait gives a uniform reader/writer interface,
//! and [`poscar::PoscarFile`] implements it for the VASP POSCAR/CONTCAR format.

pub mod poscar;
pub mod traits;
