use crate::core::io::traits::StructureFile;
use crate::core::models::poscar::Poscar;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const TITLE_LINE: usize = 0;
const SCALE_LINE: usize = 1;
const LATTICE_LINES: usize = 2;
const ELEMENTS_LINE: usize = 5;
const COUNTS_LINE: usize = 6;
const SELECTIVE_LINE: usize = 7;

#[derive(Debug, Error)]
pub enum PoscarError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PoscarParseErrorKind,
    },
    #[error("Unexpected end of file: line {line} should hold {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoscarParseErrorKind {
    #[error("Invalid scale factor (value: '{value}')")]
    InvalidScaleFactor { value: String },
    #[error("Invalid atom count (value: '{value}')")]
    InvalidAtomCount { value: String },
}

fn line_at<'a>(
    lines: &'a [String],
    index: usize,
    expected: &'static str,
) -> Result<&'a str, PoscarError> {
    lines
        .get(index)
        .map(String::as_str)
        .ok_or(PoscarError::UnexpectedEof {
            line: index + 1,
            expected,
        })
}

/// Reader and writer for VASP POSCAR/CONTCAR files in direct coordinates.
///
/// Reading keeps the lattice and atom lines as trimmed raw text. The coordinate
/// mode line is consumed but not checked, and anything after the atom block
/// (velocities, predictor-corrector data) is ignored. Writing always emits a
/// `Direct` mode line and omits the mode-independent blocks.
pub struct PoscarFile;

impl StructureFile for PoscarFile {
    type Error = PoscarError;

    fn read_from(reader: &mut impl BufRead) -> Result<Poscar, Self::Error> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;

        let title = line_at(&lines, TITLE_LINE, "the title")?.trim().to_string();

        let scale_str = line_at(&lines, SCALE_LINE, "the scale factor")?.trim();
        let scale_factor: f64 = scale_str.parse().map_err(|_| PoscarError::Parse {
            line: SCALE_LINE + 1,
            kind: PoscarParseErrorKind::InvalidScaleFactor {
                value: scale_str.into(),
            },
        })?;

        let mut lattice_vectors: [String; 3] = Default::default();
        for (offset, vector) in lattice_vectors.iter_mut().enumerate() {
            *vector = line_at(&lines, LATTICE_LINES + offset, "a lattice vector")?
                .trim()
                .to_string();
        }

        let elements: Vec<String> = line_at(&lines, ELEMENTS_LINE, "the element symbols")?
            .split_whitespace()
            .map(String::from)
            .collect();

        let atom_counts = line_at(&lines, COUNTS_LINE, "the atom counts")?
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|_| PoscarError::Parse {
                    line: COUNTS_LINE + 1,
                    kind: PoscarParseErrorKind::InvalidAtomCount {
                        value: token.into(),
                    },
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let selective_dynamics = line_at(&lines, SELECTIVE_LINE, "the coordinate mode")?
            .trim()
            .to_lowercase()
            .starts_with('s');

        // The mode line ("Direct"/"Cartesian") follows the optional "Selective dynamics" line.
        let first_atom = if selective_dynamics {
            SELECTIVE_LINE + 2
        } else {
            SELECTIVE_LINE + 1
        };
        let total: usize = atom_counts.iter().sum();

        let mut positions = Vec::with_capacity(total);
        let mut selective_flags: Vec<Vec<String>> = Vec::new();
        for index in first_atom..first_atom + total {
            let line = line_at(&lines, index, "an atom position")?;
            positions.push(line.trim().to_string());
            if selective_dynamics {
                selective_flags.push(line.split_whitespace().skip(3).map(String::from).collect());
            }
        }

        Ok(Poscar {
            title,
            scale_factor,
            lattice_vectors,
            elements,
            atom_counts,
            selective_dynamics,
            positions,
            selective_flags,
        })
    }

    fn write_to(structure: &Poscar, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "{}", structure.title)?;
        // Debug formatting always keeps a decimal point or exponent (`1.0`, not `1`).
        writeln!(writer, "{:?}", structure.scale_factor)?;
        for vector in &structure.lattice_vectors {
            writeln!(writer, "{}", vector)?;
        }

        writeln!(writer, "{}", structure.elements.join(" "))?;
        let counts: Vec<String> = structure
            .atom_counts
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(writer, "{}", counts.join(" "))?;

        if structure.selective_dynamics {
            writeln!(writer, "Selective")?;
        }
        writeln!(writer, "Direct")?;

        for position in &structure.positions {
            writeln!(writer, "{}", position)?;
        }
        Ok(())
    }
}
