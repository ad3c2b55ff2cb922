//! Subject sequence provider: FASTA loading and the three strand views.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;
use thiserror::Error;

use crate::encode;
use crate::index::Strand;

/// Errors returned while loading or validating a subject sequence.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// FASTA record could not be parsed.
    #[error("Invalid FASTA: {0}")]
    Fasta(String),
    /// Sequence contains no bases.
    #[error("Sequence is empty")]
    Empty,
    /// Symbol outside `ACGT` (case-insensitive).
    #[error("Invalid base {base:?} at offset {pos}")]
    InvalidBase {
        /// 0-based offset of the offending symbol.
        pos: usize,
        /// The offending symbol.
        base: char,
    },
}

/// Forward, complement and reverse-complement strands of one subject.
///
/// Immutable once built; all three strands have the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrandSet {
    forward: Vec<u8>,
    complement: Vec<u8>,
    reverse_complement: Vec<u8>,
}

impl StrandSet {
    /// Validate and uppercase `forward`, then derive the other two strands.
    pub fn from_forward(forward: &[u8]) -> Result<Self, SequenceError> {
        if forward.is_empty() {
            return Err(SequenceError::Empty);
        }
        let forward = encode::normalize(forward)
            .map_err(|(pos, base)| SequenceError::InvalidBase {
                pos,
                base: base as char,
            })?;
        let complement = encode::complement(&forward);
        let reverse_complement = encode::reverse_complement(&forward);
        Ok(Self {
            forward,
            complement,
            reverse_complement,
        })
    }

    /// Read every record of a FASTA stream and concatenate their sequences.
    pub fn from_fasta_reader<R: Read>(reader: R) -> Result<Self, SequenceError> {
        let reader = fasta::Reader::new(reader);
        let mut seq = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| SequenceError::Fasta(e.to_string()))?;
            seq.extend_from_slice(record.seq());
        }
        Self::from_forward(&seq)
    }

    /// Open `path` and load it with [`StrandSet::from_fasta_reader`].
    pub fn from_fasta_path(path: &Path) -> Result<Self, SequenceError> {
        let file = File::open(path)?;
        Self::from_fasta_reader(file)
    }

    /// Strand selected by `strand`.
    #[inline]
    pub fn strand(&self, strand: Strand) -> &[u8] {
        match strand {
            Strand::Forward => &self.forward,
            Strand::Complement => &self.complement,
            Strand::ReverseComplement => &self.reverse_complement,
        }
    }

    #[inline]
    pub fn forward(&self) -> &[u8] {
        &self.forward
    }

    #[inline]
    pub fn complement(&self) -> &[u8] {
        &self.complement
    }

    #[inline]
    pub fn reverse_complement(&self) -> &[u8] {
        &self.reverse_complement
    }

    /// Subject length (identical for all strands).
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Always false: construction rejects empty subjects.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Forward base at `pos`, `None` past the end.
    pub fn base_at(&self, pos: usize) -> Option<u8> {
        self.forward.get(pos).copied()
    }

    /// Inclusive forward window `start..=end`, `None` when out of range or
    /// when `start > end`.
    pub fn window(&self, start: usize, end: usize) -> Option<&[u8]> {
        if start > end {
            return None;
        }
        self.forward.get(start..=end)
    }
}
