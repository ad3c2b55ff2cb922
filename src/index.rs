//! KmerIndex: exact k-mer → ascending positions, one per strand, grouped in an IndexSet.

use std::collections::HashMap;
use std::fmt;

use log::info;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned while building an index.
pub enum IndexError {
    /// `k` is zero or longer than the sequence being indexed.
    #[error("Invalid k={k}: must be in 1..={len}")]
    InvalidK {
        /// Requested k-mer size.
        k: usize,
        /// Length of the sequence it was checked against.
        len: usize,
    },
    /// The strands handed to [`IndexSet::build`] differ in length.
    #[error("Strand lengths differ: forward={forward}, complement={complement}, reverse complement={reverse_complement}")]
    StrandLengthMismatch {
        forward: usize,
        complement: usize,
        reverse_complement: usize,
    },
}

/// Strand tag selecting one of the three indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    /// Subject as read.
    Forward,
    /// Base-by-base complement, same orientation.
    Complement,
    /// Complement read 3′→5′.
    ReverseComplement,
}

impl Strand {
    /// All strands in index order.
    pub const ALL: [Strand; 3] = [
        Strand::Forward,
        Strand::Complement,
        Strand::ReverseComplement,
    ];
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strand::Forward => "forward",
            Strand::Complement => "complement",
            Strand::ReverseComplement => "reverse complement",
        };
        f.write_str(name)
    }
}

/// Check `len >= k` for any sequence-like input and `k >= 1`.
///
/// Returns the length on success so callers can reuse it.
#[inline]
pub(crate) fn ensure_len_at_least(len: usize, k: usize) -> Result<usize, IndexError> {
    if k == 0 || len < k {
        return Err(IndexError::InvalidK { k, len });
    }
    Ok(len)
}

/// Exact k-mer index over a single strand.
///
/// Position lists are filled by one left-to-right scan, so every list is
/// strictly ascending.
#[derive(Clone, Debug)]
pub struct KmerIndex {
    k: usize,
    map: HashMap<Vec<u8>, Vec<usize>>,
    total_positions: usize,
}

impl KmerIndex {
    /// Index every k-mer of `seq`.
    pub fn build(seq: &[u8], k: usize) -> Result<Self, IndexError> {
        let len = ensure_len_at_least(seq.len(), k)?;
        let mut map: HashMap<Vec<u8>, Vec<usize>> = HashMap::new();
        for (i, window) in seq.windows(k).enumerate() {
            match map.get_mut(window) {
                Some(posts) => posts.push(i),
                None => {
                    map.insert(window.to_vec(), vec![i]);
                }
            }
        }
        Ok(KmerIndex {
            k,
            map,
            total_positions: len - k + 1,
        })
    }

    /// Positions of `kmer`, or `None` if it never occurs.
    #[inline]
    pub fn lookup(&self, kmer: &[u8]) -> Option<&[usize]> {
        self.map.get(kmer).map(Vec::as_slice)
    }

    /// Return the k used by this index.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of distinct k-mers.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of indexed positions (`seq.len() - k + 1`).
    #[inline]
    pub fn total_positions(&self) -> usize {
        self.total_positions
    }

    /// Iterate `(kmer, positions)` in arbitrary key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[usize])> {
        self.map.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}

/// Three k-mer indexes sharing one `k`: forward, complement, reverse complement.
#[derive(Clone, Debug)]
pub struct IndexSet {
    k: usize,
    forward: KmerIndex,
    complement: KmerIndex,
    reverse_complement: KmerIndex,
}

impl IndexSet {
    /// Build one [`KmerIndex`] per strand with the same `k`.
    pub fn build(
        forward: &[u8],
        complement: &[u8],
        reverse_complement: &[u8],
        k: usize,
    ) -> Result<Self, IndexError> {
        if forward.len() != complement.len() || forward.len() != reverse_complement.len() {
            return Err(IndexError::StrandLengthMismatch {
                forward: forward.len(),
                complement: complement.len(),
                reverse_complement: reverse_complement.len(),
            });
        }
        ensure_len_at_least(forward.len(), k)?;

        let set = IndexSet {
            k,
            forward: KmerIndex::build(forward, k)?,
            complement: KmerIndex::build(complement, k)?,
            reverse_complement: KmerIndex::build(reverse_complement, k)?,
        };
        info!(
            "Built index set: k={}, positions={}, distinct fwd/comp/rc={}/{}/{}",
            k,
            set.forward.total_positions(),
            set.forward.len(),
            set.complement.len(),
            set.reverse_complement.len()
        );
        Ok(set)
    }

    /// Index selected by `strand`.
    #[inline]
    pub fn index(&self, strand: Strand) -> &KmerIndex {
        match strand {
            Strand::Forward => &self.forward,
            Strand::Complement => &self.complement,
            Strand::ReverseComplement => &self.reverse_complement,
        }
    }

    /// Positions of `kmer` on `strand`, or `None` if absent.
    #[inline]
    pub fn lookup(&self, strand: Strand, kmer: &[u8]) -> Option<&[usize]> {
        self.index(strand).lookup(kmer)
    }

    /// Return the k shared by all three indexes.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Length of the indexed strands.
    #[inline]
    pub fn subject_len(&self) -> usize {
        self.forward.total_positions() + self.k - 1
    }
}
