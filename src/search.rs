//! SeedSearch: 3′-anchored seed lookup, backward extension, threshold filter, ranking.
//!
//! A query is anchored by its last `k` bases (the seed). Every occurrence of
//! the seed on the selected strand is extended toward the query's 5′ end one
//! base at a time, stopping at the first mismatch or at either sequence start.
//! Hits whose total identity (`extension + k`) reaches `min_match` are kept and
//! ranked by extension descending, then start ascending.

use std::borrow::Cow;

use log::{debug, trace};
use thiserror::Error;

use crate::builder::{BuildConfig, ExtensionMode};
use crate::index::{IndexError, IndexSet, Strand, ensure_len_at_least};
use crate::sequence::StrandSet;

/// Errors returned by [`SeedSearch`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Index could not be built (bad k).
    #[error(transparent)]
    Index(#[from] IndexError),
    /// A supplied index was built over a subject of a different length.
    #[error("Index covers {index_len} bases but the subject has {subject_len}")]
    IndexMismatch { index_len: usize, subject_len: usize },
    /// Query shorter than the seed.
    #[error("Query of length {query_len} is shorter than k={k}")]
    QueryTooShort { query_len: usize, k: usize },
    /// Identity threshold below the seed length.
    #[error("min_match={min_match} is below k={k}")]
    MinMatchBelowK { min_match: usize, k: usize },
}

/// One seed hit after extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchRecord {
    /// Start of the extended match in the subject (0-based).
    pub start: usize,
    /// Bases matched beyond the seed, walking toward the 5′ end.
    pub extension: usize,
}

impl MatchRecord {
    /// Total identity length for seed size `k`.
    #[inline]
    pub fn identity(&self, k: usize) -> usize {
        self.extension + k
    }

    /// Matched slice of `subject`, `None` if the record does not fit.
    pub fn matched<'s>(&self, subject: &'s [u8], k: usize) -> Option<&'s [u8]> {
        subject.get(self.start..self.start + self.identity(k))
    }
}

/// Ranked outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RankedResults {
    /// The seed does not occur on the searched strand.
    NoSeedHit,
    /// Seed hits meeting the threshold, ranked. May be empty.
    Hits(Vec<MatchRecord>),
}

impl Default for RankedResults {
    fn default() -> Self {
        RankedResults::Hits(Vec::new())
    }
}

impl RankedResults {
    /// True for the "seed not found" sentinel.
    #[inline]
    pub fn is_no_hit(&self) -> bool {
        matches!(self, RankedResults::NoSeedHit)
    }

    /// Ranked records; empty for the sentinel.
    pub fn hits(&self) -> &[MatchRecord] {
        match self {
            RankedResults::NoSeedHit => &[],
            RankedResults::Hits(h) => h,
        }
    }

    /// `(start, extension)` pairs, `[(-1, -1)]` for the sentinel.
    pub fn to_pairs(&self) -> Vec<(i64, i64)> {
        match self {
            RankedResults::NoSeedHit => vec![(-1, -1)],
            RankedResults::Hits(h) => h
                .iter()
                .map(|m| (m.start as i64, m.extension as i64))
                .collect(),
        }
    }

    /// Split [`to_pairs`](Self::to_pairs) into starts and extensions.
    pub fn separate_pairs(&self) -> (Vec<i64>, Vec<i64>) {
        self.to_pairs().into_iter().unzip()
    }
}

/// Sort by extension descending, start ascending on ties.
pub fn rank(hits: &mut [MatchRecord]) {
    hits.sort_unstable_by(|a, b| {
        b.extension
            .cmp(&a.extension)
            .then_with(|| a.start.cmp(&b.start))
    });
}

/// Count matching bases walking backward from `query[q_end]` and
/// `subject[s_end]` (both exclusive).
#[inline]
fn extend_back(query: &[u8], q_end: usize, subject: &[u8], s_end: usize) -> usize {
    query[..q_end]
        .iter()
        .rev()
        .zip(subject[..s_end].iter().rev())
        .take_while(|(q, s)| q == s)
        .count()
}

/// Reusable searcher over one subject and its [`IndexSet`].
///
/// Borrows the subject for `'a`; the index is either built here and owned or
/// borrowed from the caller. Each [`search`](Self::search) replaces the stored
/// result.
pub struct SeedSearch<'a> {
    strands: &'a StrandSet,
    index: Cow<'a, IndexSet>,
    k: usize,
    extension: ExtensionMode,
    last_strand: Strand,
    results: RankedResults,
}

impl<'a> SeedSearch<'a> {
    /// Build the index set for `strands` with seed size `k`.
    pub fn new(strands: &'a StrandSet, k: usize, cfg: BuildConfig) -> Result<Self, SearchError> {
        let index = crate::builder::build_index(strands, k)?;
        Ok(Self::from_parts(strands, Cow::Owned(index), cfg))
    }

    /// Reuse an index already built over `strands`.
    pub fn with_index(
        strands: &'a StrandSet,
        index: &'a IndexSet,
        cfg: BuildConfig,
    ) -> Result<Self, SearchError> {
        ensure_len_at_least(strands.len(), index.k())?;
        if index.subject_len() != strands.len() {
            return Err(SearchError::IndexMismatch {
                index_len: index.subject_len(),
                subject_len: strands.len(),
            });
        }
        Ok(Self::from_parts(strands, Cow::Borrowed(index), cfg))
    }

    fn from_parts(strands: &'a StrandSet, index: Cow<'a, IndexSet>, cfg: BuildConfig) -> Self {
        SeedSearch {
            strands,
            k: index.k(),
            index,
            extension: cfg.extension_mode(),
            last_strand: Strand::Forward,
            results: RankedResults::default(),
        }
    }

    /// Seed size.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn index(&self) -> &IndexSet {
        &self.index
    }

    #[inline]
    pub fn strands(&self) -> &StrandSet {
        self.strands
    }

    #[inline]
    pub fn extension_mode(&self) -> ExtensionMode {
        self.extension
    }

    /// Positions of `kmer` on `strand`, `None` when absent.
    #[inline]
    pub fn query_seed(&self, kmer: &[u8], strand: Strand) -> Option<&[usize]> {
        self.index.lookup(strand, kmer)
    }

    /// Like [`query_seed`](Self::query_seed) but normalized to `[-1]` when absent.
    pub fn query_seed_positions(&self, kmer: &[u8], strand: Strand) -> Vec<i64> {
        match self.query_seed(kmer, strand) {
            Some(posts) => posts.iter().map(|&p| p as i64).collect(),
            None => vec![-1],
        }
    }

    /// Anchor `query` by its 3′ seed on `strand`, extend, filter and rank.
    ///
    /// The ranked list is stored and also returned.
    pub fn search(
        &mut self,
        query: &[u8],
        strand: Strand,
        min_match: usize,
    ) -> Result<&RankedResults, SearchError> {
        let k = self.k;
        if query.len() < k {
            return Err(SearchError::QueryTooShort {
                query_len: query.len(),
                k,
            });
        }
        if min_match < k {
            return Err(SearchError::MinMatchBelowK { min_match, k });
        }

        let start_nuc = query.len() - k;
        let seed = &query[start_nuc..];
        debug!(
            "Searching {} strand: query_len={}, seed={}, min_match={}",
            strand,
            query.len(),
            String::from_utf8_lossy(seed),
            min_match
        );

        self.last_strand = strand;
        let Some(candidates) = self.index.lookup(strand, seed) else {
            debug!("Seed not found");
            self.results = RankedResults::NoSeedHit;
            return Ok(&self.results);
        };
        debug!("{} seed hit(s)", candidates.len());

        let subject = self.extension_subject(strand);
        let mut hits = Vec::new();
        for &fi in candidates {
            let xtend = extend_back(query, start_nuc, subject, fi);
            trace!("hit at {}: extension {}", fi, xtend);
            if xtend + k >= min_match {
                hits.push(MatchRecord {
                    start: fi - xtend,
                    extension: xtend,
                });
            }
        }
        rank(&mut hits);

        self.results = RankedResults::Hits(hits);
        Ok(&self.results)
    }

    /// True iff the last search found no seed hit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_no_hit()
    }

    /// Current ranked result list.
    #[inline]
    pub fn results(&self) -> &RankedResults {
        &self.results
    }

    /// Subject slice matched by `rec`, in the coordinates of the last search.
    pub fn matched(&self, rec: &MatchRecord) -> Option<&[u8]> {
        rec.matched(self.extension_subject(self.last_strand), self.k)
    }

    fn extension_subject(&self, strand: Strand) -> &'a [u8] {
        match self.extension {
            ExtensionMode::ForwardSubject => self.strands.forward(),
            ExtensionMode::StrandConsistent => self.strands.strand(strand),
        }
    }
}
