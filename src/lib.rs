//! Primer anchoring by exact seed-and-extend over a three-strand k-mer index.
//!
//! - [`StrandSet`]: validated subject plus complement and reverse complement
//! - [`KmerIndex`] / [`IndexSet`]: exact k-mer → ascending positions, per strand
//! - [`SeedSearch`]: 3′ seed lookup, backward extension, `min_match` filter, ranking
//! - [`reference`]: naive scan used to cross-check search results
//!
//! ```
//! use primer_seed::{BuildConfig, SeedSearch, Strand, StrandSet};
//!
//! let strands = StrandSet::from_forward(b"TATATATGCCGATCGGGATCCAT").unwrap();
//! let mut search = SeedSearch::new(&strands, 5, BuildConfig::default()).unwrap();
//! let hits = search.search(b"ATATGCCGA", Strand::Forward, 5).unwrap();
//! assert_eq!(hits.to_pairs(), vec![(3, 4)]);
//! ```
//!
//! A seed that never occurs is reported as data, not an error:
//! [`RankedResults::NoSeedHit`], whose legacy pair form is `[(-1, -1)]`.

mod builder;
pub mod encode;
mod index;
pub mod reference;
mod search;
mod sequence;

pub use builder::{BuildConfig, ExtensionMode, build_index};
pub use index::{IndexError, IndexSet, KmerIndex, Strand};
pub use search::{MatchRecord, RankedResults, SearchError, SeedSearch, rank};
pub use sequence::{SequenceError, StrandSet};
