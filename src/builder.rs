//! Build-time configuration and the index-set entry point.

use crate::index::{IndexError, IndexSet};
use crate::sequence::StrandSet;

/// Which sequence seed hits are extended against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtensionMode {
    /// Always walk the forward subject, whatever strand the seed came from.
    #[default]
    ForwardSubject,
    /// Walk the strand the seed was looked up on. Starts are reported in that
    /// strand's coordinates.
    StrandConsistent,
}

/// Search configuration.
#[derive(Clone, Debug, Default)]
pub struct BuildConfig {
    extension: ExtensionMode,
}

impl BuildConfig {
    /// Select the extension mode (default: [`ExtensionMode::ForwardSubject`]).
    pub fn extension(mut self, mode: ExtensionMode) -> Self {
        self.extension = mode;
        self
    }

    /// Shorthand for `extension(ExtensionMode::StrandConsistent)` when `yes`.
    pub fn strand_consistent(self, yes: bool) -> Self {
        let mode = if yes {
            ExtensionMode::StrandConsistent
        } else {
            ExtensionMode::ForwardSubject
        };
        self.extension(mode)
    }

    pub(crate) fn extension_mode(&self) -> ExtensionMode {
        self.extension
    }
}

/// Build the three-strand index for `strands` with k-mer size `k`.
pub fn build_index(strands: &StrandSet, k: usize) -> Result<IndexSet, IndexError> {
    IndexSet::build(
        strands.forward(),
        strands.complement(),
        strands.reverse_complement(),
        k,
    )
}
