//! Nucleotide alphabet: validation LUT, complement LUT, strand transforms.
//!
//! Conventions
//! - Subjects and queries are uppercase ASCII over `A`, `C`, `G`, `T`.
//! - Lowercase input is accepted by [`normalize`] and folded to uppercase.
//! - Anything else (including `N` and `U`) is rejected.

/// 256-entry LUT: ASCII → uppercase base, 0 for anything outside `ACGTacgt`.
pub static NORMALIZE_LUT: [u8; 256] = {
    let mut t = [0u8; 256];
    t[b'A' as usize] = b'A';
    t[b'a' as usize] = b'A';
    t[b'C' as usize] = b'C';
    t[b'c' as usize] = b'C';
    t[b'G' as usize] = b'G';
    t[b'g' as usize] = b'G';
    t[b'T' as usize] = b'T';
    t[b't' as usize] = b'T';
    t
};

/// 256-entry LUT: uppercase base → complement, 0 for non-bases.
pub static COMPLEMENT_LUT: [u8; 256] = {
    let mut t = [0u8; 256];
    t[b'A' as usize] = b'T';
    t[b'C' as usize] = b'G';
    t[b'G' as usize] = b'C';
    t[b'T' as usize] = b'A';
    t
};

/// Uppercase form of `b`, or `None` if it is not a nucleotide.
#[inline]
pub fn normalize_base(b: u8) -> Option<u8> {
    match NORMALIZE_LUT[b as usize] {
        0 => None,
        v => Some(v),
    }
}

/// Complement of an uppercase base, or `None` if it is not one.
#[inline]
pub fn complement_base(b: u8) -> Option<u8> {
    match COMPLEMENT_LUT[b as usize] {
        0 => None,
        v => Some(v),
    }
}

/// Uppercased copy of `seq`. On failure returns the offset and byte
/// of the first symbol outside the alphabet.
pub fn normalize(seq: &[u8]) -> Result<Vec<u8>, (usize, u8)> {
    seq.iter()
        .enumerate()
        .map(|(i, &b)| normalize_base(b).ok_or((i, b)))
        .collect()
}

/// Base-by-base complement of an already normalized sequence.
///
/// Symbols outside the alphabet map to themselves; callers normalize first.
pub fn complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|&b| complement_base(b).unwrap_or(b))
        .collect()
}

/// Reverse complement of an already normalized sequence.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| complement_base(b).unwrap_or(b))
        .collect()
}
