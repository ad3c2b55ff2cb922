use primer_seed::reference::{compare_hits, find_all};
use primer_seed::*;

const SUBJECT: &[u8] = b"TATATATGCCGATCGGGATCCAT";

fn strands(seq: &[u8]) -> StrandSet {
    StrandSet::from_forward(seq).unwrap()
}

#[test]
fn test_extension_stops_at_query_start() {
    let st = strands(SUBJECT);
    let mut s = SeedSearch::new(&st, 5, BuildConfig::default()).unwrap();
    let query = b"ATATGCCGA";

    assert_eq!(s.query_seed(b"GCCGA", Strand::Forward), Some(&[7usize][..]));
    let res = s.search(query, Strand::Forward, 5).unwrap();
    assert_eq!(
        res.hits(),
        &[MatchRecord {
            start: 3,
            extension: 4
        }]
    );
    assert!(!s.is_empty());
    assert_eq!(s.matched(&s.results().hits()[0]), Some(&query[..]));
    assert_eq!(find_all(SUBJECT, query).first(), Some(&3));
}

#[test]
fn test_extension_stops_at_mismatch() {
    let st = strands(SUBJECT);
    let mut s = SeedSearch::new(&st, 5, BuildConfig::default()).unwrap();
    // Leading 'G' mismatches subject[3] = 'A'.
    let res = s.search(b"GTATGCCGA", Strand::Forward, 5).unwrap();
    assert_eq!(res.to_pairs(), vec![(4, 3)]);
}

#[test]
fn test_extension_stops_at_subject_start() {
    let st = strands(b"GCCGATTTT");
    let mut s = SeedSearch::new(&st, 5, BuildConfig::default()).unwrap();
    let res = s.search(b"AAAGCCGA", Strand::Forward, 5).unwrap();
    assert_eq!(res.to_pairs(), vec![(0, 0)]);
}

#[test]
fn test_no_seed_hit_sentinel() {
    let st = strands(SUBJECT);
    let mut s = SeedSearch::new(&st, 5, BuildConfig::default()).unwrap();
    let res = s.search(b"CCCCCCC", Strand::Forward, 5).unwrap();
    assert_eq!(res, &RankedResults::NoSeedHit);
    assert_eq!(res.to_pairs(), vec![(-1, -1)]);
    assert_eq!(res.separate_pairs(), (vec![-1], vec![-1]));
    assert!(s.is_empty());
    assert_eq!(s.query_seed_positions(b"CCCCC", Strand::Forward), vec![-1]);
    assert_eq!(s.query_seed(b"CCCCC", Strand::Forward), None);
}

#[test]
fn test_threshold_filters_short_hits() {
    let st = strands(SUBJECT);
    let mut s = SeedSearch::new(&st, 5, BuildConfig::default()).unwrap();
    // Seed matches with extension 3 (identity 8) only.
    let res = s.search(b"GTATGCCGA", Strand::Forward, 9).unwrap();
    assert_eq!(res, &RankedResults::Hits(vec![]));
    assert!(res.to_pairs().is_empty());
    // Seed was found, so this is not the no-hit sentinel.
    assert!(!s.is_empty());
    assert!(s.results().hits().is_empty());
}

#[test]
fn test_ranking_extension_then_start() {
    // Seed "ACG" occurs at 2, 6, 12, 17 with extensions 2, 0, 2, 1.
    let subject = b"TTACGGACGCTTACGATACG";
    let st = strands(subject);
    let mut s = SeedSearch::new(&st, 3, BuildConfig::default()).unwrap();
    let res = s.search(b"TTACG", Strand::Forward, 3).unwrap();
    assert_eq!(res.to_pairs(), vec![(0, 2), (10, 2), (16, 1), (6, 0)]);

    let res = s.search(b"TTACG", Strand::Forward, 4).unwrap();
    assert_eq!(res.to_pairs(), vec![(0, 2), (10, 2), (16, 1)]);

    let mut hits = vec![
        MatchRecord { start: 9, extension: 1 },
        MatchRecord { start: 2, extension: 1 },
        MatchRecord { start: 5, extension: 4 },
    ];
    rank(&mut hits);
    assert_eq!(
        hits.iter().map(|m| m.start).collect::<Vec<_>>(),
        vec![5, 2, 9]
    );
}

#[test]
fn test_query_equal_to_k() {
    let st = strands(SUBJECT);
    let mut s = SeedSearch::new(&st, 5, BuildConfig::default()).unwrap();
    let res = s.search(b"GATCC", Strand::Forward, 5).unwrap();
    assert_eq!(res.to_pairs(), vec![(16, 0)]);
}

#[test]
fn test_search_replaces_previous_result() {
    let st = strands(SUBJECT);
    let mut s = SeedSearch::new(&st, 5, BuildConfig::default()).unwrap();
    assert_eq!(s.results(), &RankedResults::Hits(vec![]));
    s.search(b"CCCCC", Strand::Forward, 5).unwrap();
    assert!(s.is_empty());
    s.search(b"GATCC", Strand::Forward, 5).unwrap();
    assert!(!s.is_empty());
    assert_eq!(s.results().hits().len(), 1);
}

#[test]
fn test_precondition_errors() {
    let st = strands(SUBJECT);
    assert_eq!(
        SeedSearch::new(&st, 0, BuildConfig::default()).err(),
        Some(SearchError::Index(IndexError::InvalidK { k: 0, len: 23 }))
    );
    assert_eq!(
        SeedSearch::new(&st, 24, BuildConfig::default()).err(),
        Some(SearchError::Index(IndexError::InvalidK { k: 24, len: 23 }))
    );

    let mut s = SeedSearch::new(&st, 5, BuildConfig::default()).unwrap();
    assert_eq!(
        s.search(b"GATC", Strand::Forward, 5).unwrap_err(),
        SearchError::QueryTooShort { query_len: 4, k: 5 }
    );
    assert_eq!(
        s.search(b"GATCC", Strand::Forward, 4).unwrap_err(),
        SearchError::MinMatchBelowK { min_match: 4, k: 5 }
    );
}

#[test]
fn test_forward_extension_from_complement_seed() {
    // complement = ATATATACGGCTAGCCCTAGGTA; "ACGGC" sits at 6 on that strand.
    let st = strands(SUBJECT);
    let mut s = SeedSearch::new(&st, 5, BuildConfig::default()).unwrap();
    assert_eq!(s.query_seed(b"ACGGC", Strand::Complement), Some(&[6usize][..]));

    // Default mode extends against the forward subject: forward[5] = 'A' != 'T'.
    let res = s.search(b"TACGGC", Strand::Complement, 5).unwrap();
    assert_eq!(res.to_pairs(), vec![(6, 0)]);
}

#[test]
fn test_strand_consistent_extension() {
    let st = strands(SUBJECT);
    let cfg = BuildConfig::default().extension(ExtensionMode::StrandConsistent);
    let mut s = SeedSearch::new(&st, 5, cfg).unwrap();
    let res = s.search(b"TATATACGGC", Strand::Complement, 10).unwrap();
    assert_eq!(res.to_pairs(), vec![(1, 5)]);
    assert_eq!(s.matched(&s.results().hits()[0]), Some(&b"TATATACGGC"[..]));

    // Reverse complement of the subject: ATGGATCCCGATCGGCATATATA
    let res = s.search(b"CCCGATCG", Strand::ReverseComplement, 8).unwrap();
    assert_eq!(res.to_pairs(), vec![(6, 3)]);
}

#[test]
fn test_with_shared_index() {
    let st = strands(SUBJECT);
    let index = build_index(&st, 5).unwrap();
    let mut a = SeedSearch::with_index(&st, &index, BuildConfig::default()).unwrap();
    let mut b = SeedSearch::with_index(&st, &index, BuildConfig::default()).unwrap();
    a.search(b"GATCC", Strand::Forward, 5).unwrap();
    b.search(b"CCCCC", Strand::Forward, 5).unwrap();
    assert!(!a.is_empty());
    assert!(b.is_empty());

    let other = strands(b"ACGTACGT");
    assert_eq!(
        SeedSearch::with_index(&other, &index, BuildConfig::default()).err(),
        Some(SearchError::IndexMismatch {
            index_len: 23,
            subject_len: 8
        })
    );
}

#[test]
fn test_brute_force_agrees_on_exact_query() {
    let subject = b"ACGTACGTTACGTACGAACGTACG";
    let st = strands(subject);
    let mut s = SeedSearch::new(&st, 4, BuildConfig::default()).unwrap();
    let query = b"TACG";
    let res = s.search(query, Strand::Forward, query.len()).unwrap();
    let naive = find_all(subject, query);
    assert_eq!(naive, vec![3, 8, 12, 20]);
    assert_eq!(compare_hits(&naive, res), Some(0));

    let query = b"GTACG";
    let res = s.search(query, Strand::Forward, query.len()).unwrap();
    let naive = find_all(subject, query);
    assert_eq!(naive, vec![2, 11, 19]);
    assert_eq!(compare_hits(&naive, res), Some(0));
}

#[test]
fn test_compare_hits_length_mismatch() {
    assert_eq!(compare_hits(&[1, 2], &RankedResults::NoSeedHit), None);
    assert_eq!(compare_hits(&[], &RankedResults::NoSeedHit), Some(0));
}
