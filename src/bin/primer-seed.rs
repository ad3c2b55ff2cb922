use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};
use primer_seed::reference::{compare_hits, find_all};
use primer_seed::*;

/// Indexes beyond this many distinct k-mers are not dumped.
const DUMP_LIMIT: usize = 1000;

/// Anchor PCR primers in a FASTA subject by exact seed-and-extend.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Subject FASTA path (all records are concatenated)
    subject: PathBuf,

    /// K-mer (seed) length
    #[arg(short = 'k', long, default_value_t = 5)]
    ksize: usize,

    /// Primer sequence (repeatable)
    #[arg(short, long = "primer", required = true)]
    primers: Vec<String>,

    /// Minimum identity length (defaults to ksize)
    #[arg(short, long)]
    min_match: Option<usize>,

    /// Strand to seed on: fwd|comp|revcomp
    #[arg(long, default_value = "fwd")]
    strand: String,

    /// Extend against the seeded strand instead of the forward subject
    #[arg(long, default_value_t = false)]
    strand_consistent: bool,

    /// Print the forward index (small subjects only)
    #[arg(long, default_value_t = false)]
    dump_index: bool,

    /// Cross-check full-length hits against a brute-force scan
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Info-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Debug-level logging
    #[arg(long)]
    debug: bool,
}

fn parse_strand(s: &str) -> Result<Strand> {
    match s {
        "fwd" | "forward" => Ok(Strand::Forward),
        "comp" | "complement" => Ok(Strand::Complement),
        "rc" | "revcomp" | "reverse-complement" => Ok(Strand::ReverseComplement),
        other => bail!("unknown strand {other:?} (expected fwd|comp|revcomp)"),
    }
}

fn init_logging(args: &Args) {
    let level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// The naive scan only mirrors the search when seeds and extension share a strand.
fn check_applies(mode: ExtensionMode, strand: Strand) -> bool {
    mode == ExtensionMode::StrandConsistent || strand == Strand::Forward
}

fn dump_index(index: &KmerIndex) {
    if index.len() >= DUMP_LIMIT {
        println!("Index too large to print ({} k-mers)", index.len());
        return;
    }
    let mut entries: Vec<_> = index.iter().collect();
    entries.sort_unstable_by_key(|(kmer, _)| *kmer);
    for (kmer, posts) in entries {
        println!("{} : {:?}", String::from_utf8_lossy(kmer), posts);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);
    let strand = parse_strand(&args.strand)?;
    let min_match = args.min_match.unwrap_or(args.ksize);

    let t0 = Instant::now();
    let strands = StrandSet::from_fasta_path(&args.subject)
        .with_context(|| format!("load subject {}", args.subject.display()))?;
    info!("Loaded {} bases in {} ms", strands.len(), t0.elapsed().as_millis());

    let t1 = Instant::now();
    let cfg = BuildConfig::default().strand_consistent(args.strand_consistent);
    let mut search = SeedSearch::new(&strands, args.ksize, cfg).context("build index")?;
    info!("Index built in {} ms", t1.elapsed().as_millis());

    if args.dump_index {
        dump_index(search.index().index(Strand::Forward));
    }

    for primer in &args.primers {
        let query = encode::normalize(primer.as_bytes()).map_err(|(pos, base)| {
            anyhow::anyhow!("primer {primer}: invalid base {:?} at {pos}", base as char)
        })?;

        let t = Instant::now();
        let results = search
            .search(&query, strand, min_match)
            .with_context(|| format!("search {primer}"))?
            .clone();
        info!("Searched {} in {} ms", primer, t.elapsed().as_millis());

        println!("# {primer} ({strand}, min_match={min_match})");
        if search.is_empty() {
            println!("search string not found");
            continue;
        }
        for m in results.hits() {
            let found = search.matched(m).unwrap_or_default();
            println!(
                "Position: {}  extension: {}  found: {}",
                m.start,
                m.extension,
                String::from_utf8_lossy(found)
            );
        }

        if args.check && min_match != query.len() {
            warn!("{primer}: brute-force check needs min_match == primer length, skipped");
        } else if args.check && !check_applies(search.extension_mode(), strand) {
            warn!("{primer}: brute-force check needs --strand fwd or --strand-consistent, skipped");
        } else if args.check {
            let subject = match search.extension_mode() {
                ExtensionMode::ForwardSubject => strands.forward(),
                ExtensionMode::StrandConsistent => strands.strand(strand),
            };
            let naive = find_all(subject, &query);
            match compare_hits(&naive, &results) {
                Some(0) => info!("{primer}: brute-force check agrees"),
                Some(n) => warn!("{primer}: {n} position mismatch(es) against brute force"),
                None => warn!(
                    "{primer}: brute force found {} full-length hit(s), search reported {}",
                    naive.len(),
                    results.hits().len()
                ),
            }
        }
    }

    Ok(())
}
