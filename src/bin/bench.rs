//! keyindex benchmark binary
//!
//! Generates a dataset, indexes it and prints the comparison report.

use std::io::{self, Write};

use clap::Parser;
use keyindex::harness;
use keyindex::report;
use keyindex::{BenchConfig, ChainedHashTable};
use tracing_subscriber::{fmt, EnvFilter};

/// keyindex benchmark
#[derive(Parser, Debug)]
#[command(name = "keyindex-bench")]
#[command(about = "Compare entry store, binary tree and hash table lookups")]
#[command(version)]
struct Args {
    /// Number of entries to generate
    #[arg(short = 'n', long, default_value = "100")]
    entries: usize,

    /// Length of each generated key
    #[arg(short = 'k', long, default_value = "5")]
    key_len: usize,

    /// Smallest generated value
    #[arg(long, default_value = "1")]
    min_value: i64,

    /// Largest generated value
    #[arg(long, default_value = "100")]
    max_value: i64,

    /// Hash table bucket count
    #[arg(short, long, default_value = "10")]
    buckets: usize,

    /// RNG seed for a reproducible dataset
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also print the hash table bucket layout
    #[arg(long)]
    show_buckets: bool,
}

fn main() {
    // Logs go to stderr; stdout carries only the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,keyindex=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("keyindex v{}", keyindex::VERSION);

    let mut builder = BenchConfig::builder()
        .num_entries(args.entries)
        .key_len(args.key_len)
        .value_range(args.min_value..=args.max_value)
        .bucket_count(args.buckets);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build();

    if let Err(e) = execute(&config, args.show_buckets) {
        tracing::error!("Benchmark failed: {}", e);
        std::process::exit(1);
    }
}

fn execute(config: &BenchConfig, show_buckets: bool) -> keyindex::Result<()> {
    let run = harness::run(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    report::write_store(&mut out, &run.store)?;

    if show_buckets {
        let mut table = ChainedHashTable::with_bucket_count(config.bucket_count)?;
        for (key, value) in run.store.items() {
            table.insert(key.to_string(), value);
        }
        writeln!(out)?;
        report::write_buckets(&mut out, &table)?;
    }

    writeln!(out, "\nBenchmarking lookups ({} generated, {} distinct):\n", run.generated, run.store.len())?;
    report::write_timings(&mut out, &run.report)?;
    out.flush()?;

    Ok(())
}
