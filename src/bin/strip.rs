use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use substring_strip::{
    AutomatonSearch, HashedSearch, LongestShared, StripConfig, Stripper, instrumentation,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Automaton,
    Hashed,
}

/// Repeatedly remove the longest substring shared by two strings.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// String whose substrings are indexed each round
    #[arg(default_value = "ATCGTACGTA")]
    source: String,

    /// String scanned for the longest indexed substring
    #[arg(default_value = "CGTACGTGCG")]
    target: String,

    /// Longest substring length considered
    #[arg(short = 'n', long, default_value_t = StripConfig::default().max_len)]
    max_len: usize,

    #[arg(long, value_enum, default_value_t = Strategy::Automaton)]
    strategy: Strategy,

    /// Print instrumentation counters after the run
    #[arg(long)]
    stats: bool,
}

fn run<S: LongestShared>(args: &Args) -> Result<()> {
    let config = StripConfig::new(args.max_len).context("invalid --max-len")?;
    let mut stripper = Stripper::<S>::with_strategy(&args.source, &args.target, config)?;

    for removal in stripper.by_ref() {
        println!(
            "Pattern \"{}\" found at index {} in the second string, and at index {} in the first string.",
            removal.text_lossy(),
            removal.target_offset,
            removal.origin_offset
        );
    }
    println!(
        "No further match after {} rounds: first=\"{}\" second=\"{}\"",
        stripper.rounds(),
        String::from_utf8_lossy(stripper.source()),
        String::from_utf8_lossy(stripper.target())
    );
    Ok(())
}

fn main() -> Result<()> {
    let env = env_logger::Env::new()
        .filter("STRIP_LOG")
        .write_style("STRIP_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    log::debug!("strip options: {:?}", args);

    instrumentation::reset_counters();
    match args.strategy {
        Strategy::Automaton => run::<AutomatonSearch>(&args)?,
        Strategy::Hashed => run::<HashedSearch>(&args)?,
    }

    if args.stats {
        let c = instrumentation::counters_snapshot();
        eprintln!(
            "rounds={} nodes={} patterns={} build_fail_steps={} scan_fail_steps={} bytes_scanned={} build_ns={}",
            c.rounds,
            c.nodes_allocated,
            c.patterns_registered,
            c.build_fail_steps,
            c.scan_fail_steps,
            c.bytes_scanned,
            c.build_ns
        );
    }
    Ok(())
}
