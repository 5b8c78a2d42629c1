use std::time::Instant;

use substring_strip::{
    AutomatonSearch, HashedSearch, LongestShared, StripConfig, StripOutcome, Stripper,
    fixture::generate_pair, instrumentation,
};

fn run_strategy<S: LongestShared>(source: &str, target: &str, max_len: usize) -> StripOutcome {
    instrumentation::reset_counters();
    let t0 = Instant::now();
    let outcome = match StripConfig::new(max_len).and_then(|c| Stripper::<S>::with_strategy(source, target, c)) {
        Ok(stripper) => stripper.run(),
        Err(e) => {
            eprintln!("{}: {}", S::name(), e);
            std::process::exit(2);
        }
    };
    let dur = t0.elapsed();
    let c = instrumentation::counters_snapshot();
    println!(
        "{}: time={:?} removals={} rounds={} nodes={} patterns={} build_ns={} build_fail={} scan_fail={} scanned={}",
        S::name(),
        dur,
        outcome.removals.len(),
        c.rounds,
        c.nodes_allocated,
        c.patterns_registered,
        c.build_ns,
        c.build_fail_steps,
        c.scan_fail_steps,
        c.bytes_scanned
    );
    outcome
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().filter("STRIP_LOG"));

    let (source, target) = generate_pair(42, 400, 300);
    let max_len = 16;
    let a = run_strategy::<AutomatonSearch>(&source, &target, max_len);
    let h = run_strategy::<HashedSearch>(&source, &target, max_len);
    if a != h {
        eprintln!("strategies disagree");
        std::process::exit(1);
    }
}
