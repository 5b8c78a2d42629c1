use std::time::Instant;

use substring_strip::{fixture::generate_pair, instrumentation, strip_shared};

fn run_case(max_len: usize) {
    instrumentation::reset_counters();
    let (source, target) = generate_pair(42, 1000, 1000);

    let t0 = Instant::now();
    let outcome = match strip_shared(&source, &target, max_len) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("MAX_LEN={}: {}", max_len, e);
            return;
        }
    };
    let dur = t0.elapsed();
    let c = instrumentation::counters_snapshot();

    println!(
        "MAX_LEN={} time={:?} removals={} left={}/{} rounds={} nodes={} build_ns={} scan_fail={}",
        max_len,
        dur,
        outcome.removals.len(),
        outcome.source.len(),
        outcome.target.len(),
        c.rounds,
        c.nodes_allocated,
        c.build_ns,
        c.scan_fail_steps
    );
}

fn main() {
    for max_len in [2usize, 4, 8, 16, 32, 64] {
        run_case(max_len);
    }
}
