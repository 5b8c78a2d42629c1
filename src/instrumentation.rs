// Lightweight instrumentation for counting hotspots in development.
// Thread-local cells keep the hot path free of locking; reset and snapshot
// helpers let the dev binaries collect simple breakdowns per run.
use std::cell::Cell;

thread_local! {
    static ROUNDS: Cell<u64> = const { Cell::new(0) };
    static NODES_ALLOCATED: Cell<u64> = const { Cell::new(0) };
    static PATTERNS_REGISTERED: Cell<u64> = const { Cell::new(0) };
    static BUILD_FAIL_STEPS: Cell<u64> = const { Cell::new(0) };
    static SCAN_FAIL_STEPS: Cell<u64> = const { Cell::new(0) };
    static BYTES_SCANNED: Cell<u64> = const { Cell::new(0) };
    static BUILD_NS: Cell<u64> = const { Cell::new(0) };
}

/// Counter values at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub rounds: u64,
    pub nodes_allocated: u64,
    pub patterns_registered: u64,
    pub build_fail_steps: u64,
    pub scan_fail_steps: u64,
    pub bytes_scanned: u64,
    pub build_ns: u64,
}

pub fn reset_counters() {
    ROUNDS.with(|c| c.set(0));
    NODES_ALLOCATED.with(|c| c.set(0));
    PATTERNS_REGISTERED.with(|c| c.set(0));
    BUILD_FAIL_STEPS.with(|c| c.set(0));
    SCAN_FAIL_STEPS.with(|c| c.set(0));
    BYTES_SCANNED.with(|c| c.set(0));
    BUILD_NS.with(|c| c.set(0));
}

pub fn counters_snapshot() -> Counters {
    Counters {
        rounds: ROUNDS.with(|c| c.get()),
        nodes_allocated: NODES_ALLOCATED.with(|c| c.get()),
        patterns_registered: PATTERNS_REGISTERED.with(|c| c.get()),
        build_fail_steps: BUILD_FAIL_STEPS.with(|c| c.get()),
        scan_fail_steps: SCAN_FAIL_STEPS.with(|c| c.get()),
        bytes_scanned: BYTES_SCANNED.with(|c| c.get()),
        build_ns: BUILD_NS.with(|c| c.get()),
    }
}

fn bump(cell: &'static std::thread::LocalKey<Cell<u64>>, n: u64) {
    cell.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_round() {
    bump(&ROUNDS, 1);
}
pub fn add_nodes(n: u64) {
    bump(&NODES_ALLOCATED, n);
}
pub fn add_patterns(n: u64) {
    bump(&PATTERNS_REGISTERED, n);
}
pub fn add_build_fail_steps(n: u64) {
    bump(&BUILD_FAIL_STEPS, n);
}
pub fn add_scan_fail_steps(n: u64) {
    bump(&SCAN_FAIL_STEPS, n);
}
pub fn add_bytes_scanned(n: u64) {
    bump(&BYTES_SCANNED, n);
}
pub fn add_build_ns(n: u64) {
    bump(&BUILD_NS, n);
}
