use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;

/// Ticks in one title pulse (2 s at the default rate)
pub const PULSE_TICKS: u64 = 20;

/// Get tick duration
pub fn tick_duration(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Whether the pulsing title is in its bright half at the given tick
pub fn pulse_on(frame: u64, tick: Duration) -> bool {
    let period = pulse_period_ticks(tick);
    frame % period < period / 2
}

/// Number of ticks that make up a 2 s pulse at the given tick rate
fn pulse_period_ticks(tick: Duration) -> u64 {
    let tick_ms = tick.as_millis().max(1) as u64;
    (PULSE_TICKS * DEFAULT_TICK_MS / tick_ms).max(2)
}
