//! Per-tick performance metrics for the lockstep driver.
//!
//! [`StepMetrics`] captures phase timings for a single tick, for
//! profiling and benchmark reporting.

/// Timing data collected during a single tick.
///
/// All durations are in microseconds. The driver fills these after each
/// `step_sync()` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent with every agent sensing the field, in microseconds.
    pub sense_us: u64,
    /// Time spent computing the ascent vector and the degeneracy
    /// diagnostic, in microseconds.
    pub estimate_us: u64,
    /// Time spent moving every agent, in microseconds.
    pub move_us: u64,
    /// Number of agents stepped.
    pub agent_count: usize,
    /// Cumulative number of ticks rolled back after a non-finite position.
    pub rollback_events: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.sense_us, 0);
        assert_eq!(m.estimate_us, 0);
        assert_eq!(m.move_us, 0);
        assert_eq!(m.agent_count, 0);
        assert_eq!(m.rollback_events, 0);
    }

    #[test]
    fn metrics_fields_accessible() {
        let m = StepMetrics {
            total_us: 100,
            sense_us: 20,
            estimate_us: 50,
            move_us: 25,
            agent_count: 3,
            rollback_events: 1,
        };
        assert_eq!(m.total_us, 100);
        assert!(m.sense_us + m.estimate_us + m.move_us <= m.total_us);
        assert_eq!(m.agent_count, 3);
        assert_eq!(m.rollback_events, 1);
    }
}
