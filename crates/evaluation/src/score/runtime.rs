/// Runtimes below this are treated as this value, so that a 0ms
/// measurement cannot dominate the curve.
const MIN_EFFECTIVE_RUNTIME_MS: u32 = 10;

/// Runtime-based score for the "run" flow.
///
/// A failed run is worth nothing. A passed run is worth at most the
/// problem's base points, decaying as the measured runtime grows, and
/// never drops below a tenth of the base (minimum 1).
pub fn score(passed: bool, runtime_ms: u32, base_points: u32) -> u32 {
    if !passed {
        return 0;
    }

    let floor = (base_points / 10).max(1);
    let effective = u64::from(runtime_ms.max(MIN_EFFECTIVE_RUNTIME_MS));
    let decayed = (u64::from(base_points) * 1000) / (1000 + effective);

    (decayed as u32).max(floor)
}

#[cfg(test)]
mod tests {
    use super::score;

    #[test]
    fn failed_runs_score_zero_regardless_of_inputs() {
        assert_eq!(score(false, 0, 100), 0);
        assert_eq!(score(false, 5_000, 100), 0);
        assert_eq!(score(false, 10, 1), 0);
    }

    #[test]
    fn score_never_exceeds_base_points() {
        for runtime_ms in [0, 1, 10, 100, 1_000, 60_000] {
            assert!(score(true, runtime_ms, 100) <= 100);
        }
    }

    #[test]
    fn slower_runs_never_score_more() {
        let mut previous = u32::MAX;
        for runtime_ms in [0, 10, 50, 100, 500, 1_000, 10_000] {
            let current = score(true, runtime_ms, 100);
            assert!(current <= previous, "score must be non-increasing in runtime");
            previous = current;
        }
    }

    #[test]
    fn fast_correct_solutions_score_near_base() {
        let points = score(true, 5, 100);

        assert!(points >= 90, "fast solution scored {points}, expected near 100");
    }

    #[test]
    fn passed_runs_keep_a_positive_floor() {
        assert_eq!(score(true, u32::MAX, 100), 10);
        assert_eq!(score(true, u32::MAX, 3), 1);
    }
}
