//! Rolling caregiver performance index.
//!
//! `compute_kpi` is a pure function of its inputs so it can be tested in
//! isolation; the session feeds it the prior KPI, the recent action window,
//! and current caregiver stress after every action.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// One entry in the recent-action window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seconds between a demand appearing and this action answering it;
    /// zero for unprompted care.
    pub latency_secs: f64,
    pub success: bool,
}

/// Weighted sum of latency tier, recent success ratio, and a stress penalty
/// tier, clamped to `[0, 100]`.
pub fn compute_kpi(base: i32, recent: &[ActionRecord], stress: i32) -> i32 {
    let mut score = base;

    if !recent.is_empty() {
        let avg_latency =
            recent.iter().map(|r| r.latency_secs).sum::<f64>() / recent.len() as f64;
        score += if avg_latency <= FAST_RESPONSE_SECS {
            KPI_FAST_BONUS
        } else if avg_latency <= OK_RESPONSE_SECS {
            KPI_OK_BONUS
        } else {
            KPI_SLOW_PENALTY
        };

        let success_ratio =
            recent.iter().filter(|r| r.success).count() as f64 / recent.len() as f64;
        score += (success_ratio * 20.0) as i32 - 10;
    }

    if stress > KPI_STRESS_HIGH_THRESHOLD {
        score += KPI_STRESS_HIGH_PENALTY;
    } else if stress > KPI_STRESS_MID_THRESHOLD {
        score += KPI_STRESS_MID_PENALTY;
    }

    score.clamp(0, KPI_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(latency_secs: f64, success: bool) -> ActionRecord {
        ActionRecord {
            latency_secs,
            success,
        }
    }

    #[test]
    fn test_empty_window_keeps_base() {
        assert_eq!(compute_kpi(80, &[], 0), 80);
    }

    #[test]
    fn test_fast_successful_window_earns_both_bonuses() {
        let recent = vec![record(10.0, true); 5];
        // +10 latency, +10 success ratio
        assert_eq!(compute_kpi(70, &recent, 0), 90);
    }

    #[test]
    fn test_slow_window_penalized() {
        let recent = vec![record(120.0, true); 5];
        // -5 latency, +10 success ratio
        assert_eq!(compute_kpi(70, &recent, 0), 75);
    }

    #[test]
    fn test_failure_ratio_penalized() {
        let recent = vec![record(10.0, false); 4];
        // +10 latency, -10 success ratio
        assert_eq!(compute_kpi(70, &recent, 0), 70);
    }

    #[test]
    fn test_stress_tiers() {
        let recent = vec![record(10.0, true); 2];
        assert_eq!(compute_kpi(70, &recent, 40), 90);
        assert_eq!(compute_kpi(70, &recent, 60), 85);
        assert_eq!(compute_kpi(70, &recent, 90), 75);
    }

    #[test]
    fn test_clamped_to_range() {
        let good = vec![record(5.0, true); 10];
        assert_eq!(compute_kpi(95, &good, 0), 100);
        let bad = vec![record(500.0, false); 10];
        assert_eq!(compute_kpi(5, &bad, 95), 0);
    }

    #[test]
    fn test_pure_function_no_hidden_state() {
        let recent = vec![record(25.0, true), record(45.0, false)];
        let first = compute_kpi(60, &recent, 55);
        let second = compute_kpi(60, &recent, 55);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mixed_window_arithmetic() {
        // avg latency 45s -> +5; ratio 0.5 -> 0; stress 0
        let recent = vec![record(30.0, true), record(60.0, false)];
        assert_eq!(compute_kpi(50, &recent, 0), 55);
    }
}
