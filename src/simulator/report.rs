//! Aggregated results of a simulation batch.

use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate outcomes across all simulated sessions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimReport {
    pub runs: u32,
    pub hours_per_run: u32,
    pub mean_kpi: f64,
    pub mean_performance_score: f64,
    pub mean_final_wellbeing: f64,
    pub mean_final_health: f64,
    pub mean_final_stress: f64,
    pub events_triggered: u64,
    pub events_resolved: u64,
    pub events_expired: u64,
    pub actions_taken: u64,
    pub action_success_rate: f64,
    /// How many runs unlocked each achievement, keyed by id name.
    pub achievement_unlocks: BTreeMap<String, u32>,
}

impl SimReport {
    pub fn expiry_rate(&self) -> f64 {
        if self.events_triggered == 0 {
            0.0
        } else {
            self.events_expired as f64 / self.events_triggered as f64
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Simulated {} sessions x {}h\n\n",
            self.runs, self.hours_per_run
        ));
        out.push_str(&format!("  Mean KPI:            {:.1}\n", self.mean_kpi));
        out.push_str(&format!(
            "  Mean perf score:     {:.1}\n",
            self.mean_performance_score
        ));
        out.push_str(&format!(
            "  Mean wellbeing:      {:.1}\n",
            self.mean_final_wellbeing
        ));
        out.push_str(&format!(
            "  Mean health:         {:.1}\n",
            self.mean_final_health
        ));
        out.push_str(&format!(
            "  Mean stress:         {:.1}\n\n",
            self.mean_final_stress
        ));
        out.push_str(&format!(
            "  Events: {} triggered, {} resolved, {} expired ({:.0}% expiry)\n",
            self.events_triggered,
            self.events_resolved,
            self.events_expired,
            self.expiry_rate() * 100.0
        ));
        out.push_str(&format!(
            "  Actions: {} taken, {:.0}% successful\n",
            self.actions_taken,
            self.action_success_rate * 100.0
        ));
        if !self.achievement_unlocks.is_empty() {
            out.push_str("\n  Achievement unlock counts:\n");
            for (name, count) in &self.achievement_unlocks {
                out.push_str(&format!("    {:<24} {}\n", name, count));
            }
        }
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
