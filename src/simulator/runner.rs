//! Headless Monte Carlo runner.
//!
//! Plays each session with a naive care policy — answer open demands with a
//! matching mid-quality action, feed and soothe proactively — so batch
//! statistics reflect engine balance rather than player skill.

use crate::core::session::Session;
use crate::events::Event;
use crate::simulator::config::SimConfig;
use crate::simulator::report::SimReport;
use crate::tasks::TaskId;
use chrono::{DateTime, TimeZone, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};

/// Fixed epoch so batches are reproducible under a seed; morning start
/// keeps the first hours outside every night band.
fn batch_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Runs the configured batch and aggregates the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut report = SimReport {
        runs: config.num_runs,
        hours_per_run: config.hours,
        ..Default::default()
    };

    let mut kpi_sum = 0.0;
    let mut perf_sum = 0.0;
    let mut wellbeing_sum = 0.0;
    let mut health_sum = 0.0;
    let mut stress_sum = 0.0;
    let mut successes: u64 = 0;

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };
        let session = simulate_single_run(config, &mut rng, &mut report, &mut successes);

        kpi_sum += session.kpi() as f64;
        perf_sum += session.caregiver.performance_score as f64;
        wellbeing_sum += session.child.wellbeing as f64;
        health_sum += session.child.health as f64;
        stress_sum += session.caregiver.stress as f64;

        for id in session.ledger.unlocked() {
            let key = format!("{:?}", id);
            *report.achievement_unlocks.entry(key).or_insert(0) += 1;
        }
    }

    let n = config.num_runs.max(1) as f64;
    report.mean_kpi = kpi_sum / n;
    report.mean_performance_score = perf_sum / n;
    report.mean_final_wellbeing = wellbeing_sum / n;
    report.mean_final_health = health_sum / n;
    report.mean_final_stress = stress_sum / n;
    report.action_success_rate = if report.actions_taken == 0 {
        0.0
    } else {
        successes as f64 / report.actions_taken as f64
    };
    report
}

fn simulate_single_run(
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
    report: &mut SimReport,
    successes: &mut u64,
) -> Session {
    let mut session = Session::new(config.mode, config.personality, config.age_months, batch_start());
    let mut now = batch_start();

    for _ in 0..config.hours {
        now += chrono::Duration::hours(1);
        let tick = session.tick(1.0, now, rng);
        report.events_triggered += tick.new_events.len() as u64;
        report.events_expired += tick.expired_events.len() as u64;

        // Answer every open demand we have a stage-appropriate tool for.
        let pending: Vec<Event> = session.events.pending().to_vec();
        for event in pending {
            let Some(task) = responder_for(&session, &event) else {
                continue;
            };
            apply(&mut session, task, now, rng, report, successes);
        }

        // Proactive care between demands.
        for task in proactive_care(&session) {
            apply(&mut session, task, now, rng, report, successes);
        }
    }
    report.events_resolved += session.stats.events_resolved as u64;
    session
}

fn apply(
    session: &mut Session,
    task: TaskId,
    now: DateTime<Utc>,
    rng: &mut ChaCha8Rng,
    report: &mut SimReport,
    successes: &mut u64,
) {
    let payload = policy_payload(task, rng);
    if let Ok(result) = session.apply_action(task, &payload, now, rng) {
        report.actions_taken += 1;
        if result.success {
            *successes += 1;
        }
    }
}

/// Picks a stage-available task whose kind answers the event, if any.
fn responder_for(session: &Session, event: &Event) -> Option<TaskId> {
    TaskId::available(session.child.age_months)
        .into_iter()
        .find(|t| event.required_actions.contains(&t.kind()))
}

/// Need-driven unprompted care: feed the hungry, soothe the exhausted,
/// change the soggy.
fn proactive_care(session: &Session) -> Vec<TaskId> {
    let available = TaskId::available(session.child.age_months);
    let mut plan = Vec::new();
    if session.child.hunger > 60 {
        if let Some(feed) = available
            .iter()
            .find(|t| matches!(t, TaskId::PrepareBottle | TaskId::PrepareSolids))
        {
            plan.push(*feed);
        }
    }
    if session.child.sleep_debt > 70 && available.contains(&TaskId::SootheToSleep) {
        plan.push(TaskId::SootheToSleep);
    }
    if session.child.hygiene < 40 && available.contains(&TaskId::ChangeDiaper) {
        plan.push(TaskId::ChangeDiaper);
    }
    plan
}

/// Mid-quality payloads with a little jitter, the way a decent but
/// imperfect caregiver plays.
fn policy_payload<R: Rng>(task: TaskId, rng: &mut R) -> Value {
    match task {
        TaskId::PrepareBottle => json!({
            "water_temp": 38.0 + rng.gen_range(-1.5..1.5),
            "shake_intensity": rng.gen_range(7..13),
            "tilt_angle": rng.gen_range(38..52),
        }),
        TaskId::SootheToSleep => json!({
            "shake_frequency": 2.0 + rng.gen_range(-0.8..0.8),
            "duration_secs": rng.gen_range(30..120),
            "app_switched": false,
        }),
        TaskId::ChangeDiaper => json!({
            "lift_speed": rng.gen_range(2.5..6.0),
            "wipe_thoroughness": rng.gen_range(4..9),
            "placement": "correct",
        }),
        TaskId::GiveMedicine => json!({ "remedy": "gripe_water" }),
        TaskId::Hug => json!({ "press_duration": rng.gen_range(2.0..5.0) }),
        TaskId::BabbleChat => json!({
            "keywords": ["sweetie", "good"],
            "voice_duration": rng.gen_range(10.0..70.0),
        }),
        TaskId::PrepareSolids => json!({
            "food": "pumpkin",
            "cutting_skill": rng.gen_range(4..9),
        }),
        TaskId::CatchFall => json!({
            "reaction_secs": rng.gen_range(0.5..2.5),
            "button_pressed": true,
        }),
        TaskId::FirstWord => json!({
            "recorded": true,
            "reaction_secs": rng.gen_range(1.0..5.0),
        }),
        TaskId::BlockHazard => json!({ "swipe": "away", "hazard": "outlet" }),
        TaskId::MediateToyDispute => json!({ "approach": "guide_sharing" }),
        TaskId::CorrectBadWord => json!({ "method": "gentle_swap", "word": "dang" }),
        TaskId::MorningDressing => json!({
            "completion_secs": rng.gen_range(30..70),
            "limit_secs": 75,
        }),
        TaskId::EmotionDebrief => json!({ "response": "empathize" }),
    }
}
