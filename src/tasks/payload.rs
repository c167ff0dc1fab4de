//! Typed action payloads and the validation gate.
//!
//! Payloads arrive from the transport as loose JSON maps. `validate` parses
//! and range-checks them into typed structs before any state is touched;
//! rejection leaves the session untouched.

use crate::core::error::EngineError;
use crate::tasks::types::TaskId;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct BottlePayload {
    pub water_temp: f64,
    pub shake_intensity: u32,
    pub tilt_angle: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SoothePayload {
    pub shake_frequency: f64,
    pub duration_secs: u32,
    #[serde(default)]
    pub app_switched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiaperPlacement {
    Correct,
    WrongOrder,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiaperPayload {
    pub lift_speed: f64,
    pub wipe_thoroughness: u32,
    pub placement: DiaperPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Remedy {
    FeverPatch,
    CoughSyrup,
    GripeWater,
    VitaminDrops,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MedicinePayload {
    pub remedy: Remedy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HugPayload {
    pub press_duration: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BabblePayload {
    #[serde(default)]
    pub keywords: Vec<String>,
    pub voice_duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodChoice {
    Carrot,
    Pumpkin,
    RicePorridge,
    AppleMash,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolidsPayload {
    pub food: FoodChoice,
    pub cutting_skill: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatchFallPayload {
    pub reaction_secs: f64,
    pub button_pressed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirstWordPayload {
    pub recorded: bool,
    pub reaction_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Away,
    Toward,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HazardPayload {
    pub swipe: SwipeDirection,
    pub hazard: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediationApproach {
    TakeToyBack,
    GuideSharing,
    LookAway,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediationPayload {
    pub approach: MediationApproach,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionMethod {
    Scold,
    GentleSwap,
    LaughAlong,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BadWordPayload {
    pub method: CorrectionMethod,
    pub word: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DressingPayload {
    pub completion_secs: u32,
    pub limit_secs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebriefResponse {
    Empathize,
    Dismiss,
    Distract,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DebriefPayload {
    pub response: DebriefResponse,
}

/// A parsed, range-checked payload ready for resolution.
#[derive(Debug, Clone)]
pub enum Parsed {
    Bottle(BottlePayload),
    Soothe(SoothePayload),
    Diaper(DiaperPayload),
    Medicine(MedicinePayload),
    Hug(HugPayload),
    Babble(BabblePayload),
    Solids(SolidsPayload),
    CatchFall(CatchFallPayload),
    FirstWord(FirstWordPayload),
    Hazard(HazardPayload),
    Mediation(MediationPayload),
    BadWord(BadWordPayload),
    Dressing(DressingPayload),
    Debrief(DebriefPayload),
}

fn parse<T: DeserializeOwned>(value: &Value) -> Result<T, EngineError> {
    serde_json::from_value(value.clone()).map_err(|e| EngineError::InvalidPayload(e.to_string()))
}

fn check(ok: bool, what: &str) -> Result<(), EngineError> {
    if ok {
        Ok(())
    } else {
        Err(EngineError::InvalidPayload(what.to_string()))
    }
}

fn check_range_f64(value: f64, range: (f64, f64), field: &str) -> Result<(), EngineError> {
    check(
        value.is_finite() && value >= range.0 && value <= range.1,
        &format!("{} must be within [{}, {}]", field, range.0, range.1),
    )
}

fn check_range_u32(value: u32, range: (u32, u32), field: &str) -> Result<(), EngineError> {
    check(
        value >= range.0 && value <= range.1,
        &format!("{} must be within [{}, {}]", field, range.0, range.1),
    )
}

/// Parses the loose payload for the given task and checks every numeric
/// field against its declared domain. Out-of-range values are rejected here,
/// never silently clamped.
pub fn validate(task: TaskId, payload: &Value) -> Result<Parsed, EngineError> {
    match task {
        TaskId::PrepareBottle => {
            let p: BottlePayload = parse(payload)?;
            check_range_f64(p.water_temp, (20.0, 60.0), "water_temp")?;
            check_range_u32(p.shake_intensity, (0, 20), "shake_intensity")?;
            check_range_u32(p.tilt_angle, (0, 90), "tilt_angle")?;
            Ok(Parsed::Bottle(p))
        }
        TaskId::SootheToSleep => {
            let p: SoothePayload = parse(payload)?;
            check_range_f64(p.shake_frequency, (0.1, 5.0), "shake_frequency")?;
            check_range_u32(p.duration_secs, (5, 600), "duration_secs")?;
            Ok(Parsed::Soothe(p))
        }
        TaskId::ChangeDiaper => {
            let p: DiaperPayload = parse(payload)?;
            check_range_f64(p.lift_speed, (0.5, 10.0), "lift_speed")?;
            check_range_u32(p.wipe_thoroughness, (1, 10), "wipe_thoroughness")?;
            Ok(Parsed::Diaper(p))
        }
        TaskId::GiveMedicine => Ok(Parsed::Medicine(parse(payload)?)),
        TaskId::Hug => {
            let p: HugPayload = parse(payload)?;
            check_range_f64(p.press_duration, (0.1, 10.0), "press_duration")?;
            Ok(Parsed::Hug(p))
        }
        TaskId::BabbleChat => {
            let p: BabblePayload = parse(payload)?;
            check_range_f64(p.voice_duration, (1.0, 600.0), "voice_duration")?;
            check(p.keywords.len() <= 16, "keywords must hold at most 16 entries")?;
            Ok(Parsed::Babble(p))
        }
        TaskId::PrepareSolids => {
            let p: SolidsPayload = parse(payload)?;
            check_range_u32(p.cutting_skill, (0, 10), "cutting_skill")?;
            Ok(Parsed::Solids(p))
        }
        TaskId::CatchFall => {
            let p: CatchFallPayload = parse(payload)?;
            check_range_f64(p.reaction_secs, (0.0, 10.0), "reaction_secs")?;
            Ok(Parsed::CatchFall(p))
        }
        TaskId::FirstWord => {
            let p: FirstWordPayload = parse(payload)?;
            check_range_f64(p.reaction_secs, (0.0, 30.0), "reaction_secs")?;
            Ok(Parsed::FirstWord(p))
        }
        TaskId::BlockHazard => {
            let p: HazardPayload = parse(payload)?;
            check(!p.hazard.is_empty(), "hazard must not be empty")?;
            Ok(Parsed::Hazard(p))
        }
        TaskId::MediateToyDispute => Ok(Parsed::Mediation(parse(payload)?)),
        TaskId::CorrectBadWord => {
            let p: BadWordPayload = parse(payload)?;
            check(!p.word.is_empty(), "word must not be empty")?;
            Ok(Parsed::BadWord(p))
        }
        TaskId::MorningDressing => {
            let p: DressingPayload = parse(payload)?;
            check_range_u32(p.completion_secs, (1, 600), "completion_secs")?;
            check_range_u32(p.limit_secs, (10, 600), "limit_secs")?;
            Ok(Parsed::Dressing(p))
        }
        TaskId::EmotionDebrief => Ok(Parsed::Debrief(parse(payload)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bottle_payload_parses() {
        let value = json!({"water_temp": 38.5, "shake_intensity": 10, "tilt_angle": 45});
        assert!(matches!(
            validate(TaskId::PrepareBottle, &value),
            Ok(Parsed::Bottle(_))
        ));
    }

    #[test]
    fn test_bottle_missing_field_rejected() {
        let value = json!({"water_temp": 38.5});
        assert!(matches!(
            validate(TaskId::PrepareBottle, &value),
            Err(EngineError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_bottle_out_of_domain_rejected() {
        let value = json!({"water_temp": 95.0, "shake_intensity": 10, "tilt_angle": 45});
        assert!(matches!(
            validate(TaskId::PrepareBottle, &value),
            Err(EngineError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_bottle_scald_temperature_passes_validation() {
        // 45 °C is inside the declared domain; it is the resolve step that
        // treats it as a deterministic failure, not validation.
        let value = json!({"water_temp": 45.0, "shake_intensity": 10, "tilt_angle": 45});
        assert!(validate(TaskId::PrepareBottle, &value).is_ok());
    }

    #[test]
    fn test_diaper_placement_enum() {
        let value = json!({"lift_speed": 3.0, "wipe_thoroughness": 7, "placement": "wrong_order"});
        match validate(TaskId::ChangeDiaper, &value) {
            Ok(Parsed::Diaper(p)) => assert_eq!(p.placement, DiaperPlacement::WrongOrder),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let value = json!({"lift_speed": 3.0, "wipe_thoroughness": 7, "placement": "sideways"});
        assert!(validate(TaskId::ChangeDiaper, &value).is_err());
    }

    #[test]
    fn test_soothe_defaults_app_switched() {
        let value = json!({"shake_frequency": 2.0, "duration_secs": 60});
        match validate(TaskId::SootheToSleep, &value) {
            Ok(Parsed::Soothe(p)) => assert!(!p.app_switched),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_dressing_ranges() {
        let value = json!({"completion_secs": 0, "limit_secs": 60});
        assert!(validate(TaskId::MorningDressing, &value).is_err());
        let value = json!({"completion_secs": 45, "limit_secs": 60});
        assert!(validate(TaskId::MorningDressing, &value).is_ok());
    }
}
