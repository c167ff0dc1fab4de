//! Task resolution: deterministic edge branches plus the shared
//! probabilistic path over the static rule tables.
//!
//! Resolution is pure with respect to session state: it reads the child and
//! caregiver, draws from the injected random source, and returns the full
//! set of deltas for the controller to apply. Nothing here mutates state.

use crate::core::constants::*;
use crate::core::error::ExecutionFault;
use crate::modes::Personality;
use crate::state::{CaregiverState, ChildState, Emotion, Stat};
use crate::tasks::data::*;
use crate::tasks::payload::*;
use crate::tasks::resolver::{roll, Factor};
use rand::Rng;

/// Everything a resolved task wants done to the session, before clamping.
#[derive(Debug, Clone)]
pub(crate) struct Resolution {
    pub success: bool,
    /// Folded success probability of the draw; 1.0/0.0 on deterministic
    /// branches.
    pub chance: f64,
    pub deltas: Vec<(Stat, i32)>,
    pub message: String,
    pub special_effects: Vec<String>,
    pub marks_fed: bool,
    pub marks_slept: bool,
    pub temperature_shift: f64,
}

impl Resolution {
    fn deterministic(success: bool, table: DeltaTable, message: &str) -> Self {
        Self {
            success,
            chance: if success { 1.0 } else { 0.0 },
            deltas: table.to_vec(),
            message: message.to_string(),
            special_effects: Vec::new(),
            marks_fed: false,
            marks_slept: false,
            temperature_shift: 0.0,
        }
    }

    fn rolled(success: bool, chance: f64, table: DeltaTable, message: &str) -> Self {
        Self {
            success,
            chance,
            deltas: table.to_vec(),
            message: message.to_string(),
            special_effects: Vec::new(),
            marks_fed: false,
            marks_slept: false,
            temperature_shift: 0.0,
        }
    }
}

/// Resolves a validated payload against current state.
pub(crate) fn resolve<R: Rng>(
    parsed: &Parsed,
    child: &ChildState,
    caregiver: &CaregiverState,
    personality: Personality,
    rng: &mut R,
) -> Result<Resolution, ExecutionFault> {
    let resolution = match parsed {
        Parsed::Bottle(p) => resolve_bottle(p, child, rng),
        Parsed::Soothe(p) => resolve_soothe(p, child, rng),
        Parsed::Diaper(p) => resolve_diaper(p, rng),
        Parsed::Medicine(p) => resolve_medicine(p, child, caregiver, rng),
        Parsed::Hug(p) => resolve_hug(p, child, rng),
        Parsed::Babble(p) => resolve_babble(p, child, rng),
        Parsed::Solids(p) => resolve_solids(p, child, personality, rng),
        Parsed::CatchFall(p) => resolve_catch_fall(p, rng),
        Parsed::FirstWord(p) => resolve_first_word(p, rng),
        Parsed::Hazard(p) => resolve_hazard(p, child, rng),
        Parsed::Mediation(p) => resolve_mediation(p, child, personality, rng),
        Parsed::BadWord(p) => resolve_bad_word(p, child, rng),
        Parsed::Dressing(p) => resolve_dressing(p, child, caregiver, rng),
        Parsed::Debrief(p) => resolve_debrief(p, child, rng),
    };

    if !resolution.chance.is_finite() {
        return Err(ExecutionFault(format!(
            "non-finite success chance {}",
            resolution.chance
        )));
    }
    Ok(resolution)
}

fn resolve_bottle<R: Rng>(p: &BottlePayload, child: &ChildState, rng: &mut R) -> Resolution {
    // Temperature outside the serving band is a hard refusal, no draw.
    if p.water_temp < BOTTLE_TEMP_MIN || p.water_temp > BOTTLE_TEMP_MAX {
        let message = if p.water_temp > BOTTLE_TEMP_MAX {
            "One touch of the bottle and the scream says it all: too hot."
        } else {
            "Cold formula gets one suspicious sip and a firm refusal."
        };
        return Resolution::deterministic(false, BOTTLE_SCALD, message);
    }

    let factors = [
        Factor::new("well_shaken", 0.1, (8..=12).contains(&p.shake_intensity)),
        Factor::new("good_tilt", 0.1, (40..=50).contains(&p.tilt_angle)),
        Factor::new("ravenous", 0.1, child.hunger > 80),
        Factor::new("overtired", -0.15, child.sleep_debt > 80),
    ];
    let outcome = roll(BOTTLE_BASE_RATE, &factors, rng);

    if outcome.success {
        let mut resolution = Resolution::rolled(
            true,
            outcome.chance,
            BOTTLE_OK,
            "The bottle comes back empty. Peace, for now.",
        );
        resolution
            .deltas
            .push((Stat::Hunger, -((outcome.chance * FEED_HUNGER_RELIEF) as i32)));
        resolution.marks_fed = true;
        resolution
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            BOTTLE_FAIL,
            "Half the formula ends up on your shoulder and the crying resumes.",
        )
    }
}

fn resolve_soothe<R: Rng>(p: &SoothePayload, child: &ChildState, rng: &mut R) -> Resolution {
    if p.app_switched {
        return Resolution::deterministic(
            false,
            SOOTHE_DISTRACTED,
            "You glanced at the phone; the eyes snapped open instantly.",
        );
    }

    let factors = [
        Factor::new(
            "ideal_rhythm",
            0.2,
            p.shake_frequency >= IDEAL_SHAKE_FREQ.0 && p.shake_frequency <= IDEAL_SHAKE_FREQ.1,
        ),
        Factor::new("patient_hold", 0.15, p.duration_secs >= SOOTHE_MIN_EFFECTIVE_SECS),
        Factor::new("too_hungry_to_sleep", -0.3, child.hunger > 70),
        Factor::new("soggy_diaper", -0.2, child.hygiene < 40),
        Factor::new("exhausted_anyway", 0.2, child.sleep_debt > 80),
    ];
    let outcome = roll(SOOTHE_BASE_RATE, &factors, rng);

    if outcome.success {
        let mut resolution = Resolution::rolled(
            true,
            outcome.chance,
            SOOTHE_OK,
            "Breathing slows, fists unclench. Sound asleep.",
        );
        resolution.marks_slept = true;
        resolution
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            SOOTHE_FAIL,
            "Forty minutes of rocking and the eyes are still wide open.",
        )
    }
}

fn resolve_diaper<R: Rng>(p: &DiaperPayload, rng: &mut R) -> Resolution {
    // Wrong order of operations fails on every run regardless of the draw.
    if p.placement == DiaperPlacement::WrongOrder {
        return Resolution::deterministic(
            false,
            DIAPER_WRONG_ORDER,
            "New diaper over an unwiped bottom. That rash is on you.",
        );
    }

    let factors = [
        Factor::new("brisk_lift", 0.1, p.lift_speed <= 4.0),
        Factor::new("thorough_wipe", 0.15, p.wipe_thoroughness >= 5),
        Factor::new("rushed_wipe", -0.2, p.wipe_thoroughness < 3),
    ];
    let outcome = roll(DIAPER_BASE_RATE, &factors, rng);

    let mut resolution = if outcome.success {
        let mut r = Resolution::rolled(
            true,
            outcome.chance,
            DIAPER_OK,
            "Fresh diaper on, scene contained. Textbook work.",
        );
        r.deltas.push((
            Stat::Hygiene,
            (outcome.chance * DIAPER_HYGIENE_RESTORE) as i32,
        ));
        r
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            DIAPER_FAIL,
            "The tabs would not stick and it is already sliding sideways.",
        )
    };

    // A slow leg lift invites the spray ambush. Separate effect draw; it
    // never changes the outcome flag.
    if p.lift_speed > DIAPER_SLOW_LIFT_SECS && rng.gen_bool(DIAPER_SPRAY_CHANCE) {
        resolution.special_effects.push("spray_ambush".to_string());
        resolution.deltas.extend_from_slice(DIAPER_SPRAY);
    }

    resolution
}

fn resolve_medicine<R: Rng>(
    p: &MedicinePayload,
    child: &ChildState,
    caregiver: &CaregiverState,
    rng: &mut R,
) -> Resolution {
    let feverish = child.body_temperature >= FEVER_THRESHOLD;
    let correct = if feverish {
        Remedy::FeverPatch
    } else {
        Remedy::GripeWater
    };

    if p.remedy != correct {
        let message = if feverish {
            "That is not a fever remedy. The thermometer keeps climbing."
        } else {
            "Wrong call for a grumbling tummy; now everyone is unhappy."
        };
        return Resolution::deterministic(false, MEDICINE_WRONG, message);
    }

    let factors = [Factor::new("steady_hands", 0.05, caregiver.skill >= 50)];
    let outcome = roll(MEDICINE_BASE_RATE, &factors, rng);

    if outcome.success {
        let mut resolution = Resolution::rolled(
            true,
            outcome.chance,
            MEDICINE_OK,
            "Medicine down without a fuss. Color returning already.",
        );
        resolution.temperature_shift = (BODY_TEMP_NOMINAL - child.body_temperature) * 0.6;
        resolution
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            MEDICINE_FAIL,
            "Most of the dose was spat straight back out.",
        )
    }
}

fn resolve_hug<R: Rng>(p: &HugPayload, child: &ChildState, rng: &mut R) -> Resolution {
    // A committed long press always lands.
    if p.press_duration >= HUG_LONG_PRESS_SECS {
        return Resolution::deterministic(
            true,
            HUG_LONG,
            "A long, unhurried squeeze. The giggle is instant.",
        );
    }

    let factors = [Factor::new("already_upset", -0.2, child.emotion == Emotion::Upset)];
    let outcome = roll(HUG_SHORT_BASE_RATE, &factors, rng);

    if outcome.success {
        Resolution::rolled(
            true,
            outcome.chance,
            HUG_SHORT_OK,
            "A quick squeeze, gratefully received.",
        )
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            HUG_SHORT_FAIL,
            "Too brief; little arms reach after you as you pull away.",
        )
    }
}

fn resolve_babble<R: Rng>(p: &BabblePayload, child: &ChildState, rng: &mut R) -> Resolution {
    let gentle = p
        .keywords
        .iter()
        .any(|k| GENTLE_WORDS.contains(&k.to_lowercase().as_str()));
    let factors = [
        Factor::new("gentle_words", 0.2, gentle),
        Factor::new("good_length", 0.15, (15.0..=60.0).contains(&p.voice_duration)),
        Factor::new("bright_and_alert", 0.1, child.energy > 50),
    ];
    let outcome = roll(BABBLE_BASE_RATE, &factors, rng);

    if outcome.success {
        Resolution::rolled(
            true,
            outcome.chance,
            BABBLE_OK,
            "Delighted squeals answer every word. A full conversation.",
        )
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            BABBLE_FAIL,
            "Blank stare. The audience has moved on to the ceiling fan.",
        )
    }
}

fn resolve_solids<R: Rng>(
    p: &SolidsPayload,
    child: &ChildState,
    personality: Personality,
    rng: &mut R,
) -> Resolution {
    // The carrot trap: a fussy eater refuses it outright, every time.
    if personality == Personality::Fussy && p.food == FoodChoice::Carrot {
        return Resolution::deterministic(
            false,
            SOLIDS_REFUSED,
            "The carrot mash is airborne before the spoon even lands.",
        );
    }

    let factors = [
        Factor::new("fine_dicing", 0.15, p.cutting_skill >= 6),
        Factor::new("hungry_audience", 0.15, child.hunger > 60),
        Factor::new("too_tired_to_eat", -0.1, child.energy < 30),
    ];
    let outcome = roll(SOLIDS_BASE_RATE, &factors, rng);

    if outcome.success {
        let mut resolution = Resolution::rolled(
            true,
            outcome.chance,
            SOLIDS_OK,
            "Bowl scraped clean, cheeks full. A culinary triumph.",
        );
        resolution.deltas.push((
            Stat::Hunger,
            -((outcome.chance * SOLIDS_HUNGER_RELIEF) as i32),
        ));
        resolution.marks_fed = true;
        resolution
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            SOLIDS_FAIL,
            "Two spoonfuls in, the mouth clamps shut for good.",
        )
    }
}

fn resolve_catch_fall<R: Rng>(p: &CatchFallPayload, rng: &mut R) -> Resolution {
    if !p.button_pressed {
        return Resolution::deterministic(
            false,
            CATCH_MISSED,
            "You froze. The thud is followed by the loudest cry yet.",
        );
    }

    let fast = p.reaction_secs <= CATCH_FAST_REACTION_SECS;
    let factors = [
        Factor::new("lightning_reflex", 0.4, fast),
        Factor::new("decent_reflex", 0.25, !fast && p.reaction_secs <= CATCH_OK_REACTION_SECS),
    ];
    let outcome = roll(CATCH_BASE_RATE, &factors, rng);

    if outcome.success {
        Resolution::rolled(
            true,
            outcome.chance,
            CATCH_OK,
            "Caught mid-topple. The wobble turns into a proud grin.",
        )
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            CATCH_FAIL,
            "Fingertips only. The landing was soft but the pride is bruised.",
        )
    }
}

fn resolve_first_word<R: Rng>(p: &FirstWordPayload, rng: &mut R) -> Resolution {
    if !p.recorded {
        return Resolution::deterministic(
            false,
            FIRST_WORD_MISSED,
            "\"Mama!\" — and the camera was face-down on the couch.",
        );
    }

    let factors = [Factor::new("quick_on_the_button", 0.15, p.reaction_secs <= 3.0)];
    let outcome = roll(FIRST_WORD_BASE_RATE, &factors, rng);

    if outcome.success {
        Resolution::rolled(
            true,
            outcome.chance,
            FIRST_WORD_OK,
            "First word, captured in full. Grandparents notified.",
        )
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            FIRST_WORD_FAIL,
            "The recording caught everything except the word itself.",
        )
    }
}

fn resolve_hazard<R: Rng>(p: &HazardPayload, child: &ChildState, rng: &mut R) -> Resolution {
    if p.swipe == SwipeDirection::Toward {
        return Resolution::deterministic(
            false,
            HAZARD_TOWARD,
            "Wrong direction. A yelp, tears, and a lesson learned the hard way.",
        );
    }

    let factors = [Factor::new("fast_little_legs", -0.1, child.motor_skill > 40)];
    let outcome = roll(HAZARD_BASE_RATE, &factors, rng);

    if outcome.success {
        let mut resolution = Resolution::rolled(
            true,
            outcome.chance,
            HAZARD_OK,
            "Steered away smoothly; curiosity redirected to the toy bin.",
        );
        resolution
            .special_effects
            .push(format!("hazard_cleared:{}", p.hazard));
        resolution
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            HAZARD_FAIL,
            "A half-second too slow; close enough to raise your pulse.",
        )
    }
}

fn resolve_mediation<R: Rng>(
    p: &MediationPayload,
    child: &ChildState,
    personality: Personality,
    rng: &mut R,
) -> Resolution {
    match p.approach {
        MediationApproach::TakeToyBack => Resolution::deterministic(
            false,
            MEDIATE_CONFISCATED,
            "Order restored by decree. Nobody is happy, least of all you.",
        ),
        MediationApproach::LookAway => Resolution::deterministic(
            false,
            MEDIATE_IGNORED,
            "You looked away; the dispute settled itself with hair-pulling.",
        ),
        MediationApproach::GuideSharing => {
            let factors = [
                Factor::new("fussy_negotiator", -0.35, personality == Personality::Fussy),
                Factor::new("practiced_sharer", 0.15, child.emotional_regulation > 50),
            ];
            let outcome = roll(MEDIATE_BASE_RATE, &factors, rng);

            if outcome.success {
                Resolution::rolled(
                    true,
                    outcome.chance,
                    MEDIATE_OK,
                    "Turns negotiated, toy shared. Diplomacy at its finest.",
                )
            } else {
                Resolution::rolled(
                    false,
                    outcome.chance,
                    MEDIATE_FAIL,
                    "The sharing speech was received as a declaration of war.",
                )
            }
        }
    }
}

fn resolve_bad_word<R: Rng>(p: &BadWordPayload, child: &ChildState, rng: &mut R) -> Resolution {
    match p.method {
        CorrectionMethod::Scold => Resolution::deterministic(
            false,
            BAD_WORD_SCOLDED,
            "The scolding landed harder than the word ever did.",
        ),
        CorrectionMethod::LaughAlong => Resolution::deterministic(
            false,
            BAD_WORD_REINFORCED,
            "You laughed. It is now the favorite word in the house.",
        ),
        CorrectionMethod::GentleSwap => {
            let factors = [Factor::new("verbal_sponge", 0.1, child.language_skill > 40)];
            let outcome = roll(BAD_WORD_BASE_RATE, &factors, rng);

            if outcome.success {
                Resolution::rolled(
                    true,
                    outcome.chance,
                    BAD_WORD_OK,
                    "\"Oh fiddlesticks!\" The swap takes hold by the third try.",
                )
            } else {
                Resolution::rolled(
                    false,
                    outcome.chance,
                    BAD_WORD_FAIL,
                    "The polite replacement did not survive contact with daycare.",
                )
            }
        }
    }
}

fn resolve_dressing<R: Rng>(
    p: &DressingPayload,
    child: &ChildState,
    caregiver: &CaregiverState,
    rng: &mut R,
) -> Resolution {
    if p.completion_secs > p.limit_secs {
        return Resolution::deterministic(
            false,
            DRESSING_OVERTIME,
            "The bus is gone and one sock is still missing.",
        );
    }

    let margin = p.limit_secs - p.completion_secs;
    let factors = [
        Factor::new("comfortable_margin", 0.2, margin >= DRESSING_COMFORTABLE_MARGIN_SECS),
        Factor::new("calm_caregiver", 0.1, caregiver.patience > 60),
        Factor::new("morning_grump", -0.15, child.energy < 30),
    ];
    let outcome = roll(DRESSING_BASE_RATE, &factors, rng);

    if outcome.success {
        Resolution::rolled(
            true,
            outcome.chance,
            DRESSING_OK,
            "Dressed, zipped, and out the door with time to spare.",
        )
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            DRESSING_FAIL,
            "Dressed, technically. The shirt is inside out and so is your patience.",
        )
    }
}

fn resolve_debrief<R: Rng>(p: &DebriefPayload, child: &ChildState, rng: &mut R) -> Resolution {
    let base = match p.response {
        DebriefResponse::Dismiss => {
            return Resolution::deterministic(
                false,
                DEBRIEF_DISMISSED,
                "\"It was just a dream\" closed the conversation, and a door.",
            );
        }
        DebriefResponse::Empathize => DEBRIEF_EMPATHIZE_BASE_RATE,
        DebriefResponse::Distract => DEBRIEF_DISTRACT_BASE_RATE,
    };

    let factors = [Factor::new("practiced_feelings_talk", 0.1, child.emotional_regulation > 30)];
    let outcome = roll(base, &factors, rng);

    if outcome.success {
        Resolution::rolled(
            true,
            outcome.chance,
            DEBRIEF_OK,
            "The monster got named, shrunk, and laughed out of the room.",
        )
    } else {
        Resolution::rolled(
            false,
            outcome.chance,
            DEBRIEF_FAIL,
            "The worry is still there at bedtime, waiting.",
        )
    }
}
