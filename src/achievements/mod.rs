//! Achievement system: pure predicates over cumulative care statistics,
//! unlocked idempotently into an append-only ledger.

mod data;
mod types;

pub use data::{check, get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId, AchievementLedger, CareStats};
