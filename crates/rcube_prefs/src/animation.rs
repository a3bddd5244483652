use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What to do when a move is triggered while another is still animating.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MoveOverlapPolicy {
    /// Discard the running animation without committing it and start the new
    /// one.
    #[default]
    Replace,
    /// Commit the running animation immediately and start the new one.
    CommitPending,
    /// Ignore the new move.
    Reject,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of a quarter turn, in milliseconds. A half turn takes twice
    /// as long.
    pub quarter_turn_ms: u64,
    /// Time for the turning layer to spin one full revolution, in
    /// milliseconds.
    pub spin_period_ms: u64,
    pub overlap_policy: MoveOverlapPolicy,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            quarter_turn_ms: 600,
            spin_period_ms: 2400,
            overlap_policy: MoveOverlapPolicy::Replace,
        }
    }
}
impl AnimationPreferences {
    /// Returns how long a move of `amount` quarter turns animates.
    pub fn move_duration(&self, amount: u8) -> Duration {
        Duration::from_millis(self.quarter_turn_ms * amount as u64)
    }
    /// Returns the time for one full revolution of the turning layer.
    pub fn spin_period(&self) -> Duration {
        Duration::from_millis(self.spin_period_ms)
    }
}
