use serde::{Deserialize, Serialize};

/// Caller-owned snapshot of the player, used only for advisory eligibility checks.
///
/// The engine never mutates `money`; the host owns the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerContext {
    pub player_id: String,
    pub level: u32,
    pub reputation: i32,
    pub money: i64,
}

impl PlayerContext {
    pub fn new(player_id: impl Into<String>, level: u32, reputation: i32, money: i64) -> Self {
        Self {
            player_id: player_id.into(),
            level,
            reputation,
            money,
        }
    }
}
