//! Core record types for player state.
//!
//! Everything a player owns lives in a single [`PlayerRecord`] keyed by the
//! platform user id. Records carry a schema version byte; the store rejects
//! records whose version does not match [`PLAYER_SCHEMA_VERSION`] so a stale
//! on-disk layout surfaces as a diagnostic instead of garbage state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::leveling::required_xp;

pub const PLAYER_SCHEMA_VERSION: u8 = 1;

/// Platform-assigned user id (a Discord snowflake or similar).
pub type UserId = u64;

/// The three cooldown-gated player actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CooldownAction {
    Worship,
    Duel,
    Hunt,
}

impl CooldownAction {
    pub const ALL: [CooldownAction; 3] = [
        CooldownAction::Worship,
        CooldownAction::Duel,
        CooldownAction::Hunt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CooldownAction::Worship => "worship",
            CooldownAction::Duel => "duel",
            CooldownAction::Hunt => "hunt",
        }
    }
}

/// Last-used timestamps per action. A missing key means the action is ready.
pub type Cooldowns = BTreeMap<CooldownAction, DateTime<Utc>>;

/// Full attribute block. `requiredxp` is derived from `level` via the
/// quadratic curve in [`crate::game::leveling`]; constructors keep the two
/// consistent so the leveling invariant holds from the first write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub level: u32,
    pub currentxp: i64,
    pub requiredxp: i64,
    pub maxhp: i32,
    pub hp: i32,
    pub maxsan: i32,
    pub san: i32,
    pub atk: i32,
    pub dfs: i32,
    pub rst: i32,
    pub per: i32,
    pub sth: i32,
}

impl Stats {
    /// Fresh level-1 block from a class starting line. HP and sanity start
    /// full; XP starts empty with the requirement derived from the curve.
    pub fn starting(maxhp: i32, maxsan: i32, atk: i32, dfs: i32, rst: i32, per: i32, sth: i32) -> Self {
        Self {
            level: 1,
            currentxp: 0,
            requiredxp: required_xp(1),
            maxhp,
            hp: maxhp,
            maxsan,
            san: maxsan,
            atk,
            dfs,
            rst,
            per,
            sth,
        }
    }

    /// Restore HP, clamped to `maxhp`.
    pub fn heal(&mut self, amount: i32) -> HealResult {
        self.hp += amount;
        if self.hp >= self.maxhp {
            self.hp = self.maxhp;
            HealResult::FullyRestored
        } else {
            HealResult::Healed { amount }
        }
    }

    /// Restore sanity, clamped to `maxsan`.
    pub fn restore_san(&mut self, amount: i32) -> HealResult {
        self.san += amount;
        if self.san >= self.maxsan {
            self.san = self.maxsan;
            HealResult::FullyRestored
        } else {
            HealResult::Healed { amount }
        }
    }
}

/// Outcome of applying a healing consumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealResult {
    FullyRestored,
    Healed { amount: i32 },
}

/// One player, as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    pub user_id: UserId,
    pub display_name: String,
    pub title: String,
    pub class_id: String,
    pub stats: Stats,
    pub tokens: i64,
    pub favor: i64,
    /// Item id -> quantity held.
    #[serde(default)]
    pub inventory: BTreeMap<String, u32>,
    #[serde(default)]
    pub cooldowns: Cooldowns,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub schema_version: u8,
}

impl PlayerRecord {
    pub fn new(
        user_id: UserId,
        display_name: &str,
        title: &str,
        class_id: &str,
        stats: Stats,
        tokens: i64,
        favor: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            display_name: display_name.to_string(),
            title: title.to_string(),
            class_id: class_id.to_string(),
            stats,
            tokens,
            favor,
            inventory: BTreeMap::new(),
            cooldowns: Cooldowns::new(),
            registered_at: now,
            updated_at: now,
            schema_version: PLAYER_SCHEMA_VERSION,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Add `amount` of an item, creating the stack if needed.
    pub fn add_item(&mut self, item_id: &str, amount: u32) {
        *self.inventory.entry(item_id.to_string()).or_insert(0) += amount;
    }

    /// Remove up to `amount` of an item; the stack disappears when it hits
    /// zero. Returns false if the player does not hold the item at all.
    pub fn remove_item(&mut self, item_id: &str, amount: u32) -> bool {
        match self.inventory.get_mut(item_id) {
            Some(count) => {
                *count = count.saturating_sub(amount);
                if *count == 0 {
                    self.inventory.remove(item_id);
                }
                true
            }
            None => false,
        }
    }
}

/// Partial update for a player record. `None` fields are left untouched,
/// mirroring the store's update-ignores-absent-fields contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerPatch {
    pub title: Option<String>,
    pub class_id: Option<String>,
    pub stats: Option<Stats>,
    pub tokens: Option<i64>,
    pub favor: Option<i64>,
    pub inventory: Option<BTreeMap<String, u32>>,
    pub cooldowns: Option<Cooldowns>,
}

impl PlayerPatch {
    pub fn apply(&self, record: &mut PlayerRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(class_id) = &self.class_id {
            record.class_id = class_id.clone();
        }
        if let Some(stats) = &self.stats {
            record.stats = stats.clone();
        }
        if let Some(tokens) = self.tokens {
            record.tokens = tokens;
        }
        if let Some(favor) = self.favor {
            record.favor = favor;
        }
        if let Some(inventory) = &self.inventory {
            record.inventory = inventory.clone();
        }
        if let Some(cooldowns) = &self.cooldowns {
            record.cooldowns = cooldowns.clone();
        }
    }
}
