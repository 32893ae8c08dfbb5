//! Item catalog types.
//!
//! Items are static catalog data; players only ever hold references to them
//! (id + count) in their inventory. Consumables restore a stat by a fixed
//! amount, armor grants a defense bonus plus secondary stat bonuses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stats an item can touch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Hp,
    San,
    Atk,
    Dfs,
    Rst,
    Per,
    Sth,
    Favor,
}

impl StatKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Hp => "HP",
            StatKind::San => "SAN",
            StatKind::Atk => "ATK",
            StatKind::Dfs => "DEF",
            StatKind::Rst => "RST",
            StatKind::Per => "PER",
            StatKind::Sth => "STH",
            StatKind::Favor => "Favor",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSlot {
    Helmet,
}

impl ArmorSlot {
    pub fn label(&self) -> &'static str {
        match self {
            ArmorSlot::Helmet => "Helmet",
        }
    }
}

/// What an item does when held or used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ItemKind {
    Consumable {
        stat: StatKind,
        amount: i32,
    },
    Armor {
        slot: ArmorSlot,
        defense: i32,
        #[serde(default)]
        bonuses: BTreeMap<StatKind, i32>,
    },
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub description: String,
    /// Token value.
    pub value: i64,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl ItemDef {
    pub fn is_consumable(&self) -> bool {
        matches!(self.kind, ItemKind::Consumable { .. })
    }
}

/// Canonical lookup form for a player-typed item name: lowercase with
/// spaces removed, so "Rum Shot", "rumshot" and "RUM SHOT" all match.
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_normalization_collapses_case_and_spaces() {
        assert_eq!(normalize_name("Rum Shot"), "rumshot");
        assert_eq!(normalize_name("  CAKE crumbs "), "cakecrumbs");
    }
}
