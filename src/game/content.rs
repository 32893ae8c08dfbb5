//! Game content as data.
//!
//! Classes, titles, worship outcomes, the enemy roster with spawn and loot
//! weights, and the item catalog all live here as plain values. The built-in
//! set ships in code; a JSON seed file can replace it wholesale (written by
//! `planephobia init`, re-read by the admin reload command). Nothing in the
//! engine hard-codes a monster or an item; handlers only see lookups
//! against a [`GameContent`] instance they were handed.

use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::errors::GameError;
use crate::game::items::{normalize_name, ArmorSlot, ItemDef, ItemKind, StatKind};
use crate::game::outcome::{CumulativeTable, WeightedTable};
use crate::game::types::Stats;

/// A playable class: a named starting stat line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassDef {
    pub id: String,
    pub name: String,
    pub maxhp: i32,
    pub maxsan: i32,
    pub atk: i32,
    pub dfs: i32,
    pub rst: i32,
    pub per: i32,
    pub sth: i32,
}

impl ClassDef {
    pub fn starting_stats(&self) -> Stats {
        Stats::starting(
            self.maxhp, self.maxsan, self.atk, self.dfs, self.rst, self.per, self.sth,
        )
    }
}

/// One worship result: flavor line plus a favor delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorshipOutcome {
    pub text: String,
    pub favor: i64,
}

/// Seed form of a worship outcome with its selection weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorshipSeedEntry {
    pub text: String,
    pub favor: i64,
    pub weight: u32,
}

/// A loot band: the drop fires when the roll lands below `up_to` and above
/// the previous entry's bound. Whatever remains up to 1.0 is "no drop".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LootDrop {
    pub item: String,
    pub up_to: f64,
}

/// One monster, stats plus its loot table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnemyDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub description: String,
    pub hp: i32,
    pub atk: i32,
    #[serde(default)]
    pub drops: Vec<LootDrop>,
}

/// Spawn band over the enemy roster, cumulative up to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpawnEntry {
    pub enemy: String,
    pub up_to: f64,
}

/// Serializable content bundle: what `init` writes and reload reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentSeed {
    pub classes: Vec<ClassDef>,
    pub titles: Vec<String>,
    pub worship_dance: Vec<WorshipSeedEntry>,
    pub spawn: Vec<SpawnEntry>,
    pub enemies: Vec<EnemyDef>,
    pub items: Vec<ItemDef>,
}

/// Validated, lookup-ready content.
#[derive(Debug, Clone)]
pub struct GameContent {
    classes: Vec<ClassDef>,
    titles: Vec<String>,
    worship_dance: WeightedTable<WorshipOutcome>,
    spawn: CumulativeTable<String>,
    enemies: BTreeMap<String, EnemyDef>,
    loot: BTreeMap<String, CumulativeTable<String>>,
    items: BTreeMap<String, ItemDef>,
    /// normalized display name -> item id
    name_index: BTreeMap<String, String>,
}

impl GameContent {
    /// The content set the game ships with.
    pub fn builtin() -> Self {
        Self::from_seed(builtin_seed()).expect("builtin content is valid")
    }

    /// Read a seed file (JSON) and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let raw = std::fs::read_to_string(path)?;
        let seed: ContentSeed = serde_json::from_str(&raw)
            .map_err(|e| GameError::InvalidContent(format!("seed parse: {e}")))?;
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: ContentSeed) -> Result<Self, GameError> {
        if seed.classes.is_empty() {
            return Err(GameError::InvalidContent("no classes defined".into()));
        }
        if seed.titles.is_empty() {
            return Err(GameError::InvalidContent("no titles defined".into()));
        }
        for class in &seed.classes {
            if class.atk < 1 {
                return Err(GameError::InvalidContent(format!(
                    "class {} has atk < 1; combat would never end",
                    class.id
                )));
            }
            if class.maxhp < 1 {
                return Err(GameError::InvalidContent(format!(
                    "class {} has maxhp < 1",
                    class.id
                )));
            }
        }

        let worship_dance = WeightedTable::new(
            seed.worship_dance
                .into_iter()
                .map(|e| {
                    (
                        WorshipOutcome {
                            text: e.text,
                            favor: e.favor,
                        },
                        e.weight,
                    )
                })
                .collect(),
        )?;

        let mut enemies = BTreeMap::new();
        let mut loot = BTreeMap::new();
        let mut items = BTreeMap::new();
        let mut name_index = BTreeMap::new();

        for item in seed.items {
            name_index.insert(normalize_name(&item.name), item.id.clone());
            name_index.insert(normalize_name(&item.id), item.id.clone());
            items.insert(item.id.clone(), item);
        }

        for enemy in seed.enemies {
            if enemy.hp < 1 {
                return Err(GameError::InvalidContent(format!(
                    "enemy {} has hp < 1",
                    enemy.id
                )));
            }
            for drop in &enemy.drops {
                if !items.contains_key(&drop.item) {
                    return Err(GameError::InvalidContent(format!(
                        "enemy {} drops unknown item {}",
                        enemy.id, drop.item
                    )));
                }
            }
            let table = CumulativeTable::new(
                enemy
                    .drops
                    .iter()
                    .map(|d| (d.item.clone(), d.up_to))
                    .collect(),
                1.0,
            )?;
            loot.insert(enemy.id.clone(), table);
            enemies.insert(enemy.id.clone(), enemy);
        }

        for entry in &seed.spawn {
            if !enemies.contains_key(&entry.enemy) {
                return Err(GameError::InvalidContent(format!(
                    "spawn table references unknown enemy {}",
                    entry.enemy
                )));
            }
        }
        match seed.spawn.last() {
            Some(last) if (last.up_to - 1.0).abs() < f64::EPSILON => {}
            _ => {
                return Err(GameError::InvalidContent(
                    "spawn table must be cumulative up to 1.0".into(),
                ))
            }
        }
        let spawn = CumulativeTable::new(
            seed.spawn
                .into_iter()
                .map(|e| (e.enemy, e.up_to))
                .collect(),
            1.0,
        )?;

        Ok(Self {
            classes: seed.classes,
            titles: seed.titles,
            worship_dance,
            spawn,
            enemies,
            loot,
            items,
            name_index,
        })
    }

    pub fn classes(&self) -> &[ClassDef] {
        &self.classes
    }

    pub fn class(&self, id: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn default_class(&self) -> &ClassDef {
        &self.classes[0]
    }

    /// Title assigned at registration.
    pub fn starting_title(&self) -> &str {
        &self.titles[0]
    }

    pub fn item(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    /// Resolve a player-typed item name ("Rum Shot", "rumshot", ...).
    pub fn item_by_name(&self, raw: &str) -> Option<&ItemDef> {
        let id = self.name_index.get(&normalize_name(raw))?;
        self.items.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemDef> {
        self.items.values()
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyDef> {
        self.enemies.get(id)
    }

    /// Pick a worship dance result.
    pub fn worship_dance<R: Rng>(&self, rng: &mut R) -> &WorshipOutcome {
        self.worship_dance.pick(rng)
    }

    /// Pick which monster a hunt runs into.
    pub fn spawn_enemy<R: Rng>(&self, rng: &mut R) -> Option<&EnemyDef> {
        self.spawn.pick(rng).and_then(|id| self.enemies.get(id))
    }

    /// Roll an enemy's loot table; `None` means the hunt yields nothing.
    pub fn roll_loot<R: Rng>(&self, enemy_id: &str, rng: &mut R) -> Option<&ItemDef> {
        let table = self.loot.get(enemy_id)?;
        table.pick(rng).and_then(|id| self.items.get(id))
    }
}

/// The shipped content set.
pub fn builtin_seed() -> ContentSeed {
    ContentSeed {
        classes: vec![
            ClassDef {
                id: "test_a".into(),
                name: "Test Class A".into(),
                maxhp: 10,
                maxsan: 5,
                atk: 2,
                dfs: 1,
                rst: 2,
                per: 2,
                sth: 2,
            },
            ClassDef {
                id: "test_b".into(),
                name: "Test Class B".into(),
                maxhp: 15,
                maxsan: 5,
                atk: 5,
                dfs: 2,
                rst: 1,
                per: 1,
                sth: 1,
            },
        ],
        titles: vec![
            "Fresh Cultist".into(),
            "Acolyte of GhostKai".into(),
            "The Destroyer of Worlds".into(),
        ],
        worship_dance: vec![
            WorshipSeedEntry {
                text: "You fail miserably, do you even know where left and right are? You have upset GhostKai.\nYou get -5 Favour.".into(),
                favor: -5,
                weight: 5,
            },
            WorshipSeedEntry {
                text: "You look ridiculous, but at least you managed to stay on your feet. However, GhostKai has standards.\nYou get -1 Favour.".into(),
                favor: -1,
                weight: 10,
            },
            WorshipSeedEntry {
                text: "Mediocre, but it will have to do.\nYou get +1 Favour!".into(),
                favor: 1,
                weight: 40,
            },
            WorshipSeedEntry {
                text: "Your dance is adequate, GhostKai is pleased.\nYou get +3 Favour!".into(),
                favor: 3,
                weight: 35,
            },
            WorshipSeedEntry {
                text: "The light of our Lord GhostKai shines upon you! Your dance has greatly pleased Him.\nYou get +5 Favour!".into(),
                favor: 5,
                weight: 10,
            },
        ],
        spawn: vec![
            SpawnEntry { enemy: "bundt".into(), up_to: 0.15 },
            SpawnEntry { enemy: "redvelvet".into(), up_to: 0.35 },
            SpawnEntry { enemy: "cinnamonroll".into(), up_to: 0.5 },
            SpawnEntry { enemy: "redvelvet_cupcake".into(), up_to: 1.0 },
        ],
        enemies: vec![
            EnemyDef {
                id: "bundt".into(),
                name: "Haunted Bundt Cake".into(),
                emoji: ":cake:".into(),
                description: "A dense ring of malice with a dusting of powdered sugar.".into(),
                hp: 12,
                atk: 2,
                drops: vec![
                    LootDrop { item: "rumbottle".into(), up_to: 0.2 },
                    LootDrop { item: "rumshot".into(), up_to: 0.45 },
                    LootDrop { item: "cakecrumbs".into(), up_to: 0.7 },
                ],
            },
            EnemyDef {
                id: "redvelvet".into(),
                name: "Cursed Red Velvet Cake".into(),
                emoji: ":cake:".into(),
                description: "Oops, looks like someone forgot the non-stick paper!".into(),
                hp: 8,
                atk: 2,
                drops: vec![
                    LootDrop { item: "cakecrumbs".into(), up_to: 0.35 },
                    LootDrop { item: "rumshot".into(), up_to: 0.5 },
                ],
            },
            EnemyDef {
                id: "cinnamonroll".into(),
                name: "Feral Cinnamon Roll".into(),
                emoji: ":croissant:".into(),
                description: "Sticky, swirling, and surprisingly quick.".into(),
                hp: 5,
                atk: 1,
                drops: vec![
                    LootDrop { item: "cakecrumbs".into(), up_to: 0.3 },
                    LootDrop { item: "sprinkles".into(), up_to: 0.5 },
                ],
            },
            EnemyDef {
                id: "redvelvet_cupcake".into(),
                name: "Red Velvet Cupcake".into(),
                emoji: ":cupcake:".into(),
                description: "Small, angry, and mostly frosting.".into(),
                hp: 3,
                atk: 1,
                drops: vec![
                    LootDrop { item: "sprinkles".into(), up_to: 0.4 },
                    LootDrop { item: "cakecrumbs".into(), up_to: 0.55 },
                ],
            },
        ],
        items: vec![
            ItemDef {
                id: "rumshot".into(),
                name: "Rum Shot".into(),
                emoji: ":tumbler_glass:".into(),
                description: "A small measure of Captain Morgan Original Spiced Gold, GhostKai's drink of choice.".into(),
                value: 10,
                kind: ItemKind::Consumable { stat: StatKind::Hp, amount: 5 },
            },
            ItemDef {
                id: "rumbottle".into(),
                name: "Rum Bottle".into(),
                emoji: ":tumbler_glass:".into(),
                description: "A whole bottle of Captain Morgan Original Spiced Gold.".into(),
                value: 50,
                kind: ItemKind::Consumable { stat: StatKind::Hp, amount: 10 },
            },
            ItemDef {
                id: "cakecrumbs".into(),
                name: "Cake Crumbs".into(),
                emoji: ":cookie:".into(),
                description: "Some cake leftovers, not sure how fresh.".into(),
                value: 5,
                kind: ItemKind::Consumable { stat: StatKind::Hp, amount: 3 },
            },
            ItemDef {
                id: "sprinkles".into(),
                name: "Sprinkles".into(),
                emoji: ":cupcake:".into(),
                description: "A few cake sprinkles. But they are rainbow sprinkles, the objectively superior choice.".into(),
                value: 2,
                kind: ItemKind::Consumable { stat: StatKind::Hp, amount: 1 },
            },
            ItemDef {
                id: "catears".into(),
                name: "Cat Ears".into(),
                emoji: String::new(),
                description: "A headband with two pink cat ears, a type of religious headdress.".into(),
                value: 25,
                kind: ItemKind::Armor {
                    slot: ArmorSlot::Helmet,
                    defense: 1,
                    bonuses: BTreeMap::from([(StatKind::Favor, 100), (StatKind::Atk, 5)]),
                },
            },
            ItemDef {
                id: "headset".into(),
                name: "Steelseries Headset".into(),
                emoji: String::new(),
                description: "A new set of white Steelseries Arctis Nova headphones.".into(),
                value: 50,
                kind: ItemKind::Armor {
                    slot: ArmorSlot::Helmet,
                    defense: 5,
                    bonuses: BTreeMap::from([(StatKind::Favor, 20), (StatKind::Per, 3)]),
                },
            },
        ],
    }
}
