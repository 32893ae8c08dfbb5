//! # Planephobia - a small text RPG behind chat slash commands
//!
//! Planephobia is the rule engine for a chat-bot RPG: players register,
//! accumulate experience, fight scripted monsters, duel each other, and
//! manage a small inventory/economy. The chat gateway itself is an external
//! collaborator; this crate owns everything from the parsed command to the
//! persisted player record.
//!
//! ## Features
//!
//! - **Leveling**: quadratic XP curve with deterministic multi-level-up
//!   resolution and floor-at-zero semantics for penalties.
//! - **Outcome Tables**: weighted and cumulative selection plus Gaussian XP
//!   draws, all data-driven and seeded-RNG friendly.
//! - **Combat**: alternating-turn hunts against a data-defined monster
//!   roster with per-monster loot tables.
//! - **Duels**: challenge/consent negotiation with a bounded timeout and
//!   d20 resolution in normal and hardcore variants.
//! - **Cooldowns**: per-action gates with configurable durations and
//!   `H:MM:SS` remaining-time rendering.
//! - **Persistence**: sled-backed player store with schema-versioned
//!   records and partial updates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use planephobia::bot::{CommandRequest, Dispatcher};
//! use planephobia::config::Config;
//! use planephobia::game::{GameContent, PlayerStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let store = PlayerStore::open(&config.storage.data_dir)?;
//!     let mut dispatcher = Dispatcher::new(store, GameContent::builtin(), config);
//!
//!     let request = CommandRequest {
//!         user_id: 123456789,
//!         display_name: "alice".into(),
//!         line: "/start".into(),
//!     };
//!     for reply in dispatcher.handle(&request).await {
//!         println!("{reply}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`bot`] - Command parsing, dispatch, and the console front-end
//! - [`game`] - The rule engine: leveling, combat, cooldowns, duels,
//!   content tables, and the player store
//! - [`config`] - Configuration management and validation
//! - [`logutil`] - Log sanitization for user-supplied text

pub mod bot;
pub mod config;
pub mod game;
pub mod logutil;
