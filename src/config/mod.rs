//! Configuration management.
//!
//! TOML file with one section per concern, sensible defaults for every
//! field, validation on load, and environment overrides for the secrets
//! that should not live in the file. Precedence: environment > config
//! file > defaults.
//!
//! ```toml
//! [bot]
//! name = "Planephobia"
//! admins = [123456789987654321]
//! duel_consent_timeout_secs = 180
//!
//! [storage]
//! data_dir = "data"
//!
//! [game.cooldown_minutes]
//! worship = 3
//! duel = 10
//! hunt = 1
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::game::cooldown::CooldownMinutes;
use crate::game::types::UserId;

/// Environment variable carrying the chat-platform auth token.
pub const ENV_TOKEN: &str = "PLANEPHOBIA_TOKEN";
/// Environment variable overriding the storage directory.
pub const ENV_DATA_DIR: &str = "PLANEPHOBIA_DATA_DIR";
/// Environment variable overriding the target guild id.
pub const ENV_GUILD_ID: &str = "PLANEPHOBIA_GUILD_ID";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_bot_name")]
    pub name: String,
    /// Gateway auth token. Usually supplied via `PLANEPHOBIA_TOKEN` rather
    /// than the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Target guild for command registration, when the gateway wants one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<u64>,
    /// User ids allowed to run admin commands (yeet/reload/sync).
    #[serde(default)]
    pub admins: Vec<UserId>,
    /// How long a duel challenge waits for consent before it times out.
    #[serde(default = "default_consent_timeout")]
    pub duel_consent_timeout_secs: u64,
}

fn default_bot_name() -> String {
    "Planephobia".to_string()
}

fn default_consent_timeout() -> u64 {
    180
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            token: None,
            guild_id: None,
            admins: Vec::new(),
            duel_consent_timeout_secs: default_consent_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Mean multipliers for the Gaussian XP draws. The deviation is
/// `level × sigma` for every award site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct XpTuning {
    #[serde(default = "default_worship_mean")]
    pub worship_mean: u32,
    #[serde(default = "default_hunt_mean")]
    pub hunt_mean: u32,
    #[serde(default = "default_duel_win_mean")]
    pub duel_win_mean: u32,
    #[serde(default = "default_duel_tie_mean")]
    pub duel_tie_mean: u32,
    #[serde(default = "default_sigma")]
    pub sigma: u32,
}

fn default_worship_mean() -> u32 {
    25
}

fn default_hunt_mean() -> u32 {
    35
}

fn default_duel_win_mean() -> u32 {
    50
}

fn default_duel_tie_mean() -> u32 {
    25
}

fn default_sigma() -> u32 {
    5
}

impl Default for XpTuning {
    fn default() -> Self {
        Self {
            worship_mean: default_worship_mean(),
            hunt_mean: default_hunt_mean(),
            duel_win_mean: default_duel_win_mean(),
            duel_tie_mean: default_duel_tie_mean(),
            sigma: default_sigma(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Optional JSON content seed replacing the built-in tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_seed: Option<String>,
    #[serde(default = "default_starting_tokens")]
    pub starting_tokens: i64,
    #[serde(default = "default_starting_favor")]
    pub starting_favor: i64,
    #[serde(default)]
    pub cooldown_minutes: CooldownMinutes,
    #[serde(default)]
    pub xp: XpTuning,
}

fn default_starting_tokens() -> i64 {
    100
}

fn default_starting_favor() -> i64 {
    100
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cooldown_minutes: CooldownMinutes::default(),
            xp: XpTuning::default(),
            content_seed: None,
            starting_tokens: default_starting_tokens(),
            starting_favor: default_starting_favor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// error | warn | info | debug | trace
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from a TOML file, apply environment overrides, validate.
    pub async fn load(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("cannot read config {}: {}", path, e))?;
        let mut config: Config = toml::from_str(&raw)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file.
    pub async fn create_default(path: &str) -> Result<Config> {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config)?;
        fs::write(path, serialized).await?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            if !token.is_empty() {
                self.bot.token = Some(token);
            }
        }
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            if !dir.is_empty() {
                self.storage.data_dir = dir;
            }
        }
        if let Ok(guild) = std::env::var(ENV_GUILD_ID) {
            if let Ok(id) = guild.parse::<u64>() {
                self.bot.guild_id = Some(id);
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => return Err(anyhow!("logging.level '{}' is not a log level", other)),
        }
        if self.bot.duel_consent_timeout_secs == 0 {
            return Err(anyhow!("bot.duel_consent_timeout_secs must be positive"));
        }
        Ok(())
    }
}
