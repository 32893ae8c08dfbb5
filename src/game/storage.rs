//! Sled-backed persistence for player records.
//!
//! The store exposes the five operations the command layer needs: get by
//! user id, insert, partial update (absent fields ignored), delete, and a
//! capped list. Records are bincode-encoded with a schema version byte that
//! is checked on every read; every write flushes so a crash never loses an
//! acknowledged action.

use std::path::{Path, PathBuf};

use sled::IVec;

use crate::game::errors::GameError;
use crate::game::types::{PlayerPatch, PlayerRecord, UserId, PLAYER_SCHEMA_VERSION};

const TREE_PLAYERS: &str = "players";

/// Hard cap on list results.
pub const LIST_CAP: usize = 1000;

/// Helper builder so tests can easily create throwaway stores.
pub struct PlayerStoreBuilder {
    path: PathBuf,
}

impl PlayerStoreBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open(self) -> Result<PlayerStore, GameError> {
        PlayerStore::open(self.path)
    }
}

/// Sled-backed player collection.
pub struct PlayerStore {
    _db: sled::Db,
    players: sled::Tree,
}

impl PlayerStore {
    /// Open (or create) the store rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path_ref = path.as_ref();
        std::fs::create_dir_all(path_ref)?;
        let db = sled::open(path_ref)?;
        let players = db.open_tree(TREE_PLAYERS)?;
        Ok(Self { _db: db, players })
    }

    fn player_key(user_id: UserId) -> Vec<u8> {
        format!("players:{:020}", user_id).into_bytes()
    }

    fn serialize(record: &PlayerRecord) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(record)?)
    }

    fn deserialize(bytes: IVec) -> Result<PlayerRecord, GameError> {
        let record: PlayerRecord = bincode::deserialize(&bytes)?;
        if record.schema_version != PLAYER_SCHEMA_VERSION {
            return Err(GameError::SchemaMismatch {
                entity: "player",
                expected: PLAYER_SCHEMA_VERSION,
                found: record.schema_version,
            });
        }
        Ok(record)
    }

    /// True if a record exists for `user_id`.
    pub fn contains(&self, user_id: UserId) -> Result<bool, GameError> {
        Ok(self.players.contains_key(Self::player_key(user_id))?)
    }

    /// Register a new player. Fails if the user id is already taken.
    pub fn insert(&self, player: &PlayerRecord) -> Result<(), GameError> {
        if self.contains(player.user_id)? {
            return Err(GameError::AlreadyRegistered(player.user_id));
        }
        self.put(player.clone())
    }

    /// Insert or overwrite a full record.
    pub fn put(&self, mut player: PlayerRecord) -> Result<(), GameError> {
        player.schema_version = PLAYER_SCHEMA_VERSION;
        player.touch();
        let key = Self::player_key(player.user_id);
        let bytes = Self::serialize(&player)?;
        self.players.insert(key, bytes)?;
        self.players.flush()?;
        Ok(())
    }

    /// Fetch a record by user id.
    pub fn get(&self, user_id: UserId) -> Result<PlayerRecord, GameError> {
        let key = Self::player_key(user_id);
        let Some(bytes) = self.players.get(&key)? else {
            return Err(GameError::NotFound(format!("player: {}", user_id)));
        };
        Self::deserialize(bytes)
    }

    /// Apply a partial update; fields left `None` are untouched. Returns the
    /// updated record.
    pub fn patch(&self, user_id: UserId, patch: &PlayerPatch) -> Result<PlayerRecord, GameError> {
        let mut record = self.get(user_id)?;
        patch.apply(&mut record);
        self.put(record.clone())?;
        Ok(record)
    }

    /// Delete a record. NotFound if it never existed.
    pub fn delete(&self, user_id: UserId) -> Result<(), GameError> {
        let key = Self::player_key(user_id);
        let removed = self.players.remove(key)?;
        if removed.is_none() {
            return Err(GameError::NotFound(format!("player: {}", user_id)));
        }
        self.players.flush()?;
        Ok(())
    }

    /// List records in user-id order, capped at [`LIST_CAP`].
    pub fn list(&self) -> Result<Vec<PlayerRecord>, GameError> {
        let mut records = Vec::new();
        for entry in self.players.scan_prefix(b"players:").take(LIST_CAP) {
            let (_key, value) = entry?;
            records.push(Self::deserialize(value)?);
        }
        Ok(records)
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.players.len()
    }
}
