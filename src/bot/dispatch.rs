//! Command dispatch.
//!
//! One handler per slash command: load the player record, consult the
//! cooldown gate, run the outcome tables and/or combat resolver, apply the
//! result through the leveling function, write back through the store, and
//! answer with plain reply lines for the gateway to render.
//!
//! Error policy: not-registered and not-found map to friendly user text;
//! anything else is logged in full and the user sees one generic failure
//! line. Internal diagnostics never leak into replies.

use chrono::Utc;
use log::{debug, error};

use crate::bot::commands::{self, Command, ItemCategory, WorshipKind};
use crate::bot::duels::{ChallengeRejected, DuelBoard};
use crate::config::Config;
use crate::game::combat;
use crate::game::content::GameContent;
use crate::game::cooldown::{self, CooldownStatus};
use crate::game::duel::{self, ConsentOutcome, DuelChallenge, DuelKind, DuelVerdict};
use crate::game::errors::GameError;
use crate::game::items::{ItemKind, StatKind};
use crate::game::leveling::apply_xp;
use crate::game::outcome::xp_award_floored;
use crate::game::storage::PlayerStore;
use crate::game::types::{CooldownAction, HealResult, PlayerPatch, PlayerRecord, UserId};
use crate::logutil::sanitize_log;

const NOT_REGISTERED: &str = "You are not registered yet. Use /start to begin your pilgrimage.";
const TARGET_NOT_REGISTERED: &str = "Target Player doesn't exist or isn't registered.";
const GENERIC_FAILURE: &str = "Something went wrong on our side. It has been noted.";
const MISSING_PERMISSIONS: &str = "You are missing required permissions.";

/// One incoming command from the gateway.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub user_id: UserId,
    pub display_name: String,
    pub line: String,
}

/// The command processor. Owns the store handle, the content tables and the
/// duel consent board.
pub struct Dispatcher {
    store: PlayerStore,
    content: GameContent,
    config: Config,
    duels: DuelBoard,
}

impl Dispatcher {
    pub fn new(store: PlayerStore, content: GameContent, config: Config) -> Self {
        Self {
            store,
            content,
            config,
            duels: DuelBoard::new(),
        }
    }

    pub fn store(&self) -> &PlayerStore {
        &self.store
    }

    pub fn content(&self) -> &GameContent {
        &self.content
    }

    fn is_admin(&self, user_id: UserId) -> bool {
        self.config.bot.admins.contains(&user_id)
    }

    /// Handle one command line and return the reply lines.
    pub async fn handle(&mut self, req: &CommandRequest) -> Vec<String> {
        debug!(
            "{} ({}): {}",
            sanitize_log(&req.display_name),
            req.user_id,
            sanitize_log(&req.line)
        );
        let command = commands::parse(&req.line);
        let result = match command {
            Command::Start { class } => self.start(req, class.as_deref()),
            Command::Profile { user } => self.profile(req, user),
            Command::Stats => self.stats(req),
            Command::Cooldowns => self.cooldowns(req),
            Command::Worship { kind } => self.worship(req, kind),
            Command::Duel { kind, target } => self.duel(req, kind, target),
            Command::Accept => self.duel_response(req, true),
            Command::Decline => self.duel_response(req, false),
            Command::Hunt => self.hunt(req),
            Command::Use { item } => self.use_item(req, &item),
            Command::Items { category } => self.items(category),
            Command::Help => Ok(self.help()),
            Command::Players => self.players(),
            Command::Yeet { user } => self.yeet(req, user),
            Command::Reload => self.reload(req),
            Command::Sync => self.sync(req),
            Command::Unknown(_) => Ok(vec![
                "Unknown command. Use /help to see what you can do.".to_string(),
            ]),
        };
        match result {
            Ok(replies) => replies,
            Err(GameError::NotFound(_)) => vec![NOT_REGISTERED.to_string()],
            Err(GameError::AlreadyRegistered(_)) => {
                vec!["You are already registered.".to_string()]
            }
            Err(err) => {
                error!(
                    "command '{}' from {} failed: {}",
                    sanitize_log(&req.line),
                    req.user_id,
                    err
                );
                vec![GENERIC_FAILURE.to_string()]
            }
        }
    }

    /// Check one action's gate. Ready clears a stale timestamp in place and
    /// returns `None`; otherwise the rejection line to send.
    fn gate(&self, player: &mut PlayerRecord, action: CooldownAction) -> Option<String> {
        let minutes = self.config.game.cooldown_minutes.for_action(action);
        let last = player.cooldowns.get(&action).copied();
        match cooldown::check(last, minutes, Utc::now()) {
            CooldownStatus::Ready => {
                if last.is_some() {
                    player.cooldowns.remove(&action);
                }
                None
            }
            CooldownStatus::Remaining(rem) => Some(format!(
                "Try again in {}.",
                cooldown::format_remaining(rem)
            )),
        }
    }

    fn start(&mut self, req: &CommandRequest, class: Option<&str>) -> Result<Vec<String>, GameError> {
        if self.store.contains(req.user_id)? {
            return Ok(vec!["You are already registered.".to_string()]);
        }
        let class_def = match class {
            None => self.content.default_class(),
            Some(tag) => match self.content.class(tag) {
                Some(c) => c,
                None => {
                    let options: Vec<&str> =
                        self.content.classes().iter().map(|c| c.id.as_str()).collect();
                    return Ok(vec![format!(
                        "Unknown class '{}'. Available classes: {}.",
                        sanitize_log(tag),
                        options.join(", ")
                    )]);
                }
            },
        };
        let player = PlayerRecord::new(
            req.user_id,
            &req.display_name,
            self.content.starting_title(),
            &class_def.id,
            class_def.starting_stats(),
            self.config.game.starting_tokens,
            self.config.game.starting_favor,
        );
        self.store.insert(&player)?;
        Ok(vec![format!(
            "Welcome, **{}** the {}! You are registered as {}.\nUse /help to see what you can do.",
            req.display_name, player.title, class_def.name
        )])
    }

    fn profile(&self, req: &CommandRequest, user: Option<UserId>) -> Result<Vec<String>, GameError> {
        let looking_up_other = user.is_some();
        let target = user.unwrap_or(req.user_id);
        let player = match self.store.get(target) {
            Ok(p) => p,
            Err(GameError::NotFound(_)) if looking_up_other => {
                return Ok(vec![TARGET_NOT_REGISTERED.to_string()]);
            }
            Err(e) => return Err(e),
        };
        let class_name = self
            .content
            .class(&player.class_id)
            .map(|c| c.name.as_str())
            .unwrap_or(player.class_id.as_str());
        let stats = &player.stats;
        Ok(vec![format!(
            "**{}** — {}\n{}\nPROGRESS\n**Level**: {}\n**XP**: {}/{}\nSTATS\n:heart: **HP**: {}/{}\n:brain: **SAN**: {}/{}\n:dagger: **ATK**: {}\n:shield: **DEF**: {}\n*Use /stats for more.*\nVALUABLES\n:coin: **Tokens**: {}\n:candle: **Favour**: {}\nPlaying since {}",
            player.display_name,
            player.title,
            class_name,
            stats.level,
            stats.currentxp,
            stats.requiredxp,
            stats.hp,
            stats.maxhp,
            stats.san,
            stats.maxsan,
            stats.atk,
            stats.dfs,
            player.tokens,
            player.favor,
            player.registered_at.format("%Y-%m-%d")
        )])
    }

    fn stats(&self, req: &CommandRequest) -> Result<Vec<String>, GameError> {
        let player = self.store.get(req.user_id)?;
        let s = &player.stats;
        Ok(vec![format!(
            "ALL STATS — {}\n:heart: **Health**: {}/{}\n:brain: **Sanity**: {}/{}\n:dagger: **Attack**: {}\n:shield: **Defense**: {}\n:bulb: **Resistance**: {}\n:eye: **Perception**: {}\n:footprints: **Stealth**: {}",
            player.display_name, s.hp, s.maxhp, s.san, s.maxsan, s.atk, s.dfs, s.rst, s.per, s.sth
        )])
    }

    fn cooldowns(&mut self, req: &CommandRequest) -> Result<Vec<String>, GameError> {
        let mut player = self.store.get(req.user_id)?;
        let now = Utc::now();
        let mut lines = vec!["Command cooldowns:".to_string()];
        let mut cleared = false;
        for action in CooldownAction::ALL {
            let minutes = self.config.game.cooldown_minutes.for_action(action);
            let last = player.cooldowns.get(&action).copied();
            let display = match cooldown::check(last, minutes, now) {
                CooldownStatus::Ready => {
                    if last.is_some() {
                        player.cooldowns.remove(&action);
                        cleared = true;
                    }
                    "Ready".to_string()
                }
                CooldownStatus::Remaining(rem) => cooldown::format_remaining(rem),
            };
            lines.push(format!("* {}: {}", action.as_str(), display));
        }
        if cleared {
            let patch = PlayerPatch {
                cooldowns: Some(player.cooldowns.clone()),
                ..PlayerPatch::default()
            };
            self.store.patch(req.user_id, &patch)?;
        }
        Ok(lines)
    }

    fn worship(&mut self, req: &CommandRequest, kind: WorshipKind) -> Result<Vec<String>, GameError> {
        let WorshipKind::Dance = kind;
        let mut player = self.store.get(req.user_id)?;
        if let Some(rejection) = self.gate(&mut player, CooldownAction::Worship) {
            return Ok(vec![rejection]);
        }

        let mut rng = rand::thread_rng();
        let outcome = self.content.worship_dance(&mut rng).clone();
        let xp = xp_award_floored(
            &mut rng,
            player.stats.level,
            self.config.game.xp.worship_mean,
            self.config.game.xp.sigma,
        );
        player.favor += outcome.favor;
        let levels = apply_xp(&mut player.stats, xp);
        player.cooldowns.insert(CooldownAction::Worship, Utc::now());

        let patch = PlayerPatch {
            stats: Some(player.stats.clone()),
            favor: Some(player.favor),
            cooldowns: Some(player.cooldowns.clone()),
            ..PlayerPatch::default()
        };
        self.store.patch(req.user_id, &patch)?;

        let mut lines = vec![
            format!(
                "**{}** tries to perform the ***Kitty Dance***...",
                player.display_name
            ),
            outcome.text,
            format!("You also gain {} XP.", xp),
        ];
        if levels > 0 {
            lines.push(format!("You have levelled up {} time(s)!", levels));
        }
        Ok(lines)
    }

    fn duel(
        &mut self,
        req: &CommandRequest,
        kind: DuelKind,
        target: UserId,
    ) -> Result<Vec<String>, GameError> {
        if req.user_id == target {
            return Ok(vec![
                "You cannot challenge yourself to a duel.".to_string()
            ]);
        }
        let mut initiator = self.store.get(req.user_id)?;
        let challenged = match self.store.get(target) {
            Ok(p) => p,
            Err(GameError::NotFound(_)) => {
                return Ok(vec![TARGET_NOT_REGISTERED.to_string()]);
            }
            Err(e) => return Err(e),
        };

        if let Some(rejection) = self.gate(&mut initiator, CooldownAction::Duel) {
            return Ok(vec![rejection]);
        }
        let target_minutes = self.config.game.cooldown_minutes.for_action(CooldownAction::Duel);
        let target_last = challenged.cooldowns.get(&CooldownAction::Duel).copied();
        if let CooldownStatus::Remaining(rem) =
            cooldown::check(target_last, target_minutes, Utc::now())
        {
            return Ok(vec![format!(
                "**{}** has {} of cooldown remaining.",
                challenged.display_name,
                cooldown::format_remaining(rem)
            )]);
        }

        let timeout = self.config.bot.duel_consent_timeout_secs;
        match self
            .duels
            .challenge(kind, req.user_id, target, Utc::now(), timeout)
        {
            Ok(_) => {
                let flavor = match kind {
                    DuelKind::Dice => "a dice duel",
                    DuelKind::DiceHardcore => "a Hardcore Dice duel",
                };
                Ok(vec![format!(
                    "**{}** has challenged **{}** to {}!\nDo you accept **{}**'s challenge, **{}**? Reply /accept or /decline within {} seconds.",
                    initiator.display_name,
                    challenged.display_name,
                    flavor,
                    initiator.display_name,
                    challenged.display_name,
                    timeout
                )])
            }
            Err(ChallengeRejected::TargetBusy) => Ok(vec![format!(
                "**{}** already has a pending challenge.",
                challenged.display_name
            )]),
        }
    }

    fn duel_response(&mut self, req: &CommandRequest, accept: bool) -> Result<Vec<String>, GameError> {
        match self.duels.respond(req.user_id, accept, Utc::now()) {
            None => Ok(vec!["You have no pending duel challenge.".to_string()]),
            Some((_, ConsentOutcome::Ignored)) => {
                Ok(vec!["Only the challenged player can accept.".to_string()])
            }
            Some((_, ConsentOutcome::Expired)) => Ok(vec!["Duel has timed out.".to_string()]),
            Some((_, ConsentOutcome::Declined)) => Ok(vec!["Duel cancelled.".to_string()]),
            Some((challenge, ConsentOutcome::Accepted)) => self.run_duel(&challenge),
        }
    }

    fn run_duel(&mut self, challenge: &DuelChallenge) -> Result<Vec<String>, GameError> {
        let mut initiator = self.store.get(challenge.challenger)?;
        let mut challenged = self.store.get(challenge.target)?;
        let now = Utc::now();
        initiator.cooldowns.insert(CooldownAction::Duel, now);
        challenged.cooldowns.insert(CooldownAction::Duel, now);

        let mut rng = rand::thread_rng();
        let initiator_roll = duel::roll_d20(&mut rng);
        let target_roll = duel::roll_d20(&mut rng);
        let verdict = duel::resolve(initiator_roll, target_roll);

        let xp = &self.config.game.xp;
        let mut lines = vec![
            "Duel accepted.".to_string(),
            format!(
                "{}: {}\n{}: {}",
                initiator.display_name, initiator_roll, challenged.display_name, target_roll
            ),
        ];

        match (challenge.kind, verdict) {
            (DuelKind::Dice, DuelVerdict::Tie) => {
                lines.push("It's a tie!".to_string());
                for player in [&mut initiator, &mut challenged] {
                    let amount =
                        xp_award_floored(&mut rng, player.stats.level, xp.duel_tie_mean, xp.sigma);
                    let levels = apply_xp(&mut player.stats, amount);
                    lines.push(award_line(&player.display_name, amount, levels));
                }
            }
            (DuelKind::DiceHardcore, DuelVerdict::Tie) => {
                lines.push("It's a tie! No one gets anything.".to_string());
            }
            (kind, verdict) => {
                let (winner, loser) = match verdict {
                    DuelVerdict::ChallengerWins => (&mut initiator, &mut challenged),
                    DuelVerdict::TargetWins => (&mut challenged, &mut initiator),
                    DuelVerdict::Tie => unreachable!("ties handled above"),
                };
                lines.push(format!("**{}** wins!", winner.display_name));
                let amount =
                    xp_award_floored(&mut rng, winner.stats.level, xp.duel_win_mean, xp.sigma);
                let levels = apply_xp(&mut winner.stats, amount);
                lines.push(award_line(&winner.display_name, amount, levels));
                if kind == DuelKind::DiceHardcore {
                    let penalty =
                        xp_award_floored(&mut rng, loser.stats.level, xp.duel_win_mean, xp.sigma);
                    apply_xp(&mut loser.stats, -penalty);
                    lines.push(format!("{} loses {} XP.", loser.display_name, penalty));
                }
            }
        }

        for player in [&initiator, &challenged] {
            let patch = PlayerPatch {
                stats: Some(player.stats.clone()),
                cooldowns: Some(player.cooldowns.clone()),
                ..PlayerPatch::default()
            };
            self.store.patch(player.user_id, &patch)?;
        }
        Ok(lines)
    }

    fn hunt(&mut self, req: &CommandRequest) -> Result<Vec<String>, GameError> {
        let mut player = self.store.get(req.user_id)?;
        if let Some(rejection) = self.gate(&mut player, CooldownAction::Hunt) {
            return Ok(vec![rejection]);
        }
        player.cooldowns.insert(CooldownAction::Hunt, Utc::now());

        let mut rng = rand::thread_rng();
        let enemy = self
            .content
            .spawn_enemy(&mut rng)
            .cloned()
            .ok_or_else(|| GameError::InvalidContent("empty spawn table".into()))?;
        let result = combat::resolve(&mut player.stats, &enemy);

        if result.won {
            let xp = xp_award_floored(
                &mut rng,
                player.stats.level,
                self.config.game.xp.hunt_mean,
                self.config.game.xp.sigma,
            );
            let levels = apply_xp(&mut player.stats, xp);
            let loot = self.content.roll_loot(&enemy.id, &mut rng).cloned();
            if let Some(item) = &loot {
                player.add_item(&item.id, 1);
            }
            let patch = PlayerPatch {
                stats: Some(player.stats.clone()),
                inventory: Some(player.inventory.clone()),
                cooldowns: Some(player.cooldowns.clone()),
                ..PlayerPatch::default()
            };
            self.store.patch(req.user_id, &patch)?;

            let mut lines = vec![format!(
                "**{}** found and killed a {}{}.\nGained {} XP and lost {} HP. Remaining HP is {}/{} :heart:",
                player.display_name,
                enemy.emoji,
                enemy.name.to_uppercase(),
                xp,
                result.hp_lost,
                player.stats.hp,
                player.stats.maxhp
            )];
            if levels > 0 {
                lines.push(format!("You level up {} time(s)!", levels));
            }
            if let Some(item) = loot {
                lines.push(format!(
                    "Received: {}{}.",
                    item.emoji,
                    item.name.to_uppercase()
                ));
            }
            Ok(lines)
        } else {
            let patch = PlayerPatch {
                stats: Some(player.stats.clone()),
                cooldowns: Some(player.cooldowns.clone()),
                ..PlayerPatch::default()
            };
            self.store.patch(req.user_id, &patch)?;
            Ok(vec![
                format!(
                    ":x: **{}** found a {}{} and died fighting it.",
                    player.display_name,
                    enemy.emoji,
                    enemy.name.to_uppercase()
                ),
                ":regional_indicator_f:".to_string(),
            ])
        }
    }

    fn use_item(&mut self, req: &CommandRequest, raw_name: &str) -> Result<Vec<String>, GameError> {
        let mut player = self.store.get(req.user_id)?;
        let Some(item) = self.content.item_by_name(raw_name).cloned() else {
            return Ok(vec![format!(
                "You do not have {}.",
                sanitize_log(raw_name)
            )]);
        };
        if !player.inventory.contains_key(&item.id) {
            return Ok(vec![format!("You do not have {}.", item.name)]);
        }
        let ItemKind::Consumable { stat, amount } = item.kind else {
            return Ok(vec![format!(
                "You can't consume {}. Armor is for wearing.",
                item.name
            )]);
        };

        let effect = match stat {
            StatKind::Hp => match player.stats.heal(amount) {
                HealResult::FullyRestored => "Your health is fully restored.".to_string(),
                HealResult::Healed { amount } => format!(
                    "You have healed {} HP. Your HP is now {}/{}.",
                    amount, player.stats.hp, player.stats.maxhp
                ),
            },
            StatKind::San => match player.stats.restore_san(amount) {
                HealResult::FullyRestored => "Your sanity is fully restored.".to_string(),
                HealResult::Healed { amount } => format!(
                    "You have recovered {} SAN. Your SAN is now {}/{}.",
                    amount, player.stats.san, player.stats.maxsan
                ),
            },
            _ => return Ok(vec![format!("{} has no effect right now.", item.name)]),
        };
        player.remove_item(&item.id, 1);

        let patch = PlayerPatch {
            stats: Some(player.stats.clone()),
            inventory: Some(player.inventory.clone()),
            ..PlayerPatch::default()
        };
        self.store.patch(req.user_id, &patch)?;
        Ok(vec![format!(
            "You use {}{}. {}",
            item.emoji,
            item.name.to_uppercase(),
            effect
        )])
    }

    fn items(&self, category: Option<ItemCategory>) -> Result<Vec<String>, GameError> {
        let mut lines = vec!["Available Items".to_string()];
        let show_consumables = !matches!(category, Some(ItemCategory::Armor));
        let show_armor = !matches!(category, Some(ItemCategory::Consumables));
        if show_consumables {
            lines.push("Consumables".to_string());
            for item in self.content.items().filter(|i| i.is_consumable()) {
                if let ItemKind::Consumable { stat, amount } = &item.kind {
                    lines.push(format!("**{}** - {}", item.name, item.description));
                    lines.push(format!("* Value: {} tokens", item.value));
                    lines.push(format!("* +{} {}", amount, stat.label()));
                }
            }
        }
        if show_armor {
            lines.push("Armour".to_string());
            for item in self.content.items().filter(|i| !i.is_consumable()) {
                if let ItemKind::Armor {
                    slot,
                    defense,
                    bonuses,
                } = &item.kind
                {
                    lines.push(format!(
                        "**{}** - {}. {}",
                        item.name,
                        slot.label(),
                        item.description
                    ));
                    lines.push(format!("* DEF: +{}", defense));
                    if !bonuses.is_empty() {
                        let grants: Vec<String> = bonuses
                            .iter()
                            .map(|(stat, amount)| format!("{}: +{}", stat.label(), amount))
                            .collect();
                        lines.push(format!("* Also grants: {}", grants.join(", ")));
                    }
                    lines.push(format!("* Value: {} tokens", item.value));
                }
            }
        }
        Ok(lines)
    }

    fn help(&self) -> Vec<String> {
        vec![
            format!("{} Commands", self.config.bot.name),
            "Getting Started".to_string(),
            "* /start: Register with the bot to play. Optional class=<id>.".to_string(),
            "Basic Commands".to_string(),
            "* /profile: Display Player Profile with abridged Stats.".to_string(),
            "  - user: (Optional) See another Profile.".to_string(),
            "* /stats: Display full Player stats.".to_string(),
            "* /cooldowns: Display all Command Cooldowns.".to_string(),
            "* /worship: Worship our Lord GhostKai to win his Favor.".to_string(),
            "  - type: dance: Perform the Kitty dance.".to_string(),
            "* /duel: Challenge another player to a duel.".to_string(),
            "  - type: dice: Player who rolls the higher number on a D20 wins.".to_string(),
            "  - type: dice hardcore: No XP on ties and the loser loses XP too.".to_string(),
            "  - target: Another player.".to_string(),
            "* /accept, /decline: Answer a duel challenge.".to_string(),
            "* /hunt: Fight a Mob.".to_string(),
            "* /use item=<name>: Use an item from your inventory.".to_string(),
            "* /items: Shows all available Items. Optional type filter.".to_string(),
            "* /players: List registered players.".to_string(),
            "Admin Only".to_string(),
            "* /yeet user=<user>: Delete a Player record.".to_string(),
            "* /reload: Re-read the content seed.".to_string(),
            "* /sync: Report the registered command count.".to_string(),
        ]
    }

    fn players(&self) -> Result<Vec<String>, GameError> {
        let records = self.store.list()?;
        let mut lines = vec![format!("{} registered player(s):", records.len())];
        for player in &records {
            lines.push(format!(
                "* **{}** — {} (Lv {})",
                player.display_name, player.title, player.stats.level
            ));
        }
        Ok(lines)
    }

    fn yeet(&mut self, req: &CommandRequest, user: UserId) -> Result<Vec<String>, GameError> {
        if !self.is_admin(req.user_id) {
            return Ok(vec![MISSING_PERMISSIONS.to_string()]);
        }
        match self.store.delete(user) {
            Ok(()) => Ok(vec![format!("{} has been deleted.", user)]),
            Err(GameError::NotFound(_)) => Ok(vec!["Player does not exist.".to_string()]),
            Err(e) => Err(e),
        }
    }

    fn reload(&mut self, req: &CommandRequest) -> Result<Vec<String>, GameError> {
        if !self.is_admin(req.user_id) {
            return Ok(vec![MISSING_PERMISSIONS.to_string()]);
        }
        match &self.config.game.content_seed {
            Some(path) => {
                let path = path.clone();
                self.content = GameContent::load(&path)?;
                Ok(vec![format!("Reloaded content seed from {}.", path)])
            }
            None => {
                self.content = GameContent::builtin();
                Ok(vec!["Reloaded built-in content.".to_string()])
            }
        }
    }

    fn sync(&self, req: &CommandRequest) -> Result<Vec<String>, GameError> {
        if !self.is_admin(req.user_id) {
            return Ok(vec![MISSING_PERMISSIONS.to_string()]);
        }
        let scope = match self.config.bot.guild_id {
            Some(guild) => format!("to guild {}", guild),
            None => "globally".to_string(),
        };
        Ok(vec![format!(
            "Synced {} commands {}.",
            commands::REGISTERED_COMMANDS.len(),
            scope
        )])
    }
}

fn award_line(name: &str, amount: i64, levels: u32) -> String {
    if levels > 0 {
        format!("{} gains {} XP and levels up {} time(s)!", name, amount, levels)
    } else {
        format!("{} gains {} XP.", name, amount)
    }
}
