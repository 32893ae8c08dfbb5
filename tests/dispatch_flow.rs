//! End-to-end command flows through the dispatcher, backed by a throwaway
//! store. Cooldowns run with the all-zero testing override so flows are not
//! gated; cooldown timing itself is covered by the gate's own tests.

use tempfile::TempDir;

use planephobia::bot::{CommandRequest, Dispatcher};
use planephobia::config::Config;
use planephobia::game::storage::PlayerStoreBuilder;
use planephobia::game::types::{CooldownAction, PlayerPatch};
use planephobia::game::GameContent;

const ADMIN: u64 = 42;

fn test_config() -> Config {
    let mut config = Config::default();
    config.game.cooldown_minutes.worship = 0;
    config.game.cooldown_minutes.duel = 0;
    config.game.cooldown_minutes.hunt = 0;
    config.bot.admins.push(ADMIN);
    config
}

fn dispatcher(dir: &TempDir) -> Dispatcher {
    let store = PlayerStoreBuilder::new(dir.path()).open().expect("store");
    Dispatcher::new(store, GameContent::builtin(), test_config())
}

fn request(user_id: u64, name: &str, line: &str) -> CommandRequest {
    CommandRequest {
        user_id,
        display_name: name.to_string(),
        line: line.to_string(),
    }
}

async fn send(d: &mut Dispatcher, user_id: u64, name: &str, line: &str) -> String {
    d.handle(&request(user_id, name, line)).await.join("\n")
}

#[tokio::test]
async fn register_then_profile() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);

    let reply = send(&mut d, 1, "alice", "/start").await;
    assert!(reply.contains("Welcome"), "reply: {reply}");
    assert!(reply.contains("Test Class A"));

    let again = send(&mut d, 1, "alice", "/start").await;
    assert!(again.contains("already registered"));

    let profile = send(&mut d, 1, "alice", "/profile").await;
    assert!(profile.contains("**Level**: 1"));
    assert!(profile.contains("**Tokens**: 100"));
    assert!(profile.contains("**Favour**: 100"));

    let stats = send(&mut d, 1, "alice", "/stats").await;
    assert!(stats.contains("**Health**: 10/10"));
}

#[tokio::test]
async fn start_with_explicit_class() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let reply = send(&mut d, 2, "bob", "/start class=test_b").await;
    assert!(reply.contains("Test Class B"), "reply: {reply}");
    let record = d.store().get(2).unwrap();
    assert_eq!(record.stats.maxhp, 15);
    assert_eq!(record.stats.atk, 5);
}

#[tokio::test]
async fn unregistered_user_gets_warning() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    for line in ["/stats", "/cooldowns", "/worship", "/hunt"] {
        let reply = send(&mut d, 9, "ghost", line).await;
        assert!(reply.contains("not registered"), "{line}: {reply}");
    }
}

#[tokio::test]
async fn worship_moves_favor_and_respects_xp_invariant() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    send(&mut d, 1, "alice", "/start").await;

    let reply = send(&mut d, 1, "alice", "/worship type=dance").await;
    assert!(reply.contains("Kitty Dance"), "reply: {reply}");
    assert!(reply.contains("XP"));

    let record = d.store().get(1).unwrap();
    // every dance outcome moves favor by a nonzero amount
    assert_ne!(record.favor, 100);
    assert!(record.stats.currentxp < record.stats.requiredxp);
    assert!(record.cooldowns.contains_key(&CooldownAction::Worship));
}

#[tokio::test]
async fn hunt_settles_into_valid_state() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    send(&mut d, 1, "alice", "/start").await;

    let reply = send(&mut d, 1, "alice", "/hunt").await;
    assert!(
        reply.contains("found and killed") || reply.contains("died fighting"),
        "reply: {reply}"
    );

    let record = d.store().get(1).unwrap();
    assert!(record.stats.hp >= 1, "hp={}", record.stats.hp);
    assert!(record.stats.hp <= record.stats.maxhp);
    assert!(record.stats.currentxp < record.stats.requiredxp);
    assert!(record.cooldowns.contains_key(&CooldownAction::Hunt));
}

#[tokio::test]
async fn cooldowns_listing_reports_remaining_time() {
    let dir = TempDir::new().unwrap();
    let store = PlayerStoreBuilder::new(dir.path()).open().expect("store");
    let mut config = test_config();
    config.game.cooldown_minutes.hunt = 5;
    let mut d = Dispatcher::new(store, GameContent::builtin(), config);
    send(&mut d, 1, "alice", "/start").await;
    send(&mut d, 1, "alice", "/hunt").await;

    let gated = send(&mut d, 1, "alice", "/hunt").await;
    assert!(gated.contains("Try again in 0:0"), "gated: {gated}");

    let listing = send(&mut d, 1, "alice", "/cooldowns").await;
    assert!(listing.contains("worship: Ready"), "listing: {listing}");
    assert!(listing.contains("duel: Ready"));
    assert!(listing.contains("hunt: 0:0"), "listing: {listing}");
}

#[tokio::test]
async fn use_item_heals_and_consumes() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    send(&mut d, 1, "alice", "/start").await;

    let mut record = d.store().get(1).unwrap();
    record.stats.hp = 2;
    record.add_item("rumshot", 1);
    let patch = PlayerPatch {
        stats: Some(record.stats.clone()),
        inventory: Some(record.inventory.clone()),
        ..PlayerPatch::default()
    };
    d.store().patch(1, &patch).unwrap();

    let reply = send(&mut d, 1, "alice", "/use item=Rum Shot").await;
    assert!(reply.contains("You use"), "reply: {reply}");
    assert!(reply.contains("healed 5 HP"));

    let record = d.store().get(1).unwrap();
    assert_eq!(record.stats.hp, 7);
    assert!(record.inventory.is_empty());

    let missing = send(&mut d, 1, "alice", "/use item=Rum Shot").await;
    assert!(missing.contains("do not have"));
}

#[tokio::test]
async fn items_listing_covers_both_categories() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let all = send(&mut d, 1, "alice", "/items").await;
    assert!(all.contains("Rum Shot"));
    assert!(all.contains("Cat Ears"));

    let armor = send(&mut d, 1, "alice", "/items type=armor").await;
    assert!(armor.contains("Cat Ears"));
    assert!(!armor.contains("Rum Shot"));
}

#[tokio::test]
async fn players_lists_registered_records() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    send(&mut d, 1, "alice", "/start").await;
    send(&mut d, 2, "bob", "/start").await;
    let reply = send(&mut d, 1, "alice", "/players").await;
    assert!(reply.contains("2 registered player(s)"));
    assert!(reply.contains("alice"));
    assert!(reply.contains("bob"));
}

#[tokio::test]
async fn admin_commands_are_gated() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    send(&mut d, 1, "alice", "/start").await;

    let denied = send(&mut d, 1, "alice", "/yeet user=1").await;
    assert!(denied.contains("missing required permissions"));

    let deleted = send(&mut d, ADMIN, "admin", "/yeet user=1").await;
    assert!(deleted.contains("has been deleted"));
    assert!(d.store().get(1).is_err());

    let nobody = send(&mut d, ADMIN, "admin", "/yeet user=777").await;
    assert!(nobody.contains("does not exist"));

    let synced = send(&mut d, ADMIN, "admin", "/sync").await;
    assert!(synced.contains("Synced 16 commands"));

    let reloaded = send(&mut d, ADMIN, "admin", "/reload").await;
    assert!(reloaded.contains("Reloaded built-in content"));
}

#[tokio::test]
async fn duel_requires_consent_then_resolves() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    send(&mut d, 1, "alice", "/start").await;
    send(&mut d, 2, "bob", "/start").await;

    let prompt = send(&mut d, 1, "alice", "/duel type=dice target=<@2>").await;
    assert!(prompt.contains("challenged"), "prompt: {prompt}");
    assert!(prompt.contains("/accept"));

    // challenger cannot accept their own challenge
    let nope = send(&mut d, 1, "alice", "/accept").await;
    assert!(nope.contains("Only the challenged player"));

    let result = send(&mut d, 2, "bob", "/accept").await;
    assert!(
        result.contains("wins!") || result.contains("tie"),
        "result: {result}"
    );

    let alice = d.store().get(1).unwrap();
    let bob = d.store().get(2).unwrap();
    assert!(alice.cooldowns.contains_key(&CooldownAction::Duel));
    assert!(bob.cooldowns.contains_key(&CooldownAction::Duel));
}

#[tokio::test]
async fn duel_decline_and_edge_cases() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    send(&mut d, 1, "alice", "/start").await;
    send(&mut d, 2, "bob", "/start").await;

    let own = send(&mut d, 1, "alice", "/duel type=dice target=1").await;
    assert!(own.contains("cannot challenge yourself"));

    let missing = send(&mut d, 1, "alice", "/duel type=dice target=555").await;
    assert!(missing.contains("doesn't exist or isn't registered"));

    send(&mut d, 1, "alice", "/duel type=dice hardcore target=2").await;
    let declined = send(&mut d, 2, "bob", "/decline").await;
    assert!(declined.contains("Duel cancelled"));

    // nothing left to answer
    let empty = send(&mut d, 2, "bob", "/accept").await;
    assert!(empty.contains("no pending duel"));

    let alice = d.store().get(1).unwrap();
    assert!(
        !alice.cooldowns.contains_key(&CooldownAction::Duel),
        "declined duel must not start cooldowns"
    );
}

#[tokio::test]
async fn unknown_commands_point_at_help() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let reply = send(&mut d, 1, "alice", "/dance").await;
    assert!(reply.contains("Unknown command"));
    let help = send(&mut d, 1, "alice", "/help").await;
    assert!(help.contains("/worship"));
    assert!(help.contains("/duel"));
}
