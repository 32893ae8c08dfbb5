//! Slash-command surface and parsing.
//!
//! The gateway hands us the command line as text (`/duel type=dice
//! target=<@123>`); this module turns it into a typed [`Command`] for the
//! dispatcher. Arguments are `key=value` pairs, with mentions (`<@123>`)
//! and bare ids both accepted wherever a user is expected.

use crate::game::duel::DuelKind;
use crate::game::types::UserId;

/// Worship activities. Dance is the only one on offer so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorshipKind {
    Dance,
}

/// Item catalog filters for the items listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Consumables,
    Armor,
}

/// One parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { class: Option<String> },
    Profile { user: Option<UserId> },
    Stats,
    Cooldowns,
    Worship { kind: WorshipKind },
    Duel { kind: DuelKind, target: UserId },
    Accept,
    Decline,
    Hunt,
    Use { item: String },
    Items { category: Option<ItemCategory> },
    Help,
    Players,
    Yeet { user: UserId },
    Reload,
    Sync,
    Unknown(String),
}

/// Names accepted by [`parse`], for the admin sync report.
pub const REGISTERED_COMMANDS: [&str; 16] = [
    "start", "profile", "stats", "cooldowns", "worship", "duel", "accept", "decline", "hunt",
    "use", "items", "help", "players", "yeet", "reload", "sync",
];

/// Pull a user id out of `<@123>`, `<@!123>` or bare digits.
fn parse_user(token: &str) -> Option<UserId> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn value_of<'a>(tokens: &[&'a str], key: &str) -> Option<&'a str> {
    tokens.iter().find_map(|t| {
        let (k, v) = t.split_once('=')?;
        (k.eq_ignore_ascii_case(key)).then_some(v)
    })
}

/// First token that looks like a user, preferring explicit keys.
fn find_user(tokens: &[&str], keys: &[&str]) -> Option<UserId> {
    for key in keys {
        if let Some(v) = value_of(tokens, key) {
            return parse_user(v);
        }
    }
    tokens
        .iter()
        .filter(|t| !t.contains('='))
        .find_map(|t| parse_user(t))
}

pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    let Some(stripped) = trimmed.strip_prefix('/') else {
        return Command::Unknown(trimmed.to_string());
    };
    let mut parts = stripped.splitn(2, char::is_whitespace);
    let Some(name) = parts.next().filter(|n| !n.is_empty()) else {
        return Command::Unknown(trimmed.to_string());
    };
    let remainder = parts.next().unwrap_or("").trim();
    let tokens: Vec<&str> = remainder.split_whitespace().collect();

    match name.to_ascii_lowercase().as_str() {
        "start" => {
            let class = value_of(&tokens, "class")
                .or_else(|| tokens.first().filter(|t| !t.contains('=')).copied())
                .map(|s| s.to_ascii_lowercase());
            Command::Start { class }
        }
        "profile" => Command::Profile {
            user: find_user(&tokens, &["user"]),
        },
        "stats" => Command::Stats,
        "cooldowns" => Command::Cooldowns,
        "worship" => match value_of(&tokens, "type").unwrap_or("dance") {
            "dance" => Command::Worship {
                kind: WorshipKind::Dance,
            },
            _ => Command::Unknown(trimmed.to_string()),
        },
        "duel" => {
            let hardcore = tokens
                .iter()
                .any(|t| t.trim_matches('"').eq_ignore_ascii_case("hardcore"));
            match find_user(&tokens, &["target", "user"]) {
                Some(target) => Command::Duel {
                    kind: if hardcore {
                        DuelKind::DiceHardcore
                    } else {
                        DuelKind::Dice
                    },
                    target,
                },
                None => Command::Unknown(trimmed.to_string()),
            }
        }
        "accept" | "yes" => Command::Accept,
        "decline" | "no" => Command::Decline,
        "hunt" => Command::Hunt,
        "use" => {
            let item = remainder
                .strip_prefix("item=")
                .unwrap_or(remainder)
                .trim()
                .trim_matches('"');
            if item.is_empty() {
                Command::Unknown(trimmed.to_string())
            } else {
                Command::Use {
                    item: item.to_string(),
                }
            }
        }
        "items" => {
            let category = value_of(&tokens, "type")
                .or_else(|| tokens.first().filter(|t| !t.contains('=')).copied());
            match category.map(|c| c.to_ascii_lowercase()) {
                None => Command::Items { category: None },
                Some(c) if c == "consumables" => Command::Items {
                    category: Some(ItemCategory::Consumables),
                },
                Some(c) if c == "armor" || c == "armour" => Command::Items {
                    category: Some(ItemCategory::Armor),
                },
                Some(_) => Command::Unknown(trimmed.to_string()),
            }
        }
        "help" => Command::Help,
        "players" => Command::Players,
        "yeet" => match find_user(&tokens, &["user"]) {
            Some(user) => Command::Yeet { user },
            None => Command::Unknown(trimmed.to_string()),
        },
        "reload" => Command::Reload,
        "sync" => Command::Sync,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse("/stats"), Command::Stats);
        assert_eq!(parse("/hunt"), Command::Hunt);
        assert_eq!(parse("  /help "), Command::Help);
    }

    #[test]
    fn rejects_non_slash_input() {
        assert!(matches!(parse("stats"), Command::Unknown(_)));
    }

    #[test]
    fn start_takes_optional_class() {
        assert_eq!(parse("/start"), Command::Start { class: None });
        assert_eq!(
            parse("/start class=test_b"),
            Command::Start {
                class: Some("test_b".into())
            }
        );
    }

    #[test]
    fn profile_accepts_mention_and_bare_id() {
        assert_eq!(
            parse("/profile user=<@123456>"),
            Command::Profile { user: Some(123456) }
        );
        assert_eq!(parse("/profile 77"), Command::Profile { user: Some(77) });
        assert_eq!(parse("/profile"), Command::Profile { user: None });
    }

    #[test]
    fn duel_variants() {
        assert_eq!(
            parse("/duel type=dice target=<@9>"),
            Command::Duel {
                kind: DuelKind::Dice,
                target: 9
            }
        );
        assert_eq!(
            parse("/duel type=dice hardcore target=9"),
            Command::Duel {
                kind: DuelKind::DiceHardcore,
                target: 9
            }
        );
        assert!(matches!(parse("/duel type=dice"), Command::Unknown(_)));
    }

    #[test]
    fn use_keeps_spaces_in_item_names() {
        assert_eq!(
            parse("/use item=Rum Shot"),
            Command::Use {
                item: "Rum Shot".into()
            }
        );
        assert_eq!(
            parse("/use Cake Crumbs"),
            Command::Use {
                item: "Cake Crumbs".into()
            }
        );
    }

    #[test]
    fn items_category_filter() {
        assert_eq!(parse("/items"), Command::Items { category: None });
        assert_eq!(
            parse("/items type=armor"),
            Command::Items {
                category: Some(ItemCategory::Armor)
            }
        );
        assert_eq!(
            parse("/items consumables"),
            Command::Items {
                category: Some(ItemCategory::Consumables)
            }
        );
    }

    #[test]
    fn registered_command_count_matches_surface() {
        assert_eq!(REGISTERED_COMMANDS.len(), 16);
    }
}
