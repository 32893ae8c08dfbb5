//! Per-action cooldown gate.
//!
//! Each gated action stores the UTC timestamp of its last use on the player
//! record; a missing timestamp means the action is ready. The check is
//! boundary-inclusive: a timestamp exactly `duration` old reports ready.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::game::types::CooldownAction;

/// Configured cooldown durations in minutes. `0` disables the gate for that
/// action (the testing override from the deployment history).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CooldownMinutes {
    #[serde(default = "default_worship_minutes")]
    pub worship: u64,
    #[serde(default = "default_duel_minutes")]
    pub duel: u64,
    #[serde(default = "default_hunt_minutes")]
    pub hunt: u64,
}

fn default_worship_minutes() -> u64 {
    3
}

fn default_duel_minutes() -> u64 {
    10
}

fn default_hunt_minutes() -> u64 {
    1
}

impl Default for CooldownMinutes {
    fn default() -> Self {
        Self {
            worship: default_worship_minutes(),
            duel: default_duel_minutes(),
            hunt: default_hunt_minutes(),
        }
    }
}

impl CooldownMinutes {
    pub fn for_action(&self, action: CooldownAction) -> u64 {
        match action {
            CooldownAction::Worship => self.worship,
            CooldownAction::Duel => self.duel,
            CooldownAction::Hunt => self.hunt,
        }
    }
}

/// Result of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    Ready,
    Remaining(Duration),
}

impl CooldownStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, CooldownStatus::Ready)
    }
}

/// Check one action against its configured duration.
pub fn check(
    last_used: Option<DateTime<Utc>>,
    minutes: u64,
    now: DateTime<Utc>,
) -> CooldownStatus {
    let Some(stamp) = last_used else {
        return CooldownStatus::Ready;
    };
    let duration = Duration::seconds((minutes * 60) as i64);
    let elapsed = now.signed_duration_since(stamp);
    if elapsed >= duration {
        CooldownStatus::Ready
    } else {
        CooldownStatus::Remaining(duration - elapsed)
    }
}

/// Render a remaining duration as `H:MM:SS`, flooring to whole seconds.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_timestamp_is_ready() {
        assert!(check(None, 10, Utc::now()).is_ready());
    }

    #[test]
    fn boundary_is_inclusive() {
        let now = Utc::now();
        let stamp = now - Duration::seconds(10 * 60);
        assert!(check(Some(stamp), 10, now).is_ready());
    }

    #[test]
    fn one_second_short_reports_remaining() {
        let now = Utc::now();
        let stamp = now - Duration::seconds(10 * 60 - 1);
        match check(Some(stamp), 10, now) {
            CooldownStatus::Remaining(rem) => assert_eq!(rem.num_seconds(), 1),
            CooldownStatus::Ready => panic!("expected remaining"),
        }
    }

    #[test]
    fn zero_minutes_disables_gate() {
        let now = Utc::now();
        assert!(check(Some(now), 0, now).is_ready());
    }

    #[test]
    fn formats_floored_hms() {
        assert_eq!(format_remaining(Duration::seconds(1)), "0:00:01");
        assert_eq!(format_remaining(Duration::seconds(61)), "0:01:01");
        assert_eq!(format_remaining(Duration::seconds(3_725)), "1:02:05");
        assert_eq!(format_remaining(Duration::milliseconds(1_999)), "0:00:01");
    }
}
