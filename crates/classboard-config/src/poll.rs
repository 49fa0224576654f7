use std::env;
use std::time::Duration;

const DEFAULT_ANNOUNCEMENTS_SECS: u64 = 30;
const DEFAULT_SCHEDULE_SECS: u64 = 60;

/// Refresh cadences for the per-view pollers.
#[derive(Clone, Copy, Debug)]
pub struct PollConfig {
    pub announcements: Duration,
    pub schedule: Duration,
}

impl PollConfig {
    pub fn from_env() -> Self {
        Self {
            announcements: Duration::from_secs(parse_secs(
                env::var("CLASSBOARD_ANNOUNCE_POLL_SECS").ok(),
                DEFAULT_ANNOUNCEMENTS_SECS,
            )),
            schedule: Duration::from_secs(parse_secs(
                env::var("CLASSBOARD_SCHEDULE_POLL_SECS").ok(),
                DEFAULT_SCHEDULE_SECS,
            )),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            announcements: Duration::from_secs(DEFAULT_ANNOUNCEMENTS_SECS),
            schedule: Duration::from_secs(DEFAULT_SCHEDULE_SECS),
        }
    }
}

// Zero would spin the poller; treat it like any other unusable value.
fn parse_secs(value: Option<String>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_secs_accepts_positive_integers() {
        assert_eq!(parse_secs(Some("45".into()), 30), 45);
        assert_eq!(parse_secs(Some(" 10 ".into()), 30), 10);
    }

    #[test]
    fn test_parse_secs_falls_back_on_garbage() {
        assert_eq!(parse_secs(Some("fast".into()), 30), 30);
        assert_eq!(parse_secs(Some("0".into()), 30), 30);
        assert_eq!(parse_secs(Some("-5".into()), 30), 30);
        assert_eq!(parse_secs(None, 60), 60);
    }
}
