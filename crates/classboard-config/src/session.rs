use std::env;
use std::path::PathBuf;

/// Where durable client state (the persisted session) lives.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub state_dir: PathBuf,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let state_dir = env::var("CLASSBOARD_STATE_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_state_dir);

        Self { state_dir }
    }

    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }
}

fn default_state_dir() -> PathBuf {
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home).join(".classboard"),
        _ => PathBuf::from(".classboard"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_state_dir() {
        let config = SessionConfig::new("/tmp/classboard-test");
        assert_eq!(config.state_dir, PathBuf::from("/tmp/classboard-test"));
    }
}
