use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Directory holding the persisted identity record.
    pub state_dir: PathBuf,
    /// Upper bound on the startup read of the persisted record, in ms.
    pub restore_timeout_ms: u64,
    /// Simulated identity-resolution latency for login/register, in ms.
    pub login_latency_ms: u64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            state_dir: env::var("CAMPUSGATE_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("storage/state")),
            restore_timeout_ms: env::var("CAMPUSGATE_RESTORE_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2000), // 2 seconds
            login_latency_ms: env::var("CAMPUSGATE_LOGIN_LATENCY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1000), // mirrors the mock backend's 1 second
        }
    }

    /// Instant-settling configuration for tests.
    pub fn for_tests(state_dir: PathBuf) -> Self {
        Self {
            state_dir,
            restore_timeout_ms: 2000,
            login_latency_ms: 0,
        }
    }

    pub fn restore_timeout(&self) -> Duration {
        Duration::from_millis(self.restore_timeout_ms)
    }

    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tests_has_no_latency() {
        let config = SessionConfig::for_tests(PathBuf::from("/tmp/state"));
        assert_eq!(config.login_latency(), Duration::ZERO);
        assert!(config.restore_timeout() > Duration::ZERO);
    }
}
