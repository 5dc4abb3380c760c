use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Simple in-memory rate limiter, keyed by caller-chosen strings
/// (e.g. "login:<ip>").
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true if the request is allowed, false once `max_requests`
    /// have been seen for `key` within `window`.
    pub fn check_rate_limit(&self, key: &str, max_requests: usize, window: Duration) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = requests.entry(key.to_string()).or_default();
        entry.retain(|&time| {
            now.duration_since(time).unwrap_or(Duration::from_secs(0)) < window
        });

        if entry.len() >= max_requests {
            return false;
        }

        entry.push(now);

        // Drop empty entries so the map cannot grow without bound.
        requests.retain(|_, times| !times.is_empty());

        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
