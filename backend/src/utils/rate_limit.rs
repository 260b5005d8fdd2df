use std::time::{Duration, Instant};

use axum::http::HeaderMap;
use dashmap::DashMap;

/// Storage seam for request limiting, so the in-process map can be swapped
/// for a shared store when several instances run behind a load balancer.
pub trait RateLimitStore: Send + Sync {
    /// Records a request for `key`. Returns `true` when the request must be rejected.
    fn is_rate_limited(&self, key: &str) -> bool;

    /// Drops windows that have already expired. Returns how many were removed.
    fn evict_expired(&self) -> usize;

    /// Number of clients currently holding a window.
    fn tracked_clients(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window counter per client key.
///
/// The first request opens a window; up to `max_requests` are allowed inside
/// it. Rejected requests do not extend or refill the window.
pub struct FixedWindowLimiter {
    windows: DashMap<String, Window>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window,
        }
    }

    pub fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });
        let window = entry.value_mut();

        if window.count == 0 || now.saturating_duration_since(window.started_at) > self.window {
            *window = Window { started_at: now, count: 1 };
            return false;
        }
        if window.count >= self.max_requests {
            return true;
        }
        window.count += 1;
        false
    }

    pub fn evict_expired_at(&self, now: Instant) -> usize {
        let before = self.windows.len();
        self.windows
            .retain(|_, w| now.saturating_duration_since(w.started_at) <= self.window);
        before - self.windows.len()
    }
}

impl RateLimitStore for FixedWindowLimiter {
    fn is_rate_limited(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn evict_expired(&self) -> usize {
        self.evict_expired_at(Instant::now())
    }

    fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

/// Client identity for limiting: first `x-forwarded-for` hop, then `x-real-ip`.
pub fn client_ip(headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn sixth_request_in_window_is_rejected() {
        let limiter = FixedWindowLimiter::new(5, Duration::from_secs(60));
        let start = Instant::now();
        for i in 0..5 {
            assert!(!limiter.check_at("1.2.3.4", start + Duration::from_secs(i)), "request {i}");
        }
        assert!(limiter.check_at("1.2.3.4", start + Duration::from_secs(10)));
        // other clients are unaffected
        assert!(!limiter.check_at("5.6.7.8", start + Duration::from_secs(10)));
    }

    #[test]
    fn window_resets_after_expiry() {
        let limiter = FixedWindowLimiter::new(5, Duration::from_secs(60));
        let start = Instant::now();
        for _ in 0..6 {
            limiter.check_at("ip", start);
        }
        assert!(limiter.check_at("ip", start + Duration::from_secs(60)));
        assert!(!limiter.check_at("ip", start + Duration::from_secs(61)));
        assert!(!limiter.check_at("ip", start + Duration::from_secs(62)));
    }

    #[test]
    fn eviction_drops_only_expired_windows() {
        let limiter = FixedWindowLimiter::new(5, Duration::from_secs(60));
        let start = Instant::now();
        limiter.check_at("old", start);
        limiter.check_at("fresh", start + Duration::from_secs(50));
        assert_eq!(limiter.tracked_clients(), 2);

        let removed = limiter.evict_expired_at(start + Duration::from_secs(90));
        assert_eq!(removed, 1);
        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn client_ip_prefers_forwarded_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_ip(&headers), "unknown");

        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers), "10.0.0.2");

        headers.insert("x-forwarded-for", HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"));
        assert_eq!(client_ip(&headers), "203.0.113.7");
    }
}
