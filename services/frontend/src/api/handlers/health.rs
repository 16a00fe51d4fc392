//! Health probe for the front-end server. Deployments poll this to confirm
//! the bundles are being served and to read the active deployment mode.

use crate::GIT_COMMIT_HASH;
use axum::{
    extract::Extension,
    http::{header, HeaderMap},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::{SystemTime, UNIX_EPOCH};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Health {
    pub ok: bool,
    pub mode: String,
    /// Unix epoch milliseconds, strictly increasing across calls.
    pub ts: u64,
    pub service: String,
}

/// Per-process state for the health route: the deployment mode and the
/// monotonic timestamp source.
#[derive(Clone)]
pub struct HealthState {
    mode: String,
    ticker: HealthTicker,
}

impl HealthState {
    pub fn new(mode: &str) -> Self {
        Self {
            mode: mode.to_string(),
            ticker: HealthTicker::default(),
        }
    }
}

/// Hands out wall-clock timestamps that never repeat. Two probes inside the
/// same millisecond would otherwise read the same value.
#[derive(Clone, Default)]
pub struct HealthTicker {
    last: Arc<AtomicU64>,
}

impl HealthTicker {
    pub fn next_timestamp(&self) -> u64 {
        let now = unix_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(0);
        now.max(previous + 1)
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}

#[utoipa::path(
    get,
    path = "/api/_health",
    responses(
        (status = 200, description = "Front-end server is healthy", body = Health)
    ),
    tag = "health",
)]
/// Report liveness, the deployment mode and a strictly increasing timestamp.
pub async fn health(Extension(state): Extension<HealthState>) -> impl IntoResponse {
    let health = Health {
        ok: true,
        mode: state.mode.clone(),
        ts: state.ticker.next_timestamp(),
        service: env!("CARGO_PKG_NAME").to_string(),
    };

    let short_hash = if GIT_COMMIT_HASH.len() > 7 {
        &GIT_COMMIT_HASH[0..7]
    } else {
        ""
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-cache"),
    );
    headers.insert(
        "X-App",
        format!(
            "{}:{}:{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            short_hash
        )
        .parse()
        .unwrap(),
    );

    (headers, Json(health))
}

#[cfg(test)]
mod tests {
    use super::{Health, HealthTicker};

    #[test]
    fn ticker_is_strictly_increasing() {
        let ticker = HealthTicker::default();
        let mut last = 0;
        for _ in 0..1_000 {
            let ts = ticker.next_timestamp();
            assert!(ts > last, "expected {ts} > {last}");
            last = ts;
        }
    }

    #[test]
    fn ticker_tracks_the_wall_clock() {
        let ticker = HealthTicker::default();
        let ts = ticker.next_timestamp();
        // Sanity bound: after 2020, before 2100.
        assert!(ts > 1_577_836_800_000);
        assert!(ts < 4_102_444_800_000);
    }

    #[test]
    fn payload_serializes_the_wire_shape() {
        let health = Health {
            ok: true,
            mode: "local".to_string(),
            ts: 1_754_500_000_000,
            service: "albergue-frontend".to_string(),
        };

        let json = serde_json::to_string(&health).expect("Failed to serialize");
        assert!(json.contains("\"ok\":true"));
        assert!(json.contains("\"mode\":\"local\""));
        assert!(json.contains("\"service\":\"albergue-frontend\""));

        let back: Health = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back.ts, 1_754_500_000_000);
    }
}
