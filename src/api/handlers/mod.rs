// HTTP handlers translating requests into service calls

pub mod counters;
pub mod teams;

/// Liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}
