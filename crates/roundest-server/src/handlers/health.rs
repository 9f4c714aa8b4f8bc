//! Liveness probe — no store access.

pub async fn handler() -> &'static str { "ok" }
