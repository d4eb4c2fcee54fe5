use prometheus::{IntCounter, IntGauge, Registry};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref ACTIVE_SESSIONS: IntGauge =
        IntGauge::new("unscramble_active_sessions", "Active ongoing sessions").expect("metric cannot be created");
    pub static ref FINISHED_GAMES: IntCounter =
        IntCounter::new("unscramble_finished_games", "Games played until the final score")
            .expect("metric cannot be created");
}

/// Safe to call more than once, collectors that are already registered are skipped.
pub fn register_metrics() {
    if let Err(error) = REGISTRY.register(Box::new(ACTIVE_SESSIONS.clone())) {
        log::warn!("Collector ACTIVE_SESSIONS not registered. Error: '{error}'.");
    }

    if let Err(error) = REGISTRY.register(Box::new(FINISHED_GAMES.clone())) {
        log::warn!("Collector FINISHED_GAMES not registered. Error: '{error}'.");
    }
}
