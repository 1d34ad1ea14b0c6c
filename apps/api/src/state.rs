use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// The parsing and analysis cores are stateless, so this only carries config.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
