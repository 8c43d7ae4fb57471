use crate::config::Config;

/// Shared handler state, built once at cold start and borrowed by every
/// invocation.
pub struct AppState<S, R> {
    pub store: S,
    pub renderer: R,
    pub config: Config,
}
