use std::sync::Arc;

use crate::generation::generator::JobDescriptionGenerator;
use crate::search::client::CandidateSource;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no mutable state; every collaborator is constructed in `main` and passed in.
#[derive(Clone)]
pub struct AppState {
    pub generator: JobDescriptionGenerator,
    /// Pluggable candidate source. Default: SalesNavigatorClient.
    pub candidates: Arc<dyn CandidateSource>,
}
