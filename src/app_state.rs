use std::sync::Arc;

use crate::fetcher::GrandPrizeFetcher;

pub struct AppState {
    pub fetcher: Arc<GrandPrizeFetcher>,
}
