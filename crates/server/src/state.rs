use crate::config::ListingMode;
use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub listing_mode: ListingMode,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, listing_mode: ListingMode) -> Self {
        AppState {
            store,
            listing_mode,
        }
    }
}
