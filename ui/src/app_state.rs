use std::ops::Deref;
use std::sync::Arc;

use trending::prefs::DashboardPrefs;

/// Settings fixed for the lifetime of the app.
#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: DashboardPrefs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: DashboardPrefs) -> Self {
        Self(Arc::new(AppStateData { prefs }))
    }
}
