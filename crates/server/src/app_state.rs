use shared::domain::City;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: &'static [City],
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: server_api::list_cities(),
        }
    }
}
