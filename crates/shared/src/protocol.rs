use serde::{Deserialize, Serialize};

use crate::domain::City;

/// Field name shared by the hidden inputs and the JSON write path.
pub const SELECTED_CITIES_FIELD: &str = "selectedCities";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub cities: Vec<City>,
}

/// Body of a submission. Repeated `selectedCities` form fields decode into
/// the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitSelectionRequest {
    #[serde(rename = "selectedCities", default)]
    pub selected_cities: Vec<City>,
}

/// Body of a toggle: the page's current selection plus the city picked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleCityRequest {
    #[serde(rename = "selectedCities", default)]
    pub selected_cities: Vec<City>,
    #[serde(default)]
    pub city: Option<City>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub message: String,
}
