//! Ingredients page data: one listing request per page visit.

mod list;
pub use list::IngredientList;

use api::{ApiError, ApiResponse, IngredientDto};
use tracing::{info, warn};

use crate::core::config::ApiConfig;

/// What the ingredients page renders. Nothing outlives the page: state is
/// rebuilt on every visit and dropped on navigation away.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientsState {
    Loading,
    Ready(Vec<IngredientDto>),
    Failed(String),
}

impl IngredientsState {
    pub async fn load(config: &ApiConfig) -> Self {
        info!(base_url = %config.base_url, "loading ingredients");
        let result = match config.client() {
            Ok(client) => client.list_ingredients(&config.list_query()).await,
            Err(err) => Err(err),
        };
        Self::from_response(result)
    }

    /// A response without `data` is an empty list, not a failure.
    pub fn from_response(result: Result<ApiResponse<Vec<IngredientDto>>, ApiError>) -> Self {
        match result {
            Ok(response) => {
                let items = response.data_or_default();
                info!(count = items.len(), "ingredients loaded");
                Self::Ready(items)
            }
            Err(err) => {
                warn!(status = ?err.status(), "couldn't load ingredients: {err}");
                Self::Failed(err.to_string())
            }
        }
    }
}
