//! Build-time configuration.
//!
//! The API base URL is baked in at compile time (`FUZZYHOME_API_URL`) because
//! the web target has no process environment to read at runtime. Platform
//! crates provide an [`ApiConfig`] through context; views that render outside
//! a provider fall back to [`ApiConfig::default`].

use api::{ApiClient, ApiError, ListIngredientsQuery};
use dioxus::prelude::*;

/// Width of both drawer presentations. Mirrors `--drawer-width` in the theme.
pub const DRAWER_WIDTH_PX: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";

    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("FUZZYHOME_API_URL").unwrap_or(Self::DEFAULT_BASE_URL))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: ListIngredientsQuery::DEFAULT_PAGE_SIZE,
        }
    }

    pub fn client(&self) -> Result<ApiClient, ApiError> {
        ApiClient::new(&self.base_url)
    }

    pub fn list_query(&self) -> ListIngredientsQuery {
        ListIngredientsQuery::first_page(self.page_size)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Read the provided [`ApiConfig`], or the compiled-in default.
pub fn use_api_config() -> ApiConfig {
    try_use_context::<ApiConfig>().unwrap_or_default()
}
