use reqwest::{header::ACCEPT, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::dto::{CustomUnitDto, ErrorDto, IngredientDto, IngredientVariantDto};
use crate::error::ApiError;

/// A decoded answer from the backend.
///
/// `data` is `None` when the server replied with `204` or an empty / `null`
/// body; callers that render collections usually want [`ApiResponse::data_or_default`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: Option<T>,
}

impl<T: Default> ApiResponse<T> {
    pub fn data_or_default(self) -> T {
        self.data.unwrap_or_default()
    }
}

/// Paging and filter parameters for `GET /ingredients`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListIngredientsQuery {
    pub page: u32,
    pub size: u32,
    pub search: Option<String>,
}

impl ListIngredientsQuery {
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    pub fn first_page(size: u32) -> Self {
        Self {
            page: 0,
            size,
            search: None,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        params
    }
}

impl Default for ListIngredientsQuery {
    fn default() -> Self {
        Self::first_page(Self::DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut url = Url::parse(base_url).map_err(|source| ApiError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        // `Url::join` drops the last path segment unless it ends in '/'.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            http: Client::new(),
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn list_ingredients(
        &self,
        query: &ListIngredientsQuery,
    ) -> Result<ApiResponse<Vec<IngredientDto>>, ApiError> {
        let url = self.endpoint("ingredients")?;
        self.execute(self.http.get(url).query(&query.params())).await
    }

    pub async fn get_ingredient(&self, id: Uuid) -> Result<ApiResponse<IngredientDto>, ApiError> {
        let url = self.endpoint(&format!("ingredients/{id}"))?;
        self.execute(self.http.get(url)).await
    }

    pub async fn list_ingredient_variants(
        &self,
        id: Uuid,
    ) -> Result<ApiResponse<Vec<IngredientVariantDto>>, ApiError> {
        let url = self.endpoint(&format!("ingredients/{id}/variants"))?;
        self.execute(self.http.get(url)).await
    }

    pub async fn list_custom_units(
        &self,
        id: Uuid,
    ) -> Result<ApiResponse<Vec<CustomUnitDto>>, ApiError> {
        let url = self.endpoint(&format!("ingredients/{id}/custom-units"))?;
        self.execute(self.http.get(url)).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                source,
            })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = request.header(ACCEPT, "application/json").send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "api response");
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorDto>(&body)
                .ok()
                .and_then(|dto| dto.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            warn!(status = status.as_u16(), %message, "api request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiResponse {
                status: status.as_u16(),
                data: None,
            });
        }

        // `null` decodes to `None` rather than failing.
        let data = serde_json::from_slice::<Option<T>>(&body)?;
        Ok(ApiResponse {
            status: status.as_u16(),
            data,
        })
    }
}
