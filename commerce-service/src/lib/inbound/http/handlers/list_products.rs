use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiPaginated;
use crate::domain::product::models::Product;
use crate::domain::product::ports::CatalogServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_products<AS: AuthServicePort, CS: CatalogServicePort>(
    State(state): State<AppState<AS, CS>>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<ApiPaginated<ProductData>, ApiError> {
    let Query(query) = query?;

    state
        .catalog_service
        .list_products(query.page.as_deref(), query.limit.as_deref())
        .await
        .map_err(ApiError::from)
        .map(|page| ApiPaginated::ok(page.map(|product| ProductData::from(&product))))
}

/// Raw query parameters; validation belongs to the pagination policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListProductsQuery {
    page: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub weight: f64,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().0,
            description: product.description().to_string(),
            price: product.price(),
            width: product.width(),
            height: product.height(),
            length: product.length(),
            weight: product.weight(),
        }
    }
}
