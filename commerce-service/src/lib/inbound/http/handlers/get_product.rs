use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::list_products::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::CatalogServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_product<AS: AuthServicePort, CS: CatalogServicePort>(
    State(state): State<AppState<AS, CS>>,
    Path(product_id): Path<String>,
) -> Result<ApiSuccess<ProductDetailsData>, ApiError> {
    let product_id = ProductId::from_string(&product_id).map_err(ProductError::from)?;

    state
        .catalog_service
        .get_product(&product_id)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}

/// A product plus its derived volume (m³) and density (kg/m³).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailsData {
    #[serde(flatten)]
    pub product: ProductData,
    pub volume: f64,
    pub density: f64,
}

impl From<&ProductDetails> for ProductDetailsData {
    fn from(details: &ProductDetails) -> Self {
        Self {
            product: (&details.product).into(),
            volume: details.volume,
            density: details.density,
        }
    }
}
