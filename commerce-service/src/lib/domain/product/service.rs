use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::pagination::PageResult;
use crate::domain::pagination::PaginationPolicy;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::CatalogServicePort;
use crate::domain::product::ports::ProductRepository;

/// Domain service implementation for catalog queries.
pub struct CatalogService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> CatalogService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> CatalogServicePort for CatalogService<PR>
where
    PR: ProductRepository,
{
    async fn list_products(
        &self,
        raw_page: Option<&str>,
        raw_limit: Option<&str>,
    ) -> Result<PageResult<Product>, ProductError> {
        let request = PaginationPolicy::parse(raw_page, raw_limit)?;

        let page = self.repository.list_paged(&request).await?;
        tracing::debug!(
            page = request.page(),
            limit = request.limit(),
            returned = page.items.len(),
            total_items = page.total_items,
            "Listed products"
        );

        Ok(PaginationPolicy::build_result(
            page.items,
            page.total_items,
            &request,
        ))
    }

    async fn get_product(&self, id: &ProductId) -> Result<ProductDetails, ProductError> {
        self.repository.get(id).await.map(ProductDetails::from)
    }
}
