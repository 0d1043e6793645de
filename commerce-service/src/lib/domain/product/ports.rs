use async_trait::async_trait;

use crate::domain::pagination::PageRequest;
use crate::domain::pagination::PageResult;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductPage;

/// Port for catalog query use cases.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// List one page of the catalog.
    ///
    /// # Arguments
    /// * `raw_page` - Unparsed `page` query value, if present
    /// * `raw_limit` - Unparsed `limit` query value, if present
    ///
    /// # Returns
    /// Page of products with navigation metadata
    ///
    /// # Errors
    /// * `Pagination` - `page` or `limit` rejected by the pagination policy
    /// * `DatabaseError` - Database operation failed
    async fn list_products(
        &self,
        raw_page: Option<&str>,
        raw_limit: Option<&str>,
    ) -> Result<PageResult<Product>, ProductError>;

    /// Retrieve one product with its derived volume and density.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_product(&self, id: &ProductId) -> Result<ProductDetails, ProductError>;
}

/// Read access to the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Retrieve the products at `request.offset()`, at most `request.limit()` of them,
    /// ordered by id, together with the total catalog size.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_paged(&self, request: &PageRequest) -> Result<ProductPage, ProductError>;

    /// Retrieve a product by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get(&self, id: &ProductId) -> Result<Product, ProductError>;
}
