use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::pagination::PageRequest;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductPage;
use crate::domain::product::ports::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the `products` table.
#[derive(Debug, FromRow)]
struct ProductRecord {
    id: i64,
    description: String,
    price: f64,
    width: f64,
    height: f64,
    length: f64,
    weight: f64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ProductError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(
            ProductId(record.id),
            record.description,
            record.price,
            record.width,
            record.height,
            record.length,
            record.weight,
        )
        .map_err(ProductError::from)
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn list_paged(&self, request: &PageRequest) -> Result<ProductPage, ProductError> {
        let offset = i64::try_from(request.offset())
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        let records = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, description, price, width, height, length, weight
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(request.limit()))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        let items = records
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProductPage {
            items,
            total_items: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn get(&self, id: &ProductId) -> Result<Product, ProductError> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, description, price, width, height, length, weight
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        match record {
            Some(r) => Product::try_from(r),
            None => Err(ProductError::NotFound(id.to_string())),
        }
    }
}
