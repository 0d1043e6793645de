use std::collections::BTreeMap;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::pagination::PageRequest;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductPage;
use crate::domain::product::ports::ProductRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserCredential;
use crate::domain::user::ports::UserCredentialStore;

/// Product catalog held in memory, ordered by id.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<i64, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.id().0, product))
            .collect();
        Self {
            products: RwLock::new(products),
        }
    }

    /// Insert or replace a product.
    pub async fn insert(&self, product: Product) {
        self.products.write().await.insert(product.id().0, product);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_paged(&self, request: &PageRequest) -> Result<ProductPage, ProductError> {
        let products = self.products.read().await;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);

        let items = products
            .values()
            .skip(offset)
            .take(request.limit() as usize)
            .cloned()
            .collect();

        Ok(ProductPage {
            items,
            total_items: products.len() as u64,
        })
    }

    async fn get(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.products
            .read()
            .await
            .get(&id.0)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}

/// Credential store held in memory, keyed by normalized email.
#[derive(Default)]
pub struct InMemoryUserCredentialStore {
    credentials: RwLock<HashMap<String, UserCredential>>,
}

impl InMemoryUserCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserCredentialStore for InMemoryUserCredentialStore {
    async fn create(&self, credential: UserCredential) -> Result<UserCredential, UserError> {
        let mut credentials = self.credentials.write().await;
        let key = credential.email.as_str().to_string();

        if credentials.contains_key(&key) {
            return Err(UserError::DuplicateUser(key));
        }

        credentials.insert(key, credential.clone());
        Ok(credential)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredential>, UserError> {
        Ok(self.credentials.read().await.get(email.as_str()).cloned())
    }
}
