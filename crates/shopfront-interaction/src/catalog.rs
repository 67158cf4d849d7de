//! CatalogService - category tree and breadcrumbs.

use crate::client::{ApiClient, RequestOptions};
use shopfront_core::{Breadcrumb, BusinessError, Category, find_category_path};

#[derive(Clone)]
pub struct CatalogService {
    client: ApiClient,
}

impl CatalogService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the full category forest.
    pub async fn category_tree(&self) -> Result<Vec<Category>, BusinessError> {
        let tree: Option<Vec<Category>> = self
            .client
            .get("/categories/tree", RequestOptions::new())
            .await?;
        Ok(tree.unwrap_or_default())
    }

    /// Resolves the breadcrumb trail for `category_id`, or `None` if it is unknown.
    pub async fn breadcrumb(&self, category_id: &str) -> Result<Option<Vec<Breadcrumb>>, BusinessError> {
        let tree = self.category_tree().await?;
        Ok(find_category_path(&tree, category_id))
    }
}
