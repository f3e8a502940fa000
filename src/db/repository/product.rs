//! Product repository

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::sql::Thing;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Product;

pub const PRODUCT_TABLE: &str = "product";

/// Parse a client-supplied product id.
///
/// Well-formed means `"product:key"` with a non-empty key. Anything else is
/// rejected here, before the store is queried.
pub fn parse_product_id(raw: &str) -> Option<Thing> {
    let (table, key) = raw.split_once(':')?;
    if table != PRODUCT_TABLE || key.is_empty() {
        return None;
    }
    Some(Thing::from((table.to_string(), key.to_string())))
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All products, store-default order
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        Ok(self.base.db().select(PRODUCT_TABLE).await?)
    }

    /// Up to 6 featured products
    pub async fn find_featured(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE featured = true LIMIT 6")
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: &Thing) -> RepoResult<Option<Product>> {
        Ok(self.base.db().select((PRODUCT_TABLE, id.id.to_raw())).await?)
    }

    /// Number of products in the collection
    pub async fn count(&self) -> RepoResult<usize> {
        #[derive(Deserialize)]
        struct Row {
            count: usize,
        }

        let row: Option<Row> = self
            .base
            .db()
            .query("SELECT count() AS count FROM product GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Insert a product, letting the store assign the id
    pub async fn insert(&self, product: Product) -> RepoResult<Product> {
        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Unconditional stock decrement for one product.
    ///
    /// The stock check in order placement and this write are separate store
    /// operations; concurrent submissions for the same product can drive
    /// stock_count below zero.
    pub async fn decrement_stock(&self, id: &Thing, quantity: i64) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $product SET stock_count -= $quantity")
            .bind(("product", id.clone()))
            .bind(("quantity", quantity))
            .await?
            .check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::parse_product_id;

    #[test]
    fn accepts_table_key_form() {
        let id = parse_product_id("product:abc123").unwrap();
        assert_eq!(id.tb, "product");
        assert_eq!(id.id.to_raw(), "abc123");
    }

    #[test]
    fn rejects_bare_keys() {
        assert!(parse_product_id("abc").is_none());
    }

    #[test]
    fn rejects_other_tables() {
        assert!(parse_product_id("order:abc").is_none());
    }

    #[test]
    fn rejects_empty_key() {
        assert!(parse_product_id("product:").is_none());
    }
}
