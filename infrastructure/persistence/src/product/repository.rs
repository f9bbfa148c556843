use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductScope;

use super::entity::ProductEntity;

const COLUMNS: &str = "p.id, p.user_id, p.article, p.name, p.category, p.expiry_date, \
     NULL::text AS owner_username, NULL::text AS owner_name, p.created_at, p.updated_at";

const ANNOTATED_COLUMNS: &str = "p.id, p.user_id, p.article, p.name, p.category, p.expiry_date, \
     u.username AS owner_username, u.name AS owner_name, p.created_at, p.updated_at";

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Product query failed: {e}");
    RepositoryError::DatabaseError
}

/// Unique violations come from `uq_products_owner_batch`: the batch already exists.
fn write_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => RepositoryError::Duplicated,
        other => database_error(other),
    }
}

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn list(&self, scope: &ProductScope) -> Result<Vec<Product>, RepositoryError> {
        let entities = match scope {
            ProductScope::Owner(owner) => {
                sqlx::query_as::<_, ProductEntity>(&format!(
                    "SELECT {COLUMNS} FROM products p WHERE p.user_id = $1 \
                     ORDER BY p.expiry_date ASC, p.created_at ASC"
                ))
                .bind(owner.as_str())
                .fetch_all(&self.pool)
                .await
            }
            ProductScope::All => {
                sqlx::query_as::<_, ProductEntity>(&format!(
                    "SELECT {ANNOTATED_COLUMNS} FROM products p \
                     LEFT JOIN users u ON u.id = p.user_id \
                     ORDER BY p.expiry_date ASC, p.created_at ASC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products p WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "INSERT INTO products AS p (id, user_id, article, name, category, expiry_date, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        ))
        .bind(product.id)
        .bind(product.user_id.as_str())
        .bind(&product.article)
        .bind(&product.name)
        .bind(product.category.as_str())
        .bind(product.expiry_date)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        product: &Product,
        expected_updated_at: DateTime<Utc>,
    ) -> Result<Product, RepositoryError> {
        let updated = sqlx::query_as::<_, ProductEntity>(&format!(
            "UPDATE products AS p SET article = $2, name = $3, category = $4, expiry_date = $5, updated_at = $6 \
             WHERE p.id = $1 AND p.updated_at = $7 \
             RETURNING {COLUMNS}"
        ))
        .bind(product.id)
        .bind(&product.article)
        .bind(&product.name)
        .bind(product.category.as_str())
        .bind(product.expiry_date)
        .bind(product.updated_at)
        .bind(expected_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(write_error)?;

        // no row matched: either it is gone or someone else wrote it since it was read
        let Some(entity) = updated else {
            return Err(if self.exists(product.id).await? {
                RepositoryError::Conflict
            } else {
                RepositoryError::NotFound
            });
        };

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_expired_before(&self, cutoff: NaiveDate) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE expiry_date < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected())
    }
}
