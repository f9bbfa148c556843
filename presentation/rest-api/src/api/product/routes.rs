use std::sync::Arc;

use chrono::{Local, NaiveDate};
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::category::model::CategoryId;
use business::domain::category::registry::CategoryRegistry;
use business::domain::product::errors::ProductError;
use business::domain::product::filter::ProductFilter;
use business::domain::product::model::Product;
use business::domain::product::urgency::UrgencyPolicy;
use business::domain::product::use_cases::cleanup::{
    CleanupProductsParams, CleanupProductsUseCase,
};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetProductsParams, GetProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_stats::{
    GetProductStatsParams, GetProductStatsUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::dates::to_local_day;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CleanupResponse, CreateProductRequest, ProductResponse, ProductStatsResponse,
    UpdateProductRequest,
};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct ProductUseCases {
    pub create: Arc<dyn CreateProductUseCase>,
    pub get_all: Arc<dyn GetProductsUseCase>,
    pub get_by_id: Arc<dyn GetProductByIdUseCase>,
    pub get_stats: Arc<dyn GetProductStatsUseCase>,
    pub update: Arc<dyn UpdateProductUseCase>,
    pub delete: Arc<dyn DeleteProductUseCase>,
    pub cleanup: Arc<dyn CleanupProductsUseCase>,
}

pub struct ProductApi {
    use_cases: ProductUseCases,
    registry: Arc<CategoryRegistry>,
    policy: Arc<UrgencyPolicy>,
}

impl ProductApi {
    pub fn new(
        use_cases: ProductUseCases,
        registry: Arc<CategoryRegistry>,
        policy: Arc<UrgencyPolicy>,
    ) -> Self {
        Self {
            use_cases,
            registry,
            policy,
        }
    }

    fn respond(&self, product: Product, today: NaiveDate) -> ProductResponse {
        ProductResponse::build(product, today, &self.registry, &self.policy)
    }
}

fn today() -> NaiveDate {
    to_local_day(&Local::now())
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", "product.invalid_id"))
}

/// Product management API
///
/// Stocked batches with their expiry dates. Regular users work on their own
/// products; administrators see and manage every owner's products.
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// Rejects a second batch with the same article and expiry date for the same owner.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: SessionBearer,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let today = today();
        let params = CreateProductParams {
            actor: auth.0,
            article: body.0.article,
            name: body.0.name,
            category: CategoryId::new(body.0.category),
            expiry_date: body.0.expiry_date,
            today,
        };

        match self.use_cases.create.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(self.respond(product, today))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Filters: `all` (default), `week`, `expired`, `mine` or a category identifier.
    /// Ordered by expiry date.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(
        &self,
        auth: SessionBearer,
        /// Filter key
        filter: Query<Option<String>>,
    ) -> GetProductsResponse {
        let key = filter.0.unwrap_or_else(|| "all".to_string());
        let filter = match ProductFilter::parse(key.trim(), &self.registry) {
            Ok(filter) => filter,
            Err(err) => {
                let (_, json) = ProductError::from(err).into_error_response();
                return GetProductsResponse::BadRequest(json);
            }
        };

        let today = today();
        let params = GetProductsParams {
            viewer: auth.0,
            filter,
            today,
        };

        match self.use_cases.get_all.execute(params).await {
            Ok(products) => GetProductsResponse::Ok(Json(
                products
                    .into_iter()
                    .map(|p| self.respond(p, today))
                    .collect(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// Product counters
    ///
    /// Total, expiring within a week and expired products visible to the caller.
    #[oai(path = "/products/stats", method = "get", tag = "ApiTags::Products")]
    async fn get_stats(&self, auth: SessionBearer) -> GetProductStatsResponse {
        let params = GetProductStatsParams {
            viewer: auth.0,
            today: today(),
        };

        match self.use_cases.get_stats.execute(params).await {
            Ok(stats) => GetProductStatsResponse::Ok(Json(stats.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetProductStatsResponse::InternalError(json)
            }
        }
    }

    /// Purge old products
    ///
    /// Administrators only. Deletes products that expired more than six months ago.
    #[oai(path = "/products/cleanup", method = "post", tag = "ApiTags::Products")]
    async fn cleanup(&self, auth: SessionBearer) -> CleanupProductsResponse {
        let params = CleanupProductsParams {
            actor: auth.0,
            today: today(),
        };

        match self.use_cases.cleanup.execute(params).await {
            Ok(purged) => CleanupProductsResponse::Ok(Json(CleanupResponse { purged })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => CleanupProductsResponse::Forbidden(json),
                    _ => CleanupProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(
        &self,
        auth: SessionBearer,
        id: Path<String>,
    ) -> GetProductByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(invalid_id());
        };

        match self
            .use_cases
            .get_by_id
            .execute(GetProductByIdParams {
                id,
                viewer: auth.0,
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(self.respond(product, today()))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetProductByIdResponse::Forbidden(json),
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces article, name, category and expiry date. The owner never changes.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: SessionBearer,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return UpdateProductResponse::BadRequest(invalid_id());
        };

        let today = today();
        let params = UpdateProductParams {
            id,
            actor: auth.0,
            article: body.0.article,
            name: body.0.name,
            category: CategoryId::new(body.0.category),
            expiry_date: body.0.expiry_date,
            today,
        };

        match self.use_cases.update.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(self.respond(product, today))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    403 => UpdateProductResponse::Forbidden(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: SessionBearer, id: Path<String>) -> DeleteProductResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(invalid_id());
        };

        match self
            .use_cases
            .delete
            .execute(DeleteProductParams { id, actor: auth.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductStatsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductStatsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CleanupProductsResponse {
    #[oai(status = 200)]
    Ok(Json<CleanupResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
