use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::pagination::PageResult;
use crate::domain::product::errors::ProductError;
use crate::domain::user::errors::TokenError;
use crate::domain::user::errors::UserError;

pub mod get_product;
pub mod list_products;
pub mod login;
pub mod signup;
pub mod verify;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Successful paginated response: `{status_code, data, pagination}`.
#[derive(Debug, Clone)]
pub struct ApiPaginated<T: Serialize + PartialEq>(Json<ApiPaginatedBody<T>>);

impl<T: Serialize + PartialEq> ApiPaginated<T> {
    pub fn ok(page: PageResult<T>) -> Self {
        let pagination = PaginationData {
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            items_per_page: page.items_per_page,
            has_next_page: page.has_next_page,
            has_previous_page: page.has_previous_page,
        };
        ApiPaginated(Json(ApiPaginatedBody {
            status_code: StatusCode::OK.as_u16(),
            data: page.items,
            pagination,
        }))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiPaginated<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.0).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidEmail(_) | UserError::InvalidPassword(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::DuplicateUser(_) => ApiError::Conflict(err.to_string()),
            UserError::AuthenticationFailed
            | UserError::Token(TokenError::InvalidToken(_))
            | UserError::Token(TokenError::Expired) => ApiError::Unauthorized(err.to_string()),
            UserError::Token(TokenError::SigningFailed(_))
            | UserError::Token(TokenError::InvalidConfiguration(_))
            | UserError::HashingFailed(_)
            | UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidId(_) | ProductError::Pagination(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ProductError::NotFound(_) => ApiError::NotFound(err.to_string()),
            // Only produced by corrupt stored rows.
            ProductError::InvalidAttribute(_) | ProductError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiPaginatedBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: Vec<T>,
    pagination: PaginationData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationData {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}
