//! OpenAPI document for the HTTP API.

use axum::Json;
use utoipa::OpenApi;

use crate::auth::{AdminLoginRequest, AdminSignupRequest, UserLoginRequest, UserSignupRequest};
use crate::db::AdminRole;
use crate::web::dto::{
    AccountType, AdminInfo, AdminLoginResponse, HealthResponse, MessageResponse, UserInfo,
    UserLoginResponse, UserSignupResponse,
};
use crate::web::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "clubauth",
        description = "Account signup and login for club members and club admins"
    ),
    paths(
        handlers::user_signup,
        handlers::user_login,
        handlers::admin_login,
        handlers::admin_signup,
        handlers::health_check,
    ),
    components(schemas(
        UserSignupRequest,
        UserLoginRequest,
        AdminSignupRequest,
        AdminLoginRequest,
        AdminRole,
        AccountType,
        MessageResponse,
        UserSignupResponse,
        UserInfo,
        UserLoginResponse,
        AdminInfo,
        AdminLoginResponse,
        HealthResponse,
    )),
    tags(
        (name = "User", description = "Club member accounts"),
        (name = "Admin", description = "Club admin accounts"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
