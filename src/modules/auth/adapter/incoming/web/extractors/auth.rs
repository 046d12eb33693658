use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::{CurrentUser, UserId, UserRole};
use crate::auth::application::helpers::ResolveCurrentUserError;
use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, ACCESS_TOKEN};
use crate::{shared::api::ApiResponse, AppState};

/// A caller holding a valid access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    tracing::error!("TokenProvider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != ACCESS_TOKEN {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                    role: claims.role,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// A caller whose access token carries the ADMIN role.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) if user.role.is_admin() => ready(Ok(AdminUser {
                user_id: user.user_id,
            })),
            Ok(user) => {
                tracing::info!(user_id = %user.user_id, "Admin route refused");
                ready(Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Administrator role required",
                ))))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Loads the caller's current role and group. Handlers that authorize by
/// group call this instead of trusting the token.
pub async fn resolve_current_user_or_response(
    data: &web::Data<AppState>,
    user: &AuthenticatedUser,
) -> Result<CurrentUser, HttpResponse> {
    match data
        .current_user_resolver
        .resolve(UserId::from(user.user_id))
        .await
    {
        Ok(current) => Ok(current),

        Err(ResolveCurrentUserError::NotFound) => Err(ApiResponse::unauthorized(
            "USER_NOT_FOUND",
            "Account no longer exists",
        )),

        Err(ResolveCurrentUserError::RepositoryError(msg)) => {
            Err(ApiResponse::storage_failure("resolve_current_user", &msg))
        }
    }
}
