//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::{AppResult, ErrorResponse};
use domain::{parse_user_id, NewUser, User, UserPatch};

use crate::extractors::JsonBody;
use crate::state::AppState;

/// Query string accepted by the listing endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Attribute to sort by (`id`, `email`, `name` or `phone`)
    #[serde(rename = "sortedBy")]
    pub sorted_by: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", patch(update_user).delete(delete_user))
}

/// List users, optionally sorted by an attribute
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<User>>> {
    tracing::debug!(sorted_by = ?query.sorted_by, "Listing users");
    let users = state.users.list_users(query.sorted_by).await?;
    Ok(Json(users))
}

/// Store a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User stored", body = User),
        (status = 400, description = "Phone number already in use or malformed body", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.users.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update attributes of a user by ID
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid ID, malformed body or phone number already in use", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserPatch>,
) -> AppResult<Json<User>> {
    let id = parse_user_id(&id)?;
    let user = state.users.update_user(id, payload).await?;
    Ok(Json(user))
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = User),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_user_id(&id)?;
    let user = state.users.delete_user(id).await?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use mockall::predicate::eq;
    use tower::ServiceExt;

    use common::AppError;
    use user_service_lib::service::MockUserService;

    use super::*;
    use crate::config::ApiConfig;

    fn app(mock: MockUserService) -> Router {
        user_routes().with_state(AppState::new(Arc::new(mock), ApiConfig::default()))
    }

    #[tokio::test]
    async fn test_sorted_by_query_is_forwarded() {
        let mut mock = MockUserService::new();
        mock.expect_list_users()
            .with(eq(Some("email".to_string())))
            .returning(|_| Ok(vec![]));

        let response = app(mock)
            .oneshot(
                Request::builder()
                    .uri("/?sortedBy=email")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_id_never_reaches_service() {
        let mut mock = MockUserService::new();
        mock.expect_delete_user().never();

        let response = app(mock)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_service_failure_is_internal_error() {
        let mut mock = MockUserService::new();
        mock.expect_list_users()
            .returning(|_| Err(AppError::internal("directory unavailable")));

        let response = app(mock)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
