//! OpenAPI documentation.

use utoipa::OpenApi;

use common::{ErrorBody, ErrorResponse};
use domain::{NewUser, User, UserPatch};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "1.0.0",
        description = "Users API documentation"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local server")
    ),
    paths(
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            NewUser,
            UserPatch,
            ErrorResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Users", description = "User directory endpoints"),
    )
)]
pub struct ApiDoc;
