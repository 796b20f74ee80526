/**
 * Public Authentication Routes
 *
 * - `POST /signin` - Verify credentials and set the session cookie
 * - `POST /signup` - Register a new user
 *
 * These are the only routes reachable without a session.
 */

use axum::{routing::post, Router};

use crate::backend::auth::{login, signup};
use crate::backend::server::state::AppState;

pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signin", post(login))
        .route("/signup", post(signup))
}
