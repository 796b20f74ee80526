/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Groups
 *
 * 1. Public routes: `/signin`, `/signup`
 * 2. Protected routes: `/users/...`, `/cards/...`, wrapped in `auth_middleware`
 *    with `route_layer`, so the gate only runs for routes that matched
 * 3. Fallback: JSON 404 for unknown paths and for known paths hit with
 *    the wrong method
 *
 * Security headers, request tracing and CORS wrap the whole router.
 */

use axum::{
    http::{
        header::{CONTENT_TYPE, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS},
        HeaderValue, Method,
    },
    middleware::from_fn_with_state,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::card_routes::configure_card_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Requested resource not found";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (store, token codec, bcrypt cost)
/// * `cors_origins` - Origins allowed to make credentialed requests
pub fn create_router(app_state: AppState, cors_origins: &[String]) -> Router<()> {
    let protected = configure_card_routes(configure_user_routes(Router::new()))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    configure_auth_routes(Router::new())
        .merge(protected)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found(ROUTE_NOT_FOUND_MESSAGE)
}

/// Build the CORS layer for the given origins
///
/// Credentials are allowed, so origins are always listed explicitly.
/// Entries that are not valid header values are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
