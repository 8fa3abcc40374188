use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_payout::{__path_create_payout, create_payout},
    get_feedback::{__path_get_feedback, get_feedback},
    get_overview::{__path_get_overview, get_overview},
    get_payouts::{__path_get_payouts, get_payouts},
    get_settings::{__path_get_settings, get_settings},
    get_transactions::{__path_get_transactions, get_transactions},
    get_users::{__path_get_users, get_users},
    record_transaction::{__path_record_transaction, record_transaction},
    release_payout::{__path_release_payout, release_payout},
    update_settings::{__path_update_settings, update_settings},
    update_user::{__path_update_user, update_user},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    get_users,
    update_user,
    get_transactions,
    record_transaction,
    get_payouts,
    create_payout,
    release_payout,
    get_settings,
    update_settings,
    get_overview,
    get_feedback
))]
pub struct AdminApiDoc;

pub fn admin_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/admin/users", root_path), get(get_users))
        .route(
            &format!("{}/admin/users/{{user_id}}", root_path),
            put(update_user),
        )
        .route(
            &format!("{}/admin/transactions", root_path),
            get(get_transactions).post(record_transaction),
        )
        .route(
            &format!("{}/admin/payouts", root_path),
            get(get_payouts).post(create_payout),
        )
        .route(
            &format!("{}/admin/payouts/{{payout_id}}/release", root_path),
            post(release_payout),
        )
        .route(
            &format!("{}/admin/settings", root_path),
            get(get_settings).put(update_settings),
        )
        .route(&format!("{}/admin/overview", root_path), get(get_overview))
        .route(&format!("{}/admin/feedback", root_path), get(get_feedback))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
