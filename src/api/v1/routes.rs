/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - 公開ルートと、access middleware を掛ける保護ルートを分けて merge する
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, me::get_me, time_ranges::time_range_status};

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health))
        .route("/time-ranges/status", get(time_range_status));

    let protected = Router::new().route("/me", get(get_me));
    let protected = middleware::auth::access::apply(protected, state);

    public.merge(protected)
}
