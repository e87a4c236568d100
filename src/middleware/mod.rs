/*
 * Responsibility
 * - middleware の公開インターフェース
 * - 各 module の apply(router, ..) を app.rs から順に掛ける
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
