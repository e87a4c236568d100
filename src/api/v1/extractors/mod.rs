/*
 * Responsibility
 * - handler が受け取る認証系 extractor の公開
 */
mod auth_ctx;
mod current_user;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
pub use current_user::CurrentUser;
