/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: access token 検証, users: identity 解決で使う user lookup
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::repos::UserStore;
use crate::services::auth::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, users: Arc<dyn UserStore>) -> Self {
        Self { auth, users }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}
