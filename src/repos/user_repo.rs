/*
 * Responsibility
 * - users テーブルの参照 (id による単一取得のみ)
 * - UserStore trait で lookup を抽象化し、identity 解決側からは実装を知らない形にする
 * - DB エラーは RepoError で返す (扱いは呼び出し側が決める)
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: i64,
    #[sqlx(rename = "userName")]
    pub user_name: String,
    #[sqlx(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// User lookup keyed by the integer user id.
///
/// Implementations must be shareable across requests (`Arc<dyn UserStore>`).
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRow>, RepoError>;
}

#[derive(Clone, Debug)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRow>, RepoError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT "userId", "userName", "imageUrl"
            FROM users
            WHERE "userId" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }
}

#[cfg(test)]
pub mod fake {
    //! In-memory store for handler and resolver tests.
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    pub struct FakeUserStore {
        users: HashMap<i64, UserRow>,
        calls: AtomicUsize,
        last_id: Mutex<Option<i64>>,
        fail: bool,
    }

    impl FakeUserStore {
        pub fn with_user(mut self, id: i64, user_name: &str) -> Self {
            self.users.insert(
                id,
                UserRow {
                    id,
                    user_name: user_name.to_string(),
                    image_url: None,
                },
            );
            self
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_id(&self) -> Option<i64> {
            *self.last_id.lock().unwrap()
        }
    }

    #[async_trait]
    impl UserStore for FakeUserStore {
        async fn find_by_id(&self, id: i64) -> Result<Option<UserRow>, RepoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_id.lock().unwrap() = Some(id);
            if self.fail {
                return Err(RepoError::Db(sqlx::Error::PoolTimedOut));
            }
            Ok(self.users.get(&id).cloned())
        }
    }
}
