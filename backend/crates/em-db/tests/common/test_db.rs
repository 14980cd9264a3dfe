use em_core::Profile;
use em_db::{Database, UserRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    Database::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user row so foreign keys resolve
pub async fn create_test_user(pool: &SqlitePool, name: &str) -> Profile {
    let id = Uuid::new_v4();
    let profile = Profile {
        id,
        name: name.to_string(),
        email: format!("test-{}@example.com", id),
        created_at: super::fixtures::now_seconds(),
    };

    UserRepository::new(pool.clone())
        .create(&profile)
        .await
        .expect("Failed to create test user");

    profile
}
