//! PostgreSQL Repository Implementation

use chrono::NaiveDateTime;
use kernel::id::HeroId;
use sqlx::PgPool;
use sqlx::migrate::Migrator;

use crate::domain::entity::Hero;
use crate::domain::repository::HeroRepository;
use crate::domain::value_object::HeroAttributes;
use crate::error::HeroResult;

/// Embedded schema migrations (table, `updated_at` trigger, default heroes)
pub static MIGRATOR: Migrator = sqlx::migrate!("../../../database/migrations");

/// PostgreSQL-backed hero repository
#[derive(Clone)]
pub struct PgHeroRepository {
    pool: PgPool,
}

impl PgHeroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl HeroRepository for PgHeroRepository {
    async fn list(&self) -> HeroResult<Vec<Hero>> {
        let rows = sqlx::query_as::<_, HeroRow>(
            r#"
            SELECT id, name, role, difficulty, created_at, updated_at
            FROM heroes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(HeroRow::into_hero).collect())
    }

    async fn find_by_id(&self, id: HeroId) -> HeroResult<Option<Hero>> {
        let row = sqlx::query_as::<_, HeroRow>(
            r#"
            SELECT id, name, role, difficulty, created_at, updated_at
            FROM heroes
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(HeroRow::into_hero))
    }

    async fn create(&self, attrs: &HeroAttributes) -> HeroResult<Hero> {
        let row = sqlx::query_as::<_, HeroRow>(
            r#"
            INSERT INTO heroes (name, role, difficulty)
            VALUES ($1, $2, $3)
            RETURNING id, name, role, difficulty, created_at, updated_at
            "#,
        )
        .bind(attrs.name())
        .bind(attrs.role())
        .bind(attrs.difficulty())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_hero())
    }

    async fn update(&self, id: HeroId, attrs: &HeroAttributes) -> HeroResult<Option<Hero>> {
        // updated_at is refreshed by the update_heroes_updated_at trigger
        let row = sqlx::query_as::<_, HeroRow>(
            r#"
            UPDATE heroes
            SET name = $1, role = $2, difficulty = $3
            WHERE id = $4
            RETURNING id, name, role, difficulty, created_at, updated_at
            "#,
        )
        .bind(attrs.name())
        .bind(attrs.role())
        .bind(attrs.difficulty())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(HeroRow::into_hero))
    }

    async fn delete(&self, id: HeroId) -> HeroResult<bool> {
        let deleted = sqlx::query("DELETE FROM heroes WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct HeroRow {
    id: i32,
    name: String,
    role: String,
    difficulty: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl HeroRow {
    fn into_hero(self) -> Hero {
        Hero {
            id: HeroId::new(self.id),
            name: self.name,
            role: self.role,
            difficulty: self.difficulty,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
