//! In-Memory Repository Implementation
//!
//! Volatile store for running without a database. Starts with the default
//! heroes at ids 1-3; the next id handed out is 4. Ids are never reused.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use kernel::id::HeroId;
use tokio::sync::RwLock;

use crate::domain::entity::{DEFAULT_HEROES, Hero};
use crate::domain::repository::HeroRepository;
use crate::domain::value_object::HeroAttributes;
use crate::error::HeroResult;

struct HeroTable {
    heroes: BTreeMap<HeroId, Hero>,
    next_id: i32,
}

impl HeroTable {
    fn new() -> Self {
        Self {
            heroes: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, name: &str, role: &str, difficulty: &str, now: NaiveDateTime) -> Hero {
        let id = HeroId::new(self.next_id);
        self.next_id += 1;

        let hero = Hero {
            id,
            name: name.to_string(),
            role: role.to_string(),
            difficulty: difficulty.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.heroes.insert(id, hero.clone());
        hero
    }
}

/// Lock-guarded hero table shared by all clones
#[derive(Clone)]
pub struct InMemoryHeroRepository {
    table: Arc<RwLock<HeroTable>>,
}

impl InMemoryHeroRepository {
    /// Store pre-populated with the default heroes
    pub fn seeded() -> Self {
        let now = now();
        let mut table = HeroTable::new();
        for (name, role, difficulty) in DEFAULT_HEROES {
            table.insert(name, role, difficulty, now);
        }
        Self::from_table(table)
    }

    /// Store with no heroes; the first id handed out is 1
    pub fn empty() -> Self {
        Self::from_table(HeroTable::new())
    }

    fn from_table(table: HeroTable) -> Self {
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }
}

impl Default for InMemoryHeroRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

impl HeroRepository for InMemoryHeroRepository {
    async fn list(&self) -> HeroResult<Vec<Hero>> {
        let table = self.table.read().await;
        Ok(table.heroes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: HeroId) -> HeroResult<Option<Hero>> {
        let table = self.table.read().await;
        Ok(table.heroes.get(&id).cloned())
    }

    async fn create(&self, attrs: &HeroAttributes) -> HeroResult<Hero> {
        let mut table = self.table.write().await;
        Ok(table.insert(attrs.name(), attrs.role(), attrs.difficulty(), now()))
    }

    async fn update(&self, id: HeroId, attrs: &HeroAttributes) -> HeroResult<Option<Hero>> {
        let mut table = self.table.write().await;

        let Some(hero) = table.heroes.get_mut(&id) else {
            return Ok(None);
        };

        hero.name = attrs.name().to_string();
        hero.role = attrs.role().to_string();
        hero.difficulty = attrs.difficulty().to_string();
        hero.updated_at = now();

        Ok(Some(hero.clone()))
    }

    async fn delete(&self, id: HeroId) -> HeroResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.heroes.remove(&id).is_some())
    }
}
