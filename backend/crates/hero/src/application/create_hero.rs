//! Create Hero Use Case

use std::sync::Arc;

use crate::domain::entity::Hero;
use crate::domain::repository::HeroRepository;
use crate::domain::value_object::HeroAttributes;
use crate::error::HeroResult;

/// Create hero input
pub struct CreateHeroInput {
    pub name: String,
    pub role: String,
    pub difficulty: String,
}

/// Create hero use case
pub struct CreateHeroUseCase<R>
where
    R: HeroRepository,
{
    hero_repo: Arc<R>,
}

impl<R> CreateHeroUseCase<R>
where
    R: HeroRepository,
{
    pub fn new(hero_repo: Arc<R>) -> Self {
        Self { hero_repo }
    }

    pub async fn execute(&self, input: CreateHeroInput) -> HeroResult<Hero> {
        let attrs = HeroAttributes::new(input.name, input.role, input.difficulty)?;

        let hero = self.hero_repo.create(&attrs).await?;

        tracing::info!(hero_id = %hero.id, name = %hero.name, "Hero created");
        Ok(hero)
    }
}
