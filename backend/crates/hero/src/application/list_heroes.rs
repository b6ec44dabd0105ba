//! List Heroes Use Case

use std::sync::Arc;

use crate::domain::entity::Hero;
use crate::domain::repository::HeroRepository;
use crate::error::HeroResult;

/// List heroes use case
pub struct ListHeroesUseCase<R>
where
    R: HeroRepository,
{
    hero_repo: Arc<R>,
}

impl<R> ListHeroesUseCase<R>
where
    R: HeroRepository,
{
    pub fn new(hero_repo: Arc<R>) -> Self {
        Self { hero_repo }
    }

    pub async fn execute(&self) -> HeroResult<Vec<Hero>> {
        self.hero_repo.list().await
    }
}
