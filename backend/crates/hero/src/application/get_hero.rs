//! Get Hero Use Case

use std::sync::Arc;

use kernel::id::HeroId;

use crate::domain::entity::Hero;
use crate::domain::repository::HeroRepository;
use crate::error::{HeroError, HeroResult};

/// Get hero use case
pub struct GetHeroUseCase<R>
where
    R: HeroRepository,
{
    hero_repo: Arc<R>,
}

impl<R> GetHeroUseCase<R>
where
    R: HeroRepository,
{
    pub fn new(hero_repo: Arc<R>) -> Self {
        Self { hero_repo }
    }

    pub async fn execute(&self, id: HeroId) -> HeroResult<Hero> {
        self.hero_repo
            .find_by_id(id)
            .await?
            .ok_or(HeroError::NotFound)
    }
}
