//! Delete Hero Use Case

use std::sync::Arc;

use kernel::id::HeroId;

use crate::domain::repository::HeroRepository;
use crate::error::{HeroError, HeroResult};

/// Delete hero use case
pub struct DeleteHeroUseCase<R>
where
    R: HeroRepository,
{
    hero_repo: Arc<R>,
}

impl<R> DeleteHeroUseCase<R>
where
    R: HeroRepository,
{
    pub fn new(hero_repo: Arc<R>) -> Self {
        Self { hero_repo }
    }

    pub async fn execute(&self, id: HeroId) -> HeroResult<()> {
        if !self.hero_repo.delete(id).await? {
            return Err(HeroError::NotFound);
        }

        tracing::info!(hero_id = %id, "Hero deleted");
        Ok(())
    }
}
