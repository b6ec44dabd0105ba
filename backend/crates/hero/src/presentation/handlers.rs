//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::HeroId;
use std::sync::Arc;

use crate::application::{
    CreateHeroInput, CreateHeroUseCase, DeleteHeroUseCase, GetHeroUseCase, ListHeroesUseCase,
    UpdateHeroInput, UpdateHeroUseCase,
};
use crate::domain::entity::Hero;
use crate::domain::repository::HeroRepository;
use crate::error::HeroResult;
use crate::presentation::dto::HeroRequest;

/// Shared state for hero handlers
#[derive(Clone)]
pub struct HeroAppState<R>
where
    R: HeroRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn parse_id(path: Result<Path<String>, PathRejection>) -> HeroResult<HeroId> {
    let Path(raw) = path?;
    Ok(raw.parse::<HeroId>()?)
}

/// GET /api/heroes
pub async fn list_heroes<R>(State(state): State<HeroAppState<R>>) -> HeroResult<Json<Vec<Hero>>>
where
    R: HeroRepository + Clone + Send + Sync + 'static,
{
    let heroes = ListHeroesUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(heroes))
}

/// GET /api/heroes/{id}
pub async fn get_hero<R>(
    State(state): State<HeroAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> HeroResult<Json<Hero>>
where
    R: HeroRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(path)?;
    let hero = GetHeroUseCase::new(state.repo.clone()).execute(id).await?;
    Ok(Json(hero))
}

/// POST /api/heroes
pub async fn create_hero<R>(
    State(state): State<HeroAppState<R>>,
    body: Bytes,
) -> HeroResult<(StatusCode, Json<Hero>)>
where
    R: HeroRepository + Clone + Send + Sync + 'static,
{
    let req: HeroRequest = serde_json::from_slice(&body)?;

    let hero = CreateHeroUseCase::new(state.repo.clone())
        .execute(CreateHeroInput {
            name: req.name,
            role: req.role,
            difficulty: req.difficulty,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(hero)))
}

/// PUT /api/heroes/{id}
pub async fn update_hero<R>(
    State(state): State<HeroAppState<R>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> HeroResult<Json<Hero>>
where
    R: HeroRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(path)?;
    let req: HeroRequest = serde_json::from_slice(&body)?;

    let hero = UpdateHeroUseCase::new(state.repo.clone())
        .execute(UpdateHeroInput {
            id,
            name: req.name,
            role: req.role,
            difficulty: req.difficulty,
        })
        .await?;

    Ok(Json(hero))
}

/// DELETE /api/heroes/{id}
pub async fn delete_hero<R>(
    State(state): State<HeroAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> HeroResult<StatusCode>
where
    R: HeroRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(path)?;
    DeleteHeroUseCase::new(state.repo.clone()).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
