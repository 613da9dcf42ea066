use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use jiff::civil::Date;
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{
        MAX_PER_PAGE, MovieCreateRequest, MovieDetailResponse, MovieListResponse,
        MovieUpdateRequest, MovieUpdatedResponse,
    },
    repository,
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    page: u64,
    #[serde(default = "default_per_page")]
    per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Json<MovieListResponse>> {
    let Query(params) = params.map_err(|_| AppError::Validation)?;
    if params.page < 1 || params.per_page < 1 || params.per_page > MAX_PER_PAGE {
        return Err(AppError::Validation);
    }

    let page = repository::list(&state.db, params.page, params.per_page).await?;
    if page.movies.is_empty() {
        return Err(AppError::NoMoviesFound);
    }

    let movies = page.movies.into_iter().map(Into::into).collect();
    Ok(Json(MovieListResponse::new(
        movies,
        params.page,
        params.per_page,
        page.total_items,
        page.total_pages,
    )))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MovieCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(mut req) = payload.map_err(|_| AppError::Validation)?;
    req.normalize();

    let today: Date = jiff::Zoned::now().into();
    req.validate(today)?;

    let (created, resolved) = repository::create(&state.db, &req).await?;
    let body = MovieDetailResponse::from_parts(
        created,
        resolved.country,
        resolved.genres,
        resolved.actors,
        resolved.languages,
    );
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<MovieDetailResponse>> {
    let Path(id) = id.map_err(|_| AppError::Validation)?;

    let detail = repository::get(&state.db, id).await?.ok_or(AppError::MovieNotFound)?;
    Ok(Json(MovieDetailResponse::from_parts(
        detail.movie,
        detail.country,
        detail.genres,
        detail.actors,
        detail.languages,
    )))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MovieUpdateRequest>, JsonRejection>,
) -> AppResult<Json<MovieUpdatedResponse>> {
    let Path(id) = id.map_err(|_| AppError::Validation)?;
    let Json(req) = payload.map_err(|_| AppError::Validation)?;

    let today: Date = jiff::Zoned::now().into();
    req.validate(today)?;

    repository::update(&state.db, id, &req).await?;
    Ok(Json(MovieUpdatedResponse::default()))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id.map_err(|_| AppError::Validation)?;

    repository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
