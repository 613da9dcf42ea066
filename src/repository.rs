use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use crate::{
    entities::{actor, country, genre, language, movie, movie_actor, movie_genre, movie_language},
    error::{AppError, AppResult},
    models::{MovieCreateRequest, MovieUpdateRequest},
    resolver::{self, ResolvedEntities},
};

/// One page of the catalog, newest id first.
pub struct MoviePage {
    pub movies: Vec<movie::Model>,
    pub total_items: u64,
    pub total_pages: u64,
}

/// A movie row with all of its relationships loaded.
pub struct MovieDetail {
    pub movie: movie::Model,
    pub country: country::Model,
    pub genres: Vec<genre::Model>,
    pub actors: Vec<actor::Model>,
    pub languages: Vec<language::Model>,
}

pub async fn list(db: &DatabaseConnection, page: u64, per_page: u64) -> AppResult<MoviePage> {
    let paginator =
        movie::Entity::find().order_by_desc(movie::Column::Id).paginate(db, per_page);
    let total_items = paginator.num_items().await?;
    let total_pages = total_items.div_ceil(per_page);
    let movies = paginator.fetch_page(page - 1).await?;
    Ok(MoviePage { movies, total_items, total_pages })
}

/// Inserts the movie plus its join rows in one transaction, resolving the
/// related entities along the way. The whole request rolls back on failure.
pub async fn create(
    db: &DatabaseConnection,
    req: &MovieCreateRequest,
) -> AppResult<(movie::Model, ResolvedEntities)> {
    let date = req.date.to_string();

    let txn = db.begin().await?;

    let duplicate = movie::Entity::find()
        .filter(movie::Column::Name.eq(&req.name))
        .filter(movie::Column::Date.eq(&date))
        .one(&txn)
        .await?;
    if duplicate.is_some() {
        return Err(AppError::DuplicateMovie { name: req.name.clone(), date });
    }

    let resolved = resolver::resolve(&txn, req).await?;

    let created = movie::ActiveModel {
        name: Set(req.name.clone()),
        date: Set(date),
        score: Set(req.score),
        overview: Set(req.overview.clone()),
        status: Set(req.status),
        budget: Set(req.budget),
        revenue: Set(req.revenue),
        country_id: Set(Some(resolved.country.id)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for g in &resolved.genres {
        movie_genre::Entity::insert(movie_genre::ActiveModel {
            movie_id: Set(created.id),
            genre_id: Set(g.id),
        })
        .exec_without_returning(&txn)
        .await?;
    }

    for a in &resolved.actors {
        movie_actor::Entity::insert(movie_actor::ActiveModel {
            movie_id: Set(created.id),
            actor_id: Set(a.id),
        })
        .exec_without_returning(&txn)
        .await?;
    }

    for l in &resolved.languages {
        movie_language::Entity::insert(movie_language::ActiveModel {
            movie_id: Set(created.id),
            language_id: Set(l.id),
        })
        .exec_without_returning(&txn)
        .await?;
    }

    txn.commit().await?;

    info!(id = created.id, name = %created.name, "created movie");
    Ok((created, resolved))
}

pub async fn get(db: &DatabaseConnection, id: i32) -> AppResult<Option<MovieDetail>> {
    let Some(found) = movie::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let country = found
        .find_related(country::Entity)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("movie {} has no country row", found.id))?;

    let genres = found
        .find_related(genre::Entity)
        .order_by_asc(genre::Column::Id)
        .all(db)
        .await?;
    let actors = found
        .find_related(actor::Entity)
        .order_by_asc(actor::Column::Id)
        .all(db)
        .await?;
    let languages = found
        .find_related(language::Entity)
        .order_by_asc(language::Column::Id)
        .all(db)
        .await?;

    Ok(Some(MovieDetail { movie: found, country, genres, actors, languages }))
}

/// Applies only the supplied fields. A request with no fields set is a
/// successful no-op.
pub async fn update(db: &DatabaseConnection, id: i32, req: &MovieUpdateRequest) -> AppResult<()> {
    let Some(existing) = movie::Entity::find_by_id(id).one(db).await? else {
        return Err(AppError::MovieNotFound);
    };

    let mut am: movie::ActiveModel = existing.into();
    let mut changed = false;

    if let Some(name) = &req.name {
        am.name = Set(name.clone());
        changed = true;
    }
    if let Some(date) = req.date {
        am.date = Set(date.to_string());
        changed = true;
    }
    if let Some(score) = req.score {
        am.score = Set(score);
        changed = true;
    }
    if let Some(overview) = &req.overview {
        am.overview = Set(overview.clone());
        changed = true;
    }
    if let Some(status) = req.status {
        am.status = Set(status);
        changed = true;
    }
    if let Some(budget) = req.budget {
        am.budget = Set(budget);
        changed = true;
    }
    if let Some(revenue) = req.revenue {
        am.revenue = Set(revenue);
        changed = true;
    }

    if changed {
        am.update(db).await?;
        info!(id = id, "updated movie");
    }

    Ok(())
}

/// Removes the movie and its join rows; shared genre/actor/language/country
/// rows stay behind for other movies.
pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    if movie::Entity::find_by_id(id).one(db).await?.is_none() {
        return Err(AppError::MovieNotFound);
    }

    let txn = db.begin().await?;

    movie_genre::Entity::delete_many()
        .filter(movie_genre::Column::MovieId.eq(id))
        .exec(&txn)
        .await?;
    movie_actor::Entity::delete_many()
        .filter(movie_actor::Column::MovieId.eq(id))
        .exec(&txn)
        .await?;
    movie_language::Entity::delete_many()
        .filter(movie_language::Column::MovieId.eq(id))
        .exec(&txn)
        .await?;
    movie::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;

    info!(id = id, "deleted movie");
    Ok(())
}
