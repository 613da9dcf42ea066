use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use tracing::debug;

use crate::{
    entities::{actor, country, genre, language},
    error::AppResult,
    models::MovieCreateRequest,
};

/// Rows a creation request refers to by natural key, looked up or freshly
/// inserted. List order follows the request; duplicate names collapse onto
/// the first occurrence.
pub struct ResolvedEntities {
    pub country: country::Model,
    pub genres: Vec<genre::Model>,
    pub actors: Vec<actor::Model>,
    pub languages: Vec<language::Model>,
}

pub async fn resolve<C: ConnectionTrait>(
    conn: &C,
    req: &MovieCreateRequest,
) -> AppResult<ResolvedEntities> {
    let country = find_or_create_country(conn, &req.country).await?;

    let mut genres: Vec<genre::Model> = Vec::with_capacity(req.genres.len());
    for name in &req.genres {
        if genres.iter().any(|g| g.name == *name) {
            continue;
        }
        genres.push(find_or_create_genre(conn, name).await?);
    }

    let mut actors: Vec<actor::Model> = Vec::with_capacity(req.actors.len());
    for name in &req.actors {
        if actors.iter().any(|a| a.name == *name) {
            continue;
        }
        actors.push(find_or_create_actor(conn, name).await?);
    }

    let mut languages: Vec<language::Model> = Vec::with_capacity(req.languages.len());
    for name in &req.languages {
        if languages.iter().any(|l| l.name == *name) {
            continue;
        }
        languages.push(find_or_create_language(conn, name).await?);
    }

    Ok(ResolvedEntities { country, genres, actors, languages })
}

async fn find_or_create_country<C: ConnectionTrait>(
    conn: &C,
    code: &str,
) -> AppResult<country::Model> {
    let existing = country::Entity::find()
        .filter(country::Column::Code.eq(code))
        .one(conn)
        .await?;
    if let Some(found) = existing {
        return Ok(found);
    }

    debug!(code = %code, "creating country");
    let created = country::ActiveModel { code: Set(code.to_string()), ..Default::default() }
        .insert(conn)
        .await?;
    Ok(created)
}

async fn find_or_create_genre<C: ConnectionTrait>(conn: &C, name: &str) -> AppResult<genre::Model> {
    let existing =
        genre::Entity::find().filter(genre::Column::Name.eq(name)).one(conn).await?;
    if let Some(found) = existing {
        return Ok(found);
    }

    debug!(name = %name, "creating genre");
    let created = genre::ActiveModel { name: Set(name.to_string()), ..Default::default() }
        .insert(conn)
        .await?;
    Ok(created)
}

async fn find_or_create_actor<C: ConnectionTrait>(conn: &C, name: &str) -> AppResult<actor::Model> {
    let existing =
        actor::Entity::find().filter(actor::Column::Name.eq(name)).one(conn).await?;
    if let Some(found) = existing {
        return Ok(found);
    }

    debug!(name = %name, "creating actor");
    let created = actor::ActiveModel { name: Set(name.to_string()), ..Default::default() }
        .insert(conn)
        .await?;
    Ok(created)
}

async fn find_or_create_language<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> AppResult<language::Model> {
    let existing =
        language::Entity::find().filter(language::Column::Name.eq(name)).one(conn).await?;
    if let Some(found) = existing {
        return Ok(found);
    }

    debug!(name = %name, "creating language");
    let created = language::ActiveModel { name: Set(name.to_string()), ..Default::default() }
        .insert(conn)
        .await?;
    Ok(created)
}
