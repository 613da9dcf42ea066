use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{actor, country, genre, language, movie, movie::MovieStatus},
    error::{AppError, AppResult},
};

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_PER_PAGE: u64 = 20;

#[derive(Debug, Deserialize)]
pub struct MovieCreateRequest {
    pub name: String,
    pub date: Date,
    pub score: f64,
    pub overview: String,
    pub status: MovieStatus,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub languages: Vec<String>,
}

impl MovieCreateRequest {
    /// Uppercases the country code and title-cases the related entity names
    /// so natural-key lookups are case-insensitive from the caller's view.
    pub fn normalize(&mut self) {
        self.country = self.country.trim().to_uppercase();
        for list in [&mut self.genres, &mut self.actors, &mut self.languages] {
            for name in list.iter_mut() {
                *name = title_case(name.trim());
            }
        }
    }

    pub fn validate(&self, today: Date) -> AppResult<()> {
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::Validation);
        }
        validate_date(self.date, today)?;
        validate_score(self.score)?;
        validate_money(self.budget)?;
        validate_money(self.revenue)?;
        if self.country.len() != 3 || !self.country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::Validation);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MovieUpdateRequest {
    pub name: Option<String>,
    pub date: Option<Date>,
    pub score: Option<f64>,
    pub overview: Option<String>,
    pub status: Option<MovieStatus>,
    pub budget: Option<f64>,
    pub revenue: Option<f64>,
}

impl MovieUpdateRequest {
    pub fn validate(&self, today: Date) -> AppResult<()> {
        if let Some(name) = &self.name {
            if name.chars().count() > MAX_NAME_LEN {
                return Err(AppError::Validation);
            }
        }
        if let Some(date) = self.date {
            validate_date(date, today)?;
        }
        if let Some(score) = self.score {
            validate_score(score)?;
        }
        if let Some(budget) = self.budget {
            validate_money(budget)?;
        }
        if let Some(revenue) = self.revenue {
            validate_money(revenue)?;
        }
        Ok(())
    }
}

fn validate_date(date: Date, today: Date) -> AppResult<()> {
    if date.year() > today.year() + 1 {
        return Err(AppError::Validation);
    }
    Ok(())
}

fn validate_score(score: f64) -> AppResult<()> {
    if !(0.0..=100.0).contains(&score) {
        return Err(AppError::Validation);
    }
    Ok(())
}

fn validate_money(amount: f64) -> AppResult<()> {
    if amount < 0.0 {
        return Err(AppError::Validation);
    }
    Ok(())
}

/// Word-wise title casing: the first alphabetic character of each run is
/// uppercased, the rest lowercased. Non-alphabetic characters end a run.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub id: i32,
    pub code: String,
    pub name: Option<String>,
}

impl From<country::Model> for CountryResponse {
    fn from(m: country::Model) -> Self {
        Self { id: m.id, code: m.code, name: m.name }
    }
}

#[derive(Debug, Serialize)]
pub struct NamedEntityResponse {
    pub id: i32,
    pub name: String,
}

impl From<genre::Model> for NamedEntityResponse {
    fn from(m: genre::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

impl From<actor::Model> for NamedEntityResponse {
    fn from(m: actor::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

impl From<language::Model> for NamedEntityResponse {
    fn from(m: language::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    pub id: i32,
    pub name: String,
    pub date: String,
    pub score: f64,
    pub overview: String,
    pub status: MovieStatus,
    pub budget: f64,
    pub revenue: f64,
    pub country: CountryResponse,
    pub genres: Vec<NamedEntityResponse>,
    pub actors: Vec<NamedEntityResponse>,
    pub languages: Vec<NamedEntityResponse>,
}

impl MovieDetailResponse {
    pub fn from_parts(
        movie: movie::Model,
        country: country::Model,
        genres: Vec<genre::Model>,
        actors: Vec<actor::Model>,
        languages: Vec<language::Model>,
    ) -> Self {
        Self {
            id: movie.id,
            name: movie.name,
            date: movie.date,
            score: movie.score,
            overview: movie.overview,
            status: movie.status,
            budget: movie.budget,
            revenue: movie.revenue,
            country: country.into(),
            genres: genres.into_iter().map(Into::into).collect(),
            actors: actors.into_iter().map(Into::into).collect(),
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieListItemResponse {
    pub id: i32,
    pub name: String,
    pub date: String,
    pub score: f64,
    pub overview: String,
}

impl From<movie::Model> for MovieListItemResponse {
    fn from(m: movie::Model) -> Self {
        Self { id: m.id, name: m.name, date: m.date, score: m.score, overview: m.overview }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieUpdatedResponse {
    pub detail: String,
}

impl Default for MovieUpdatedResponse {
    fn default() -> Self {
        Self { detail: "Movie updated successfully.".to_string() }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<MovieListItemResponse>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: u64,
    pub total_items: u64,
}

impl MovieListResponse {
    pub fn new(
        movies: Vec<MovieListItemResponse>,
        page: u64,
        per_page: u64,
        total_items: u64,
        total_pages: u64,
    ) -> Self {
        let prev_page = (page > 1).then(|| page_url(page - 1, per_page));
        let next_page = (page * per_page < total_items).then(|| page_url(page + 1, per_page));
        Self { movies, prev_page, next_page, total_pages, total_items }
    }
}

fn page_url(page: u64, per_page: u64) -> String {
    format!("/movies/?page={page}&per_page={per_page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> MovieCreateRequest {
        MovieCreateRequest {
            name: "Inception".to_string(),
            date: Date::constant(2010, 7, 16),
            score: 8.8,
            overview: "A thief who steals corporate secrets.".to_string(),
            status: MovieStatus::Released,
            budget: 160_000_000.0,
            revenue: 829_895_144.0,
            country: "USA".to_string(),
            genres: vec!["Action".to_string()],
            actors: vec!["Leonardo Dicaprio".to_string()],
            languages: vec!["English".to_string()],
        }
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("leonardo dicaprio"), "Leonardo Dicaprio");
        assert_eq!(title_case("SCIENCE FICTION"), "Science Fiction");
        assert_eq!(title_case("rock'n'roll"), "Rock'N'Roll");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn normalize_uppercases_country_and_title_cases_names() {
        let mut req = create_request();
        req.country = "usa".to_string();
        req.genres = vec!["science fiction".to_string()];
        req.normalize();
        assert_eq!(req.country, "USA");
        assert_eq!(req.genres, vec!["Science Fiction".to_string()]);
    }

    #[test]
    fn create_request_accepts_valid_fields() {
        let today = Date::constant(2024, 6, 1);
        assert!(create_request().validate(today).is_ok());
    }

    #[test]
    fn create_request_rejects_out_of_range_fields() {
        let today = Date::constant(2024, 6, 1);

        let mut req = create_request();
        req.score = 150.0;
        assert!(req.validate(today).is_err());

        let mut req = create_request();
        req.budget = -1.0;
        assert!(req.validate(today).is_err());

        let mut req = create_request();
        req.name = "x".repeat(256);
        assert!(req.validate(today).is_err());

        let mut req = create_request();
        req.country = "US".to_string();
        assert!(req.validate(today).is_err());
    }

    #[test]
    fn release_date_may_be_at_most_one_year_ahead() {
        let today = Date::constant(2024, 6, 1);

        let mut req = create_request();
        req.date = Date::constant(2025, 12, 31);
        assert!(req.validate(today).is_ok());

        req.date = Date::constant(2026, 1, 1);
        assert!(req.validate(today).is_err());
    }

    #[test]
    fn update_request_validates_only_supplied_fields() {
        let today = Date::constant(2024, 6, 1);

        let req = MovieUpdateRequest::default();
        assert!(req.validate(today).is_ok());

        let req = MovieUpdateRequest { score: Some(150.0), ..Default::default() };
        assert!(req.validate(today).is_err());

        let req = MovieUpdateRequest { revenue: Some(-0.5), ..Default::default() };
        assert!(req.validate(today).is_err());
    }

    #[test]
    fn list_response_links_follow_page_position() {
        let resp = MovieListResponse::new(Vec::new(), 2, 10, 25, 3);
        assert_eq!(resp.prev_page.as_deref(), Some("/movies/?page=1&per_page=10"));
        assert_eq!(resp.next_page.as_deref(), Some("/movies/?page=3&per_page=10"));

        let resp = MovieListResponse::new(Vec::new(), 1, 10, 25, 3);
        assert_eq!(resp.prev_page, None);
        assert!(resp.next_page.is_some());

        let resp = MovieListResponse::new(Vec::new(), 3, 10, 25, 3);
        assert_eq!(resp.next_page, None);

        // page * per_page == total_items is the last page
        let resp = MovieListResponse::new(Vec::new(), 2, 10, 20, 2);
        assert_eq!(resp.next_page, None);
    }

    #[test]
    fn status_serializes_with_spaces() {
        let json = serde_json::to_string(&MovieStatus::PostProduction).unwrap();
        assert_eq!(json, "\"Post Production\"");
        let back: MovieStatus = serde_json::from_str("\"In Production\"").unwrap();
        assert_eq!(back, MovieStatus::InProduction);
    }
}
