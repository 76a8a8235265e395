use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, warn};

use crate::models::{DecoratedMovie, Movie, MovieFilters, MoviePage, PosterUrls, SortBy};

pub const PAGE_SIZE: usize = 30;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("movie {0} not found")]
    NotFound(i64),
    #[error("dataset is empty")]
    Empty,
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid {column} value {value:?}")]
    InvalidField { row: u64, column: &'static str, value: String },
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// The movie table, loaded once and never mutated.
#[derive(Debug)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_popularity: Vec<usize>,
    by_id: HashMap<i64, usize>,
    posters: PosterUrls,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, posters: PosterUrls) -> Result<Self, CatalogError> {
        if movies.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = HashMap::with_capacity(movies.len());
        for (idx, movie) in movies.iter().enumerate() {
            if by_id.contains_key(&movie.id) {
                warn!(id = movie.id, "duplicate movie id, keeping first row");
                continue;
            }
            by_id.insert(movie.id, idx);
        }

        // Stable, so equal popularity keeps file order. NaN sorts last.
        let mut by_popularity: Vec<usize> = (0..movies.len()).collect();
        by_popularity.sort_by(|&a, &b| {
            let (a, b) = (movies[a].popularity, movies[b].popularity);
            a.is_nan().cmp(&b.is_nan()).then_with(|| b.total_cmp(&a))
        });

        debug!(movies = movies.len(), "catalog built");

        Ok(Self { movies, by_popularity, by_id, posters })
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn list_movies(&self, filters: &MovieFilters, page: Option<&str>) -> MoviePage<'_> {
        let genre = filters.genre().map(str::to_lowercase);
        let language = filters.language().map(str::to_lowercase);
        let search = filters.search().map(str::to_lowercase);
        let mood = filters.mood_genres();

        let mut matching: Vec<&Movie> = self
            .by_popularity
            .iter()
            .map(|&idx| &self.movies[idx])
            .filter(|m| genre.as_deref().is_none_or(|g| matches_genre(m, g)))
            .filter(|m| language.as_deref().is_none_or(|l| matches_language(m, l)))
            .filter(|m| search.as_deref().is_none_or(|s| matches_search(m, s)))
            .filter(|m| mood.is_none_or(|genres| matches_mood(m, genres)))
            .collect();
        sort_movies(&mut matching, filters.sort);

        let page = resolve_page(page);
        let total_results = matching.len();
        let total_pages = total_results.div_ceil(PAGE_SIZE);

        let start = usize::try_from(page - 1)
            .ok()
            .and_then(|p| p.checked_mul(PAGE_SIZE))
            .unwrap_or(usize::MAX)
            .min(total_results);
        let end = start.saturating_add(PAGE_SIZE).min(total_results);

        let movies = matching[start..end].iter().map(|m| self.posters.decorate(m)).collect();

        MoviePage { movies, page, total_pages, total_results }
    }

    pub fn movie_by_id(&self, id: i64) -> Result<DecoratedMovie<'_>, CatalogError> {
        self.by_id
            .get(&id)
            .map(|&idx| self.posters.decorate(&self.movies[idx]))
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn surprise_me<R: Rng>(&self, rng: &mut R) -> DecoratedMovie<'_> {
        let idx = rng.random_range(0..self.movies.len());
        self.posters.decorate(&self.movies[idx])
    }

    pub fn surprise(&self) -> DecoratedMovie<'_> {
        self.surprise_me(&mut rand::rng())
    }
}

/// Parses the raw `page` parameter. Anything that is not an integer means
/// the first page, and pages below one are clamped to one.
pub fn resolve_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse::<i64>().ok()).unwrap_or(1).max(1)
}

fn matches_genre(movie: &Movie, needle: &str) -> bool {
    !movie.genres.is_empty() && movie.genres.to_lowercase().contains(needle)
}

fn matches_language(movie: &Movie, code: &str) -> bool {
    !movie.original_language.is_empty() && movie.original_language.to_lowercase() == code
}

const SEARCH_COLUMNS: [&str; 4] = ["overview", "original_title", "cast", "director"];

fn matches_search(movie: &Movie, needle: &str) -> bool {
    movie.title.to_lowercase().contains(needle)
        || SEARCH_COLUMNS
            .iter()
            .filter_map(|column| movie.extra(column))
            .any(|text| text.to_lowercase().contains(needle))
}

fn matches_mood(movie: &Movie, genres: &[&str]) -> bool {
    let have = movie.genres.to_lowercase();
    genres.iter().any(|g| have.contains(&g.to_lowercase()))
}

/// Input arrives in popularity order. Every sort here is stable, so ties
/// under another key keep that order.
fn sort_movies(movies: &mut [&Movie], sort: SortBy) {
    match sort {
        SortBy::Popularity => {},
        SortBy::Rating => movies.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
        SortBy::Date => movies.sort_by(|a, b| b.release_date().cmp(a.release_date())),
        SortBy::Title => movies.sort_by_cached_key(|m| m.title.to_lowercase()),
    }
}
