use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_POSTER_BASE: &str = "https://image.tmdb.org/t/p/w780";
pub const DEFAULT_POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// One row of the catalog. Columns the service does not interpret are kept
/// verbatim in `extra`.
#[derive(Clone, Debug, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genres: String,
    pub original_language: String,
    pub popularity: f64,
    pub poster_path: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Movie {
    pub fn extra(&self, column: &str) -> Option<&str> {
        self.extra.get(column).map(String::as_str).filter(|v| !v.trim().is_empty())
    }

    /// `vote_average`, or 0 when missing or not a finite number.
    pub fn rating(&self) -> f64 {
        self.extra("vote_average")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// ISO `YYYY-MM-DD`, so it orders lexically. Empty when unknown.
    pub fn release_date(&self) -> &str {
        self.extra("release_date").map(str::trim).unwrap_or("")
    }

    pub fn genre_list(&self) -> Vec<&str> {
        self.genres
            .split([',', '|'])
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct PosterUrls {
    pub base: String,
    pub placeholder: String,
}

impl Default for PosterUrls {
    fn default() -> Self {
        Self {
            base: DEFAULT_POSTER_BASE.to_string(),
            placeholder: DEFAULT_POSTER_PLACEHOLDER.to_string(),
        }
    }
}

impl PosterUrls {
    pub fn full_url(&self, poster_path: &str) -> String {
        let path = poster_path.trim();
        if path.is_empty() {
            self.placeholder.clone()
        } else {
            format!("{}{}", self.base, path)
        }
    }

    pub fn decorate<'a>(&self, movie: &'a Movie) -> DecoratedMovie<'a> {
        DecoratedMovie { poster_full: self.full_url(&movie.poster_path), movie }
    }
}

/// A catalog row plus its display-ready poster URL.
#[derive(Clone, Debug, Serialize)]
pub struct DecoratedMovie<'a> {
    #[serde(flatten)]
    pub movie: &'a Movie,
    pub poster_full: String,
}

/// Mood presets and the genres each one stands for.
pub const MOODS: [(&str, &[&str]); 6] = [
    ("romantic", &["Romance", "Drama"]),
    ("happy", &["Comedy", "Animation", "Family", "Music"]),
    ("sad", &["Drama", "Romance"]),
    ("adventure", &["Adventure", "Action", "Fantasy"]),
    ("thriller", &["Thriller", "Mystery", "Horror"]),
    ("comedy", &["Comedy", "Romance"]),
];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortBy {
    #[default]
    Popularity,
    Rating,
    Date,
    Title,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::Popularity, SortBy::Rating, SortBy::Date, SortBy::Title];

    /// Unknown or missing values keep the popularity order.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("rating") => SortBy::Rating,
            Some("date") => SortBy::Date,
            Some("title") => SortBy::Title,
            _ => SortBy::Popularity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Popularity => "popularity",
            SortBy::Rating => "rating",
            SortBy::Date => "date",
            SortBy::Title => "title",
        }
    }
}

/// Listing criteria: predicates that narrow the catalog plus the order.
#[derive(Clone, Debug, Default)]
pub struct MovieFilters {
    pub genre: Option<String>,
    pub language: Option<String>,
    pub search: Option<String>,
    pub mood: Option<String>,
    pub sort: SortBy,
}

impl MovieFilters {
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// The recognised mood, if any. Unknown moods do not filter.
    pub fn mood(&self) -> Option<&'static str> {
        self.mood_entry().map(|(name, _)| name)
    }

    pub fn mood_genres(&self) -> Option<&'static [&'static str]> {
        self.mood_entry().map(|(_, genres)| genres)
    }

    fn mood_entry(&self) -> Option<(&'static str, &'static [&'static str])> {
        let wanted = self.mood.as_deref()?.trim();
        MOODS.iter().copied().find(|(name, _)| name.eq_ignore_ascii_case(wanted))
    }
}

/// Query string of the listing endpoints. `page` stays raw text so that
/// garbage input falls back to the first page instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub search: Option<String>,
    pub mood: Option<String>,
    #[serde(alias = "sortBy")]
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn filters(&self) -> MovieFilters {
        MovieFilters {
            genre: self.genre.clone(),
            language: self.language.clone(),
            search: self.search.clone(),
            mood: self.mood.clone(),
            sort: SortBy::parse(self.sort.as_deref()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub from_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoviePage<'a> {
    pub movies: Vec<DecoratedMovie<'a>>,
    pub page: i64,
    pub total_pages: usize,
    pub total_results: usize,
}
