use std::{collections::BTreeMap, io::Read, path::Path};

use csv::StringRecord;
use tracing::{debug, info};

use crate::{catalog::CatalogError, models::Movie};

const REQUIRED_COLUMNS: [&str; 6] =
    ["id", "title", "genres", "original_language", "popularity", "poster_path"];

struct Columns {
    id: usize,
    title: usize,
    genres: usize,
    original_language: usize,
    popularity: usize,
    poster_path: usize,
    extra: Vec<(usize, String)>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, CatalogError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(CatalogError::MissingColumn(name))
        };

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !REQUIRED_COLUMNS.contains(&h.trim()))
            .map(|(idx, h)| (idx, h.trim().to_string()))
            .collect();

        Ok(Self {
            id: find("id")?,
            title: find("title")?,
            genres: find("genres")?,
            original_language: find("original_language")?,
            popularity: find("popularity")?,
            poster_path: find("poster_path")?,
            extra,
        })
    }

    fn movie(&self, record: &StringRecord, row: u64) -> Result<Movie, CatalogError> {
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let raw_id = cell(self.id).trim();
        let id = raw_id.parse::<i64>().map_err(|_| CatalogError::InvalidField {
            row,
            column: "id",
            value: raw_id.to_string(),
        })?;

        let raw_popularity = cell(self.popularity).trim();
        let popularity = if raw_popularity.is_empty() {
            0.0
        } else {
            let value = raw_popularity.parse::<f64>().map_err(|_| CatalogError::InvalidField {
                row,
                column: "popularity",
                value: raw_popularity.to_string(),
            })?;
            // NaN and infinities would break the popularity order.
            if value.is_finite() {
                value
            } else {
                debug!(row, value = raw_popularity, "non-finite popularity read as 0");
                0.0
            }
        };

        let extra: BTreeMap<String, String> = self
            .extra
            .iter()
            .map(|(idx, name)| (name.clone(), cell(*idx).to_string()))
            .collect();

        Ok(Movie {
            id,
            title: cell(self.title).to_string(),
            genres: cell(self.genres).to_string(),
            original_language: cell(self.original_language).to_string(),
            popularity,
            poster_path: cell(self.poster_path).to_string(),
            extra,
        })
    }
}

pub fn load_path(path: &Path) -> Result<Vec<Movie>, CatalogError> {
    info!(path = %path.display(), "loading catalog");
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    load_reader(file)
}

pub fn load_reader<R: Read>(reader: R) -> Result<Vec<Movie>, CatalogError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut movies = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let row = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 2);
        movies.push(columns.movie(&record, row)?);
    }

    debug!(rows = movies.len(), extra_columns = columns.extra.len(), "parsed catalog rows");

    if movies.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(movies)
}
