//! Catalog loading
//!
//! Reads the anime catalog CSV and turns rows into validated `Anime`
//! records. Rows missing critical fields are dropped; numeric fields are
//! coerced with defaults; a single bad row never aborts the batch.

use std::path::Path;

use csv::StringRecord;
use tracing::{info, warn};

use anr_domain::error::{Error, Result};
use anr_domain::value_objects::Anime;

/// Column positions resolved from the CSV header row
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    anime_id: usize,
    name: usize,
    genres: usize,
    anime_type: Option<usize>,
    episodes: Option<usize>,
    rating: Option<usize>,
    members: Option<usize>,
    synopsis: Option<usize>,
}

impl ColumnMap {
    /// Resolve columns from headers, accepting both historical namings
    /// (`genre`/`genres`, `type`/`anime_type`).
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
        };

        let anime_id = position(&["anime_id", "id"])
            .ok_or_else(|| Error::validation("CSV is missing an 'anime_id' column"))?;
        let name =
            position(&["name"]).ok_or_else(|| Error::validation("CSV is missing a 'name' column"))?;
        let genres = position(&["genre", "genres"])
            .ok_or_else(|| Error::validation("CSV is missing a 'genre' column"))?;

        Ok(Self {
            anime_id,
            name,
            genres,
            anime_type: position(&["type", "anime_type"]),
            episodes: position(&["episodes"]),
            rating: position(&["rating"]),
            members: position(&["members"]),
            synopsis: position(&["synopsis", "description"]),
        })
    }
}

/// Parse one CSV row into an `Anime` record
///
/// Critical fields (id, name, genres) must be present and valid; numeric
/// fields fall back to 0 / 0.0 on parse failure rather than failing the
/// row.
fn parse_row(record: &StringRecord, columns: &ColumnMap) -> Result<Anime> {
    let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or_default();

    let anime_id: u32 = field(columns.anime_id)
        .parse()
        .map_err(|_| Error::validation(format!("Invalid anime_id '{}'", field(columns.anime_id))))?;

    let name = field(columns.name);
    if name.is_empty() {
        return Err(Error::validation(format!(
            "Row for anime_id {anime_id} has an empty name"
        )));
    }

    let raw_genres = field(columns.genres);
    if raw_genres.is_empty() {
        return Err(Error::validation(format!(
            "Row for anime_id {anime_id} has no genres"
        )));
    }
    let genres: Vec<String> = raw_genres
        .split(',')
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect();

    let opt_field = |idx: Option<usize>| idx.map(field).unwrap_or_default();

    // Invalid numbers coerce to neutral defaults, they never drop the row
    let episodes: u32 = opt_field(columns.episodes).parse().unwrap_or(0);
    let rating: f32 = opt_field(columns.rating).parse().unwrap_or(0.0);
    let members: u64 = opt_field(columns.members).parse().unwrap_or(0);

    let synopsis = columns
        .synopsis
        .map(field)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string);

    Ok(Anime {
        anime_id,
        name: name.to_string(),
        genres,
        anime_type: {
            let t = opt_field(columns.anime_type);
            if t.is_empty() { "Unknown" } else { t }.to_string()
        },
        episodes,
        rating,
        members,
        synopsis,
    })
}

/// Load and validate the anime catalog from a CSV file
///
/// Skip-and-log per row: validation failures are logged at warn level and
/// the row is dropped; only a missing file or an unreadable header aborts
/// the load.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Anime>> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading catalog data");

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::io(format!("Failed to open catalog file {}: {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::validation(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut animes = Vec::new();
    let mut skipped = 0usize;

    for (row, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!(row = row + 2, error = %err, "Skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        match parse_row(&record, &columns) {
            Ok(anime) => animes.push(anime),
            Err(err) => {
                warn!(row = row + 2, error = %err, "Skipping row with validation failure");
                skipped += 1;
            }
        }
    }

    info!(
        loaded = animes.len(),
        skipped, "Catalog load complete"
    );
    Ok(animes)
}
