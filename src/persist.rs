//! Read-only persistence: the family dataset lives in a single JSON file,
//! edited out-of-band. There is no write path from the application.
//!
//! Loading degrades rather than fails: a missing or malformed file yields
//! an empty dataset, with a warning in the log. Legacy files using the
//! singular `generation` key are accepted (see [`crate::model::FamilyData`]).

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::model::FamilyData;

/// Load the dataset from `path`, degrading to an empty dataset on any
/// read or parse failure.
pub fn load_family_data(path: &Path) -> FamilyData {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "family data file unreadable, using empty dataset");
            return FamilyData::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "family data file malformed, using empty dataset");
            FamilyData::default()
        }
    }
}
