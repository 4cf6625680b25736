//! JSON store file reading and writing.
//!
//! The store is a single JSON document `{"recipes": [...]}`. Every save
//! rewrites the whole document; there is no locking and no incremental
//! update.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::ingredient::{object_list, require_object};
use crate::recipe::RecipeRecord;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The whole store document.
///
/// A missing `recipes` key reads as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreFile {
    /// Recipes in cookbook order.
    #[serde(default, deserialize_with = "object_list")]
    pub recipes: Vec<RecipeRecord>,
}

/// Store document with entries left undecoded, so each recipe can be
/// checked on its own.
#[derive(Debug, Deserialize)]
struct RawStoreFile {
    #[serde(default)]
    recipes: Vec<serde_json::Value>,
}

/// Reads the raw recipe entries from the store.
///
/// Returns `Ok(None)` when the file does not exist.
pub(crate) fn read_entries(path: &Path) -> CoreResult<Option<Vec<serde_json::Value>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(CoreError::storage(path, e)),
    };

    let document: serde_json::Value = serde_json::from_str(&contents)?;
    require_object("store", &document)?;
    let raw: RawStoreFile = serde_json::from_value(document)?;
    debug!(
        path = %path.display(),
        entries = raw.recipes.len(),
        "read store"
    );
    Ok(Some(raw.recipes))
}

/// Writes the whole store document to `path`.
pub(crate) fn write_store(path: &Path, store: &StoreFile, config: &Config) -> CoreResult<()> {
    let mut encoded = if config.pretty {
        serde_json::to_vec_pretty(store)?
    } else {
        serde_json::to_vec(store)?
    };
    encoded.push(b'\n');

    if config.create_parent_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CoreError::storage(parent, e))?;
        }
    }

    if config.atomic_writes {
        write_atomic(path, &encoded)?;
    } else {
        fs::write(path, &encoded).map_err(|e| CoreError::storage(path, e))?;
    }

    debug!(
        path = %path.display(),
        recipes = store.recipes.len(),
        bytes = encoded.len(),
        "wrote store"
    );
    Ok(())
}

/// Writes to a sibling temp file, syncs it, then renames it over `path`.
fn write_atomic(path: &Path, data: &[u8]) -> CoreResult<()> {
    let temp_path = temp_path_for(path);

    if let Err(e) = write_and_rename(&temp_path, path, data) {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            if cleanup.kind() != io::ErrorKind::NotFound {
                warn!(path = %temp_path.display(), error = %cleanup, "failed to remove temp file");
            }
        }
        return Err(CoreError::storage(path, e));
    }
    Ok(())
}

fn write_and_rename(temp_path: &Path, path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(temp_path, path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "cookbook.json".into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
