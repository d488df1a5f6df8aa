//! Resume state: the article URLs already written to an output directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use harvest_engine::{ensure_output_dir, AtomicFileWriter};
use harvest_log::{harvest_error, harvest_info, harvest_warn};
use serde::{Deserialize, Serialize};

pub(crate) const STATE_FILENAME: &str = ".harvest_state.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    completed: Vec<String>,
}

/// Missing or unreadable state means a fresh start.
pub(crate) fn load_completed_urls(output_dir: &Path) -> BTreeSet<String> {
    let path = output_dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeSet::new();
        }
        Err(err) => {
            harvest_warn!("Failed to read persisted state from {:?}: {}", path, err);
            return BTreeSet::new();
        }
    };

    let state: PersistedState = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            harvest_warn!("Failed to parse persisted state from {:?}: {}", path, err);
            return BTreeSet::new();
        }
    };

    harvest_info!(
        "Loaded {} previously harvested urls from {:?}",
        state.completed.len(),
        path
    );
    state.completed.into_iter().collect()
}

pub(crate) fn save_completed_urls(output_dir: &Path, completed: &BTreeSet<String>) {
    if let Err(err) = ensure_output_dir(output_dir) {
        harvest_error!("Failed to ensure output dir {:?}: {}", output_dir, err);
        return;
    }

    let state = PersistedState {
        completed: completed.iter().cloned().collect(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&state, pretty) {
        Ok(text) => text,
        Err(err) => {
            harvest_error!("Failed to serialize persisted state: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(output_dir));
    if let Err(err) = writer.write(STATE_FILENAME, &content) {
        harvest_error!(
            "Failed to write persisted state to {:?}: {}",
            output_dir,
            err
        );
    }
}
