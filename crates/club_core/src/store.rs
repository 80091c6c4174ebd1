//! File persistence for rosters. Saves are atomic: the serialized text is
//! written to a temp file, synced, then renamed over the target, so a crash
//! mid-save never leaves a half-written roster behind.

use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::RosterError;
use crate::roster::RosterManager;

pub struct RosterStore;

impl RosterStore {
    /// Serialize the roster and write it to `path` atomically.
    pub fn save_to_path(path: &Path, roster: &RosterManager) -> Result<(), RosterError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = roster.serialize();
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(data.as_bytes())?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        rename(&temp_path, path)?;

        log::info!("saved {} players to {:?}", roster.len(), path);
        Ok(())
    }

    /// Read `path` and reload the roster from its lines. The roster's prior
    /// contents are replaced. Returns the number of players loaded.
    pub fn load_from_path(path: &Path, roster: &mut RosterManager) -> Result<usize, RosterError> {
        let mut file = File::open(path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        let loaded = roster.load_from_lines(data.lines());
        log::info!("loaded {} players from {:?}", loaded, path);
        Ok(loaded)
    }

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    /// Deletes the roster file if it exists; missing files are not an error.
    pub fn delete(path: &Path) -> Result<(), RosterError> {
        if path.exists() {
            remove_file(path)?;
            log::info!("deleted roster file {:?}", path);
        }
        Ok(())
    }
}
