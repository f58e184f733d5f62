//! # Stallion Core
//!
//! Shared pieces of the MMSU Stallion student portal:
//! - the persisted [`UserProfile`] and its merge updates ([`ProfileUpdate`])
//! - a swappable [`KeyValueStore`] with file and in-memory backends
//! - [`ProfileStore`], which loads the profile fail-soft and saves it whole
//! - the `info!`/`pt!`/`err!` logging macros

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

mod error;
pub mod print;
pub mod profile;
pub mod profile_store;
pub mod store;

pub use error::{IntoIoError, IntoJsonError, Result, StoreError};
pub use profile::{College, ProfileUpdate, Theme, UserProfile, CAMPUSES};
pub use profile_store::{ProfileStore, PROFILE_BACKUP_KEY, PROFILE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};

pub const PORTAL_NAME: &str = "MMSU Stallion";
pub const PORTAL_VERSION_NAME: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// The default portal directory, `<data dir>/MMSUStallion`.
///
/// `None` if the platform has no notion of a per-user data directory.
pub static PORTAL_DIR: LazyLock<Option<PathBuf>> =
    LazyLock::new(|| dirs::data_dir().map(|dir| dir.join("MMSUStallion")));

/// Resolves the portal directory, preferring `overridden` when given,
/// and makes sure it exists.
///
/// # Errors
/// - no data directory could be found and none was given
/// - the directory could not be created
pub fn portal_dir(overridden: Option<&Path>) -> Result<PathBuf> {
    let dir = match overridden {
        Some(dir) => dir.to_owned(),
        None => PORTAL_DIR.clone().ok_or(StoreError::NoDataDir)?,
    };
    std::fs::create_dir_all(&dir).path(&dir)?;
    Ok(dir)
}
