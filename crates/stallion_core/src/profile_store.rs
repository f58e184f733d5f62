use crate::{err, info, IntoJsonError, KeyValueStore, Result, UserProfile};

/// The key the profile is stored under.
pub const PROFILE_KEY: &str = "mmsu_stallion_profile";
/// Where an unreadable profile is copied before it gets replaced.
pub const PROFILE_BACKUP_KEY: &str = "mmsu_stallion_profile.bak";

/// Loads and saves the [`UserProfile`] through any [`KeyValueStore`].
#[derive(Debug)]
pub struct ProfileStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the stored profile.
    ///
    /// This is designed to *not* fail on bad data: a missing profile
    /// gives [`UserProfile::default`], and so does a corrupted one
    /// (after backing it up to [`PROFILE_BACKUP_KEY`] with an error log).
    /// Fields missing from otherwise valid JSON take their defaults.
    ///
    /// # Errors
    /// Only if the underlying store can't be read.
    pub fn load(&mut self) -> Result<UserProfile> {
        let Some(saved) = self.store.get(PROFILE_KEY)? else {
            info!("No saved profile, starting as guest");
            return Ok(UserProfile::default());
        };
        if saved.trim().is_empty() {
            return Ok(UserProfile::default());
        }

        match parse_profile(&saved) {
            Ok(profile) => Ok(profile),
            Err(error) => {
                err!("Invalid saved profile, resetting to defaults. This may be a sign of corruption!\nError: {error}");
                if let Err(backup_err) = self.store.set(PROFILE_BACKUP_KEY, &saved) {
                    err!("Could not back up the old profile: {backup_err}");
                }
                Ok(UserProfile::default())
            }
        }
    }

    /// Serializes the whole profile and replaces the stored value.
    ///
    /// # Errors
    /// If the store rejects the write.
    pub fn save(&mut self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile).json_to()?;
        self.store.set(PROFILE_KEY, &json)
    }

    /// Forgets the stored profile; the next [`ProfileStore::load`]
    /// starts from the default.
    ///
    /// # Errors
    /// If the store rejects the removal.
    pub fn reset(&mut self) -> Result<()> {
        self.store.remove(PROFILE_KEY)
    }

    /// The raw stored value, if any.
    ///
    /// # Errors
    /// If the store can't be read.
    pub fn raw(&self) -> Result<Option<String>> {
        self.store.get(PROFILE_KEY)
    }

    /// Where the profile is kept on disk, if it is.
    pub fn location(&self) -> Option<std::path::PathBuf> {
        self.store.location(PROFILE_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

/// Only a JSON object is a profile. Arrays would otherwise be read
/// positionally into the fields.
fn parse_profile(saved: &str) -> serde_json::Result<UserProfile> {
    match serde_json::from_str(saved)? {
        value @ serde_json::Value::Object(_) => serde_json::from_value(value),
        _ => Err(serde::de::Error::custom("stored profile is not a JSON object")),
    }
}
