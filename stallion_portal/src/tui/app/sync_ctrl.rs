// Sync effect: keeps storage and the root palette in step with the profile

use stallion_core::{err, pt};

use crate::tui::app::App;

impl App {
    /// Runs after every handled event (and once on mount).
    ///
    /// When the profile differs from the last synced one, the whole
    /// profile is written to the store and the root palette is set
    /// from its theme. A failed write is reported in the status line;
    /// the in-memory profile stays authoritative and the next change
    /// writes again.
    pub fn sync_effects(&mut self) {
        if self.last_synced.as_ref() == Some(&self.profile) {
            return;
        }

        match self.profile_store.save(&self.profile) {
            Ok(()) => {
                pt!(no_log, "Saved profile for {}", self.profile.name);
                self.persist_error = None;
            }
            Err(error) => {
                err!("Could not save profile: {error}");
                self.status_message = format!("Could not save profile: {error}");
                self.persist_error = Some(error.to_string());
            }
        }

        self.root_dark = self.profile.is_dark();
        self.last_synced = Some(self.profile.clone());
    }
}
