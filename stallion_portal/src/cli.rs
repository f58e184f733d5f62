// Stallion Portal - `profile` and `view` subcommands

use std::io::Write;

use clap::Subcommand;
use owo_colors::OwoColorize;
use stallion_core::{info, pt, KeyValueStore, ProfileStore, ProfileUpdate, UserProfile};

use crate::tui::{dispatch_named, AppResult, ChatMode};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProfileCommand {
    /// Print the stored profile as JSON
    Show,
    /// Print where the profile is stored
    Path,
    /// Forget the stored profile; the next start uses the defaults
    Reset,
    /// Change one field: name, email, college, campus, student-id, theme or logged-in
    Set { field: String, value: String },
}

fn write_profile(out: &mut impl Write, profile: &UserProfile) -> AppResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(profile)?)?;
    Ok(())
}

pub fn profile_command<S: KeyValueStore>(
    cmd: ProfileCommand,
    store: &mut ProfileStore<S>,
    out: &mut impl Write,
) -> AppResult<()> {
    match cmd {
        ProfileCommand::Show => {
            let profile = store.load()?;
            write_profile(out, &profile)?;
        }
        ProfileCommand::Path => match store.location() {
            Some(path) => writeln!(out, "{}", path.display())?,
            None => writeln!(out, "{}", "(in memory, not stored on disk)".dimmed())?,
        },
        ProfileCommand::Reset => {
            store.reset()?;
            info!("Profile reset to defaults");
            writeln!(out, "{}", "Profile reset".green())?;
        }
        ProfileCommand::Set { field, value } => {
            let update = ProfileUpdate::from_field(&field, &value)?;
            let mut profile = store.load()?;
            if profile.apply(update) {
                store.save(&profile)?;
                pt!("Set {field} from the command line");
            } else {
                pt!(no_log, "{field} already has that value");
            }
            write_profile(out, &profile)?;
        }
    }
    Ok(())
}

/// Prints the view `name` dispatches to for the stored profile.
pub fn view_command<S: KeyValueStore>(
    name: &str,
    store: &mut ProfileStore<S>,
    out: &mut impl Write,
) -> AppResult<()> {
    let profile = store.load()?;
    let view = dispatch_named(name, &profile, ChatMode::General);
    writeln!(out, "{}", view.name().bold())?;
    for (prop, value) in view.props_summary() {
        writeln!(out, "  {prop}: {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use stallion_core::{print, College, FileStore, MemoryStore, Theme};

    use super::*;

    fn run(cmd: ProfileCommand, store: &mut ProfileStore<impl KeyValueStore>) -> String {
        print::set_print(false);
        let mut out = Vec::new();
        profile_command(cmd, store, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn set(field: &str, value: &str) -> ProfileCommand {
        ProfileCommand::Set {
            field: field.to_owned(),
            value: value.to_owned(),
        }
    }

    #[test]
    fn test_show_prints_default_profile() {
        let mut store = ProfileStore::new(MemoryStore::new());
        let out = run(ProfileCommand::Show, &mut store);
        let shown: UserProfile = serde_json::from_str(&out).unwrap();
        assert_eq!(shown, UserProfile::default());
        assert!(out.contains("\"studentId\""));
    }

    #[test]
    fn test_set_merges_one_field() {
        let mut store = ProfileStore::new(MemoryStore::new());
        run(set("college", "COE"), &mut store);
        run(set("theme", "light"), &mut store);

        let profile = store.load().unwrap();
        assert_eq!(profile.college, College::Engineering);
        assert_eq!(profile.theme, Theme::Light);
        assert_eq!(profile.name, UserProfile::default().name);
    }

    #[test]
    fn test_set_same_value_does_not_write() {
        let mut store = ProfileStore::new(MemoryStore::new());
        run(set("name", "Stallion Guest"), &mut store);
        assert_eq!(store.store().writes(), 0);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        print::set_print(false);
        let mut store = ProfileStore::new(MemoryStore::new());
        let mut out = Vec::new();
        assert!(profile_command(set("theme", "purple"), &mut store, &mut out).is_err());
        assert!(profile_command(set("favourite", "x"), &mut store, &mut out).is_err());
        assert_eq!(store.raw().unwrap(), None);
    }

    #[test]
    fn test_path_and_reset_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ProfileStore::new(FileStore::open(dir.path()).unwrap());

        let out = run(ProfileCommand::Path, &mut store);
        assert!(out.trim().ends_with("mmsu_stallion_profile.json"));

        run(set("student-id", "21-000111"), &mut store);
        assert!(dir.path().join("store/mmsu_stallion_profile.json").exists());

        run(ProfileCommand::Reset, &mut store);
        assert!(!dir.path().join("store/mmsu_stallion_profile.json").exists());
        assert_eq!(store.load().unwrap(), UserProfile::default());
    }

    #[test]
    fn test_view_lists_props() {
        print::set_print(false);
        let mut store = ProfileStore::new(MemoryStore::new());
        let mut out = Vec::new();
        view_command("tutors", &mut store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("TutorNetwork"));
        assert!(text.contains("onStartAiTutor: <callback>"));

        let mut out = Vec::new();
        view_command("nowhere", &mut store, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Home"));
    }
}
