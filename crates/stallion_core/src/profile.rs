//! The student's profile, the only state the portal persists.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::StoreError;

/// Campuses the settings overlay offers. `campus` itself stays a
/// free string so hand-edited values survive a reload.
pub const CAMPUSES: &[&str] = &["Batac", "Laoag", "Currimao", "Dingras"];

/// One of the university's colleges.
///
/// Stored by its full name, e.g.
/// `"College of Computing and Information Sciences"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum College {
    #[serde(rename = "College of Agriculture, Food and Sustainable Development")]
    AgricultureFood,
    #[serde(rename = "College of Aquatic Sciences and Applied Technology")]
    AquaticSciences,
    #[serde(rename = "College of Arts and Sciences")]
    ArtsSciences,
    #[serde(rename = "College of Business, Economics and Accountancy")]
    BusinessEconomics,
    #[serde(rename = "College of Computing and Information Sciences")]
    #[default]
    Computing,
    #[serde(rename = "College of Engineering")]
    Engineering,
    #[serde(rename = "College of Health Sciences")]
    HealthSciences,
    #[serde(rename = "College of Industrial Technology")]
    IndustrialTechnology,
    #[serde(rename = "College of Law")]
    Law,
    #[serde(rename = "College of Medicine")]
    Medicine,
    #[serde(rename = "College of Teacher Education")]
    TeacherEducation,
    #[serde(rename = "Graduate School")]
    GraduateSchool,
}

impl College {
    /// Every college, in the order the header cycles through them.
    pub const ALL: [College; 12] = [
        College::AgricultureFood,
        College::AquaticSciences,
        College::ArtsSciences,
        College::BusinessEconomics,
        College::Computing,
        College::Engineering,
        College::HealthSciences,
        College::IndustrialTechnology,
        College::Law,
        College::Medicine,
        College::TeacherEducation,
        College::GraduateSchool,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            College::AgricultureFood => "College of Agriculture, Food and Sustainable Development",
            College::AquaticSciences => "College of Aquatic Sciences and Applied Technology",
            College::ArtsSciences => "College of Arts and Sciences",
            College::BusinessEconomics => "College of Business, Economics and Accountancy",
            College::Computing => "College of Computing and Information Sciences",
            College::Engineering => "College of Engineering",
            College::HealthSciences => "College of Health Sciences",
            College::IndustrialTechnology => "College of Industrial Technology",
            College::Law => "College of Law",
            College::Medicine => "College of Medicine",
            College::TeacherEducation => "College of Teacher Education",
            College::GraduateSchool => "Graduate School",
        }
    }

    /// The acronym students actually use, e.g. `CCIS`.
    #[must_use]
    pub fn short(self) -> &'static str {
        match self {
            College::AgricultureFood => "CAFSD",
            College::AquaticSciences => "CASAT",
            College::ArtsSciences => "CAS",
            College::BusinessEconomics => "CBEA",
            College::Computing => "CCIS",
            College::Engineering => "COE",
            College::HealthSciences => "CHS",
            College::IndustrialTechnology => "CIT",
            College::Law => "COL",
            College::Medicine => "COM",
            College::TeacherEducation => "CTE",
            College::GraduateSchool => "GS",
        }
    }

    fn index(self) -> usize {
        // ALL is exhaustive, so the lookup can't miss
        College::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        College::ALL[(self.index() + 1) % College::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let len = College::ALL.len();
        College::ALL[(self.index() + len - 1) % len]
    }
}

impl Display for College {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for College {
    type Err = StoreError;

    /// Accepts the full name or the acronym, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        College::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s) || c.short().eq_ignore_ascii_case(s))
            .ok_or_else(|| StoreError::InvalidValue {
                field: "college",
                value: s.to_owned(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(StoreError::InvalidValue {
                field: "theme",
                value: s.to_owned(),
            }),
        }
    }
}

/// The persisted user profile.
///
/// Stored as camelCase JSON. Fields missing from stored JSON
/// take their value from [`UserProfile::default`], so a loaded
/// profile is always fully populated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Display name.
    #[serde(deserialize_with = "name_or_null")]
    pub name: String,
    /// Empty when the student hasn't given one.
    #[serde(deserialize_with = "string_or_null")]
    pub email: String,
    pub college: College,
    #[serde(deserialize_with = "campus_or_null")]
    pub campus: String,
    pub is_logged_in: bool,
    pub theme: Theme,
    /// Empty until the student enters it in the chat view.
    #[serde(deserialize_with = "string_or_null")]
    pub student_id: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Stallion Guest".to_owned(),
            email: String::new(),
            college: College::Computing,
            campus: "Batac".to_owned(),
            is_logged_in: false,
            theme: Theme::Dark,
            student_id: String::new(),
        }
    }
}

impl UserProfile {
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Shallow merge: fields set in `update` replace ours,
    /// everything else is kept as is.
    #[must_use]
    pub fn merged(&self, update: ProfileUpdate) -> Self {
        let mut out = self.clone();
        out.apply(update);
        out
    }

    /// In-place [`UserProfile::merged`]. Returns whether anything changed.
    pub fn apply(&mut self, update: ProfileUpdate) -> bool {
        let before = self.clone();
        let ProfileUpdate {
            name,
            email,
            college,
            campus,
            is_logged_in,
            theme,
            student_id,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(college) = college {
            self.college = college;
        }
        if let Some(campus) = campus {
            self.campus = campus;
        }
        if let Some(is_logged_in) = is_logged_in {
            self.is_logged_in = is_logged_in;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(student_id) = student_id {
            self.student_id = student_id;
        }

        *self != before
    }
}

fn string_or_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

fn name_or_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_else(|| UserProfile::default().name))
}

fn campus_or_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_else(|| UserProfile::default().campus))
}

/// A partial [`UserProfile`]: only the `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub college: Option<College>,
    pub campus: Option<String>,
    pub is_logged_in: Option<bool>,
    pub theme: Option<Theme>,
    pub student_id: Option<String>,
}

impl ProfileUpdate {
    #[must_use]
    pub fn college(college: College) -> Self {
        Self {
            college: Some(college),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn student_id(id: String) -> Self {
        Self {
            student_id: Some(id),
            ..Default::default()
        }
    }

    /// Builds a single-field update from a field name and a raw value,
    /// as typed on the command line.
    ///
    /// Field names: `name`, `email`, `college`, `campus`,
    /// `student-id`, `theme`, `logged-in`.
    ///
    /// # Errors
    /// Unknown field, or a value that doesn't parse for it.
    pub fn from_field(field: &str, value: &str) -> crate::Result<Self> {
        let mut update = Self::default();
        match field {
            "name" => update.name = Some(value.to_owned()),
            "email" => update.email = Some(value.to_owned()),
            "college" => update.college = Some(value.parse()?),
            "campus" => update.campus = Some(value.to_owned()),
            "student-id" | "student_id" | "studentId" => {
                update.student_id = Some(value.to_owned());
            }
            "theme" => update.theme = Some(value.parse()?),
            "logged-in" | "is_logged_in" | "isLoggedIn" => {
                update.is_logged_in = Some(match value.trim() {
                    "true" | "yes" | "1" => true,
                    "false" | "no" | "0" => false,
                    _ => {
                        return Err(StoreError::InvalidValue {
                            field: "logged-in",
                            value: value.to_owned(),
                        })
                    }
                });
            }
            _ => {
                return Err(StoreError::InvalidValue {
                    field: "field",
                    value: field.to_owned(),
                })
            }
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserProfile {
        UserProfile {
            name: "Juan Dela Cruz".to_owned(),
            email: "juan@mmsu.edu.ph".to_owned(),
            college: College::Engineering,
            campus: "Laoag".to_owned(),
            is_logged_in: true,
            theme: Theme::Light,
            student_id: "21-012345".to_owned(),
        }
    }

    #[test]
    fn test_default_profile() {
        let p = UserProfile::default();
        assert_eq!(p.name, "Stallion Guest");
        assert_eq!(p.email, "");
        assert_eq!(p.college.name(), "College of Computing and Information Sciences");
        assert_eq!(p.campus, "Batac");
        assert!(!p.is_logged_in);
        assert_eq!(p.theme, Theme::Dark);
        assert_eq!(p.student_id, "");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(UserProfile::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Stallion Guest",
                "email": "",
                "college": "College of Computing and Information Sciences",
                "campus": "Batac",
                "isLoggedIn": false,
                "theme": "dark",
                "studentId": ""
            })
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let p: UserProfile =
            serde_json::from_str(r#"{"name":"Maria","theme":"light"}"#).unwrap();
        assert_eq!(p.name, "Maria");
        assert_eq!(p.theme, Theme::Light);
        assert_eq!(p.college, College::Computing);
        assert_eq!(p.campus, "Batac");
        assert_eq!(p.student_id, "");
    }

    #[test]
    fn test_null_optional_strings() {
        let p: UserProfile = serde_json::from_str(r#"{"email":null,"studentId":null}"#).unwrap();
        assert_eq!(p.email, "");
        assert_eq!(p.student_id, "");
    }

    #[test]
    fn test_null_name_and_campus_take_field_defaults() {
        let p: UserProfile =
            serde_json::from_str(r#"{"name":null,"campus":null,"theme":"light"}"#).unwrap();
        assert_eq!(p.name, "Stallion Guest");
        assert_eq!(p.campus, "Batac");
        // the rest of the record still counts
        assert_eq!(p.theme, Theme::Light);
    }

    #[test]
    fn test_unknown_college_is_rejected() {
        let res = serde_json::from_str::<UserProfile>(r#"{"college":"College of Wizardry"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_merge_only_touches_given_fields() {
        let base = sample();
        let update = ProfileUpdate {
            campus: Some("Currimao".to_owned()),
            theme: Some(Theme::Dark),
            ..Default::default()
        };
        let merged = base.merged(update);

        assert_eq!(merged.campus, "Currimao");
        assert_eq!(merged.theme, Theme::Dark);
        assert_eq!(merged.name, base.name);
        assert_eq!(merged.email, base.email);
        assert_eq!(merged.college, base.college);
        assert_eq!(merged.is_logged_in, base.is_logged_in);
        assert_eq!(merged.student_id, base.student_id);
    }

    #[test]
    fn test_merge_every_single_field() {
        let base = UserProfile::default();
        let target = sample();
        let updates = [
            ProfileUpdate { name: Some(target.name.clone()), ..Default::default() },
            ProfileUpdate { email: Some(target.email.clone()), ..Default::default() },
            ProfileUpdate::college(target.college),
            ProfileUpdate { campus: Some(target.campus.clone()), ..Default::default() },
            ProfileUpdate { is_logged_in: Some(true), ..Default::default() },
            ProfileUpdate::theme(target.theme),
            ProfileUpdate::student_id(target.student_id.clone()),
        ];

        let mut p = base.clone();
        for update in updates {
            let before = p.clone();
            assert!(p.apply(update.clone()));
            // exactly one field differs after each single-field update
            let diffs = [
                before.name != p.name,
                before.email != p.email,
                before.college != p.college,
                before.campus != p.campus,
                before.is_logged_in != p.is_logged_in,
                before.theme != p.theme,
                before.student_id != p.student_id,
            ];
            assert_eq!(diffs.iter().filter(|d| **d).count(), 1, "{update:?}");
        }
        assert_eq!(p, target);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut p = sample();
        assert!(!p.apply(ProfileUpdate::default()));
        assert_eq!(p, sample());
    }

    #[test]
    fn test_same_value_reports_unchanged() {
        let mut p = sample();
        assert!(!p.apply(ProfileUpdate::theme(Theme::Light)));
    }

    #[test]
    fn test_theme_toggle_and_parse() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
        assert!("purple".parse::<Theme>().is_err());
    }

    #[test]
    fn test_college_cycle_wraps() {
        assert_eq!(College::GraduateSchool.next(), College::AgricultureFood);
        assert_eq!(College::AgricultureFood.prev(), College::GraduateSchool);
        for c in College::ALL {
            assert_eq!(c.next().prev(), c);
        }
    }

    #[test]
    fn test_college_from_name_or_acronym() {
        assert_eq!("ccis".parse::<College>().unwrap(), College::Computing);
        assert_eq!(
            "College of Engineering".parse::<College>().unwrap(),
            College::Engineering
        );
        assert!("CSS".parse::<College>().is_err());
    }

    #[test]
    fn test_update_from_cli_field() {
        let u = ProfileUpdate::from_field("student-id", "21-000001").unwrap();
        assert_eq!(u, ProfileUpdate::student_id("21-000001".to_owned()));

        let u = ProfileUpdate::from_field("logged-in", "yes").unwrap();
        assert_eq!(u.is_logged_in, Some(true));

        assert!(ProfileUpdate::from_field("theme", "sepia").is_err());
        assert!(ProfileUpdate::from_field("favourite-color", "blue").is_err());
    }
}
