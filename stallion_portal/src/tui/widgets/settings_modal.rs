// Stallion Portal TUI - Settings overlay

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use stallion_core::{ProfileUpdate, UserProfile, CAMPUSES};

use crate::tui::app::{Action, App};
use crate::tui::theme::Palette;
use crate::tui::widgets::centered_rect;

const TEXT_MAX_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Name,
    Email,
    StudentId,
    College,
    Campus,
    SignedIn,
    Theme,
}

impl SettingsField {
    pub const ALL: [SettingsField; 7] = [
        SettingsField::Name,
        SettingsField::Email,
        SettingsField::StudentId,
        SettingsField::College,
        SettingsField::Campus,
        SettingsField::SignedIn,
        SettingsField::Theme,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsField::Name => "Name",
            SettingsField::Email => "Email",
            SettingsField::StudentId => "Student ID",
            SettingsField::College => "College",
            SettingsField::Campus => "Campus",
            SettingsField::SignedIn => "Signed in",
            SettingsField::Theme => "Theme",
        }
    }

    fn text_value(self, user: &UserProfile) -> Option<&str> {
        match self {
            SettingsField::Name => Some(&user.name),
            SettingsField::Email => Some(&user.email),
            SettingsField::StudentId => Some(&user.student_id),
            _ => None,
        }
    }

    fn display_value(self, user: &UserProfile) -> String {
        match self {
            SettingsField::Name | SettingsField::Email | SettingsField::StudentId => {
                let value = self.text_value(user).unwrap_or_default();
                if value.is_empty() {
                    "(not set)".to_owned()
                } else {
                    value.to_owned()
                }
            }
            SettingsField::College => user.college.name().to_owned(),
            SettingsField::Campus => user.campus.clone(),
            SettingsField::SignedIn => (if user.is_logged_in { "yes" } else { "no" }).to_owned(),
            SettingsField::Theme => user.theme.to_string(),
        }
    }
}

/// The overlay's own state: which row is selected and,
/// while a text field is being edited, its draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub selected: usize,
    pub editing: Option<String>,
}

impl SettingsForm {
    pub fn field(&self) -> SettingsField {
        SettingsField::ALL[self.selected % SettingsField::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct SettingsModalProps {
    pub user: UserProfile,
    pub on_update: fn(ProfileUpdate) -> Action,
    pub on_close: Action,
}

impl App {
    /// `None` while the overlay is hidden.
    pub fn settings_props(&self) -> Option<SettingsModalProps> {
        self.nav.show_settings().then(|| SettingsModalProps {
            user: self.profile.clone(),
            on_update: Action::update_profile,
            on_close: Action::CLOSE_SETTINGS,
        })
    }
}

fn next_campus(current: &str, forward: bool) -> String {
    let len = CAMPUSES.len();
    let next = match CAMPUSES.iter().position(|c| c.eq_ignore_ascii_case(current)) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    CAMPUSES[next].to_owned()
}

/// Update for a committed text field. `None` when nothing changed
/// or the value isn't acceptable.
fn text_update(field: SettingsField, user: &UserProfile, draft: &str) -> Option<ProfileUpdate> {
    let value = draft.trim().to_owned();
    if field.text_value(user) == Some(value.as_str()) {
        return None;
    }
    let mut update = ProfileUpdate::default();
    match field {
        SettingsField::Name if value.is_empty() => return None,
        SettingsField::Name => update.name = Some(value),
        SettingsField::Email => update.email = Some(value),
        SettingsField::StudentId => update.student_id = Some(value),
        _ => return None,
    }
    Some(update)
}

/// Update for a field that cycles or toggles in place.
fn step_update(field: SettingsField, user: &UserProfile, forward: bool) -> Option<ProfileUpdate> {
    let mut update = ProfileUpdate::default();
    match field {
        SettingsField::College if forward => update.college = Some(user.college.next()),
        SettingsField::College => update.college = Some(user.college.prev()),
        SettingsField::Campus => update.campus = Some(next_campus(&user.campus, forward)),
        SettingsField::SignedIn => update.is_logged_in = Some(!user.is_logged_in),
        SettingsField::Theme => update.theme = Some(user.theme.toggled()),
        _ => return None,
    }
    Some(update)
}

pub fn handle_settings_key(
    props: &SettingsModalProps,
    key: KeyCode,
    form: &mut SettingsForm,
) -> Option<Action> {
    let field = form.field();

    if form.editing.is_some() {
        match key {
            KeyCode::Char(c) => {
                if let Some(draft) = form.editing.as_mut().filter(|d| d.chars().count() < TEXT_MAX_LEN) {
                    draft.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(draft) = form.editing.as_mut() {
                    draft.pop();
                }
            }
            KeyCode::Esc => form.editing = None,
            KeyCode::Enter => {
                let draft = form.editing.take().unwrap_or_default();
                return text_update(field, &props.user, &draft).map(props.on_update);
            }
            _ => {}
        }
        return None;
    }

    match key {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char(',') => Some(props.on_close.clone()),
        KeyCode::Up | KeyCode::Char('k') => {
            form.selected = (form.selected + SettingsField::ALL.len() - 1) % SettingsField::ALL.len();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            form.selected = (form.selected + 1) % SettingsField::ALL.len();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => match field.text_value(&props.user) {
            Some(current) => {
                form.editing = Some(current.to_owned());
                None
            }
            None => step_update(field, &props.user, true).map(props.on_update),
        },
        KeyCode::Right => step_update(field, &props.user, true).map(props.on_update),
        KeyCode::Left => step_update(field, &props.user, false).map(props.on_update),
        _ => None,
    }
}

pub fn render_settings_modal(
    f: &mut Frame,
    props: &SettingsModalProps,
    form: &SettingsForm,
    palette: &Palette,
) {
    let area = centered_rect(70, 60, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Profile Settings ")
        .borders(Borders::ALL)
        .border_style(palette.selected())
        .style(palette.base());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let items: Vec<ListItem> = SettingsField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let value = match &form.editing {
                Some(draft) if i == form.selected => format!("{draft}▏"),
                _ => field.display_value(&props.user),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", field.label()), palette.dim()),
                Span::raw(value),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(form.selected));
    let list = List::new(items)
        .style(palette.base())
        .highlight_style(palette.selected())
        .highlight_symbol("▸ ");
    f.render_stateful_widget(list, chunks[0], &mut state);

    let hint = if form.editing.is_some() {
        "Type to edit · Enter save · Esc cancel"
    } else {
        "↑/↓ select · Enter edit/toggle · ←/→ cycle · Esc close"
    };
    let hint = Paragraph::new(hint)
        .style(palette.dim())
        .wrap(Wrap { trim: true });
    f.render_widget(hint, chunks[1]);
}
