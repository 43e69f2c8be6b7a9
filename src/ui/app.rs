use std::time::{Duration, Instant};

use crate::content;
use crate::submit::{ContactPayload, SubmissionResult};
use crate::ui::contact::{ContactFormState, ContactIntent, ContactReducer};
use crate::ui::mvi::Reducer;
use crate::ui::theme::Theme;

/// The five page sections, in masthead order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
    Socials,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
        Section::Socials,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
            Section::Socials => "Socials",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Digit key (1-5) jumping to this section.
    pub fn from_digit(digit: usize) -> Option<Self> {
        Self::ALL.get(digit.checked_sub(1)?).copied()
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    section: Section,
    theme: Theme,
    /// Contact form state (MVI pattern).
    contact: ContactFormState,
    /// When the current submission result was set, for timed clearing.
    result_set_at: Option<Instant>,
    /// How long a result stays on screen.
    result_display: Duration,
    project_selection: usize,
}

impl App {
    pub fn new(theme: Theme, result_display: Duration) -> Self {
        Self {
            should_quit: false,
            section: Section::About,
            theme,
            contact: ContactFormState::default(),
            result_set_at: None,
            result_display,
            project_selection: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn goto_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn next_section(&mut self) {
        self.section = self.section.next();
    }

    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    /// True while a submission result overlay is on screen.
    pub fn overlay_visible(&self) -> bool {
        self.contact.result.is_some()
    }

    pub fn project_selection(&self) -> usize {
        self.project_selection
    }

    pub fn move_project_selection(&mut self, direction: i32) {
        let len = content::PROJECTS.len();
        if len == 0 {
            self.project_selection = 0;
            return;
        }

        let current = self.project_selection.min(len - 1);
        self.project_selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Dispatch an intent to the contact form reducer.
    pub fn dispatch_contact(&mut self, intent: ContactIntent) {
        dispatch_mvi!(self, contact, ContactReducer, intent);
    }

    /// Start a submission if the form permits one.
    ///
    /// Snapshots the payload, marks the form busy, and clears any prior
    /// result. Returns `None` (and changes nothing) when the form is
    /// incomplete or a submission is already in flight.
    pub fn begin_submission(&mut self) -> Option<ContactPayload> {
        if !self.contact.can_submit() {
            return None;
        }
        let payload = self.contact.payload();
        self.dispatch_contact(ContactIntent::SubmitStarted);
        Some(payload)
    }

    /// The submission completed; show its result and start the clock
    /// on clearing it.
    pub fn on_submission_outcome(&mut self, result: SubmissionResult) {
        self.dispatch_contact(ContactIntent::SubmitFinished(result));
        self.result_set_at = Some(Instant::now());
    }

    /// Periodic tick. Clears the result once its display window elapses.
    pub fn on_tick(&mut self) {
        if let Some(set_at) = self.result_set_at {
            if set_at.elapsed() >= self.result_display {
                self.dispatch_contact(ContactIntent::ClearResult);
                self.result_set_at = None;
            }
        }
    }
}
