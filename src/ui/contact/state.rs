use crate::submit::{ContactPayload, SubmissionResult};
use crate::ui::mvi::UiState;

/// The three editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// The in-memory representation of the user's unsent message, plus the
/// transient submission machinery around it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Which field keystrokes currently edit.
    pub focused: ContactField,
    /// True while a submission is in flight. Blocks further submits.
    pub busy: bool,
    /// Outcome of the most recent attempt. At most one is live at a time;
    /// starting a new attempt clears it.
    pub result: Option<SubmissionResult>,
}

impl UiState for ContactFormState {}

impl ContactFormState {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub(crate) fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Submission is permitted once every field is populated and the
    /// email looks plausible, and nothing is already in flight.
    pub fn can_submit(&self) -> bool {
        !self.busy
            && !self.name.trim().is_empty()
            && !self.message.trim().is_empty()
            && is_plausible_email(self.email.trim())
    }

    /// Snapshot the current fields as a wire payload.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Minimal shape check, matching what an HTML `type="email"` input
/// would have gated in the original page: one `@` with a non-empty
/// local part and a dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
