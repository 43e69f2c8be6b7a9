use crate::submit::SubmissionResult;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ContactIntent {
    /// A printable character typed into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Move focus to the next field (wraps).
    FocusNext,
    /// Move focus to the previous field (wraps).
    FocusPrev,
    /// A submission was dispatched. Sets busy and clears any prior
    /// result. No-op if a submission is already in flight.
    SubmitStarted,
    /// The in-flight submission completed. Clears busy, stores the
    /// result, and on success resets the fields to empty.
    SubmitFinished(SubmissionResult),
    /// The display window for the current result elapsed.
    ClearResult,
}

impl Intent for ContactIntent {}
