use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Section};
use crate::ui::contact::{ContactField, ContactIntent};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// The user asked to send the contact form. The runtime owns the
    /// network side, so it performs the actual dispatch.
    Submit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    // Quit keys work from anywhere, including under the result overlay.
    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return InputAction::None;
    }

    // The result overlay is blocking: everything else is inert until
    // the timer clears it.
    if app.overlay_visible() {
        return InputAction::None;
    }

    if is_ctrl_char(key, 't') {
        app.toggle_theme();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_section();
            return InputAction::None;
        }
        KeyCode::BackTab => {
            app.prev_section();
            return InputAction::None;
        }
        _ => {}
    }

    if app.section() == Section::Contact {
        return handle_contact_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let digit = ch.to_digit(10).unwrap_or(0) as usize;
            if let Some(section) = Section::from_digit(digit) {
                app.goto_section(section);
            }
        }
        KeyCode::Left => app.prev_section(),
        KeyCode::Right => app.next_section(),
        KeyCode::Up if app.section() == Section::Projects => app.move_project_selection(-1),
        KeyCode::Down if app.section() == Section::Projects => app.move_project_selection(1),
        _ => {}
    }
    InputAction::None
}

/// Keys while the contact form has focus. Printable characters edit the
/// focused field, so section shortcuts are limited to modifier combos
/// and Tab here.
fn handle_contact_key(app: &mut App, key: KeyEvent) -> InputAction {
    if is_ctrl_char(key, 's') {
        return InputAction::Submit;
    }

    match key.code {
        KeyCode::Up => app.dispatch_contact(ContactIntent::FocusPrev),
        KeyCode::Down => app.dispatch_contact(ContactIntent::FocusNext),
        KeyCode::Backspace => app.dispatch_contact(ContactIntent::Backspace),
        KeyCode::Enter => {
            // Enter advances through Name and Email; from Message it sends.
            if app.contact().focused == ContactField::Message {
                return InputAction::Submit;
            }
            app.dispatch_contact(ContactIntent::FocusNext);
        }
        KeyCode::Char(ch)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            app.dispatch_contact(ContactIntent::Input(ch));
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
