//! End-to-end submission flow: form state through the reducer, a real
//! POST to the mock relay, and the outcome folded back into the app.

mod common;

use std::time::Duration;

use broadsheet::config::FormConfig;
use broadsheet::submit::FormSubmitter;
use broadsheet::ui::app::App;
use broadsheet::ui::contact::ContactIntent;
use broadsheet::ui::theme::Theme;
use common::mock_relay::MockRelay;

fn fill_form(app: &mut App) {
    for ch in "Ada".chars() {
        app.dispatch_contact(ContactIntent::Input(ch));
    }
    app.dispatch_contact(ContactIntent::FocusNext);
    for ch in "ada@example.com".chars() {
        app.dispatch_contact(ContactIntent::Input(ch));
    }
    app.dispatch_contact(ContactIntent::FocusNext);
    for ch in "Hello".chars() {
        app.dispatch_contact(ContactIntent::Input(ch));
    }
}

fn submitter_for(relay: &MockRelay) -> FormSubmitter {
    FormSubmitter::new(&FormConfig {
        endpoint_url: relay.endpoint_url(),
        connect_timeout_seconds: 1,
    })
    .unwrap()
}

#[tokio::test]
async fn accepted_submission_clears_form_and_shows_success() {
    let relay = MockRelay::start().await;
    relay.enqueue_status(200).await;

    let mut app = App::new(Theme::Light, Duration::from_secs(2));
    fill_form(&mut app);

    let payload = app.begin_submission().expect("form is complete");
    assert!(app.contact().busy);

    let result = submitter_for(&relay).submit(&payload).await;
    app.on_submission_outcome(result);

    assert!(!app.contact().busy);
    assert_eq!(app.contact().name, "");
    assert_eq!(app.contact().message, "");
    let result = app.contact().result.as_ref().expect("result shown");
    assert!(result.success);
}

#[tokio::test]
async fn rejected_submission_keeps_form_and_shows_failure() {
    let relay = MockRelay::start().await;
    relay.enqueue_status(422).await;

    let mut app = App::new(Theme::Light, Duration::from_secs(2));
    fill_form(&mut app);

    let payload = app.begin_submission().unwrap();
    let result = submitter_for(&relay).submit(&payload).await;
    app.on_submission_outcome(result);

    assert_eq!(app.contact().name, "Ada", "failed attempt keeps the draft");
    let result = app.contact().result.as_ref().expect("result shown");
    assert!(!result.success);
}

#[tokio::test]
async fn result_expires_after_display_window() {
    let relay = MockRelay::start().await;
    relay.enqueue_status(200).await;

    let mut app = App::new(Theme::Light, Duration::from_millis(50));
    fill_form(&mut app);

    let payload = app.begin_submission().unwrap();
    let result = submitter_for(&relay).submit(&payload).await;
    app.on_submission_outcome(result);
    assert!(app.overlay_visible());

    tokio::time::sleep(Duration::from_millis(80)).await;
    app.on_tick();
    assert!(!app.overlay_visible());
}
