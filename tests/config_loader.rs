use std::io::Write;

use broadsheet::config::{Config, ConfigError, ThemeChoice};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn missing_file_yields_defaults() {
    let config = Config::load_from(std::path::Path::new("/nonexistent/broadsheet.toml")).unwrap();
    assert_eq!(config.form.endpoint_url, "https://formspree.io/f/xdkonbaa");
    assert_eq!(config.terminal.result_display_ms, 2000);
    assert_eq!(config.terminal.theme, ThemeChoice::Light);
}

#[test]
fn partial_file_fills_in_defaults() {
    let file = write_config(
        r#"
[terminal]
theme = "dark"
"#,
    );
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.terminal.theme, ThemeChoice::Dark);
    assert_eq!(config.terminal.tick_rate_ms, 250);
    assert!(config.form.endpoint_url.starts_with("https://formspree.io/"));
}

#[test]
fn endpoint_override_is_honored() {
    let file = write_config(
        r#"
[form]
endpoint_url = "https://relay.example.com/f/abc"
connect_timeout_seconds = 2
"#,
    );
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.form.endpoint_url, "https://relay.example.com/f/abc");
    assert_eq!(config.form.connect_timeout_seconds, 2);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[form\nendpoint_url = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_http_endpoint_fails_validation() {
    let file = write_config(
        r#"
[form]
endpoint_url = "ftp://relay.example.com/f/abc"
"#,
    );
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_display_window_fails_validation() {
    let file = write_config(
        r#"
[terminal]
result_display_ms = 0
"#,
    );
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
