use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            terminal: TerminalConfig::default(),
        }
    }
}

/// Settings for the outbound contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Form-relay endpoint the contact form POSTs to.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

/// Settings for the terminal UI itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Draw/tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a submission result stays on screen, in milliseconds
    /// (default: 2000).
    #[serde(default = "default_result_display_ms")]
    pub result_display_ms: u64,
    /// Theme to start in.
    #[serde(default)]
    pub theme: ThemeChoice,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            result_display_ms: default_result_display_ms(),
            theme: ThemeChoice::default(),
        }
    }
}

/// Startup theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

fn default_endpoint_url() -> String {
    "https://formspree.io/f/xdkonbaa".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_result_display_ms() -> u64 {
    2000
}
