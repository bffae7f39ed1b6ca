use envconfig::Envconfig;


pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:5001/api";
pub const PRODUCTION_BASE_URL: &str = "https://note-book-app-utae.onrender.com/api";

/// The literal value of `MODE` that selects the local backend.
pub const DEVELOPMENT_MARKER: &str = "development";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    /// Anything other than the exact development marker is production.
    pub fn from_indicator(indicator: &str) -> Mode {
        if indicator == DEVELOPMENT_MARKER {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Mode::Development => DEVELOPMENT_BASE_URL,
            Mode::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Development => f.write_str("development"),
            Mode::Production => f.write_str("production"),
        }
    }
}

#[derive(Envconfig, Debug, Clone, Default)]
pub struct Environment {
    #[envconfig(from = "MODE")]
    pub mode: Option<String>,
}

impl Environment {
    pub fn mode(&self) -> Mode {
        self.mode
            .as_deref()
            .map(Mode::from_indicator)
            .unwrap_or_default()
    }
}
