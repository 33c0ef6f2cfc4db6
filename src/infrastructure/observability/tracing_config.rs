use std::fmt;

/// Runtime environment tag attached to log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Test,
    Prod,
}

impl Environment {
    fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "test" => Self::Test,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Test => "test",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::from_env(),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
