//! Configuration for the seeding and formatting tools.
//!
//! Every setting comes from an environment variable and falls back to a
//! default when unset, so the tools run without flags.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn lookup_or(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: String) -> String {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

/// The administrative account written by `seed-admin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSeedConfig {
    pub email: String,

    /// Plaintext password; hashed before it reaches the database.
    #[serde(skip_serializing)]
    pub password: String,

    /// Display name.
    pub name: String,

    pub phone: Option<String>,
}

impl Default for AdminSeedConfig {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "change-me-admin".to_string(),
            name: "Administrator".to_string(),
            phone: None,
        }
    }
}

impl AdminSeedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            email: lookup_or(&lookup, "ADMIN_EMAIL", defaults.email),
            password: lookup_or(&lookup, "ADMIN_PASSWORD", defaults.password),
            name: lookup_or(&lookup, "ADMIN_NAME", defaults.name),
            phone: lookup("ADMIN_PHONE").filter(|v| !v.trim().is_empty()),
        }
    }
}

/// Where `seed-translations` reads its catalog from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSeedConfig {
    pub file: PathBuf,
}

impl Default for TranslationSeedConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("seeds/translations.json"),
        }
    }
}

impl TranslationSeedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            file: lookup("TRANSLATIONS_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.file),
        }
    }
}

/// Input and output paths for `format-sql-batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlBatchConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for SqlBatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("seeds/translations.sql"),
            output: PathBuf::from("seeds/translations.formatted.sql"),
        }
    }
}

impl SqlBatchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path = |name: &str, default: PathBuf| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };
        Self {
            input: path("SQL_BATCH_INPUT", defaults.input),
            output: path("SQL_BATCH_OUTPUT", defaults.output),
        }
    }
}

/// Command lines run by `migrate-and-seed` and `run-translation-seed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub migrate_command: String,
    pub seed_command: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            migrate_command: "sqlx migrate run --source crates/store/migrations".to_string(),
            seed_command: "cargo run --quiet -p seed-tools --bin seed-translations".to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            migrate_command: lookup_or(&lookup, "MIGRATE_COMMAND", defaults.migrate_command),
            seed_command: lookup_or(&lookup, "SEED_COMMAND", defaults.seed_command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |name| map.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_admin_defaults() {
        let config = AdminSeedConfig::from_lookup(|_| None);
        assert_eq!(config.email, "admin@example.com");
        assert_eq!(config.name, "Administrator");
        assert!(config.phone.is_none());
    }

    #[test]
    fn test_admin_overrides_ignore_blank_values() {
        let config = AdminSeedConfig::from_lookup(vars(&[
            ("ADMIN_EMAIL", "ops@example.org"),
            ("ADMIN_NAME", "   "),
            ("ADMIN_PHONE", "+15550100"),
        ]));
        assert_eq!(config.email, "ops@example.org");
        assert_eq!(config.name, "Administrator");
        assert_eq!(config.phone.as_deref(), Some("+15550100"));
    }

    #[test]
    fn test_admin_password_is_not_serialized() {
        let config = AdminSeedConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains(&config.password));
    }

    #[test]
    fn test_sql_batch_paths_are_configurable() {
        let config = SqlBatchConfig::from_lookup(vars(&[
            ("SQL_BATCH_INPUT", "/tmp/in.sql"),
            ("SQL_BATCH_OUTPUT", "/tmp/out.sql"),
        ]));
        assert_eq!(config.input, PathBuf::from("/tmp/in.sql"));
        assert_eq!(config.output, PathBuf::from("/tmp/out.sql"));
    }

    #[test]
    fn test_runner_commands() {
        let config = RunnerConfig::from_lookup(vars(&[("SEED_COMMAND", "./seed.sh")]));
        assert!(config.migrate_command.starts_with("sqlx migrate run"));
        assert_eq!(config.seed_command, "./seed.sh");
    }
}
