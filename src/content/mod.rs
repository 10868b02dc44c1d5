//! External content: game modes, languages, translations.
//!
//! Game logic never handles display text. It emits structured messages and
//! forwards only player names and counts; a `TranslationBundle` for the
//! active language turns them into strings.

mod locale;

pub use locale::{BuiltinLocalizer, JsonLocalizer, Localizer, TranslationBundle};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language code such as `"en"` or `"es"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Language used when nothing else is configured.
    pub const DEFAULT_CODE: &'static str = "en";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CODE)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label selecting a task set. Does not change board or movement rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameMode(String);

impl GameMode {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content lookup failures.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no content for mode {mode:?} in language {language}")]
    Missing { mode: Option<GameMode>, language: Language },
    #[error("content for mode {mode} in language {language} is empty")]
    Empty { mode: GameMode, language: Language },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a JSON content file.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: PathBuf) -> Result<T, ContentError> {
    let text = std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ContentError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_default() {
        assert_eq!(Language::default().code(), "en");
        assert_eq!(format!("{}", Language::new("es")), "es");
    }

    #[test]
    fn test_transparent_serde() {
        let json = serde_json::to_string(&GameMode::new("party")).unwrap();
        assert_eq!(json, "\"party\"");

        let lang: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(lang, Language::new("fr"));
    }

    #[test]
    fn test_read_json_errors() {
        let err = read_json::<Vec<String>>(PathBuf::from("/nope/missing.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let err = read_json::<Vec<String>>(path).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }
}
