//! Task content providers and the lookup fallback chain.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::content::{read_json, ContentError, GameMode, Language};

/// Used when no provider can supply anything.
pub const PLACEHOLDER_TASKS: &[&str] = &[
    "Do ten jumping jacks",
    "Tell a joke",
    "Sing the chorus of a song",
    "Name five animals in ten seconds",
];

/// Source of task texts per mode and language.
pub trait TaskProvider {
    fn fetch(&self, mode: &GameMode, language: &Language) -> Result<Vec<String>, ContentError>;
}

/// Fetch tasks for `mode`, trying `language`, then `default`, then the
/// built-in placeholders. Never returns an empty list.
pub fn load_tasks(
    provider: &dyn TaskProvider,
    mode: &GameMode,
    language: &Language,
    default: &Language,
) -> Vec<String> {
    let mut attempts = vec![language];
    if language != default {
        attempts.push(default);
    }

    for lang in attempts {
        match provider.fetch(mode, lang) {
            Ok(texts) if !texts.is_empty() => {
                debug!(%mode, language = %lang, count = texts.len(), "loaded tasks");
                return texts;
            }
            Ok(_) => warn!(%mode, language = %lang, "task list is empty"),
            Err(err) => warn!(%mode, language = %lang, error = %err, "task lookup failed"),
        }
    }

    warn!(%mode, "using placeholder tasks");
    PLACEHOLDER_TASKS.iter().map(|s| s.to_string()).collect()
}

/// Reads `<root>/<mode>/<language>.json`, a JSON array of strings.
#[derive(Clone, Debug)]
pub struct JsonTaskProvider {
    root: PathBuf,
}

impl JsonTaskProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TaskProvider for JsonTaskProvider {
    fn fetch(&self, mode: &GameMode, language: &Language) -> Result<Vec<String>, ContentError> {
        let path = self
            .root
            .join(mode.name())
            .join(format!("{}.json", language.code()));
        let texts: Vec<String> = read_json(path)?;
        if texts.is_empty() {
            return Err(ContentError::Empty {
                mode: mode.clone(),
                language: language.clone(),
            });
        }
        Ok(texts)
    }
}

/// In-memory task table.
#[derive(Clone, Debug, Default)]
pub struct StaticTaskProvider {
    tasks: FxHashMap<(GameMode, Language), Vec<String>>,
}

impl StaticTaskProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the task list for a mode/language pair.
    #[must_use]
    pub fn with_tasks<S: Into<String>>(
        mut self,
        mode: GameMode,
        language: Language,
        texts: impl IntoIterator<Item = S>,
    ) -> Self {
        self.tasks
            .insert((mode, language), texts.into_iter().map(Into::into).collect());
        self
    }
}

impl TaskProvider for StaticTaskProvider {
    fn fetch(&self, mode: &GameMode, language: &Language) -> Result<Vec<String>, ContentError> {
        self.tasks
            .get(&(mode.clone(), language.clone()))
            .cloned()
            .ok_or_else(|| ContentError::Missing {
                mode: Some(mode.clone()),
                language: language.clone(),
            })
    }
}
