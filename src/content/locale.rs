//! Translation bundles and their providers.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use tracing::warn;

use super::{read_json, ContentError, Language};
use crate::effects::{ArgValue, Message};

const ENGLISH: &[(&str, &str)] = &[
    ("player.red", "Red"),
    ("player.blue", "Blue"),
    ("message.game_started", "New game: {mode}"),
    ("message.rolled", "{player} rolled a {value}"),
    ("message.bounced", "{player} overshot the goal and bounces back {steps}"),
    ("message.star", "{player} landed on a star! {executor} takes the challenge"),
    ("message.trap", "{player} fell into a trap! Complete the challenge"),
    ("message.collision", "{player} caught up with {executor}! {executor} takes the challenge"),
    ("message.moved_forward", "{player} moves forward {steps}"),
    ("message.stayed", "{player} stays in place"),
    ("message.moved_back", "{player} moves back {steps}"),
    ("message.sent_to_start", "{player} goes back to the start"),
    ("message.collision_cleared", "{player} holds their ground"),
    ("message.turn", "{player}'s turn"),
    ("message.winner", "{player} wins!"),
];

/// Key → template table for one language.
///
/// Templates use `{name}` placeholders. Keys missing from the bundle fall
/// back to the built-in English template, then to the key itself.
#[derive(Clone, Debug, Default)]
pub struct TranslationBundle {
    language: Language,
    entries: FxHashMap<String, String>,
}

impl TranslationBundle {
    pub fn new(language: Language, entries: FxHashMap<String, String>) -> Self {
        Self { language, entries }
    }

    /// The built-in English bundle.
    #[must_use]
    pub fn english() -> Self {
        let entries = ENGLISH
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::new(Language::new("en"), entries)
    }

    /// Load `language`, falling back to `default`, then to built-in English.
    pub fn load_with_fallback(
        localizer: &dyn Localizer,
        language: &Language,
        default: &Language,
    ) -> Self {
        match localizer.load(language) {
            Ok(bundle) => return bundle,
            Err(err) => warn!(%language, error = %err, "translation load failed"),
        }
        if language != default {
            match localizer.load(default) {
                Ok(bundle) => return bundle,
                Err(err) => warn!(language = %default, error = %err, "default translation load failed"),
            }
        }
        Self::english()
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Template for `key`.
    #[must_use]
    pub fn template<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries
            .get(key)
            .map(String::as_str)
            .or_else(|| ENGLISH.iter().find(|(k, _)| *k == key).map(|&(_, v)| v))
            .unwrap_or(key)
    }

    /// Render a message.
    ///
    /// ```
    /// use path_duel::content::TranslationBundle;
    /// use path_duel::core::PlayerColor;
    /// use path_duel::effects::Message;
    ///
    /// let bundle = TranslationBundle::english();
    /// let text = bundle.render(&Message::MovedForward { player: PlayerColor::Red, steps: 2 });
    /// assert_eq!(text, "Red moves forward 2");
    /// ```
    #[must_use]
    pub fn render(&self, message: &Message) -> String {
        let template = self.template(message.key());
        let args = message.args();
        let mut text = String::with_capacity(template.len());

        // Single pass: substituted values are never scanned again.
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                rest = &rest[open..];
                break;
            };
            let name = &after[..close];
            match args.iter().find(|arg| arg.name == name) {
                Some(arg) => text.push_str(&self.arg_text(&arg.value)),
                None => text.push_str(&rest[open..open + close + 2]),
            }
            rest = &after[close + 1..];
        }
        text.push_str(rest);
        text
    }

    fn arg_text(&self, value: &ArgValue) -> String {
        match value {
            ArgValue::Player(player) => {
                let key = format!("player.{}", player.as_str());
                self.template(&key).to_string()
            }
            ArgValue::Count(n) => n.to_string(),
            ArgValue::Text(s) => s.clone(),
        }
    }
}

/// Source of translation bundles.
pub trait Localizer {
    fn load(&self, language: &Language) -> Result<TranslationBundle, ContentError>;
}

/// Only knows English.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinLocalizer;

impl Localizer for BuiltinLocalizer {
    fn load(&self, language: &Language) -> Result<TranslationBundle, ContentError> {
        if language.code() == "en" {
            Ok(TranslationBundle::english())
        } else {
            Err(ContentError::Missing {
                mode: None,
                language: language.clone(),
            })
        }
    }
}

/// Reads `<root>/<language>.json`, a flat object of key → template.
#[derive(Clone, Debug)]
pub struct JsonLocalizer {
    root: PathBuf,
}

impl JsonLocalizer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Localizer for JsonLocalizer {
    fn load(&self, language: &Language) -> Result<TranslationBundle, ContentError> {
        let path = self.root.join(format!("{}.json", language.code()));
        let entries: FxHashMap<String, String> = read_json(path)?;
        Ok(TranslationBundle::new(language.clone(), entries))
    }
}
