//! The result object handed to the chat layer.

use std::fmt;

use crate::direction::Direction;
use crate::format::FormattedText;

const NOT_FOUND: &str = "No Translations found. Ensure you are entering a singular english or latin word consisting only of letters.";

/// Likely cause when neither direction produced anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The word has characters other than letters.
    NonLetterCharacters,
    /// All letters, but the dictionary knows it in neither language.
    NoMatch,
}

impl Diagnostic {
    pub fn for_word(word: &str) -> Self {
        if !word.is_empty() && word.chars().all(char::is_alphabetic) {
            Diagnostic::NoMatch
        } else {
            Diagnostic::NonLetterCharacters
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            Diagnostic::NonLetterCharacters => "Error: non-letter characters found",
            Diagnostic::NoMatch => {
                "Error: word is either in a language other than latin/english, or is gibberish"
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", NOT_FOUND, self.detail())
    }
}

/// A labeled text section of a successful outcome.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub direction: Direction,
    pub text: &'a FormattedText,
}

impl Section<'_> {
    pub fn label(&self) -> &'static str {
        self.direction.label()
    }
}

/// Bilingual-or-failure result of one query. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    word: String,
    latin_to_english: Option<FormattedText>,
    english_to_latin: Option<FormattedText>,
    diagnostic: Option<Diagnostic>,
}

impl TranslationOutcome {
    /// A diagnostic is attached exactly when both directions are absent.
    pub fn new(
        word: impl Into<String>,
        latin_to_english: Option<FormattedText>,
        english_to_latin: Option<FormattedText>,
    ) -> Self {
        let word = word.into();
        let diagnostic = if latin_to_english.is_none() && english_to_latin.is_none() {
            Some(Diagnostic::for_word(&word))
        } else {
            None
        };
        Self {
            word,
            latin_to_english,
            english_to_latin,
            diagnostic,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn succeeded(&self) -> bool {
        self.diagnostic.is_none()
    }

    pub fn latin_to_english(&self) -> Option<&FormattedText> {
        self.latin_to_english.as_ref()
    }

    pub fn english_to_latin(&self) -> Option<&FormattedText> {
        self.english_to_latin.as_ref()
    }

    pub fn get(&self, direction: Direction) -> Option<&FormattedText> {
        match direction {
            Direction::LatinToEnglish => self.latin_to_english(),
            Direction::EnglishToLatin => self.english_to_latin(),
        }
    }

    /// Present sections, Latin → English first.
    pub fn sections(&self) -> Vec<Section<'_>> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.get(direction).map(|text| Section { direction, text }))
            .collect()
    }

    pub fn diagnostic(&self) -> Option<Diagnostic> {
        self.diagnostic
    }

    pub fn title(&self) -> String {
        self.title_for(&self.word)
    }

    /// Same as [`title`](Self::title) with the word cut to `max_chars`, marked with `…`.
    pub fn short_title(&self, max_chars: usize) -> String {
        match self.word.char_indices().nth(max_chars) {
            Some((cut, _)) => self.title_for(&format!("{}…", &self.word[..cut])),
            None => self.title(),
        }
    }

    fn title_for(&self, word: &str) -> String {
        if self.succeeded() {
            format!("Translations for \"{}\"", word)
        } else {
            format!("Failed to translate \"{}\"", word)
        }
    }
}
