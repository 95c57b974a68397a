//! Lookup direction and a named pair holding one value per direction.

use std::fmt;

/// Which lookup variant a request represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Latin source word, English meanings (`keyword=`).
    LatinToEnglish,
    /// English source word, Latin equivalents (`english=`).
    EnglishToLatin,
}

impl Direction {
    /// Both directions in presentation order.
    pub const ALL: [Direction; 2] = [Direction::LatinToEnglish, Direction::EnglishToLatin];

    /// Query parameter the dictionary CGI reads for this direction.
    pub fn query_param(self) -> &'static str {
        match self {
            Direction::LatinToEnglish => "keyword",
            Direction::EnglishToLatin => "english",
        }
    }

    /// Section label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Direction::LatinToEnglish => "Latin → English",
            Direction::EnglishToLatin => "English → Latin",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Direction::LatinToEnglish => "latin->english",
            Direction::EnglishToLatin => "english->latin",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// One value per direction, addressed by name instead of position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByDirection<T> {
    pub latin_to_english: T,
    pub english_to_latin: T,
}

impl<T> ByDirection<T> {
    /// Builds both slots; `f` is called for Latin → English first.
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        let latin_to_english = f(Direction::LatinToEnglish);
        let english_to_latin = f(Direction::EnglishToLatin);
        Self {
            latin_to_english,
            english_to_latin,
        }
    }

    pub fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::LatinToEnglish => &self.latin_to_english,
            Direction::EnglishToLatin => &self.english_to_latin,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Direction, T) -> U) -> ByDirection<U> {
        ByDirection {
            latin_to_english: f(Direction::LatinToEnglish, self.latin_to_english),
            english_to_latin: f(Direction::EnglishToLatin, self.english_to_latin),
        }
    }

    /// Like [`map`](Self::map) but fallible. Latin → English is tried first, so its error wins.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(Direction, T) -> Result<U, E>,
    ) -> Result<ByDirection<U>, E> {
        Ok(ByDirection {
            latin_to_english: f(Direction::LatinToEnglish, self.latin_to_english)?,
            english_to_latin: f(Direction::EnglishToLatin, self.english_to_latin)?,
        })
    }
}
