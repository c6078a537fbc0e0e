use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::ParseIntError;
use thiserror::Error;

use super::author::{Author, UNKNOWN_FIELD};

// Placeholder returned by `year_published` for an unset year.
const UNKNOWN_YEAR: &str = "Unknown";
// The author lookups carry a leading space in their placeholders; callers
// match on these exact strings.
const UNKNOWN_BIRTH_YEAR: &str = " Unknown";
const UNATTRIBUTED: &str = " Unattributed";

#[derive(Debug, Error)]
pub enum BookError {
    #[error("author sex has not been set")]
    AuthorSexUnknown,
    #[error("year published is not a number: {0}")]
    YearNotNumeric(#[from] ParseIntError),
}

/// A published work and the author who wrote it.
///
/// The [`Author`] is owned outright: every book has one, even when all of
/// its attributes are still unknown. Author attributes are reached through
/// the forwarding methods below; the component itself is never handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    year_published: Option<String>,
    publisher: Option<String>,
    author: Author,
}

impl Book {
    pub fn new(
        title: String,
        year_published: Option<String>,
        publisher: Option<String>,
        author: Author,
    ) -> Self {
        Self {
            title,
            year_published,
            publisher,
            author,
        }
    }

    /// Minimal form: the title is the one thing a book cannot lack. The
    /// year, publisher and every author attribute start out unknown.
    pub fn with_title(title: String) -> Self {
        Self {
            title,
            year_published: None,
            publisher: None,
            author: Author::default(),
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_year_published(&mut self, year_published: Option<String>) {
        self.year_published = year_published;
    }

    pub fn set_publisher(&mut self, publisher: Option<String>) {
        self.publisher = publisher;
    }

    // The next three setters forward to the owned `Author` and touch no
    // field of the book itself. `set_year_of_birth` edits the author;
    // `set_year_published` above edits the book.

    pub fn set_author_name(&mut self, name: Option<String>) {
        self.author.set_name(name);
    }

    pub fn set_year_of_birth(&mut self, year_of_birth: Option<String>) {
        self.author.set_year_of_birth(year_of_birth);
    }

    pub fn set_author_sex(&mut self, sex: Option<String>) {
        self.author.set_sex(sex);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// No placeholder here: an unset publisher is returned as `None`.
    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    /// The year this book was published, or `"Unknown"` if never set.
    pub fn year_published(&self) -> &str {
        self.year_published.as_deref().unwrap_or(UNKNOWN_YEAR)
    }

    /// The author's year of birth, or `" Unknown"` if never set.
    pub fn year_of_birth(&self) -> &str {
        self.author.year_of_birth().unwrap_or(UNKNOWN_BIRTH_YEAR)
    }

    /// The author's name, or `" Unattributed"` if never set.
    pub fn author_name(&self) -> &str {
        self.author.name().unwrap_or(UNATTRIBUTED)
    }

    /// Whether the author's identified sex is exactly `"Male"`
    /// (case-sensitive). Refuses to answer while the sex is unknown.
    pub fn has_male_author(&self) -> Result<bool, BookError> {
        match self.author.sex() {
            Some(sex) => Ok(sex == "Male"),
            None => Err(BookError::AuthorSexUnknown),
        }
    }

    /// Whether the book was first published during the 20th century
    /// (1900-1999). Parses the `year_published` lookup, so an unknown year
    /// surfaces as [`BookError::YearNotNumeric`] instead of counting as
    /// "not last century".
    pub fn was_published_last_century(&self) -> Result<bool, BookError> {
        let year: i32 = self.year_published().parse()?;
        Ok(year > 1899 && year < 2000)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The book titled {} was written by {}. {} The book was published in {} by {}.",
            self.title,
            self.author.name().unwrap_or(UNKNOWN_FIELD),
            self.author,
            self.year_published(),
            self.publisher.as_deref().unwrap_or(UNKNOWN_FIELD),
        )
    }
}
