use serde::{Deserialize, Serialize};
use std::fmt::Display;

// Text substituted into descriptions for any attribute that was never set.
// Accessors never substitute it; only the `Display` renderings do.
pub(crate) const UNKNOWN_FIELD: &str = "unknown";

/// A person who wrote a book. Any attribute may be unknown, independently
/// of the others, and unknown is distinct from any set value (including
/// empty text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    name: Option<String>,
    year_of_birth: Option<String>,
    sex: Option<String>,
}

impl Author {
    /// Pass `None` for whatever is not known; `Author::default()` is the
    /// fully unknown author.
    pub fn new(
        name: Option<String>,
        year_of_birth: Option<String>,
        sex: Option<String>,
    ) -> Self {
        Self {
            name,
            year_of_birth,
            sex,
        }
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_year_of_birth(&mut self, year_of_birth: Option<String>) {
        self.year_of_birth = year_of_birth;
    }

    pub fn set_sex(&mut self, sex: Option<String>) {
        self.sex = sex;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn year_of_birth(&self) -> Option<&str> {
        self.year_of_birth.as_deref()
    }

    pub fn sex(&self) -> Option<&str> {
        self.sex.as_deref()
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} was born in {} and is {}.",
            self.name.as_deref().unwrap_or(UNKNOWN_FIELD),
            self.year_of_birth.as_deref().unwrap_or(UNKNOWN_FIELD),
            self.sex.as_deref().unwrap_or(UNKNOWN_FIELD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn salinger() -> Author {
        Author::new(
            Some("J. D. Salinger".to_string()),
            Some("1919".to_string()),
            Some("Male".to_string()),
        )
    }

    #[test]
    fn test_new_keeps_known_fields() {
        let author = salinger();
        assert_eq!(author.name(), Some("J. D. Salinger"));
        assert_eq!(author.year_of_birth(), Some("1919"));
        assert_eq!(author.sex(), Some("Male"));
    }

    #[test]
    fn test_default_is_fully_unknown() {
        let author = Author::default();
        assert_eq!(author.name(), None);
        assert_eq!(author.year_of_birth(), None);
        assert_eq!(author.sex(), None);
    }

    #[test]
    fn test_trailing_fields_stay_unknown() {
        let author = Author::new(Some("Jerome".to_string()), None, None);
        assert_eq!(author.name(), Some("Jerome"));
        assert_eq!(author.year_of_birth(), None);
        assert_eq!(author.sex(), None);
    }

    #[test]
    fn test_setters_overwrite_unconditionally() {
        let mut author = salinger();
        author.set_name(Some("Jerome David Salinger".to_string()));
        author.set_year_of_birth(None);
        assert_eq!(author.name(), Some("Jerome David Salinger"));
        assert_eq!(author.year_of_birth(), None);
        assert_eq!(author.sex(), Some("Male"));
    }

    #[test]
    fn test_empty_text_is_set_not_unknown() {
        let mut author = Author::default();
        author.set_name(Some(String::new()));
        assert_eq!(author.name(), Some(""));
    }

    #[test]
    fn test_description_with_all_fields() {
        assert_eq!(
            salinger().to_string(),
            "J. D. Salinger was born in 1919 and is Male."
        );
    }

    #[test]
    fn test_description_substitutes_unknown_fields() {
        assert_eq!(
            Author::default().to_string(),
            "unknown was born in unknown and is unknown."
        );
        let author = Author::new(Some("Jerome".to_string()), None, None);
        assert_eq!(
            author.to_string(),
            "Jerome was born in unknown and is unknown."
        );
    }
}
