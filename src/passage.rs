//! Passage references and the keys used to persist their read state.

/// A passage reference split into its book and chapter.
///
/// Single-chapter books ("Jude") have an empty `chapter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageRef {
    pub book: String,
    pub chapter: String,
}

/// Splits a passage such as `"1 Corinthians 15"` into book and chapter.
///
/// The chapter is the trailing numeric token, but only when something
/// comes before it, so a leading numeral stays part of the book name.
/// Text without a trailing number is taken to be a book on its own.
pub fn split_passage(text: &str) -> PassageRef {
    let text = text.trim();
    if let Some((book, chapter)) = text.rsplit_once(char::is_whitespace) {
        let book = book.trim_end();
        if !book.is_empty() && !chapter.is_empty() && chapter.chars().all(|c| c.is_ascii_digit()) {
            return PassageRef {
                book: book.to_owned(),
                chapter: chapter.to_owned(),
            };
        }
    }
    PassageRef {
        book: text.to_owned(),
        chapter: String::new(),
    }
}

/// Returns the persistence key for the passage in slot `position` of a day.
///
/// The position is always the digits after the final `+`, so two different
/// `(text, position)` pairs never share a key even if the text contains `+`.
pub fn passage_key(text: &str, position: usize) -> String {
    format!("{}+{}", text, position)
}
