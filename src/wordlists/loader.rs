//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use crate::error::GameError;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Returns the valid 5-letter words in file order, skipping blank lines, `#`
/// comments and anything that does not parse as a word.
///
/// # Errors
///
/// Returns `GameError::WordList` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_guess::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_guess::wordlists::loader::words_from_slice;
/// use word_guess::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].to_string(), "CRANE");
        assert_eq!(words[1].to_string(), "SLATE");
        assert_eq!(words[2].to_string(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].to_string(), "CRANE");
        assert_eq!(words[1].to_string(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list\nghost\n\n  proud \nx").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].to_string(), "PROUD");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, GameError::WordList { .. }));
    }
}
