//! Word list loading utilities
//!
//! Lists are newline-delimited. Each line is trimmed and lower-cased and blank
//! lines are dropped; everything else is kept for [`super::WordSet`] to
//! validate, so a bad entry is reported instead of silently skipped.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Normalize one raw line
fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Read a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::read_lines;
///
/// let words = read_lines("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = lines_from_str(&content);
    if words.is_empty() {
        bail!("word list {} is empty", path.display());
    }

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Normalize newline-delimited text
#[must_use]
pub fn lines_from_str(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize).collect()
}

/// Normalize an embedded string slice
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::lines_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = lines_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn lines_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| normalize(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_and_lowercased() {
        let words = lines_from_str("Crane\n  SLATE \r\nirate\n");
        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn blank_lines_dropped() {
        let words = lines_from_str("\ncrane\n\n   \nslate\n");
        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn invalid_entries_kept_for_validation() {
        let words = lines_from_slice(&["crane", "toolong", "ab1de"]);
        assert_eq!(words, ["crane", "toolong", "ab1de"]);
    }

    #[test]
    fn empty_slice() {
        assert!(lines_from_slice(&[]).is_empty());
    }

    #[test]
    fn empty_file_is_an_error() {
        let path =
            std::env::temp_dir().join(format!("wordle_game_empty_{}.txt", std::process::id()));
        fs::write(&path, "\n  \n").unwrap();
        let err = read_lines(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn file_words_are_normalized() {
        let path =
            std::env::temp_dir().join(format!("wordle_game_list_{}.txt", std::process::id()));
        fs::write(&path, "CRANE\nslate\n").unwrap();
        let words = read_lines(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_lines("no/such/word/list.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}
