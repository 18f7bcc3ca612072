//! Word list loading utilities
//!
//! Reads user word files. Each non-blank line is either an answer on its own or
//! `ANSWER<TAB>hint`. Lines starting with `#` are comments.

use super::{Entry, WordSource};
use crate::core::Answer;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word source from a file
///
/// Invalid answers are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use brainrot_wordle::wordlists::loader::load_from_file;
///
/// let source = load_from_file("data/dictionary.tsv").unwrap();
/// println!("Loaded {} answers", source.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordSource> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let source = parse_entries(&content);

    log::info!("Loaded {} answers from {}", source.len(), path.display());
    Ok(source)
}

/// Parse word file contents into a source
#[must_use]
pub fn parse_entries(content: &str) -> WordSource {
    let entries = content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let (word, hint) = match line.split_once('\t') {
                Some((word, hint)) => {
                    let hint = hint.trim();
                    (word, (!hint.is_empty()).then(|| hint.to_string()))
                }
                None => (trimmed, None),
            };

            match Answer::new(word) {
                Ok(answer) => Some(Entry { answer, hint }),
                Err(e) => {
                    log::warn!("Skipping line {}: '{}' ({e})", number + 1, word.trim());
                    None
                }
            }
        });

    WordSource::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flat_list() {
        let source = parse_entries("crane\nslate\n\nno cap\n");

        assert_eq!(source.len(), 3);
        assert_eq!(source.get(2).unwrap().answer.text(), "NO CAP");
        assert!(!source.has_hints());
    }

    #[test]
    fn parse_tab_separated_hints() {
        let source = parse_entries("RIZZ\tCharm\nFANUM TAX\tFood theft\t\nAURA\t   \n");

        assert_eq!(source.len(), 3);
        assert_eq!(source.hint_for("rizz"), Some("Charm"));
        assert_eq!(source.hint_for("fanum tax"), Some("Food theft"));
        assert_eq!(source.hint_for("aura"), None);
    }

    #[test]
    fn parse_skips_comments_and_invalid() {
        let source = parse_entries("# header\nl33t\ncrane\nemoji 🔥\n");

        assert_eq!(source.len(), 1);
        assert_eq!(source.get(0).unwrap().answer.text(), "CRANE");
    }

    #[test]
    fn load_from_file_reads_entries() {
        let path = std::env::temp_dir().join(format!("brainrot_wordle_{}.tsv", std::process::id()));
        fs::write(&path, "sigma\tLone wolf\nohio\n").unwrap();

        let source = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(source.len(), 2);
        assert_eq!(source.hint_for("SIGMA"), Some("Lone wolf"));
    }

    #[test]
    fn load_from_missing_file_errors() {
        let missing = std::env::temp_dir().join("brainrot_wordle_does_not_exist.tsv");
        assert!(load_from_file(missing).is_err());
    }
}
