use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Category, Puzzle};

const BUNDLED_PATTERNS: &str = include_str!("../../data/patterns.json");
const BUNDLED_SHAPES_MATCH: &str = include_str!("../../data/shapes_match.json");
const BUNDLED_LOGICAL: &str = include_str!("../../data/logical.json");

/// Error loading puzzle data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{origin}: puzzle `{id}` has no options")]
    NoOptions { origin: String, id: String },
    #[error("{origin}: puzzle `{id}` marks option {correct} correct but has only {count} options")]
    AnswerOutOfRange {
        origin: String,
        id: String,
        correct: usize,
        count: usize,
    },
    #[error("{origin}: duplicate puzzle id `{id}`")]
    DuplicateId { origin: String, id: String },
}

/// The JSON compiled into the binary for `category`.
pub fn bundled_json(category: Category) -> &'static str {
    match category {
        Category::Patterns => BUNDLED_PATTERNS,
        Category::ShapesMatch => BUNDLED_SHAPES_MATCH,
        Category::Logical => BUNDLED_LOGICAL,
    }
}

/// File name holding `category` inside a data directory.
pub fn file_name(category: Category) -> String {
    format!("{}.json", category.id())
}

pub fn load_bundled(category: Category) -> Result<Vec<Puzzle>, LoadError> {
    parse_puzzles(bundled_json(category), &format!("bundled {}", file_name(category)))
}

pub fn load_puzzles_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Puzzle>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_puzzles(&json_content, &path.display().to_string())
}

/// Parse and validate a JSON array of puzzles. `origin` names the source in errors.
pub fn parse_puzzles(json: &str, origin: &str) -> Result<Vec<Puzzle>, LoadError> {
    let puzzles: Vec<Puzzle> = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    validate(&puzzles, origin)?;
    Ok(puzzles)
}

/// Check the invariants a playable puzzle list needs. `origin` names the source in errors.
pub(super) fn validate(puzzles: &[Puzzle], origin: &str) -> Result<(), LoadError> {
    let mut seen = HashSet::new();

    for puzzle in puzzles {
        if puzzle.options.is_empty() {
            return Err(LoadError::NoOptions {
                origin: origin.to_string(),
                id: puzzle.id.clone(),
            });
        }
        if puzzle.correct_answer >= puzzle.options.len() {
            return Err(LoadError::AnswerOutOfRange {
                origin: origin.to_string(),
                id: puzzle.id.clone(),
                correct: puzzle.correct_answer,
                count: puzzle.options.len(),
            });
        }
        if !seen.insert(puzzle.id.as_str()) {
            return Err(LoadError::DuplicateId {
                origin: origin.to_string(),
                id: puzzle.id.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle_json(id: &str, options: &str, correct: usize) -> String {
        format!(
            r#"{{"id":"{id}","ageRange":"3-4","title":"t","question":"q","options":{options},"correctAnswer":{correct}}}"#
        )
    }

    #[test]
    fn bundled_data_is_valid() {
        for category in Category::ALL {
            let puzzles = load_bundled(category).unwrap();
            assert!(!puzzles.is_empty(), "{category} has no puzzles");
        }
    }

    #[test]
    fn rejects_answer_index_past_options() {
        let json = format!("[{}]", puzzle_json("p", r#"["a","b"]"#, 2));
        let err = parse_puzzles(&json, "test").unwrap_err();
        assert!(matches!(err, LoadError::AnswerOutOfRange { correct: 2, count: 2, .. }));
    }

    #[test]
    fn rejects_empty_options() {
        let json = format!("[{}]", puzzle_json("p", "[]", 0));
        let err = parse_puzzles(&json, "test").unwrap_err();
        assert!(matches!(err, LoadError::NoOptions { .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let one = puzzle_json("p", r#"["a"]"#, 0);
        let json = format!("[{one},{one}]");
        let err = parse_puzzles(&json, "test").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId { ref id, .. } if id == "p"));
    }

    #[test]
    fn rejects_unknown_age_range() {
        let json = r#"[{"id":"p","ageRange":"9-10","title":"t","question":"q","options":["a"],"correctAnswer":0}]"#;
        assert!(matches!(parse_puzzles(json, "test"), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_puzzles_from_path("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
