//! Puzzle catalog and the age filter.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use super::loader::{self, LoadError};
use crate::models::{AgeRange, Category, Puzzle};

/// All puzzles, grouped by category.
#[derive(Debug, Clone)]
pub struct PuzzleCatalog {
    by_category: HashMap<Category, Vec<Puzzle>>,
}

impl PuzzleCatalog {
    /// Build a catalog from puzzles already in memory.
    ///
    /// Every category is validated the same way loaded files are.
    pub fn new(by_category: HashMap<Category, Vec<Puzzle>>) -> Result<Self, LoadError> {
        for (category, puzzles) in &by_category {
            loader::validate(puzzles, category.id())?;
        }
        Ok(Self { by_category })
    }

    /// The puzzles compiled into the binary.
    pub fn bundled() -> Result<Self, LoadError> {
        let mut by_category = HashMap::new();
        for category in Category::ALL {
            by_category.insert(category, loader::load_bundled(category)?);
        }
        debug!("loaded bundled puzzle catalog");
        Ok(Self { by_category })
    }

    /// Load `<category>.json` for every category from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let mut by_category = HashMap::new();

        for category in Category::ALL {
            let puzzles = loader::load_puzzles_from_path(dir.join(loader::file_name(category)))?;
            info!(%category, count = puzzles.len(), dir = %dir.display(), "loaded puzzles");
            by_category.insert(category, puzzles);
        }

        Ok(Self { by_category })
    }

    pub fn puzzles(&self, category: Category) -> &[Puzzle] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Puzzles of `category` whose age range overlaps `age`, in data order.
    ///
    /// With no age selected every puzzle of the category is returned.
    pub fn filtered(&self, category: Category, age: Option<AgeRange>) -> Vec<Puzzle> {
        let puzzles = self.puzzles(category);
        match age {
            Some(age) => puzzles
                .iter()
                .filter(|puzzle| puzzle.age_range.overlaps(age))
                .cloned()
                .collect(),
            None => puzzles.to_vec(),
        }
    }
}
