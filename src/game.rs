//! Per-session puzzle state: which puzzle is showing, what was picked, and
//! the running score.

use crate::models::Puzzle;

/// Result of picking an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone)]
pub struct GameState {
    puzzles: Vec<Puzzle>,
    current_index: usize,
    selected: Option<usize>,
    revealed: bool,
    score: usize,
    hint_shown: bool,
}

impl GameState {
    /// Start a session over `puzzles`. Returns `None` when there is nothing to play.
    pub fn new(puzzles: Vec<Puzzle>) -> Option<Self> {
        if puzzles.is_empty() {
            return None;
        }

        Some(Self {
            puzzles,
            current_index: 0,
            selected: None,
            revealed: false,
            score: 0,
            hint_shown: false,
        })
    }

    pub fn current(&self) -> &Puzzle {
        &self.puzzles[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.puzzles.len()
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.puzzles.len()
    }

    /// The last puzzle has been answered.
    pub fn is_complete(&self) -> bool {
        self.is_last() && self.revealed
    }

    /// Outcome of the revealed answer, if any.
    pub fn outcome(&self) -> Option<AnswerOutcome> {
        let selected = self.selected.filter(|_| self.revealed)?;
        Some(if self.current().is_correct(selected) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        })
    }

    /// Fraction of puzzles reached so far, counting the current one.
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.puzzles.len() as f64
    }

    /// Lock in `option` for the current puzzle.
    ///
    /// Ignored once an answer is revealed or when `option` is out of range.
    pub fn select_answer(&mut self, option: usize) -> Option<AnswerOutcome> {
        if self.revealed || option >= self.current().options.len() {
            return None;
        }

        self.selected = Some(option);
        self.revealed = true;
        if self.current().is_correct(option) {
            self.score += 1;
        }
        self.outcome()
    }

    /// Move to the next puzzle. Only valid after answering and before the last one.
    pub fn next(&mut self) -> bool {
        if !self.revealed || self.is_last() {
            return false;
        }

        self.current_index += 1;
        self.reset_flags();
        true
    }

    /// Back to the first puzzle with a zero score.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.reset_flags();
    }

    /// Show or hide the hint. No-op for puzzles without one, or after answering.
    pub fn toggle_hint(&mut self) -> bool {
        if self.revealed || self.current().hint.is_none() {
            return false;
        }
        self.hint_shown = !self.hint_shown;
        true
    }

    fn reset_flags(&mut self) {
        self.selected = None;
        self.revealed = false;
        self.hint_shown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PuzzleCatalog;
    use crate::models::{AgeRange, Category};

    fn puzzle(id: &str, correct: usize, hint: Option<&str>) -> Puzzle {
        Puzzle {
            id: id.to_string(),
            age_range: AgeRange::ThreeToFour,
            title: format!("{id} title"),
            question: "?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: correct,
            hint: hint.map(str::to_string),
        }
    }

    fn game() -> GameState {
        GameState::new(vec![
            puzzle("p1", 0, Some("first hint")),
            puzzle("p2", 2, None),
            puzzle("p3", 1, Some("third hint")),
        ])
        .unwrap()
    }

    #[test]
    fn empty_list_has_no_game() {
        assert!(GameState::new(Vec::new()).is_none());
    }

    #[test]
    fn wrong_answer_on_pattern_1_keeps_score() {
        let catalog = PuzzleCatalog::bundled().unwrap();
        let puzzles = catalog.filtered(Category::Patterns, Some("3-4".parse().unwrap()));
        let mut game = GameState::new(puzzles).unwrap();

        assert_eq!(game.current().id, "pattern_1");
        assert_eq!(game.current().correct_answer, 0);
        assert_eq!(game.select_answer(1), Some(AnswerOutcome::Incorrect));
        assert_eq!(game.score(), 0);
        assert!(game.is_revealed());
    }

    #[test]
    fn correct_answer_increments_score() {
        let mut game = game();
        assert_eq!(game.select_answer(0), Some(AnswerOutcome::Correct));
        assert_eq!(game.score(), 1);
        assert_eq!(game.outcome(), Some(AnswerOutcome::Correct));
    }

    #[test]
    fn selection_is_locked_until_next() {
        let mut game = game();
        game.select_answer(1);

        assert_eq!(game.select_answer(0), None);
        assert_eq!(game.selected(), Some(1));
        assert_eq!(game.score(), 0);

        assert!(game.next());
        assert_eq!(game.selected(), None);
        assert_eq!(game.select_answer(2), Some(AnswerOutcome::Correct));
    }

    #[test]
    fn selection_is_locked_until_restart() {
        let mut game = game();
        game.select_answer(0);
        assert_eq!(game.select_answer(1), None);

        game.restart();
        assert_eq!(game.select_answer(1), Some(AnswerOutcome::Incorrect));
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut game = game();
        assert_eq!(game.select_answer(3), None);
        assert!(!game.is_revealed());
    }

    #[test]
    fn next_requires_an_answer_and_stops_at_the_end() {
        let mut game = game();
        assert!(!game.next());
        assert_eq!(game.current_index(), 0);

        for _ in 0..2 {
            game.select_answer(0);
            assert!(game.next());
        }
        assert!(game.is_last());
        game.select_answer(0);
        assert!(game.is_complete());
        assert!(!game.next());
        assert_eq!(game.current_index(), 2);
    }

    #[test]
    fn restart_resets_from_any_state() {
        let mut game = game();
        game.select_answer(0);
        game.next();
        game.toggle_hint();
        game.restart();
        assert_eq!((game.current_index(), game.score()), (0, 0));

        let mut game = self::game();
        game.select_answer(0);
        game.next();
        game.select_answer(2);
        game.next();
        game.select_answer(1);
        assert_eq!(game.score(), 3);
        assert!(game.is_complete());

        game.restart();
        assert_eq!(game.current_index(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.selected(), None);
        assert!(!game.is_revealed());
        assert!(!game.hint_shown());
    }

    #[test]
    fn hint_toggles_only_before_reveal() {
        let mut game = game();
        assert!(game.toggle_hint());
        assert!(game.hint_shown());
        assert!(game.toggle_hint());
        assert!(!game.hint_shown());

        game.toggle_hint();
        game.select_answer(0);
        assert!(!game.toggle_hint());

        game.next();
        assert!(!game.hint_shown());
        assert!(!game.toggle_hint(), "second puzzle has no hint");
    }

    #[test]
    fn progress_counts_current_puzzle() {
        let mut game = game();
        assert!((game.progress() - 1.0 / 3.0).abs() < f64::EPSILON);
        game.select_answer(0);
        game.next();
        assert!((game.progress() - 2.0 / 3.0).abs() < f64::EPSILON);
    }
}
