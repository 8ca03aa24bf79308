//! # skillsprout
//!
//! A terminal puzzle game for children aged 3 to 6.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use skillsprout::{Config, QuizError, SkillSprout};
//!
//! fn main() -> Result<(), QuizError> {
//!     // ./skillsprout.toml if present, otherwise defaults
//!     let config = Config::load(None)?;
//!
//!     let game = SkillSprout::open(&config, Some("/puzzle/patterns?age=3-4"))?;
//!     game.run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod auth;
pub mod config;
mod data;
mod error;
mod game;
pub mod logging;
mod models;
mod route;
pub mod storage;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

pub use app::{App, HomeMenu, LoginField, LoginForm, PuzzleSession, Screen};
pub use auth::{AuthContext, AuthError};
pub use config::Config;
pub use data::{LoadError, PuzzleCatalog, load_puzzles_from_path, parse_puzzles};
pub use error::QuizError;
pub use game::{AnswerOutcome, GameState};
pub use models::{AgeRange, AgeRangeError, Category, Puzzle, Role, User};
pub use route::{Route, RouteError};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

/// Load the catalog named by `config`: the data directory if set, else the bundled puzzles.
pub fn load_catalog(config: &Config) -> Result<PuzzleCatalog, LoadError> {
    match &config.data_dir {
        Some(dir) => PuzzleCatalog::from_dir(dir),
        None => PuzzleCatalog::bundled(),
    }
}

/// A game instance that can be run in the terminal.
pub struct SkillSprout<S: Storage> {
    app: App<S>,
}

impl SkillSprout<FileStorage> {
    /// Build a game from configuration, restoring any saved session.
    pub fn from_config(config: &Config) -> Result<Self, QuizError> {
        let catalog = load_catalog(config)?;
        let auth = AuthContext::restore(FileStorage::new(&config.storage_path))?;
        Ok(Self::new(auth, catalog, config.default_age))
    }

    /// Like [`SkillSprout::from_config`], then open `route` if given.
    ///
    /// The route is parsed before anything is loaded.
    pub fn open(config: &Config, route: Option<&str>) -> Result<Self, QuizError> {
        let route = route.map(str::parse::<Route>).transpose()?;
        let game = Self::from_config(config)?;
        Ok(match route {
            Some(route) => game.with_route(route),
            None => game,
        })
    }
}

impl<S: Storage> SkillSprout<S> {
    pub fn new(auth: AuthContext<S>, catalog: PuzzleCatalog, default_age: AgeRange) -> Self {
        Self {
            app: App::new(auth, catalog, default_age),
        }
    }

    /// Open `route` before the game starts.
    pub fn with_route(mut self, route: Route) -> Self {
        self.app.navigate(route);
        self
    }

    /// Run the game in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        let result = run_event_loop(guard.terminal(), &mut self.app);
        info!("session ended");
        result
    }

    pub fn app(&self) -> &App<S> {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App<S> {
        &mut self.app
    }
}

fn run_event_loop<S: Storage>(
    terminal: &mut terminal::AppTerminal,
    app: &mut App<S>,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the game should exit.
pub fn handle_input<S: Storage>(app: &mut App<S>, key: KeyCode) -> Result<bool, QuizError> {
    match app.screen() {
        Screen::Login(_) => handle_login_input(app, key),
        Screen::Home(_) => handle_home_input(app, key),
        Screen::Puzzle(_) => Ok(handle_puzzle_input(app, key)),
        Screen::NotFound => Ok(handle_not_found_input(app, key)),
    }
}

fn handle_login_input<S: Storage>(app: &mut App<S>, key: KeyCode) -> Result<bool, QuizError> {
    match key {
        KeyCode::Esc => return Ok(true),
        KeyCode::Enter => app.submit_login()?,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.login_toggle_focus(),
        KeyCode::F(1) => app.toggle_credentials(),
        KeyCode::Backspace => app.login_input_pop(),
        KeyCode::Char(c) => app.login_input_push(c),
        _ => {}
    }
    Ok(false)
}

fn handle_home_input<S: Storage>(app: &mut App<S>, key: KeyCode) -> Result<bool, QuizError> {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.select_previous_age(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next_age(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_category(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_category(),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_selected_category(),
        KeyCode::Char('o') | KeyCode::Char('O') => app.logout()?,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_puzzle_input<S: Storage>(app: &mut App<S>, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.answer_option(index);
        }
        KeyCode::Char('h') | KeyCode::Char('H') => app.toggle_hint(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => app.next_puzzle(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_not_found_input<S: Storage>(app: &mut App<S>, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App<MemoryStorage> {
        let auth = AuthContext::restore(MemoryStorage::new()).unwrap();
        App::new(auth, PuzzleCatalog::bundled().unwrap(), AgeRange::default())
    }

    fn press_all(app: &mut App<MemoryStorage>, keys: &[KeyCode]) -> bool {
        keys.iter()
            .any(|key| handle_input(app, *key).unwrap())
    }

    fn type_text(app: &mut App<MemoryStorage>, text: &str) {
        for c in text.chars() {
            handle_input(app, KeyCode::Char(c)).unwrap();
        }
    }

    fn login(app: &mut App<MemoryStorage>) {
        type_text(app, "teacher");
        press_all(app, &[KeyCode::Tab]);
        type_text(app, "teacher123");
        press_all(app, &[KeyCode::Enter]);
    }

    #[test]
    fn q_is_typed_on_login_but_quits_elsewhere() {
        let mut app = app();
        assert!(!press_all(&mut app, &[KeyCode::Char('q')]));
        let Screen::Login(form) = app.screen() else {
            panic!("expected login screen");
        };
        assert_eq!(form.username, "q");

        press_all(&mut app, &[KeyCode::Backspace]);
        login(&mut app);
        assert!(matches!(app.screen(), Screen::Home(_)));
        assert!(press_all(&mut app, &[KeyCode::Char('q')]));
    }

    #[test]
    fn keyboard_walkthrough() {
        let mut app = app();
        login(&mut app);

        // Patterns at 3-4, then answer pattern_1 wrong with the number key.
        press_all(&mut app, &[KeyCode::Enter, KeyCode::Char('2')]);
        let Screen::Puzzle(session) = app.screen() else {
            panic!("expected puzzle screen");
        };
        assert_eq!(session.game.current().id, "pattern_1");
        assert_eq!(session.game.score(), 0);

        // Locked: another pick is ignored.
        press_all(&mut app, &[KeyCode::Char('1')]);
        let Screen::Puzzle(session) = app.screen() else {
            panic!("expected puzzle screen");
        };
        assert_eq!(session.game.selected(), Some(1));

        press_all(&mut app, &[KeyCode::Char('n'), KeyCode::Char('r')]);
        let Screen::Puzzle(session) = app.screen() else {
            panic!("expected puzzle screen");
        };
        assert_eq!(session.game.current_index(), 0);
        assert!(!session.game.is_revealed());

        press_all(&mut app, &[KeyCode::Char('b')]);
        assert!(matches!(app.screen(), Screen::Home(_)));
    }

    #[test]
    fn bad_start_route_is_rejected_before_loading() {
        let config = Config {
            storage_path: "no/such/dir/storage.json".into(),
            ..Config::default()
        };
        let err = SkillSprout::open(&config, Some("/settings")).err().unwrap();
        assert!(matches!(err, QuizError::Route(_)));
        assert!(!config.storage_path.exists());
    }

    #[test]
    fn logout_key_returns_to_login() {
        let mut app = app();
        login(&mut app);
        press_all(&mut app, &[KeyCode::Char('o')]);
        assert!(matches!(app.screen(), Screen::Login(_)));
        assert!(app.user().is_none());
    }
}
