use tracing::{debug, info};

use crate::auth::{AuthContext, AuthError};
use crate::data::PuzzleCatalog;
use crate::game::{AnswerOutcome, GameState};
use crate::models::{AgeRange, Category, User};
use crate::route::Route;
use crate::storage::{Storage, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
    pub show_credentials: bool,
}

#[derive(Debug, Clone)]
pub struct HomeMenu {
    pub selected_age: AgeRange,
    pub selected_category: Category,
}

#[derive(Debug, Clone)]
pub struct PuzzleSession {
    pub category: Category,
    pub age: Option<AgeRange>,
    pub game: GameState,
    /// Highlighted option, independent of the locked-in answer.
    pub cursor: usize,
}

#[derive(Debug, Clone)]
pub enum Screen {
    Login(LoginForm),
    Home(HomeMenu),
    Puzzle(PuzzleSession),
    NotFound,
}

pub struct App<S: Storage> {
    screen: Screen,
    auth: AuthContext<S>,
    catalog: PuzzleCatalog,
    default_age: AgeRange,
    /// Where to go once the user logs in.
    pending: Option<Route>,
}

impl<S: Storage> App<S> {
    pub fn new(auth: AuthContext<S>, catalog: PuzzleCatalog, default_age: AgeRange) -> Self {
        let mut app = Self {
            screen: Screen::NotFound,
            auth,
            catalog,
            default_age,
            pending: None,
        };
        app.navigate(Route::Home);
        app
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn user(&self) -> Option<&User> {
        self.auth.user()
    }

    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    pub fn navigate(&mut self, route: Route) {
        debug!(%route, "navigate");

        if route.is_protected() && !self.auth.is_authenticated() {
            self.pending = Some(route);
            self.screen = Screen::Login(LoginForm::default());
            return;
        }

        self.screen = match route {
            Route::Login | Route::Home => Screen::Home(HomeMenu {
                selected_age: self.default_age,
                selected_category: Category::Patterns,
            }),
            Route::Puzzle { category, age } => self.open_puzzle(&category, age.as_deref()),
        };
    }

    fn open_puzzle(&self, category: &str, age: Option<&str>) -> Screen {
        let Some(category) = Category::from_id(category) else {
            info!(category, "unknown category");
            return Screen::NotFound;
        };
        let age = match age.map(str::parse::<AgeRange>).transpose() {
            Ok(age) => age,
            Err(err) => {
                info!("invalid age in route: {err}");
                return Screen::NotFound;
            }
        };

        let puzzles = self.catalog.filtered(category, age);
        match GameState::new(puzzles) {
            Some(game) => {
                info!(%category, age = ?age.map(AgeRange::as_str), total = game.total(), "starting puzzles");
                Screen::Puzzle(PuzzleSession {
                    category,
                    age,
                    game,
                    cursor: 0,
                })
            }
            None => Screen::NotFound,
        }
    }

    pub fn go_home(&mut self) {
        self.navigate(Route::Home);
    }

    // Login screen

    fn login_form(&mut self) -> Option<&mut LoginForm> {
        match &mut self.screen {
            Screen::Login(form) => Some(form),
            _ => None,
        }
    }

    pub fn login_input_push(&mut self, c: char) {
        if let Some(form) = self.login_form() {
            match form.focus {
                LoginField::Username => form.username.push(c),
                LoginField::Password => form.password.push(c),
            }
        }
    }

    pub fn login_input_pop(&mut self) {
        if let Some(form) = self.login_form() {
            match form.focus {
                LoginField::Username => form.username.pop(),
                LoginField::Password => form.password.pop(),
            };
        }
    }

    pub fn login_toggle_focus(&mut self) {
        if let Some(form) = self.login_form() {
            form.focus = match form.focus {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
        }
    }

    pub fn toggle_credentials(&mut self) {
        if let Some(form) = self.login_form() {
            form.show_credentials = !form.show_credentials;
        }
    }

    /// Submit the login form. Validation failures are shown on the form;
    /// only storage failures are returned.
    pub fn submit_login(&mut self) -> Result<(), AuthError> {
        let Screen::Login(form) = &mut self.screen else {
            return Ok(());
        };
        form.error = None;

        match self.auth.login(&form.username, &form.password) {
            Ok(_) => {
                let route = self.pending.take().unwrap_or(Route::Home);
                self.navigate(route);
                Ok(())
            }
            Err(err @ AuthError::MissingFields) => {
                form.error = Some(err.to_string());
                Ok(())
            }
            Err(err @ AuthError::InvalidCredentials) => {
                form.error = Some(err.to_string());
                form.password.clear();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    // Home screen

    fn home_menu(&mut self) -> Option<&mut HomeMenu> {
        match &mut self.screen {
            Screen::Home(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn select_next_age(&mut self) {
        if let Some(menu) = self.home_menu() {
            menu.selected_age = cycle(&AgeRange::SELECTABLE, menu.selected_age, 1);
        }
    }

    pub fn select_previous_age(&mut self) {
        if let Some(menu) = self.home_menu() {
            menu.selected_age = cycle(&AgeRange::SELECTABLE, menu.selected_age, -1);
        }
    }

    pub fn select_next_category(&mut self) {
        if let Some(menu) = self.home_menu() {
            menu.selected_category = cycle(&Category::ALL, menu.selected_category, 1);
        }
    }

    pub fn select_previous_category(&mut self) {
        if let Some(menu) = self.home_menu() {
            menu.selected_category = cycle(&Category::ALL, menu.selected_category, -1);
        }
    }

    pub fn open_selected_category(&mut self) {
        if let Screen::Home(menu) = &self.screen {
            let route = Route::puzzle(menu.selected_category, menu.selected_age);
            self.navigate(route);
        }
    }

    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.auth.logout()?;
        self.pending = None;
        self.screen = Screen::Login(LoginForm::default());
        Ok(())
    }

    // Puzzle screen

    fn puzzle_session(&mut self) -> Option<&mut PuzzleSession> {
        match &mut self.screen {
            Screen::Puzzle(session) => Some(session),
            _ => None,
        }
    }

    pub fn select_next_option(&mut self) {
        if let Some(session) = self.puzzle_session() {
            let count = session.game.current().options.len();
            if count > 0 {
                session.cursor = (session.cursor + 1) % count;
            }
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(session) = self.puzzle_session() {
            let count = session.game.current().options.len();
            if count > 0 {
                session.cursor = (session.cursor + count - 1) % count;
            }
        }
    }

    /// Answer with the highlighted option.
    pub fn submit_answer(&mut self) -> Option<AnswerOutcome> {
        let session = self.puzzle_session()?;
        let cursor = session.cursor;
        session.game.select_answer(cursor)
    }

    /// Answer with option `index` directly.
    pub fn answer_option(&mut self, index: usize) -> Option<AnswerOutcome> {
        let session = self.puzzle_session()?;
        let outcome = session.game.select_answer(index);
        if outcome.is_some() {
            session.cursor = index;
        }
        outcome
    }

    pub fn next_puzzle(&mut self) {
        if let Some(session) = self.puzzle_session() {
            if session.game.next() {
                session.cursor = 0;
            }
        }
    }

    pub fn restart(&mut self) {
        if let Some(session) = self.puzzle_session() {
            session.game.restart();
            session.cursor = 0;
        }
    }

    pub fn toggle_hint(&mut self) {
        if let Some(session) = self.puzzle_session() {
            session.game.toggle_hint();
        }
    }
}

fn cycle<T: Copy + PartialEq>(items: &[T], current: T, step: isize) -> T {
    let len = items.len() as isize;
    let index = items.iter().position(|item| *item == current).unwrap_or(0) as isize;
    items[(index + step).rem_euclid(len) as usize]
}
