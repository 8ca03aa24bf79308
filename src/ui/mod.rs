mod home;
mod login;
mod not_found;
mod puzzle;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};
use crate::storage::Storage;

pub fn render<S: Storage>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Login(form) => login::render(frame, area, form),
        Screen::Home(menu) => home::render(frame, area, menu, app.user()),
        Screen::Puzzle(session) => puzzle::render(frame, area, session),
        Screen::NotFound => not_found::render(frame, area),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::auth::AuthContext;
    use crate::data::PuzzleCatalog;
    use crate::models::AgeRange;
    use crate::storage::MemoryStorage;

    fn draw(app: &App<MemoryStorage>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App<MemoryStorage> {
        let auth = AuthContext::restore(MemoryStorage::new()).unwrap();
        App::new(auth, PuzzleCatalog::bundled().unwrap(), AgeRange::default())
    }

    #[test]
    fn login_screen_shows_errors() {
        let mut app = app();
        app.submit_login().unwrap();
        let screen = draw(&app);
        assert!(screen.contains("Login to Continue"));
        assert!(screen.contains("Please enter both username and password"));
    }

    fn log_in(app: &mut App<MemoryStorage>, username: &str, password: &str) {
        username.chars().for_each(|c| app.login_input_push(c));
        app.login_toggle_focus();
        password.chars().for_each(|c| app.login_input_push(c));
        app.submit_login().unwrap();
    }

    #[test]
    fn credentials_panel_toggles() {
        let mut app = app();
        assert!(!draw(&app).contains("Sample Login Credentials:"));

        app.toggle_credentials();
        let screen = draw(&app);
        assert!(screen.contains("Sample Login Credentials:"));
        assert!(screen.contains("admin / admin123"));
        assert!(screen.contains("teacher / teacher123"));
        assert!(screen.contains("parent / parent123"));
    }

    #[test]
    fn home_screen_welcomes_user_with_role() {
        let mut app = app();
        log_in(&mut app, "admin", "admin123");

        let screen = draw(&app);
        assert!(screen.contains("Welcome, admin! (Administrator)"));
        assert!(screen.contains("Fun Puzzles for Smart Kids!"));
    }

    #[test]
    fn hint_shows_and_hides() {
        let mut app = app();
        log_in(&mut app, "teacher", "teacher123");
        app.navigate("/puzzle/patterns?age=3-4".parse().unwrap());

        let screen = draw(&app);
        assert!(screen.contains("[h] Show Hint"));
        assert!(!screen.contains("It repeats red, green, red, green..."));

        app.toggle_hint();
        let screen = draw(&app);
        assert!(screen.contains("[h] Hide Hint"));
        assert!(screen.contains("It repeats red, green, red, green..."));

        app.toggle_hint();
        assert!(draw(&app).contains("[h] Show Hint"));
    }

    #[test]
    fn last_answer_shows_completion() {
        let mut app = app();
        log_in(&mut app, "parent", "parent123");
        app.navigate("/puzzle/patterns?age=3-4".parse().unwrap());

        for _ in 0..4 {
            app.answer_option(0);
            assert!(!draw(&app).contains("You completed all puzzles!"));
            app.next_puzzle();
        }
        assert!(!draw(&app).contains("You completed all puzzles!"));

        app.answer_option(0);
        assert!(draw(&app).contains("You completed all puzzles!"));
    }

    #[test]
    fn puzzle_screen_shows_score_and_progress() {
        let mut app = app();
        "admin".chars().for_each(|c| app.login_input_push(c));
        app.login_toggle_focus();
        "admin123".chars().for_each(|c| app.login_input_push(c));
        app.submit_login().unwrap();
        app.navigate("/puzzle/patterns?age=3-4".parse().unwrap());
        app.answer_option(1);

        let screen = draw(&app);
        assert!(screen.contains("Score: 0/5"));
        assert!(screen.contains("Puzzle 1 of 5"));
        assert!(screen.contains("Nice try! Keep going!"));
    }

    #[test]
    fn not_found_screen_links_home() {
        let mut app = app();
        "parent".chars().for_each(|c| app.login_input_push(c));
        app.login_toggle_focus();
        "parent123".chars().for_each(|c| app.login_input_push(c));
        app.submit_login().unwrap();
        app.navigate("/puzzle/unknown".parse().unwrap());

        let screen = draw(&app);
        assert!(screen.contains("No puzzles found!"));
        assert!(screen.contains("Go Home"));
    }
}
