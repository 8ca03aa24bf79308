use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::PuzzleSession;
use crate::game::{AnswerOutcome, GameState};

const OPTION_KEYS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub fn render(frame: &mut Frame, area: Rect, session: &PuzzleSession) {
    let game = &session.game;

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(5),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], game);
    render_category(frame, chunks[1], session);
    render_question(frame, chunks[2], game);
    render_options(frame, chunks[3], game, session.cursor);
    render_feedback(frame, chunks[4], game);
    render_progress(frame, chunks[5], game);
    render_controls(frame, chunks[6], game);
}

fn render_header(frame: &mut Frame, area: Rect, game: &GameState) {
    let score = format!("Score: {}/{}", game.score(), game.total());
    let widget = Paragraph::new(score)
        .alignment(Alignment::Right)
        .fg(Color::Magenta)
        .bold();
    frame.render_widget(widget, area);
}

fn render_category(frame: &mut Frame, area: Rect, session: &PuzzleSession) {
    let category = session.category;
    let content = vec![
        Line::from(Span::styled(
            format!("{}  {}", category.emoji(), category.name()),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(
            format!(
                "Puzzle {} of {}",
                session.game.current_index() + 1,
                session.game.total()
            )
            .fg(Color::Gray),
        ),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_question(frame: &mut Frame, area: Rect, game: &GameState) {
    let puzzle = game.current();
    let widget = Paragraph::new(puzzle.question.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(format!(" {} ", puzzle.title))
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::vertical(1)),
        );
    frame.render_widget(widget, area);
}

fn option_style(game: &GameState, index: usize, highlighted: bool) -> Style {
    if game.is_revealed() {
        if game.current().is_correct(index) {
            Style::default().fg(Color::Green).bold()
        } else if game.selected() == Some(index) {
            Style::default().fg(Color::Red).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    } else if highlighted {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_options(frame: &mut Frame, area: Rect, game: &GameState, cursor: usize) {
    let options = &game.current().options;
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let highlighted = !game.is_revealed() && index == cursor;
        let style = option_style(game, index, highlighted);
        let marker = if highlighted { ">" } else { " " };
        let key = OPTION_KEYS.get(index).copied().unwrap_or(' ');

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), style),
            Span::styled(format!("{key}. "), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, game: &GameState) {
    let mut content = Vec::new();

    match game.outcome() {
        Some(outcome) => {
            let (text, color) = match outcome {
                AnswerOutcome::Correct => ("🎉 Awesome! You got it!", Color::Green),
                AnswerOutcome::Incorrect => ("💪 Nice try! Keep going!", Color::Red),
            };
            content.push(Line::from(Span::styled(
                text,
                Style::default().fg(color).bold(),
            )));

            if game.is_complete() {
                content.push(Line::from("You completed all puzzles! 🎊".fg(Color::White)));
                content.push(Line::from(
                    "[r] Play Again  ·  [b] New Category".fg(Color::Magenta),
                ));
            } else {
                content.push(Line::from("[n] Next Puzzle ➡️".fg(Color::Magenta)));
            }
        }
        None => {
            if let Some(hint) = &game.current().hint {
                if game.hint_shown() {
                    content.push(Line::from("💡 [h] Hide Hint".fg(Color::Yellow)));
                    content.push(Line::from(Span::styled(
                        hint.as_str(),
                        Style::default().fg(Color::Yellow),
                    )));
                } else {
                    content.push(Line::from("💡 [h] Show Hint".fg(Color::Yellow)));
                }
            }
        }
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, game: &GameState) {
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
        .ratio(game.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, game: &GameState) {
    let text = if game.is_revealed() {
        "n next  ·  r restart  ·  b home  ·  q quit"
    } else {
        "j/k navigate  ·  enter select  ·  1-9 pick  ·  h hint  ·  b home  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
