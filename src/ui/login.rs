//! Login screen.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{LoginField, LoginForm};
use crate::auth::DEMO_ACCOUNTS;

pub fn render(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let credentials_height = if form.show_credentials { 8 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Length(credentials_height),
        Constraint::Fill(1),
    ])
    .split(area);

    let column = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(50),
        Constraint::Fill(1),
    ]);

    render_form(frame, column.split(chunks[1])[1], form);
    if form.show_credentials {
        render_credentials(frame, column.split(chunks[2])[1]);
    }
}

fn render_form(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let masked = "•".repeat(form.password.chars().count());

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🎮 SkillSprout",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from("Welcome Back!".fg(Color::Gray)),
        Line::from(""),
        field_line("Username", &form.username, form.focus == LoginField::Username),
        field_line("Password", &masked, form.focus == LoginField::Password),
        Line::from(""),
    ];

    match &form.error {
        Some(err) => content.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red).bold(),
        ))),
        None => content.push(Line::from("")),
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "[Enter] Login 🚀",
        Style::default().fg(Color::Green).bold(),
    )));
    content.push(Line::from(
        "Tab switch field  ·  F1 demo credentials  ·  Esc quit".fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Login to Continue ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(widget, area);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if focused { "_" } else { " " };

    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(value, Style::default().fg(Color::Yellow)),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ])
}

fn render_credentials(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Sample Login Credentials:",
        Style::default().fg(Color::White).bold(),
    ))];

    for account in DEMO_ACCOUNTS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", account.role), Style::default().fg(Color::Magenta)),
            Span::styled(
                format!("{} / {}", account.username, account.password),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Magenta)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
