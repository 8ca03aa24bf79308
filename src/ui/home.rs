use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::HomeMenu;
use crate::models::{AgeRange, Category, User};

pub fn render(frame: &mut Frame, area: Rect, menu: &HomeMenu, user: Option<&User>) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_banner(frame, chunks[0], user);
    render_title(frame, chunks[1]);
    render_age_picker(frame, chunks[2], menu.selected_age);
    render_categories(frame, chunks[3], menu.selected_category);
    render_controls(frame, chunks[4]);
}

fn render_banner(frame: &mut Frame, area: Rect, user: Option<&User>) {
    let text = match user {
        Some(user) => format!("Welcome, {}! ({})", user.username, user.role),
        None => String::new(),
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "🎮 SkillSprout",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from("Fun Puzzles for Smart Kids!".fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_age_picker(frame: &mut Frame, area: Rect, selected: AgeRange) {
    let mut spans = Vec::new();
    for age in AgeRange::SELECTABLE {
        let style = if age == selected {
            Style::default().fg(Color::Black).bg(Color::Magenta).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", age.label()), style));
        spans.push(Span::raw("   "));
    }

    let content = vec![
        Line::from(Span::styled(
            "Select Your Age 🎂",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(spans),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_categories(frame: &mut Frame, area: Rect, selected: Category) {
    let mut lines = Vec::with_capacity(Category::ALL.len() * 3);

    for category in Category::ALL {
        let is_selected = category == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), style),
            Span::styled(format!("{}  {}", category.emoji(), category.name()), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", category.description()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Categories ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("h/l age  ·  j/k category  ·  enter play  ·  o logout  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
