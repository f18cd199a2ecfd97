//! Players tab view - roster with summary counts

use super::{row_style, section_header};
use crate::app::App;
use campaign_core::Gender;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_roster(f, app, chunks[0]);
    draw_card(f, app, chunks[1]);
}

fn draw_roster(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    for (i, player) in app.players.iter().enumerate() {
        let (prefix, style) = row_style(i == app.selected_player);
        let mut spans = vec![Span::styled(prefix, style), Span::styled(player.name.clone(), style)];
        if player.in_battle {
            spans.push(Span::styled("  ⚔", Style::default().fg(Color::Red)));
        }
        if player.is_online {
            spans.push(Span::styled("  ●", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(spans));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled("  (no players)", Style::default().fg(Color::DarkGray))));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Players "));
    f.render_widget(paragraph, area);
}

fn draw_card(f: &mut Frame, app: &App, area: Rect) {
    let Some(snapshot) = app.snapshot() else {
        f.render_widget(Block::default().borders(Borders::ALL).title(" Card "), area);
        return;
    };
    let player = &snapshot.player;
    let summary = snapshot.summary();
    let stats = snapshot.final_stats();

    let gender = match player.gender {
        Gender::Male => "male",
        Gender::Female => "female",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(player.name.clone(), Style::default().fg(Color::Yellow)),
            Span::styled(format!("  ({})", gender), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(format!("Health {}/{}", stats.health, stats.max_health)),
        Line::from(""),
        section_header("Summary"),
        Line::from(format!("Abilities        {}", summary.total_abilities)),
        Line::from(format!("Items            {}", summary.total_items)),
        Line::from(format!("Equipped         {}", summary.equipped_items_count)),
        Line::from(format!("Active effects   {}", summary.active_effects_count)),
    ];

    if !player.history.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_header("History"));
        lines.push(Line::from(player.history.clone()));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Card "))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
