//! UI rendering

mod effects_view;
mod events_view;
mod gear_view;
mod help_view;
mod players_view;
mod stat_view;

use crate::app::{App, Tab};
use campaign_core::Rarity;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::cmp::Ordering;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status + keys
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Players => players_view::draw(f, app, chunks[1]),
        Tab::Stats => stat_view::draw(f, app, chunks[1]),
        Tab::Effects => effects_view::draw(f, app, chunks[1]),
        Tab::Inventory => gear_view::draw(f, app, chunks[1]),
        Tab::Events => events_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("t/d", "Turn/Day"), ("Tab", "Next tab"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Players => vec![("↑/↓", "Select player")],
        Tab::Stats => vec![("↑/↓", "Select effect"), ("x", "Remove effect")],
        Tab::Effects => vec![("↑/↓", "Select effect"), ("a", "Apply to player")],
        Tab::Inventory => vec![
            ("←/→", "Items/Abilities"),
            ("e", "Equip"),
            ("u", "Use"),
            ("g", "Trigger"),
            ("s", "Enable/Disable"),
        ],
        Tab::Events => vec![("↑/↓", "Scroll")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    let mode = if app.read_only { " READ-ONLY " } else { " GM " };
    spans.push(Span::styled(
        mode,
        Style::default()
            .fg(Color::Black)
            .bg(if app.read_only { Color::Red } else { Color::Green }),
    ));
    spans.push(Span::raw(" "));

    for (key, desc) in tab_keys.iter().chain(common_keys.iter()) {
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}  ", desc), Style::default().fg(Color::White)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.status)),
    );

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let title = match app.current_player() {
        Some(player) => format!(
            " Campaign | {} | turn {} day {} ",
            player.name, app.time.0, app.time.1
        ),
        None => " Campaign ".to_string(),
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn rarity_to_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::White,
        Rarity::Uncommon => Color::Green,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Rgb(175, 96, 37),
        Rarity::Mythical => Color::Red,
        Rarity::Story => Color::Cyan,
    }
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Selection marker and style for a list row
pub fn row_style(selected: bool) -> (&'static str, Style) {
    if selected {
        ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("  ", Style::default().fg(Color::White))
    }
}

/// Signed modifier, green for buffs and red for debuffs
pub fn modifier_span(modifier: i32) -> Span<'static> {
    let color = if modifier > 0 {
        Color::Green
    } else if modifier < 0 {
        Color::Red
    } else {
        Color::DarkGray
    };
    Span::styled(format!("{:+}", modifier), Style::default().fg(color))
}

/// Green above base, red below
fn computed_color(base: i32, computed: i32) -> Color {
    match computed.cmp(&base) {
        Ordering::Greater => Color::Green,
        Ordering::Less => Color::Red,
        Ordering::Equal => Color::White,
    }
}

pub fn stat_line_with_computed(name: &str, base: i32, computed: i32) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{:14}", name), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:>5}", computed),
            Style::default().fg(computed_color(base, computed)),
        ),
    ];
    if base != computed {
        spans.push(Span::styled(
            format!("  (base {})", base),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
