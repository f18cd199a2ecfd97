//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("1-6", "Jump to tab (Players/Stats/Effects/Gear/Events/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Navigate lists / scroll"),
        key_line("←/h  →/l", "Previous/next player (Gear: switch panel)"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Time"),
        key_line("t", "Advance one turn"),
        key_line("d", "Advance one day"),
        Line::from(""),
        section_header("Effects"),
        key_line("a", "Apply selected definition to the selected player"),
        key_line("x", "Remove selected active effect"),
        Line::from(""),
        section_header("Gear"),
        key_line("e", "Equip/unequip selected item"),
        key_line("u", "Use one of the selected item"),
        key_line("g", "Trigger selected ability"),
        key_line("s", "Enable/disable selected ability"),
        Line::from(""),
        section_header("Rules"),
        Line::from("  Final = base + active effect modifiers + equipped passive modifiers"),
        Line::from("  No clamping: health may drop below zero or exceed max health"),
        Line::from("  Timed effects expire when any of their counters runs out"),
        Line::from("  Passive item effects apply only while equipped and never tick"),
        Line::from(""),
        Line::from(Span::styled(
            "  Changes need CAMPAIGN_MASTER_SECRET; without it the dashboard is read-only",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
