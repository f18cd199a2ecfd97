//! Stats tab view - final attributes, per-source breakdown and active effects

use super::{modifier_span, row_style, section_header, stat_line_with_computed};
use crate::app::App;
use campaign_core::stat_block::ContributionKind;
use campaign_core::Attribute;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_breakdown(f, app, chunks[0]);
    draw_active_effects(f, app, chunks[1]);
}

fn draw_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    if let Some(snapshot) = app.snapshot() {
        let breakdown = snapshot.breakdown();
        for attribute in Attribute::all() {
            lines.push(stat_line_with_computed(
                attribute.label(),
                breakdown.base.get(*attribute),
                breakdown.final_stats.get(*attribute),
            ));
            for contribution in breakdown.for_attribute(*attribute) {
                let kind = match contribution.kind {
                    ContributionKind::Active => "active ",
                    ContributionKind::Passive => "passive",
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("    {} ", kind), Style::default().fg(Color::DarkGray)),
                    modifier_span(contribution.modifier),
                    Span::styled(format!("  {}", contribution.source), Style::default().fg(Color::Gray)),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Final Stats "));
    f.render_widget(paragraph, area);
}

fn draw_active_effects(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![section_header("Active")];

    if let Some(snapshot) = app.snapshot() {
        for (i, applied) in snapshot.active_effects.iter().enumerate() {
            let (prefix, style) = row_style(i == app.selected_instance);
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(applied.name(), style),
                Span::styled(
                    format!("  {}", applied.instance.remaining_label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("  [{}]", applied.instance.source), Style::default().fg(Color::Blue)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(section_header("Equipped passives"));
        for (item, definition) in snapshot.equipment().passives() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(item.to_string(), Style::default().fg(Color::White)),
                Span::styled(format!(": {}", definition.name), Style::default().fg(Color::Gray)),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Effects "));
    f.render_widget(paragraph, area);
}
