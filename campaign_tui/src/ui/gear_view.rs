//! Gear tab view - inventory and abilities of the selected player

use super::{rarity_to_color, row_style};
use crate::app::{App, GearFocus};
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

    let snapshot = app.snapshot();

    let mut items: Vec<Line> = vec![];
    let mut abilities: Vec<Line> = vec![];
    if let Some(snapshot) = &snapshot {
        let focused = app.gear_focus == GearFocus::Items;
        for (i, entry) in snapshot.inventory.iter().enumerate() {
            let (prefix, style) = row_style(focused && i == app.selected_item);
            let marker = if entry.link.is_equipped { "[E] " } else { "    " };
            let mut spans = vec![
                Span::styled(prefix, style),
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(entry.item.name.clone(), Style::default().fg(rarity_to_color(entry.item.rarity))),
                Span::styled(format!(" x{}", entry.link.quantity), Style::default().fg(Color::Gray)),
            ];
            if let Some(passive) = &entry.passive_effect {
                spans.push(Span::styled(
                    format!("  passive: {}", passive.name),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if let Some(active) = &entry.active_effect {
                spans.push(Span::styled(
                    format!("  use: {}", active.name),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            items.push(Line::from(spans));
        }

        let focused = app.gear_focus == GearFocus::Abilities;
        for (i, entry) in snapshot.abilities.iter().enumerate() {
            let (prefix, style) = row_style(focused && i == app.selected_ability);
            let state = if entry.link.is_active {
                Span::styled(" on ", Style::default().fg(Color::Green))
            } else {
                Span::styled(" off", Style::default().fg(Color::Red))
            };
            let effect = entry.effect.as_ref().map(|e| e.name.as_str()).unwrap_or("-");
            abilities.push(Line::from(vec![
                Span::styled(prefix, style),
                state,
                Span::styled(format!(" {}", entry.ability.name), style),
                Span::styled(format!("  {}", effect), Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    let border = |focused: bool| {
        Style::default().fg(if focused { Color::Yellow } else { Color::White })
    };

    f.render_widget(
        Paragraph::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border(app.gear_focus == GearFocus::Items))
                .title(" Inventory "),
        ),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(abilities).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border(app.gear_focus == GearFocus::Abilities))
                .title(" Abilities "),
        ),
        chunks[1],
    );
}
