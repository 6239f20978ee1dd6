//! Key output tiles: counts, gross savings, costs and net

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{caption_style, value_style};
use breakeven_core::currency::{format_count, format_currency};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct KeyOutputs;

/// Caption and formatted figure for one tile
#[derive(Debug, PartialEq)]
struct Tile {
    caption: &'static str,
    value: String,
}

impl KeyOutputs {
    pub fn new() -> Self {
        Self
    }

    fn tiles(state: &AppState) -> [Tile; 4] {
        let r = state.result();
        let currency = state.store.currency();
        [
            Tile {
                caption: "Active users (annual)",
                value: format_count(r.active_users),
            },
            Tile {
                caption: "Responders (symptom improved)",
                value: format_count(r.responders),
            },
            Tile {
                caption: "Total gross savings (annual)",
                value: format_currency(r.total_gross, currency),
            },
            Tile {
                caption: "Program costs (annual)",
                value: format_currency(r.program_costs, currency),
            },
        ]
    }

    fn render_tile(frame: &mut Frame, area: Rect, tile: &Tile) {
        let lines = vec![
            Line::from(Span::styled(tile.caption, caption_style())),
            Line::from(Span::styled(
                tile.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_net(frame: &mut Frame, area: Rect, state: &AppState) {
        let r = state.result();
        let currency = state.store.currency();
        let lines = vec![
            Line::from(Span::styled("Net annual savings", caption_style())),
            Line::from(Span::styled(
                format_currency(r.net, currency),
                value_style(r.net).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "Net per active user: {}",
                    format_currency(r.net_per_user(), currency)
                ),
                caption_style(),
            )),
        ];
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}

impl Default for KeyOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for KeyOutputs {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Counts
                Constraint::Length(4), // Money
                Constraint::Length(5), // Net
            ])
            .split(area);

        let tiles = Self::tiles(state);
        for (row, pair) in rows.iter().take(2).zip(tiles.chunks(2)) {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            for (col, tile) in cols.iter().zip(pair) {
                Self::render_tile(frame, *col, tile);
            }
        }

        Self::render_net(frame, rows[2], state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case_tiles() {
        let state = AppState::default();
        let values: Vec<String> = KeyOutputs::tiles(&state)
            .into_iter()
            .map(|t| t.value)
            .collect();
        assert_eq!(
            values,
            vec!["10,809,600", "5,945,280", "€2,378,112,000", "€216,192,000"]
        );
    }
}
