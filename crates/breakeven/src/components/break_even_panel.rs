//! Break-even thresholds: for each parameter, the value at which net savings
//! reach zero with everything else held at its current setting.

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_field_value;
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR};
use breakeven_core::CurrencyCode;
use breakeven_core::analysis::{BreakEvenOutcome, BreakEvenResult};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct BreakEvenPanel;

impl BreakEvenPanel {
    pub fn new() -> Self {
        Self
    }

    fn describe(result: &BreakEvenResult, currency: CurrencyCode) -> (String, Style) {
        match result.outcome {
            BreakEvenOutcome::Crossing(value) => (
                format_field_value(result.field, value, currency),
                Style::default(),
            ),
            BreakEvenOutcome::AlwaysProfitable => (
                "profitable across range".to_string(),
                Style::default().fg(POSITIVE_COLOR),
            ),
            BreakEvenOutcome::NeverProfitable => (
                "loss across range".to_string(),
                Style::default().fg(NEGATIVE_COLOR),
            ),
        }
    }
}

impl Default for BreakEvenPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BreakEvenPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let currency = state.store.currency();
        let lines: Vec<Line> = state
            .break_even_results()
            .iter()
            .map(|result| {
                let (text, style) = Self::describe(result, currency);
                Line::from(vec![
                    Span::styled(
                        format!("{:<48}", result.field.label()),
                        Style::default().fg(HELP_COLOR),
                    ),
                    Span::styled(text, style),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Break-even thresholds "),
        );
        frame.render_widget(paragraph, area);
    }
}
