use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;

const PARAMETER_NOTES: [(&str, &str); 5] = [
    (
        "Food hypersensitivity share",
        "percent of population with food-related hypersensitivities. Literature suggests 5-25%.",
    ),
    (
        "Care-seeking & adoption",
        "define scale that drives costs/savings through engagement.",
    ),
    (
        "Response, GP visits avoided & days saved",
        "translate symptom relief into healthcare and productivity savings.",
    ),
    (
        "Platform cost & GP unit cost",
        "key levers for payer break-even; productivity is optional for payer-only views.",
    ),
    (
        "Removed",
        "tele-dietitian, specialist, and ED components are not modelled.",
    ),
];

const MODEL_NOTES: [&str; 6] = [
    "people with hypersensitivity = population x share",
    "care-seekers = hypersensitive x care-seeking rate",
    "active users = care-seekers x adoption",
    "responders = active users x response rate",
    "gross = responders x (GP visits avoided x GP unit cost + days saved x value per day)",
    "net = gross - active users x platform cost",
];

const FOOTER: &str = "This dashboard is a planning tool. Use scenario presets (Low/Medium/Best), \
derived from 10,000 Monte Carlo simulations, to explore break-even thresholds before piloting.";

pub struct NotesScreen;

impl NotesScreen {
    pub fn new() -> Self {
        Self
    }

    fn heading(text: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn lines() -> Vec<Line<'static>> {
        let mut lines = vec![Self::heading("Parameters explanation"), Line::from("")];
        for (term, text) in PARAMETER_NOTES {
            lines.push(Line::from(vec![
                Span::raw("  * "),
                Span::styled(term, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(": {text}")),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Self::heading("Model"));
        lines.push(Line::from(""));
        lines.extend(MODEL_NOTES.iter().map(|n| Line::from(format!("  {n}"))));
        lines.push(Line::from(""));
        lines.push(Line::from(
            "  Money is kept in EUR and converted only for display (EUR 1.00, USD 1.09, GBP 0.84).",
        ));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(FOOTER, Style::default().fg(HELP_COLOR))));
        lines
    }
}

impl Default for NotesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for NotesScreen {
    fn title(&self) -> &str {
        "Notes"
    }
}

impl Component for NotesScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let max_offset = Self::lines().len().saturating_sub(1);
        let offset = &mut state.notes_state.scroll_offset;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                *offset = (*offset + 1).min(max_offset);
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                *offset = offset.saturating_sub(1);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph = Paragraph::new(Self::lines())
            .block(Block::default().borders(Borders::ALL).title(" Notes "))
            .wrap(Wrap { trim: false })
            .scroll((state.notes_state.scroll_offset as u16, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_scroll_is_bounded() {
        let mut screen = NotesScreen::new();
        let mut state = AppState::default();
        let up = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);

        screen.handle_key(up, &mut state);
        assert_eq!(state.notes_state.scroll_offset, 0);

        for _ in 0..100 {
            screen.handle_key(down, &mut state);
        }
        assert_eq!(
            state.notes_state.scroll_offset,
            NotesScreen::lines().len() - 1
        );
    }
}
