//! Model controls: selectors for population, currency and scenario, then one
//! row per continuous parameter.

use super::{Component, EventResult};
use crate::state::{AppState, Control};
use crate::util::format::{format_field_value, slider_ratio, slider_track};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, focused_block_with_help};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState},
};

const TRACK_WIDTH: usize = 16;

pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }

    fn control_value(control: Control, state: &AppState) -> String {
        let store = &state.store;
        match control {
            Control::Population => format!(
                "{} ({})",
                store.population(),
                breakeven_core::currency::format_count(store.population().count() as f64)
            ),
            Control::Currency => store.currency().to_string(),
            Control::Scenario => store.scenario().to_string(),
            Control::Field(field) => {
                format_field_value(field, store.value(field), store.currency())
            }
        }
    }

    fn control_item(control: Control, selected: bool, state: &AppState) -> ListItem<'static> {
        let label_style = if selected {
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HELP_COLOR)
        };

        let value = Self::control_value(control, state);
        let value_line = match control {
            Control::Field(field) => match slider_ratio(field, state.store.value(field)) {
                Some(ratio) => Line::from(vec![
                    Span::raw(format!("  {} ", slider_track(ratio, TRACK_WIDTH))),
                    Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                None => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("[{value}]"), Style::default().add_modifier(Modifier::BOLD)),
                ]),
            },
            _ => Line::from(vec![
                Span::raw("  < "),
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" >"),
            ]),
        };

        ListItem::new(Text::from(vec![
            Line::from(Span::styled(control.label(), label_style)),
            value_line,
        ]))
    }
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ControlsPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.dashboard_state.select_next();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.dashboard_state.select_prev();
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                state.nudge_selected(1);
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                state.nudge_selected(-1);
                EventResult::Handled
            }
            KeyCode::Enter => {
                state.edit_selected();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let selected = state.dashboard_state.selected_control;
        let items: Vec<ListItem> = Control::ALL
            .iter()
            .enumerate()
            .map(|(idx, control)| Self::control_item(*control, idx == selected, state))
            .collect();

        let list = List::new(items)
            .block(focused_block_with_help(
                " Model controls ",
                true,
                "h/l adjust  Enter edit",
            ))
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakeven_core::{CurrencyCode, ParamField, ScenarioPreset};
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_and_adjustment() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();

        // Scenario selector
        panel.handle_key(press(KeyCode::Char('j')), &mut state);
        panel.handle_key(press(KeyCode::Char('j')), &mut state);
        panel.handle_key(press(KeyCode::Char('h')), &mut state);
        assert_eq!(state.store.scenario(), ScenarioPreset::Low);

        // Seek care slider
        panel.handle_key(press(KeyCode::Down), &mut state);
        panel.handle_key(press(KeyCode::Down), &mut state);
        panel.handle_key(press(KeyCode::Right), &mut state);
        assert!((state.store.value(ParamField::SeekCare) - 0.31).abs() < 1e-12);
    }

    #[test]
    fn test_values_follow_currency() {
        let mut state = AppState::default();
        state.store.select_currency(CurrencyCode::Gbp);
        assert_eq!(
            ControlsPanel::control_value(Control::Field(ParamField::UnitGp), &state),
            "£42"
        );
        assert_eq!(
            ControlsPanel::control_value(Control::Currency, &state),
            "GBP (£)"
        );
        assert_eq!(
            ControlsPanel::control_value(Control::Population, &state),
            "EU-27 (450,400,000)"
        );
    }

    #[test]
    fn test_unhandled_keys_pass_through() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();
        assert_eq!(
            panel.handle_key(press(KeyCode::Char('z')), &mut state),
            EventResult::NotHandled
        );
    }
}
