use crate::components::{
    Component, EventResult, break_even_panel::BreakEvenPanel, controls_panel::ControlsPanel,
    key_outputs::KeyOutputs, sensitivity_chart::SensitivityChart,
};
use crate::state::AppState;
use crate::util::styles::HEADER_COLOR;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Screen;

pub struct DashboardScreen {
    controls: ControlsPanel,
    outputs: KeyOutputs,
    chart: SensitivityChart,
    break_even: BreakEvenPanel,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            controls: ControlsPanel::new(),
            outputs: KeyOutputs::new(),
            chart: SensitivityChart::new(),
            break_even: BreakEvenPanel::new(),
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let store = &state.store;
        let lines = vec![
            Line::from(Span::styled(
                "KEY OUTPUTS",
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{} | {} scenario | {}",
                    store.population(),
                    store.scenario(),
                    store.currency()
                ),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for DashboardScreen {
    fn title(&self) -> &str {
        "Dashboard"
    }
}

impl Component for DashboardScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        self.controls.handle_key(key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),  // Header
                Constraint::Length(13), // Output tiles
                Constraint::Min(10),    // Sensitivity chart
                Constraint::Length(11), // Break-even thresholds
            ])
            .split(columns[0]);

        self.render_header(frame, left[0], state);
        self.outputs.render(frame, left[1], state);
        self.chart.render(frame, left[2], state);
        self.break_even.render(frame, left[3], state);
        self.controls.render(frame, columns[1], state);
    }
}
