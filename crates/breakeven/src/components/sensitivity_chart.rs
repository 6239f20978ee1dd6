//! Adoption sensitivity bar chart (net savings in display-currency millions)

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{CHART_COLOR, NEGATIVE_COLOR};
use breakeven_core::model::SensitivityPoint;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Direction, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

const BAR_WIDTH: u16 = 6;

pub struct SensitivityChart;

impl SensitivityChart {
    pub fn new() -> Self {
        Self
    }

    /// Bars can only grow upward, so losses are drawn as empty red bars
    /// labelled with their negative value.
    fn bar(point: &SensitivityPoint) -> Bar<'static> {
        let style = if point.net_millions < 0 {
            Style::default().fg(NEGATIVE_COLOR)
        } else {
            Style::default().fg(CHART_COLOR)
        };

        Bar::default()
            .value(point.net_millions.max(0) as u64)
            .label(Line::from(format!("{}%", point.adoption_percent)))
            .text_value(point.net_millions.to_string())
            .style(style)
            .value_style(style.reversed())
    }
}

impl Default for SensitivityChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SensitivityChart {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let symbol = state.store.currency().symbol();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Adoption sensitivity (net savings in {symbol} millions) "
            ))
            .title_bottom(Line::from(format!(" Adoption % / Net ({symbol}M) ")));

        let points = state.sensitivity();
        let bars: Vec<Bar> = points.iter().map(Self::bar).collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(BAR_WIDTH)
            .bar_gap(1)
            .direction(Direction::Vertical);

        frame.render_widget(chart, area);
    }
}
