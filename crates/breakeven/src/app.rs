use std::io;

use breakeven_core::ParameterStore;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{Screen, dashboard::DashboardScreen, notes::NotesScreen};
use crate::state::{AppState, ModalState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    dashboard_screen: DashboardScreen,
    notes_screen: NotesScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ParameterStore::new())
    }
}

impl App {
    pub fn new(store: ParameterStore) -> Self {
        Self {
            state: AppState::new(store),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            dashboard_screen: DashboardScreen::new(),
            notes_screen: NotesScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(
            population = %self.state.store.population(),
            scenario = %self.state.store.scenario(),
            currency = self.state.store.currency().code(),
            "Dashboard started"
        );

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn active_screen(&mut self) -> &mut dyn Screen {
        match self.state.active_tab {
            TabId::Dashboard => &mut self.dashboard_screen,
            TabId::Notes => &mut self.notes_screen,
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);

        match self.state.active_tab {
            TabId::Dashboard => self.dashboard_screen.render(frame, chunks[1], &self.state),
            TabId::Notes => self.notes_screen.render(frame, chunks[1], &self.state),
        }

        self.status_bar.render(frame, chunks[2], &self.state);

        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if self.state.modal.is_open() {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.state.confirm_modal(action, &value);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            KeyCode::Char('?') => {
                self.state.show_key_help();
                return;
            }
            KeyCode::Char('p') => {
                self.state.cycle_population(true);
                return;
            }
            KeyCode::Char('c') => {
                self.state.cycle_currency(true);
                return;
            }
            KeyCode::Char('s') => {
                self.state.cycle_scenario(true);
                return;
            }
            _ => {}
        }

        let previous_tab = self.state.active_tab;
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            if self.state.active_tab != previous_tab {
                let title = self.active_screen().title().to_string();
                tracing::debug!("Switched to {title} tab");
            }
            return;
        }

        let state = &mut self.state;
        let result = match state.active_tab {
            TabId::Dashboard => self.dashboard_screen.handle_key(key_event, state),
            TabId::Notes => self.notes_screen.handle_key(key_event, state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakeven_core::{CurrencyCode, ParamField, PopulationPreset, ScenarioPreset};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().exit);

        let mut app = App::default();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }

    #[test]
    fn test_selector_shortcuts() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('s'));
        let store = &app.state().store;
        assert_eq!(store.population(), PopulationPreset::Us);
        assert_eq!(store.currency(), CurrencyCode::Usd);
        assert_eq!(store.scenario(), ScenarioPreset::Best);
        assert!(!app.state().exit);
    }

    #[test]
    fn test_modal_edit_flow() {
        let mut app = App::default();
        // Down to the unit GP row
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.state().modal.is_open());

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Char('5'));
        // Global shortcuts are suspended while typing
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().store.scenario(), ScenarioPreset::Medium);
        press(&mut app, KeyCode::Enter);

        assert!(!app.state().modal.is_open());
        assert_eq!(app.state().store.value(ParamField::UnitGp), 65.0);
    }

    #[test]
    fn test_bad_entry_shows_error_until_escape() {
        let mut app = App::default();
        for _ in 0..11 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Enter);
        assert!(app.state().error_message.is_some());
        assert_eq!(app.state().store.value(ParamField::ValuePerDay), 180.0);

        press(&mut app, KeyCode::Esc);
        assert!(app.state().error_message.is_none());
    }

    #[test]
    fn test_tab_switch_routes_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.state().active_tab, TabId::Notes);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.state().notes_state.scroll_offset, 1);
        assert_eq!(app.state().dashboard_state.selected_control, 0);
    }
}
