use breakeven_core::analysis::{BreakEvenConfig, BreakEvenResult, break_even};
use breakeven_core::model::SensitivityPoint;
use breakeven_core::{
    CurrencyCode, DerivedResult, ParamField, ParameterEdit, ParameterStore, PopulationPreset,
    ScenarioPreset,
};

use super::{
    Control, DashboardState, MessageModal, ModalAction, ModalState, NotesState, TabId,
    TextInputModal,
};
use crate::util::format::{input_default, input_unit, parse_field_input};

const KEY_HELP: &str = "j/k select control, h/l or arrows adjust, Enter type a value, \
p/c/s cycle population/currency/scenario, 1/2 switch tabs, Esc clear error, q quit.";

#[derive(Debug)]
pub struct AppState {
    pub store: ParameterStore,
    pub break_even_config: BreakEvenConfig,
    pub active_tab: TabId,
    pub dashboard_state: DashboardState,
    pub notes_state: NotesState,
    pub modal: ModalState,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ParameterStore::new())
    }
}

impl AppState {
    pub fn new(store: ParameterStore) -> Self {
        Self {
            store,
            break_even_config: BreakEvenConfig::default(),
            active_tab: TabId::default(),
            dashboard_state: DashboardState::default(),
            notes_state: NotesState::default(),
            modal: ModalState::None,
            error_message: None,
            exit: false,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Apply an edit to the store. A rejected edit leaves the model as it
    /// was and shows the reason in the status bar.
    pub fn apply_edit(&mut self, edit: ParameterEdit) -> bool {
        tracing::debug!(?edit, "Applying edit");
        match self.store.apply(edit) {
            Ok(()) => {
                self.clear_error();
                true
            }
            Err(e) => {
                self.set_error(e.to_string());
                false
            }
        }
    }

    pub fn cycle_population(&mut self, forward: bool) {
        let next = cycle(&PopulationPreset::ALL, self.store.population(), forward);
        self.apply_edit(ParameterEdit::Population(next));
    }

    pub fn cycle_currency(&mut self, forward: bool) {
        let next = cycle(&CurrencyCode::ALL, self.store.currency(), forward);
        self.apply_edit(ParameterEdit::Currency(next));
    }

    pub fn cycle_scenario(&mut self, forward: bool) {
        let next = cycle(&ScenarioPreset::ALL, self.store.scenario(), forward);
        self.apply_edit(ParameterEdit::Scenario(next));
    }

    /// Move the selected control by `steps` (selectors cycle, sliders step)
    pub fn nudge_selected(&mut self, steps: i32) {
        let forward = steps > 0;
        match self.dashboard_state.selected() {
            Control::Population => self.cycle_population(forward),
            Control::Currency => self.cycle_currency(forward),
            Control::Scenario => self.cycle_scenario(forward),
            Control::Field(field) if field.is_direct_entry() => {
                self.set_error(format!("{} is typed in: press Enter", field.label()));
            }
            Control::Field(field) => {
                self.apply_edit(ParameterEdit::Step(field, steps));
            }
        }
    }

    /// Open the value editor for the selected field. Selectors cycle instead.
    pub fn edit_selected(&mut self) {
        match self.dashboard_state.selected() {
            Control::Population => self.cycle_population(true),
            Control::Currency => self.cycle_currency(true),
            Control::Scenario => self.cycle_scenario(true),
            Control::Field(field) => self.open_field_editor(field),
        }
    }

    fn open_field_editor(&mut self, field: ParamField) {
        let currency = self.store.currency();
        let prompt = format!("{} ({})", field.label(), input_unit(field, currency));
        let default = input_default(field, self.store.value(field), currency);
        self.modal = ModalState::TextInput(TextInputModal::new(
            "Edit value",
            &prompt,
            &default,
            ModalAction::EditField(field),
        ));
    }

    /// Act on a confirmed modal and close it
    pub fn confirm_modal(&mut self, action: ModalAction, value: &str) {
        self.modal = ModalState::None;
        match action {
            ModalAction::EditField(field) => {
                let currency = self.store.currency();
                // The pre-fill is rounded for display; an untouched entry is not an edit
                if value.trim() == input_default(field, self.store.value(field), currency) {
                    return;
                }
                match parse_field_input(field, value, currency) {
                    Ok(edit) => {
                        self.apply_edit(edit);
                    }
                    Err(e) => self.set_error(e.to_string()),
                }
            }
        }
    }

    pub fn show_key_help(&mut self) {
        self.modal = ModalState::Message(MessageModal::info("Keys", KEY_HELP));
    }

    pub fn result(&self) -> DerivedResult {
        self.store.result()
    }

    pub fn sensitivity(&self) -> Vec<SensitivityPoint> {
        self.store.sensitivity()
    }

    /// Break-even outcome for every field, in control order
    pub fn break_even_results(&self) -> Vec<BreakEvenResult> {
        ParamField::ALL
            .into_iter()
            .map(|field| break_even(self.store.params(), field, &self.break_even_config))
            .collect()
    }
}

/// Neighbour of `current` in `all`, wrapping at both ends
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let index = all.iter().position(|x| *x == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    all[next]
}
