use breakeven_core::ParamField;

/// One row of the model controls panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Population,
    Currency,
    Scenario,
    Field(ParamField),
}

impl Control {
    /// Panel order: selectors first, then the nine fields
    pub const ALL: [Control; 12] = [
        Control::Population,
        Control::Currency,
        Control::Scenario,
        Control::Field(ParamField::HsShare),
        Control::Field(ParamField::SeekCare),
        Control::Field(ParamField::Adoption),
        Control::Field(ParamField::ResponseRate),
        Control::Field(ParamField::GpAvoided),
        Control::Field(ParamField::DaysSaved),
        Control::Field(ParamField::PlatformCost),
        Control::Field(ParamField::UnitGp),
        Control::Field(ParamField::ValuePerDay),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Control::Population => "Population",
            Control::Currency => "Currency",
            Control::Scenario => "Scenario preset",
            Control::Field(field) => field.label(),
        }
    }

    pub fn is_selector(&self) -> bool {
        !matches!(self, Control::Field(_))
    }
}

#[derive(Debug, Default)]
pub struct DashboardState {
    pub selected_control: usize,
}

impl DashboardState {
    pub fn selected(&self) -> Control {
        Control::ALL[self.selected_control.min(Control::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        if self.selected_control + 1 < Control::ALL.len() {
            self.selected_control += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_control = self.selected_control.saturating_sub(1);
    }
}

#[derive(Debug, Default)]
pub struct NotesState {
    pub scroll_offset: usize,
}
