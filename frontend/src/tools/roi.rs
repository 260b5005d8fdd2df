use std::collections::BTreeMap;

pub const TOTAL_STEPS: u8 = 5;

/// Share of the reported manual hours we expect automation to take over.
const AUTOMATION_SHARE: f64 = 0.5;
const WEEKS_PER_YEAR: f64 = 52.0;

pub const PROCESS_OPTIONS: [&str; 8] = [
    "Lead management & follow-ups",
    "Email marketing",
    "Data entry into CRM",
    "Invoice generation & billing",
    "Order processing",
    "Social media posting",
    "Report creation",
    "Customer onboarding",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const EMPLOYEE_OPTIONS: [SelectOption; 5] = [
    SelectOption { label: "1-5 employees", value: "3" },
    SelectOption { label: "6-15 employees", value: "10" },
    SelectOption { label: "16-50 employees", value: "33" },
    SelectOption { label: "51-100 employees", value: "75" },
    SelectOption { label: "100+ employees", value: "150" },
];

pub const HOURS_OPTIONS: [SelectOption; 5] = [
    SelectOption { label: "1-5 hours", value: "3" },
    SelectOption { label: "6-10 hours", value: "8" },
    SelectOption { label: "11-20 hours", value: "15" },
    SelectOption { label: "21-30 hours", value: "25" },
    SelectOption { label: "30+ hours", value: "35" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RoiField {
    Name,
    Role,
    Company,
    Employees,
    Processes,
    HoursPerWeek,
    HourlyCost,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoiForm {
    pub name: String,
    pub role: String,
    pub company: String,
    pub employees: String,
    pub processes: Vec<String>,
    pub hours_per_week: String,
    pub hourly_cost: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoiResults {
    pub weekly_hours_saved: i64,
    pub yearly_hours_saved: i64,
    pub yearly_cost_savings: i64,
}

pub fn calculate_roi(hours_per_week: f64, hourly_cost: f64) -> RoiResults {
    let weekly = hours_per_week * AUTOMATION_SHARE;
    RoiResults {
        weekly_hours_saved: weekly.round() as i64,
        yearly_hours_saved: (weekly * WEEKS_PER_YEAR).round() as i64,
        yearly_cost_savings: (weekly * hourly_cost * WEEKS_PER_YEAR).round() as i64,
    }
}

fn parse_positive(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// `12480` -> `"12,480"`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Linear five step questionnaire. `results` is set once the last step
/// validates; the results view is shown while it is `Some`.
#[derive(Clone, Debug, PartialEq)]
pub struct RoiWizard {
    pub step: u8,
    pub form: RoiForm,
    pub errors: BTreeMap<RoiField, &'static str>,
    pub results: Option<RoiResults>,
}

impl Default for RoiWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RoiWizard {
    pub fn new() -> Self {
        Self {
            step: 1,
            form: RoiForm::default(),
            errors: BTreeMap::new(),
            results: None,
        }
    }

    pub fn progress(&self) -> f64 {
        f64::from(self.step) / f64::from(TOTAL_STEPS) * 100.0
    }

    pub fn error(&self, field: RoiField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Updates a text or single-select field and clears its error.
    pub fn set_field(&mut self, field: RoiField, value: String) {
        match field {
            RoiField::Name => self.form.name = value,
            RoiField::Role => self.form.role = value,
            RoiField::Company => self.form.company = value,
            RoiField::Employees => self.form.employees = value,
            RoiField::HoursPerWeek => self.form.hours_per_week = value,
            RoiField::HourlyCost => self.form.hourly_cost = value,
            RoiField::Processes => return,
        }
        self.errors.remove(&field);
    }

    pub fn toggle_process(&mut self, process: &str) {
        if let Some(pos) = self.form.processes.iter().position(|p| p == process) {
            self.form.processes.remove(pos);
        } else {
            self.form.processes.push(process.to_string());
        }
        self.errors.remove(&RoiField::Processes);
    }

    /// Checks only the fields of the current step. Errors from earlier steps
    /// are replaced.
    pub fn validate_step(&mut self) -> bool {
        let form = &self.form;
        let mut errors = BTreeMap::new();
        match self.step {
            1 => {
                if form.name.trim().is_empty() {
                    errors.insert(RoiField::Name, "Name is required");
                }
                if form.role.trim().is_empty() {
                    errors.insert(RoiField::Role, "Role is required");
                }
                if form.company.trim().is_empty() {
                    errors.insert(RoiField::Company, "Company name is required");
                }
            }
            2 => {
                if form.employees.is_empty() {
                    errors.insert(RoiField::Employees, "Please select number of employees");
                }
            }
            3 => {
                if form.processes.is_empty() {
                    errors.insert(RoiField::Processes, "Please select at least one process");
                }
            }
            4 => {
                if form.hours_per_week.is_empty() {
                    errors.insert(RoiField::HoursPerWeek, "Please select hours per week");
                }
            }
            _ => {
                if parse_positive(&form.hourly_cost).is_none() {
                    errors.insert(RoiField::HourlyCost, "Please enter a valid hourly cost");
                }
            }
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Advances when the current step validates. On the last step this
    /// computes the results instead.
    pub fn next(&mut self) {
        if !self.validate_step() {
            return;
        }
        if self.step < TOTAL_STEPS {
            self.step += 1;
            return;
        }
        let hours = self.form.hours_per_week.trim().parse::<f64>().unwrap_or(0.0);
        let cost = parse_positive(&self.form.hourly_cost).unwrap_or(0.0);
        self.results = Some(calculate_roi(hours, cost));
    }

    pub fn back(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_through_step_four() -> RoiWizard {
        let mut wizard = RoiWizard::new();
        wizard.set_field(RoiField::Name, "Ada".into());
        wizard.set_field(RoiField::Role, "COO".into());
        wizard.set_field(RoiField::Company, "Acme".into());
        wizard.next();
        wizard.set_field(RoiField::Employees, EMPLOYEE_OPTIONS[1].value.into());
        wizard.next();
        wizard.toggle_process(PROCESS_OPTIONS[0]);
        wizard.next();
        wizard.set_field(RoiField::HoursPerWeek, "15".into());
        wizard.next();
        wizard
    }

    #[test]
    fn roi_formula_rounds_each_figure() {
        assert_eq!(
            calculate_roi(15.0, 50.0),
            RoiResults {
                weekly_hours_saved: 8,
                yearly_hours_saved: 390,
                yearly_cost_savings: 19_500,
            }
        );
        assert_eq!(calculate_roi(3.0, 40.0).yearly_cost_savings, 3_120);
    }

    #[test]
    fn first_step_reports_every_missing_field() {
        let mut wizard = RoiWizard::new();
        wizard.set_field(RoiField::Role, "   ".into());
        wizard.next();
        assert_eq!(wizard.step, 1);
        assert_eq!(wizard.error(RoiField::Name), Some("Name is required"));
        assert_eq!(wizard.error(RoiField::Role), Some("Role is required"));
        assert_eq!(wizard.error(RoiField::Company), Some("Company name is required"));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut wizard = RoiWizard::new();
        wizard.next();
        wizard.set_field(RoiField::Name, "Ada".into());
        assert_eq!(wizard.error(RoiField::Name), None);
        assert!(wizard.error(RoiField::Role).is_some());
    }

    #[test]
    fn process_toggle_adds_and_removes() {
        let mut wizard = RoiWizard::new();
        wizard.toggle_process("Email marketing");
        wizard.toggle_process("Order processing");
        wizard.toggle_process("Email marketing");
        assert_eq!(wizard.form.processes, vec!["Order processing".to_string()]);
    }

    #[test]
    fn walks_to_results_and_resets() {
        let mut wizard = filled_through_step_four();
        assert_eq!(wizard.step, 5);
        assert_eq!(wizard.progress(), 100.0);

        wizard.set_field(RoiField::HourlyCost, "0".into());
        wizard.next();
        assert_eq!(wizard.error(RoiField::HourlyCost), Some("Please enter a valid hourly cost"));
        assert!(wizard.results.is_none());

        wizard.set_field(RoiField::HourlyCost, "50".into());
        wizard.next();
        assert_eq!(wizard.results.map(|r| r.yearly_cost_savings), Some(19_500));

        wizard.reset();
        assert_eq!(wizard, RoiWizard::new());
    }

    #[test]
    fn back_stops_at_first_step() {
        let mut wizard = filled_through_step_four();
        wizard.back();
        assert_eq!(wizard.step, 4);
        for _ in 0..10 {
            wizard.back();
        }
        assert_eq!(wizard.step, 1);
        assert_eq!(wizard.progress(), 20.0);
    }

    #[test]
    fn non_numeric_cost_is_rejected() {
        let mut wizard = filled_through_step_four();
        wizard.set_field(RoiField::HourlyCost, "fifty".into());
        wizard.next();
        assert!(wizard.results.is_none());
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(19_500), "19,500");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-4_000), "-4,000");
    }
}
