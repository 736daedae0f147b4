//! Applicant form state and its cascading reset rules

use super::field::FormField;
use super::presets::Preset;
use crate::constraints::ConstraintTable;
use crate::predictor::{PredictionRequest, ValidationError};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Rows of the applicant form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Company,
    JobTitle,
    Degree,
    Experience,
    Skills,
    /// The submit button row
    Submit,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Company,
        FieldId::JobTitle,
        FieldId::Degree,
        FieldId::Experience,
        FieldId::Skills,
        FieldId::Submit,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

/// Experience step for Left/Right
const EXPERIENCE_STEP: f64 = 0.5;

/// The applicant attributes being edited.
///
/// Invariant: changing the company clears job title and degree and resets the
/// numeric fields to the new scope's minimums; changing the job title clears
/// the degree and resets the numeric fields. Stale values from a previous
/// selection would otherwise sit outside the newly resolved ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub company: FormField,
    pub job_title: FormField,
    pub degree: FormField,
    pub experience: FormField,
    pub skills: FormField,
    pub active_field_index: usize,
}

impl PredictionForm {
    pub fn new(table: &ConstraintTable) -> Self {
        let experience = table.experience_range("", "");
        let skills = table.skills_range("", "");
        Self {
            company: FormField::choice("company", "Company"),
            job_title: FormField::choice("job_title", "Job Title"),
            degree: FormField::choice("degree", "Educational Degree"),
            experience: FormField::decimal("experience", "Experience Years", experience.min),
            skills: FormField::whole("skills", "Number of Skills", skills.min),
            active_field_index: 0,
        }
    }

    pub fn active(&self) -> FieldId {
        FieldId::from_index(self.active_field_index)
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active() == FieldId::Submit
    }

    pub fn field(&self, id: FieldId) -> Option<&FormField> {
        match id {
            FieldId::Company => Some(&self.company),
            FieldId::JobTitle => Some(&self.job_title),
            FieldId::Degree => Some(&self.degree),
            FieldId::Experience => Some(&self.experience),
            FieldId::Skills => Some(&self.skills),
            FieldId::Submit => None,
        }
    }

    /// Reset numeric fields to the minimums of the current scope
    pub fn reset_numeric(&mut self, table: &ConstraintTable) {
        let company = self.company.as_text();
        let job_title = self.job_title.as_text();
        let experience = table.experience_range(company, job_title);
        let skills = table.skills_range(company, job_title);
        self.experience.set_decimal(experience.min);
        self.skills.set_whole(skills.min);
    }

    fn company_changed(&mut self, table: &ConstraintTable) {
        self.job_title.clear();
        self.degree.clear();
        self.reset_numeric(table);
    }

    fn job_title_changed(&mut self, table: &ConstraintTable) {
        self.degree.clear();
        self.reset_numeric(table);
    }

    /// Select a company; returns whether anything changed
    pub fn set_company(&mut self, value: &str, table: &ConstraintTable) -> bool {
        if self.company.as_text() == value {
            return false;
        }
        self.company.set_text(value);
        self.company_changed(table);
        true
    }

    /// Select a job title; returns whether anything changed
    pub fn set_job_title(&mut self, value: &str, table: &ConstraintTable) -> bool {
        if self.job_title.as_text() == value {
            return false;
        }
        self.job_title.set_text(value);
        self.job_title_changed(table);
        true
    }

    pub fn set_degree(&mut self, value: &str) -> bool {
        if self.degree.as_text() == value {
            return false;
        }
        self.degree.set_text(value);
        true
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char, table: &ConstraintTable) -> bool {
        match self.active() {
            FieldId::Company => {
                let changed = self.company.push_char(c);
                if changed {
                    self.company_changed(table);
                }
                changed
            }
            FieldId::JobTitle => {
                let changed = self.job_title.push_char(c);
                if changed {
                    self.job_title_changed(table);
                }
                changed
            }
            FieldId::Degree => self.degree.push_char(c),
            FieldId::Experience => self.experience.push_char(c),
            FieldId::Skills => self.skills.push_char(c),
            FieldId::Submit => false,
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self, table: &ConstraintTable) -> bool {
        match self.active() {
            FieldId::Company => {
                let changed = self.company.pop_char();
                if changed {
                    self.company_changed(table);
                }
                changed
            }
            FieldId::JobTitle => {
                let changed = self.job_title.pop_char();
                if changed {
                    self.job_title_changed(table);
                }
                changed
            }
            FieldId::Degree => self.degree.pop_char(),
            FieldId::Experience => self.experience.pop_char(),
            FieldId::Skills => self.skills.pop_char(),
            FieldId::Submit => false,
        }
    }

    /// Options offered for a choice field under the current selection
    pub fn options<'t>(&self, id: FieldId, table: &'t ConstraintTable) -> Vec<&'t str> {
        match id {
            FieldId::Company => table.available_companies(),
            FieldId::JobTitle => table.available_job_titles(self.company.as_text()),
            FieldId::Degree => {
                table.available_degrees(self.company.as_text(), self.job_title.as_text())
            }
            _ => Vec::new(),
        }
    }

    /// Move the active field to its next (or previous) value: choice fields
    /// cycle through their options, numeric fields step within the range.
    pub fn cycle(&mut self, forward: bool, table: &ConstraintTable) -> bool {
        match self.active() {
            FieldId::Company | FieldId::JobTitle | FieldId::Degree => {
                self.cycle_choice(forward, table)
            }
            FieldId::Experience => {
                let range =
                    table.experience_range(self.company.as_text(), self.job_title.as_text());
                let next = match self.experience.as_number() {
                    Some(current) if forward => range.clamp(current + EXPERIENCE_STEP),
                    Some(current) => range.clamp(current - EXPERIENCE_STEP),
                    None => range.min,
                };
                let changed = self.experience.as_number() != Some(next);
                self.experience.set_decimal(next);
                changed
            }
            FieldId::Skills => {
                let range = table.skills_range(self.company.as_text(), self.job_title.as_text());
                let current = self
                    .skills
                    .as_number()
                    .filter(|v| *v >= 0.0 && v.fract() == 0.0)
                    .map(|v| v as u32);
                let next = match current {
                    Some(current) if forward => range.clamp(current.saturating_add(1)),
                    Some(current) => range.clamp(current.saturating_sub(1)),
                    None => range.min,
                };
                let changed = current != Some(next);
                self.skills.set_whole(next);
                changed
            }
            FieldId::Submit => false,
        }
    }

    fn cycle_choice(&mut self, forward: bool, table: &ConstraintTable) -> bool {
        let id = self.active();
        let options = self.options(id, table);
        if options.is_empty() {
            return false;
        }

        let current = self.field(id).map(|f| f.as_text()).unwrap_or_default();
        let next = match options.iter().position(|o| *o == current) {
            Some(idx) if forward => options[(idx + 1) % options.len()],
            Some(idx) => options[(idx + options.len() - 1) % options.len()],
            None if forward => options[0],
            None => options[options.len() - 1],
        };
        let next = next.to_string();

        match id {
            FieldId::Company => self.set_company(&next, table),
            FieldId::JobTitle => self.set_job_title(&next, table),
            _ => self.set_degree(&next),
        }
    }

    /// Replace every field with a preset's values
    pub fn load_preset(&mut self, preset: &Preset, table: &ConstraintTable) {
        self.set_company(preset.company, table);
        self.set_job_title(preset.job_title, table);
        self.set_degree(preset.degree);
        self.experience.set_decimal(preset.experience_years);
        self.skills.set_whole(preset.skill_count);
    }

    /// Check every required field and build the request payload
    pub fn validate(&self) -> Result<PredictionRequest, ValidationError> {
        for field in [&self.company, &self.job_title, &self.degree] {
            if field.is_blank() {
                return Err(ValidationError::MissingField(field.label));
            }
        }

        if self.experience.is_blank() {
            return Err(ValidationError::MissingField(self.experience.label));
        }
        let experience_years = self
            .experience
            .as_number()
            .ok_or(ValidationError::InvalidExperience)?;
        if experience_years < 0.0 {
            return Err(ValidationError::NegativeExperience);
        }

        if self.skills.is_blank() {
            return Err(ValidationError::MissingField(self.skills.label));
        }
        let skills = self
            .skills
            .as_number()
            .ok_or(ValidationError::FractionalSkills)?;
        if skills < 0.0 {
            return Err(ValidationError::NegativeSkills);
        }
        if skills.fract() != 0.0 || skills > f64::from(u32::MAX) {
            return Err(ValidationError::FractionalSkills);
        }

        Ok(PredictionRequest {
            company: self.company.as_text().trim().to_string(),
            job_title: self.job_title.as_text().trim().to_string(),
            degree: self.degree.as_text().trim().to_string(),
            experience_years,
            skill_count: skills as u32,
        })
    }
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::new(ConstraintTable::builtin())
    }
}

impl Form for PredictionForm {
    fn field_count(&self) -> usize {
        FieldId::ALL.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FieldId::ALL.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::presets::PRESETS;

    fn table() -> &'static ConstraintTable {
        ConstraintTable::builtin()
    }

    fn filled_form() -> PredictionForm {
        let mut form = PredictionForm::new(table());
        form.load_preset(&PRESETS[0], table());
        form
    }

    mod cascading {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_starts_at_fallback_minimums() {
            let form = PredictionForm::new(table());
            assert_eq!(form.company.as_text(), "");
            assert_eq!(form.experience.as_text(), "0");
            assert_eq!(form.skills.as_text(), "0");
        }

        #[test]
        fn test_company_change_resets_downstream_fields() {
            let mut form = filled_form();
            form.experience.set_text("9");
            form.skills.set_text("7");

            assert!(form.set_company("Amazon", table()));

            assert_eq!(form.job_title.as_text(), "");
            assert_eq!(form.degree.as_text(), "");
            // Amazon with no job title is unconstrained
            assert_eq!(form.experience.as_number(), Some(0.0));
            assert_eq!(form.skills.as_number(), Some(0.0));
        }

        #[test]
        fn test_job_title_change_resets_to_new_scope_minimums() {
            let mut form = PredictionForm::new(table());
            form.set_company("Google", table());
            form.set_degree("B.Tech");

            assert!(form.set_job_title("ML Engineer", table()));

            assert_eq!(form.degree.as_text(), "");
            let experience = table().experience_range("Google", "ML Engineer");
            let skills = table().skills_range("Google", "ML Engineer");
            assert_eq!(form.experience.as_number(), Some(experience.min));
            assert_eq!(form.skills.as_number(), Some(f64::from(skills.min)));
        }

        #[test]
        fn test_reselecting_same_company_keeps_fields() {
            let mut form = filled_form();
            let before = form.clone();
            assert!(!form.set_company("Google", table()));
            assert_eq!(form, before);
        }

        #[test]
        fn test_typing_into_company_cascades() {
            let mut form = filled_form();
            form.set_active_field(0);
            assert!(form.input_char('!', table()));
            assert_eq!(form.company.as_text(), "Google!");
            assert_eq!(form.job_title.as_text(), "");
            assert_eq!(form.degree.as_text(), "");
        }

        #[test]
        fn test_backspace_in_job_title_clears_degree() {
            let mut form = filled_form();
            form.set_active_field(1);
            assert!(form.backspace(table()));
            assert_eq!(form.job_title.as_text(), "Software Develope");
            assert_eq!(form.degree.as_text(), "");
        }

        #[test]
        fn test_degree_edit_does_not_touch_numbers() {
            let mut form = filled_form();
            form.set_active_field(2);
            form.backspace(table());
            assert_eq!(form.experience.as_number(), Some(5.0));
            assert_eq!(form.skills.as_number(), Some(4.0));
        }
    }

    mod cycling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cycle_company_from_empty_picks_first() {
            let mut form = PredictionForm::new(table());
            assert!(form.cycle(true, table()));
            assert_eq!(form.company.as_text(), table().available_companies()[0]);
        }

        #[test]
        fn test_cycle_job_title_uses_company_options() {
            let mut form = PredictionForm::new(table());
            form.set_company("Deloitte", table());
            form.set_active_field(1);

            form.cycle(true, table());
            assert_eq!(form.job_title.as_text(), "Financial Analyst");
            form.cycle(true, table());
            assert_eq!(form.job_title.as_text(), "Chartered Accountant");
            form.cycle(false, table());
            assert_eq!(form.job_title.as_text(), "Financial Analyst");
        }

        #[test]
        fn test_cycle_backwards_wraps() {
            let mut form = PredictionForm::new(table());
            form.set_company("Deloitte", table());
            form.set_active_field(1);
            form.cycle(false, table());
            assert_eq!(form.job_title.as_text(), "Business Analyst");
        }

        #[test]
        fn test_cycle_degree_uses_pair_options() {
            let mut form = PredictionForm::new(table());
            form.set_company("Google", table());
            form.set_job_title("ML Engineer", table());
            form.set_active_field(2);
            form.cycle(true, table());
            assert_eq!(form.degree.as_text(), "M.Tech");
            form.cycle(true, table());
            assert_eq!(form.degree.as_text(), "PhD");
        }

        #[test]
        fn test_experience_steps_are_clamped() {
            let mut form = PredictionForm::new(table());
            form.set_company("Google", table());
            form.set_job_title("Software Developer", table());
            form.set_active_field(3);

            assert_eq!(form.experience.as_number(), Some(2.0));
            form.cycle(true, table());
            assert_eq!(form.experience.as_number(), Some(2.5));
            form.cycle(false, table());
            form.cycle(false, table());
            assert_eq!(form.experience.as_number(), Some(2.0));
        }

        #[test]
        fn test_skills_step_recovers_from_garbage() {
            let mut form = PredictionForm::new(table());
            form.set_active_field(4);
            form.skills.set_text("--");
            assert!(form.cycle(true, table()));
            assert_eq!(form.skills.as_text(), "0");
        }

        #[test]
        fn test_submit_row_does_not_cycle() {
            let mut form = filled_form();
            form.set_active_field(5);
            assert!(form.is_submit_row_active());
            assert!(!form.cycle(true, table()));
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_builds_request() {
            let request = filled_form().validate().unwrap();
            assert_eq!(request, crate::predictor::fixtures::google_request());
        }

        #[test]
        fn test_each_required_choice_is_checked() {
            let mut form = filled_form();
            form.degree.clear();
            assert_eq!(
                form.validate(),
                Err(ValidationError::MissingField("Educational Degree"))
            );

            let form = PredictionForm::new(table());
            assert_eq!(form.validate(), Err(ValidationError::MissingField("Company")));

            let mut form = PredictionForm::new(table());
            form.set_company("Google", table());
            assert_eq!(form.validate(), Err(ValidationError::MissingField("Job Title")));
        }

        #[test]
        fn test_whitespace_only_counts_as_missing() {
            let mut form = filled_form();
            form.company.set_text("   ");
            assert_eq!(form.validate(), Err(ValidationError::MissingField("Company")));
        }

        #[test]
        fn test_negative_experience() {
            let mut form = filled_form();
            form.experience.set_text("-1");
            assert_eq!(form.validate(), Err(ValidationError::NegativeExperience));
        }

        #[test]
        fn test_unparseable_experience() {
            let mut form = filled_form();
            form.experience.set_text("1..5");
            assert_eq!(form.validate(), Err(ValidationError::InvalidExperience));
        }

        #[test]
        fn test_fractional_and_negative_skills() {
            let mut form = filled_form();
            form.skills.set_text("2.5");
            assert_eq!(form.validate(), Err(ValidationError::FractionalSkills));
            form.skills.set_text("-3");
            assert_eq!(form.validate(), Err(ValidationError::NegativeSkills));
        }

        #[test]
        fn test_zero_values_are_valid() {
            let mut form = filled_form();
            form.experience.set_text("0");
            form.skills.set_text("0");
            let request = form.validate().unwrap();
            assert_eq!(request.experience_years, 0.0);
            assert_eq!(request.skill_count, 0);
        }

        #[test]
        fn test_out_of_table_pair_is_still_valid() {
            let mut form = PredictionForm::new(table());
            form.set_company("Initech", table());
            form.set_job_title("Sales Executive", table());
            form.set_degree("MBA");
            form.experience.set_text("35");
            form.skills.set_text("12");
            assert!(form.validate().is_ok());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_wraps_to_company() {
            let mut form = PredictionForm::new(table());
            form.set_active_field(5);
            form.next_field();
            assert_eq!(form.active(), FieldId::Company);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = PredictionForm::new(table());
            form.prev_field();
            assert_eq!(form.active(), FieldId::Submit);
        }

        #[test]
        fn test_set_active_field_is_clamped() {
            let mut form = PredictionForm::new(table());
            form.set_active_field(42);
            assert_eq!(form.active(), FieldId::Submit);
            assert!(form.field(FieldId::from_index(5)).is_none());
            assert_eq!(
                form.field(FieldId::from_index(0)).map(|f| f.label),
                Some("Company")
            );
        }
    }
}
