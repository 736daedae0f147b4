//! Form field value objects

/// What a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text with a list of suggested values
    Choice,
    /// Non-negative decimal such as years of experience
    Decimal,
    /// Non-negative whole number such as a skill count
    Whole,
}

/// A single form field with its configuration and raw text value.
///
/// Numeric fields keep the text as typed; parsing happens at validation time
/// so that invalid input can be reported instead of silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    pub fn choice(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice,
            value: String::new(),
        }
    }

    pub fn decimal(name: &'static str, label: &'static str, initial: f64) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Decimal,
            value: format_decimal(initial),
        }
    }

    pub fn whole(name: &'static str, label: &'static str, initial: u32) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Whole,
            value: initial.to_string(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_decimal(&mut self, value: f64) {
        self.value = format_decimal(value);
    }

    pub fn set_whole(&mut self, value: u32) {
        self.value = value.to_string();
    }

    /// Parse the current text as a number; `None` if blank or not numeric
    pub fn as_number(&self) -> Option<f64> {
        let text = self.value.trim();
        if text.is_empty() {
            return None;
        }
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Push a character, returns whether the value changed.
    /// Numeric fields only take digits, a decimal point and a minus sign.
    pub fn push_char(&mut self, c: char) -> bool {
        let accepted = match self.kind {
            FieldKind::Choice => !c.is_control(),
            FieldKind::Decimal | FieldKind::Whole => c.is_ascii_digit() || c == '.' || c == '-',
        };
        if accepted {
            self.value.push(c);
        }
        accepted
    }

    /// Remove the last character, returns whether the value changed
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Decimal if !self.is_blank() => format!("{} yrs", self.value),
            _ => self.value.clone(),
        }
    }
}

/// Format years without a trailing `.0`
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
