//! In-memory host elements, used by the terminal front end and the tests.

use std::collections::BTreeMap;

use mkfly_contact::Field;
use strum::VariantArray;

use super::{FormView, LoadingIndicator, Notifier, SubmitControl};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryForm {
    inputs: BTreeMap<Field, String>,
}

impl Default for MemoryForm {
    /// A form with all five inputs present and empty.
    fn default() -> Self {
        Self {
            inputs: Field::VARIANTS
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
        }
    }
}

impl MemoryForm {
    pub fn new(values: impl IntoIterator<Item = (Field, impl Into<String>)>) -> Self {
        let mut form = Self::default();
        for (field, value) in values {
            form.set(field, value);
        }

        form
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.inputs.insert(field, value.into());
    }

    /// Drops the input element keyed by `field` from the form.
    pub fn remove(&mut self, field: Field) {
        self.inputs.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.values().all(String::is_empty)
    }
}

impl FormView for MemoryForm {
    fn value(&self, field: Field) -> Option<String> {
        self.inputs.get(&field).cloned()
    }

    fn reset(&mut self) {
        self.inputs.values_mut().for_each(String::clear);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryButton {
    label: String,
    disabled: bool,
    history: Vec<String>,
}

impl MemoryButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Labels set on the button, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl SubmitControl for MemoryButton {
    fn label(&self) -> String {
        self.label.to_owned()
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_owned();
        self.history.push(label.to_owned());
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    loading: bool,
    history: Vec<bool>,
}

impl MemoryContainer {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

impl LoadingIndicator for MemoryContainer {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.history.push(loading);
    }
}

/// Keeps every alert instead of showing it.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    pub alerts: Vec<String>,
}

impl Notifier for MemoryNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_elements() {
        let mut form = MemoryForm::new([(Field::Name, "Ana"), (Field::Email, "ana@acme.mx")]);
        form.remove(Field::Message);
        form.reset();

        assert!(form.is_empty());
        assert_eq!(form.value(Field::Name).as_deref(), Some(""));
        assert_eq!(form.value(Field::Message), None);
    }
}
