//! Handles to the host document, injected into the form handler.

use mkfly_contact::Field;

pub trait FormView {
    /// Current raw value of the input keyed by `field`, `None` when the host
    /// has no such element.
    fn value(&self, field: Field) -> Option<String>;

    /// Clears every input.
    fn reset(&mut self);
}

pub trait SubmitControl {
    fn label(&self) -> String;
    fn set_label(&mut self, label: &str);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&mut self, disabled: bool);
}

/// Container toggled while a submission is in flight.
pub trait LoadingIndicator {
    fn set_loading(&mut self, loading: bool);
}

/// Blocking, user-visible notification.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Every host element the contact form handler reads or writes.
pub struct ContactPage<F, B, L, N> {
    pub form: F,
    pub button: B,
    pub loading: L,
    pub notifier: N,
}
