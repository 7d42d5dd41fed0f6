use super::{LoadingIndicator, SubmitControl};

/// Holds the submit control disabled for the lifetime of a delivery.
///
/// Dropping the guard restores the original label and enabled state and
/// hides the loading container, on every exit path.
pub struct SubmitGuard<'a, B: SubmitControl, L: LoadingIndicator> {
    button: &'a mut B,
    loading: &'a mut L,
    original_label: String,
    was_disabled: bool,
}

impl<'a, B: SubmitControl, L: LoadingIndicator> SubmitGuard<'a, B, L> {
    pub fn acquire(button: &'a mut B, loading: &'a mut L, busy_label: &str) -> Self {
        let original_label = button.label();
        let was_disabled = button.is_disabled();

        button.set_label(busy_label);
        button.set_disabled(true);
        loading.set_loading(true);

        Self {
            button,
            loading,
            original_label,
            was_disabled,
        }
    }
}

impl<B: SubmitControl, L: LoadingIndicator> Drop for SubmitGuard<'_, B, L> {
    fn drop(&mut self) {
        self.button.set_label(&self.original_label);
        self.button.set_disabled(self.was_disabled);
        self.loading.set_loading(false);
    }
}
