mod guard;
mod handler;
mod host;
mod memory;

pub use guard::SubmitGuard;
pub use handler::{ContactFormHandler, Outcome, Phase, UiEvent, read_fields, snapshot};
pub use host::{ContactPage, FormView, LoadingIndicator, Notifier, SubmitControl};
pub use memory::{MemoryButton, MemoryContainer, MemoryForm, MemoryNotifier};
