mod console;
mod submit;
mod webhook;

pub use console::ConsoleNotifier;
pub use submit::{SubmitArgs, submit};
pub use webhook::{check, test_webhook};
