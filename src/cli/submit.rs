use mkfly_contact::Field;
use mkfly_webhook::{SubmissionResult, WebhookClient};

use crate::form::{
    ContactFormHandler, ContactPage, MemoryButton, MemoryContainer, MemoryForm, Outcome, UiEvent,
};

use super::ConsoleNotifier;

/// Contact form values. An omitted flag submits an empty input.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct SubmitArgs {
    /// Full name
    #[arg(long = "nombre")]
    pub name: Option<String>,

    /// Company name
    #[arg(long = "empresa")]
    pub company: Option<String>,

    /// Email address
    #[arg(long = "correo")]
    pub email: Option<String>,

    /// Phone number
    #[arg(long = "telefono")]
    pub phone: Option<String>,

    /// Message body
    #[arg(long = "mensaje")]
    pub message: Option<String>,
}

impl SubmitArgs {
    pub fn into_form(self) -> MemoryForm {
        MemoryForm::new([
            (Field::Name, self.name.unwrap_or_default()),
            (Field::Company, self.company.unwrap_or_default()),
            (Field::Email, self.email.unwrap_or_default()),
            (Field::Phone, self.phone.unwrap_or_default()),
            (Field::Message, self.message.unwrap_or_default()),
        ])
    }
}

/// Runs the contact form pipeline once. Returns whether the webhook accepted
/// the submission.
#[tracing::instrument(skip_all)]
pub async fn submit(config: crate::config::Config, args: SubmitArgs) -> anyhow::Result<bool> {
    let client = WebhookClient::new(&config.webhook)?;
    let mut handler = ContactFormHandler::new(client, config.ui.locale);
    let mut page = ContactPage {
        form: args.into_form(),
        button: MemoryButton::new(config.ui.submit_label),
        loading: MemoryContainer::default(),
        notifier: ConsoleNotifier,
    };

    handler.dispatch(UiEvent::Ready, &mut page).await;
    crate::form::snapshot(&page.form);

    let outcome = handler.dispatch(UiEvent::Submit, &mut page).await;

    Ok(matches!(outcome, Outcome::Delivered(SubmissionResult::Success)))
}
