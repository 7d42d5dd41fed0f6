use mkfly::form::{
    ContactFormHandler, ContactPage, MemoryButton, MemoryContainer, MemoryForm, MemoryNotifier,
};
use mkfly_contact::Field;
use mkfly_webhook::{WebhookClient, WebhookConfig};

pub type TestPage = ContactPage<MemoryForm, MemoryButton, MemoryContainer, MemoryNotifier>;

pub const SUBMIT_LABEL: &str = "Enviar mensaje";

pub fn handler(url: impl Into<String>, locale: &str) -> anyhow::Result<ContactFormHandler> {
    let client = WebhookClient::new(&WebhookConfig {
        url: url.into(),
        timeout_secs: None,
    })?;

    Ok(ContactFormHandler::new(client, locale))
}

pub fn page(form: MemoryForm) -> TestPage {
    ContactPage {
        form,
        button: MemoryButton::new(SUBMIT_LABEL),
        loading: MemoryContainer::default(),
        notifier: MemoryNotifier::default(),
    }
}

pub fn filled_form() -> MemoryForm {
    MemoryForm::new([
        (Field::Name, "  María López "),
        (Field::Company, "Transportes del Bajío"),
        (Field::Email, "maria@bajio.mx"),
        (Field::Phone, "+1 (555) 123-4567"),
        (Field::Message, "Quiero automatizar mis cotizaciones."),
    ])
}

/// Address nothing listens on.
pub fn refused_url() -> anyhow::Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{addr}/webhook"))
}
