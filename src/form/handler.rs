use std::collections::BTreeMap;

use mkfly_contact::{ContactFields, Field, ValidationError};
use mkfly_webhook::{SubmissionResult, WebhookClient};
use rust_i18n::t;
use strum::VariantArray;
use time::OffsetDateTime;

use super::{ContactPage, FormView, LoadingIndicator, Notifier, SubmitControl, SubmitGuard};

/// Named events the host forwards to [`ContactFormHandler::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The host document finished loading.
    Ready,
    /// The user submitted the contact form.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All form elements are present on the host.
    Ready,
    /// The host lacks these form elements.
    MissingElements(Vec<Field>),
    /// A submission is already in flight.
    Ignored,
    Invalid(ValidationError),
    Delivered(SubmissionResult),
}

pub struct ContactFormHandler {
    client: WebhookClient,
    locale: String,
    phase: Phase,
}

impl ContactFormHandler {
    pub fn new(client: WebhookClient, locale: impl Into<String>) -> Self {
        Self {
            client,
            locale: locale.into(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub async fn dispatch<F, B, L, N>(
        &mut self,
        event: UiEvent,
        page: &mut ContactPage<F, B, L, N>,
    ) -> Outcome
    where
        F: FormView,
        B: SubmitControl,
        L: LoadingIndicator,
        N: Notifier,
    {
        match event {
            UiEvent::Ready => self.on_ready(&page.form),
            UiEvent::Submit => self.on_submit(page).await,
        }
    }

    /// Checks that every contact form input exists on the host.
    pub fn on_ready<F: FormView>(&self, form: &F) -> Outcome {
        let missing = Field::VARIANTS
            .iter()
            .copied()
            .filter(|field| form.value(*field).is_none())
            .collect::<Vec<_>>();

        if missing.is_empty() {
            tracing::info!("All contact form elements are present");
            return Outcome::Ready;
        }

        let keys = missing.iter().map(|f| f.as_ref()).collect::<Vec<_>>();
        tracing::error!(missing = ?keys, "Contact form elements missing from host");

        Outcome::MissingElements(missing)
    }

    /// Runs validation, delivery and reporting for one submit event.
    #[tracing::instrument(skip_all)]
    pub async fn on_submit<F, B, L, N>(&mut self, page: &mut ContactPage<F, B, L, N>) -> Outcome
    where
        F: FormView,
        B: SubmitControl,
        L: LoadingIndicator,
        N: Notifier,
    {
        if page.button.is_disabled() {
            tracing::warn!("Submit ignored, a submission is already in flight");
            return Outcome::Ignored;
        }

        let locale = self.locale.as_str();
        let mut phase = PhaseGuard(&mut self.phase);

        phase.set(Phase::Validating);
        let submission = match mkfly_contact::validate(read_fields(&page.form)) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::warn!(error = %e, "Contact form rejected");
                page.notifier.alert(&validation_message(locale, &e));
                return Outcome::Invalid(e);
            }
        };

        phase.set(Phase::Submitting);
        let _guard = SubmitGuard::acquire(
            &mut page.button,
            &mut page.loading,
            &t!("contact.sending", locale = locale),
        );

        let result = self.client.send(&submission).await;
        report(locale, &result, &mut page.form, &mut page.notifier);

        Outcome::Delivered(result)
    }

    /// Sends a fixed submission tagged as a test and reports the outcome.
    pub async fn test_webhook<N: Notifier>(&self, notifier: &mut N) -> SubmissionResult {
        tracing::info!(url = %self.client.url(), "Testing webhook connectivity");

        let result = match mkfly_webhook::test_submission() {
            Ok(submission) => {
                self.client
                    .send_test(&submission, OffsetDateTime::now_utc())
                    .await
            }
            Err(e) => SubmissionResult::TransportError {
                message: e.to_string(),
            },
        };

        let locale = self.locale.as_str();
        if result.is_success() {
            notifier.alert(&t!("webhook.test_success", locale = locale));
        } else {
            notifier.alert(&t!(
                "webhook.test_failure",
                locale = locale,
                message = error_detail(locale, &result)
            ));
        }

        result
    }
}

/// Puts the handler back to `Idle` when a submit ends, including when the
/// submit future is dropped mid-send.
struct PhaseGuard<'a>(&'a mut Phase);

impl PhaseGuard<'_> {
    fn set(&mut self, phase: Phase) {
        *self.0 = phase;
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        *self.0 = Phase::Idle;
    }
}

fn report<F: FormView, N: Notifier>(
    locale: &str,
    result: &SubmissionResult,
    form: &mut F,
    notifier: &mut N,
) {
    if result.is_success() {
        form.reset();
        notifier.alert(&t!("contact.success", locale = locale));
        return;
    }

    notifier.alert(&t!(
        "contact.failure",
        locale = locale,
        message = error_detail(locale, result)
    ));
}

fn error_detail(locale: &str, result: &SubmissionResult) -> String {
    match result {
        SubmissionResult::Success => String::new(),
        SubmissionResult::ServerError {
            status,
            status_text,
            body,
        } => t!(
            "contact.server_error",
            locale = locale,
            status = status,
            status_text = status_text,
            body = body
        )
        .into_owned(),
        SubmissionResult::TransportError { message } => message.to_owned(),
    }
}

fn validation_message(locale: &str, error: &ValidationError) -> String {
    let message = match error {
        ValidationError::MissingField(_) => t!("contact.missing_fields", locale = locale),
        ValidationError::InvalidEmail => t!("contact.invalid_email", locale = locale),
        ValidationError::InvalidPhone => t!("contact.invalid_phone", locale = locale),
    };

    message.into_owned()
}

/// Reads the five inputs, treating an absent element as an empty value.
pub fn read_fields<F: FormView>(form: &F) -> ContactFields {
    ContactFields::collect(|field| form.value(field).unwrap_or_default())
}

/// Current raw values keyed by element key, for debugging.
pub fn snapshot<F: FormView>(form: &F) -> BTreeMap<&'static str, String> {
    let data = Field::VARIANTS
        .iter()
        .filter_map(|field| Some((<&'static str>::from(*field), form.value(*field)?)))
        .collect::<BTreeMap<_, _>>();

    tracing::debug!(?data, "Current contact form data");

    data
}
