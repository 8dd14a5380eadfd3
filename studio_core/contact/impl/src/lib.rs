use std::sync::Arc;

use futures::FutureExt;
use studio_core_contact_contracts::{ContactFormController, SettleOutcome, SubmitOutcome};
use studio_i18n_contracts::TextService;
use studio_models::contact::{
    FieldErrors, FieldViolations, FormField, FormFields, Notice, NoticeLevel, SubmissionState,
};
use studio_transport_contracts::{ContactDeliverError, ContactTransport};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info};

#[cfg(test)]
mod tests;

type Delivery = JoinHandle<Result<(), ContactDeliverError>>;

#[derive(Debug)]
pub struct ContactFormControllerImpl<Transport, Text> {
    transport: Arc<Transport>,
    text: Text,
    fields: FormFields,
    errors: FieldErrors,
    state: SubmissionState,
    submission_failure: Option<String>,
    notice: Option<Notice>,
    delivery: Option<Delivery>,
}

impl<Transport, Text> ContactFormControllerImpl<Transport, Text> {
    /// Create an empty, editable form.
    pub fn new(transport: Arc<Transport>, text: Text) -> Self {
        Self {
            transport,
            text,
            fields: FormFields::default(),
            errors: FieldErrors::default(),
            state: SubmissionState::Idle,
            submission_failure: None,
            notice: None,
            delivery: None,
        }
    }
}

impl<Transport, Text> ContactFormController for ContactFormControllerImpl<Transport, Text>
where
    Transport: ContactTransport,
    Text: TextService,
{
    fn fields(&self) -> &FormFields {
        &self.fields
    }

    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn state(&self) -> SubmissionState {
        self.state
    }

    fn submission_failure(&self) -> Option<String> {
        self.submission_failure.clone()
    }

    fn update_field(&mut self, field: FormField, value: String) {
        self.fields.set(field, value);
        if self.errors.remove(field).is_some() {
            debug!(%field, "cleared field error");
        }
    }

    fn submit(&mut self) -> SubmitOutcome {
        if self.state != SubmissionState::Idle {
            debug!(state = ?self.state, "ignoring submit");
            return SubmitOutcome::Ignored;
        }

        let inquiry = match self.fields.validate() {
            Ok(inquiry) => inquiry,
            Err(violations) => {
                debug!(?violations, "contact form is invalid");
                self.errors = self.error_messages(&violations);
                return SubmitOutcome::Invalid;
            }
        };

        self.errors.clear();
        self.submission_failure = None;
        self.state = SubmissionState::Submitting;

        let transport = Arc::clone(&self.transport);
        self.delivery = Some(tokio::spawn(async move {
            transport.deliver(inquiry).await
        }));

        debug!("contact inquiry dispatched");
        SubmitOutcome::Dispatched
    }

    async fn settle(&mut self) -> Option<SettleOutcome> {
        let result = self.delivery.as_mut()?.await;
        self.delivery = None;
        Some(self.complete(flatten(result)))
    }

    fn try_settle(&mut self) -> Option<SettleOutcome> {
        let mut delivery = self.delivery.take()?;
        match (&mut delivery).now_or_never() {
            Some(result) => Some(self.complete(flatten(result))),
            None => {
                self.delivery = Some(delivery);
                None
            }
        }
    }

    fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

impl<Transport, Text> ContactFormControllerImpl<Transport, Text>
where
    Text: TextService,
{
    fn error_messages(&self, violations: &FieldViolations) -> FieldErrors {
        violations
            .iter()
            .map(|(field, violation)| {
                let key = format!("contact.validation.{field}.{}", violation.key());
                (field, self.text.lookup(&key))
            })
            .collect()
    }

    fn complete(&mut self, result: Result<(), ContactDeliverError>) -> SettleOutcome {
        match result {
            Ok(()) => {
                info!("contact form submitted");
                self.state = SubmissionState::Submitted;
                self.notice = Some(Notice {
                    level: NoticeLevel::Success,
                    message: self.text.lookup("contact.form.success"),
                });
                SettleOutcome::Submitted
            }
            Err(err) => {
                error!("failed to deliver contact inquiry: {err}");
                self.state = SubmissionState::Idle;
                self.submission_failure = Some(self.text.lookup("contact.form.failure"));
                SettleOutcome::Failed
            }
        }
    }
}

/// A panicked or aborted delivery counts as a failed one.
fn flatten(
    result: Result<Result<(), ContactDeliverError>, JoinError>,
) -> Result<(), ContactDeliverError> {
    result.unwrap_or_else(|err| Err(ContactDeliverError::Other(err.into())))
}

impl<Transport, Text> Drop for ContactFormControllerImpl<Transport, Text> {
    fn drop(&mut self) {
        if let Some(delivery) = self.delivery.take() {
            debug!("aborting in-flight contact inquiry");
            delivery.abort();
        }
    }
}
