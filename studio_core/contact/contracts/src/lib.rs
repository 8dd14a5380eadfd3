use std::future::Future;

use studio_models::contact::{FieldErrors, FormField, FormFields, Notice, SubmissionState};

/// State and operations of the contact form, as seen by the page rendering
/// it.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormController: Send + 'static {
    fn fields(&self) -> &FormFields;

    fn errors(&self) -> &FieldErrors;

    fn state(&self) -> SubmissionState;

    /// Message explaining why the last submission failed, until the next
    /// submit.
    fn submission_failure(&self) -> Option<String>;

    /// Store the raw value of `field` and clear its error, if any.
    fn update_field(&mut self, field: FormField, value: String);

    /// Validate the form and, if valid, start delivering it.
    fn submit(&mut self) -> SubmitOutcome;

    /// Wait for the in-flight submission and apply its result.
    ///
    /// Returns `None` if nothing is in flight.
    fn settle(&mut self) -> impl Future<Output = Option<SettleOutcome>> + Send;

    /// Apply the result of the in-flight submission if it has already
    /// completed.
    fn try_settle(&mut self) -> Option<SettleOutcome>;

    /// Take the acknowledgment issued by the last completed submission.
    fn take_notice(&mut self) -> Option<Notice>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is in flight or already done.
    Ignored,
    /// At least one field failed validation, see [`ContactFormController::errors`].
    Invalid,
    /// The inquiry is on its way.
    Dispatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    Submitted,
    /// Delivery failed and the form is editable again.
    Failed,
}

#[cfg(feature = "mock")]
impl MockContactFormController {
    pub fn with_snapshot(
        mut self,
        fields: FormFields,
        errors: FieldErrors,
        state: SubmissionState,
        submission_failure: Option<String>,
    ) -> Self {
        self.expect_fields().return_const(fields);
        self.expect_errors().return_const(errors);
        self.expect_state().return_const(state);
        self.expect_submission_failure()
            .return_const(submission_failure);
        self
    }
}
