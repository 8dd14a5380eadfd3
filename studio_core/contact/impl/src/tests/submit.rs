use pretty_assertions::assert_eq;
use studio_core_contact_contracts::{ContactFormController, SettleOutcome, SubmitOutcome};
use studio_models::contact::{FieldErrors, FormField, Notice, NoticeLevel, SubmissionState};
use studio_transport_contracts::MockContactTransport;

use crate::tests::{fill, invalid_fields, sut, valid_fields};

#[tokio::test]
async fn ok() {
    // Arrange
    let fields = valid_fields();
    let transport = MockContactTransport::new().with_deliver(fields.validate().unwrap(), true);
    let mut sut = sut(transport);
    fill(&mut sut, &fields);

    // Act
    let outcome = sut.submit();
    let state_in_flight = sut.state();
    let settled = sut.settle().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Dispatched);
    assert_eq!(state_in_flight, SubmissionState::Submitting);
    assert_eq!(settled, Some(SettleOutcome::Submitted));
    assert_eq!(sut.state(), SubmissionState::Submitted);
    assert!(sut.errors().is_empty());
    assert_eq!(
        sut.take_notice(),
        Some(Notice {
            level: NoticeLevel::Success,
            message: "contact.form.success".into(),
        })
    );
    assert_eq!(sut.take_notice(), None);
}

#[tokio::test]
async fn delivers_trimmed_values() {
    // Arrange
    let fields = valid_fields()
        .with(FormField::Name, "  Jane Doe  ")
        .with(FormField::Company, "  Nordic Bank Group ");
    let expected = valid_fields()
        .with(FormField::Company, "Nordic Bank Group")
        .validate()
        .unwrap();
    let transport = MockContactTransport::new().with_deliver(expected, true);
    let mut sut = sut(transport);
    fill(&mut sut, &fields);

    // Act
    sut.submit();
    let settled = sut.settle().await;

    // Assert
    assert_eq!(settled, Some(SettleOutcome::Submitted));
    assert_eq!(sut.fields().name, "  Jane Doe  ");
}

#[test]
fn invalid() {
    // Arrange
    let mut sut = sut(MockContactTransport::new());
    fill(&mut sut, &invalid_fields());

    // Act
    let outcome = sut.submit();

    // Assert
    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(sut.state(), SubmissionState::Idle);
    assert_eq!(
        *sut.errors(),
        FieldErrors::from_iter([
            (FormField::Name, "contact.validation.name.required".into()),
            (FormField::Email, "contact.validation.email.invalid".into()),
            (FormField::Message, "contact.validation.message.too_short".into()),
        ])
    );
    assert_eq!(sut.take_notice(), None);
}

#[tokio::test]
async fn invalid_does_not_start_delivery() {
    let mut sut = sut(MockContactTransport::new());
    fill(&mut sut, &invalid_fields());

    sut.submit();

    assert_eq!(sut.settle().await, None);
    assert_eq!(sut.try_settle(), None);
}

#[test]
fn whitespace_name_is_required() {
    let mut sut = sut(MockContactTransport::new());
    fill(&mut sut, &valid_fields().with(FormField::Name, " \t "));

    assert_eq!(sut.submit(), SubmitOutcome::Invalid);

    assert_eq!(
        *sut.errors(),
        FieldErrors::from_iter([(FormField::Name, "contact.validation.name.required".into())])
    );
}

#[test]
fn message_boundary() {
    let mut sut = sut(MockContactTransport::new());
    fill(&mut sut, &valid_fields().with(FormField::Message, "123456789"));

    assert_eq!(sut.submit(), SubmitOutcome::Invalid);

    assert_eq!(
        sut.errors().get(FormField::Message),
        Some("contact.validation.message.too_short")
    );
}

#[test]
fn name_boundary() {
    let mut sut = sut(MockContactTransport::new());
    fill(&mut sut, &valid_fields().with(FormField::Name, "n".repeat(101)));

    assert_eq!(sut.submit(), SubmitOutcome::Invalid);

    assert_eq!(
        *sut.errors(),
        FieldErrors::from_iter([(FormField::Name, "contact.validation.name.too_long".into())])
    );
}

#[test]
fn previous_errors_are_replaced() {
    // Arrange
    let mut sut = sut(MockContactTransport::new());
    fill(&mut sut, &invalid_fields());
    sut.submit();
    sut.update_field(FormField::Name, "Jane Doe".into());
    sut.update_field(FormField::Email, "jane@co.com".into());

    // Act
    let outcome = sut.submit();

    // Assert
    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(
        *sut.errors(),
        FieldErrors::from_iter([(
            FormField::Message,
            "contact.validation.message.too_short".into()
        )])
    );
}

#[tokio::test]
async fn ignored_while_submitting() {
    // Arrange
    let fields = valid_fields();
    let transport = MockContactTransport::new().with_deliver(fields.validate().unwrap(), true);
    let mut sut = sut(transport);
    fill(&mut sut, &fields);
    assert_eq!(sut.submit(), SubmitOutcome::Dispatched);
    let snapshot = (sut.fields().clone(), sut.errors().clone(), sut.state());

    // Act
    let outcome = sut.submit();

    // Assert
    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert_eq!((sut.fields().clone(), sut.errors().clone(), sut.state()), snapshot);
    assert_eq!(sut.settle().await, Some(SettleOutcome::Submitted));
}

#[tokio::test]
async fn ignored_after_submitted() {
    // Arrange
    let fields = valid_fields();
    let transport = MockContactTransport::new().with_deliver(fields.validate().unwrap(), true);
    let mut sut = sut(transport);
    fill(&mut sut, &fields);
    sut.submit();
    sut.settle().await;

    // Act
    sut.update_field(FormField::Message, "x".into());
    let outcome = sut.submit();

    // Assert
    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert_eq!(sut.state(), SubmissionState::Submitted);
    assert!(sut.errors().is_empty());
}
