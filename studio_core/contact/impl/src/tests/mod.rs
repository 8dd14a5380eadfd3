use std::sync::Arc;

use studio_core_contact_contracts::ContactFormController;
use studio_i18n_contracts::MockTextService;
use studio_models::contact::{FormField, FormFields};
use studio_transport_contracts::MockContactTransport;

use crate::ContactFormControllerImpl;

mod submit;

type Sut = ContactFormControllerImpl<MockContactTransport, MockTextService>;

fn sut(transport: MockContactTransport) -> Sut {
    Sut::new(Arc::new(transport), MockTextService::echo())
}

fn fill(sut: &mut Sut, fields: &FormFields) {
    for field in FormField::ALL {
        sut.update_field(field, fields.get(field).into());
    }
}

fn valid_fields() -> FormFields {
    FormFields::default()
        .with(FormField::Name, "Jane Doe")
        .with(FormField::Email, "jane@co.com")
        .with(FormField::Company, "")
        .with(
            FormField::Message,
            "We need a redesign of our onboarding flow.",
        )
}

fn invalid_fields() -> FormFields {
    FormFields::default()
        .with(FormField::Name, "")
        .with(FormField::Email, "bad")
        .with(FormField::Company, "")
        .with(FormField::Message, "hi")
}
