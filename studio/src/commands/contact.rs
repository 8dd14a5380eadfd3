use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use anyhow::{bail, ensure};
use clap::Args;
use studio_config::Config;
use studio_core_contact_contracts::{ContactFormController, SettleOutcome, SubmitOutcome};
use studio_core_contact_impl::ContactFormControllerImpl;
use studio_i18n_contracts::TextService;
use studio_i18n_impl::DictionaryTextService;
use studio_models::{
    contact::{FormField, SubmissionState},
    i18n::Locale,
};
use studio_transport_impl::{SimulatedContactTransport, SimulatedContactTransportConfig};
use studio_utils::Apply;
use tracing::info;

#[derive(Debug, Args)]
pub struct ContactCommand {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    company: Option<String>,
    /// What the project is about
    #[arg(long)]
    message: Option<String>,
    /// Language of labels and messages (en, sv)
    #[arg(short, long)]
    locale: Option<Locale>,
    /// Make the simulated delivery fail
    #[arg(long)]
    fail: bool,
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let default_locale = config.i18n.default_locale;
        let text =
            DictionaryTextService::new(self.locale.unwrap_or(default_locale), default_locale)?;
        let transport = SimulatedContactTransport::new(SimulatedContactTransportConfig {
            delay: *config.contact.submit_delay,
            fail: config.contact.simulate_failure || self.fail,
        });
        let mut form = ContactFormControllerImpl::new(Arc::new(transport), text.clone());

        let interactive = self.name.is_none() || self.email.is_none() || self.message.is_none();
        for (field, value) in [
            (FormField::Name, self.name),
            (FormField::Email, self.email),
            (FormField::Company, self.company),
            (FormField::Message, self.message),
        ] {
            if let Some(value) = value {
                form.update_field(field, value);
            }
        }

        info!(interactive, locale = %text.locale(), "opening contact form");

        let mut stdout = std::io::stdout();
        if interactive {
            let mut stdin = std::io::stdin().lock();
            run(&mut form, &text, Some(&mut stdin), &mut stdout).await
        } else {
            run(&mut form, &text, None, &mut stdout).await
        }
    }
}

/// Answer that empties a field when asked for it again.
pub const CLEAR: &str = "-";

/// Submit the form until it has been delivered.
///
/// With `input`, empty fields are asked for first and invalid fields are asked
/// for again. Without it, an invalid form or a failed delivery is an error.
pub async fn run(
    form: &mut impl ContactFormController,
    text: &impl TextService,
    mut input: Option<&mut dyn BufRead>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if let Some(input) = input.as_deref_mut() {
        for field in FormField::ALL {
            if form.fields().get(field).is_empty() {
                prompt(form, text, field, input, out)?;
            }
        }
    }

    loop {
        match form.submit() {
            SubmitOutcome::Ignored => break,
            SubmitOutcome::Invalid => {
                write!(out, "{}", render_form(form, text))?;
                let Some(input) = input.as_deref_mut() else {
                    bail!("The contact form is invalid");
                };
                let invalid = form.errors().iter().map(|(field, _)| field).collect::<Vec<_>>();
                for field in invalid {
                    prompt(form, text, field, input, out)?;
                }
            }
            SubmitOutcome::Dispatched => {
                write!(out, "{}", render_form(form, text))?;
                out.flush()?;
                match form.settle().await {
                    Some(SettleOutcome::Submitted) | None => break,
                    Some(SettleOutcome::Failed) => {
                        write!(out, "{}", render_form(form, text))?;
                        let Some(input) = input.as_deref_mut() else {
                            bail!("Failed to deliver the contact form");
                        };
                        for field in FormField::ALL {
                            prompt(form, text, field, input, out)?;
                        }
                    }
                }
            }
        }
    }

    if let Some(notice) = form.take_notice() {
        writeln!(out, "✓ {}", notice.message)?;
    }
    write!(out, "{}", render_form(form, text))?;

    Ok(())
}

/// Ask for a new value of `field`. An empty answer keeps the current value,
/// [`CLEAR`] empties the field.
fn prompt(
    form: &mut impl ContactFormController,
    text: &impl TextService,
    field: FormField,
    input: &mut dyn BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let label = field_label(text, field);
    let current = form.fields().get(field);
    if current.is_empty() {
        write!(out, "{label}: ")?;
    } else {
        write!(out, "{label} [{current}]: ")?;
    }
    out.flush()?;

    let mut line = String::new();
    ensure!(input.read_line(&mut line)? > 0, "Unexpected end of input");
    let value = line.trim_end_matches(['\r', '\n']);
    match value {
        "" => {}
        CLEAR => form.update_field(field, String::new()),
        _ => form.update_field(field, value.into()),
    }

    Ok(())
}

pub fn field_label(text: &impl TextService, field: FormField) -> String {
    let key = match field {
        FormField::Message => "contact.form.project".into(),
        _ => format!("contact.form.{field}"),
    };
    text.lookup(&key)
        .apply_map(field.is_required().then_some('*'), |label, marker| {
            format!("{label} {marker}")
        })
}

/// The form as the page shows it in its current state.
pub fn render_form(form: &impl ContactFormController, text: &impl TextService) -> String {
    let state = form.state();
    if state == SubmissionState::Submitted {
        return format!(
            "{}\n{}\n",
            text.lookup("contact.confirmation.title"),
            text.lookup("contact.confirmation.body")
        );
    }

    let mut lines = Vec::new();
    for field in FormField::ALL {
        lines.push(format!(
            "{}: {}",
            field_label(text, field),
            form.fields().get(field)
        ));
        if let Some(error) = form.errors().get(field) {
            lines.push(format!("  ! {error}"));
        }
    }

    let button = match state {
        SubmissionState::Submitting => text.lookup("contact.form.sending"),
        _ => text.lookup("contact.form.submit"),
    };
    lines.push(format!("[ {button} ]"));

    if let Some(failure) = form.submission_failure() {
        lines.push(format!("! {failure}"));
    }

    lines.into_iter().map(|line| line + "\n").collect()
}
