//! Consultation request dialog
//!
//! The dialog and its form render straight from `LeadCapture`; every input
//! event writes back into it, and submitting hands the validated record to
//! the browser transport.

use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::common::{BaseModal, CheckboxField, SelectField, TextAreaField, TextField};
use super::context::{PageContext, use_page_context};
use super::dom::ids;
use super::transport::BrowserTransport;
use crate::core::submission::submit;
use crate::core::{CloseReason, FormField, SubmissionSettings, SubmitBlocked};

/// `(value, label)` pairs for the services multi-select
const SERVICE_OPTIONS: [(&str, &str); 4] = [
    ("vision-inspection", "AI vision inspection"),
    ("defect-detection", "Defect detection model"),
    ("line-integration", "Production line integration"),
    ("poc", "Proof of concept"),
];

const BUDGET_OPTIONS: &[(&str, &str)] = &[
    ("", "Select a range"),
    ("under-10m", "Under 10M KRW"),
    ("10m-30m", "10M - 30M KRW"),
    ("30m-50m", "30M - 50M KRW"),
    ("over-50m", "Over 50M KRW"),
];

fn field_value(ctx: PageContext, field: FormField) -> Signal<String> {
    Signal::derive(move || ctx.lead.with(|lead| lead.form().value(field).to_string()))
}

fn field_error(ctx: PageContext, field: FormField) -> Signal<Option<String>> {
    Signal::derive(move || ctx.lead.with(|lead| lead.errors().message_for(field)))
}

fn field_input(ctx: PageContext, field: FormField) -> Callback<String> {
    Callback::new(move |value: String| {
        ctx.lead.update(|lead| lead.set_value(field, value));
    })
}

#[component]
pub fn ConsultationModal() -> impl IntoView {
    let ctx = use_page_context();

    let is_open = Signal::derive(move || ctx.lead.with(|lead| lead.is_open()));
    let submit_disabled = move || ctx.lead.with(|lead| lead.submit_disabled());
    let submit_label = move || ctx.lead.with(|lead| lead.submit_label());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let record = match ctx.lead.try_update(|lead| lead.begin_submit(Utc::now())) {
            Some(Ok(record)) => record,
            Some(Err(SubmitBlocked::Invalid)) => {
                let count = ctx.lead.with_untracked(|lead| lead.errors().error_count());
                log!("Consultation form has {} invalid field(s)", count);
                return;
            }
            Some(Err(SubmitBlocked::InFlight)) | None => return,
        };

        spawn_local(async move {
            let transport = BrowserTransport;
            let settings = SubmissionSettings::default();
            let result = submit(&transport, &settings, &record).await;
            match &result {
                Ok(()) => log!("Consultation request sent"),
                Err(e) => error!("Consultation request failed: {}", e),
            }
            ctx.finish_submission(result);
        });
    };

    view! {
        <BaseModal
            id=ids::CONSULTATION_MODAL
            close_button_id=ids::CLOSE_MODAL
            title="Request a Consultation".to_string()
            subtitle="Tell us about your inspection line and we will get back to you within 24 hours.".to_string()
            is_open=is_open
            on_close=Callback::new(move |_| ctx.close_consultation(CloseReason::CloseButton))
            on_backdrop=Callback::new(move |_| ctx.close_consultation(CloseReason::Backdrop))
        >
            <form id=ids::CONSULTATION_FORM class="consultation-form" novalidate=true on:submit=on_submit>
                <div class="form-row">
                    <TextField
                        name="name"
                        label="Name"
                        required=true
                        placeholder="Your name"
                        value=field_value(ctx, FormField::Name)
                        on_input=field_input(ctx, FormField::Name)
                        error=field_error(ctx, FormField::Name)
                    />
                    <TextField
                        name="company"
                        label="Company"
                        placeholder="Company name"
                        value=field_value(ctx, FormField::Company)
                        on_input=field_input(ctx, FormField::Company)
                        error=field_error(ctx, FormField::Company)
                    />
                </div>
                <div class="form-row">
                    <TextField
                        name="email"
                        label="Email"
                        required=true
                        input_type="email"
                        placeholder="you@company.com"
                        value=field_value(ctx, FormField::Email)
                        on_input=field_input(ctx, FormField::Email)
                        error=field_error(ctx, FormField::Email)
                    />
                    <TextField
                        name="phone"
                        label="Phone"
                        required=true
                        input_type="tel"
                        placeholder="010-1234-5678"
                        value=field_value(ctx, FormField::Phone)
                        on_input=field_input(ctx, FormField::Phone)
                        error=field_error(ctx, FormField::Phone)
                    />
                </div>
                <TextField
                    name="subject"
                    label="Subject"
                    required=true
                    placeholder="What would you like to inspect?"
                    value=field_value(ctx, FormField::Subject)
                    on_input=field_input(ctx, FormField::Subject)
                    error=field_error(ctx, FormField::Subject)
                />
                <SelectField
                    name="budget"
                    label="Budget"
                    value=field_value(ctx, FormField::Budget)
                    on_change=field_input(ctx, FormField::Budget)
                    options=BUDGET_OPTIONS
                />
                <fieldset class="form-group">
                    <legend class="form-label">"Services of interest"</legend>
                    <div class="checkbox-grid">
                        {SERVICE_OPTIONS
                            .iter()
                            .map(|&(value, label)| {
                                view! {
                                    <CheckboxField
                                        name="services"
                                        value=value
                                        label=label
                                        checked=Signal::derive(move || {
                                            ctx.lead.with(|lead| lead.form().has_service(value))
                                        })
                                        on_change=Callback::new(move |selected: bool| {
                                            ctx.lead.update(|lead| lead.set_service(value, selected));
                                        })
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </fieldset>
                <TextAreaField
                    name="message"
                    label="Message"
                    required=true
                    placeholder="Line speed, product type, current defects..."
                    value=field_value(ctx, FormField::Message)
                    on_input=field_input(ctx, FormField::Message)
                    error=field_error(ctx, FormField::Message)
                />
                <CheckboxField
                    name="privacy"
                    value="agree"
                    label="I agree to the collection and use of my personal information."
                    checked=Signal::derive(move || ctx.lead.with(|lead| lead.form().privacy))
                    on_change=Callback::new(move |accepted: bool| {
                        ctx.lead.update(|lead| lead.set_privacy(accepted));
                    })
                    error=field_error(ctx, FormField::Privacy)
                />
                <button
                    type="submit"
                    class="submit-button"
                    disabled=submit_disabled
                >
                    {submit_label}
                </button>
            </form>
        </BaseModal>
    }
}
