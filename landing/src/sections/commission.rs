//! Commission request form.
//!
//! Field state and the submit state machine live in
//! `artzybear_commissions::form`; this module only binds them to the DOM,
//! reads picked files into memory and runs the submission on the UI thread.

use artzybear_commissions::form::{CommissionField, SubmissionStatus};
use artzybear_commissions::model::{
    BudgetRange, CommissionType, ReferenceImage, ReferenceImageSet, SizePreference,
};
use artzybear_commissions::{CommissionForm, HttpStudioApi};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use super::PRICE_RANGE;

const SUCCESS_MESSAGE: &str = "Thank you! Your commission request has been submitted successfully. I'll get back to you within 24 hours.";
const ERROR_MESSAGE: &str = "There was an error submitting your request. Please try again or contact me directly.";

#[component]
pub fn CommissionSection() -> impl IntoView {
    let api = expect_context::<HttpStudioApi>();
    let form = RwSignal::new(CommissionForm::new());
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let submitting = move || form.with(|f| f.is_submitting());
    let status = move || form.with(|f| f.status());
    let reading_files = move || form.with(|f| f.is_reading_files());

    let on_files = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let files: Vec<web_sys::File> = match input.files() {
            Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
            None => Vec::new(),
        };
        let Some(ticket) = form.try_update(|f| f.begin_file_read()) else {
            return;
        };
        spawn_local(async move {
            let images = read_images(files).await;
            let (count, bytes) = (images.len(), images.total_bytes());
            if form.try_update(|f| f.finish_file_read(ticket, images)).unwrap_or(false) {
                tracing::debug!(files = count, bytes, "reference images selected");
            } else {
                tracing::debug!("newer file selection superseded this read");
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(job) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let outcome = job.run(&api).await;
            form.update(|f| f.finish(&outcome));
            if let (Ok(_), Some(input)) = (&outcome, file_input.get_untracked()) {
                input.set_value("");
            }
        });
    };

    view! {
        <section id="commissions" class="commissions">
            <div class="container container-narrow">
                <div class="section-header">
                    <h2 class="section-title">"Commission Custom Art"</h2>
                    <p class="section-description">
                        "Ready to create something unique? Fill out the form below to request a custom commission"
                    </p>
                    <div class="price-banner">{format!("Price Range: {PRICE_RANGE}")}</div>
                </div>

                <form class="commission-form" on:submit=on_submit>
                    <div class="form-grid">
                        <TextInput form=form field=CommissionField::ClientName label="Your Name *" />
                        <TextInput form=form field=CommissionField::ClientEmail label="Email Address *" kind="email" />
                        <TextInput form=form field=CommissionField::ClientPhone label="Phone Number *" kind="tel" />
                        <Choice
                            form=form
                            field=CommissionField::CommissionType
                            label="Commission Type *"
                            placeholder="Select Type"
                            options=CommissionType::ALL.iter().map(|t| (t.as_value(), t.label())).collect()
                        />
                        <Choice
                            form=form
                            field=CommissionField::SizePreference
                            label="Size Preference *"
                            placeholder="Select Size"
                            options=SizePreference::ALL.iter().map(|s| (s.as_value(), s.label())).collect()
                        />
                        <Choice
                            form=form
                            field=CommissionField::BudgetRange
                            label="Budget Range *"
                            placeholder="Select Budget"
                            options=BudgetRange::ALL.iter().map(|b| (b.as_value(), b.label())).collect()
                        />
                    </div>

                    <TextArea
                        form=form
                        field=CommissionField::SubjectDescription
                        label="Subject Description *"
                        rows=4
                        placeholder="Describe what you'd like me to draw (e.g., family portrait with 3 people, celebrity portrait of...)"
                    />

                    <TextInput form=form field=CommissionField::Deadline label="Deadline (Optional)" kind="date" />

                    <div class="form-field">
                        <label class="form-label">"Reference Images (Optional)"</label>
                        <input
                            type="file"
                            multiple
                            accept="image/*"
                            class="form-input"
                            node_ref=file_input
                            on:change=on_files
                        />
                        <p class="form-hint">
                            {move || {
                                let count = form.with(|f| f.images().len());
                                if reading_files() {
                                    "Reading selected files...".to_string()
                                } else if count > 0 {
                                    format!("{count} reference image(s) attached")
                                } else {
                                    "Upload reference photos for your commission".to_string()
                                }
                            }}
                        </p>
                    </div>

                    <TextArea
                        form=form
                        field=CommissionField::AdditionalNotes
                        label="Additional Notes"
                        rows=3
                        placeholder="Any special requirements or additional details..."
                    />

                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        prop:disabled=move || submitting() || reading_files()
                    >
                        {move || if submitting() { "Submitting..." } else { "Submit Commission Request" }}
                    </button>

                    <Show when=move || status() == SubmissionStatus::Success>
                        <div class="alert alert-success">{SUCCESS_MESSAGE}</div>
                    </Show>
                    <Show when=move || status() == SubmissionStatus::Error>
                        <div class="alert alert-error">{ERROR_MESSAGE}</div>
                    </Show>
                </form>
            </div>
        </section>
    }
}

/// Read picked files into memory, keeping selection order.
///
/// A file the browser refuses to read is logged and left out.
async fn read_images(files: Vec<web_sys::File>) -> ReferenceImageSet {
    let mut images = Vec::with_capacity(files.len());
    for file in files {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => images.push(ReferenceImage::new(
                file.name(),
                file.type_(),
                js_sys::Uint8Array::new(&buffer).to_vec(),
            )),
            Err(err) => tracing::warn!(file = %file.name(), error = ?err, "could not read reference image"),
        }
    }
    ReferenceImageSet::new(images)
}

#[component]
fn TextInput(
    form: RwSignal<CommissionForm>,
    field: CommissionField,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <input
                type=kind
                name=field.name()
                class="form-input"
                required=field.is_required()
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn TextArea(
    form: RwSignal<CommissionForm>,
    field: CommissionField,
    label: &'static str,
    rows: u32,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <textarea
                name=field.name()
                class="form-input"
                rows=rows.to_string()
                placeholder=placeholder
                required=field.is_required()
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

#[component]
fn Choice(
    form: RwSignal<CommissionForm>,
    field: CommissionField,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let selected = move |value: &'static str| form.with(|f| f.field(field) == value);
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <select
                name=field.name()
                class="form-input"
                required=field.is_required()
                on:change=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            >
                <option value="" prop:selected=move || selected("")>{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        view! { <option value=value prop:selected=move || selected(value)>{text}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
