use artzybear_commissions::form::{ContactField, SubmissionStatus};
use artzybear_commissions::{ContactForm, HttpStudioApi};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

const PROCESS_STEPS: [&str; 4] = [
    "1. Submit your commission request with details",
    "2. I'll provide a quote and timeline within 24 hours",
    "3. Upon agreement, I'll start creating your artwork",
    "4. Regular updates and final delivery",
];

#[component]
pub fn ContactSection() -> impl IntoView {
    let api = expect_context::<HttpStudioApi>();
    let form = RwSignal::new(ContactForm::new());
    let submitting = move || form.with(|f| f.is_submitting());
    let status = move || form.with(|f| f.status());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(job) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let outcome = job.run(&api).await;
            form.update(|f| f.finish(&outcome));
        });
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-description">
                        "Ready to start your art journey? Let's discuss your vision"
                    </p>
                </div>

                <div class="contact-grid">
                    <ContactInfo />

                    <form class="contact-form" on:submit=on_submit>
                        <Field form=form field=ContactField::Name label="Name" />
                        <Field form=form field=ContactField::Email label="Email" kind="email" />
                        <Field form=form field=ContactField::Subject label="Subject" />
                        <div class="form-field">
                            <label class="form-label">"Message"</label>
                            <textarea
                                name=ContactField::Message.name()
                                rows="4"
                                class="form-input form-input-dark"
                                required
                                prop:value=move || form.with(|f| f.field(ContactField::Message).to_string())
                                on:input=move |ev| form.update(|f| f.set_field(ContactField::Message, event_target_value(&ev)))
                            ></textarea>
                        </div>

                        <button type="submit" class="btn btn-primary btn-block" prop:disabled=submitting>
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                        </button>

                        <Show when=move || status() == SubmissionStatus::Success>
                            <div class="alert alert-success">"Message sent successfully! I'll get back to you soon."</div>
                        </Show>
                        <Show when=move || status() == SubmissionStatus::Error>
                            <div class="alert alert-error">"Error sending message. Please try again."</div>
                        </Show>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-info">
            <div>
                <h3 class="contact-heading">"Contact Information"</h3>
                <div class="contact-rows">
                    <div class="contact-row">
                        <span class="contact-icon">"✉"</span>
                        <div>
                            <p class="contact-row-title">"Email"</p>
                            <p class="contact-row-value">"artzy.bear@example.com"</p>
                        </div>
                    </div>
                    <div class="contact-row">
                        <span class="contact-icon">"⌖"</span>
                        <div>
                            <p class="contact-row-title">"Location"</p>
                            <p class="contact-row-value">"Available for commissions worldwide"</p>
                        </div>
                    </div>
                </div>
            </div>

            <div>
                <h3 class="contact-heading">"Commission Process"</h3>
                <div class="contact-process">
                    {PROCESS_STEPS.into_iter().map(|step| view! { <p>{step}</p> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Field(
    form: RwSignal<ContactForm>,
    field: ContactField,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <input
                type=kind
                name=field.name()
                class="form-input form-input-dark"
                required
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}
