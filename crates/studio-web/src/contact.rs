use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use studio_core::{
    interpret_response, submit, ContactForm, ContactTransport, FormCell, FormField, FormStatus,
    SubmitFailure,
};
use studio_protocol::{ContactRequest, ProjectType, CONTACT_PATH};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

use crate::ui_icons::{IconName, UiIcon};
use crate::wasm_app::log;

const REQUEST_TIMEOUT_MS: i32 = 15_000;

/// The reactive signal holding the form, seen by the submit driver.
#[derive(Clone, Copy)]
struct FormSignal(RwSignal<ContactForm>);

impl FormCell for FormSignal {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// `fetch` against the contact endpoint, aborted after `REQUEST_TIMEOUT_MS`.
struct FetchTransport;

impl ContactTransport for FetchTransport {
    async fn post(&self, request: ContactRequest) -> Result<(), SubmitFailure> {
        match post_json(&request).await {
            Ok((ok, body)) => interpret_response(ok, &body),
            Err(err) => {
                log(&format!("contact request failed: {err:?}"));
                Err(SubmitFailure::Transport)
            }
        }
    }
}

async fn post_json(payload: &ContactRequest) -> Result<(bool, String), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let body = serde_json::to_string(payload).map_err(|err| JsValue::from_str(&err.to_string()))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let controller = AbortController::new()?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));
    init.set_signal(Some(&controller.signal()));
    let request = Request::new_with_str_and_init(CONTACT_PATH, &init)?;

    let abort = Closure::once(move || controller.abort());
    let timer = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        abort.as_ref().unchecked_ref(),
        REQUEST_TIMEOUT_MS,
    )?;

    let outcome = async {
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        let text = JsFuture::from(response.text()?).await?;
        Ok::<_, JsValue>((response.ok(), text.as_string().unwrap_or_default()))
    }
    .await;

    window.clear_timeout_with_handle(timer);
    outcome
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let status = Memo::new(move |_| form.with(|f| f.status()));
    let value = move |field: FormField| form.with(|f| f.field(field).to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            submit(&FormSignal(form), &FetchTransport).await;
        });
    };

    let error_banner = move || {
        if status.get() != FormStatus::Error {
            return None;
        }
        let message = form.with(|f| f.error_message().unwrap_or_default().to_string());
        Some(view! {
            <div class="form-error" role="alert">
                <UiIcon name=IconName::AlertTriangle size=16 />
                <span>{message}</span>
            </div>
        })
    };

    view! {
        <section id="contact" class="section contact">
            <div class="contact-info">
                <span class="eyebrow">"Get in Touch"</span>
                <h2>"Let's build" <br /> <span class="gradient-text">"something great"</span></h2>
                <p>
                    "No contact forms that go nowhere. No waiting weeks for a response. "
                    "Just reach out and talk directly with the person who'll build your project."
                </p>
                <a class="mail-link" href="mailto:hello@dimario.dev">
                    <UiIcon name=IconName::Mail size=18 />
                    <span>"hello@dimario.dev"</span>
                </a>
            </div>
            <div class="contact-card">
                <Show
                    when=move || status.get() == FormStatus::Success
                    fallback=move || view! {
                        <form class="contact-form" on:submit=on_submit>
                            <div class="form-row">
                                <label>
                                    <span>"Name"</span>
                                    <input
                                        type="text"
                                        name="name"
                                        required
                                        placeholder="Your name"
                                        prop:value=move || value(FormField::Name)
                                        on:input=move |ev| {
                                            form.update(|f| f.set_field(FormField::Name, event_target_value(&ev)))
                                        }
                                    />
                                </label>
                                <label>
                                    <span>"Email"</span>
                                    <input
                                        type="email"
                                        name="email"
                                        required
                                        placeholder="your@email.com"
                                        prop:value=move || value(FormField::Email)
                                        on:input=move |ev| {
                                            form.update(|f| f.set_field(FormField::Email, event_target_value(&ev)))
                                        }
                                    />
                                </label>
                            </div>
                            <label>
                                <span>"Project Type"</span>
                                <select
                                    name="projectType"
                                    prop:value=move || value(FormField::ProjectType)
                                    on:change=move |ev| {
                                        form.update(|f| f.set_field(FormField::ProjectType, event_target_value(&ev)))
                                    }
                                >
                                    <option value="">"Select a service"</option>
                                    {ProjectType::ALL
                                        .iter()
                                        .map(|kind| view! { <option value=kind.code()>{kind.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <label>
                                <span>"Message"</span>
                                <textarea
                                    name="message"
                                    required
                                    rows="4"
                                    placeholder="Tell us about your project..."
                                    prop:value=move || value(FormField::Message)
                                    on:input=move |ev| {
                                        form.update(|f| f.set_field(FormField::Message, event_target_value(&ev)))
                                    }
                                ></textarea>
                            </label>
                            {error_banner}
                            <button
                                type="submit"
                                class="button primary"
                                disabled=move || status.get() == FormStatus::Loading
                            >
                                {move || if status.get() == FormStatus::Loading { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    }
                >
                    <div class="form-success">
                        <div class="success-badge">
                            <UiIcon name=IconName::Check size=32 />
                        </div>
                        <h3>"Message Sent!"</h3>
                        <p>"Thanks for reaching out. We'll get back to you soon."</p>
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| {
                                form.update(|f| {
                                    f.reset();
                                });
                            }
                        >
                            "Send another message"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}
