//! Contact section with the booking CTA and the contact form.
//!
//! The form has no live endpoint yet: submission serializes the payload,
//! waits out a simulated network delay and settles on exactly one of
//! success/error. Success clears the fields; error keeps them so the visitor
//! can resubmit.

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

const MOCK_DELAY_MS: u32 = 1_500;

#[derive(Clone, PartialEq, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[derive(Debug)]
pub struct SendError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Success,
    Error,
}

/// Terminal status for a finished submission.
pub fn settle(result: Result<(), SendError>) -> SubmitStatus {
    match result {
        Ok(()) => SubmitStatus::Success,
        Err(SendError) => SubmitStatus::Error,
    }
}

/// Simulated transport. Serializes the payload the way a real POST would so
/// wiring in an endpoint later only replaces the body of this function.
pub async fn send_message(payload: &ContactForm) -> Result<(), SendError> {
    let _body = serde_json::to_string(payload).map_err(|_| SendError)?;
    TimeoutFuture::new(MOCK_DELAY_MS).await;
    Ok(())
}

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(|| SubmitStatus::Idle);

    let sending = *status == SubmitStatus::Sending;

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm {
                message: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }
            let payload = (*form).clone();
            if !payload.is_complete() {
                status.set(SubmitStatus::Error);
                return;
            }
            status.set(SubmitStatus::Sending);
            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                let result = send_message(&payload).await;
                let settled = settle(result);
                if settled == SubmitStatus::Success {
                    form.set(ContactForm::default());
                }
                status.set(settled);
            });
        })
    };

    let status_line = match *status {
        SubmitStatus::Success => Some((
            "status-message success",
            "Message sent! We'll be in touch soon.",
        )),
        SubmitStatus::Error => Some((
            "status-message error",
            "Something went wrong. Please try again.",
        )),
        SubmitStatus::Idle | SubmitStatus::Sending => None,
    };

    html! {
        <section id="contact" class="call-to-action">
            <h2 class="section-title">{"Ready to Automate?"}</h2>
            <p class="section-subtitle">
                {"Let's discuss how our systems can transform your business."}
            </p>

            <div class="cta-booking">
                <a
                    href={config::BOOKING_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-button"
                >
                    {"Book a Free Strategy Call"}
                </a>
            </div>

            <form class="contact-form" onsubmit={on_submit}>
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    value={form.name.clone()}
                    oninput={on_name}
                    disabled={sending}
                    required={true}
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    value={form.email.clone()}
                    oninput={on_email}
                    disabled={sending}
                    required={true}
                />
                <textarea
                    name="message"
                    placeholder="Tell us about your automation needs..."
                    rows="4"
                    value={form.message.clone()}
                    oninput={on_message}
                    disabled={sending}
                    required={true}
                />
                <button type="submit" class="cta-button submit" disabled={sending}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>

                if let Some((class, text)) = status_line {
                    <p class={class}>{text}</p>
                }
            </form>

            <div class="cta-social">
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="social-link">
                    {"Email"}
                </a>
                <a
                    href={config::LINKEDIN_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                >
                    {"LinkedIn"}
                </a>
            </div>

            <style>
                {r#"
                    .call-to-action {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(135deg, rgba(0, 184, 184, 0.1), var(--secondary-color), var(--bg-color));
                        text-align: center;
                    }

                    .cta-booking {
                        margin-bottom: 3rem;
                    }

                    .contact-form {
                        max-width: 32rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.85rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid var(--border-color);
                        background: var(--secondary-color);
                        color: var(--text-color);
                        font-family: inherit;
                        font-size: 0.95rem;
                        resize: none;
                    }

                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: 2px solid rgba(0, 184, 184, 0.5);
                    }

                    .cta-button.submit {
                        justify-content: center;
                    }

                    .status-message {
                        font-size: 0.9rem;
                        font-weight: 500;
                    }

                    .status-message.success {
                        color: var(--primary-color);
                    }

                    .status-message.error {
                        color: #f87171;
                    }

                    .cta-social {
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid var(--border-color);
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                    }

                    .social-link {
                        padding: 0.6rem 1.2rem;
                        border: 1px solid var(--border-color);
                        border-radius: 0.75rem;
                        font-size: 0.9rem;
                        transition: color 0.2s ease, border-color 0.2s ease;
                    }

                    .social-link:hover {
                        color: var(--primary-color);
                        border-color: rgba(0, 184, 184, 0.4);
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_maps_to_exactly_one_terminal_state() {
        assert_eq!(settle(Ok(())), SubmitStatus::Success);
        assert_eq!(settle(Err(SendError)), SubmitStatus::Error);
    }

    #[test]
    fn blank_fields_are_incomplete() {
        assert!(!ContactForm::default().is_complete());
        let form = ContactForm {
            name: "Ada".into(),
            email: "  ".into(),
            message: "Automate everything".into(),
        };
        assert!(!form.is_complete());
    }

    #[test]
    fn filled_form_is_complete() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Automate everything".into(),
        };
        assert!(form.is_complete());
    }

    #[test]
    fn payload_serializes_for_a_future_endpoint() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        };
        let body = serde_json::to_string(&form).unwrap();
        assert!(body.contains("\"email\":\"ada@example.com\""));
    }
}
