use yew::prelude::*;

use crate::config;

#[function_component(WhyBusinessesChooseUs)]
pub fn why_businesses_choose_us() -> Html {
    html! {
        <section id="consulting" class="why-businesses">
            <div class="why-businesses-content">
                <h2 class="section-title">{"Why Businesses Choose Us"}</h2>
                <p>
                    {"We don't sell software seats. We design the automation around your \
                      operation, run it alongside your team, and stay accountable for the \
                      results it produces."}
                </p>
                <a
                    href={config::BOOKING_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-button"
                >
                    {"Book a Free Consultation"}
                </a>
            </div>

            <style>
                {r#"
                    .why-businesses {
                        padding: 4rem 1.5rem 6rem 1.5rem;
                        background: linear-gradient(135deg, var(--bg-color), var(--secondary-color), rgba(0, 184, 184, 0.1));
                    }

                    .why-businesses-content {
                        max-width: 44rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .why-businesses p {
                        margin-bottom: 2.5rem;
                        opacity: 0.9;
                    }
                "#}
            </style>
        </section>
    }
}
