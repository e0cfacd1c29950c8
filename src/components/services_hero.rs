use yew::prelude::*;

use crate::config;

#[function_component(ServicesHero)]
pub fn services_hero() -> Html {
    html! {
        <section class="services-hero">
            <div class="services-hero-content">
                <h1>
                    {"Automation That Drives"}
                    <br />
                    <span class="accent">{"Real Business Results"}</span>
                </h1>
                <p>
                    {"From cash flow to compliance, our AI agents streamline your most \
                      demanding business processes — saving hours and improving accuracy."}
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
                    .services-hero {
                        min-height: 80vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 8rem 1.5rem 4rem 1.5rem;
                        background:
                            radial-gradient(circle at 20% 30%, rgba(0, 184, 184, 0.15), transparent 50%),
                            radial-gradient(circle at 80% 70%, rgba(197, 160, 82, 0.1), transparent 50%),
                            linear-gradient(135deg, var(--bg-color), var(--secondary-color));
                    }

                    .services-hero-content {
                        max-width: 48rem;
                        text-align: center;
                    }

                    .services-hero h1 {
                        font-size: clamp(2.2rem, 5vw, 3.8rem);
                        margin-bottom: 1.5rem;
                        color: var(--primary-color);
                    }

                    .services-hero .accent {
                        color: var(--accent-color);
                    }

                    .services-hero p {
                        font-size: 1.1rem;
                        opacity: 0.9;
                        margin-bottom: 3rem;
                    }
                "#}
            </style>
        </section>
    }
}
