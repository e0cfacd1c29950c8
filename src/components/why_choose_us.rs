use yew::prelude::*;

const POINTS: &[(&str, &str)] = &[
    (
        "Tailored Automations",
        "Built for your unique business model—custom AI agents that fit seamlessly into \
         your workflows, no cookie-cutter solutions.",
    ),
    (
        "Data-Driven Impact",
        "Clear results in hours saved and efficiency gained—measurable ROI from day one \
         with transparent analytics dashboards.",
    ),
    (
        "AI-Enabled Future",
        "Solutions that evolve with your business—adaptive agents that learn, scale, and \
         innovate alongside your growth.",
    ),
    (
        "Reliable Support",
        "Ongoing optimization and expert insight—dedicated partnership with proactive \
         monitoring and 24/7 AI-assisted troubleshooting.",
    ),
];

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section id="why-choose-us" class="why-choose-us">
            <h2 class="section-title">{"Why Choose Us"}</h2>
            <p class="section-subtitle">
                {"A partner for the long haul, not a one-off integration."}
            </p>

            <div class="points-grid">
                { for POINTS.iter().map(|(title, description)| html! {
                    <div class="point-card">
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                    .why-choose-us {
                        padding: 6rem 1.5rem;
                        background: var(--secondary-color);
                    }

                    .points-grid {
                        max-width: 64rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 1.5rem;
                    }

                    .point-card {
                        padding: 2rem;
                        background: var(--bg-color);
                        border: 1px solid var(--border-color);
                        border-radius: 1.5rem;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .point-card:hover {
                        transform: translateY(-5px);
                        box-shadow: 0 20px 40px rgba(0, 184, 184, 0.15);
                    }

                    .point-card h3 {
                        color: var(--primary-color);
                        margin-bottom: 0.75rem;
                        font-size: 1.1rem;
                    }

                    .point-card p {
                        font-size: 0.95rem;
                        opacity: 0.85;
                    }
                "#}
            </style>
        </section>
    }
}
