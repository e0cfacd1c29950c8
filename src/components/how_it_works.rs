use yew::prelude::*;

struct Step {
    number: u8,
    title: &'static str,
    description: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Discovery",
        description: "We assess your operations and identify automation gaps—mapping workflows \
                      with precision to uncover hidden efficiencies.",
    },
    Step {
        number: 2,
        title: "Build",
        description: "We design and deploy AI agents or workflow automations—crafting \
                      intelligent systems that integrate seamlessly and scale effortlessly.",
    },
    Step {
        number: 3,
        title: "Optimize",
        description: "We monitor performance and scale as you grow—iterating with data-driven \
                      insights for continuous evolution and peak results.",
    },
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="how-it-works">
            <h2 class="section-title">{"How It Works"}</h2>
            <p class="section-subtitle">
                {"Three seamless, intelligent steps to future-proof your business with \
                  cutting-edge automation."}
            </p>

            <div class="steps-grid">
                { for STEPS.iter().map(|step| html! {
                    <div class="step-card">
                        <div class="step-number">{step.number}</div>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                    .how-it-works {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(135deg, var(--bg-color), var(--bg-color), var(--secondary-color));
                    }

                    .steps-grid {
                        max-width: 68rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                    }

                    .step-card {
                        padding: 2.5rem 2rem;
                        background: var(--secondary-color);
                        border: 1px solid var(--border-color);
                        border-radius: 1.5rem;
                        text-align: center;
                        transition: transform 0.4s ease, box-shadow 0.4s ease;
                    }

                    .step-card:hover {
                        transform: translateY(-10px) scale(1.03);
                        box-shadow: 0 25px 50px rgba(0, 184, 184, 0.25);
                    }

                    .step-number {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.5rem auto;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.3rem;
                        font-weight: 700;
                        color: #fff;
                        background: linear-gradient(135deg, var(--primary-color), var(--primary-hover));
                        box-shadow: 0 0 0 4px rgba(0, 184, 184, 0.2);
                    }

                    .step-card h3 {
                        margin-bottom: 0.75rem;
                        font-size: 1.1rem;
                    }

                    .step-card p {
                        font-size: 0.95rem;
                        opacity: 0.85;
                    }
                "#}
            </style>
        </section>
    }
}
