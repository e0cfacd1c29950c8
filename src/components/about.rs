use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-content">
                <div class="about-photo">
                    <span class="about-photo-tag">{"Our Team in Action"}</span>
                </div>
                <p class="about-vision">
                    {"Arg Analytics builds intelligent systems that free people to focus on \
                      high-value work. We combine data, design, and automation to create \
                      lasting business infrastructure."}
                </p>
                <Link<Route> to={Route::Services} classes="cta-button">
                    {"Learn More About Us"}
                </Link<Route>>
            </div>

            <style>
                {r#"
                    .about-section {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(135deg, var(--bg-color), var(--secondary-color), var(--bg-color));
                    }

                    .about-content {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .about-photo {
                        position: relative;
                        height: 18rem;
                        margin-bottom: 3rem;
                        border-radius: 1.5rem;
                        background:
                            linear-gradient(135deg, rgba(0, 184, 184, 0.2), transparent, rgba(197, 160, 82, 0.2)),
                            var(--secondary-color);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }

                    .about-photo-tag {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        background: rgba(0, 184, 184, 0.8);
                        color: #fff;
                        font-weight: 700;
                        font-size: 0.9rem;
                    }

                    .about-vision {
                        font-size: 1.15rem;
                        font-style: italic;
                        font-weight: 300;
                        max-width: 42rem;
                        margin: 0 auto 3rem auto;
                        opacity: 0.9;
                    }
                "#}
            </style>
        </section>
    }
}
