use yew::prelude::*;

use crate::components::about::About;
use crate::components::call_to_action::CallToAction;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::testimonials::Testimonials;
use crate::components::what_we_build::WhatWeBuild;
use crate::components::why_choose_us::WhyChooseUs;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <Hero />
            <About />
            <WhatWeBuild />
            <WhyChooseUs />
            <HowItWorks />
            <Testimonials />
            <CallToAction />
        </div>
    }
}
