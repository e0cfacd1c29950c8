use yew::prelude::*;

use crate::components::agent_tabs::AgentTabs;
use crate::components::services_hero::ServicesHero;
use crate::components::why_businesses::WhyBusinessesChooseUs;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <ServicesHero />
            <AgentTabs />
            <WhyBusinessesChooseUs />
        </div>
    }
}
