use yew::prelude::*;

use crate::components::agent_tabs::{AgentPanel, Benefit};

const INCLUDES: &[&str] = &[
    "Abandoned-cart and post-purchase flows tuned per customer segment.",
    "Dynamic pricing rules driven by inventory, demand, and competitor signals.",
    "Automated attribution across ads, email, and on-site funnels.",
    "Real-time revenue dashboard with anomaly alerts.",
    "Plug-in connectors for Shopify, WooCommerce, and custom storefronts.",
];

const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Higher Conversion",
        desc: "Faster, more relevant follow-ups increase conversion rates.",
        stat: "+25%",
    },
    Benefit {
        title: "Clear ROI",
        desc: "Automated attribution shows which channels and flows actually drive revenue.",
        stat: "Tracked ROI",
    },
    Benefit {
        title: "Scale Without Headcount",
        desc: "Automations handle repetitive marketing and ops tasks.",
        stat: "No Extra Staff",
    },
    Benefit {
        title: "Data-Driven Decisions",
        desc: "Real-time insights let you optimise spend and creatives quickly.",
        stat: "Instant Insights",
    },
];

#[function_component(EcommerceRevenueEngine)]
pub fn ecommerce_revenue_engine() -> Html {
    html! {
        <AgentPanel
            title="Ecommerce Revenue Engine"
            intro="The Ecommerce Revenue Engine connects your storefront, marketing channels, \
                   and fulfilment data into one automated loop — recovering lost revenue and \
                   compounding the gains from every optimisation."
            includes={INCLUDES}
            benefits={BENEFITS}
        />
    }
}
