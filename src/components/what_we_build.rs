use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::agent_tabs::{Agent, AgentQuery};
use crate::Route;

struct Card {
    agent: Agent,
    title: &'static str,
    description: &'static str,
}

/// One card per offering; each deep-links to its agent panel on the services
/// page.
const CARDS: &[Card] = &[
    Card {
        agent: Agent::Ecommerce,
        title: "Ecommerce Revenue Engine",
        description: "AI-driven optimization for sales funnels, dynamic pricing, and customer \
                      retention—boost conversions by 30%+.",
    },
    Card {
        agent: Agent::Inventory,
        title: "Multi-Channel Inventory & Booking",
        description: "Seamless sync across platforms with real-time alerts and predictive \
                      restocking—eliminate stockouts and overages.",
    },
    Card {
        agent: Agent::InternalAudit,
        title: "Internal Audit AI Agent",
        description: "Proactive risk assessment, policy enforcement, and reporting—enhance \
                      governance with continuous, AI-powered oversight.",
    },
    Card {
        agent: Agent::AccountsReceivable,
        title: "Accounts Receivable AI Agent",
        description: "Intelligent invoicing, payment reminders, and collections—improve cash \
                      flow recovery by 40% through personalized outreach.",
    },
    Card {
        agent: Agent::Rfp,
        title: "RFP AI Agent",
        description: "Streamlined proposal creation, response matching, and submission \
                      tracking—win more bids with tailored, error-free RFPs.",
    },
    Card {
        agent: Agent::Custom,
        title: "Custom Automations & AI Agents",
        description: "Tailored solutions for your unique workflows—from bespoke integrations \
                      to scalable AI copilots.",
    },
];

#[function_component(WhatWeBuild)]
pub fn what_we_build() -> Html {
    html! {
        <section id="features" class="what-we-build">
            <h2 class="section-title">{"What We Build"}</h2>
            <p class="section-subtitle">
                {"Purpose-built automations and AI agents for the work that eats your week."}
            </p>

            <div class="build-grid">
                { for CARDS.iter().map(|card| html! {
                    <Link<Route, AgentQuery>
                        to={Route::Services}
                        query={Some(AgentQuery::for_agent(card.agent))}
                        classes="build-card"
                    >
                        <h3>{card.title}</h3>
                        <p>{card.description}</p>
                        <span class="build-card-more">{"Explore →"}</span>
                    </Link<Route, AgentQuery>>
                }) }
            </div>

            <style>
                {r#"
                    .what-we-build {
                        padding: 6rem 1.5rem;
                        background: var(--bg-color);
                    }

                    .build-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 1.5rem;
                    }

                    .build-card {
                        display: block;
                        padding: 2rem;
                        background: var(--secondary-color);
                        border: 1px solid var(--border-color);
                        border-radius: 1.5rem;
                        transition: transform 0.3s ease, box-shadow 0.3s ease, border-color 0.3s ease;
                    }

                    .build-card:hover {
                        transform: translateY(-5px) scale(1.02);
                        border-color: rgba(0, 184, 184, 0.5);
                        box-shadow: 0 20px 40px rgba(0, 184, 184, 0.15);
                    }

                    .build-card h3 {
                        font-size: 1.15rem;
                        margin-bottom: 0.75rem;
                        color: var(--primary-color);
                    }

                    .build-card p {
                        font-size: 0.95rem;
                        opacity: 0.85;
                        margin-bottom: 1rem;
                    }

                    .build-card-more {
                        font-size: 0.85rem;
                        font-weight: 600;
                        color: var(--accent-color);
                    }
                "#}
            </style>
        </section>
    }
}
