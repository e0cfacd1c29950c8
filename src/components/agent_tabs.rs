//! Agent tab switcher on the services page.
//!
//! The selected panel is a pure derivation of the `agent` query parameter
//! against the six known ids, with a fixed fallback. Initial load,
//! back/forward navigation and tab clicks all run through the same
//! derivation; clicks replace (not push) the history entry so back-navigation
//! doesn't walk through every previously viewed tab.

use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::agents::accounts_receivable::AccountsReceivable;
use crate::components::agents::custom::CustomAutomations;
use crate::components::agents::ecommerce::EcommerceRevenueEngine;
use crate::components::agents::internal_audit::InternalAudit;
use crate::components::agents::inventory::InventoryBooking;
use crate::components::agents::rfp::Rfp;
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Agent {
    AccountsReceivable,
    Rfp,
    InternalAudit,
    Ecommerce,
    Inventory,
    Custom,
}

impl Agent {
    pub const ALL: [Agent; 6] = [
        Agent::AccountsReceivable,
        Agent::Rfp,
        Agent::InternalAudit,
        Agent::Ecommerce,
        Agent::Inventory,
        Agent::Custom,
    ];

    pub const DEFAULT: Agent = Agent::AccountsReceivable;

    pub fn id(self) -> &'static str {
        match self {
            Agent::AccountsReceivable => "accounts-receivable",
            Agent::Rfp => "rfp",
            Agent::InternalAudit => "internal-audit",
            Agent::Ecommerce => "ecommerce",
            Agent::Inventory => "inventory",
            Agent::Custom => "custom",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Agent::AccountsReceivable => "Accounts Receivable AI Agent",
            Agent::Rfp => "RFP AI Agent",
            Agent::InternalAudit => "Internal Audit AI Agent",
            Agent::Ecommerce => "Ecommerce Revenue Engine",
            Agent::Inventory => "Multi-Channel Inventory & Booking",
            Agent::Custom => "Custom Automations & AI Agents",
        }
    }

    pub fn from_id(id: &str) -> Option<Agent> {
        Agent::ALL.into_iter().find(|agent| agent.id() == id)
    }

    /// Total: any unrecognized or missing value falls back to the default
    /// panel without signaling an error.
    pub fn from_query(param: Option<&str>) -> Agent {
        param.and_then(Agent::from_id).unwrap_or(Agent::DEFAULT)
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentQuery {
    #[serde(default)]
    pub agent: Option<String>,
}

impl AgentQuery {
    pub fn for_agent(agent: Agent) -> Self {
        Self {
            agent: Some(agent.id().to_string()),
        }
    }
}

#[derive(PartialEq)]
pub struct Benefit {
    pub title: &'static str,
    pub desc: &'static str,
    pub stat: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct AgentPanelProps {
    pub title: &'static str,
    pub intro: &'static str,
    pub includes: &'static [&'static str],
    pub benefits: &'static [Benefit],
}

/// Shared layout for the six agent detail panels: intro, "What It Includes"
/// list, benefit cards with a mini-stat chip.
#[function_component(AgentPanel)]
pub fn agent_panel(props: &AgentPanelProps) -> Html {
    html! {
        <div class="agent-panel">
            <h1 class="agent-panel-title">{props.title}</h1>
            <p class="agent-panel-intro">{props.intro}</p>

            <h2 class="agent-panel-heading">{"What It Includes"}</h2>
            <ul class="agent-includes">
                { for props.includes.iter().map(|item| html! {
                    <li>{*item}</li>
                }) }
            </ul>

            <h2 class="agent-panel-heading">{"Key Benefits"}</h2>
            <div class="agent-benefits">
                { for props.benefits.iter().map(|benefit| html! {
                    <div class="benefit-card">
                        <span class="benefit-stat">{benefit.stat}</span>
                        <h3>{benefit.title}</h3>
                        <p>{benefit.desc}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(AgentTabs)]
pub fn agent_tabs() -> Html {
    let location = use_location().unwrap();
    let navigator = use_navigator().unwrap();

    let query_agent = location.query::<AgentQuery>().ok().and_then(|q| q.agent);
    let selected = use_state(|| Agent::from_query(query_agent.as_deref()));

    // Re-derive whenever the query string changes, which also covers
    // back/forward navigation.
    {
        let selected = selected.clone();
        use_effect_with_deps(
            move |agent: &Option<String>| {
                selected.set(Agent::from_query(agent.as_deref()));
                || ()
            },
            query_agent,
        );
    }

    let on_tab = {
        let selected = selected.clone();
        let navigator = navigator.clone();
        Callback::from(move |agent: Agent| {
            selected.set(agent);
            if let Err(err) =
                navigator.replace_with_query(&Route::Services, &AgentQuery::for_agent(agent))
            {
                gloo_console::error!(format!("failed to update agent query: {err}"));
            }
        })
    };

    let panel = match *selected {
        Agent::AccountsReceivable => html! { <AccountsReceivable /> },
        Agent::Rfp => html! { <Rfp /> },
        Agent::InternalAudit => html! { <InternalAudit /> },
        Agent::Ecommerce => html! { <EcommerceRevenueEngine /> },
        Agent::Inventory => html! { <InventoryBooking /> },
        Agent::Custom => html! { <CustomAutomations /> },
    };

    html! {
        <section id="ai-automation" class="agent-tabs-section">
            <h1 class="agent-tabs-title">{selected.title()}</h1>

            <div class="agent-tab-row">
                { for Agent::ALL.into_iter().map(|agent| {
                    let on_tab = on_tab.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_tab.emit(agent));
                    html! {
                        <button
                            class={classes!("agent-tab", (*selected == agent).then_some("selected"))}
                            {onclick}
                        >
                            {agent.title()}
                        </button>
                    }
                }) }
            </div>

            <div class="agent-panel-slot" key={selected.id()}>
                {panel}
            </div>

            <style>
                {r#"
                    .agent-tabs-section {
                        padding: 4rem 1.5rem;
                        background: var(--bg-color);
                        max-width: 72rem;
                        margin: 0 auto;
                    }

                    .agent-tabs-title {
                        text-align: center;
                        font-size: clamp(1.5rem, 3vw, 2rem);
                        color: var(--primary-color);
                        margin-bottom: 1.5rem;
                    }

                    .agent-tab-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 2rem;
                    }

                    .agent-tab {
                        padding: 0.6rem 1.2rem;
                        border-radius: 0.75rem;
                        border: 1px solid var(--border-color);
                        background: var(--secondary-color);
                        color: var(--text-color);
                        font-size: 0.9rem;
                        font-weight: 600;
                        white-space: nowrap;
                        opacity: 0.75;
                        transition: transform 0.2s ease, opacity 0.2s ease, border-color 0.2s ease;
                    }

                    .agent-tab:hover {
                        transform: translateY(-2px) scale(1.03);
                        opacity: 1;
                        border-color: rgba(0, 184, 184, 0.5);
                    }

                    .agent-tab.selected {
                        background: linear-gradient(90deg, var(--primary-color), var(--primary-hover));
                        color: #fff;
                        border-color: transparent;
                        opacity: 1;
                        box-shadow: 0 8px 20px rgba(0, 184, 184, 0.3);
                    }

                    .agent-panel-slot {
                        animation: panel-in 0.4s ease;
                    }

                    @keyframes panel-in {
                        from { opacity: 0; transform: translateX(20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }

                    .agent-panel {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .agent-panel-title {
                        font-size: clamp(1.6rem, 3vw, 2.4rem);
                        margin-bottom: 1rem;
                        background: linear-gradient(90deg, var(--primary-color), var(--accent-color));
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .agent-panel-intro {
                        max-width: 42rem;
                        margin: 0 auto 2.5rem auto;
                        font-size: 0.95rem;
                        opacity: 0.9;
                    }

                    .agent-panel-heading {
                        font-size: 1.3rem;
                        color: var(--primary-color);
                        margin-bottom: 1.25rem;
                    }

                    .agent-includes {
                        list-style: none;
                        max-width: 38rem;
                        margin: 0 auto 2.5rem auto;
                        text-align: left;
                    }

                    .agent-includes li {
                        padding: 0.5rem 0 0.5rem 1rem;
                        border-left: 2px solid rgba(0, 184, 184, 0.3);
                        margin-bottom: 0.5rem;
                        font-size: 0.95rem;
                        opacity: 0.9;
                    }

                    .agent-benefits {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }

                    .benefit-card {
                        padding: 1.5rem;
                        background: var(--secondary-color);
                        border: 1px solid var(--border-color);
                        border-radius: 1rem;
                        text-align: left;
                        transition: transform 0.25s ease, box-shadow 0.25s ease;
                    }

                    .benefit-card:hover {
                        transform: translateY(-3px) scale(1.02);
                        box-shadow: 0 12px 25px rgba(0, 184, 184, 0.2);
                    }

                    .benefit-stat {
                        display: inline-block;
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: var(--accent-color);
                        background: rgba(197, 160, 82, 0.12);
                        padding: 0.2rem 0.5rem;
                        border-radius: 0.4rem;
                        margin-bottom: 0.75rem;
                    }

                    .benefit-card h3 {
                        font-size: 0.95rem;
                        margin-bottom: 0.5rem;
                    }

                    .benefit-card p {
                        font-size: 0.85rem;
                        opacity: 0.85;
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
    fn every_known_id_round_trips() {
        for agent in Agent::ALL {
            assert_eq!(Agent::from_id(agent.id()), Some(agent));
            assert_eq!(Agent::from_query(Some(agent.id())), agent);
        }
    }

    #[test]
    fn unknown_or_missing_id_falls_back_to_default() {
        assert_eq!(Agent::from_query(None), Agent::AccountsReceivable);
        assert_eq!(Agent::from_query(Some("payroll")), Agent::AccountsReceivable);
        assert_eq!(Agent::from_query(Some("")), Agent::AccountsReceivable);
    }

    #[test]
    fn query_for_agent_carries_the_id() {
        let query = AgentQuery::for_agent(Agent::Ecommerce);
        assert_eq!(query.agent.as_deref(), Some("ecommerce"));
    }

    #[test]
    fn query_round_trips_through_serde() {
        let query = AgentQuery::for_agent(Agent::Rfp);
        let encoded = serde_json::to_string(&query).unwrap();
        let decoded: AgentQuery = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, query);
    }
}
