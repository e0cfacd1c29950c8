use yew::prelude::*;

use crate::components::agent_tabs::{AgentPanel, Benefit};

const INCLUDES: &[&str] = &[
    "Discovery workshop to map the workflows worth automating first.",
    "Bespoke integrations between the tools you already run.",
    "Purpose-built AI copilots trained on your documents and data.",
    "Monitoring and alerting for every automation we ship.",
    "Iteration retainer so the system evolves with the business.",
];

const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Fits Your Workflow",
        desc: "Built around how your team actually works, not a template.",
        stat: "Tailored",
    },
    Benefit {
        title: "Owns the Glue Work",
        desc: "The copy-paste between systems disappears.",
        stat: "No Busywork",
    },
    Benefit {
        title: "Scales With You",
        desc: "Automations grow from one workflow to the whole operation.",
        stat: "Compounding",
    },
    Benefit {
        title: "Supported Long-Term",
        desc: "We monitor, maintain, and extend what we build.",
        stat: "Partnership",
    },
];

#[function_component(CustomAutomations)]
pub fn custom_automations() -> Html {
    html! {
        <AgentPanel
            title="Custom Automations & AI Agents"
            intro="When the off-the-shelf agents don't match your operation, we design one \
                   that does — from bespoke integrations to scalable AI copilots, delivered \
                   and supported as a long-term partnership."
            includes={INCLUDES}
            benefits={BENEFITS}
        />
    }
}
