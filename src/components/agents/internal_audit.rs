use yew::prelude::*;

use crate::components::agent_tabs::{AgentPanel, Benefit};

const INCLUDES: &[&str] = &[
    "Continuous transaction sampling against your policy rules.",
    "Risk scoring with drill-down evidence trails for every flag.",
    "Policy-enforcement alerts routed to the responsible owner.",
    "Scheduled audit reports in board-ready format.",
    "Read-only connectors for ERP, expense, and procurement systems.",
];

const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Always-On Oversight",
        desc: "Every transaction is screened, not a quarterly sample.",
        stat: "100% Coverage",
    },
    Benefit {
        title: "Earlier Detection",
        desc: "Anomalies surface in hours instead of at year-end.",
        stat: "Hours, Not Months",
    },
    Benefit {
        title: "Audit-Ready Evidence",
        desc: "Every flag links to its source documents automatically.",
        stat: "Traceable",
    },
    Benefit {
        title: "Lighter Audit Season",
        desc: "External auditors start from organized, continuous records.",
        stat: "-60% Prep",
    },
];

#[function_component(InternalAudit)]
pub fn internal_audit() -> Html {
    html! {
        <AgentPanel
            title="Internal Audit AI Agent"
            intro="The Internal Audit AI Agent keeps continuous, AI-powered oversight of your \
                   controls — proactive risk assessment, policy enforcement, and reporting that \
                   turns audit season from a scramble into a review."
            includes={INCLUDES}
            benefits={BENEFITS}
        />
    }
}
