use yew::prelude::*;

use crate::components::agent_tabs::{AgentPanel, Benefit};

const INCLUDES: &[&str] = &[
    "Auto-extraction of key requirements from RFP documents (PDF, Word, or scanned).",
    "Compliance checklist generation and gap analysis.",
    "Draft proposal templates auto-filled with company data and past project references.",
    "Centralized RFP tracking dashboard.",
    "Optional approval workflow for team collaboration.",
];

const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Win More Contracts",
        desc: "Faster turnaround gives you a competitive edge in bidding.",
        stat: "2x Wins",
    },
    Benefit {
        title: "Guaranteed Compliance",
        desc: "Never miss a requirement or document clause again.",
        stat: "Zero Misses",
    },
    Benefit {
        title: "Time Savings",
        desc: "Reduce hours of manual document review and formatting.",
        stat: "-80% Time",
    },
    Benefit {
        title: "Knowledge Retention",
        desc: "Store previous RFP responses for future reuse and consistency.",
        stat: "Reusable",
    },
];

#[function_component(Rfp)]
pub fn rfp() -> Html {
    html! {
        <AgentPanel
            title="RFP AI Agent"
            intro="The RFP AI Agent simplifies and accelerates the Request for Proposal \
                   process by automating document review, compliance validation, and initial \
                   proposal drafting — ideal for consulting, IT, construction, and government \
                   contracting firms."
            includes={INCLUDES}
            benefits={BENEFITS}
        />
    }
}
