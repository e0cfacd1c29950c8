use yew::prelude::*;

use crate::components::agent_tabs::{AgentPanel, Benefit};

const INCLUDES: &[&str] = &[
    "Automated invoice generation and delivery from your billing system.",
    "Personalized payment reminders that escalate on a configurable schedule.",
    "Payment matching and reconciliation against bank feeds.",
    "Aging reports with collection-priority scoring.",
    "Hand-off summaries for accounts that need a human call.",
];

const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Faster Cash Flow",
        desc: "Invoices go out on time and reminders never slip.",
        stat: "+40% Recovery",
    },
    Benefit {
        title: "Fewer Write-Offs",
        desc: "Early, consistent outreach keeps balances from going stale.",
        stat: "Less Bad Debt",
    },
    Benefit {
        title: "Hands-Off Reconciliation",
        desc: "Payments match themselves; your team reviews exceptions only.",
        stat: "Auto-Matched",
    },
    Benefit {
        title: "Customer-Friendly Tone",
        desc: "Outreach is personalized, not a form letter on repeat.",
        stat: "Personalized",
    },
];

#[function_component(AccountsReceivable)]
pub fn accounts_receivable() -> Html {
    html! {
        <AgentPanel
            title="Accounts Receivable AI Agent"
            intro="The Accounts Receivable AI Agent runs your invoice-to-cash cycle end to \
                   end — generating invoices, chasing payment with personalized outreach, and \
                   reconciling what comes in, so cash arrives sooner with less manual chasing."
            includes={INCLUDES}
            benefits={BENEFITS}
        />
    }
}
