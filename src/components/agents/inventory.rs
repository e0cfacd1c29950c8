use yew::prelude::*;

use crate::components::agent_tabs::{AgentPanel, Benefit};

const INCLUDES: &[&str] = &[
    "Real-time stock sync across storefronts, marketplaces, and branches.",
    "Predictive restocking suggestions from sales velocity and lead times.",
    "Double-booking prevention for appointment and rental businesses.",
    "Low-stock and overstock alerts with suggested actions.",
    "Unified availability calendar across every sales channel.",
];

const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "No More Stockouts",
        desc: "Channels update each other the moment inventory moves.",
        stat: "Zero Oversells",
    },
    Benefit {
        title: "Leaner Stock Levels",
        desc: "Predictive restocking frees the cash tied up in shelves.",
        stat: "-30% Holding",
    },
    Benefit {
        title: "One Source of Truth",
        desc: "Every branch and channel reads the same live numbers.",
        stat: "Unified",
    },
    Benefit {
        title: "Fewer Manual Counts",
        desc: "Reconciliation runs continuously in the background.",
        stat: "Hands-Off",
    },
];

#[function_component(InventoryBooking)]
pub fn inventory_booking() -> Html {
    html! {
        <AgentPanel
            title="Multi-Channel Inventory & Booking"
            intro="Multi-Channel Inventory & Booking keeps stock and availability consistent \
                   everywhere you sell — syncing channels in real time, predicting restocks, \
                   and eliminating the manual reconciliations between them."
            includes={INCLUDES}
            benefits={BENEFITS}
        />
    }
}
