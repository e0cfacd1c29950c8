//! Testimonial rotator.
//!
//! Auto-advances every five seconds; prev/next wrap at both ends; indicator
//! dots jump directly. Manual navigation does not reset the timer cadence,
//! the interval keeps ticking on its own period.

use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

const ROTATE_MS: u32 = 5_000;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    company: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Arg Analytics transformed our reporting pipeline—now we save 20 hours weekly \
                on audits alone. Their AI agents are game-changers.",
        author: "John M",
        company: "JM Consulting",
    },
    Testimonial {
        quote: "Seamless inventory sync across our branches. No more manual \
                reconciliations—efficiency up 35%, thanks to their custom automations.",
        author: "Moses M",
        company: "Standard Bank",
    },
    Testimonial {
        quote: "From RFP responses to compliance checks, their agents handle it all with \
                precision. We've doubled our bid win rate in months.",
        author: "Bernard M",
        company: "BN Hardware & Construction",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

pub enum RotatorAction {
    Next,
    Prev,
    Jump(usize),
}

#[derive(PartialEq)]
struct Rotator {
    index: usize,
}

impl Reducible for Rotator {
    type Action = RotatorAction;

    fn reduce(self: Rc<Self>, action: RotatorAction) -> Rc<Self> {
        let len = TESTIMONIALS.len();
        let index = match action {
            RotatorAction::Next => next_index(self.index, len),
            RotatorAction::Prev => prev_index(self.index, len),
            RotatorAction::Jump(target) => target % len,
        };
        Rotator { index }.into()
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let rotator = use_reducer(|| Rotator { index: 0 });

    {
        let rotator = rotator.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(ROTATE_MS, move || {
                    rotator.dispatch(RotatorAction::Next);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_prev = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.dispatch(RotatorAction::Prev))
    };
    let on_next = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.dispatch(RotatorAction::Next))
    };

    let current = &TESTIMONIALS[rotator.index];

    html! {
        <section id="testimonials" class="testimonials">
            <h2 class="section-title">{"Real Clients. Real Results."}</h2>
            <p class="section-subtitle">
                {"In business since 2020 — trusted by founders, coaches, consultants & \
                  speakers across the U.S."}
            </p>

            <div class="testimonial-slider">
                <button class="slider-arrow" onclick={on_prev} aria-label="Previous testimonial">
                    {"‹"}
                </button>

                <blockquote class="testimonial-card" key={rotator.index}>
                    <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", current.quote)}</p>
                    <p class="testimonial-author">
                        {format!("— {}, {}", current.author, current.company)}
                    </p>
                </blockquote>

                <button class="slider-arrow" onclick={on_next} aria-label="Next testimonial">
                    {"›"}
                </button>
            </div>

            <div class="testimonial-dots">
                { for (0..TESTIMONIALS.len()).map(|index| {
                    let handle = rotator.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        handle.dispatch(RotatorAction::Jump(index));
                    });
                    html! {
                        <button
                            class={classes!("dot", (index == rotator.index).then_some("active"))}
                            {onclick}
                            aria-label={format!("View testimonial {}", index + 1)}
                        />
                    }
                }) }
            </div>

            <style>
                {r#"
                    .testimonials {
                        padding: 6rem 1.5rem;
                        background: var(--secondary-color);
                        text-align: center;
                    }

                    .testimonial-slider {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        max-width: 48rem;
                        margin: 0 auto;
                    }

                    .slider-arrow {
                        width: 2.5rem;
                        height: 2.5rem;
                        flex-shrink: 0;
                        border-radius: 50%;
                        border: 1px solid var(--border-color);
                        background: var(--secondary-color);
                        color: var(--primary-color);
                        font-size: 1.3rem;
                        line-height: 1;
                        transition: box-shadow 0.2s ease, transform 0.2s ease;
                    }

                    .slider-arrow:hover {
                        transform: scale(1.15);
                        box-shadow: 0 0 8px rgba(0, 184, 184, 0.5);
                    }

                    .testimonial-card {
                        padding: 1.75rem;
                        background: var(--bg-color);
                        border: 1px solid var(--border-color);
                        border-radius: 1rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        animation: fade-in 0.4s ease;
                    }

                    @keyframes fade-in {
                        from { opacity: 0; transform: scale(0.95); }
                        to { opacity: 1; transform: scale(1); }
                    }

                    .testimonial-quote {
                        font-style: italic;
                        font-size: 1rem;
                    }

                    .testimonial-author {
                        margin-top: 1rem;
                        font-weight: 600;
                        color: var(--primary-color);
                    }

                    .testimonial-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.6rem;
                        margin-top: 1.5rem;
                    }

                    .dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        border: none;
                        background: var(--border-color);
                        transition: transform 0.2s ease, background 0.2s ease;
                    }

                    .dot.active {
                        background: var(--primary-color);
                        transform: scale(1.3);
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
    fn three_automatic_advances_cycle_back_to_start() {
        let mut index = 0;
        for _ in 0..3 {
            index = next_index(index, 3);
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn prev_wraps_at_the_front() {
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
    }

    #[test]
    fn next_wraps_at_the_back() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 3), 1);
    }

    #[test]
    fn empty_sequence_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn jump_lands_on_the_requested_index() {
        let rotator: Rc<Rotator> = Rc::new(Rotator { index: 0 });
        let rotator = rotator.reduce(RotatorAction::Jump(2));
        assert_eq!(rotator.index, 2);
        // A jump from any position lands on the same target.
        let rotator = rotator.reduce(RotatorAction::Jump(2));
        assert_eq!(rotator.index, 2);
    }

    #[test]
    fn jumping_through_a_cloned_handle_leaves_the_original_readable() {
        let rotator: Rc<Rotator> = Rc::new(Rotator { index: 0 });
        let handle = rotator.clone();
        let jumped = handle.reduce(RotatorAction::Jump(1));
        assert_eq!(jumped.index, 1);
        // The handle the dots read from is untouched by the dispatch.
        assert_eq!(rotator.index, 0);
    }

    #[test]
    fn reducer_advances_and_rewinds() {
        let rotator: Rc<Rotator> = Rc::new(Rotator { index: 0 });
        let rotator = rotator.reduce(RotatorAction::Prev);
        assert_eq!(rotator.index, TESTIMONIALS.len() - 1);
        let rotator = rotator.reduce(RotatorAction::Next);
        assert_eq!(rotator.index, 0);
    }
}
