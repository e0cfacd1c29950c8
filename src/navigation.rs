//! Site navigation bar.
//!
//! Owns the dropdown/mobile-menu state machine, the theme toggle and the
//! scroll-linked background. Menu state and the scroll-to-color derivation
//! are plain values and pure functions so the transition rules are testable
//! without a DOM.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::Theme;
use crate::Route;

/// Delay before retrying the anchor scroll after a route change. Best-effort:
/// if the target page takes longer than this to mount, the scroll is skipped.
const SCROLL_RETRY_MS: u32 = 100;

/// Scroll offset (px) over which the bar fades from transparent to the theme
/// background.
const SCROLL_FADE_RANGE: f64 = 100.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dropdown {
    Home,
    Services,
}

/// Open/closed state of the two dropdowns and the mobile menu. Opening a
/// dropdown closes its sibling; the mobile menu is independent; `close_all`
/// is the single dismissal transition used by every dismissing action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NavMenus {
    home_open: bool,
    services_open: bool,
    mobile_open: bool,
}

impl NavMenus {
    pub fn toggle(self, which: Dropdown) -> Self {
        match which {
            Dropdown::Home => Self {
                home_open: !self.home_open,
                services_open: false,
                ..self
            },
            Dropdown::Services => Self {
                services_open: !self.services_open,
                home_open: false,
                ..self
            },
        }
    }

    pub fn toggle_mobile(self) -> Self {
        Self {
            mobile_open: !self.mobile_open,
            ..self
        }
    }

    pub fn close_all(self) -> Self {
        Self::default()
    }

    pub fn is_open(self, which: Dropdown) -> bool {
        match which {
            Dropdown::Home => self.home_open,
            Dropdown::Services => self.services_open,
        }
    }

    pub fn mobile_open(self) -> bool {
        self.mobile_open
    }
}

#[derive(PartialEq)]
pub struct SubItem {
    pub label: &'static str,
    pub anchor: &'static str,
    pub page: Route,
}

pub struct NavItem {
    pub id: Dropdown,
    pub label: &'static str,
    pub dropdown: &'static [SubItem],
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: Dropdown::Home,
        label: "Home",
        dropdown: &[
            SubItem { label: "About", anchor: "about", page: Route::Home },
            SubItem { label: "Features", anchor: "features", page: Route::Home },
            SubItem { label: "Contact", anchor: "contact", page: Route::Home },
        ],
    },
    NavItem {
        id: Dropdown::Services,
        label: "Services",
        dropdown: &[
            SubItem { label: "AI Automation", anchor: "ai-automation", page: Route::Services },
            SubItem { label: "Analytics", anchor: "analytics", page: Route::Services },
            SubItem { label: "Consulting", anchor: "consulting", page: Route::Services },
        ],
    },
];

static BOOK_CALL: SubItem = SubItem {
    label: "Book a Call",
    anchor: "contact",
    page: Route::Home,
};

/// Fraction of the fade completed at the given scroll offset, clamped to
/// [0, 1].
pub fn scroll_progress(offset: f64) -> f64 {
    (offset / SCROLL_FADE_RANGE).clamp(0.0, 1.0)
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

/// Bar background: fully transparent at the top of the page, the theme
/// background once scrolled past the fade range.
pub fn nav_background(offset: f64, theme: Theme) -> String {
    let (r, g, b) = theme.background_rgb();
    format!("rgba({}, {}, {}, {:.3})", r, g, b, scroll_progress(offset))
}

/// Bar text: white over the hero, the theme text color once scrolled.
pub fn nav_text_color(offset: f64, theme: Theme) -> String {
    let t = scroll_progress(offset);
    let (tr, tg, tb) = theme.text_rgb();
    let r = lerp_channel(255, tr, t);
    let g = lerp_channel(255, tg, t);
    let b = lerp_channel(255, tb, t);
    format!("rgb({}, {}, {})", r, g, b)
}

/// Smooth-scrolls to the element with the given id. Silently no-ops when the
/// anchor doesn't exist.
pub fn scroll_to_anchor(anchor: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(element) = document.get_element_by_id(anchor) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menus = use_state(NavMenus::default);
    let theme = use_state(Theme::load);
    let scroll_offset = use_state(|| 0.0_f64);
    let route = use_route::<Route>();
    let navigator = use_navigator().unwrap();

    let scroll_sensitive = matches!(route, Some(Route::Home) | Some(Route::Services));

    // Scroll listener, registered only on scroll-sensitive routes and removed
    // when the route stops being one (or on unmount).
    {
        let scroll_offset = scroll_offset.clone();
        use_effect_with_deps(
            move |sensitive: &bool| {
                let listener = if *sensitive {
                    let window = web_sys::window().unwrap();
                    let window_clone = window.clone();
                    let setter = scroll_offset.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        setter.set(window_clone.scroll_y().unwrap_or(0.0));
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Some((window, callback))
                } else {
                    scroll_offset.set(0.0);
                    None
                };
                move || {
                    if let Some((window, callback)) = listener {
                        window
                            .remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                    }
                }
            },
            scroll_sensitive,
        );
    }

    // Clicking anywhere outside the bar dismisses everything. Controls inside
    // the bar stop propagation so their own toggle wins.
    {
        let menus = menus.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let callback = Closure::wrap(Box::new(move || {
                    menus.set(NavMenus::default());
                }) as Box<dyn FnMut()>);
                document
                    .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    document
                        .remove_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Navigating away closes everything.
    {
        let menus = menus.clone();
        use_effect_with_deps(
            move |_| {
                menus.set(NavMenus::default());
                || ()
            },
            route.clone(),
        );
    }

    let on_sub_click = {
        let menus = menus.clone();
        let navigator = navigator.clone();
        let route = route.clone();
        Callback::from(move |sub: &'static SubItem| {
            menus.set(NavMenus::default());
            if route.as_ref() == Some(&sub.page) {
                scroll_to_anchor(sub.anchor);
            } else {
                navigator.push(&sub.page);
                let anchor = sub.anchor;
                Timeout::new(SCROLL_RETRY_MS, move || scroll_to_anchor(anchor)).forget();
            }
        })
    };

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let next = theme.toggled();
            next.store();
            next.apply();
            theme.set(next);
        })
    };

    let on_mobile_toggle = {
        let menus = menus.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menus.set(menus.toggle_mobile());
        })
    };

    let on_close_all = {
        let menus = menus.clone();
        Callback::from(move |_: MouseEvent| {
            menus.set(NavMenus::default());
        })
    };

    let (background, color) = if scroll_sensitive {
        (
            nav_background(*scroll_offset, *theme),
            nav_text_color(*scroll_offset, *theme),
        )
    } else {
        let (br, bg, bb) = theme.background_rgb();
        let (tr, tg, tb) = theme.text_rgb();
        (
            format!("rgba({}, {}, {}, 1.000)", br, bg, bb),
            format!("rgb({}, {}, {})", tr, tg, tb),
        )
    };
    let bar_style = format!("background-color: {}; color: {};", background, color);

    let theme_icon = match *theme {
        Theme::Dark => "☀",
        Theme::Light => "🌙",
    };

    let render_item = |item: &'static NavItem| {
        let open = menus.is_open(item.id);
        let on_toggle = {
            let menus = menus.clone();
            let id = item.id;
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                menus.set(menus.toggle(id));
            })
        };
        html! {
            <div class="nav-item">
                <button class="nav-item-toggle" onclick={on_toggle}>
                    <span>{item.label}</span>
                    <span class={classes!("chevron", open.then_some("open"))}>{"▾"}</span>
                </button>
                if open {
                    <ul class="nav-dropdown">
                        { for item.dropdown.iter().map(|sub| {
                            let on_sub_click = on_sub_click.clone();
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                on_sub_click.emit(sub);
                            });
                            html! {
                                <li class="nav-dropdown-item" {onclick}>{sub.label}</li>
                            }
                        }) }
                    </ul>
                }
            </div>
        }
    };

    let book_call = {
        let on_sub_click = on_sub_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_sub_click.emit(&BOOK_CALL);
        })
    };

    html! {
        <nav class="top-nav" style={bar_style}>
            <div class="nav-content">
                <div onclick={on_close_all.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"Arg Analytics"}
                    </Link<Route>>
                </div>

                <div class="nav-desktop">
                    { for NAV_ITEMS.iter().map(&render_item) }
                    <button class="nav-book-call" onclick={book_call.clone()}>
                        {"Book a Call"}
                    </button>
                    <button
                        class="theme-toggle"
                        onclick={on_theme_toggle.clone()}
                        aria-label="Toggle theme"
                    >
                        {theme_icon}
                    </button>
                </div>

                <button
                    class="burger-menu"
                    onclick={on_mobile_toggle}
                    aria-label={if menus.mobile_open() { "Close menu" } else { "Open menu" }}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if menus.mobile_open() {
                <div
                    class="mobile-menu"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <button class="mobile-close" onclick={on_close_all} aria-label="Close menu">
                        {"✕"}
                    </button>
                    { for NAV_ITEMS.iter().map(&render_item) }
                    <button class="nav-book-call mobile" onclick={book_call}>
                        {"Book a Call"}
                    </button>
                    <button class="theme-toggle" onclick={on_theme_toggle} aria-label="Toggle theme">
                        {theme_icon}
                    </button>
                </div>
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        transition: box-shadow 0.3s ease;
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        letter-spacing: 0.02em;
                    }

                    .nav-desktop {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .nav-item {
                        position: relative;
                    }

                    .nav-item-toggle {
                        display: flex;
                        align-items: center;
                        gap: 0.3rem;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1rem;
                        font-weight: 500;
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.5rem;
                        transition: color 0.2s ease;
                    }

                    .nav-item-toggle:hover {
                        color: var(--primary-color);
                    }

                    .chevron {
                        display: inline-block;
                        transition: transform 0.2s ease;
                    }

                    .chevron.open {
                        transform: rotate(180deg);
                    }

                    .nav-dropdown {
                        position: absolute;
                        top: 100%;
                        left: 50%;
                        transform: translateX(-50%);
                        margin-top: 0.5rem;
                        min-width: 13rem;
                        list-style: none;
                        background: var(--secondary-color);
                        border: 1px solid var(--border-color);
                        border-radius: 0.75rem;
                        box-shadow: 0 20px 45px rgba(0, 0, 0, 0.35);
                        padding: 0.25rem 0;
                        color: var(--text-color);
                    }

                    .nav-dropdown-item {
                        padding: 0.75rem 1rem;
                        font-size: 0.9rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: color 0.2s ease, background 0.2s ease;
                    }

                    .nav-dropdown-item:hover {
                        color: var(--primary-color);
                        background: rgba(0, 184, 184, 0.08);
                    }

                    .nav-book-call {
                        padding: 0.5rem 1.1rem;
                        background: var(--primary-color);
                        color: #fff;
                        font-weight: 600;
                        border: none;
                        border-radius: 0.75rem;
                        box-shadow: 0 4px 12px rgba(0, 184, 184, 0.35);
                        transition: background 0.2s ease;
                    }

                    .nav-book-call:hover {
                        background: var(--primary-hover);
                    }

                    .theme-toggle {
                        background: none;
                        border: 1px solid var(--border-color);
                        border-radius: 50%;
                        width: 2.2rem;
                        height: 2.2rem;
                        color: inherit;
                        font-size: 1rem;
                        line-height: 1;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 0.3rem;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        width: 1.4rem;
                        height: 2px;
                        background: currentColor;
                        border-radius: 1px;
                    }

                    .mobile-menu {
                        position: fixed;
                        top: 0;
                        right: 0;
                        width: 75%;
                        max-width: 20rem;
                        height: 100vh;
                        background: var(--secondary-color);
                        color: var(--text-color);
                        box-shadow: -10px 0 40px rgba(0, 0, 0, 0.4);
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        animation: slide-in 0.3s ease;
                    }

                    @keyframes slide-in {
                        from { transform: translateX(100%); }
                        to { transform: translateX(0); }
                    }

                    .mobile-close {
                        align-self: flex-end;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.2rem;
                        padding: 0.5rem;
                    }

                    .mobile-menu .nav-dropdown {
                        position: static;
                        transform: none;
                        margin: 0.25rem 0 0 1rem;
                        box-shadow: none;
                    }

                    @media (max-width: 768px) {
                        .nav-desktop {
                            display: none;
                        }

                        .burger-menu {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_dropdown_closes_its_sibling() {
        let menus = NavMenus::default().toggle(Dropdown::Home);
        assert!(menus.is_open(Dropdown::Home));

        let menus = menus.toggle(Dropdown::Services);
        assert!(!menus.is_open(Dropdown::Home));
        assert!(menus.is_open(Dropdown::Services));
    }

    #[test]
    fn toggle_flips_closed_and_open() {
        let menus = NavMenus::default();
        let opened = menus.toggle(Dropdown::Home);
        assert!(opened.is_open(Dropdown::Home));
        let closed = opened.toggle(Dropdown::Home);
        assert!(!closed.is_open(Dropdown::Home));
    }

    #[test]
    fn mobile_menu_leaves_dropdown_state_alone() {
        let menus = NavMenus::default()
            .toggle(Dropdown::Services)
            .toggle_mobile();
        assert!(menus.mobile_open());
        assert!(menus.is_open(Dropdown::Services));
    }

    #[test]
    fn close_all_closes_all_three() {
        let menus = NavMenus::default()
            .toggle(Dropdown::Home)
            .toggle_mobile()
            .close_all();
        assert_eq!(menus, NavMenus::default());
    }

    #[test]
    fn progress_is_clamped_and_monotone() {
        assert_eq!(scroll_progress(-50.0), 0.0);
        assert_eq!(scroll_progress(0.0), 0.0);
        assert_eq!(scroll_progress(100.0), 1.0);
        assert_eq!(scroll_progress(150.0), 1.0);

        let mut previous = 0.0;
        for step in 0..=20 {
            let progress = scroll_progress(f64::from(step) * 5.0);
            assert!(progress >= previous);
            previous = progress;
        }
    }

    #[test]
    fn background_endpoints_match_transparent_and_theme() {
        assert_eq!(nav_background(0.0, Theme::Dark), "rgba(10, 15, 26, 0.000)");
        assert_eq!(nav_background(100.0, Theme::Dark), "rgba(10, 15, 26, 1.000)");
        assert_eq!(nav_background(500.0, Theme::Dark), "rgba(10, 15, 26, 1.000)");
    }

    #[test]
    fn text_endpoints_match_white_and_theme() {
        assert_eq!(nav_text_color(0.0, Theme::Light), "rgb(255, 255, 255)");
        assert_eq!(nav_text_color(100.0, Theme::Light), "rgb(30, 41, 59)");
        assert_eq!(nav_text_color(250.0, Theme::Light), "rgb(30, 41, 59)");
    }

    #[test]
    fn text_channels_are_monotone_over_the_fade() {
        let mut previous = 255_u8;
        for step in 0..=10 {
            let css = nav_text_color(f64::from(step) * 10.0, Theme::Dark);
            let red: u8 = css
                .trim_start_matches("rgb(")
                .split(',')
                .next()
                .unwrap()
                .trim()
                .parse()
                .unwrap();
            assert!(red <= previous);
            previous = red;
        }
    }
}
