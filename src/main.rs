use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod theme;
mod navigation;
mod pages {
    pub mod home;
    pub mod services;
}
mod components {
    pub mod hero;
    pub mod about;
    pub mod what_we_build;
    pub mod why_choose_us;
    pub mod how_it_works;
    pub mod testimonials;
    pub mod call_to_action;
    pub mod services_hero;
    pub mod why_businesses;
    pub mod agent_tabs;
    pub mod agents {
        pub mod accounts_receivable;
        pub mod rfp;
        pub mod internal_audit;
        pub mod ecommerce;
        pub mod inventory;
        pub mod custom;
    }
}

use navigation::NavBar;
use pages::{home::Home, services::Services};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found-page">
                    <h1>{"404"}</h1>
                    <p>{"This page doesn't exist."}</p>
                    <Link<Route> to={Route::Home} classes="cta-button">
                        {"Back to Home"}
                    </Link<Route>>
                    <style>
                        {r#"
                            .not-found-page {
                                min-height: 100vh;
                                display: flex;
                                flex-direction: column;
                                align-items: center;
                                justify-content: center;
                                gap: 1rem;
                            }

                            .not-found-page h1 {
                                font-size: 5rem;
                                color: var(--primary-color);
                            }
                        "#}
                    </style>
                </div>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NavBar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Apply the persisted (or system) theme before the first paint so themed
    // elements never flash the wrong palette.
    theme::Theme::load().apply();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
