use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod tools {
    pub mod roi;
    pub mod matrix;
}
mod visuals {
    pub mod starfield;
    pub mod counter;
}
mod components {
    pub mod animated_counter;
    pub mod footer;
    pub mod glowing_card;
    pub mod pricing_card;
    pub mod roi_calculator;
    pub mod shooting_star;
    pub mod starfield_canvas;
    pub mod testimonial_card;
}
mod pages {
    pub mod home;
    pub mod business;
    pub mod personal;
    pub mod solutions;
    pub mod methodology;
    pub mod roi;
    pub mod matrix;
}

use components::footer::Footer;
use config::BOOKING_URL;
use pages::{
    business::Business,
    home::Home,
    matrix::OpportunityMatrix,
    methodology::Methodology,
    personal::Personal,
    roi::RoiCalculatorPage,
    solutions::Solutions,
};

const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/roi-calculator")]
    RoiCalculator,
    #[at("/automation-opportunity-form")]
    OpportunityMatrix,
    #[at("/offerings/business")]
    Business,
    #[at("/offerings/personal")]
    Personal,
    #[at("/solutions")]
    Solutions,
    #[at("/methodology")]
    Methodology,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::RoiCalculator => {
            info!("Rendering ROI Calculator page");
            html! { <RoiCalculatorPage /> }
        },
        Route::OpportunityMatrix => {
            info!("Rendering Automation Opportunity Matrix page");
            html! { <OpportunityMatrix /> }
        },
        Route::Business => {
            info!("Rendering Business offerings page");
            html! { <Business /> }
        },
        Route::Personal => {
            info!("Rendering Personal offerings page");
            html! { <Personal /> }
        },
        Route::Solutions => {
            info!("Rendering Solutions page");
            html! { <Solutions /> }
        },
        Route::Methodology => {
            info!("Rendering Methodology page");
            html! { <Methodology /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering not found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn-primary">{"Back to Home"}</Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"NEXARK"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Solutions} classes="nav-link">
                            {"Solutions"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Methodology} classes="nav-link">
                            {"Methodology"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::RoiCalculator} classes="nav-link">
                            {"ROI Calculator"}
                        </Link<Route>>
                    </div>
                    <a
                        href={BOOKING_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-cta"
                        onclick={close_menu}
                    >
                        {"Book a Call"}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0f1e;
                        color: #cbd5e1;
                        font-family: 'Inter', system-ui, sans-serif;
                    }
                    a {
                        color: inherit;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        transition: background 0.3s ease, border-color 0.3s ease;
                        border-bottom: 1px solid transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(10, 15, 30, 0.85);
                        backdrop-filter: blur(12px);
                        border-bottom-color: rgba(255, 255, 255, 0.05);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1.25rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        letter-spacing: 0.3em;
                        color: white;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #94a3b8;
                        text-decoration: none;
                        font-size: 0.9rem;
                    }
                    .nav-link:hover {
                        color: white;
                    }
                    .nav-cta, .btn-primary {
                        display: inline-block;
                        padding: 0.7rem 1.5rem;
                        background: white;
                        color: #0a0f1e;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        text-decoration: none;
                        border: none;
                        cursor: pointer;
                    }
                    .btn-secondary {
                        display: inline-block;
                        padding: 0.7rem 1.5rem;
                        background: transparent;
                        color: white;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 0.5rem;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: white;
                    }
                    .eyebrow {
                        display: inline-block;
                        font-size: 0.8rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #818cf8;
                    }
                    .section {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }
                    .section-title {
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: white;
                        margin: 1rem 0;
                    }
                    .section-title .dim {
                        color: rgba(255, 255, 255, 0.4);
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, #818cf8, #c084fc);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .check-list {
                        list-style: none;
                        padding: 0;
                    }
                    .check-list li {
                        margin-bottom: 0.6rem;
                        padding-left: 1.5rem;
                        position: relative;
                    }
                    .check-list li::before {
                        content: "✓";
                        position: absolute;
                        left: 0;
                        color: #818cf8;
                    }
                    .not-found {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: white;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(10, 15, 30, 0.97);
                        }
                        .card-grid {
                            grid-template-columns: 1fr;
                        }
                        .section-title {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Nexark");
    yew::Renderer::<App>::new().render();
}
