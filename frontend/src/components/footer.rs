use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::BOOKING_URL;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #020410;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        padding: 4rem 1.5rem 2rem;
                        color: #94a3b8;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 3rem;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        color: white;
                    }
                    .footer-tagline {
                        margin-top: 0.75rem;
                        color: #cbd5e1;
                    }
                    .footer-grid h4 {
                        color: white;
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        margin-bottom: 1rem;
                    }
                    .footer-grid ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-grid li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-grid a {
                        color: #94a3b8;
                        text-decoration: none;
                    }
                    .footer-grid a:hover {
                        color: white;
                    }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 3rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        font-size: 0.85rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"NEXARK"}</div>
                    <p class="footer-tagline">{"Engineering Reality, Together."}</p>
                    <p>{"The technology that takes your business to its next arc."}</p>
                </div>
                <div>
                    <h4>{"Offerings"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Business}>{"For Business"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Personal}>{"myNexark"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Solutions}>{"Custom Software"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Methodology}>{"Reality Engineering"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Free Tools"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::RoiCalculator}>{"ROI Calculator"}</Link<Route>></li>
                        <li><Link<Route> to={Route::OpportunityMatrix}>{"Automation Opportunity Matrix"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Connect"}</h4>
                    <ul>
                        <li><a href={BOOKING_URL} target="_blank" rel="noopener noreferrer">{"Book a Discovery Call"}</a></li>
                        <li><a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {"© 2025 Nexark. All rights reserved."}
            </div>
        </footer>
    }
}
