use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::glowing_card::GlowingCard;
use crate::components::shooting_star::ShootingStarArc;
use crate::components::starfield_canvas::StarfieldCanvas;
use crate::config::BOOKING_URL;
use crate::Route;

struct PainPoint {
    line1: &'static str,
    line2: &'static str,
    detail: &'static str,
    punchline: &'static str,
    align_right: bool,
}

const PAIN_POINTS: [PainPoint; 3] = [
    PainPoint {
        line1: "Off-the-shelf software",
        line2: "forces you to adapt.",
        detail: "Generic SaaS makes you bend your business to their limitations.",
        punchline: "You need software that fits YOU.",
        align_right: false,
    },
    PainPoint {
        line1: "You're losing time",
        line2: "on manual workarounds.",
        detail: "Hours spent on tasks that should take minutes. Missed opportunities because your systems can't keep up. Revenue left on the table.",
        punchline: "Custom automation would eliminate the bottleneck.",
        align_right: true,
    },
    PainPoint {
        line1: "You're patching together",
        line2: "five different tools.",
        detail: "Zapier integrations that break. Manual workarounds filling gaps.",
        punchline: "One custom solution would replace it all.",
        align_right: false,
    },
];

struct Phase {
    number: &'static str,
    title: &'static str,
    headline: &'static str,
    description: &'static str,
    bullets: [&'static str; 3],
}

const PHASES: [Phase; 3] = [
    Phase {
        number: "01",
        title: "Discover",
        headline: "Understand your vision",
        description: "We map your ideal future state through structured discovery. Dream Dossier, gap analysis, and reverse engineering from goal to reality.",
        bullets: ["Dream Dossier creation", "Current state assessment", "Reverse roadmap to goals"],
    },
    Phase {
        number: "02",
        title: "Build",
        headline: "Engineer your solution",
        description: "Custom software designed to your specifications. Agentic workflow systems and digital infrastructure built for scale.",
        bullets: ["Custom software architecture", "Agentic workflow design", "System integration planning"],
    },
    Phase {
        number: "03",
        title: "Partner",
        headline: "Launch and optimize",
        description: "Ongoing partnership with continuous optimization. Not a one-and-done. We steward your success through every iteration.",
        bullets: ["System deployment and testing", "Performance optimization", "Long-term partnership"],
    },
];

struct UseCase {
    eyebrow: &'static str,
    title: &'static str,
    headline: &'static str,
    subhead: &'static str,
    features: [&'static str; 5],
    badge: Option<&'static str>,
    glow: &'static str,
}

const USE_CASES: [UseCase; 3] = [
    UseCase {
        eyebrow: "Operations Excellence",
        title: "Run like a machine",
        headline: "Transform chaos into seamless operations",
        subhead: "Custom CRM + Sales Automation + Team Coordination",
        features: [
            "Sales pipeline that updates itself from email, calendar, and conversations",
            "Automated follow-ups that keep deals moving forward",
            "Real-time dashboards showing exactly where every deal stands",
            "Smart alerts when action is needed or opportunities arise",
            "Integration with your existing tools (Gmail, Slack, QuickBooks)",
        ],
        badge: None,
        glow: "rgba(99, 102, 241, 0.35)",
    },
    UseCase {
        eyebrow: "Client Delivery",
        title: "Deliver with confidence",
        headline: "Professional systems that wow clients",
        subhead: "Client Portal + Project Management + Automated Workflows",
        features: [
            "Branded client portal where everything lives in one place",
            "Project dashboards that show progress in real-time",
            "Automated status updates, invoices, and contract renewals",
            "File sharing and approval workflows that actually get used",
            "Integration with Stripe, DocuSign, and your project tools",
        ],
        badge: Some("MOST POPULAR"),
        glow: "rgba(16, 185, 129, 0.3)",
    },
    UseCase {
        eyebrow: "Business Intelligence",
        title: "Make data-driven decisions",
        headline: "See the full picture of your business",
        subhead: "Custom Dashboards + Analytics + Reporting Automation",
        features: [
            "Executive dashboard with all your KPIs in one place",
            "Automated reports that write themselves every week",
            "Real-time alerts when metrics move (good or bad)",
            "Data pulled from everywhere: sales, marketing, operations, finance",
            "Beautiful visualizations your team will actually look at",
        ],
        badge: None,
        glow: "rgba(168, 85, 247, 0.35)",
    },
];

struct Stat {
    value: u32,
    prefix: &'static str,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: 24, prefix: "", suffix: "hrs", label: "From foggy to focused" },
    Stat { value: 90, prefix: "", suffix: "%", label: "Transformation rate" },
    Stat { value: 308, prefix: "", suffix: "+", label: "Frameworks deployed" },
    Stat { value: 50, prefix: "$", suffix: "K+", label: "Min. value created" },
];

const FINAL_CTA_POINTS: [&str; 4] = [
    "AI-native development • 30-50% faster",
    "Reality Engineering lens • Dream to delivery",
    "Satisfaction guaranteed • We'll make it right or refund you",
    "Secure, scalable, production-ready",
];

fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let target = window
        .document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(target) = target {
        let options = ScrollToOptions::new();
        options.set_top(f64::from(target.offset_top()));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let see_what_we_build = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("what-we-build");
    });

    html! {
        <div class="home">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                    }
                    .hero-orb {
                        position: absolute;
                        top: 25%;
                        right: 20%;
                        width: 600px;
                        height: 600px;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(99, 102, 241, 0.15) 0%, transparent 70%);
                        pointer-events: none;
                    }
                    .hero-grid {
                        position: relative;
                        z-index: 1;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 8rem 1.5rem 4rem;
                        display: grid;
                        grid-template-columns: 7fr 5fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero h1 {
                        font-size: 4.5rem;
                        line-height: 1.05;
                        margin: 0;
                        color: white;
                    }
                    .hero h1.dim {
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .hero-tags {
                        margin-top: 1.5rem;
                        font-size: 1.4rem;
                        font-weight: 700;
                    }
                    .hero-copy {
                        margin-top: 1.5rem;
                        max-width: 32rem;
                        line-height: 1.7;
                    }
                    .hero-actions {
                        margin-top: 2rem;
                        display: flex;
                        gap: 0.75rem;
                        flex-wrap: wrap;
                    }
                    .pain-point {
                        max-width: 40rem;
                        margin-bottom: 8rem;
                    }
                    .pain-point.right {
                        margin-left: auto;
                        text-align: right;
                    }
                    .pain-point h3 {
                        font-size: 3rem;
                        line-height: 1;
                        margin: 0;
                        color: white;
                    }
                    .pain-point h3.dim {
                        color: rgba(255, 255, 255, 0.4);
                    }
                    .pain-point p {
                        margin-top: 1.5rem;
                        font-size: 1.2rem;
                        line-height: 1.7;
                    }
                    .pain-point strong {
                        color: white;
                        font-weight: 500;
                    }
                    .pivot {
                        text-align: center;
                        font-size: 2.2rem;
                        font-weight: 700;
                        color: white;
                    }
                    .phase-label {
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        color: #94a3b8;
                    }
                    .phase-title {
                        font-size: 2.2rem;
                        font-weight: 700;
                        color: white;
                        margin: 1rem 0 0.25rem;
                    }
                    .phase-headline {
                        color: #a5b4fc;
                    }
                    .phase-description {
                        border-left: 2px solid rgba(255, 255, 255, 0.05);
                        padding-left: 1rem;
                        line-height: 1.7;
                    }
                    .use-case h3 {
                        color: white;
                        font-size: 1.6rem;
                        margin: 0.5rem 0;
                    }
                    .use-case .subhead {
                        color: #818cf8;
                        font-size: 0.85rem;
                    }
                    .badge {
                        display: inline-block;
                        padding: 0.2rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(16, 185, 129, 0.15);
                        color: #34d399;
                        font-size: 0.7rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        margin-bottom: 0.75rem;
                    }
                    .stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        text-align: center;
                    }
                    .stat-value {
                        font-size: 3rem;
                        font-weight: 700;
                        color: white;
                    }
                    .testimonial {
                        max-width: 48rem;
                        margin: 4rem auto 0;
                        text-align: center;
                        font-size: 1.4rem;
                        line-height: 1.6;
                        color: white;
                    }
                    .testimonial cite {
                        display: block;
                        margin-top: 1rem;
                        font-size: 0.9rem;
                        font-style: normal;
                        color: #94a3b8;
                    }
                    .final-cta {
                        position: relative;
                        overflow: hidden;
                        text-align: center;
                    }
                    .final-cta .check-list {
                        display: inline-block;
                        text-align: left;
                        margin: 2rem 0;
                    }
                    .capacity-note {
                        margin-top: 1rem;
                        font-size: 0.85rem;
                        color: #64748b;
                    }
                    @media (max-width: 900px) {
                        .hero-grid, .stats {
                            grid-template-columns: 1fr;
                        }
                        .hero h1 {
                            font-size: 3rem;
                        }
                        .hero-visual {
                            display: none;
                        }
                        .pain-point h3 {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>

            <section class="hero">
                <StarfieldCanvas />
                <div class="hero-orb"></div>
                <div class="hero-grid">
                    <div>
                        <span class="eyebrow">{"Reality Engineering"}</span>
                        <h1>{"We build"}</h1>
                        <h1 class="dim">{"the software"}</h1>
                        <h1 class="dim">{"you're missing."}</h1>
                        <div class="hero-tags gradient-text">
                            {"CRMs • Agentic Workflows • Integrations • Dashboards"}
                        </div>
                        <p class="hero-copy">
                            {"AI-native development. 30-day delivery. Satisfaction guaranteed. We build custom CRMs, agentic workflows, and business intelligence: the technology that takes your business to its next arc."}
                        </p>
                        <div class="hero-actions">
                            <a class="btn-primary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                                {"Start Your Build"}
                            </a>
                            <a class="btn-secondary" href="#what-we-build" onclick={see_what_we_build}>
                                {"See What We Build"}
                            </a>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <ShootingStarArc />
                    </div>
                </div>
            </section>

            <section class="section">
                <span class="eyebrow">{"The Problem"}</span>
                <div style="margin-top: 4rem;">
                    { for PAIN_POINTS.iter().map(|point| html! {
                        <div class={classes!("pain-point", point.align_right.then(|| "right"))}>
                            <h3>{point.line1}</h3>
                            <h3 class="dim">{point.line2}</h3>
                            <p>{point.detail}{" "}<strong>{point.punchline}</strong></p>
                        </div>
                    }) }
                </div>
                <div class="pivot">
                    <p>{"You're ready for your next arc."}</p>
                    <p style="color: rgba(255, 255, 255, 0.4);">{"You just need the right technology to get there."}</p>
                    <p class="gradient-text">{"Custom software that takes you there."}</p>
                </div>
            </section>

            <section class="section">
                <span class="eyebrow">{"The Process"}</span>
                <h2 class="section-title">{"Three phases."}</h2>
                <h2 class="section-title"><span class="dim">{"One transformation."}</span></h2>
                <h2 class="section-title gradient-text">{"Powered by Reality Engineering."}</h2>
                <p>{"We don't just build what you ask for. We help you remember what you originally dreamed."}</p>
                <div class="card-grid" style="margin-top: 3rem;">
                    { for PHASES.iter().map(|phase| html! {
                        <GlowingCard>
                            <span class="phase-label">{format!("PHASE {}", phase.number)}</span>
                            <div class="phase-title">{phase.title}</div>
                            <div class="phase-headline">{phase.headline}</div>
                            <p class="phase-description">{phase.description}</p>
                            <ul class="check-list">
                                { for phase.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                            </ul>
                        </GlowingCard>
                    }) }
                </div>
            </section>

            <section class="section" id="what-we-build">
                <span class="eyebrow">{"What We Build"}</span>
                <h2 class="section-title">{"Systems that run your business."}</h2>
                <div class="card-grid" style="margin-top: 3rem;">
                    { for USE_CASES.iter().map(|case| html! {
                        <GlowingCard class="use-case" glow_color={case.glow}>
                            {
                                match case.badge {
                                    Some(badge) => html! { <span class="badge">{badge}</span> },
                                    None => html! {},
                                }
                            }
                            <span class="eyebrow">{case.eyebrow}</span>
                            <h3>{case.title}</h3>
                            <p>{case.headline}</p>
                            <p class="subhead">{case.subhead}</p>
                            <ul class="check-list">
                                { for case.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                            <a class="btn-secondary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                                {"See How It Works"}
                            </a>
                        </GlowingCard>
                    }) }
                </div>
                <div style="margin-top: 3rem; display: flex; gap: 1rem; flex-wrap: wrap;">
                    <Link<Route> to={Route::Business} classes="btn-secondary">{"Nexark for Business"}</Link<Route>>
                    <Link<Route> to={Route::Personal} classes="btn-secondary">{"myNexark for Individuals"}</Link<Route>>
                    <Link<Route> to={Route::OpportunityMatrix} classes="btn-secondary">{"Find Your Automation Quick Wins"}</Link<Route>>
                </div>
            </section>

            <section class="section">
                <span class="eyebrow">{"Proof"}</span>
                <h2 class="section-title">{"Results, not promises."}</h2>
                <p>{"Every client leaves with tools they use every single day."}</p>
                <div class="stats" style="margin-top: 3rem;">
                    { for STATS.iter().map(|stat| html! {
                        <div>
                            <div class="stat-value">
                                <AnimatedCounter value={stat.value} prefix={stat.prefix} suffix={stat.suffix} />
                            </div>
                            <div>{stat.label}</div>
                        </div>
                    }) }
                </div>
                <blockquote class="testimonial">
                    {"\"They made me feel like I was the only client they had. For the first time, my future isn't a vague hope. It's a destination I can see.\""}
                    <cite>{"Transformation Client, Founder & CEO"}</cite>
                </blockquote>
            </section>

            <section class="section final-cta" id="apply">
                <span class="eyebrow">{"Start Your Build"}</span>
                <h2 class="section-title">{"Let's remember what you originally dreamed, and build the technology that makes it real."}</h2>
                <div>
                    <ul class="check-list">
                        { for FINAL_CTA_POINTS.iter().map(|point| html! { <li>{*point}</li> }) }
                    </ul>
                </div>
                <a class="btn-primary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                    {"Start Your Build"}
                </a>
                <p class="capacity-note">{"Limited capacity. Discovery calls book 2-3 weeks out."}</p>
            </section>
        </div>
    }
}
