use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::glowing_card::GlowingCard;
use crate::components::pricing_card::{PricingCard, PricingTier};
use crate::components::starfield_canvas::StarfieldCanvas;
use crate::components::testimonial_card::TestimonialCard;
use crate::config::BOOKING_URL;
use crate::Route;

struct Problem {
    stat: &'static str,
    description: &'static str,
}

const PROBLEMS: [Problem; 3] = [
    Problem { stat: "73%", description: "of digital transformations fail to deliver expected value" },
    Problem { stat: "4.2x", description: "more likely to fail when treating AI as a tool, not a system" },
    Problem { stat: "$2.3T", description: "wasted annually on initiatives that don't move the needle" },
];

struct Phase {
    number: &'static str,
    title: &'static str,
    duration: &'static str,
    description: &'static str,
}

const PHASES: [Phase; 5] = [
    Phase {
        number: "01",
        title: "Operational Diagnostics",
        duration: "Week 1",
        description: "We map your entire operation: people, processes, technology, bottlenecks. No assumptions. Just data.",
    },
    Phase {
        number: "02",
        title: "System Architecture",
        duration: "Week 2",
        description: "Design the AI-powered operating system tailored to your specific challenges and growth targets.",
    },
    Phase {
        number: "03",
        title: "Sprint Deployment",
        duration: "Weeks 3-4",
        description: "Rapid implementation in focused 30-day sprints. Measurable results, not endless planning.",
    },
    Phase {
        number: "04",
        title: "Team Integration",
        duration: "Ongoing",
        description: "Your team learns to operate the new system. We don't leave until they own it completely.",
    },
    Phase {
        number: "05",
        title: "Continuous Evolution",
        duration: "Quarterly",
        description: "Systems that adapt as you scale. What works at $1M needs to evolve at $10M.",
    },
];

struct Deliverable {
    title: &'static str,
    description: &'static str,
}

const DELIVERABLES: [Deliverable; 6] = [
    Deliverable {
        title: "AI Operating System",
        description: "Custom-built AI infrastructure that automates decisions, not just tasks. Your business runs smarter while you sleep.",
    },
    Deliverable {
        title: "Process Blueprints",
        description: "Every critical workflow documented, optimized, and automated. Eliminate the chaos of tribal knowledge.",
    },
    Deliverable {
        title: "Performance Dashboard",
        description: "Real-time visibility into what matters. KPIs that actually predict outcomes, not just report history.",
    },
    Deliverable {
        title: "Decision Frameworks",
        description: "Systematic approaches to the decisions that make or break your business. Remove emotion, add precision.",
    },
    Deliverable {
        title: "Tech Stack Audit",
        description: "Cut the bloat. We identify what's essential, what's redundant, and what's missing in your technology.",
    },
    Deliverable {
        title: "Execution Playbooks",
        description: "Step-by-step guides for every initiative. Your team knows exactly what to do and when to do it.",
    },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    metric: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "We cut operational costs by 40% in the first quarter. The AI systems they built now handle what used to require 3 full-time employees.",
        author: "Marcus Chen",
        role: "CEO, Velocity Labs",
        metric: "40% cost reduction",
    },
    Testimonial {
        quote: "Finally, a consulting engagement that delivered ROI before the final invoice. The 30-day sprint model changed everything.",
        author: "Sarah Mitchell",
        role: "COO, Ascend Capital",
        metric: "3x faster implementation",
    },
    Testimonial {
        quote: "They didn't just optimize our processes. They rebuilt how we think about operations. That's a permanent competitive advantage.",
        author: "David Park",
        role: "Founder, Nexus Ventures",
        metric: "$2.1M saved annually",
    },
];

static PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Sprint",
        price: "$5,000",
        duration: "per sprint",
        description: "Focused 30-day transformation of a single system or process",
        features: &[
            "Single system diagnostic",
            "AI automation implementation",
            "Process documentation",
            "Team training session",
            "30-day support window",
        ],
        cta: "Start Sprint",
        highlighted: false,
    },
    PricingTier {
        name: "Transformation",
        price: "$25,000",
        duration: "per quarter",
        description: "Complete operational overhaul with ongoing strategic support",
        features: &[
            "Full operational diagnostic",
            "Custom AI operating system",
            "All critical process blueprints",
            "Performance dashboard setup",
            "Weekly strategy sessions",
            "Unlimited sprint capacity",
            "Direct founder access",
        ],
        cta: "Transform Now",
        highlighted: true,
    },
    PricingTier {
        name: "Partnership",
        price: "$50,000",
        duration: "per quarter",
        description: "Embedded operational leadership for hypergrowth companies",
        features: &[
            "Everything in Transformation",
            "Fractional COO services",
            "Board-level reporting",
            "M&A operational due diligence",
            "Investor deck optimization",
            "Hiring system design",
            "Exit preparation support",
        ],
        cta: "Partner With Us",
        highlighted: false,
    },
];

#[function_component(Business)]
pub fn business() -> Html {
    html! {
        <div class="offering-page business">
            <style>
                {r#"
                    .offering-hero {
                        position: relative;
                        overflow: hidden;
                        min-height: 80vh;
                        display: flex;
                        align-items: center;
                    }
                    .offering-hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 9rem 1.5rem 5rem;
                    }
                    .offering-hero h1 {
                        font-size: 4rem;
                        color: white;
                        margin: 1.5rem 0;
                    }
                    .emerald {
                        color: #34d399;
                    }
                    .pill {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(16, 185, 129, 0.2);
                        background: rgba(16, 185, 129, 0.05);
                        color: #34d399;
                        font-size: 0.85rem;
                    }
                    .problem-stat {
                        font-size: 3.5rem;
                        font-weight: 700;
                        color: white;
                    }
                    .timeline {
                        border-left: 1px solid rgba(255, 255, 255, 0.1);
                        margin-top: 3rem;
                    }
                    .timeline-step {
                        position: relative;
                        padding: 0 0 2.5rem 2.5rem;
                    }
                    .timeline-step::before {
                        content: "";
                        position: absolute;
                        left: -6px;
                        top: 0.4rem;
                        width: 11px;
                        height: 11px;
                        border-radius: 50%;
                        background: #34d399;
                    }
                    .timeline-step h3 {
                        color: white;
                        margin: 0.25rem 0;
                    }
                    .timeline-meta {
                        font-size: 0.8rem;
                        color: #64748b;
                        letter-spacing: 0.1em;
                    }
                    .deliverable h3 {
                        color: white;
                        margin-top: 0;
                    }
                    .guarantee {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    @media (max-width: 768px) {
                        .offering-hero h1 {
                            font-size: 2.75rem;
                        }
                    }
                "#}
            </style>

            <section class="offering-hero">
                <StarfieldCanvas count={250} />
                <div class="offering-hero-content">
                    <span class="pill">{"Nexark for Business"}</span>
                    <h1>{"Your operation is "}<span class="emerald">{"leaking value."}</span></h1>
                    <p style="max-width: 40rem; font-size: 1.2rem; line-height: 1.7;">
                        {"Every day without optimized systems costs you growth. We build AI-powered operating systems that run your business while you focus on what matters."}
                    </p>
                    <div style="display: flex; gap: 1rem; flex-wrap: wrap; margin-top: 2rem;">
                        <a class="btn-primary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                            {"Start Transformation"}
                        </a>
                        <a class="btn-secondary" href="#process">{"See The Process"}</a>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="card-grid">
                    { for PROBLEMS.iter().map(|problem| html! {
                        <div>
                            <div class="problem-stat">{problem.stat}</div>
                            <p>{problem.description}</p>
                        </div>
                    }) }
                </div>
                <p style="margin-top: 3rem; font-size: 1.2rem;">
                    {"PowerPoint decks don't fix operations. Neither do generic playbooks. You need systems that execute, not slides that sit in a drawer."}
                </p>
                <h2 class="section-title">{"You don't need more advice."}</h2>
                <h2 class="section-title emerald">{"You need systems that work."}</h2>
            </section>

            <section class="section" id="process">
                <span class="eyebrow">{"The Process"}</span>
                <h2 class="section-title">{"Engineering Operational Excellence"}</h2>
                <p>{"Five phases. Measurable outcomes. No fluff."}</p>
                <div class="timeline">
                    { for PHASES.iter().map(|phase| html! {
                        <div class="timeline-step">
                            <div class="timeline-meta">{format!("{} · {}", phase.number, phase.duration)}</div>
                            <h3>{phase.title}</h3>
                            <p>{phase.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <span class="eyebrow">{"What You Get"}</span>
                <h2 class="section-title">{"Operational Infrastructure"}</h2>
                <p>{"Not recommendations. Infrastructure. Systems that run without you."}</p>
                <div class="card-grid" style="margin-top: 3rem;">
                    { for DELIVERABLES.iter().map(|deliverable| html! {
                        <GlowingCard class="deliverable" glow_color="rgba(16, 185, 129, 0.35)">
                            <h3>{deliverable.title}</h3>
                            <p>{deliverable.description}</p>
                        </GlowingCard>
                    }) }
                </div>
            </section>

            <section class="section">
                <span class="eyebrow">{"Results"}</span>
                <h2 class="section-title">{"Companies We've Transformed"}</h2>
                <div class="card-grid" style="margin-top: 3rem;">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <TestimonialCard quote={t.quote} author={t.author} role={t.role} metric={Some(AttrValue::from(t.metric))} />
                    }) }
                </div>
            </section>

            <section class="section" id="pricing">
                <span class="eyebrow">{"Investment"}</span>
                <h2 class="section-title">{"Choose Your Engagement"}</h2>
                <p>{"Every engagement includes measurable ROI targets. If we don't hit them, you don't pay."}</p>
                <div class="card-grid" style="margin-top: 3rem;">
                    { for PRICING_TIERS.iter().map(|tier| html! {
                        <PricingCard {tier} glow_color="rgba(16, 185, 129, 0.35)" />
                    }) }
                </div>
            </section>

            <section class="section guarantee">
                <h2 class="section-title">{"The Performance Guarantee"}</h2>
                <p>
                    {"We don't bill for time. We bill for results. Every engagement comes with explicit ROI targets. If we don't hit them within the agreed timeframe, you don't pay for that sprint."}
                </p>
                <a class="btn-primary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                    {"Start Risk-Free"}
                </a>
            </section>

            <section class="section" style="text-align: center;">
                <h2 class="section-title">{"Ready to stop leaking value?"}</h2>
                <p>{"Book a diagnostic call. We'll analyze your operation and show you exactly where the value is hiding."}</p>
                <div style="display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin-top: 2rem;">
                    <a class="btn-primary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        {"Schedule Diagnostic"}
                    </a>
                    <Link<Route> to={Route::Home} classes="btn-secondary">{"Back to Home"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
