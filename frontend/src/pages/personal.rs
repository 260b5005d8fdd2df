use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::glowing_card::GlowingCard;
use crate::components::pricing_card::{PricingCard, PricingTier};
use crate::components::shooting_star::ShootingStarArc;
use crate::components::starfield_canvas::StarfieldCanvas;
use crate::components::testimonial_card::TestimonialCard;
use crate::config::BOOKING_URL;
use crate::Route;

struct Deliverable {
    title: &'static str,
    description: &'static str,
}

const DELIVERABLES: [Deliverable; 6] = [
    Deliverable {
        title: "Dream Dossier",
        description: "A vivid, detailed documentation of your ideal future state. Not vague goals but a quantified vision across every dimension of your life: identity, work, relationships, health, wealth, and legacy.",
    },
    Deliverable {
        title: "Reverse Roadmap",
        description: "We work backwards from your dream to today, mapping every milestone, dependency, and decision point. You'll see exactly how to get from here to there.",
    },
    Deliverable {
        title: "Current State Assessment",
        description: "An honest, unflinching look at where you actually are. We identify assets, constraints, and the gap between your reality and your vision.",
    },
    Deliverable {
        title: "Custom AI Tools",
        description: "We don't just plan. We build. You leave with AI-powered tools designed specifically for YOUR situation. Not templates. Custom infrastructure.",
    },
    Deliverable {
        title: "Reality Blueprint",
        description: "Your complete transformation document, a living guide that evolves with you. The synthesis of everything we discover and build together.",
    },
    Deliverable {
        title: "Asset Manifest",
        description: "An inventory of everything you need to build, acquire, or develop to reach your vision. Clear next actions, not vague advice.",
    },
];

struct Step {
    step: &'static str,
    title: &'static str,
    duration: &'static str,
    description: &'static str,
}

const PROCESS: [Step; 5] = [
    Step {
        step: "01",
        title: "The Deep Dive",
        duration: "2-3 hours",
        description: "We go deep. This isn't a surface-level questionnaire. We explore your dreams, fears, past attempts, current reality, and the vision you're afraid to say out loud. You talk. We listen. We ask questions nobody's ever asked you.",
    },
    Step {
        step: "02",
        title: "The Synthesis",
        duration: "Behind the scenes",
        description: "We take everything you shared and transform it into structured, actionable documentation. Your Dream Dossier takes shape. Your Reverse Roadmap gets built. Your gaps become visible.",
    },
    Step {
        step: "03",
        title: "The Build",
        duration: "Behind the scenes",
        description: "This is where we're different. We don't just hand you a PDF. We build custom AI tools and systems designed for YOUR specific situation. Automation that works while you sleep.",
    },
    Step {
        step: "04",
        title: "The Delivery",
        duration: "1-2 hours",
        description: "We walk you through everything. Your Dream Dossier. Your Roadmap. Your custom tools. We make sure you understand not just WHAT to do, but HOW to use everything we've built for you.",
    },
    Step {
        step: "05",
        title: "The Partnership",
        duration: "Ongoing",
        description: "Transformation doesn't end at delivery. We check in. We refine. We're in your corner. The Warm Blanket Promise: You're going to be good. We'll make sure of it.",
    },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    transformation: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "For the first time in my life, I can see where I'm going. Not hope, actually SEE it. The Dream Dossier alone changed how I think about my future.",
        author: "Tech Executive",
        transformation: "Clarity on 10-year vision",
    },
    Testimonial {
        quote: "I've spent $50k on coaches over the years. None of them built me anything. Nexark left me with tools I use every single day.",
        author: "Serial Entrepreneur",
        transformation: "Custom AI productivity system",
    },
    Testimonial {
        quote: "They asked me questions I'd never been asked. Made me articulate things I'd felt but couldn't say. That alone was worth it.",
        author: "Creative Director",
        transformation: "Life direction clarity",
    },
];

static TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Reality Blueprint",
        price: "$2,500",
        duration: "one time",
        description: "Dream Dossier + Roadmap",
        features: &["Dream Dossier document", "Reverse Roadmap", "Deep Dive session"],
        cta: "Apply for myNexark",
        highlighted: false,
    },
    PricingTier {
        name: "Reality Engineering",
        price: "$5,000",
        duration: "one time",
        description: "Full transformation + AI tools",
        features: &[
            "Everything in Blueprint",
            "Custom AI tools built for you",
            "Current State Assessment",
            "Asset Manifest",
        ],
        cta: "Apply for myNexark",
        highlighted: true,
    },
    PricingTier {
        name: "Reality Engineering Elite",
        price: "$10,000",
        duration: "one time",
        description: "VIP + ongoing partnership",
        features: &[
            "Everything in Engineering",
            "Priority access to Samuel",
            "Quarterly check-ins (1 year)",
            "Unlimited tool iterations",
        ],
        cta: "Apply for myNexark",
        highlighted: false,
    },
];

#[function_component(Personal)]
pub fn personal() -> Html {
    html! {
        <div class="offering-page personal">
            <style>
                {r#"
                    .personal-hero {
                        position: relative;
                        overflow: hidden;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                    }
                    .personal-hero-grid {
                        position: relative;
                        z-index: 1;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 9rem 1.5rem 5rem;
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .personal-hero h1 {
                        font-size: 4.5rem;
                        line-height: 1.05;
                        color: white;
                        margin: 1.5rem 0;
                    }
                    .story p {
                        font-size: 1.2rem;
                        line-height: 1.8;
                        max-width: 44rem;
                    }
                    .story strong {
                        color: white;
                    }
                    .process-step {
                        display: grid;
                        grid-template-columns: 5rem 1fr;
                        gap: 1.5rem;
                        padding: 2rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .process-number {
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: rgba(129, 140, 248, 0.6);
                    }
                    .process-step h3 {
                        color: white;
                        margin: 0 0 0.25rem;
                    }
                    .process-duration {
                        font-size: 0.8rem;
                        color: #64748b;
                    }
                    .deliverable h3 {
                        color: white;
                        margin-top: 0;
                    }
                    .guarantee-box {
                        margin-top: 3rem;
                        text-align: center;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(99, 102, 241, 0.2);
                        background: rgba(99, 102, 241, 0.05);
                    }
                    .guarantee-box h3 {
                        color: white;
                    }
                    @media (max-width: 900px) {
                        .personal-hero-grid {
                            grid-template-columns: 1fr;
                        }
                        .personal-hero h1 {
                            font-size: 3rem;
                        }
                    }
                "#}
            </style>

            <section class="personal-hero">
                <StarfieldCanvas count={300} />
                <div class="personal-hero-grid">
                    <div>
                        <span class="eyebrow">{"myNexark · For Individuals"}</span>
                        <h1>{"Your next self,"}<br /><span class="gradient-text">{"engineered."}</span></h1>
                        <p style="font-size: 1.2rem; line-height: 1.7;">
                            {"From foggy to focused in 24 hours. Complete life clarity, a reverse-engineered roadmap, and custom AI tools built for YOUR specific journey."}
                        </p>
                        <div style="display: flex; gap: 1rem; flex-wrap: wrap; margin-top: 2rem;">
                            <a class="btn-primary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                                {"Apply for myNexark"}
                            </a>
                            <a class="btn-secondary" href="#process">{"See the Process"}</a>
                        </div>
                    </div>
                    <ShootingStarArc />
                </div>
            </section>

            <section class="section story">
                <h2 class="section-title">{"You know you're capable of more."}</h2>
                <p>{"You've achieved things. You've built things. By most measures, you're successful."}</p>
                <p>{"But there's a gap between who you are and who you could be. You feel it. You can't quite articulate it, but you know it's there."}</p>
                <p>{"You've tried to close that gap. Coaches. Books. Courses. Productivity systems. They help for a while. Then they fade."}</p>
                <p><strong>{"The problem isn't motivation. The problem is nobody built you the infrastructure."}</strong></p>
            </section>

            <section class="section" id="process">
                <span class="eyebrow">{"The Process"}</span>
                <h2 class="section-title">{"What Happens in myNexark"}</h2>
                { for PROCESS.iter().map(|step| html! {
                    <div class="process-step">
                        <div class="process-number">{step.step}</div>
                        <div>
                            <h3>{step.title}</h3>
                            <div class="process-duration">{step.duration}</div>
                            <p>{step.description}</p>
                        </div>
                    </div>
                }) }
            </section>

            <section class="section">
                <span class="eyebrow">{"The Deliverables"}</span>
                <h2 class="section-title">{"Not just insights. Tangible assets you own forever."}</h2>
                <div class="card-grid" style="margin-top: 3rem;">
                    { for DELIVERABLES.iter().map(|deliverable| html! {
                        <GlowingCard class="deliverable">
                            <h3>{deliverable.title}</h3>
                            <p>{deliverable.description}</p>
                        </GlowingCard>
                    }) }
                </div>
            </section>

            <section class="section">
                <span class="eyebrow">{"Transformations"}</span>
                <div class="card-grid" style="margin-top: 2rem;">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <TestimonialCard quote={t.quote} author={t.author} role={t.transformation} />
                    }) }
                </div>
            </section>

            <section class="section">
                <span class="eyebrow">{"Investment"}</span>
                <h2 class="section-title">{"Three tiers. Same methodology. Different depth."}</h2>
                <div class="card-grid" style="margin-top: 3rem;">
                    { for TIERS.iter().map(|tier| html! { <PricingCard {tier} /> }) }
                </div>
                <div class="guarantee-box">
                    <h3>{"The Clarity Guarantee"}</h3>
                    <p>{"If you don't leave with complete clarity on your path, we keep working until you do."}</p>
                </div>
            </section>

            <section class="section" style="text-align: center;">
                <h2 class="section-title">{"Ready to meet your next self?"}</h2>
                <p>{"Limited spots. Application required. We only work with those ready to transform."}</p>
                <div style="display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin-top: 2rem;">
                    <a class="btn-primary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        {"Apply for myNexark"}
                    </a>
                    <Link<Route> to={Route::Business} classes="btn-secondary">{"Nexark for Business"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
