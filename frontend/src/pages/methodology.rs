use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::glowing_card::GlowingCard;
use crate::components::starfield_canvas::StarfieldCanvas;
use crate::config::BOOKING_URL;
use crate::Route;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    bullets: [&'static str; 3],
    why: &'static str,
}

const STEPS: [Step; 5] = [
    Step {
        number: "01",
        title: "Dream Architect",
        description: "Not 'what's broken?' but 'what did you originally want?'",
        bullets: [
            "We help you articulate the vision you've been too busy to revisit",
            "Crystallize the dream state: Where do you want to be in 12-24 months?",
            "No vague goals. Quantified outcomes.",
        ],
        why: "Because we can compress time with AI-native development, dreams that felt '5 years away' are now 6 months away. But only if we know what we're building toward.",
    },
    Step {
        number: "02",
        title: "Current State",
        description: "Honest audit of where you are today",
        bullets: [
            "What's working? What's broken? What's missing?",
            "Map your assets, constraints, and gaps",
            "Identify what's costing you time, money, opportunity",
        ],
        why: "You can't engineer a path if you don't know your starting point. Most founders are so busy they haven't done an honest assessment in years.",
    },
    Step {
        number: "03",
        title: "Reverse Engineer the Path",
        description: "Work backwards from dream to reality",
        bullets: [
            "Map every milestone, dependency, and prerequisite",
            "Identify what technology closes the gap",
            "Design the system that makes the dream inevitable",
        ],
        why: "The path isn't linear. There's a sequence. We find it by working backwards, not guessing forward.",
    },
    Step {
        number: "04",
        title: "Build Technology",
        description: "Deploy the custom software that closes the gap",
        bullets: [
            "Secure, scalable, production-ready",
            "AI-native development = 30-50% faster delivery",
            "Not just 'a tool' but the technology that makes your dream feasible",
        ],
        why: "This is where most dev shops start. For us, it's Step 4. Because we built the right thing, not just any thing.",
    },
    Step {
        number: "05",
        title: "Partnership (Not Delivery)",
        description: "We don't deliver and disappear",
        bullets: [
            "Systems evolve as you grow",
            "Monthly reviews: Are we on the path to the dream?",
            "Continuous optimization toward the vision",
        ],
        why: "Your dream evolves. Technology should too. We're not vendors. We're partners in making the vision real.",
    },
];

#[function_component(Methodology)]
pub fn methodology() -> Html {
    html! {
        <div class="methodology-page">
            <style>
                {r#"
                    .methodology-hero {
                        position: relative;
                        overflow: hidden;
                    }
                    .methodology-hero .section {
                        position: relative;
                        z-index: 1;
                        padding-top: 10rem;
                    }
                    .contrast {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .contrast h4 {
                        color: white;
                        margin: 0 0 0.5rem;
                    }
                    .re-step {
                        margin-bottom: 1.5rem;
                    }
                    .re-step-header {
                        display: flex;
                        align-items: baseline;
                        gap: 1rem;
                    }
                    .re-step-number {
                        font-size: 2rem;
                        font-weight: 700;
                        color: #818cf8;
                    }
                    .re-step h3 {
                        color: white;
                        margin: 0;
                    }
                    .re-why {
                        margin-top: 1rem;
                        padding: 1rem;
                        border-left: 2px solid rgba(99, 102, 241, 0.4);
                        background: rgba(99, 102, 241, 0.05);
                        font-size: 0.95rem;
                    }
                    .re-why strong {
                        color: white;
                    }
                    .example {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                        line-height: 1.8;
                    }
                    @media (max-width: 768px) {
                        .contrast {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <section class="methodology-hero">
                <StarfieldCanvas count={250} />
                <div class="section">
                    <span class="eyebrow">{"The Reality Engineering Lens"}</span>
                    <h1 class="section-title">{"We Don't Just Build"}</h1>
                    <h1 class="section-title"><span class="dim">{"What You Ask For"}</span></h1>
                    <p style="font-size: 1.2rem;">
                        {"We help you remember what you originally dreamed, and make it feasible now."}
                    </p>
                    <p class="gradient-text" style="font-weight: 700;">{"Engineering Reality, Together."}</p>
                </div>
            </section>

            <section class="section">
                <p>{"When you started your business, you had a vision. A dream of what this could become."}</p>
                <p>
                    {"But somewhere along the way, between dealing with customers, managing a team and fixing urgent issues, you forgot. You got stuck in day-to-day operations. The dream became \"nice to have someday.\""}
                </p>
                <div class="contrast">
                    <GlowingCard glow_color="rgba(148, 163, 184, 0.25)">
                        <h4>{"Traditional dev shops:"}</h4>
                        <p>{"\"Tell us what to build\" → They build it → They leave"}</p>
                        <p>{"You get a tool. It might work. But did it move you toward the dream? Who knows."}</p>
                    </GlowingCard>
                    <GlowingCard>
                        <h4>{"Nexark with Reality Engineering:"}</h4>
                        <p>{"\"Let's remember your original vision\" → We reverse-engineer the path → We build what closes the gap → We stay until you're there"}</p>
                        <p>{"You get technology + a roadmap to the dream you forgot you had."}</p>
                    </GlowingCard>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"The 5-Step Reality Engineering Process"}</h2>
                <p>{"This is how we build. Internally for ourselves. And externally for you."}</p>
                <div style="margin-top: 3rem;">
                    { for STEPS.iter().map(|step| html! {
                        <GlowingCard class="re-step">
                            <div class="re-step-header">
                                <span class="re-step-number">{step.number}</span>
                                <h3>{step.title}</h3>
                            </div>
                            <p>{step.description}</p>
                            <ul class="check-list">
                                { for step.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                            </ul>
                            <div class="re-why">
                                <strong>{"Why this matters: "}</strong>{step.why}
                            </div>
                        </GlowingCard>
                    }) }
                </div>
            </section>

            <section class="section example">
                <span class="eyebrow">{"Real Example"}</span>
                <p>
                    {"When we built Park at 14th's CRM, it wasn't just \"membership management.\" It was reconnecting the founder to his vision of a luxury club experience. Facial recognition wasn't a feature request. It was reverse-engineered from the dream of \"members feel like VIPs from the moment they walk in.\""}
                </p>
                <p class="gradient-text" style="font-weight: 700;">{"That's Reality Engineering."}</p>
                <h2 class="section-title">{"What felt \"5 years away\" is now \"6 months away.\""}</h2>
                <p>{"But only if we know what we're building toward. That's why every project, even a simple CRM, starts with the dream, not the task list."}</p>
                <div style="display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin-top: 2rem;">
                    <a class="btn-primary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        {"Start Your Build"}
                    </a>
                    <Link<Route> to={Route::Solutions} classes="btn-secondary">{"See What We Build"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
