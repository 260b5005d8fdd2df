use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::glowing_card::GlowingCard;
use crate::components::starfield_canvas::StarfieldCanvas;
use crate::config::BOOKING_URL;
use crate::Route;

struct Solution {
    category: &'static str,
    description: &'static str,
    examples: [&'static str; 5],
}

const SOLUTIONS: [Solution; 8] = [
    Solution {
        category: "Website Design & Development",
        description: "We build websites that do exactly what you need, nothing more and nothing less. Start with a simple landing page. Add a blog. Integrate a contact form. Then supercharge it with agentic workflows.",
        examples: [
            "Landing pages and marketing websites",
            "Contact forms that trigger automated research on each inquiry",
            "Blog platforms with AI-powered content optimization",
            "Custom portals with role-based access",
            "E-commerce with inventory and fulfillment automation",
        ],
    },
    Solution {
        category: "SOP → Agentic Workflow Transformation",
        description: "You have SOPs in Google Docs. We turn them into agentic workflows. Your standard operating procedures become self-executing systems that handle routine work while you focus on strategy.",
        examples: [
            "Client onboarding sequences that run themselves",
            "Document generation and approval workflows",
            "Automated follow-ups based on client behavior",
            "Research and data gathering workflows",
            "Quality assurance and compliance checks",
        ],
    },
    Solution {
        category: "Custom CRMs & Sales Systems",
        description: "Generic CRMs force you to adapt. We build CRMs that match how you actually sell. Pipeline tracking, automation, and integrations that update themselves from your emails, calendar, and conversations.",
        examples: [
            "Sales pipeline that updates from email and calendar automatically",
            "Lead scoring and qualification workflows",
            "Proposal and quote generation",
            "Automated follow-up sequences",
            "Real-time dashboards showing deal status",
        ],
    },
    Solution {
        category: "Integrations & API Connections",
        description: "Your tools should talk to each other. We build integrations that connect everything and we handle the vendor communication. If there are issues, we're transparent about it and find solutions.",
        examples: [
            "Connect your CRM with email, calendar, and Slack",
            "Sync data between Stripe, QuickBooks, and your database",
            "Build custom integrations for unique vendor APIs",
            "Automate data flow between all your systems",
            "Legacy system modernization and API wrappers",
        ],
    },
    Solution {
        category: "Client-Facing Portals",
        description: "Give your clients a branded portal where everything lives. Project dashboards, file sharing, automated status updates, invoices, and contract renewals in one place.",
        examples: [
            "Branded client portals with real-time project updates",
            "File sharing and approval workflows",
            "Automated invoicing and payment processing",
            "Booking and scheduling systems",
            "Client communication automation",
        ],
    },
    Solution {
        category: "Voice Agents & Communication",
        description: "Voice agents that handle calls, qualify leads, answer questions, and escalate when needed. From simple phone systems to sophisticated conversation workflows.",
        examples: [
            "Inbound lead qualification calls",
            "Appointment scheduling and reminders",
            "Customer support first-line response",
            "Follow-up calls and check-ins",
            "Custom voice workflows for your business",
        ],
    },
    Solution {
        category: "Business Intelligence & Dashboards",
        description: "Executive dashboards with all your KPIs in one place. Automated reports. Real-time alerts. Data pulled from sales, marketing, operations and finance.",
        examples: [
            "Real-time KPI dashboards",
            "Automated weekly and monthly reports",
            "Predictive analytics and forecasting",
            "Custom visualizations that actually get used",
            "Data warehouse integration across all systems",
        ],
    },
    Solution {
        category: "Operations & Project Management",
        description: "Project management tools built for how you actually work. Resource allocation, team collaboration, task automation, custom mobile apps for field teams.",
        examples: [
            "Project management matching your exact process",
            "Resource scheduling and allocation",
            "Time tracking and billing automation",
            "Team collaboration platforms",
            "Custom mobile apps for field operations",
        ],
    },
];

const GROWTH_PATH: [(&str, &str); 3] = [
    ("Start Simple", "Build a website, a dashboard, a simple integration. Test the waters with focused solutions."),
    ("Scale Smart", "Add agentic workflows that supercharge your systems. Automate the manual work."),
    ("Go Deep", "Transform entire operations. Full tech stacks. Everything custom-built and connected."),
];

#[function_component(Solutions)]
pub fn solutions() -> Html {
    html! {
        <div class="solutions-page">
            <style>
                {r#"
                    .solutions-hero {
                        position: relative;
                        overflow: hidden;
                    }
                    .solutions-hero .section {
                        position: relative;
                        z-index: 1;
                        padding-top: 10rem;
                    }
                    .solutions-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    .solution h3 {
                        color: white;
                        margin-top: 0;
                    }
                    .growth-step h3 {
                        color: white;
                    }
                    @media (max-width: 768px) {
                        .solutions-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <section class="solutions-hero">
                <StarfieldCanvas count={250} />
                <div class="section">
                    <span class="eyebrow">{"What We Build"}</span>
                    <h1 class="section-title">{"Success isn't an accident;"}</h1>
                    <h1 class="section-title gradient-text">{"This is where you engineer it."}</h1>
                    <p style="max-width: 44rem; font-size: 1.15rem; line-height: 1.7;">
                        {"We build custom technology for any business challenge. From a simple website to complex agentic workflows. From workflow automation to data infrastructure to customer experiences."}
                    </p>
                    <div class="card-grid" style="margin-top: 3rem;">
                        { for GROWTH_PATH.iter().map(|(title, text)| html! {
                            <div class="growth-step">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="solutions-grid">
                    { for SOLUTIONS.iter().map(|solution| html! {
                        <GlowingCard class="solution">
                            <h3>{solution.category}</h3>
                            <p>{solution.description}</p>
                            <ul class="check-list">
                                { for solution.examples.iter().map(|example| html! { <li>{*example}</li> }) }
                            </ul>
                        </GlowingCard>
                    }) }
                </div>
            </section>

            <section class="section" style="text-align: center;">
                <h2 class="section-title">{"The opportunity is in the integration."}</h2>
                <p>{"Not sure where to start? Map your automation quick wins in five minutes."}</p>
                <div style="display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin-top: 2rem;">
                    <Link<Route> to={Route::OpportunityMatrix} classes="btn-primary">{"Find My Quick Wins"}</Link<Route>>
                    <a class="btn-secondary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        {"Book a Discovery Call"}
                    </a>
                </div>
            </section>
        </div>
    }
}
