use yew::prelude::*;

use crate::components::glowing_card::GlowingCard;
use crate::config::BOOKING_URL;

#[derive(Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlighted: bool,
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: &'static PricingTier,
    #[prop_or(AttrValue::Static("rgba(99, 102, 241, 0.35)"))]
    pub glow_color: AttrValue,
}

/// One engagement tier. Every call to action goes to the booking page.
#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = props.tier;

    html! {
        <GlowingCard
            class={classes!("pricing-card", tier.highlighted.then(|| "highlighted"))}
            glow_color={props.glow_color.clone()}
        >
            <style>
                {r#"
                    .pricing-card {
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                    }
                    .pricing-card.highlighted {
                        border: 1px solid rgba(99, 102, 241, 0.5);
                        border-radius: 1rem;
                    }
                    .pricing-card h3 {
                        color: white;
                        margin: 0.5rem 0;
                    }
                    .pricing-badge {
                        align-self: flex-start;
                        padding: 0.2rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(99, 102, 241, 0.15);
                        color: #a5b4fc;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }
                    .price {
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: white;
                    }
                    .price small {
                        font-size: 0.9rem;
                        font-weight: 400;
                        color: #64748b;
                        margin-left: 0.5rem;
                    }
                    .pricing-card .btn-primary, .pricing-card .btn-secondary {
                        margin-top: auto;
                        text-align: center;
                    }
                "#}
            </style>
            if tier.highlighted {
                <span class="pricing-badge">{"Most Popular"}</span>
            }
            <h3>{tier.name}</h3>
            <div class="price">{tier.price}<small>{tier.duration}</small></div>
            <p>{tier.description}</p>
            <ul class="check-list">
                { for tier.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <a
                class={if tier.highlighted { "btn-primary" } else { "btn-secondary" }}
                href={BOOKING_URL}
                target="_blank"
                rel="noopener noreferrer"
            >
                {tier.cta}
            </a>
        </GlowingCard>
    }
}
