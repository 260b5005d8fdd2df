use yew::prelude::*;

use crate::components::glowing_card::GlowingCard;

#[derive(Properties, PartialEq)]
pub struct TestimonialProps {
    pub quote: AttrValue,
    pub author: AttrValue,
    pub role: AttrValue,
    #[prop_or_default]
    pub metric: Option<AttrValue>,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialProps) -> Html {
    html! {
        <GlowingCard class="testimonial-card">
            <style>
                {r#"
                    .testimonial-card blockquote {
                        margin: 0 0 1.5rem;
                        color: #e2e8f0;
                        line-height: 1.7;
                    }
                    .testimonial-metric {
                        display: inline-block;
                        margin-bottom: 1rem;
                        padding: 0.2rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(16, 185, 129, 0.1);
                        color: #34d399;
                        font-size: 0.8rem;
                        font-weight: 600;
                    }
                    .testimonial-author {
                        color: white;
                        font-weight: 600;
                    }
                    .testimonial-role {
                        color: #64748b;
                        font-size: 0.85rem;
                    }
                "#}
            </style>
            if let Some(metric) = &props.metric {
                <span class="testimonial-metric">{metric.clone()}</span>
            }
            <blockquote>{format!("\"{}\"", props.quote)}</blockquote>
            <div class="testimonial-author">{props.author.clone()}</div>
            <div class="testimonial-role">{props.role.clone()}</div>
        </GlowingCard>
    }
}
