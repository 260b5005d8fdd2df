use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlowingCardProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("rgba(99, 102, 241, 0.35)"))]
    pub glow_color: AttrValue,
}

/// Card whose border lights up around the pointer.
#[function_component(GlowingCard)]
pub fn glowing_card(props: &GlowingCardProps) -> Html {
    let pointer = use_state(|| (0, 0));

    let on_mouse_move = {
        let pointer = pointer.clone();
        Callback::from(move |e: MouseEvent| {
            pointer.set((e.offset_x(), e.offset_y()));
        })
    };

    let (x, y) = *pointer;
    let glow_style = format!(
        "background: radial-gradient(350px circle at {x}px {y}px, {}, transparent 80%);",
        props.glow_color
    );

    html! {
        <div class="glowing-card" onmousemove={on_mouse_move}>
            <style>
                {r#"
                    .glowing-card {
                        position: relative;
                        border-radius: 1rem;
                        padding: 1px;
                        background: rgba(15, 23, 42, 0.5);
                    }
                    .glowing-card-glow {
                        position: absolute;
                        inset: -1px;
                        border-radius: 1rem;
                        opacity: 0;
                        transition: opacity 0.3s;
                        pointer-events: none;
                    }
                    .glowing-card:hover .glowing-card-glow {
                        opacity: 1;
                    }
                    .glowing-card-content {
                        position: relative;
                        border-radius: 1rem;
                        background: rgba(15, 23, 42, 0.8);
                        backdrop-filter: blur(4px);
                        padding: 2rem;
                        height: 100%;
                    }
                "#}
            </style>
            <div class="glowing-card-glow" style={glow_style}></div>
            <div class={classes!("glowing-card-content", props.class.clone())}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
