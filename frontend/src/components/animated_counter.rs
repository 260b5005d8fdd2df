use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::visuals::counter::{counter_value, COUNTER_DURATION_MS};

const TICK_MS: u32 = 30;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let shown = use_state_eq(|| 0u32);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |target| {
                let target = *target;
                let started = js_sys::Date::now();
                let ticker = Interval::new(TICK_MS, move || {
                    shown.set(counter_value(target, js_sys::Date::now() - started, COUNTER_DURATION_MS));
                });
                move || drop(ticker)
            },
            props.value,
        );
    }

    html! {
        <span class="animated-counter" style="font-variant-numeric: tabular-nums;">
            { format!("{}{}{}", props.prefix, *shown, props.suffix) }
        </span>
    }
}
