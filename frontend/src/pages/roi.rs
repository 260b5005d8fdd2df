use yew::prelude::*;

use crate::components::roi_calculator::RoiCalculator;
use crate::components::starfield_canvas::StarfieldCanvas;

#[function_component(RoiCalculatorPage)]
pub fn roi_calculator_page() -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="roi-page">
            <style>
                {r#"
                    .roi-page {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                    }
                    .roi-page-content {
                        position: relative;
                        z-index: 1;
                        padding-top: 5rem;
                    }
                "#}
            </style>
            <StarfieldCanvas count={200} />
            <div class="roi-page-content">
                <RoiCalculator />
            </div>
        </div>
    }
}
