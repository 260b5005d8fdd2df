use yew::prelude::*;

/// Looping arc that streaks across the hero, tail in indigo and head in gold.
#[function_component(ShootingStarArc)]
pub fn shooting_star_arc() -> Html {
    html! {
        <div class="next-arc">
            <style>
                {r#"
                    .next-arc {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        z-index: 2;
                    }
                    .next-arc svg {
                        width: 100%;
                        height: 100%;
                        overflow: visible;
                    }
                    .next-arc-path {
                        stroke-dasharray: 240 1000;
                        stroke-dashoffset: 240;
                        animation: arc-shoot 4s ease-in-out infinite;
                        animation-delay: 1s;
                    }
                    @keyframes arc-shoot {
                        0% { stroke-dashoffset: 240; opacity: 0; }
                        20% { opacity: 1; }
                        70% { opacity: 1; }
                        100% { stroke-dashoffset: -760; opacity: 0; }
                    }
                    .next-arc-moon {
                        position: absolute;
                        top: 8%;
                        right: 12%;
                        width: 96px;
                        height: 96px;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #e0e7ff, #a5b4fc);
                        opacity: 0.9;
                        box-shadow: 0 0 60px rgba(255, 255, 255, 0.4);
                    }
                "#}
            </style>
            <div class="next-arc-moon"></div>
            <svg viewBox="0 0 600 550" preserveAspectRatio="xMidYMid meet">
                <defs>
                    <linearGradient id="arcGradient" x1="0%" y1="100%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="transparent" />
                        <stop offset="20%" stop-color="#6366F1" stop-opacity="0.5" />
                        <stop offset="80%" stop-color="#F59E0B" />
                        <stop offset="100%" stop-color="#FFFFFF" />
                    </linearGradient>
                    <filter id="arcGlow">
                        <feGaussianBlur stdDeviation="4" result="coloredBlur" />
                        <feMerge>
                            <feMergeNode in="coloredBlur" />
                            <feMergeNode in="SourceGraphic" />
                        </feMerge>
                    </filter>
                </defs>
                <path
                    class="next-arc-path"
                    d="M 50 500 Q 250 100 550 50"
                    fill="none"
                    stroke="url(#arcGradient)"
                    stroke-width="4"
                    stroke-linecap="round"
                    filter="url(#arcGlow)"
                />
            </svg>
        </div>
    }
}
