use std::f64::consts::PI;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::visuals::starfield::{Starfield, STAR_COUNT};

const FRAME_MS: u32 = 16;

fn js_random() -> f64 {
    js_sys::Math::random()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn canvas_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    (f64::from(canvas.offset_width()), f64::from(canvas.offset_height()))
}

fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    if ctx.arc(x, y, radius, 0.0, PI * 2.0).is_ok() {
        ctx.fill();
    }
}

fn draw(ctx: &CanvasRenderingContext2d, field: &Starfield) {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);

    for star in &field.stars {
        let radius = star.radius();
        fill_circle(ctx, star.x, star.y, radius, &format!("rgba(255, 255, 255, {:.3})", star.alpha));
        if star.has_glow() {
            fill_circle(
                ctx,
                star.x,
                star.y,
                radius * 4.0,
                &format!("rgba(165, 180, 252, {:.3})", star.alpha * 0.1),
            );
        }
    }

    for shooting in &field.shooting_stars {
        let (tail_x, tail_y) = shooting.tail();
        ctx.set_stroke_style_str(&format!(
            "rgba(255, 255, 255, {:.3})",
            shooting.life.max(0.0)
        ));
        ctx.set_line_width(1.5);
        ctx.begin_path();
        ctx.move_to(shooting.x, shooting.y);
        ctx.line_to(tail_x, tail_y);
        ctx.stroke();
        fill_circle(ctx, shooting.x, shooting.y, 1.5, "rgba(254, 243, 199, 0.9)");
    }
}

#[derive(Properties, PartialEq)]
pub struct StarfieldProps {
    #[prop_or(STAR_COUNT)]
    pub count: usize,
    #[prop_or_default]
    pub class: Classes,
}

/// Full-size background canvas with drifting parallax stars and periodic
/// shooting stars. The frame timer is dropped on unmount.
#[function_component(StarfieldCanvas)]
pub fn starfield_canvas(props: &StarfieldProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |count| {
                let mut frame_timer = None;
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(ctx) = context_2d(&canvas) {
                        let mut rng = js_random;
                        let (width, height) = canvas_size(&canvas);
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                        let mut field = Starfield::new(width, height, *count, &mut rng);

                        frame_timer = Some(Interval::new(FRAME_MS, move || {
                            let (width, height) = canvas_size(&canvas);
                            if width != field.width || height != field.height {
                                canvas.set_width(width as u32);
                                canvas.set_height(height as u32);
                                field.resize(width, height, &mut rng);
                            }
                            field.step(js_sys::Date::now(), &mut rng);
                            draw(&ctx, &field);
                        }));
                    } else {
                        log::warn!("Canvas 2d context unavailable, starfield disabled");
                    }
                }
                move || drop(frame_timer)
            },
            props.count,
        );
    }

    html! {
        <>
            <style>
                {r#"
                    .starfield-canvas {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.8;
                        pointer-events: none;
                        z-index: 0;
                    }
                "#}
            </style>
            <canvas ref={canvas_ref} class={classes!("starfield-canvas", props.class.clone())} />
        </>
    }
}
