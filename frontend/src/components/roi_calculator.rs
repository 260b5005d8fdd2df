use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::BOOKING_URL;
use crate::tools::roi::{
    format_thousands, RoiField, RoiWizard, SelectOption, EMPLOYEE_OPTIONS, HOURS_OPTIONS,
    PROCESS_OPTIONS, TOTAL_STEPS,
};
use crate::Route;

fn update(wizard: &UseStateHandle<RoiWizard>, change: impl FnOnce(&mut RoiWizard)) {
    let mut next = (**wizard).clone();
    change(&mut next);
    wizard.set(next);
}

fn error_line(wizard: &RoiWizard, field: RoiField) -> Html {
    match wizard.error(field) {
        Some(message) => html! { <p class="roi-error">{message}</p> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct RoiCalculatorProps {
    /// Embedded inside another page: hides the section heading.
    #[prop_or(false)]
    pub embedded: bool,
}

#[function_component(RoiCalculator)]
pub fn roi_calculator(props: &RoiCalculatorProps) -> Html {
    let wizard = use_state(RoiWizard::new);

    let on_text = |field: RoiField| {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(&wizard, |w| w.set_field(field, input.value()));
        })
    };

    let option_grid = |field: RoiField, options: &[SelectOption], selected: &str| -> Html {
        html! {
            <div class="roi-options">
                { for options.iter().map(|option| {
                    let wizard = wizard.clone();
                    let value = option.value.to_string();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        let value = value.clone();
                        update(&wizard, |w| w.set_field(field, value));
                    });
                    html! {
                        <button
                            class={classes!("roi-option", (selected == option.value).then(|| "selected"))}
                            {onclick}
                        >
                            {option.label}
                        </button>
                    }
                }) }
            </div>
        }
    };

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            update(&wizard, RoiWizard::next);
        })
    };
    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            update(&wizard, RoiWizard::back);
        })
    };
    let on_reset = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            update(&wizard, RoiWizard::reset);
        })
    };

    let current = (*wizard).clone();

    let body = if let Some(results) = current.results {
        html! {
            <div class="roi-results">
                <span class="roi-badge">{"Your Results"}</span>
                <h2>{format!("{}, Here's Your ROI Potential", current.form.name.trim())}</h2>
                <p class="roi-subtitle">{format!("Personalized results for {}", current.form.company.trim())}</p>
                <div class="roi-stats">
                    <div class="roi-stat">
                        <div class="roi-stat-value">{results.weekly_hours_saved.to_string()}</div>
                        <p>{"Hours/Week Saved"}</p>
                    </div>
                    <div class="roi-stat">
                        <div class="roi-stat-value">{format_thousands(results.yearly_hours_saved)}</div>
                        <p>{"Hours/Year Reclaimed"}</p>
                    </div>
                    <div class="roi-stat highlight">
                        <div class="roi-stat-value">{format!("${}", format_thousands(results.yearly_cost_savings))}</div>
                        <p>{"Potential Annual Savings"}</p>
                    </div>
                </div>
                <div class="roi-actions">
                    <a class="roi-primary" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        {"Book Free Systems Audit"}
                    </a>
                    if !props.embedded {
                        <Link<Route> to={Route::OpportunityMatrix} classes="roi-secondary">
                            {"Find Your Top 10 Quick Wins"}
                        </Link<Route>>
                    }
                    <button class="roi-secondary" onclick={on_reset}>{"Start Over"}</button>
                </div>
            </div>
        }
    } else {
        let form = &current.form;
        let step_body = match current.step {
            1 => html! {
                <>
                    <h3>{"Let's start with you"}</h3>
                    <label>{"What's your name?"}</label>
                    <input type="text" placeholder="John Doe" value={form.name.clone()} oninput={on_text(RoiField::Name)} />
                    { error_line(&current, RoiField::Name) }
                    <label>{"What's your role?"}</label>
                    <input type="text" placeholder="CEO, Operations Manager, etc." value={form.role.clone()} oninput={on_text(RoiField::Role)} />
                    { error_line(&current, RoiField::Role) }
                    <label>{"Company name"}</label>
                    <input type="text" placeholder="Your Company Inc." value={form.company.clone()} oninput={on_text(RoiField::Company)} />
                    { error_line(&current, RoiField::Company) }
                </>
            },
            2 => html! {
                <>
                    <h3>{"How many employees do you have?"}</h3>
                    { option_grid(RoiField::Employees, &EMPLOYEE_OPTIONS, &form.employees) }
                    { error_line(&current, RoiField::Employees) }
                </>
            },
            3 => html! {
                <>
                    <h3>{"Which processes eat up your team's time?"}</h3>
                    <div class="roi-options">
                        { for PROCESS_OPTIONS.iter().copied().map(|process| {
                            let wizard = wizard.clone();
                            let checked = form.processes.iter().any(|p| p == process);
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                update(&wizard, |w| w.toggle_process(process));
                            });
                            html! {
                                <button class={classes!("roi-option", checked.then(|| "selected"))} {onclick}>
                                    <span class="roi-check">{ if checked { "✓" } else { "" } }</span>
                                    <span>{process}</span>
                                </button>
                            }
                        }) }
                    </div>
                    { error_line(&current, RoiField::Processes) }
                </>
            },
            4 => html! {
                <>
                    <h3>{"How many hours per week go into these tasks?"}</h3>
                    { option_grid(RoiField::HoursPerWeek, &HOURS_OPTIONS, &form.hours_per_week) }
                    { error_line(&current, RoiField::HoursPerWeek) }
                </>
            },
            _ => html! {
                <>
                    <h3>{"What's the average hourly cost of that time?"}</h3>
                    <label>{"Hourly cost (USD)"}</label>
                    <input type="number" min="1" placeholder="50" value={form.hourly_cost.clone()} oninput={on_text(RoiField::HourlyCost)} />
                    { error_line(&current, RoiField::HourlyCost) }
                </>
            },
        };

        html! {
            <div class="roi-wizard">
                <div class="roi-progress-label">
                    <span>{format!("Step {} of {}", current.step, TOTAL_STEPS)}</span>
                    <span>{format!("{}%", current.progress().round())}</span>
                </div>
                <div class="roi-progress">
                    <div class="roi-progress-fill" style={format!("width: {}%;", current.progress())}></div>
                </div>
                <div class="roi-step">{ step_body }</div>
                <div class="roi-nav">
                    if current.step > 1 {
                        <button class="roi-secondary" onclick={on_back}>{"← Back"}</button>
                    }
                    <button class="roi-primary" onclick={on_next}>
                        { if current.step == TOTAL_STEPS { "Calculate My ROI" } else { "Continue" } }
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <section id="calculator" class="roi-section">
            <style>
                {r#"
                    .roi-section {
                        padding: 4rem 1.5rem;
                        position: relative;
                    }
                    .roi-header {
                        text-align: center;
                        margin-bottom: 2.5rem;
                    }
                    .roi-header h2 {
                        font-size: 2.5rem;
                        color: white;
                        margin: 0.5rem 0;
                    }
                    .roi-wizard, .roi-results {
                        max-width: 720px;
                        margin: 0 auto;
                        background: rgba(15, 23, 42, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        padding: 2.5rem;
                        backdrop-filter: blur(4px);
                    }
                    .roi-progress-label {
                        display: flex;
                        justify-content: space-between;
                        color: #94a3b8;
                        font-size: 0.85rem;
                    }
                    .roi-progress {
                        height: 4px;
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 999px;
                        margin: 0.5rem 0 2rem;
                    }
                    .roi-progress-fill {
                        height: 100%;
                        background: linear-gradient(90deg, #6366f1, #a855f7);
                        border-radius: 999px;
                        transition: width 0.3s;
                    }
                    .roi-step h3 {
                        color: white;
                        margin-bottom: 1.5rem;
                    }
                    .roi-step label {
                        display: block;
                        color: white;
                        font-size: 0.9rem;
                        margin: 1rem 0 0.5rem;
                    }
                    .roi-step input {
                        width: 100%;
                        height: 3rem;
                        padding: 0 1rem;
                        background: #0a0f1e;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem;
                        color: white;
                    }
                    .roi-options {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                        gap: 0.75rem;
                    }
                    .roi-option {
                        display: flex;
                        gap: 0.5rem;
                        align-items: center;
                        padding: 1rem;
                        background: #0a0f1e;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        color: #cbd5e1;
                        cursor: pointer;
                        text-align: left;
                    }
                    .roi-option.selected {
                        border-color: #6366f1;
                        background: rgba(99, 102, 241, 0.1);
                        color: white;
                    }
                    .roi-check {
                        width: 1rem;
                        color: #818cf8;
                    }
                    .roi-error {
                        color: #f87171;
                        font-size: 0.85rem;
                        margin-top: 0.25rem;
                    }
                    .roi-nav, .roi-actions {
                        display: flex;
                        justify-content: flex-end;
                        gap: 1rem;
                        margin-top: 2rem;
                        flex-wrap: wrap;
                    }
                    .roi-primary {
                        padding: 0.9rem 2rem;
                        background: white;
                        color: #0a0f1e;
                        font-weight: 600;
                        border: none;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .roi-secondary {
                        padding: 0.9rem 2rem;
                        background: transparent;
                        color: #cbd5e1;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .roi-results {
                        text-align: center;
                    }
                    .roi-results h2 {
                        color: white;
                        font-size: 2rem;
                    }
                    .roi-badge {
                        display: inline-block;
                        padding: 0.4rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(99, 102, 241, 0.2);
                        background: rgba(99, 102, 241, 0.1);
                        color: #a5b4fc;
                        font-size: 0.85rem;
                    }
                    .roi-subtitle {
                        color: #94a3b8;
                    }
                    .roi-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        margin: 2.5rem 0;
                    }
                    .roi-stat {
                        padding: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        color: #94a3b8;
                    }
                    .roi-stat.highlight {
                        border-color: rgba(99, 102, 241, 0.4);
                        background: rgba(99, 102, 241, 0.08);
                    }
                    .roi-stat-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: white;
                    }
                    .roi-actions {
                        justify-content: center;
                    }
                    @media (max-width: 640px) {
                        .roi-stats {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            if !props.embedded {
                <div class="roi-header">
                    <p class="eyebrow">{"ROI Calculator"}</p>
                    <h2>{"What Is Manual Work Costing You?"}</h2>
                    <p class="roi-subtitle">{"Five quick questions. A clear estimate of the hours and money automation can give back."}</p>
                </div>
            }
            { body }
        </section>
    }
}
