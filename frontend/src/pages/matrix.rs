use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::components::roi_calculator::RoiCalculator;
use crate::config::{self, BOOKING_URL};
use crate::tools::matrix::{
    check_roadmap_request, AnalyzeTaskRequest, AnalyzeTaskResponse, DraftAction, RoadmapRequest,
    Task, TaskAnalysis, TaskDraft, TaskList, CATEGORIES, TEMPLATES,
};

const ANALYSIS_DEBOUNCE_MS: u32 = 1_000;

impl Reducible for TaskDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
enum Notice {
    Sent(String),
    Failed(String),
}

async fn fetch_analysis(request: &AnalyzeTaskRequest) -> Result<TaskAnalysis, String> {
    let response = Request::post(&format!("{}/api/analyze-task", config::get_backend_url()))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Analysis failed with status {}", response.status()));
    }
    response
        .json::<AnalyzeTaskResponse>()
        .await
        .map(|body| body.analysis)
        .map_err(|e| e.to_string())
}

async fn send_roadmap(email: &str, tasks: &[Task]) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/send-roadmap", config::get_backend_url()))
        .json(&RoadmapRequest { email, tasks })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    Err(message)
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(OpportunityMatrix)]
pub fn opportunity_matrix() -> Html {
    let draft = use_reducer(TaskDraft::default);
    let tasks = use_state(TaskList::default);
    let analyzing = use_state(|| false);
    let dialog_open = use_state(|| false);
    let email = use_state(String::new);
    let sending = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    // Debounced AI analysis of the task being typed
    {
        let draft = draft.clone();
        let analyzing = analyzing.clone();
        let deps = (draft.name.clone(), draft.description.clone(), draft.category.clone());
        use_effect_with_deps(
            move |_| {
                let mut pending = None;
                if draft.wants_analysis() {
                    let request = draft.analysis_request();
                    pending = Some(Timeout::new(ANALYSIS_DEBOUNCE_MS, move || {
                        analyzing.set(true);
                        spawn_local(async move {
                            let analysis = match fetch_analysis(&request).await {
                                Ok(analysis) => analysis,
                                Err(e) => {
                                    log::error!("Error analyzing task: {}", e);
                                    TaskAnalysis::offline_fallback()
                                }
                            };
                            draft.dispatch(DraftAction::AnalysisReady {
                                task_name: request.task_name,
                                description: request.description,
                                analysis,
                            });
                            analyzing.set(false);
                        });
                    }));
                } else if draft.analysis.is_some() {
                    draft.dispatch(DraftAction::ClearAnalysis);
                }
                move || drop(pending)
            },
            deps,
        );
    }

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftAction::SetName(input.value()));
        })
    };
    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.dispatch(DraftAction::SetCategory(select.value()));
        })
    };
    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.dispatch(DraftAction::SetDescription(input.value()));
        })
    };
    let on_impact = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u8>() {
                draft.dispatch(DraftAction::SetImpact(value));
            }
        })
    };
    let on_effort = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u8>() {
                draft.dispatch(DraftAction::SetEffort(value));
            }
        })
    };

    let on_add = {
        let draft = draft.clone();
        let tasks = tasks.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*tasks).clone();
            if next.add_draft(&draft) {
                tasks.set(next);
                draft.dispatch(DraftAction::Reset);
            }
        })
    };

    let open_dialog = {
        let dialog_open = dialog_open.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            notice.set(None);
            dialog_open.set(true);
        })
    };
    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(false))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_send = {
        let tasks = tasks.clone();
        let email = email.clone();
        let sending = sending.clone();
        let notice = notice.clone();
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| {
            let list = (*tasks).clone();
            let address = email.trim().to_string();
            if let Err(message) = check_roadmap_request(list.tasks(), &address) {
                notice.set(Some(Notice::Failed(message.to_string())));
                return;
            }

            sending.set(true);
            let sending = sending.clone();
            let notice = notice.clone();
            let dialog_open = dialog_open.clone();
            spawn_local(async move {
                match send_roadmap(&address, list.tasks()).await {
                    Ok(()) => {
                        log::info!("Roadmap requested for {} tasks", list.len());
                        notice.set(Some(Notice::Sent(format!(
                            "Your roadmap is on its way to {}",
                            address
                        ))));
                        dialog_open.set(false);
                    }
                    Err(e) => {
                        log::error!("Error sending roadmap: {}", e);
                        notice.set(Some(Notice::Failed(e)));
                    }
                }
                sending.set(false);
            });
        })
    };

    let on_start_over = {
        let tasks = tasks.clone();
        let draft = draft.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*tasks).clone();
            next.clear();
            tasks.set(next);
            draft.dispatch(DraftAction::Reset);
            notice.set(None);
            scroll_to_top();
        })
    };

    let analysis_panel = if !draft.description.trim().is_empty() || *analyzing {
        html! {
            <div class="ai-panel">
                <div class="ai-panel-title">{"⚡ AI Analysis"}</div>
                {
                    if *analyzing {
                        html! { <p class="muted">{"Analyzing..."}</p> }
                    } else if let Some(analysis) = &draft.analysis {
                        html! {
                            <>
                                <p>{&analysis.impact_summary}</p>
                                <p>{&analysis.effort_summary}</p>
                                <div class="ai-tags">
                                    <span class="tag">{analysis.difficulty.as_str()}</span>
                                    <span class="tag">{&analysis.estimated_time}</span>
                                </div>
                            </>
                        }
                    } else {
                        html! { <p class="muted">{"Enter task details to see AI summary"}</p> }
                    }
                }
            </div>
        }
    } else {
        html! {}
    };

    let top_tasks = tasks.top_tasks();

    let notice_view = match &*notice {
        Some(Notice::Sent(message)) => html! { <p class="notice success">{message}</p> },
        Some(Notice::Failed(message)) => html! { <p class="notice error">{message}</p> },
        None => html! {},
    };

    html! {
        <div class="matrix-page">
            <style>
                {r#"
                    .matrix-page {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 7rem 1.5rem 4rem;
                        color: #cbd5e1;
                    }
                    .matrix-hero {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .matrix-hero h1 {
                        font-size: 3rem;
                        color: white;
                        margin: 1rem 0;
                    }
                    .matrix-steps, .template-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        margin-bottom: 4rem;
                    }
                    .template-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                    .matrix-card {
                        background: rgba(15, 23, 42, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        padding: 2rem;
                        margin-bottom: 3rem;
                    }
                    .matrix-card h3 {
                        color: white;
                        margin-top: 0;
                    }
                    .step-number {
                        width: 3rem;
                        height: 3rem;
                        margin: 0 auto 1rem;
                        border-radius: 0.75rem;
                        background: rgba(99, 102, 241, 0.1);
                        color: #818cf8;
                        font-size: 1.5rem;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .matrix-form label {
                        display: block;
                        color: white;
                        font-size: 0.9rem;
                        margin: 1.25rem 0 0.5rem;
                    }
                    .matrix-form input[type="text"], .matrix-form select, .matrix-form textarea, .dialog input {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        background: #0a0f1e;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem;
                        color: white;
                    }
                    .matrix-form input[type="range"] {
                        width: 100%;
                        accent-color: #6366f1;
                    }
                    .sliders {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .ai-panel {
                        margin-top: 1.25rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(99, 102, 241, 0.05);
                        border: 1px solid rgba(99, 102, 241, 0.2);
                    }
                    .ai-panel-title {
                        color: #818cf8;
                        font-weight: 600;
                        font-size: 0.9rem;
                    }
                    .ai-tags {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .tag {
                        padding: 0.2rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(99, 102, 241, 0.1);
                        color: #a5b4fc;
                        font-size: 0.8rem;
                    }
                    .muted {
                        color: #64748b;
                        font-size: 0.85rem;
                    }
                    .primary-button {
                        width: 100%;
                        height: 3rem;
                        margin-top: 1.5rem;
                        background: white;
                        color: #0a0f1e;
                        font-weight: 600;
                        border: none;
                        border-radius: 0.5rem;
                        cursor: pointer;
                    }
                    .primary-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .secondary-button {
                        padding: 0.9rem 2rem;
                        background: transparent;
                        color: #cbd5e1;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .template {
                        text-align: left;
                        padding: 1rem;
                        background: rgba(10, 15, 30, 0.6);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        color: white;
                        cursor: pointer;
                    }
                    .template small {
                        display: block;
                        margin-top: 0.5rem;
                        color: #94a3b8;
                    }
                    .task-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem;
                        margin-bottom: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 0.75rem;
                        background: rgba(10, 15, 30, 0.6);
                    }
                    .task-row strong {
                        color: white;
                    }
                    .remove-button {
                        background: none;
                        border: none;
                        color: #64748b;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .remove-button:hover {
                        color: #f87171;
                    }
                    .quick-win {
                        display: flex;
                        gap: 1rem;
                        align-items: center;
                        padding: 1rem 1.25rem;
                        margin-bottom: 0.75rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(99, 102, 241, 0.2);
                    }
                    .quick-win-rank {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #818cf8;
                        width: 3rem;
                    }
                    .quick-win-score {
                        margin-left: auto;
                        font-weight: 700;
                        color: #c4b5fd;
                    }
                    .matrix-cta {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-top: 2rem;
                    }
                    .matrix-cta .primary-button {
                        width: auto;
                        padding: 0 2.5rem;
                        margin: 0;
                        display: inline-flex;
                        align-items: center;
                        text-decoration: none;
                    }
                    .dialog-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                        padding: 1rem;
                    }
                    .dialog {
                        background: #0f172a;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        padding: 2rem;
                        max-width: 32rem;
                        width: 100%;
                    }
                    .dialog-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .dialog-header h3 {
                        color: white;
                    }
                    .notice {
                        margin-top: 1rem;
                        font-size: 0.9rem;
                    }
                    .notice.success {
                        color: #34d399;
                        text-align: center;
                    }
                    .notice.error {
                        color: #f87171;
                    }
                    @media (max-width: 768px) {
                        .matrix-steps, .template-grid, .sliders {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <section class="matrix-hero">
                <p class="eyebrow">{"Free Interactive Tool"}</p>
                <h1>{"The Automation Opportunity Matrix™"}</h1>
                <p>{"Find Your Top 10 Automation Quick Wins in 5 Minutes"}</p>
            </section>

            <h2 class="section-title">{"How It Works"}</h2>
            <div class="matrix-steps">
                <div class="matrix-card">
                    <div class="step-number">{"1"}</div>
                    <h3>{"List Your Tasks"}</h3>
                    <p>{"Add repetitive workflows you want to automate"}</p>
                </div>
                <div class="matrix-card">
                    <div class="step-number">{"2"}</div>
                    <h3>{"Score Impact & Effort"}</h3>
                    <p>{"Rate how valuable and how difficult each is"}</p>
                </div>
                <div class="matrix-card">
                    <div class="step-number">{"3"}</div>
                    <h3>{"Get Your Roadmap"}</h3>
                    <p>{"See your top 10 automation priorities instantly"}</p>
                </div>
            </div>

            <RoiCalculator embedded={true} />

            <div class="matrix-card matrix-form">
                <h3>{"Add Your Tasks"}</h3>
                <label>{"Task Name *"}</label>
                <input
                    type="text"
                    placeholder="e.g., Send welcome emails to new clients"
                    value={draft.name.clone()}
                    oninput={on_name}
                />
                <label>{"Category *"}</label>
                <select onchange={on_category}>
                    <option value="" selected={draft.category.is_empty()}>{"Select a category"}</option>
                    { for CATEGORIES.iter().map(|category| html! {
                        <option value={*category} selected={draft.category == *category}>{*category}</option>
                    }) }
                </select>
                <label>{"Description (for AI analysis)"}</label>
                <textarea
                    rows="3"
                    placeholder="Describe the task in detail for better AI analysis..."
                    value={draft.description.clone()}
                    oninput={on_description}
                />
                { analysis_panel }
                <div class="sliders">
                    <div>
                        <label>{format!("Impact (1 = Low, 5 = High): {}", draft.impact)}</label>
                        <input type="range" min="1" max="5" value={draft.impact.to_string()} oninput={on_impact} />
                    </div>
                    <div>
                        <label>{format!("Effort (1 = Easy, 5 = Hard): {}", draft.effort)}</label>
                        <input type="range" min="1" max="5" value={draft.effort.to_string()} oninput={on_effort} />
                    </div>
                </div>
                <button class="primary-button" onclick={on_add} disabled={!draft.can_add()}>
                    {"+ Add Task to Matrix"}
                </button>
            </div>

            <div class="matrix-card">
                <h3 style="text-align: center;">{"Not Sure Where to Start?"}</h3>
                <p style="text-align: center;">{"Click any template below to add it to your matrix"}</p>
                <div class="template-grid">
                    { for TEMPLATES.iter().copied().map(|template| {
                        let tasks = tasks.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            let mut next = (*tasks).clone();
                            next.add_template(&template);
                            tasks.set(next);
                        });
                        html! {
                            <button class="template" {onclick}>
                                {template.name}
                                <small>{format!("Impact {} · Effort {}", template.impact, template.effort)}</small>
                            </button>
                        }
                    }) }
                </div>
            </div>

            if !tasks.is_empty() {
                <div class="matrix-card">
                    <h3>{format!("Your Tasks ({})", tasks.len())}</h3>
                    <p class="muted">{format!("Est. {:.0} hrs/week saved", tasks.estimated_hours_saved())}</p>
                    { for tasks.tasks().iter().map(|task| {
                        let list = tasks.clone();
                        let id = task.id.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            let mut next = (*list).clone();
                            next.remove(&id);
                            list.set(next);
                        });
                        html! {
                            <div class="task-row" key={task.id.clone()}>
                                <div>
                                    <strong>{&task.name}</strong>
                                    <div class="muted">
                                        {format!("{} · Impact {} · Effort {} · Score {}", task.category, task.impact, task.effort, task.score)}
                                    </div>
                                </div>
                                <button class="remove-button" title="Remove task" {onclick}>{"✕"}</button>
                            </div>
                        }
                    }) }
                </div>

                <div class="matrix-card">
                    <h3 style="text-align: center;">{format!("Top {} Quick Wins", top_tasks.len())}</h3>
                    { for top_tasks.iter().enumerate().map(|(index, task)| html! {
                        <div class="quick-win" key={task.id.clone()}>
                            <span class="quick-win-rank">{format!("#{}", index + 1)}</span>
                            <div>
                                <strong>{&task.name}</strong>
                                <div class="muted">{&task.category}</div>
                            </div>
                            <span class="quick-win-score">{format!("Score: {}", task.score)}</span>
                        </div>
                    }) }
                    <p style="text-align: center; color: white; font-weight: 600;">
                        {"Want Nexark to automate these for you?"}
                    </p>
                    <div class="matrix-cta">
                        <button class="primary-button" onclick={open_dialog}>{"Get Full Roadmap"}</button>
                        <a class="secondary-button" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                            {"Book Free Systems Audit"}
                        </a>
                    </div>
                    { notice_view.clone() }
                </div>
            }

            <div class="matrix-card" style="text-align: center;">
                <h3>{"Ready to Automate Your Business?"}</h3>
                <p>{"Let Nexark implement your top automation opportunities. We'll handle the technical setup while you focus on growing your business."}</p>
                <div class="matrix-cta">
                    <a class="primary-button" href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        {"Book Free Systems Audit"}
                    </a>
                    <button class="secondary-button" onclick={on_start_over}>{"Build Another Matrix"}</button>
                </div>
                <p class="muted">{"Save 5-20 hours per week • No technical skills required • Done-for-you automation"}</p>
            </div>

            if *dialog_open {
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <div class="dialog-header">
                            <h3>{"Your Automation Roadmap is Ready!"}</h3>
                            <button class="remove-button" onclick={close_dialog}>{"✕"}</button>
                        </div>
                        <p>{"Enter your email to receive your personalized automation roadmap with detailed implementation steps."}</p>
                        <input type="email" placeholder="your@email.com" value={(*email).clone()} oninput={on_email} />
                        <button
                            class="primary-button"
                            onclick={on_send}
                            disabled={*sending || email.trim().is_empty()}
                        >
                            { if *sending { "Sending..." } else { "Send My Roadmap" } }
                        </button>
                        { notice_view }
                    </div>
                </div>
            }
        </div>
    }
}
