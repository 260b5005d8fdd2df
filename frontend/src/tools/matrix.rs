use serde::{Deserialize, Serialize};

pub const TOP_TASK_LIMIT: usize = 10;
pub const HOURS_SAVED_PER_TASK: f64 = 4.3;
pub const DEFAULT_RATING: u8 = 3;

pub const CATEGORIES: [&str; 8] = [
    "Client Onboarding",
    "Sales & Leads",
    "Admin & Operations",
    "Marketing",
    "Finance & Invoicing",
    "Customer Service",
    "HR & Recruiting",
    "Other",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaskTemplate {
    pub name: &'static str,
    pub category: &'static str,
    pub impact: u8,
    pub effort: u8,
}

pub const TEMPLATES: [TaskTemplate; 8] = [
    TaskTemplate { name: "Auto-send welcome email after payment", category: "Client Onboarding", impact: 5, effort: 1 },
    TaskTemplate { name: "Create client folder automatically", category: "Client Onboarding", impact: 4, effort: 2 },
    TaskTemplate { name: "Auto-tag new leads in CRM", category: "Sales & Leads", impact: 5, effort: 1 },
    TaskTemplate { name: "Trigger follow-up email sequences", category: "Sales & Leads", impact: 4, effort: 2 },
    TaskTemplate { name: "Auto-generate weekly reports", category: "Admin & Operations", impact: 5, effort: 2 },
    TaskTemplate { name: "Auto-create invoices", category: "Admin & Operations", impact: 4, effort: 1 },
    TaskTemplate { name: "Auto-post to social platforms", category: "Marketing", impact: 3, effort: 2 },
    TaskTemplate { name: "Add subscribers to segmented lists", category: "Marketing", impact: 4, effort: 1 },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Moderate,
    Hard,
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Moderate,
        }
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }

    /// Effort slider value suggested by the AI assessment.
    pub fn suggested_effort(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Moderate => 3,
            Difficulty::Hard => 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnalysis {
    pub impact_summary: String,
    pub effort_summary: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub estimated_time: String,
}

impl TaskAnalysis {
    /// Shown when the analysis request itself fails in the browser.
    pub fn offline_fallback() -> Self {
        Self {
            impact_summary: "This task could streamline your workflow and save valuable time.".to_string(),
            effort_summary: "Implementation complexity depends on your current systems.".to_string(),
            difficulty: Difficulty::Moderate,
            estimated_time: "1-2 weeks".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub category: String,
    pub impact: u8,
    pub effort: u8,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<TaskAnalysis>,
}

/// Higher impact and lower effort rank first. Range is 2..=10 for ratings in 1..=5.
pub fn calculate_score(impact: u8, effort: u8) -> u8 {
    impact + 6u8.saturating_sub(effort)
}

/// Edits to the add-task form. Analysis replies carry the text they were
/// computed for so a reply to outdated input is dropped.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftAction {
    SetName(String),
    SetCategory(String),
    SetDescription(String),
    SetImpact(u8),
    SetEffort(u8),
    ClearAnalysis,
    AnalysisReady {
        task_name: String,
        description: String,
        analysis: TaskAnalysis,
    },
    Reset,
}

fn clamp_rating(value: u8) -> u8 {
    value.clamp(1, 5)
}

/// Add-task form contents.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub impact: u8,
    pub effort: u8,
    pub analysis: Option<TaskAnalysis>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            description: String::new(),
            impact: DEFAULT_RATING,
            effort: DEFAULT_RATING,
            analysis: None,
        }
    }
}

impl TaskDraft {
    pub fn can_add(&self) -> bool {
        !self.name.trim().is_empty() && !self.category.is_empty()
    }

    /// AI analysis runs once both a name and a description are present.
    pub fn wants_analysis(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub fn apply(&mut self, action: DraftAction) {
        match action {
            DraftAction::SetName(name) => self.name = name,
            DraftAction::SetCategory(category) => self.category = category,
            DraftAction::SetDescription(description) => self.description = description,
            DraftAction::SetImpact(impact) => self.impact = clamp_rating(impact),
            DraftAction::SetEffort(effort) => self.effort = clamp_rating(effort),
            DraftAction::ClearAnalysis => self.analysis = None,
            DraftAction::AnalysisReady {
                task_name,
                description,
                analysis,
            } => {
                if task_name == self.name && description == self.description {
                    self.apply_analysis(analysis);
                }
            }
            DraftAction::Reset => *self = Self::default(),
        }
    }

    pub fn apply_analysis(&mut self, analysis: TaskAnalysis) {
        self.effort = analysis.difficulty.suggested_effort();
        self.analysis = Some(analysis);
    }

    pub fn analysis_request(&self) -> AnalyzeTaskRequest {
        let category = if self.category.is_empty() {
            "General".to_string()
        } else {
            self.category.clone()
        };
        AnalyzeTaskRequest {
            task_name: self.name.clone(),
            description: self.description.clone(),
            category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTaskRequest {
    pub task_name: String,
    pub description: String,
    pub category: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AnalyzeTaskResponse {
    pub analysis: TaskAnalysis,
}

#[derive(Clone, Debug, Serialize)]
pub struct RoadmapRequest<'a> {
    pub email: &'a str,
    pub tasks: &'a [Task],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn push(&mut self, name: String, category: String, impact: u8, effort: u8) -> &mut Task {
        self.next_id += 1;
        self.tasks.push(Task {
            id: self.next_id.to_string(),
            name,
            category,
            impact,
            effort,
            score: calculate_score(impact, effort),
            description: None,
            analysis: None,
        });
        let last = self.tasks.len() - 1;
        &mut self.tasks[last]
    }

    /// Returns `false` and leaves the list untouched when the draft is incomplete.
    pub fn add_draft(&mut self, draft: &TaskDraft) -> bool {
        if !draft.can_add() {
            return false;
        }
        let description = draft.description.trim();
        let task = self.push(
            draft.name.clone(),
            draft.category.clone(),
            draft.impact,
            draft.effort,
        );
        task.description = (!description.is_empty()).then(|| description.to_string());
        task.analysis = draft.analysis.clone();
        true
    }

    pub fn add_template(&mut self, template: &TaskTemplate) {
        self.push(
            template.name.to_string(),
            template.category.to_string(),
            template.impact,
            template.effort,
        );
    }

    pub fn remove(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Best scores first; ties keep the order tasks were added in.
    pub fn top_tasks(&self) -> Vec<Task> {
        let mut ranked = self.tasks.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(TOP_TASK_LIMIT);
        ranked
    }

    pub fn estimated_hours_saved(&self) -> f64 {
        self.tasks.len() as f64 * HOURS_SAVED_PER_TASK
    }
}

/// Checks run before the roadmap request leaves the browser.
pub fn check_roadmap_request(tasks: &[Task], email: &str) -> Result<(), &'static str> {
    if tasks.is_empty() {
        return Err("Please add at least one task before requesting your roadmap");
    }
    if email.trim().is_empty() {
        return Err("Please enter your email");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str) -> TaskDraft {
        TaskDraft {
            name: name.to_string(),
            category: category.to_string(),
            ..TaskDraft::default()
        }
    }

    #[test]
    fn score_rewards_impact_and_penalises_effort() {
        assert_eq!(calculate_score(5, 1), 10);
        assert_eq!(calculate_score(1, 5), 2);
        assert_eq!(calculate_score(3, 3), 6);
    }

    #[test]
    fn difficulty_drives_effort() {
        let mut d = draft("Invoices", "Finance & Invoicing");
        d.apply_analysis(TaskAnalysis {
            difficulty: Difficulty::Hard,
            ..TaskAnalysis::offline_fallback()
        });
        assert_eq!(d.effort, 5);
        assert_eq!(Difficulty::Easy.suggested_effort(), 1);
        assert_eq!(Difficulty::Moderate.suggested_effort(), 3);
    }

    #[test]
    fn unknown_difficulty_decodes_as_moderate() {
        let analysis: TaskAnalysis = serde_json::from_str(
            r#"{"impactSummary":"a","effortSummary":"b","difficulty":"Trivial","estimatedTime":"1 day"}"#,
        )
        .unwrap();
        assert_eq!(analysis.difficulty, Difficulty::Moderate);
    }

    #[test]
    fn stale_analysis_reply_is_ignored() {
        let mut d = draft("Weekly report", "Other");
        d.apply(DraftAction::SetDescription("Pull numbers".into()));
        let reply = |name: &str| DraftAction::AnalysisReady {
            task_name: name.to_string(),
            description: "Pull numbers".to_string(),
            analysis: TaskAnalysis {
                difficulty: Difficulty::Easy,
                ..TaskAnalysis::offline_fallback()
            },
        };

        d.apply(reply("Weekly"));
        assert!(d.analysis.is_none());
        assert_eq!(d.effort, DEFAULT_RATING);

        d.apply(reply("Weekly report"));
        assert_eq!(d.effort, 1);
        assert!(d.analysis.is_some());

        d.apply(DraftAction::Reset);
        assert_eq!(d, TaskDraft::default());
    }

    #[test]
    fn slider_values_are_clamped() {
        let mut d = TaskDraft::default();
        d.apply(DraftAction::SetImpact(9));
        d.apply(DraftAction::SetEffort(0));
        assert_eq!((d.impact, d.effort), (5, 1));
    }

    #[test]
    fn incomplete_drafts_are_not_added() {
        let mut list = TaskList::default();
        assert!(!list.add_draft(&draft("  ", "Other")));
        assert!(!list.add_draft(&draft("Weekly report", "")));
        assert!(list.is_empty());

        assert!(list.add_draft(&draft("Weekly report", "Other")));
        assert_eq!(list.tasks()[0].score, 6);
        assert_eq!(list.tasks()[0].description, None);
    }

    #[test]
    fn analysis_needs_name_and_description() {
        let mut d = draft("Weekly report", "");
        assert!(!d.wants_analysis());
        d.description = "Pull numbers from Stripe".to_string();
        assert!(d.wants_analysis());
        assert_eq!(d.analysis_request().category, "General");
    }

    #[test]
    fn top_tasks_are_ranked_stably_and_capped() {
        let mut list = TaskList::default();
        for template in TEMPLATES.iter().chain(TEMPLATES.iter()) {
            list.add_template(template);
        }
        assert_eq!(list.len(), 16);

        let top = list.top_tasks();
        assert_eq!(top.len(), TOP_TASK_LIMIT);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
        // both score-10 templates, first copies before second copies
        assert_eq!(top[0].name, "Auto-send welcome email after payment");
        assert_eq!(top[1].name, "Auto-tag new leads in CRM");
        assert_eq!(top[2].name, "Auto-send welcome email after payment");
    }

    #[test]
    fn removing_by_id_keeps_the_rest() {
        let mut list = TaskList::default();
        list.add_template(&TEMPLATES[0]);
        list.add_template(&TEMPLATES[1]);
        let id = list.tasks()[0].id.clone();
        list.remove(&id);
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].name, TEMPLATES[1].name);
        assert!((list.estimated_hours_saved() - 4.3).abs() < f64::EPSILON);
    }

    #[test]
    fn roadmap_request_needs_tasks_then_email() {
        let mut list = TaskList::default();
        assert!(check_roadmap_request(list.tasks(), "a@b.co").is_err());
        list.add_template(&TEMPLATES[0]);
        assert_eq!(check_roadmap_request(list.tasks(), " "), Err("Please enter your email"));
        assert!(check_roadmap_request(list.tasks(), "a@b.co").is_ok());
    }

    #[test]
    fn tasks_serialize_in_camel_case_without_empty_optionals() {
        let mut list = TaskList::default();
        list.add_template(&TEMPLATES[5]);
        let json = serde_json::to_value(&list.tasks()[0]).unwrap();
        assert_eq!(json["impact"], 4);
        assert_eq!(json["score"], 9);
        assert!(json.get("analysis").is_none());
    }
}
