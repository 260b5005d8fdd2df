use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Implementation difficulty reported by the task analysis.
///
/// Decodes leniently: anything that is not "easy" or "hard" (in any case)
/// becomes `Moderate`, which is also what the fallback analyses use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Moderate,
    Hard,
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        Difficulty::from(value.as_str())
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnalysis {
    pub impact_summary: String,
    pub effort_summary: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub impact: i32,
    pub effort: i32,
    #[serde(default)]
    pub score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<TaskAnalysis>,
}

/// Form fields for `POST /api/analyze-task`. Any JSON value is accepted for
/// each field; see [`lenient_text`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTaskRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub task_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
}

/// `null` counts as absent, strings pass through and any other value is
/// kept as its JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTaskResponse {
    pub analysis: TaskAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub email: Option<String>,
    pub tasks: Option<Vec<Task>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_request_accepts_non_string_fields() {
        let req: AnalyzeTaskRequest =
            serde_json::from_str(r#"{"taskName": 42, "description": null, "category": ["Sales"], "extra": true}"#).unwrap();
        assert_eq!(req.task_name.as_deref(), Some("42"));
        assert_eq!(req.description, None);
        assert_eq!(req.category.as_deref(), Some(r#"["Sales"]"#));

        let empty: AnalyzeTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.task_name.is_none());
    }

    #[test]
    fn difficulty_decodes_leniently() {
        let parsed: Vec<Difficulty> = serde_json::from_str(r#"["Easy", "hard", " MODERATE ", "Impossible"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Difficulty::Easy, Difficulty::Hard, Difficulty::Moderate, Difficulty::Moderate]
        );
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"Hard\"");
    }

    #[test]
    fn task_uses_camel_case_on_the_wire() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "1700000000000",
                "name": "Auto-create invoices",
                "category": "Admin & Operations",
                "impact": 4,
                "effort": 1,
                "score": 9,
                "analysis": {
                    "impactSummary": "Saves hours.",
                    "effortSummary": "Simple.",
                    "difficulty": "Easy",
                    "estimatedTime": "1-2 days"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(task.id.as_deref(), Some("1700000000000"));
        let analysis = task.analysis.unwrap();
        assert_eq!(analysis.difficulty, Difficulty::Easy);
        assert_eq!(analysis.estimated_time, "1-2 days");
        assert!(task.description.is_none());
    }
}
