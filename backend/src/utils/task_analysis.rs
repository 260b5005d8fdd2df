use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::api::gemini::{AnalysisError, TaskAnalyzer};
use crate::models::task_models::{Difficulty, TaskAnalysis};

static FENCED_JSON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("valid fence regex"));

const DEFAULT_ESTIMATED_TIME: &str = "1-2 weeks";

/// Which fallback to serve, keyed by where the analysis went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    ProviderRejected,
    Unparseable,
    Unexpected,
}

pub fn fallback_analysis(reason: FallbackReason) -> TaskAnalysis {
    let (impact, effort) = match reason {
        FallbackReason::ProviderRejected => (
            "This task could streamline your workflow and save valuable time by automating repetitive steps.",
            "Implementation complexity depends on your current systems and integration requirements.",
        ),
        FallbackReason::Unparseable => (
            "This task has potential to improve efficiency and reduce manual work.",
            "Requires careful planning and testing before deployment.",
        ),
        FallbackReason::Unexpected => (
            "This automation could save significant time and reduce errors in your workflow.",
            "Implementation will depend on your existing systems and technical requirements.",
        ),
    };
    TaskAnalysis {
        impact_summary: impact.to_string(),
        effort_summary: effort.to_string(),
        difficulty: Difficulty::Moderate,
        estimated_time: DEFAULT_ESTIMATED_TIME.to_string(),
    }
}

pub fn build_prompt(task_name: &str, description: Option<&str>, category: Option<&str>) -> String {
    let category = category.map(str::trim).filter(|c| !c.is_empty()).unwrap_or("General");
    let description = description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("No description provided");

    format!(
        r#"You are an expert business automation consultant. Analyze this automation task and provide a brief assessment.

Task: {task_name}
Category: {category}
Description: {description}

Respond in JSON format with these exact fields:
{{
  "impactSummary": "1-2 sentences about the business impact and time savings potential",
  "effortSummary": "1-2 sentences about implementation complexity and requirements",
  "difficulty": "Easy" | "Moderate" | "Hard",
  "estimatedTime": "estimated implementation time (e.g., '1-2 days', '1-2 weeks')"
}}

Be concise and practical. Focus on real business value."#
    )
}

/// Parses a model reply into an analysis.
///
/// A fenced block wins over the surrounding text. Missing or empty fields get
/// per-field defaults; only undecodable JSON is an error.
pub fn parse_analysis_reply(reply: &str) -> Result<TaskAnalysis, AnalysisError> {
    let json_text = FENCED_JSON_RE
        .captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(reply);

    let value: Value = serde_json::from_str(json_text.trim())?;
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Ok(TaskAnalysis {
        impact_summary: field("impactSummary").unwrap_or_else(|| "Could improve workflow efficiency.".to_string()),
        effort_summary: field("effortSummary")
            .unwrap_or_else(|| "Requires standard implementation effort.".to_string()),
        difficulty: field("difficulty").map(Difficulty::from).unwrap_or_default(),
        estimated_time: field("estimatedTime").unwrap_or_else(|| DEFAULT_ESTIMATED_TIME.to_string()),
    })
}

/// Runs the analysis end to end. Never fails: every error maps to a fallback.
pub async fn analyze_task(
    analyzer: &dyn TaskAnalyzer,
    task_name: &str,
    description: Option<&str>,
    category: Option<&str>,
) -> TaskAnalysis {
    let prompt = build_prompt(task_name, description, category);

    let result = match analyzer.generate(&prompt).await {
        Ok(reply) => parse_analysis_reply(&reply),
        Err(e) => Err(e),
    };

    match result {
        Ok(analysis) => analysis,
        Err(e) => {
            let reason = match &e {
                AnalysisError::Provider { .. } => FallbackReason::ProviderRejected,
                AnalysisError::Parse(_) => FallbackReason::Unparseable,
                AnalysisError::Request(_) | AnalysisError::EmptyResponse => FallbackReason::Unexpected,
            };
            tracing::warn!("Serving fallback analysis for '{}' ({:?}): {}", task_name, reason, e);
            fallback_analysis(reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::gemini::MockTaskAnalyzer;

    #[test]
    fn prompt_fills_defaults() {
        let prompt = build_prompt("Send invoices", None, Some("  "));
        assert!(prompt.contains("Task: Send invoices"));
        assert!(prompt.contains("Category: General"));
        assert!(prompt.contains("Description: No description provided"));
        assert!(prompt.contains("\"difficulty\": \"Easy\" | \"Moderate\" | \"Hard\""));
    }

    #[test]
    fn parses_fenced_json_before_raw() {
        let reply = "Here you go:\n```json\n{\"impactSummary\":\"Big.\",\"effortSummary\":\"Small.\",\"difficulty\":\"Easy\",\"estimatedTime\":\"2 days\"}\n```\nThanks";
        let analysis = parse_analysis_reply(reply).unwrap();
        assert_eq!(analysis.impact_summary, "Big.");
        assert_eq!(analysis.difficulty, Difficulty::Easy);
        assert_eq!(analysis.estimated_time, "2 days");

        let bare = "```\n{\"difficulty\":\"Hard\"}\n```";
        assert_eq!(parse_analysis_reply(bare).unwrap().difficulty, Difficulty::Hard);
    }

    #[test]
    fn parses_raw_json_and_defaults_missing_fields() {
        let analysis = parse_analysis_reply(r#"{"impactSummary": "", "difficulty": "Hard"}"#).unwrap();
        assert_eq!(analysis.impact_summary, "Could improve workflow efficiency.");
        assert_eq!(analysis.effort_summary, "Requires standard implementation effort.");
        assert_eq!(analysis.difficulty, Difficulty::Hard);
        assert_eq!(analysis.estimated_time, "1-2 weeks");
    }

    #[test]
    fn prose_reply_is_a_parse_error() {
        let err = parse_analysis_reply("I think this is a moderate task.").unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[tokio::test]
    async fn provider_rejection_serves_its_fallback() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer.expect_generate().times(1).returning(|_| {
            Err(AnalysisError::Provider {
                status: 503,
                body: "overloaded".to_string(),
            })
        });

        let analysis = analyze_task(&analyzer, "Auto-create invoices", None, None).await;
        assert_eq!(analysis, fallback_analysis(FallbackReason::ProviderRejected));
    }

    #[tokio::test]
    async fn garbled_reply_serves_parse_fallback() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer
            .expect_generate()
            .returning(|_| Ok("```json\n{ not json }\n```".to_string()));

        let analysis = analyze_task(&analyzer, "Auto-create invoices", None, None).await;
        assert_eq!(analysis, fallback_analysis(FallbackReason::Unparseable));
    }

    #[tokio::test]
    async fn empty_reply_serves_generic_fallback() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer.expect_generate().returning(|_| Err(AnalysisError::EmptyResponse));

        let analysis = analyze_task(&analyzer, "Auto-create invoices", None, None).await;
        assert_eq!(analysis.difficulty, Difficulty::Moderate);
        assert_eq!(analysis.estimated_time, "1-2 weeks");
        assert_eq!(analysis, fallback_analysis(FallbackReason::Unexpected));
    }

    #[tokio::test]
    async fn prompt_carries_task_details() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer
            .expect_generate()
            .withf(|prompt| prompt.contains("Task: Weekly reports") && prompt.contains("Category: Marketing"))
            .returning(|_| Ok(r#"{"difficulty":"Easy","estimatedTime":"1 day"}"#.to_string()));

        let analysis = analyze_task(&analyzer, "Weekly reports", Some("Pull numbers"), Some("Marketing")).await;
        assert_eq!(analysis.difficulty, Difficulty::Easy);
        assert_eq!(analysis.estimated_time, "1 day");
    }
}
