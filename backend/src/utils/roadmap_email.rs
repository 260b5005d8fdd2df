use crate::models::task_models::{Difficulty, Task};
use crate::utils::scoring::{estimated_weekly_hours_saved, rank_tasks, top_tasks, TOP_TASK_LIMIT};
use crate::utils::timeline::calculate_timeline;

pub const ROADMAP_SUBJECT: &str = "🎯 Your Personalized Automation Roadmap";
const BOOKING_URL: &str = "https://cal.com/sam-barksdale/discovery";

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// First two sentences of a summary, always ending in a single period.
pub fn leading_sentences(text: &str) -> String {
    let joined = text.split('.').take(2).collect::<Vec<_>>().join(".");
    let trimmed = joined.trim().trim_end_matches('.').trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}.", trimmed)
    }
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "difficulty-easy",
        Difficulty::Moderate => "difficulty-moderate",
        Difficulty::Hard => "difficulty-hard",
    }
}

/// Renders the full roadmap email. Every user-supplied field is escaped.
pub fn render_roadmap_email(tasks: &[Task]) -> String {
    let ranked = rank_tasks(tasks);
    let quick_wins = top_tasks(tasks, TOP_TASK_LIMIT).len();
    let timeline = calculate_timeline(tasks);

    let mut html = String::with_capacity(16 * 1024);
    html.push_str(EMAIL_HEAD);

    html.push_str(
        r#"<div class="container">
  <div class="header">
    <h1>🎯 Your Automation Opportunity Matrix</h1>
    <p>Here's your personalized automation roadmap</p>
  </div>
  <div class="content">
    <table class="stats-table"><tr>"#,
    );
    html.push_str(&format!(
        r#"
      <td class="stat-cell"><div class="stat-value">{:.1}+ hrs</div><div class="stat-label">Potential weekly savings</div></td>
      <td class="stat-cell"><div class="stat-value">{}</div><div class="stat-label">Workflows mapped</div></td>
      <td class="stat-cell"><div class="stat-value">{}</div><div class="stat-label">Quick wins identified</div></td>
    </tr></table>
    <div class="section-title">Your Workflows ({})</div>"#,
        estimated_weekly_hours_saved(tasks.len()),
        tasks.len(),
        quick_wins,
        ranked.len()
    ));

    for (index, task) in ranked.iter().enumerate() {
        render_task_card(&mut html, index + 1, task);
    }
    html.push_str("\n  </div>");

    html.push_str(&format!(
        r#"
  <div class="content">
    <div class="timeline-section">
      <div class="timeline-title">Project Timeline</div>
      <table class="timeline-table">
        <thead><tr><th style="width: 30%;">Phase</th><th style="width: 50%;">Description</th><th style="width: 20%;">Duration</th></tr></thead>
        <tbody>
          <tr><td><span class="phase-number">1.</span> Discovery &amp; Planning</td><td>Review your current workflows, confirm system access requirements, and finalize automation specifications.</td><td>{}</td></tr>
          <tr><td><span class="phase-number">2.</span> Workflow Design &amp; Development</td><td>Design automation logic, build custom integrations, and develop the workflows mapped in your matrix.</td><td>{}</td></tr>
          <tr><td><span class="phase-number">3.</span> Integration &amp; Testing</td><td>Connect automations to your existing systems, test all triggers and actions, and refine based on results.</td><td>{}</td></tr>
          <tr><td><span class="phase-number">4.</span> Handover &amp; Training</td><td>Deliver complete documentation, provide walkthrough training, and ensure your team can manage the automations.</td><td>{}</td></tr>
        </tbody>
      </table>
      <div class="total-duration"><strong>Total Duration:</strong> {}</div>
    </div>
  </div>"#,
        timeline.discovery, timeline.development, timeline.integration, timeline.handover, timeline.total
    ));

    html.push_str(&format!(
        r#"
  <div class="content">
    <div class="cta">
      <h2>Ready to Automate Your Business?</h2>
      <p>Let Nexark implement your top automation opportunities. We'll handle the technical setup while you focus on growing your business.</p>
      <a href="{}" class="cta-button">Book Free Systems Audit</a>
    </div>
  </div>
  <div class="footer">
    <p><strong>Nexark</strong> - Engineering Reality, Together</p>
    <p>Save 5-20 hours per week • No technical skills required • Done-for-you automation</p>
  </div>
</div>
</body>
</html>
"#,
        BOOKING_URL
    ));

    html
}

fn render_task_card(html: &mut String, rank: usize, task: &Task) {
    html.push_str(&format!(
        r#"
    <div class="task">
      <div class="task-header">
        <span class="task-rank">#{}</span>
        <div>
          <div class="task-name">{}</div>
          <div class="task-category">{}</div>
        </div>
      </div>
      <div class="task-metrics">Impact: {} &nbsp;|&nbsp; Effort: {} &nbsp;|&nbsp; <span class="task-score">Score: {}</span></div>"#,
        rank,
        escape_html(&task.name),
        escape_html(&task.category),
        task.impact,
        task.effort,
        task.score
    ));

    if let Some(description) = task.description.as_deref().filter(|d| !d.trim().is_empty()) {
        html.push_str(&format!(
            r#"
      <div class="task-description"><div class="task-description-label">Description</div>{}</div>"#,
            escape_html(description)
        ));
    }

    if let Some(analysis) = &task.analysis {
        let summary = leading_sentences(&analysis.impact_summary);
        if !summary.is_empty() {
            html.push_str(&format!(r#"
      <div class="task-summary">{}</div>"#, escape_html(&summary)));
        }
        html.push_str(&format!(
            r#"
      <div class="ai-analysis">
        <div class="ai-analysis-title">📊 AI Analysis</div>
        <div class="analysis-section"><div class="analysis-label">Impact:</div><div class="analysis-text">{}</div></div>
        <div class="analysis-section"><div class="analysis-label">Effort:</div><div class="analysis-text">{}</div></div>
        <div class="analysis-section"><div class="analysis-label">Difficulty:</div><div><span class="difficulty-badge {}">{}</span></div></div>
        <div class="analysis-section"><div class="analysis-label">Est. Time:</div><div class="analysis-text">{}</div></div>
      </div>"#,
            escape_html(&analysis.impact_summary),
            escape_html(&analysis.effort_summary),
            difficulty_class(analysis.difficulty),
            analysis.difficulty.as_str(),
            escape_html(&analysis.estimated_time)
        ));
    }

    html.push_str("\n    </div>");
}

const EMAIL_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Your Personalized Automation Roadmap</title>
<style>
  body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen', 'Ubuntu', sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 0; background-color: #f5f5f5; }
  .container { max-width: 600px; margin: 0 auto; background-color: #ffffff; }
  .header { background: linear-gradient(135deg, #6366F1 0%, #A855F7 100%); color: white; padding: 40px 30px; text-align: center; }
  .header h1 { margin: 0 0 10px 0; font-size: 28px; font-weight: bold; }
  .header p { margin: 0; opacity: 0.95; font-size: 16px; }
  .stats-table { width: 100%; margin: 30px 0; border-collapse: collapse; }
  .stat-cell { background: #f8f9fa; padding: 20px; text-align: center; border: 8px solid white; }
  .stat-value { font-size: 32px; font-weight: bold; color: #6366F1; margin-bottom: 8px; }
  .stat-label { font-size: 14px; color: #666; }
  .content { padding: 30px; }
  .section-title { font-size: 24px; font-weight: bold; margin-bottom: 20px; color: #030305; }
  .task { background: white; border: 2px solid #e5e7eb; border-radius: 12px; padding: 24px; margin-bottom: 20px; }
  .task-header { display: flex; align-items: center; margin-bottom: 12px; }
  .task-rank { display: inline-block; background: #6366F1; color: white; width: 36px; height: 36px; border-radius: 50%; text-align: center; line-height: 36px; font-weight: bold; margin-right: 12px; font-size: 16px; }
  .task-name { font-weight: bold; font-size: 20px; color: #030305; }
  .task-category { color: #6366F1; font-size: 14px; font-weight: 600; margin: 8px 0; text-transform: uppercase; letter-spacing: 0.5px; }
  .task-metrics { font-size: 14px; color: #666; margin: 12px 0; padding: 12px; background: #f8f9fa; border-radius: 6px; }
  .task-score { color: #6366F1; font-weight: bold; font-size: 16px; }
  .task-description { color: #333; font-size: 14px; line-height: 1.6; margin: 16px 0; padding: 12px; background: #f0f4ff; border-radius: 6px; border-left: 4px solid #6366F1; }
  .task-description-label { font-weight: bold; color: #6366F1; font-size: 12px; text-transform: uppercase; letter-spacing: 0.5px; margin-bottom: 8px; }
  .task-summary { color: #555; font-size: 15px; line-height: 1.6; margin: 16px 0; padding: 12px; background: #f8f9fa; border-radius: 6px; font-style: italic; }
  .difficulty-badge { display: inline-block; padding: 4px 12px; border-radius: 20px; font-size: 12px; font-weight: bold; }
  .difficulty-easy { background: #d1fae5; color: #065f46; }
  .difficulty-moderate { background: #fef3c7; color: #92400e; }
  .difficulty-hard { background: #fee2e2; color: #991b1b; }
  .cta { background: linear-gradient(135deg, #6366F1 0%, #A855F7 100%); color: white; text-align: center; padding: 30px; border-radius: 12px; margin: 30px 0; }
  .cta h2 { margin: 0 0 12px 0; font-size: 24px; }
  .cta p { margin: 0 0 20px 0; opacity: 0.9; }
  .cta-button { display: inline-block; background: white; color: #6366F1; padding: 14px 32px; border-radius: 8px; text-decoration: none; font-weight: bold; font-size: 16px; }
  .timeline-section { margin: 40px 0; }
  .timeline-title { font-size: 28px; font-weight: bold; margin-bottom: 24px; color: #030305; text-transform: uppercase; letter-spacing: 1px; }
  .timeline-table { width: 100%; border-collapse: collapse; margin: 20px 0; background: white; border: 2px solid #e5e7eb; }
  .timeline-table th { background: #f8f9fa; padding: 16px; text-align: left; font-weight: bold; font-size: 14px; color: #030305; border-bottom: 2px solid #e5e7eb; text-transform: uppercase; letter-spacing: 0.5px; }
  .timeline-table td { padding: 16px; border-bottom: 1px solid #e5e7eb; color: #333; font-size: 14px; line-height: 1.6; }
  .timeline-table tr:last-child td { border-bottom: none; }
  .phase-number { font-weight: bold; color: #6366F1; }
  .total-duration { font-weight: bold; font-size: 16px; color: #030305; margin-top: 20px; padding: 16px; background: #f0f4ff; border-left: 4px solid #6366F1; border-radius: 6px; }
  .footer { text-align: center; color: #666; font-size: 14px; padding: 20px 30px 40px; border-top: 1px solid #e5e7eb; }
  .ai-analysis { margin-top: 20px; padding-top: 20px; border-top: 1px dashed #e5e7eb; }
  .ai-analysis-title { font-weight: bold; font-size: 14px; color: #6366F1; margin-bottom: 12px; }
  .analysis-section { margin-bottom: 12px; }
  .analysis-label { font-weight: bold; color: #030305; font-size: 12px; text-transform: uppercase; margin-bottom: 4px; }
  .analysis-text { color: #555; font-size: 14px; line-height: 1.5; }
</style>
</head>
<body>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task_models::TaskAnalysis;
    use crate::utils::scoring::test_support::task;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#039;y&#039;&lt;/script&gt;"
        );
    }

    #[test]
    fn leading_sentences_keeps_two() {
        assert_eq!(leading_sentences("Saves time. Cuts errors. Pays off fast."), "Saves time. Cuts errors.");
        assert_eq!(leading_sentences("Saves time."), "Saves time.");
        assert_eq!(leading_sentences("No period"), "No period.");
        assert_eq!(leading_sentences(""), "");
    }

    #[test]
    fn email_ranks_tasks_and_escapes_user_text() {
        let mut risky = task("<b>Send invoices</b>", 1, 5);
        risky.description = Some("Uses \"Stripe\" & QuickBooks".to_string());
        let mut best = task("Auto-tag leads", 5, 1);
        best.analysis = Some(TaskAnalysis {
            impact_summary: "Frees the sales team. Leads never go cold. Extra.".to_string(),
            effort_summary: "A CRM webhook.".to_string(),
            difficulty: Difficulty::Easy,
            estimated_time: "1-2 days".to_string(),
        });

        let html = render_roadmap_email(&[risky, best]);

        assert!(html.contains("&lt;b&gt;Send invoices&lt;/b&gt;"));
        assert!(!html.contains("<b>Send invoices</b>"));
        assert!(html.contains("Uses &quot;Stripe&quot; &amp; QuickBooks"));
        assert!(html.contains("difficulty-badge difficulty-easy"));
        assert!(html.contains("Frees the sales team. Leads never go cold."));
        assert!(html.contains("8.6+ hrs"));
        assert!(html.contains("Your Workflows (2)"));

        let best_at = html.find("Auto-tag leads").unwrap();
        let worst_at = html.find("&lt;b&gt;Send invoices").unwrap();
        assert!(best_at < worst_at, "highest score must be ranked first");
        assert!(html.contains("#1</span>"));
        assert!(html.contains("Total Duration:</strong>"));
    }
}
