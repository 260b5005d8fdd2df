use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::task_models::Task;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid number regex"));

/// Days assumed for a task whose estimate carries no number at all.
const DEFAULT_TASK_DAYS: f64 = 1.5;
const WORKDAYS_PER_WEEK: f64 = 5.0;
const WORK_HOURS_PER_DAY: f64 = 8.0;

/// Phase durations for a roadmap, in business days.
///
/// Estimates are client text, so values saturate at `u64::MAX` instead of
/// overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineBreakdown {
    pub discovery_days: u64,
    pub development_days: u64,
    pub integration_days: u64,
    pub handover_days: u64,
    pub total_min_days: u64,
    pub total_max_days: u64,
    pub total_weeks: u64,
}

/// The same breakdown rendered for the roadmap email.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub discovery: String,
    pub development: String,
    pub integration: String,
    pub handover: String,
    pub total: String,
}

/// Converts a free-text estimate such as "1-2 weeks" or "4 hours" to days.
///
/// Up to two numbers are read and averaged; the unit is picked by keyword,
/// checking week, then day, then hour. A bare number counts as days.
pub fn estimate_to_days(estimate: &str) -> f64 {
    let numbers: Vec<f64> = NUMBER_RE
        .find_iter(estimate)
        .take(2)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    let amount = match numbers.as_slice() {
        [] => return DEFAULT_TASK_DAYS,
        [single] => *single,
        [first, second, ..] => (first + second) / 2.0,
    };

    let lower = estimate.to_lowercase();
    if lower.contains("week") {
        amount * WORKDAYS_PER_WEEK
    } else if lower.contains("day") {
        amount
    } else if lower.contains("hour") {
        amount / WORK_HOURS_PER_DAY
    } else {
        amount
    }
}

/// Multiplier for overlapping work as the number of tasks grows.
pub fn parallelization_factor(task_count: usize) -> f64 {
    match task_count {
        0..=3 => 1.0,
        4..=6 => 0.7,
        7..=10 => 0.6,
        _ => 0.5,
    }
}

pub fn calculate_breakdown(tasks: &[Task]) -> TimelineBreakdown {
    let raw_days: f64 = tasks
        .iter()
        .map(|task| {
            let estimate = task
                .analysis
                .as_ref()
                .map(|a| a.estimated_time.as_str())
                .unwrap_or("");
            estimate_to_days(estimate)
        })
        .sum();

    let count = tasks.len() as f64;
    let development = (raw_days * parallelization_factor(tasks.len())).ceil();
    let discovery = (count / 5.0).ceil().max(1.0);
    let integration = (development * 0.3).ceil().max(1.0);
    let handover = (count / 6.0).ceil().max(1.0);

    // f64 to integer casts saturate, infinity included
    let total_min = discovery + development + integration + handover;
    let total_max = (total_min * 1.2).ceil();
    let total_weeks = (total_max / WORKDAYS_PER_WEEK).ceil();

    let discovery_days = discovery as u64;
    let development_days = development as u64;
    let integration_days = integration as u64;
    let handover_days = handover as u64;
    let total_min_days = total_min as u64;
    let total_max_days = total_max as u64;
    let total_weeks = total_weeks as u64;

    TimelineBreakdown {
        discovery_days,
        development_days,
        integration_days,
        handover_days,
        total_min_days,
        total_max_days,
        total_weeks,
    }
}

pub fn calculate_timeline(tasks: &[Task]) -> Timeline {
    let b = calculate_breakdown(tasks);
    Timeline {
        discovery: format_days(b.discovery_days),
        development: format_days(b.development_days),
        integration: format_days(b.integration_days),
        handover: format_days(b.handover_days),
        total: format!(
            "{}–{} business days ({} week{})",
            b.total_min_days,
            b.total_max_days,
            b.total_weeks,
            if b.total_weeks > 1 { "s" } else { "" }
        ),
    }
}

fn format_days(days: u64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task_models::{Difficulty, TaskAnalysis};
    use crate::utils::scoring::test_support::task;

    fn estimated(name: &str, estimate: &str) -> Task {
        let mut t = task(name, 3, 3);
        t.analysis = Some(TaskAnalysis {
            impact_summary: String::new(),
            effort_summary: String::new(),
            difficulty: Difficulty::Moderate,
            estimated_time: estimate.to_string(),
        });
        t
    }

    #[test]
    fn estimates_convert_by_unit() {
        assert_eq!(estimate_to_days("1-2 weeks"), 7.5);
        assert_eq!(estimate_to_days("3 days"), 3.0);
        assert_eq!(estimate_to_days("4 Hours"), 0.5);
        assert_eq!(estimate_to_days("2-4"), 3.0);
        assert_eq!(estimate_to_days("2 to 4 to 40 days"), 3.0);
        assert_eq!(estimate_to_days("a while"), 1.5);
        assert_eq!(estimate_to_days(""), 1.5);
    }

    #[test]
    fn parallelization_steps() {
        assert_eq!(parallelization_factor(3), 1.0);
        assert_eq!(parallelization_factor(4), 0.7);
        assert_eq!(parallelization_factor(7), 0.6);
        assert_eq!(parallelization_factor(10), 0.6);
        assert_eq!(parallelization_factor(11), 0.5);
    }

    #[test]
    fn empty_task_list_still_has_minimum_phases() {
        let b = calculate_breakdown(&[]);
        assert_eq!(b.discovery_days, 1);
        assert_eq!(b.development_days, 0);
        assert_eq!(b.integration_days, 1);
        assert_eq!(b.handover_days, 1);
        assert_eq!(b.total_min_days, 3);
        assert_eq!(b.total_max_days, 4);
        assert_eq!(b.total_weeks, 1);
    }

    #[test]
    fn discovery_grows_with_task_count() {
        let tasks: Vec<Task> = (0..11).map(|i| task(&format!("t{i}"), 3, 3)).collect();
        let b = calculate_breakdown(&tasks);
        assert_eq!(b.discovery_days, 3);
        assert_eq!(b.handover_days, 2);
        // 11 tasks without estimates: 16.5 raw days at 0.5x
        assert_eq!(b.development_days, 9);
    }

    #[test]
    fn timeline_strings() {
        let tasks = vec![estimated("crm", "1-2 weeks"), estimated("invoices", "3 days")];
        let timeline = calculate_timeline(&tasks);
        assert_eq!(timeline.discovery, "1 day");
        assert_eq!(timeline.development, "11 days");
        assert_eq!(timeline.integration, "4 days");
        assert_eq!(timeline.handover, "1 day");
        assert_eq!(timeline.total, "17–21 business days (5 weeks)");

        let single = calculate_timeline(&[estimated("tag leads", "2 hours")]);
        assert_eq!(single.development, "1 day");
        assert_eq!(single.total, "4–5 business days (1 week)");
    }

    #[test]
    fn huge_estimates_saturate_instead_of_overflowing() {
        let b = calculate_breakdown(&[estimated("forever", "1000000000 weeks")]);
        assert_eq!(b.development_days, 5_000_000_000);
        assert_eq!(b.total_min_days, 6_500_000_002);

        let digits = "9".repeat(400);
        let b = calculate_breakdown(&[
            estimated("a", &format!("{digits} weeks")),
            estimated("b", &format!("{digits} days")),
        ]);
        assert_eq!(b.development_days, u64::MAX);
        assert_eq!(b.total_max_days, u64::MAX);
        assert_eq!(b.total_weeks, u64::MAX);

        let timeline = calculate_timeline(&[estimated("forever", "1000000000 weeks")]);
        assert!(timeline.total.starts_with("6500000002–"));
    }
}
