use crate::models::task_models::Task;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const TOP_TASK_LIMIT: usize = 10;
/// Rough weekly hours saved per automated workflow.
pub const HOURS_SAVED_PER_TASK: f64 = 4.3;

/// Priority score: higher impact and lower effort both push it up. Range [2, 10].
pub fn calculate_score(impact: i32, effort: i32) -> i32 {
    impact + (6 - effort)
}

pub fn is_valid_rating(value: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&value)
}

/// Tasks ordered by score, best first. Ties keep their submitted order.
pub fn rank_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut ranked = tasks.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

pub fn top_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut ranked = rank_tasks(tasks);
    ranked.truncate(limit);
    ranked
}

pub fn estimated_weekly_hours_saved(task_count: usize) -> f64 {
    task_count as f64 * HOURS_SAVED_PER_TASK
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::calculate_score;
    use crate::models::task_models::Task;

    pub fn task(name: &str, impact: i32, effort: i32) -> Task {
        Task {
            id: None,
            name: name.to_string(),
            category: "Admin & Operations".to_string(),
            impact,
            effort,
            score: calculate_score(impact, effort),
            description: None,
            analysis: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::task;
    use super::*;

    #[test]
    fn score_stays_within_bounds_for_every_rating() {
        for impact in MIN_RATING..=MAX_RATING {
            for effort in MIN_RATING..=MAX_RATING {
                let score = calculate_score(impact, effort);
                assert_eq!(score, impact + 6 - effort);
                assert!((2..=10).contains(&score), "impact {impact} effort {effort} gave {score}");
            }
        }
    }

    #[test]
    fn best_task_ranks_before_worst() {
        let tasks = vec![task("slow", 1, 5), task("quick win", 5, 1)];
        let ranked = rank_tasks(&tasks);
        assert_eq!(ranked[0].name, "quick win");
        assert_eq!(ranked[0].score, 10);
        assert_eq!(ranked[1].score, 2);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let tasks = vec![task("a", 3, 3), task("b", 4, 2), task("c", 3, 3), task("d", 2, 2)];
        let names: Vec<String> = rank_tasks(&tasks).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn shortlist_is_capped() {
        let tasks: Vec<Task> = (0..14).map(|i| task(&format!("t{i}"), 1 + i % 5, 3)).collect();
        assert_eq!(top_tasks(&tasks, TOP_TASK_LIMIT).len(), 10);
        assert_eq!(top_tasks(&tasks[..4], TOP_TASK_LIMIT).len(), 4);
    }

    #[test]
    fn rating_bounds() {
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(0));
        assert!(!is_valid_rating(6));
    }
}
