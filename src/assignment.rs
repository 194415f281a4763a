// Import necessary crates and modules
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::submission::{null_as_default, Submission};

/// An assignment in one course, from the student's point of view.
///
/// Straight off the assignments endpoint, `grader_id`, `score` and
/// `workflow_state` hold their fetch-time defaults (zero and empty);
/// `merge_latest_submissions` overwrites them with the student's
/// maximum-attempt submission when one exists. Records are snapshots for
/// one run and are never written back.
///
/// Fields:
/// - `id`: Unique identifier of the assignment within the course.
/// - `name`: Display name of the assignment.
/// - `has_submitted_submissions`: Whether anything was ever submitted.
/// - `due_at`, `lock_at`, `unlock_at`: Scheduling timestamps; Canvas sends
///   `null` for dates a teacher never set.
/// - `grader_id`: Grader identity after a merge; zero when ungraded,
///   negative for automatic grading.
/// - `score`: Points awarded to the latest attempt, after a merge.
/// - `points_possible`: Maximum points for the assignment.
/// - `workflow_state`: Workflow state of the latest attempt, after a merge.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Assignment {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_submitted_submissions: bool,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lock_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub unlock_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grader_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points_possible: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub workflow_state: String,
}

impl Assignment {
    /// Label for who graded this assignment, derived from `grader_id`:
    /// zero means not graded, positive ids are teachers, negative ids mark
    /// automatic grading.
    pub fn graded_by(&self) -> &'static str {
        if self.grader_id == 0 {
            "not graded"
        } else if self.grader_id > 0 {
            "teacher"
        } else {
            "automatic"
        }
    }
}

/// Merges each assignment's latest submission into the assignment record.
///
/// For every assignment, the submissions whose `assignment_id` matches are
/// reduced to the maximum-`attempt` entry, and that entry's `score`,
/// `grader_id` and `workflow_state` overwrite the assignment's. Assignments
/// without a matching submission keep their fetch-time defaults. The list's
/// length and order never change, and submissions referencing unknown
/// assignment ids are ignored.
pub fn merge_latest_submissions(assignments: &mut [Assignment], submissions: &[Submission]) {
    for assignment in assignments.iter_mut() {
        // max_by_key keeps the last maximal element, so equal attempts
        // resolve to the submission appearing last in fetch order.
        let latest = submissions
            .iter()
            .filter(|submission| submission.assignment_id == assignment.id)
            .max_by_key(|submission| submission.attempt);

        if let Some(submission) = latest {
            assignment.score = submission.score;
            assignment.grader_id = submission.grader_id;
            assignment.workflow_state = submission.workflow_state.clone();
        }
    }
}

/// Reduces a merged assignment list to those still in play for the student.
///
/// Keeps an assignment when it is currently open (`unlock_at` has passed and
/// `lock_at` has not), is worth points, and is not already graded at full
/// credit. Assignments with no lock date are dropped and assignments with no
/// unlock date count as unlocked. The cutoff instant is sampled once for the
/// whole pass.
pub fn filter_relevant(assignments: Vec<Assignment>) -> Vec<Assignment> {
    filter_relevant_at(assignments, Utc::now())
}

/// `filter_relevant` against an explicit cutoff instant.
pub fn filter_relevant_at(
    assignments: Vec<Assignment>,
    now: DateTime<Utc>,
) -> Vec<Assignment> {
    assignments
        .into_iter()
        .filter(|a| a.lock_at.map_or(false, |lock_at| lock_at > now))
        .filter(|a| a.unlock_at.map_or(true, |unlock_at| unlock_at < now))
        .filter(|a| a.points_possible > 0.0)
        .filter(|a| a.workflow_state != "graded" || a.score < a.points_possible)
        .collect()
}
