// Import necessary crates and modules
use serde::{Deserialize, Deserializer};

/// One submission attempt for an assignment, as returned by the course
/// submissions endpoint.
///
/// Canvas reports up to one submission per attempt; only the entry with the
/// highest `attempt` is authoritative for grading state. Ungraded entries
/// carry `null` for score and grader, which deserialize to the zero
/// defaults here.
///
/// Fields:
/// - `assignment_id`: The assignment this submission belongs to.
/// - `grader_id`: Grader identity; zero when ungraded, negative for
///   automatic grading.
/// - `score`: Points awarded to this attempt.
/// - `attempt`: Attempt number, starting at 1; zero when unsubmitted.
/// - `workflow_state`: Canvas workflow state, e.g. "submitted" or "graded".
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Submission {
    pub assignment_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grader_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attempt: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub workflow_state: String,
}

/// Deserializes a nullable JSON field into its type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graded_submission_deserializes() {
        let submission: Submission = serde_json::from_str(
            r#"{
                "assignment_id": 42,
                "grader_id": 7,
                "score": 8.5,
                "attempt": 2,
                "workflow_state": "graded"
            }"#,
        )
        .unwrap();

        assert_eq!(submission.assignment_id, 42);
        assert_eq!(submission.grader_id, 7);
        assert_eq!(submission.score, 8.5);
        assert_eq!(submission.attempt, 2);
        assert_eq!(submission.workflow_state, "graded");
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let submission: Submission = serde_json::from_str(
            r#"{
                "assignment_id": 42,
                "grader_id": null,
                "score": null,
                "attempt": null,
                "workflow_state": "unsubmitted"
            }"#,
        )
        .unwrap();

        assert_eq!(submission.grader_id, 0);
        assert_eq!(submission.score, 0.0);
        assert_eq!(submission.attempt, 0);
    }
}
