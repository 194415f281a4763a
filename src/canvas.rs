// Typed operations against the Canvas REST API, composed from the
// connection layer. All fetches are sequential reads; nothing here writes
// back to Canvas.
use log::info;

use crate::assignment::{merge_latest_submissions, Assignment};
use crate::connection::CanvasClient;
use crate::course::Course;
use crate::error::ReportError;
use crate::submission::Submission;
use crate::user::{find_observee_by_name, User};

/// Fetches the authenticated caller. Single resource, no pagination.
pub fn fetch_current_user(client: &CanvasClient) -> Result<User, ReportError> {
    client.fetch_one(&client.url("users/self"))
}

/// Fetches every user observed by `user_id`, across all pages.
pub fn fetch_observees(client: &CanvasClient, user_id: u64) -> Result<Vec<User>, ReportError> {
    client.fetch_paginated(&client.url(&format!("users/{}/observees?per_page=100", user_id)))
}

/// Resolves the observer's observee whose display name equals `name`.
///
/// Fetches the observee list and delegates the exact-match selection to
/// `find_observee_by_name`; zero or multiple matches surface as the
/// resolution errors defined there.
pub fn resolve_observee_by_name(
    client: &CanvasClient,
    observer_id: u64,
    name: &str,
) -> Result<User, ReportError> {
    let observees = fetch_observees(client, observer_id)?;
    find_observee_by_name(&observees, name)
}

/// Fetches the courses visible to `user_id`, in server order.
pub fn fetch_courses_for_user(
    client: &CanvasClient,
    user_id: u64,
) -> Result<Vec<Course>, ReportError> {
    client.fetch_paginated(&client.url(&format!("users/{}/courses?per_page=100", user_id)))
}

/// Fetches one student's submissions in a course, across all attempts.
///
/// The `student_ids[]` query parameter scopes the course-wide submissions
/// endpoint down to the single observed student.
pub fn fetch_submissions_for_student(
    client: &CanvasClient,
    course_id: u64,
    user_id: u64,
) -> Result<Vec<Submission>, ReportError> {
    client.fetch_paginated(&client.url(&format!(
        "courses/{}/students/submissions?student_ids[]={}&per_page=100",
        course_id, user_id
    )))
}

/// Fetches the assignments of one course for one student, merged with the
/// student's latest submissions.
///
/// The assignments endpoint establishes the base list and its order; the
/// submissions endpoint is fetched separately and merged destructively onto
/// that list, so the result's length and order always equal the base
/// list's. A failure in either fetch aborts the whole operation.
pub fn fetch_assignments_for_user_and_course(
    client: &CanvasClient,
    user_id: u64,
    course_id: u64,
) -> Result<Vec<Assignment>, ReportError> {
    let mut assignments: Vec<Assignment> = client.fetch_paginated(&client.url(&format!(
        "users/{}/courses/{}/assignments?per_page=100",
        user_id, course_id
    )))?;
    let submissions = fetch_submissions_for_student(client, course_id, user_id)?;
    info!(
        "course {}: {} assignments, {} submissions",
        course_id,
        assignments.len(),
        submissions.len()
    );

    merge_latest_submissions(&mut assignments, &submissions);
    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::credentials::ReportConfig;

    /// Answers the assignments request and then the submissions request
    /// with the given bodies, no pagination.
    fn serve_course(assignments_body: &str, submissions_body: &str) -> CanvasClient {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let base = format!("http://{}", server.server_addr().to_ip().unwrap());
        let bodies = vec![assignments_body.to_string(), submissions_body.to_string()];

        thread::spawn(move || {
            for body in bodies {
                let request = match server.recv() {
                    Ok(request) => request,
                    Err(_) => return,
                };
                let _ = request.respond(tiny_http::Response::from_string(body));
            }
        });

        CanvasClient::new(ReportConfig {
            base_url: base,
            access_token: "test-token".to_string(),
            student_name: "First Last".to_string(),
        })
    }

    #[test]
    fn assignments_and_submissions_merge_into_one_list() {
        let client = serve_course(
            r#"[
                {"id": 1, "name": "Quiz", "points_possible": 10.0},
                {"id": 2, "name": "Essay", "points_possible": 20.0}
            ]"#,
            r#"[
                {"assignment_id": 1, "attempt": 1, "score": 4.0, "grader_id": 9, "workflow_state": "graded"},
                {"assignment_id": 1, "attempt": 2, "score": 7.5, "grader_id": 9, "workflow_state": "graded"},
                {"assignment_id": 99, "attempt": 1, "score": 1.0, "grader_id": 9, "workflow_state": "graded"}
            ]"#,
        );

        let assignments = fetch_assignments_for_user_and_course(&client, 5, 77).unwrap();

        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].id, 1);
        assert_eq!(assignments[0].score, 7.5);
        assert_eq!(assignments[0].grader_id, 9);
        assert_eq!(assignments[0].workflow_state, "graded");
        // No submission for the essay; fetch-time defaults survive.
        assert_eq!(assignments[1].id, 2);
        assert_eq!(assignments[1].score, 0.0);
        assert_eq!(assignments[1].workflow_state, "");
    }
}
