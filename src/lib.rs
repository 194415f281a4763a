//! # Canvas Observer Report
//!
//! This Rust library backs a personal reporting client for the Canvas Learning Management System (LMS) API.
//! Authenticated as an observer account, it resolves the specific student the account observes, retrieves
//! the student's enrolled courses, merges assignments with the student's latest submissions per course, and
//! reduces the result to the assignments still in play. The library utilizes the `reqwest` crate for
//! blocking HTTP requests and follows Canvas's `Link` header pagination.
//!
//! ## Core Features
//!
//! - **Authentication and Configuration:** Loads the API token and target student name from the
//!   environment or the system keyring, failing fast when a required setting is absent.
//! - **Identity Resolution:** Resolves the authenticated observer to the observed student by exact
//!   display-name match.
//! - **Assignments and Submissions Handling:** Joins the assignments and submissions endpoints into
//!   per-assignment grading state, keyed by assignment id with the maximum attempt winning.
//! - **Relevance Filtering and Rendering:** Keeps only currently-open, point-bearing, not-fully-graded
//!   assignments and renders one styled table per course.
//!
//! ## Usage
//!
//! The binary drives a full run; programmatic callers compose the same pieces:
//!
//! ```no_run
//! use canvas_observer_report::{canvas, filter_relevant, CanvasClient, ReportConfig};
//!
//! let client = CanvasClient::new(ReportConfig::load()?);
//! let observer = canvas::fetch_current_user(&client)?;
//! let student = canvas::resolve_observee_by_name(&client, observer.id, "First Last")?;
//! for course in canvas::fetch_courses_for_user(&client, student.id)? {
//!     let merged = canvas::fetch_assignments_for_user_and_course(&client, student.id, course.id)?;
//!     let relevant = filter_relevant(merged);
//!     canvas_observer_report::render_course(&course, &relevant);
//! }
//! # Ok::<(), canvas_observer_report::ReportError>(())
//! ```
pub mod assignment; // Assignment records, the submission merge and the relevance filter.
pub mod canvas; // Typed fetch operations against the Canvas API.
pub mod connection; // HTTP transport and Link-header pagination.
pub mod course; // Canvas course snapshots.
pub mod credentials; // Loading of the token, student name and base URL.
pub mod error; // The run-terminating error taxonomy.
pub mod report; // Console rendering of the per-course tables.
pub mod submission; // Submission attempts for assignments.
pub mod user; // Users and observee resolution.

// Exports key structures for external use.
pub use assignment::{filter_relevant, filter_relevant_at, merge_latest_submissions, Assignment};
pub use connection::CanvasClient;
pub use course::Course;
pub use credentials::ReportConfig;
pub use error::ReportError;
pub use report::render_course;
pub use submission::Submission;
pub use user::{find_observee_by_name, User};
