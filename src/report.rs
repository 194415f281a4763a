// Console rendering of the per-course report.
use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::assignment::Assignment;
use crate::course::Course;

const HEADERS: [&str; 7] = [
    "Name",
    "Submitted",
    "Due At",
    "Lock At",
    "Score",
    "State",
    "Graded by",
];

const RULE_WIDTH: usize = 100;

/// Prints the ruled section header and assignment table for one course.
///
/// Expects the filtered assignment list already sorted by `lock_at`; rows
/// are emitted in the given order. A missing submission and a score below
/// the possible points are flagged in red. Pure presentation: records are
/// read, never changed, and the exact layout carries no stability contract.
pub fn render_course(course: &Course, assignments: &[Assignment]) {
    println!();
    println!("{}", rule(&course.name));

    if assignments.is_empty() {
        println!("nothing still in play");
        return;
    }

    let rows: Vec<[String; 7]> = assignments.iter().map(row_cells).collect();

    let mut widths: [usize; 7] = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_line = HEADERS
        .iter()
        .zip(&widths)
        .map(|(header, width)| format!("{:<1$}", header, *width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.chars().count()));

    for (assignment, cells) in assignments.iter().zip(&rows) {
        let line = cells
            .iter()
            .enumerate()
            .zip(&widths)
            .map(|((column, cell), width)| {
                // Pad the plain cell first; color codes add no width.
                let padded = format!("{:<1$}", cell, *width);
                match column {
                    1 if !assignment.has_submitted_submissions => padded.red().to_string(),
                    4 if assignment.score < assignment.points_possible => {
                        padded.red().to_string()
                    }
                    _ => padded,
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

fn row_cells(assignment: &Assignment) -> [String; 7] {
    [
        assignment.name.clone(),
        if assignment.has_submitted_submissions {
            "yes".to_string()
        } else {
            "no".to_string()
        },
        timestamp_cell(assignment.due_at),
        timestamp_cell(assignment.lock_at),
        score_cell(assignment),
        assignment.workflow_state.clone(),
        assignment.graded_by().to_string(),
    ]
}

fn timestamp_cell(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(timestamp) => timestamp.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

fn score_cell(assignment: &Assignment) -> String {
    format!("{}/{}", assignment.score, assignment.points_possible)
}

/// A full-width section rule carrying the course name, in the manner of a
/// terminal ruler line.
fn rule(title: &str) -> String {
    let prefix = format!("── {} ", title);
    let remainder = RULE_WIDTH.saturating_sub(prefix.chars().count());
    format!("{}{}", prefix, "─".repeat(remainder))
}
