use std::process::exit;

use log::info;

use canvas_observer_report::{canvas, filter_relevant, render_course, CanvasClient, ReportConfig};

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("{}", error);
        exit(1);
    }
}

/// One full report run: resolve the observed student, then fetch, merge,
/// filter, sort and render each course in sequence. Courses are not
/// isolated from each other; the first failure anywhere ends the run.
fn run() -> Result<(), canvas_observer_report::ReportError> {
    let config = ReportConfig::load()?;
    let student_name = config.student_name.clone();
    let client = CanvasClient::new(config);

    let observer = canvas::fetch_current_user(&client)?;
    let student = canvas::resolve_observee_by_name(&client, observer.id, &student_name)?;
    info!("observer {} resolved observee {}", observer.id, student.id);
    println!("{} - {}", student.name, student.id);

    for course in canvas::fetch_courses_for_user(&client, student.id)? {
        let merged = canvas::fetch_assignments_for_user_and_course(&client, student.id, course.id)?;
        let mut relevant = filter_relevant(merged);
        relevant.sort_by_key(|assignment| assignment.lock_at);
        render_course(&course, &relevant);
    }
    Ok(())
}
