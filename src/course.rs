// Import necessary crates and modules
use serde::Deserialize;

/// A course visible to the observed student.
///
/// Identity and display name only; everything reported about a course comes
/// from its assignments. Courses arrive in server order and are neither
/// filtered nor deduplicated.
#[derive(Deserialize, Debug, Clone)]
pub struct Course {
    pub id: u64,
    #[serde(default, deserialize_with = "crate::submission::null_as_default")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_with_restricted_name_deserializes() {
        // Canvas omits the name on access-restricted enrollments.
        let course: Course = serde_json::from_str(r#"{"id": 11, "name": null}"#).unwrap();
        assert_eq!(course.id, 11);
        assert_eq!(course.name, "");
    }
}
