// Import necessary crates and modules
use serde::Deserialize;

use crate::error::ReportError;

/// An account in the Canvas system: the authenticated caller, the observer,
/// or an observed student.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    #[serde(default, deserialize_with = "crate::submission::null_as_default")]
    pub name: String,
}

/// Selects the unique observee whose name exactly equals `name`.
///
/// Matching is exact, with no fuzzy fallback.
///
/// Returns:
/// - `Ok(User)`: Exactly one observee carries the name.
/// - `Err(ReportError::ObserveeNotFound)`: Nothing matched.
/// - `Err(ReportError::AmbiguousObservee)`: Several observees matched.
pub fn find_observee_by_name(observees: &[User], name: &str) -> Result<User, ReportError> {
    let mut matches = observees.iter().filter(|user| user.name == name);

    let first = matches
        .next()
        .ok_or_else(|| ReportError::ObserveeNotFound(name.to_string()))?;

    let extra = matches.count();
    if extra > 0 {
        return Err(ReportError::AmbiguousObservee {
            name: name.to_string(),
            count: extra + 1,
        });
    }
    Ok(first.clone())
}
