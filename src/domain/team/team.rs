use crate::domain::error::DomainError;

/// Longest name accepted for teams and counters
pub const MAX_NAME_LEN: usize = 255;

/// Validates an entity name: non-empty, at most [`MAX_NAME_LEN`] characters.
pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::validation("Name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::validation(format!(
            "Name cannot exceed {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Team aggregate root
///
/// A team owns zero or more counters by composition: the counters cannot
/// outlive the team, and deleting the team cascades to all of them. The id
/// is assigned by storage on insert and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: i64,
    name: String,
}

impl Team {
    /// Returns the team's storage-assigned id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses validation; the data was validated before it was stored.
    /// Only to be used by repository implementations.
    pub fn from_persistence(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// A validated team awaiting its first insert
///
/// Carries the input of `create_team` after validation but before storage
/// assigns an id.
#[derive(Debug, Clone)]
pub struct NewTeam {
    name: String,
}

impl NewTeam {
    /// Validates a team name and builds the draft
    ///
    /// Fails with `DomainError::Validation` if the name is empty or longer
    /// than 255 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_team_with_valid_name() {
        let draft = NewTeam::new("Alpha").unwrap();
        assert_eq!(draft.name(), "Alpha");
    }

    #[test]
    fn new_team_with_empty_name_fails() {
        let result = NewTeam::new("");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn new_team_with_255_char_name_is_accepted() {
        let name = "x".repeat(255);
        assert!(NewTeam::new(name).is_ok());
    }

    #[test]
    fn new_team_with_overlong_name_fails() {
        let name = "x".repeat(256);
        let result = NewTeam::new(name);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn name_length_is_counted_in_characters() {
        // 255 multi-byte characters are within the limit
        let name = "é".repeat(255);
        assert!(NewTeam::new(name).is_ok());
    }

    #[test]
    fn from_persistence_round_trip() {
        let team = Team::from_persistence(7, "Alpha".to_string());
        assert_eq!(team.id(), 7);
        assert_eq!(team.name(), "Alpha");
    }
}
