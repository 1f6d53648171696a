use crate::domain::error::DomainError;
use crate::domain::team::team::validate_name;

/// Counter entity
///
/// A named integer accumulator belonging to exactly one team. The step
/// count never goes below zero: it starts at a non-negative value and only
/// grows, by positive increments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    id: i64,
    team_id: i64,
    name: String,
    step_count: i64,
}

impl Counter {
    /// Returns the counter's storage-assigned id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the id of the owning team
    pub fn team_id(&self) -> i64 {
        self.team_id
    }

    /// Returns the counter's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current step count
    pub fn step_count(&self) -> i64 {
        self.step_count
    }

    /// Adds `steps` to the counter
    ///
    /// Fails with `DomainError::Validation` unless `steps >= 1`, keeping
    /// the step count monotonic.
    pub fn increment(&mut self, steps: i64) -> Result<(), DomainError> {
        if steps < 1 {
            return Err(DomainError::validation(
                "Step count must be a positive integer",
            ));
        }
        self.step_count = self
            .step_count
            .checked_add(steps)
            .ok_or_else(|| DomainError::validation("Step count overflow"))?;
        Ok(())
    }

    /// Reconstructs a Counter from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(id: i64, team_id: i64, name: String, step_count: i64) -> Self {
        Self {
            id,
            team_id,
            name,
            step_count,
        }
    }
}

/// A validated counter awaiting its first insert
///
/// An initial step count of zero is legal: zero is the counter's resting
/// state. Only negative initial counts are rejected.
#[derive(Debug, Clone)]
pub struct NewCounter {
    team_id: i64,
    name: String,
    step_count: i64,
}

impl NewCounter {
    /// Validates the counter inputs and builds the draft
    ///
    /// Fails with `DomainError::Validation` if the name is empty or longer
    /// than 255 characters, or if the initial step count is negative.
    pub fn new(team_id: i64, name: impl Into<String>, step_count: i64) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        if step_count < 0 {
            return Err(DomainError::validation(
                "Initial step count cannot be negative",
            ));
        }
        Ok(Self {
            team_id,
            name,
            step_count,
        })
    }

    pub fn team_id(&self) -> i64 {
        self.team_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn step_count(&self) -> i64 {
        self.step_count
    }
}
