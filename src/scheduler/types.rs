use crate::model::{Day, EmployeeId, ShiftType};
use thiserror::Error;

/// Origine d'une affectation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentSource {
    Preferred,   // un des créneaux souhaités
    Alternative, // autre créneau du même jour, souhaités pleins
    Random,      // complément aléatoire d'un créneau en sous-effectif
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub employee: EmployeeId,
    pub day: Day,
    pub shift: ShiftType,
    pub source: AssignmentSource,
}

/// Créneau pris en charge par la passe de complément, avec la taille du
/// vivier tiré au sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillTarget {
    pub day: Day,
    pub shift: ShiftType,
    pub needed: usize,
    pub available: usize,
}

/// Créneau resté en sous-effectif après la passe de complément.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub day: Day,
    pub shift: ShiftType,
    pub needed: usize,
    pub assigned: usize,
}

/// Journal d'un run de planification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub empty_roster: bool,
    pub assignments: Vec<Assignment>,
    pub shortfalls: Vec<Shortfall>,
    /// Créneaux sous le minimum au début de la passe de complément, dans l'ordre canonique.
    pub fill_targets: Vec<FillTarget>,
}

impl RunReport {
    pub fn assigned_by(&self, source: AssignmentSource) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(move |a| a.source == source)
    }

    /// Affectations aléatoires d'un créneau donné.
    pub fn random_fills(&self, day: Day, shift: ShiftType) -> impl Iterator<Item = &Assignment> {
        self.assigned_by(AssignmentSource::Random)
            .filter(move |a| a.day == day && a.shift == shift)
    }

    pub fn shortfall(&self, day: Day, shift: ShiftType) -> Option<&Shortfall> {
        self.shortfalls
            .iter()
            .find(|gap| gap.day == day && gap.shift == shift)
    }

    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid day: {0}")]
    InvalidDay(String),
    #[error("invalid shift: {0}")]
    InvalidShift(String),
    #[error("invalid preference line (expected 'Day Shift'): {0}")]
    InvalidPreferenceLine(String),
    #[error("unknown employee: {0}")]
    UnknownEmployee(EmployeeId),
    #[error("employee name cannot be empty")]
    EmptyName,
    #[error("no employee id left in this roster")]
    IdsExhausted,
}
