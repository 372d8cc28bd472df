#![forbid(unsafe_code)]
//! Shiftplan — planification hebdomadaire d'équipes à partir des préférences.
//!
//! - Semaine fixe : 7 jours × 3 créneaux (matin, après-midi, soir).
//! - Passe 1 : affectation gloutonne selon les préférences.
//! - Passe 2 : complément aléatoire (générateur à graine) des créneaux sous le minimum.
//! - Au plus 5 jours par employé, un seul créneau par jour, 2 à 5 personnes par créneau.
//! - Import CSV / export JSON-CSV et stockage JSON atomique (feature `serde`).

#[cfg(feature = "serde")]
pub mod io;
pub mod menu;
pub mod model;
pub mod parse;
pub mod render;
pub mod schedule;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;

pub use menu::Session;
pub use model::{
    Day, Employee, EmployeeId, Roster, ShiftType, MAX_ASSIGNED_DAYS, MIN_STAFF, SHIFT_CAPACITY,
};
pub use parse::{
    day_from_str_or_default, is_valid_day, is_valid_shift_type, parse_preference_line,
    shift_from_str_or_default,
};
pub use render::{ScheduleRenderer, TextRenderer};
pub use schedule::{Schedule, Shift};
pub use scheduler::{
    Assignment, AssignmentSource, FillTarget, RunReport, ScheduleError, ScheduleManager,
    Shortfall,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
