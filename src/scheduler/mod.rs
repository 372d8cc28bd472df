mod assignment;
mod fill;
mod types;
mod util;

pub use types::{
    Assignment, AssignmentSource, FillTarget, RunReport, ScheduleError, Shortfall,
};

use crate::model::{Day, Employee, EmployeeId, Roster};
use crate::schedule::{Schedule, Shift};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// ScheduleManager : possède le roster, la semaine et le générateur aléatoire
/// utilisé par la passe de complément.
#[derive(Debug)]
pub struct ScheduleManager<R = StdRng> {
    roster: Roster,
    schedule: Schedule,
    rng: R,
}

impl ScheduleManager<StdRng> {
    /// Générateur initialisé depuis l'OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Générateur à graine fixe : la passe de complément devient reproductible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ScheduleManager<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ScheduleManager<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            roster: Roster::new(),
            schedule: Schedule::new(),
            rng,
        }
    }

    pub fn employees(&self) -> &Roster {
        &self.roster
    }

    pub fn employee(&self, id: EmployeeId) -> Result<&Employee, ScheduleError> {
        self.roster.get(id).ok_or(ScheduleError::UnknownEmployee(id))
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn add_employee(&mut self, employee: Employee) -> Result<EmployeeId, ScheduleError> {
        if employee.name.trim().is_empty() {
            return Err(ScheduleError::EmptyName);
        }
        self.roster.push(employee)
    }

    pub fn add_employee_named(&mut self, name: &str) -> Result<EmployeeId, ScheduleError> {
        self.add_employee(Employee::new(name))
    }

    /// Remplace le roster ; la semaine est vidée pour ne garder aucune
    /// référence vers un employé disparu.
    pub fn set_employees(&mut self, roster: Roster) {
        self.schedule.clear();
        self.roster = roster;
    }

    /// Vide le roster et la semaine ensemble.
    pub fn clear_employees(&mut self) {
        self.schedule.clear();
        self.roster.clear();
    }

    /// Candidats à la passe de complément pour ce jour.
    pub fn available_employees(&self, day: Day) -> Vec<EmployeeId> {
        util::available_employees(&self.roster, &self.schedule, day)
    }

    pub fn assign_based_on_preferences(&mut self) -> RunReport {
        let mut report = RunReport::default();
        assignment::assign_based_on_preferences(self, &mut report);
        report
    }

    /// Créneaux encore sous l'effectif minimal.
    pub fn understaffed(&self) -> Vec<&Shift> {
        self.schedule.shifts_needing_staff()
    }

    /// Vide la semaine et remet tous les compteurs à zéro.
    pub fn reset_schedule(&mut self) {
        self.schedule.clear();
        self.roster
            .iter_mut()
            .for_each(Employee::reset_assigned_days);
        info!("schedule reset");
    }
}

impl<R: Rng> ScheduleManager<R> {
    pub fn fill_under_staffed_shifts(&mut self) -> RunReport {
        let mut report = RunReport::default();
        fill::fill_under_staffed_shifts(self, &mut report);
        report
    }

    /// Vide la semaine puis enchaîne passe préférences et passe de complément.
    pub fn create_schedule(&mut self) -> RunReport {
        let mut report = RunReport::default();
        if self.roster.is_empty() {
            report.empty_roster = true;
            return report;
        }

        self.schedule.clear();
        assignment::assign_based_on_preferences(self, &mut report);
        fill::fill_under_staffed_shifts(self, &mut report);

        info!(
            employees = self.roster.len(),
            assignments = report.assignments.len(),
            shortfalls = report.shortfalls.len(),
            "schedule created"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShiftType, MAX_ASSIGNED_DAYS};

    fn manager_with(names: &[&str]) -> ScheduleManager {
        let mut m = ScheduleManager::with_seed(7);
        for name in names {
            m.add_employee_named(name).unwrap();
        }
        m
    }

    #[test]
    fn rejects_blank_names() {
        let mut m = ScheduleManager::with_seed(1);
        assert!(matches!(
            m.add_employee_named("   "),
            Err(ScheduleError::EmptyName)
        ));
        assert!(m.employees().is_empty());
    }

    #[test]
    fn unknown_employee_lookup() {
        let m = manager_with(&["alice"]);
        let err = m.employee(EmployeeId::new(42)).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownEmployee(id) if id.get() == 42));
    }

    #[test]
    fn empty_roster_skips_run() {
        let mut m = ScheduleManager::with_seed(1);
        let report = m.create_schedule();
        assert!(report.empty_roster);
        assert!(report.assignments.is_empty());
        assert_eq!(m.understaffed().len(), 21);
    }

    #[test]
    fn preferred_full_falls_back_in_canonical_order() {
        let mut m = ScheduleManager::with_seed(3);
        for i in 0..5 {
            m.add_employee(Employee::new(format!("e{i}")).with_preference(Day::Monday, ShiftType::Afternoon))
                .unwrap();
        }
        let late = m
            .add_employee(
                Employee::new("late")
                    .with_preference(Day::Monday, ShiftType::Afternoon)
                    .with_preference(Day::Monday, ShiftType::Morning),
            )
            .unwrap();

        let report = m.assign_based_on_preferences();
        // Morning is a stated preference, so it is taken as preferred
        assert_eq!(m.schedule().shift_of(late, Day::Monday), Some(ShiftType::Morning));
        let last = report.assignments.last().unwrap();
        assert_eq!(last.source, AssignmentSource::Preferred);

        let other = m
            .add_employee(Employee::new("other").with_preference(Day::Monday, ShiftType::Afternoon))
            .unwrap();
        // the pass does not clear the week: only the newcomer gets placed
        let report = m.assign_based_on_preferences();
        assert_eq!(report.assignments.len(), 1);
        assert_eq!(report.assignments[0].employee, other);
        assert_eq!(report.assignments[0].source, AssignmentSource::Alternative);
        assert_eq!(m.schedule().shift_of(other, Day::Monday), Some(ShiftType::Morning));
        assert_eq!(m.schedule().shift(Day::Monday, ShiftType::Afternoon).employee_count(), 5);
    }

    #[test]
    fn alternative_skips_every_preferred_type() {
        let mut m = ScheduleManager::with_seed(3);
        for i in 0..5 {
            m.add_employee(Employee::new(format!("m{i}")).with_preference(Day::Sunday, ShiftType::Morning))
                .unwrap();
        }
        let picky = m
            .add_employee(Employee::new("picky").with_preference(Day::Sunday, ShiftType::Morning))
            .unwrap();
        let report = m.assign_based_on_preferences();
        assert_eq!(m.schedule().shift_of(picky, Day::Sunday), Some(ShiftType::Afternoon));
        assert_eq!(
            report.assigned_by(AssignmentSource::Alternative).count(),
            1
        );
        assert_eq!(m.employee(picky).unwrap().assigned_days(), 1);
    }

    #[test]
    fn cap_stops_preference_pass() {
        let mut m = ScheduleManager::with_seed(5);
        let mut e = Employee::new("busy");
        for day in Day::ALL {
            e.add_preference(day, ShiftType::Evening);
        }
        let id = m.add_employee(e).unwrap();
        m.assign_based_on_preferences();
        let employee = m.employee(id).unwrap();
        assert_eq!(employee.assigned_days(), MAX_ASSIGNED_DAYS);
        assert!(!m.schedule().is_employee_assigned_on_day(id, Day::Saturday));
        assert!(!m.schedule().is_employee_assigned_on_day(id, Day::Sunday));
        assert!(m.schedule().is_employee_assigned_on_day(id, Day::Friday));
    }

    #[test]
    fn reset_rewinds_everything() {
        let mut m = manager_with(&["a", "b", "c"]);
        m.create_schedule();
        assert!(m.employees().iter().any(|e| e.assigned_days() > 0));
        m.reset_schedule();
        assert!(m.schedule().iter().all(|s| s.employee_count() == 0));
        assert!(m.employees().iter().all(|e| e.assigned_days() == 0));
    }

    #[test]
    fn clearing_employees_clears_schedule() {
        let mut m = manager_with(&["a", "b"]);
        m.create_schedule();
        m.clear_employees();
        assert!(m.employees().is_empty());
        assert!(m.schedule().iter().all(|s| s.employee_count() == 0));
    }
}
