use crate::model::{Day, EmployeeId, Roster, ShiftType};
use crate::schedule::Schedule;

/// Place l'employé sur le créneau si celui-ci l'accepte (pas plein, pas déjà
/// présent), puis incrémente son compteur de jours.
pub(super) fn place(
    schedule: &mut Schedule,
    roster: &mut Roster,
    id: EmployeeId,
    day: Day,
    kind: ShiftType,
) -> bool {
    if !schedule.shift_mut(day, kind).add_employee(id) {
        return false;
    }
    if let Some(employee) = roster.get_mut(id) {
        employee.increment_assigned_days();
    }
    true
}

/// Employés pouvant encore travailler et libres ce jour-là, dans l'ordre du roster.
pub(super) fn available_employees(roster: &Roster, schedule: &Schedule, day: Day) -> Vec<EmployeeId> {
    roster
        .iter()
        .filter(|e| e.can_work_more_days() && !schedule.is_employee_assigned_on_day(e.id, day))
        .map(|e| e.id)
        .collect()
}
