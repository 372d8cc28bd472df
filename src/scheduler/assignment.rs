use super::{util, Assignment, AssignmentSource, RunReport, ScheduleManager};
use crate::model::{Employee, ShiftType};
use tracing::debug;

/// Première passe : affectation gloutonne selon les préférences, employé par
/// employé (ordre du roster) puis jour par jour (lundi → dimanche).
pub(super) fn assign_based_on_preferences<R>(manager: &mut ScheduleManager<R>, report: &mut RunReport) {
    manager
        .roster
        .iter_mut()
        .for_each(Employee::reset_assigned_days);

    for id in manager.roster.ids() {
        let Some(preferences) = manager.roster.get(id).map(|e| e.preferences.clone()) else {
            continue;
        };

        for (day, wanted) in preferences {
            let can_work = manager
                .roster
                .get(id)
                .is_some_and(Employee::can_work_more_days);
            if !can_work || manager.schedule.is_employee_assigned_on_day(id, day) {
                continue;
            }

            let schedule = &mut manager.schedule;
            let roster = &mut manager.roster;

            let preferred = wanted
                .iter()
                .copied()
                .find(|kind| util::place(schedule, roster, id, day, *kind));
            if let Some(shift) = preferred {
                debug!(employee = %roster.name_of(id), %day, %shift, "preferred shift");
                report.assignments.push(Assignment {
                    employee: id,
                    day,
                    shift,
                    source: AssignmentSource::Preferred,
                });
                continue;
            }

            // créneaux souhaités pleins : on tente les autres du même jour
            let alternative = ShiftType::ALL
                .into_iter()
                .filter(|kind| !wanted.contains(kind))
                .find(|kind| util::place(schedule, roster, id, day, *kind));
            if let Some(shift) = alternative {
                debug!(employee = %roster.name_of(id), %day, %shift, "alternative shift");
                report.assignments.push(Assignment {
                    employee: id,
                    day,
                    shift,
                    source: AssignmentSource::Alternative,
                });
            }
        }
    }
}
