use super::{
    util, Assignment, AssignmentSource, FillTarget, RunReport, ScheduleManager, Shortfall,
};
use crate::model::{Day, ShiftType};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Seconde passe : complète chaque créneau sous le minimum avec des employés
/// libres ce jour-là, tirés au hasard.
pub(super) fn fill_under_staffed_shifts<R: Rng>(manager: &mut ScheduleManager<R>, report: &mut RunReport) {
    let slots: Vec<(Day, ShiftType)> = manager
        .schedule
        .shifts_needing_staff()
        .iter()
        .map(|s| (s.day(), s.kind()))
        .collect();

    for (day, kind) in slots {
        let needed = manager.schedule.shift(day, kind).needed();
        let mut pool = util::available_employees(&manager.roster, &manager.schedule, day);
        pool.shuffle(&mut manager.rng);
        report.fill_targets.push(FillTarget {
            day,
            shift: kind,
            needed,
            available: pool.len(),
        });

        let mut assigned = 0usize;
        for id in pool {
            if assigned >= needed {
                break;
            }
            if util::place(&mut manager.schedule, &mut manager.roster, id, day, kind) {
                assigned += 1;
                debug!(employee = %manager.roster.name_of(id), %day, shift = %kind, "random fill");
                report.assignments.push(Assignment {
                    employee: id,
                    day,
                    shift: kind,
                    source: AssignmentSource::Random,
                });
            }
        }

        if assigned < needed {
            warn!(%day, shift = %kind, needed, assigned, "shift still under-staffed");
            report.shortfalls.push(Shortfall {
                day,
                shift: kind,
                needed,
                assigned,
            });
        }
    }
}
