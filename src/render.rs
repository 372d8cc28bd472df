use crate::model::{Day, Roster, MIN_STAFF};
use crate::schedule::{Schedule, Shift};
use crate::scheduler::{AssignmentSource, RunReport};

/// Permet de customiser le rendu (texte brut, markdown, etc.).
pub trait ScheduleRenderer {
    /// Semaine complète, jour par jour.
    fn render_schedule(&self, schedule: &Schedule, roster: &Roster) -> String;
    /// Jours assignés par employé et créneaux encore en sous-effectif.
    fn render_summary(&self, schedule: &Schedule, roster: &Roster) -> String;
    /// Préférences saisies, employé par employé.
    fn render_preferences(&self, roster: &Roster) -> String;
    /// Journal d'un run (affectations, manques).
    fn render_report(&self, report: &RunReport, roster: &Roster) -> String;
}

/// Rendu texte pour le terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

fn rule(c: char, width: usize) -> String {
    std::iter::repeat(c).take(width).collect()
}

impl TextRenderer {
    /// Ligne d'un créneau, ex. `MORNING     : Alice, Bob (2 employees)`.
    pub fn shift_line(&self, shift: &Shift, roster: &Roster) -> String {
        let label = format!("{:<12}: ", shift.kind().name().to_uppercase());
        let names: Vec<&str> = shift
            .employees()
            .iter()
            .map(|id| roster.name_of(*id))
            .collect();
        if names.is_empty() {
            return format!("{label}No employees assigned");
        }
        let plural = if names.len() > 1 { "s" } else { "" };
        format!("{label}{} ({} employee{plural})", names.join(", "), names.len())
    }
}

impl ScheduleRenderer for TextRenderer {
    fn render_schedule(&self, schedule: &Schedule, roster: &Roster) -> String {
        let mut lines = vec![
            rule('=', 80),
            format!("{:>44}", "WEEKLY EMPLOYEE SCHEDULE"),
            rule('=', 80),
        ];
        for day in Day::ALL {
            lines.push(String::new());
            lines.push(format!("{}:", day.name().to_uppercase()));
            lines.push(rule('-', 40));
            for shift in schedule.day(day) {
                lines.push(self.shift_line(shift, roster));
            }
        }
        lines.push(String::new());
        lines.push(rule('=', 80));
        lines.join("\n")
    }

    fn render_summary(&self, schedule: &Schedule, roster: &Roster) -> String {
        let mut lines = vec!["SCHEDULE SUMMARY:".to_string(), rule('-', 40)];
        for employee in roster.iter() {
            lines.push(format!(
                "{}: {} days assigned",
                employee.name,
                employee.assigned_days()
            ));
        }

        let understaffed = schedule.shifts_needing_staff();
        if !understaffed.is_empty() {
            lines.push(String::new());
            lines.push("WARNING: The following shifts are still under-staffed:".to_string());
            for shift in understaffed {
                lines.push(format!(
                    "  - {} {} ({}/{} minimum)",
                    shift.day(),
                    shift.kind(),
                    shift.employee_count(),
                    MIN_STAFF
                ));
            }
        }
        lines.join("\n")
    }

    fn render_preferences(&self, roster: &Roster) -> String {
        let mut lines = vec!["SUMMARY OF EMPLOYEE PREFERENCES:".to_string(), rule('-', 40)];
        for employee in roster.iter() {
            lines.push(String::new());
            lines.push(format!("{}:", employee.name));
            if employee.preferences.is_empty() {
                lines.push("  No specific preferences".to_string());
                continue;
            }
            for (day, shifts) in &employee.preferences {
                let names: Vec<&str> = shifts.iter().map(|s| s.name()).collect();
                lines.push(format!("  {day}: {}", names.join(", ")));
            }
        }
        lines.join("\n")
    }

    fn render_report(&self, report: &RunReport, roster: &Roster) -> String {
        if report.empty_roster {
            return "No employees to schedule!".to_string();
        }

        let mut lines = vec!["Assigning shifts based on employee preferences...".to_string()];
        for a in &report.assignments {
            let name = roster.name_of(a.employee);
            match a.source {
                AssignmentSource::Preferred => {
                    lines.push(format!("  [OK] Assigned {name} to {} {}", a.day, a.shift))
                }
                AssignmentSource::Alternative => lines.push(format!(
                    "  [ALT] Assigned {name} to {} {} (alternative shift - preferred was full)",
                    a.day, a.shift
                )),
                AssignmentSource::Random => {}
            }
        }

        lines.push(String::new());
        lines.push("Filling under-staffed shifts...".to_string());
        if report.fill_targets.is_empty() {
            lines.push("All shifts have minimum staffing requirements met.".to_string());
        }
        // un bloc par créneau : besoin, tirages, puis manque éventuel
        for target in &report.fill_targets {
            let (day, shift) = (target.day, target.shift);
            lines.push(format!(
                "  [WARN] {day} {shift} needs {} more employee(s)",
                target.needed
            ));
            if target.available == 0 {
                lines.push(format!("    [ERROR] No available employees for {day}"));
                continue;
            }
            for a in report.random_fills(day, shift) {
                lines.push(format!(
                    "    [OK] Randomly assigned {} to {day} {shift}",
                    roster.name_of(a.employee)
                ));
            }
            if let Some(gap) = report.shortfall(day, shift) {
                lines.push(format!(
                    "    [WARN] Could only assign {} out of {} needed employees",
                    gap.assigned, gap.needed
                ));
            }
        }
        lines.join("\n")
    }
}
