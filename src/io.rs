use crate::model::{Day, Employee, Roster, ShiftType};
use crate::schedule::Schedule;
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Import des préférences depuis CSV: header `name,day,shift`.
///
/// Une ligne par préférence ; les lignes d'un même nom sont regroupées dans
/// l'ordre de première apparition. Si la cellule `day` ou `shift` est vide,
/// l'employé est créé mais la ligne n'ajoute aucune préférence.
pub fn import_preferences_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut order: Vec<String> = Vec::new();
    let mut by_name: BTreeMap<String, Employee> = BTreeMap::new();

    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = line + 2;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("row {row}: empty employee name");
        }
        let employee = by_name.entry(name.to_string()).or_insert_with(|| {
            order.push(name.to_string());
            Employee::new(name)
        });

        let day = rec.get(1).map(str::trim).unwrap_or("");
        let shift = rec.get(2).map(str::trim).unwrap_or("");
        if day.is_empty() || shift.is_empty() {
            continue;
        }
        let day: Day = day.parse().with_context(|| format!("row {row}"))?;
        let shift: ShiftType = shift.parse().with_context(|| format!("row {row}"))?;
        employee.add_preference(day, shift);
    }

    let mut roster = Roster::new();
    for name in order {
        if let Some(employee) = by_name.remove(&name) {
            roster.push(employee)?;
        }
    }
    Ok(roster)
}

#[derive(Debug, Serialize)]
struct EmployeeExport<'a> {
    name: &'a str,
    assigned_days: u8,
    preferences: &'a BTreeMap<Day, Vec<ShiftType>>,
}

#[derive(Debug, Serialize)]
struct ShiftExport<'a> {
    day: Day,
    shift: ShiftType,
    employees: Vec<&'a str>,
    staffed: bool,
}

#[derive(Debug, Serialize)]
struct ScheduleExport<'a> {
    generated_at: DateTime<Utc>,
    employees: Vec<EmployeeExport<'a>>,
    shifts: Vec<ShiftExport<'a>>,
}

fn names<'a>(roster: &'a Roster, schedule: &Schedule, day: Day, kind: ShiftType) -> Vec<&'a str> {
    schedule
        .shift(day, kind)
        .employees()
        .iter()
        .map(|id| roster.name_of(*id))
        .collect()
}

/// Export JSON de la semaine (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    schedule: &Schedule,
) -> anyhow::Result<()> {
    let export = ScheduleExport {
        generated_at: Utc::now(),
        employees: roster
            .iter()
            .map(|e| EmployeeExport {
                name: &e.name,
                assigned_days: e.assigned_days(),
                preferences: &e.preferences,
            })
            .collect(),
        shifts: schedule
            .iter()
            .map(|s| ShiftExport {
                day: s.day(),
                shift: s.kind(),
                employees: names(roster, schedule, s.day(), s.kind()),
                staffed: s.has_minimum_staff(),
            })
            .collect(),
    };
    let s = serde_json::to_string_pretty(&export)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV de la semaine: header `day,shift,employees,count,status`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    schedule: &Schedule,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "shift", "employees", "count", "status"])?;
    for s in schedule.iter() {
        let employees = names(roster, schedule, s.day(), s.kind()).join(";");
        let count = s.employee_count().to_string();
        let status = if s.has_minimum_staff() {
            "ok"
        } else {
            "understaffed"
        };
        w.write_record([
            s.day().name(),
            s.kind().name(),
            employees.as_str(),
            count.as_str(),
            status,
        ])?;
    }
    w.flush()?;
    Ok(())
}
