//! Session interactive du terminal : menu à cinq choix.
//!
//! Les entrées/sorties sont génériques (`BufRead`/`Write`) pour pouvoir
//! rejouer une session depuis un script dans les tests. Les saisies
//! invalides sont signalées puis redemandées ; une fin d'entrée équivaut
//! au choix « quitter ».

use crate::model::Employee;
use crate::parse::parse_preference_line;
use crate::render::{ScheduleRenderer, TextRenderer};
use crate::scheduler::{ScheduleError, ScheduleManager};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

const VALID_DAYS: &str = "Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday";
const VALID_SHIFTS: &str = "Morning, Afternoon, Evening";

fn banner(c: char, width: usize) -> String {
    std::iter::repeat(c).take(width).collect()
}

pub struct Session<I, O, R> {
    input: I,
    output: O,
    manager: ScheduleManager<R>,
    renderer: TextRenderer,
    has_schedule: bool,
}

impl<I: BufRead, O: Write, R: Rng> Session<I, O, R> {
    pub fn new(input: I, output: O, manager: ScheduleManager<R>) -> Self {
        Self {
            input,
            output,
            manager,
            renderer: TextRenderer,
            has_schedule: false,
        }
    }

    pub fn manager(&self) -> &ScheduleManager<R> {
        &self.manager
    }

    pub fn into_manager(self) -> ScheduleManager<R> {
        self.manager
    }

    /// Boucle principale ; rend la main sur le choix 5 ou en fin d'entrée.
    pub fn run(&mut self) -> Result<()> {
        self.welcome()?;
        loop {
            self.menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            let Some(first) = choice.chars().next() else {
                continue;
            };
            debug!(%choice, "menu choice");
            match first {
                '1' => {
                    writeln!(self.output, "\nCollecting employee preferences...")?;
                    self.collect_preferences()?;
                    self.has_schedule = false;
                }
                '2' => self.generate()?,
                '3' => self.view()?,
                '4' => self.reset()?,
                '5' => break,
                _ => writeln!(
                    self.output,
                    "\n[ERROR] Invalid choice. Please enter a number between 1 and 5."
                )?,
            }
        }
        self.goodbye()
    }

    /// Ligne suivante sans le saut de ligne ni les blancs de tête/fin ;
    /// `None` en fin d'entrée. Les octets non UTF-8 sont remplacés, la ligne
    /// est alors traitée comme une saisie invalide ordinaire.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.read_line()
    }

    fn confirm(&mut self, text: &str) -> Result<bool> {
        let answer = self.prompt(text)?.unwrap_or_default();
        Ok(matches!(answer.chars().next(), Some('y' | 'Y')))
    }

    fn welcome(&mut self) -> Result<()> {
        let line = banner('=', 80);
        writeln!(self.output, "\n{line}")?;
        writeln!(self.output, "{:>53}", "EMPLOYEE SCHEDULE MANAGEMENT SYSTEM")?;
        writeln!(self.output, "{line}")?;
        writeln!(self.output, "- Collect employee shift preferences")?;
        writeln!(self.output, "- Assign shifts ensuring no employee works more than 5 days")?;
        writeln!(self.output, "- Ensure minimum 2 employees per shift")?;
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn menu(&mut self) -> Result<()> {
        let line = banner('-', 50);
        writeln!(self.output, "\n{line}\nMAIN MENU\n{line}")?;
        writeln!(self.output, "1. Add Employee Preferences")?;
        writeln!(self.output, "2. Generate Weekly Schedule")?;
        writeln!(self.output, "3. View Current Schedule")?;
        writeln!(self.output, "4. Reset Schedule")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "{line}\nEnter your choice (1-5): ")?;
        Ok(())
    }

    fn goodbye(&mut self) -> Result<()> {
        let line = banner('=', 60);
        writeln!(self.output, "\n{line}")?;
        writeln!(
            self.output,
            "Thank you for using the Employee Schedule Management System!\nGoodbye!"
        )?;
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Choix 1 : remplace le roster par les employés saisis.
    fn collect_preferences(&mut self) -> Result<()> {
        writeln!(self.output, "\nInstructions:")?;
        writeln!(self.output, "- Days: {VALID_DAYS}")?;
        writeln!(self.output, "  (or use abbreviations: Mon, Tue, Wed, Thu, Fri, Sat, Sun)")?;
        writeln!(self.output, "  (or use numbers: 1=Monday, 2=Tuesday, ..., 7=Sunday)")?;
        writeln!(self.output, "- Shifts: {VALID_SHIFTS}")?;
        writeln!(self.output, "  (or use abbreviations: M, A, E)")?;
        writeln!(self.output, "  (or use numbers: 1=Morning, 2=Afternoon, 3=Evening)")?;
        writeln!(self.output, "- Type 'done' when finished adding preferences for an employee")?;
        writeln!(self.output, "- Type 'finish' to complete all employee entries")?;

        self.manager.clear_employees();

        loop {
            let Some(name) = self.prompt("\nEnter employee name (or 'finish' to complete): ")?
            else {
                break;
            };
            if name.is_empty() {
                continue;
            }
            if name.eq_ignore_ascii_case("finish") {
                break;
            }

            let mut employee = Employee::new(name.as_str());
            writeln!(self.output, "\nCollecting preferences for {name}:")?;
            let ended = self.collect_employee_preferences(&mut employee)?;

            if employee.preferences.is_empty() {
                writeln!(self.output, "Warning: {name} has no preferences. Adding anyway...")?;
            }
            self.manager.add_employee(employee)?;
            writeln!(self.output, "Employee {name} added successfully!")?;
            if ended {
                break;
            }
        }

        let count = self.manager.employees().len();
        if count == 0 {
            writeln!(self.output, "\nNo employees entered.")?;
            return Ok(());
        }

        let line = banner('=', 60);
        writeln!(
            self.output,
            "\n{line}\nPREFERENCE COLLECTION COMPLETED\nTotal employees: {count}\n{line}\n"
        )?;
        let summary = self.renderer.render_preferences(self.manager.employees());
        writeln!(self.output, "{summary}")?;
        Ok(())
    }

    /// Lit des lignes `Jour Créneau` jusqu'à `done`. Renvoie `true` si
    /// l'entrée s'est terminée en cours de route.
    fn collect_employee_preferences(&mut self, employee: &mut Employee) -> Result<bool> {
        loop {
            let Some(line) = self.prompt(
                "\nEnter day and shift preference (e.g., 'Monday Morning' or 'done' to finish): ",
            )?
            else {
                return Ok(true);
            };
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("done") {
                return Ok(false);
            }

            match parse_preference_line(&line) {
                Ok((day, shift)) => {
                    employee.add_preference(day, shift);
                    writeln!(self.output, "  [OK] Added preference: {day} {shift}")?;
                }
                Err(ScheduleError::InvalidDay(token)) => {
                    writeln!(self.output, "  [ERROR] Invalid day: {token}")?;
                    writeln!(self.output, "    Valid days: {VALID_DAYS}")?;
                }
                Err(ScheduleError::InvalidShift(token)) => {
                    writeln!(self.output, "  [ERROR] Invalid shift: {token}")?;
                    writeln!(self.output, "    Valid shifts: {VALID_SHIFTS}")?;
                }
                Err(_) => writeln!(
                    self.output,
                    "  [ERROR] Invalid format. Please use 'Day Shift' format (e.g., 'Monday Morning')"
                )?,
            }
        }
    }

    /// Choix 2
    fn generate(&mut self) -> Result<()> {
        if self.manager.employees().is_empty() {
            writeln!(
                self.output,
                "\n[WARN] Please add employee preferences first (Option 1)."
            )?;
            return Ok(());
        }

        let line = banner('=', 60);
        writeln!(self.output, "\n{line}\nCREATING WEEKLY SCHEDULE\n{line}\n")?;
        let report = self.manager.create_schedule();
        let log = self
            .renderer
            .render_report(&report, self.manager.employees());
        writeln!(self.output, "{log}\n\nSchedule creation completed!")?;
        self.has_schedule = true;

        if self.confirm("\nWould you like to view the generated schedule? (y/n): ")? {
            self.print_schedule()?;
        }
        Ok(())
    }

    /// Choix 3
    fn view(&mut self) -> Result<()> {
        if !self.has_schedule {
            writeln!(
                self.output,
                "\n[WARN] No schedule has been generated yet. Please generate a schedule first (Option 2)."
            )?;
            return Ok(());
        }
        self.print_schedule()
    }

    /// Choix 4
    fn reset(&mut self) -> Result<()> {
        if !self.has_schedule {
            writeln!(self.output, "\n[WARN] No schedule to reset.")?;
            return Ok(());
        }
        if self.confirm("\nAre you sure you want to reset the current schedule? (y/n): ")? {
            self.manager.reset_schedule();
            self.has_schedule = false;
            writeln!(self.output, "Schedule has been reset successfully.")?;
        }
        Ok(())
    }

    fn print_schedule(&mut self) -> Result<()> {
        let roster = self.manager.employees();
        let schedule = self.manager.schedule();
        let week = self.renderer.render_schedule(schedule, roster);
        let summary = self.renderer.render_summary(schedule, roster);
        writeln!(self.output, "\n{week}\n\n{summary}")?;
        Ok(())
    }
}
