use crate::model::{Day, EmployeeId, ShiftType, MIN_STAFF, SHIFT_CAPACITY};

/// Créneau (jour, type) et les employés qui y sont affectés, dans l'ordre d'affectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    day: Day,
    kind: ShiftType,
    roster: Vec<EmployeeId>,
}

impl Shift {
    pub fn new(day: Day, kind: ShiftType) -> Self {
        Self {
            day,
            kind,
            roster: Vec::new(),
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn kind(&self) -> ShiftType {
        self.kind
    }

    /// Ajoute l'employé s'il n'est pas déjà présent et que le créneau n'est pas plein.
    pub fn add_employee(&mut self, id: EmployeeId) -> bool {
        if self.is_full() || self.contains(id) {
            return false;
        }
        self.roster.push(id);
        true
    }

    pub fn remove_employee(&mut self, id: EmployeeId) -> bool {
        match self.roster.iter().position(|e| *e == id) {
            Some(pos) => {
                self.roster.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.roster.contains(&id)
    }

    pub fn is_full(&self) -> bool {
        self.roster.len() >= SHIFT_CAPACITY
    }

    pub fn has_minimum_staff(&self) -> bool {
        self.roster.len() >= MIN_STAFF
    }

    /// Nombre d'employés manquants pour atteindre l'effectif minimal.
    pub fn needed(&self) -> usize {
        MIN_STAFF.saturating_sub(self.roster.len())
    }

    pub fn employee_count(&self) -> usize {
        self.roster.len()
    }

    pub fn employees(&self) -> &[EmployeeId] {
        &self.roster
    }

    pub fn clear_employees(&mut self) {
        self.roster.clear();
    }
}

/// Semaine complète : 7 jours × 3 créneaux, tous créés à la construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    grid: [[Shift; 3]; 7],
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            grid: Day::ALL.map(|day| ShiftType::ALL.map(|kind| Shift::new(day, kind))),
        }
    }

    pub fn shift(&self, day: Day, kind: ShiftType) -> &Shift {
        &self.grid[day.index()][kind.index()]
    }

    pub fn shift_mut(&mut self, day: Day, kind: ShiftType) -> &mut Shift {
        &mut self.grid[day.index()][kind.index()]
    }

    /// Les trois créneaux d'un jour, matin → soir.
    pub fn day(&self, day: Day) -> &[Shift; 3] {
        &self.grid[day.index()]
    }

    /// Tous les créneaux, lundi matin → dimanche soir.
    pub fn iter(&self) -> impl Iterator<Item = &Shift> {
        self.grid.iter().flatten()
    }

    pub fn is_employee_assigned_on_day(&self, id: EmployeeId, day: Day) -> bool {
        self.shift_of(id, day).is_some()
    }

    /// Créneau occupé par l'employé ce jour-là, s'il y en a un.
    pub fn shift_of(&self, id: EmployeeId, day: Day) -> Option<ShiftType> {
        self.day(day)
            .iter()
            .find(|s| s.contains(id))
            .map(|s| s.kind())
    }

    pub fn shifts_needing_staff(&self) -> Vec<&Shift> {
        self.iter().filter(|s| !s.has_minimum_staff()).collect()
    }

    /// Vide tous les créneaux ; les compteurs des employés ne sont pas touchés.
    pub fn clear(&mut self) {
        self.grid
            .iter_mut()
            .flatten()
            .for_each(Shift::clear_employees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u32) -> Vec<EmployeeId> {
        (0..n).map(EmployeeId::new).collect()
    }

    #[test]
    fn add_rejects_duplicates_and_keeps_order() {
        let mut s = Shift::new(Day::Monday, ShiftType::Morning);
        let e = ids(3);
        assert!(s.add_employee(e[2]));
        assert!(s.add_employee(e[0]));
        assert!(!s.add_employee(e[2]));
        assert_eq!(s.employees(), &[e[2], e[0]]);
        assert!(s.remove_employee(e[2]));
        assert!(!s.remove_employee(e[2]));
        assert_eq!(s.employees(), &[e[0]]);
    }

    #[test]
    fn staffing_thresholds() {
        let mut s = Shift::new(Day::Tuesday, ShiftType::Evening);
        let e = ids(6);
        assert_eq!(s.needed(), 2);
        s.add_employee(e[0]);
        assert!(!s.has_minimum_staff());
        assert_eq!(s.needed(), 1);
        s.add_employee(e[1]);
        assert!(s.has_minimum_staff());
        assert!(!s.is_full());
        for id in &e[2..5] {
            s.add_employee(*id);
        }
        assert!(s.is_full());
        assert!(!s.add_employee(e[5]));
        assert_eq!(s.employee_count(), 5);
        assert_eq!(s.needed(), 0);
        s.clear_employees();
        assert_eq!(s.employee_count(), 0);
    }

    #[test]
    fn grid_is_complete_and_ordered() {
        let schedule = Schedule::new();
        let slots: Vec<(Day, ShiftType)> = schedule.iter().map(|s| (s.day(), s.kind())).collect();
        assert_eq!(slots.len(), 21);
        assert_eq!(slots[0], (Day::Monday, ShiftType::Morning));
        assert_eq!(slots[4], (Day::Tuesday, ShiftType::Afternoon));
        assert_eq!(slots[20], (Day::Sunday, ShiftType::Evening));
        for day in Day::ALL {
            for kind in ShiftType::ALL {
                let s = schedule.shift(day, kind);
                assert_eq!((s.day(), s.kind()), (day, kind));
            }
        }
    }

    #[test]
    fn needing_staff_is_exact() {
        let mut schedule = Schedule::new();
        let e = ids(2);
        schedule.shift_mut(Day::Monday, ShiftType::Morning).add_employee(e[0]);
        schedule.shift_mut(Day::Monday, ShiftType::Morning).add_employee(e[1]);
        schedule.shift_mut(Day::Friday, ShiftType::Evening).add_employee(e[0]);

        let needing = schedule.shifts_needing_staff();
        assert_eq!(needing.len(), 20);
        assert!(needing
            .iter()
            .all(|s| !(s.day() == Day::Monday && s.kind() == ShiftType::Morning)));
        assert!(needing
            .iter()
            .any(|s| s.day() == Day::Friday && s.kind() == ShiftType::Evening));
    }

    #[test]
    fn day_lookup_and_clear() {
        let mut schedule = Schedule::new();
        let e = ids(1);
        schedule.shift_mut(Day::Wednesday, ShiftType::Afternoon).add_employee(e[0]);
        assert!(schedule.is_employee_assigned_on_day(e[0], Day::Wednesday));
        assert_eq!(schedule.shift_of(e[0], Day::Wednesday), Some(ShiftType::Afternoon));
        assert!(!schedule.is_employee_assigned_on_day(e[0], Day::Thursday));

        schedule.clear();
        assert!(schedule.iter().all(|s| s.employee_count() == 0));
        assert!(!schedule.is_employee_assigned_on_day(e[0], Day::Wednesday));
    }
}
