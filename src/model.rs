use crate::scheduler::ScheduleError;
use chrono::Weekday;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Nombre maximal de jours travaillés par semaine et par employé.
pub const MAX_ASSIGNED_DAYS: u8 = 5;
/// Effectif minimal d'un créneau ; en dessous il est signalé en sous-effectif.
pub const MIN_STAFF: usize = 2;
/// Plafond d'un créneau : au-delà, plus aucune assignation.
pub const SHIFT_CAPACITY: usize = 5;

/// Jour de la semaine (ordre canonique lundi → dimanche)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Ordinal 0..7, utilisé pour indexer la grille hebdomadaire.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

impl From<Weekday> for Day {
    fn from(day: Weekday) -> Self {
        Day::ALL[day.num_days_from_monday() as usize]
    }
}

/// Type de créneau dans la journée
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShiftType {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftType {
    pub const ALL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Evening];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ShiftType::Morning => "Morning",
            ShiftType::Afternoon => "Afternoon",
            ShiftType::Evening => "Evening",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifiant stable d'un employé, attribué par le [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Employé : nom, préférences par jour (ordre = rang de préférence) et
/// compteur de jours déjà assignés pendant le run courant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: BTreeMap<Day, Vec<ShiftType>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing))]
    assigned_days: u8,
}

impl Employee {
    /// L'identifiant est provisoire tant que l'employé n'est pas poussé
    /// dans un [`Roster`], qui le remplace.
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: EmployeeId(0),
            name: name.into(),
            preferences: BTreeMap::new(),
            assigned_days: 0,
        }
    }

    /// Ajoute une préférence ; les doublons sont conservés.
    pub fn add_preference(&mut self, day: Day, shift: ShiftType) {
        self.preferences.entry(day).or_default().push(shift);
    }

    pub fn with_preference(mut self, day: Day, shift: ShiftType) -> Self {
        self.add_preference(day, shift);
        self
    }

    pub fn preferences_for(&self, day: Day) -> &[ShiftType] {
        self.preferences.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn assigned_days(&self) -> u8 {
        self.assigned_days
    }

    pub fn can_work_more_days(&self) -> bool {
        self.assigned_days < MAX_ASSIGNED_DAYS
    }

    /// Incrémente le compteur, plafonné à [`MAX_ASSIGNED_DAYS`].
    pub fn increment_assigned_days(&mut self) {
        if self.can_work_more_days() {
            self.assigned_days += 1;
        }
    }

    pub fn reset_assigned_days(&mut self) {
        self.assigned_days = 0;
    }
}

/// Arène des employés : seule propriétaire des données, les créneaux ne
/// gardent que des [`EmployeeId`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roster {
    employees: BTreeMap<EmployeeId, Employee>,
    #[cfg_attr(feature = "serde", serde(default))]
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crée un employé sans préférence et renvoie son identifiant.
    pub fn add<N: Into<String>>(&mut self, name: N) -> Result<EmployeeId, ScheduleError> {
        self.push(Employee::new(name))
    }

    /// Insère un employé en lui attribuant un nouvel identifiant.
    ///
    /// Échoue si l'espace des identifiants est épuisé (roster rechargé
    /// contenant déjà `u32::MAX`).
    pub fn push(&mut self, mut employee: Employee) -> Result<EmployeeId, ScheduleError> {
        let after_last = match self.employees.keys().next_back() {
            Some(last) => last.0.checked_add(1).ok_or(ScheduleError::IdsExhausted)?,
            None => 0,
        };
        let id = EmployeeId(self.next_id.max(after_last));
        self.next_id = id.0.checked_add(1).ok_or(ScheduleError::IdsExhausted)?;
        employee.id = id;
        self.employees.insert(id, employee);
        Ok(id)
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(&id)
    }

    /// Nom de l'employé, ou `?` pour un identifiant inconnu.
    pub fn name_of(&self, id: EmployeeId) -> &str {
        self.get(id).map(|e| e.name.as_str()).unwrap_or("?")
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        self.employees.values().find(|e| e.name == name)
    }

    /// Parcours dans l'ordre d'insertion.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Employee> {
        self.employees.values_mut()
    }

    pub fn ids(&self) -> Vec<EmployeeId> {
        self.employees.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Vide l'arène sans réutiliser les anciens identifiants.
    pub fn clear(&mut self) {
        self.employees.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_saturates_at_cap() {
        let mut e = Employee::new("alice");
        for _ in 0..8 {
            e.increment_assigned_days();
        }
        assert_eq!(e.assigned_days(), MAX_ASSIGNED_DAYS);
        assert!(!e.can_work_more_days());
        e.reset_assigned_days();
        assert_eq!(e.assigned_days(), 0);
    }

    #[test]
    fn preferences_keep_order_and_duplicates() {
        let e = Employee::new("bob")
            .with_preference(Day::Friday, ShiftType::Evening)
            .with_preference(Day::Monday, ShiftType::Afternoon)
            .with_preference(Day::Monday, ShiftType::Morning)
            .with_preference(Day::Monday, ShiftType::Afternoon);

        assert_eq!(
            e.preferences_for(Day::Monday),
            &[ShiftType::Afternoon, ShiftType::Morning, ShiftType::Afternoon]
        );
        let days: Vec<Day> = e.preferences.keys().copied().collect();
        assert_eq!(days, vec![Day::Monday, Day::Friday]);
        assert!(e.preferences_for(Day::Sunday).is_empty());
    }

    #[test]
    fn roster_ids_are_stable_and_never_reused() {
        let mut r = Roster::new();
        let a = r.add("alice").unwrap();
        let b = r.add("alice").unwrap();
        assert_ne!(a, b);
        assert_eq!(r.find_by_name("alice").map(|e| e.id), Some(a));
        r.clear();
        assert!(r.is_empty());
        let c = r.add("carol").unwrap();
        assert!(c > b);
        assert_eq!(r.name_of(c), "carol");
        assert_eq!(r.name_of(a), "?");
    }

    #[test]
    fn exhausted_ids_are_an_error() {
        let mut r = Roster::new();
        r.employees
            .insert(EmployeeId(u32::MAX), Employee::new("last"));
        assert!(matches!(r.add("next"), Err(ScheduleError::IdsExhausted)));
        assert_eq!(r.len(), 1);

        let mut r = Roster {
            next_id: u32::MAX,
            ..Roster::default()
        };
        assert!(matches!(r.add("next"), Err(ScheduleError::IdsExhausted)));
        assert!(r.is_empty());
    }

    #[test]
    fn weekday_conversion() {
        for day in Day::ALL {
            let w: Weekday = day.into();
            assert_eq!(Day::from(w), day);
        }
        assert_eq!(Weekday::from(Day::Sunday), Weekday::Sun);
    }
}
