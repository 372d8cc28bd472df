//! Conversion des saisies utilisateur (`"mon"`, `"3"`, `"E"`…) vers les énumérations.
//!
//! Deux familles : les versions strictes (`FromStr`, `from_token`) qui
//! renvoient une erreur, et les versions tolérantes (`*_or_default`) qui
//! retombent sur lundi / matin. Valider avec `is_valid_*` avant d'utiliser
//! ces dernières.

use crate::model::{Day, ShiftType};
use crate::scheduler::ScheduleError;
use std::str::FromStr;

impl Day {
    pub fn from_token(token: &str) -> Option<Day> {
        let day = match token.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" | "1" => Day::Monday,
            "tuesday" | "tue" | "2" => Day::Tuesday,
            "wednesday" | "wed" | "3" => Day::Wednesday,
            "thursday" | "thu" | "4" => Day::Thursday,
            "friday" | "fri" | "5" => Day::Friday,
            "saturday" | "sat" | "6" => Day::Saturday,
            "sunday" | "sun" | "7" => Day::Sunday,
            _ => return None,
        };
        Some(day)
    }
}

impl ShiftType {
    pub fn from_token(token: &str) -> Option<ShiftType> {
        let shift = match token.trim().to_ascii_lowercase().as_str() {
            "morning" | "morn" | "m" | "1" => ShiftType::Morning,
            "afternoon" | "aft" | "a" | "2" => ShiftType::Afternoon,
            "evening" | "eve" | "e" | "3" => ShiftType::Evening,
            _ => return None,
        };
        Some(shift)
    }
}

impl FromStr for Day {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::from_token(s).ok_or_else(|| ScheduleError::InvalidDay(s.to_string()))
    }
}

impl FromStr for ShiftType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftType::from_token(s).ok_or_else(|| ScheduleError::InvalidShift(s.to_string()))
    }
}

pub fn is_valid_day(token: &str) -> bool {
    Day::from_token(token).is_some()
}

pub fn is_valid_shift_type(token: &str) -> bool {
    ShiftType::from_token(token).is_some()
}

/// Saisie inconnue → lundi.
pub fn day_from_str_or_default(token: &str) -> Day {
    Day::from_token(token).unwrap_or(Day::Monday)
}

/// Saisie inconnue → matin.
pub fn shift_from_str_or_default(token: &str) -> ShiftType {
    ShiftType::from_token(token).unwrap_or(ShiftType::Morning)
}

/// Analyse une ligne `"<jour> <créneau>"`. Les mots au-delà du deuxième sont ignorés.
pub fn parse_preference_line(line: &str) -> Result<(Day, ShiftType), ScheduleError> {
    let mut words = line.split_whitespace();
    let (Some(day), Some(shift)) = (words.next(), words.next()) else {
        return Err(ScheduleError::InvalidPreferenceLine(line.trim().to_string()));
    };
    Ok((day.parse()?, shift.parse()?))
}
