//! Core data types for carewheel
//!
//! This module defines the fixed table of care options shown on the wheel.

use ratatui::style::Color;

/// One selectable item on the care wheel
///
/// The table below is fixed at compile time. Order is significant: it
/// determines the ring position of each option and which options are
/// adjacent when rotating left or right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareOption {
    pub id: u32,
    pub icon: &'static str,
    pub label: &'static str,
    pub color: Color,
    pub urgent: bool,
}

/// Id of the entry that opens the games site instead of calling the buzzer
pub const GAMES_OPTION_ID: u32 = 12;

const CARE_OPTIONS: [CareOption; 12] = [
    CareOption { id: 1,  icon: "🚨", label: "Emergency",   color: Color::Rgb(255, 0, 0),    urgent: true },  // #ff0000
    CareOption { id: 2,  icon: "🩺", label: "Doctor",      color: Color::Rgb(0, 64, 255),   urgent: false }, // #0040ff
    CareOption { id: 3,  icon: "💨", label: "Oxygen",      color: Color::Rgb(0, 255, 247),  urgent: false }, // #00fff7
    CareOption { id: 4,  icon: "✋", label: "Itching",     color: Color::Rgb(255, 0, 128),  urgent: false }, // #ff0080
    CareOption { id: 5,  icon: "🚽", label: "Toilet",      color: Color::Rgb(255, 255, 5),  urgent: false }, // #ffff05
    CareOption { id: 6,  icon: "🚻", label: "Potty",       color: Color::Rgb(255, 149, 0),  urgent: false }, // #ff9500
    CareOption { id: 7,  icon: "💧", label: "Water",       color: Color::Rgb(0, 255, 221),  urgent: false }, // #00ffdd
    CareOption { id: 8,  icon: "🍽", label: "Food",        color: Color::Rgb(0, 255, 55),   urgent: false }, // #00ff37
    CareOption { id: 9,  icon: "💊", label: "Medicine",    color: Color::Rgb(111, 255, 0),  urgent: false }, // #6fff00
    CareOption { id: 10, icon: "🛏", label: "Position",    color: Color::Rgb(53, 0, 160),   urgent: false }, // #3500a0
    CareOption { id: 11, icon: "🌡", label: "Temperature", color: Color::Rgb(255, 166, 0),  urgent: false }, // #ffa600
    CareOption { id: 12, icon: "🎮", label: "games",       color: Color::Rgb(178, 32, 159), urgent: false }, // #b2209f
];

impl CareOption {
    /// The full ordered option table
    pub fn all() -> &'static [CareOption] {
        &CARE_OPTIONS
    }

    /// Whether selecting this option opens the games site
    /// instead of sounding the buzzer
    pub fn launches_game(&self) -> bool {
        self.id == GAMES_OPTION_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_twelve_entries() {
        assert_eq!(CareOption::all().len(), 12);
    }

    #[test]
    fn test_ids_are_unique_and_sequential() {
        for (i, opt) in CareOption::all().iter().enumerate() {
            assert_eq!(opt.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_ring_order() {
        let options = CareOption::all();
        assert_eq!(options[0].label, "Emergency");
        assert_eq!(options[3].label, "Itching");
        assert_eq!(options[11].label, "games");
    }

    #[test]
    fn test_only_emergency_is_urgent() {
        let urgent: Vec<_> = CareOption::all().iter().filter(|o| o.urgent).collect();
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].label, "Emergency");
    }

    #[test]
    fn test_only_games_launches() {
        let launchers: Vec<_> = CareOption::all()
            .iter()
            .filter(|o| o.launches_game())
            .collect();
        assert_eq!(launchers.len(), 1);
        assert_eq!(launchers[0].id, GAMES_OPTION_ID);
    }
}
