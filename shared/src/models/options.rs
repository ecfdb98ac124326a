//! Fixed option tables for the reservation form selects

use serde::Serialize;

/// One `<option>` of a select input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: String,
}

/// Bookable time slots (时段)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Lunch1100,
    Lunch1200,
    Lunch1300,
    Dinner1700,
    Dinner1800,
    Dinner1900,
    Dinner2000,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot::Lunch1100,
        TimeSlot::Lunch1200,
        TimeSlot::Lunch1300,
        TimeSlot::Dinner1700,
        TimeSlot::Dinner1800,
        TimeSlot::Dinner1900,
        TimeSlot::Dinner2000,
    ];

    /// Form value (24h `HH:MM`)
    pub const fn value(&self) -> &'static str {
        match self {
            TimeSlot::Lunch1100 => "11:00",
            TimeSlot::Lunch1200 => "12:00",
            TimeSlot::Lunch1300 => "13:00",
            TimeSlot::Dinner1700 => "17:00",
            TimeSlot::Dinner1800 => "18:00",
            TimeSlot::Dinner1900 => "19:00",
            TimeSlot::Dinner2000 => "20:00",
        }
    }

    /// Display label (12h clock)
    pub const fn label(&self) -> &'static str {
        match self {
            TimeSlot::Lunch1100 => "11:00 AM",
            TimeSlot::Lunch1200 => "12:00 PM",
            TimeSlot::Lunch1300 => "1:00 PM",
            TimeSlot::Dinner1700 => "5:00 PM",
            TimeSlot::Dinner1800 => "6:00 PM",
            TimeSlot::Dinner1900 => "7:00 PM",
            TimeSlot::Dinner2000 => "8:00 PM",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.value() == value)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|slot| SelectOption {
                value: slot.value(),
                label: slot.label().to_string(),
            })
            .collect()
    }
}

/// Party size: 1..=8 guests or the "9+" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartySize {
    Guests(u8),
    NinePlus,
}

impl PartySize {
    pub const MAX_LISTED: u8 = 8;
    pub const DEFAULT: PartySize = PartySize::Guests(2);

    pub fn all() -> Vec<PartySize> {
        (1..=Self::MAX_LISTED)
            .map(PartySize::Guests)
            .chain(std::iter::once(PartySize::NinePlus))
            .collect()
    }

    pub fn value(&self) -> &'static str {
        const VALUES: [&str; 8] = ["1", "2", "3", "4", "5", "6", "7", "8"];
        match *self {
            PartySize::Guests(n @ 1..=8) => VALUES[usize::from(n - 1)],
            _ => "9+",
        }
    }

    pub fn label(&self) -> String {
        match self {
            PartySize::Guests(1) => "1 Guest".to_string(),
            _ => format!("{} Guests", self.value()),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        if value == "9+" {
            return Some(PartySize::NinePlus);
        }
        match value.parse::<u8>() {
            Ok(n) if (1..=Self::MAX_LISTED).contains(&n) => Some(PartySize::Guests(n)),
            _ => None,
        }
    }

    pub fn options() -> Vec<SelectOption> {
        Self::all()
            .into_iter()
            .map(|size| SelectOption {
                value: size.value(),
                label: size.label(),
            })
            .collect()
    }
}

/// Optional occasion; an empty form value means unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occasion {
    Birthday,
    Anniversary,
    DateNight,
    Business,
    Celebration,
    Other,
}

impl Occasion {
    pub const ALL: [Occasion; 6] = [
        Occasion::Birthday,
        Occasion::Anniversary,
        Occasion::DateNight,
        Occasion::Business,
        Occasion::Celebration,
        Occasion::Other,
    ];

    pub const fn value(&self) -> &'static str {
        match self {
            Occasion::Birthday => "birthday",
            Occasion::Anniversary => "anniversary",
            Occasion::DateNight => "date",
            Occasion::Business => "business",
            Occasion::Celebration => "celebration",
            Occasion::Other => "other",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Occasion::Birthday => "Birthday",
            Occasion::Anniversary => "Anniversary",
            Occasion::DateNight => "Date Night",
            Occasion::Business => "Business Dinner",
            Occasion::Celebration => "Celebration",
            Occasion::Other => "Other",
        }
    }

    /// `None` for the empty (unset) value and for anything unrecognised
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.value() == value)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|o| SelectOption {
                value: o.value(),
                label: o.label().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slots() {
        let values: Vec<_> = TimeSlot::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(
            values,
            vec!["11:00", "12:00", "13:00", "17:00", "18:00", "19:00", "20:00"]
        );
        assert_eq!(TimeSlot::from_value("13:00"), Some(TimeSlot::Lunch1300));
        assert_eq!(TimeSlot::Lunch1300.label(), "1:00 PM");
        assert_eq!(TimeSlot::from_value("14:00"), None);
    }

    #[test]
    fn test_party_size_values_and_labels() {
        let options = PartySize::options();
        assert_eq!(options.len(), 9);
        assert_eq!(options[0].value, "1");
        assert_eq!(options[0].label, "1 Guest");
        assert_eq!(options[1].label, "2 Guests");
        assert_eq!(options[8].value, "9+");
        assert_eq!(options[8].label, "9+ Guests");
        assert_eq!(PartySize::DEFAULT.value(), "2");
    }

    #[test]
    fn test_party_size_parse() {
        assert_eq!(PartySize::from_value("9+"), Some(PartySize::NinePlus));
        assert_eq!(PartySize::from_value("8"), Some(PartySize::Guests(8)));
        assert_eq!(PartySize::from_value("0"), None);
        assert_eq!(PartySize::from_value("9"), None);
        assert_eq!(PartySize::from_value("two"), None);
    }

    #[test]
    fn test_occasion() {
        assert_eq!(Occasion::from_value("date"), Some(Occasion::DateNight));
        assert_eq!(Occasion::DateNight.label(), "Date Night");
        assert_eq!(Occasion::from_value(""), None);
        assert_eq!(Occasion::options().len(), 6);
    }
}
