//! Recurring live events

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Event {
    pub title: &'static str,
    pub description: &'static str,
    pub day: &'static str,
    pub time: &'static str,
    pub featured: bool,
}

pub const EVENTS: [Event; 4] = [
    Event {
        title: "Friday Sunset Sessions",
        description: "Live DJ sets as the sun dips below the horizon. Cocktail specials all evening.",
        day: "Every Friday",
        time: "5:00 PM - 10:00 PM",
        featured: true,
    },
    Event {
        title: "Sri Lankan Cultural Night",
        description: "Traditional dance performances, authentic cuisine tasting & local music.",
        day: "Saturdays",
        time: "7:00 PM - 10:00 PM",
        featured: false,
    },
    Event {
        title: "Acoustic Beach Evenings",
        description: "Intimate acoustic performances under the stars with specialty wines.",
        day: "Wednesdays",
        time: "6:30 PM - 9:30 PM",
        featured: false,
    },
    Event {
        title: "Full Moon Beach Party",
        description: "Monthly celebration under the moon with fire dancers & themed cocktails.",
        day: "Every Full Moon",
        time: "8:00 PM - Late",
        featured: true,
    },
];
