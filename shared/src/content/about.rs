//! Hero banner and "Our Story" section copy

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    badge: "Mirissa, Sri Lanka",
    headline: "Sunset Cocktails &",
    headline_accent: "Beachfront Bliss",
    tagline: "Fresh Seafood • Sri Lankan Fusion • Live Music",
    image: "hero-beach-sunset.jpg",
    image_alt: "Mirissa Beach Sunset",
};

/// Headline figure in the about section; `suffix` is rendered highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub suffix: Option<&'static str>,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        value: "4.6",
        suffix: Some("★"),
        label: "TripAdvisor Rating",
    },
    Stat {
        value: "10K+",
        suffix: None,
        label: "Happy Guests",
    },
    Stat {
        value: "8:30AM",
        suffix: Some("-10PM"),
        label: "Opening Time",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutCopy {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub heading_accent: &'static str,
    pub paragraphs: [&'static str; 2],
    pub image: &'static str,
    pub image_alt: &'static str,
    pub location_badge: &'static str,
    pub location_note: &'static str,
}

pub const ABOUT: AboutCopy = AboutCopy {
    eyebrow: "Our Story",
    heading: "Mirissa's Premier",
    heading_accent: "Beach Lounge",
    paragraphs: [
        "Where the Indian Ocean meets epicurean excellence. Taboo Lounge is more than a restaurant, it's a sensory journey through Sri Lanka's finest flavors, served with your feet in the sand and the sunset painting the sky.",
        "From traditional hoppers at sunrise to signature cocktails at golden hour, every moment at Taboo is crafted to be unforgettable. Our chefs blend centuries-old Lankan recipes with contemporary techniques, while our bartenders shake up tropical magic you won't find anywhere else.",
    ],
    image: "lounge-atmosphere.jpg",
    image_alt: "Taboo Lounge Atmosphere",
    location_badge: "Beach Road, Mirissa",
    location_note: "Steps from the ocean, where every sunset tells a story",
};

pub const FOOTER_BLURB: &str = "Mirissa's premier beachfront destination where ocean views meet culinary excellence. Experience sunset cocktails, fresh seafood, and authentic Sri Lankan flavors.";
