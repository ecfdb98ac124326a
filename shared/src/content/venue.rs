//! Venue contact details (门店信息)

use serde::Serialize;

pub const BRAND_NAME: &str = "Meridian Escapes";
pub const LOUNGE_NAME: &str = "Taboo Lounge";

/// WhatsApp identifier (E.164 digits, no `+`) receiving booking messages
pub const WHATSAPP_CONTACT_ID: &str = "94777301747";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3967.8!2d80.4597!3d5.9486!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2sMirissa%20Beach!5e0!3m2!1sen!2slk!4v1234567890";

/// A dialable number: display text plus `tel:` href
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    pub display: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
}

/// One card of the contact section (Location / Phone / Email / Hours)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub subtext: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VenueInfo {
    pub brand: &'static str,
    pub lounge: &'static str,
    pub street: &'static str,
    pub town: &'static str,
    pub country: &'static str,
    pub phone: PhoneNumber,
    pub emergency_phone: PhoneNumber,
    pub brand_email: &'static str,
    pub lounge_email: &'static str,
    pub hours: &'static str,
    pub hours_note: &'static str,
    pub whatsapp_id: &'static str,
    pub map_embed_url: &'static str,
}

pub const VENUE: VenueInfo = VenueInfo {
    brand: BRAND_NAME,
    lounge: LOUNGE_NAME,
    street: "Beach Road",
    town: "Mirissa 81740",
    country: "Sri Lanka",
    phone: PhoneNumber {
        display: "+94 77 730 1747",
        href: "tel:+94777301747",
    },
    emergency_phone: PhoneNumber {
        display: "+94 74 046 8422",
        href: "tel:+94740468422",
    },
    brand_email: "hello@meridianescapes.lk",
    lounge_email: "hello@taboolounge.lk",
    hours: "8:30 AM - 10:00 PM",
    hours_note: "Open Daily",
    whatsapp_id: WHATSAPP_CONTACT_ID,
    map_embed_url: MAP_EMBED_URL,
};

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        network: "Instagram",
        handle: "@meridianescapes",
        url: "https://instagram.com/meridianescapes",
    },
    SocialLink {
        network: "Facebook",
        handle: "meridianescapes",
        url: "https://facebook.com/meridianescapes",
    },
    SocialLink {
        network: "Instagram",
        handle: "@tabooloungemirissa",
        url: "https://instagram.com/tabooloungemirissa",
    },
];

pub const CONTACT_CARDS: [ContactCard; 4] = [
    ContactCard {
        label: "Location",
        value: "Beach Road, Mirissa 81740",
        href: None,
        subtext: Some("Sri Lanka"),
    },
    ContactCard {
        label: "Phone",
        value: "+94 77 730 1747",
        href: Some("tel:+94777301747"),
        subtext: None,
    },
    ContactCard {
        label: "Email",
        value: "hello@taboolounge.lk",
        href: Some("mailto:hello@taboolounge.lk"),
        subtext: None,
    },
    ContactCard {
        label: "Hours",
        value: "8:30 AM - 10:00 PM",
        href: None,
        subtext: Some("Open Daily"),
    },
];

impl VenueInfo {
    /// "Beach Road, Mirissa 81740, Sri Lanka"
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.street, self.town, self.country)
    }

    pub fn brand_mailto(&self) -> String {
        format!("mailto:{}", self.brand_email)
    }
}

/// Social links shown in the footer (brand accounts only)
pub fn footer_social_links() -> Vec<SocialLink> {
    SOCIAL_LINKS
        .into_iter()
        .filter(|link| link.handle.contains("meridianescapes"))
        .collect()
}

/// The lounge's own Instagram account, linked from the gallery
pub fn gallery_instagram() -> SocialLink {
    SOCIAL_LINKS[2]
}
