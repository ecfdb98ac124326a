//! Section navigation

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// In-page href, e.g. `#menu`
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Shared by the top bar and the footer's quick links
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { anchor: "about", label: "About" },
    NavLink { anchor: "menu", label: "Menu" },
    NavLink { anchor: "gallery", label: "Gallery" },
    NavLink { anchor: "events", label: "Events" },
    NavLink { anchor: "contact", label: "Contact" },
];
