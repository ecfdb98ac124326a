//! Landing page view model
//!
//! Everything the `index.html` template reads, assembled per request.

use chrono::Datelike;
use serde::Serialize;

use shared::content::about::{AboutCopy, FOOTER_BLURB, HeroCopy, Stat};
use shared::content::gallery::GalleryImage;
use shared::content::venue::{self, ContactCard, SocialLink};
use shared::content::{
    ABOUT, EVENTS, Event, GALLERY, HERO, MenuCategory, MenuSection, NAV_LINKS, NavLink, STATS,
    VENUE, VenueInfo,
};
use shared::intake::contact::contact_cta_link;
use shared::models::{Occasion, PartySize, SelectOption, TimeSlot};
use shared::{AcknowledgmentNotice, ContactMessage, IntakeSurface, ReservationRequest};

use crate::core::Config;

#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    pub brand: &'static str,
    pub lounge: &'static str,
    pub site_url: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuTab {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuView {
    pub tabs: Vec<MenuTab>,
    pub active: MenuSection,
}

impl MenuView {
    pub fn new(active: MenuCategory) -> Self {
        Self {
            tabs: MenuCategory::ALL
                .iter()
                .map(|c| MenuTab {
                    id: c.id(),
                    label: c.label(),
                    active: *c == active,
                })
                .collect(),
            active: active.section(),
        }
    }
}

/// Open booking modal: current draft plus the select tables
#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub draft: ReservationRequest,
    /// Required fields left blank by a refused submit
    pub missing: Vec<String>,
    pub time_options: Vec<SelectOption>,
    pub guest_options: Vec<SelectOption>,
    pub occasion_options: Vec<SelectOption>,
}

impl BookingView {
    pub fn new(draft: ReservationRequest, missing: Vec<String>) -> Self {
        Self {
            draft,
            missing,
            time_options: TimeSlot::options(),
            guest_options: PartySize::options(),
            occasion_options: Occasion::options(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactFormView {
    pub draft: ContactMessage,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub site: SiteMeta,
    pub venue: VenueInfo,
    pub address: String,
    pub brand_mailto: String,
    pub nav: &'static [NavLink],
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub stats: &'static [Stat],
    pub menu: MenuView,
    pub gallery: &'static [GalleryImage],
    pub gallery_instagram: SocialLink,
    pub events: &'static [Event],
    pub contact_cards: &'static [ContactCard],
    pub footer_social: Vec<SocialLink>,
    pub footer_blurb: &'static str,
    pub contact_cta_url: String,
    pub contact: ContactFormView,
    /// Present only while the booking modal is open
    pub booking: Option<BookingView>,
    pub notice: Option<AcknowledgmentNotice>,
}

impl PageView {
    pub fn new(config: &Config, menu: MenuCategory) -> Self {
        Self {
            site: SiteMeta {
                brand: venue::BRAND_NAME,
                lounge: venue::LOUNGE_NAME,
                site_url: config.site_url.clone(),
                year: chrono::Local::now().year(),
            },
            venue: VENUE,
            address: VENUE.full_address(),
            brand_mailto: VENUE.brand_mailto(),
            nav: &NAV_LINKS,
            hero: HERO,
            about: ABOUT,
            stats: &STATS,
            menu: MenuView::new(menu),
            gallery: &GALLERY,
            gallery_instagram: venue::gallery_instagram(),
            events: &EVENTS,
            contact_cards: &venue::CONTACT_CARDS,
            footer_social: venue::footer_social_links(),
            footer_blurb: FOOTER_BLURB,
            contact_cta_url: contact_cta_link(),
            contact: ContactFormView {
                draft: ContactMessage::default(),
                missing: Vec::new(),
            },
            booking: None,
            notice: None,
        }
    }

    /// Render the booking modal from the surface state; closed renders nothing
    pub fn with_booking(mut self, surface: &IntakeSurface<ReservationRequest>) -> Self {
        self.booking = surface
            .draft()
            .map(|draft| BookingView::new(draft.clone(), Vec::new()));
        self
    }

    /// Flag required fields on the open modal
    pub fn with_booking_errors(mut self, missing: Vec<String>) -> Self {
        if let Some(booking) = self.booking.as_mut() {
            booking.missing = missing;
        }
        self
    }

    pub fn with_contact(mut self, surface: &IntakeSurface<ContactMessage>, missing: Vec<String>) -> Self {
        if let Some(draft) = surface.draft() {
            self.contact = ContactFormView {
                draft: draft.clone(),
                missing,
            };
        }
        self
    }

    pub fn with_notice(mut self, notice: AcknowledgmentNotice) -> Self {
        self.notice = Some(notice);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_view_marks_active_tab() {
        let view = MenuView::new(MenuCategory::Drinks);
        let active: Vec<_> = view.tabs.iter().filter(|t| t.active).map(|t| t.id).collect();
        assert_eq!(active, vec!["drinks"]);
        assert_eq!(view.active.label, "Cocktails");
    }

    #[test]
    fn test_closed_surface_renders_no_modal() {
        let config = Config::default();
        let page = PageView::new(&config, MenuCategory::DEFAULT)
            .with_booking(&IntakeSurface::closed())
            .with_booking_errors(vec!["name".into()]);
        assert!(page.booking.is_none());
    }

    #[test]
    fn test_open_surface_renders_default_draft() {
        let config = Config::default();
        let mut surface = IntakeSurface::closed();
        surface.open();
        let page = PageView::new(&config, MenuCategory::DEFAULT).with_booking(&surface);
        let booking = page.booking.unwrap();
        assert_eq!(booking.draft.guests, "2");
        assert_eq!(booking.time_options.len(), 7);
        assert_eq!(booking.guest_options.len(), 9);
    }
}
