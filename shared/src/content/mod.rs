//! Site content
//!
//! Static copy and tables rendered by the landing page and exposed over
//! the JSON API.

pub mod about;
pub mod events;
pub mod gallery;
pub mod menu;
pub mod navigation;
pub mod venue;

pub use about::{ABOUT, HERO, STATS};
pub use events::{EVENTS, Event};
pub use gallery::{GALLERY, GalleryImage};
pub use menu::{MenuCategory, MenuItem, MenuSection};
pub use navigation::{NAV_LINKS, NavLink};
pub use venue::{VENUE, VenueInfo};
