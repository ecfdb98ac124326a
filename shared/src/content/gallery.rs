//! Gallery grid

use serde::Serialize;

/// Grid footprint of a tile, in columns x rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileSpan {
    pub cols: u8,
    pub rows: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub category: &'static str,
    pub span: TileSpan,
}

const fn span(cols: u8, rows: u8) -> TileSpan {
    TileSpan { cols, rows }
}

pub const GALLERY: [GalleryImage; 6] = [
    GalleryImage {
        src: "sunset-panorama.jpg",
        alt: "Sunset at Mirissa Beach",
        category: "Sunsets",
        span: span(2, 2),
    },
    GalleryImage {
        src: "cocktail-sunset.jpg",
        alt: "Signature Cocktails",
        category: "Cocktails",
        span: span(1, 1),
    },
    GalleryImage {
        src: "seafood-dish.jpg",
        alt: "Fresh Grilled Lobster",
        category: "Food",
        span: span(1, 1),
    },
    GalleryImage {
        src: "lounge-atmosphere.jpg",
        alt: "Beach Lounge Vibes",
        category: "Vibes",
        span: span(1, 2),
    },
    GalleryImage {
        src: "breakfast-hoppers.jpg",
        alt: "Traditional Sri Lankan Breakfast",
        category: "Food",
        span: span(1, 1),
    },
    GalleryImage {
        src: "hero-beach-sunset.jpg",
        alt: "Ocean View at Taboo",
        category: "Sunsets",
        span: span(2, 1),
    },
];
