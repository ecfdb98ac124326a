//! HTML rendering
//!
//! Templates are compiled into the binary and registered with a single
//! [`Tera`] instance at startup. Names end in `.html`, so autoescaping
//! applies to every interpolated value (guest input included).

pub mod page;

use serde::Serialize;
use tera::{Context, Tera};

use shared::{AppError, AppResult};

pub use page::{BookingView, ContactFormView, MenuView, PageView};

pub const INDEX_TEMPLATE: &str = "index.html";

const TEMPLATES: [(&str, &str); 7] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    (
        "partials/menu.html",
        include_str!("../../templates/partials/menu.html"),
    ),
    (
        "partials/contact.html",
        include_str!("../../templates/partials/contact.html"),
    ),
    (
        "partials/booking_modal.html",
        include_str!("../../templates/partials/booking_modal.html"),
    ),
    (
        "partials/notice.html",
        include_str!("../../templates/partials/notice.html"),
    ),
    (
        "partials/footer.html",
        include_str!("../../templates/partials/footer.html"),
    ),
];

/// Compiled template set
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| AppError::template(format!("Failed to load templates: {e}")))?;
        Ok(Self { tera })
    }

    pub fn render<T: Serialize>(&self, template: &str, view: &T) -> AppResult<String> {
        let context = Context::from_serialize(view)
            .map_err(|e| AppError::template(format!("Invalid template context: {e}")))?;
        self.tera.render(template, &context).map_err(|e| {
            // tera nests the useful message in the source chain
            let mut message = e.to_string();
            let mut source = std::error::Error::source(&e);
            while let Some(inner) = source {
                message.push_str(": ");
                message.push_str(&inner.to_string());
                source = inner.source();
            }
            AppError::template(format!("Failed to render {template}: {message}"))
        })
    }

    pub fn render_page(&self, view: &PageView) -> AppResult<String> {
        self.render(INDEX_TEMPLATE, view)
    }
}
