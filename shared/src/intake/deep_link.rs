//! WhatsApp deep links
//!
//! `https://wa.me/<id>?text=<percent-encoded text>`. Opening the link is
//! left to the browser.

/// WhatsApp click-to-chat base URL
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Build a click-to-chat link that pre-fills `text`
pub fn whatsapp_link(contact_id: &str, text: &str) -> String {
    // Everything outside A-Z a-z 0-9 - . _ ~ is escaped, `!'()*` included
    format!(
        "{WHATSAPP_BASE_URL}/{contact_id}?text={}",
        urlencoding::encode(text)
    )
}

/// Decode the pre-filled text back out of a link built by [`whatsapp_link`]
pub fn message_text(link: &str) -> Option<String> {
    let (_, encoded) = link.split_once("?text=")?;
    urlencoding::decode(encoded).ok().map(|text| text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_shape() {
        let link = whatsapp_link("94777301747", "Hi there");
        assert_eq!(link, "https://wa.me/94777301747?text=Hi%20there");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let link = whatsapp_link("1", "a&b=c\n- d: e?");
        let (_, encoded) = link.split_once("?text=").unwrap();
        for ch in ['&', '=', '\n', ' ', ':', '?'] {
            assert!(!encoded.contains(ch), "{ch:?} left unencoded in {encoded}");
        }
        assert_eq!(message_text(&link).as_deref(), Some("a&b=c\n- d: e?"));
    }

    #[test]
    fn test_sub_delims_are_escaped() {
        let link = whatsapp_link("1", "Hi! I'd (really) like*");
        assert_eq!(
            link,
            "https://wa.me/1?text=Hi%21%20I%27d%20%28really%29%20like%2A"
        );
        assert_eq!(message_text(&link).as_deref(), Some("Hi! I'd (really) like*"));
    }

    #[test]
    fn test_message_text_without_query() {
        assert_eq!(message_text("https://wa.me/1"), None);
    }

    #[test]
    fn test_unicode_text() {
        let link = whatsapp_link("1", "ආයුබෝවන් 🌅");
        assert!(link.is_ascii());
        assert_eq!(message_text(&link).as_deref(), Some("ආයුබෝවන් 🌅"));
    }
}
