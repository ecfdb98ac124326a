mod common;

use common::{body_string, get, location, post_form};
use http::StatusCode;

const LOBSTER_DESCRIPTION: &str = "Fresh Mirissa lobster with garlic butter";

const COMPLETE_BOOKING: &str =
    "name=Kasun&phone=%2B94+77+123+4567&email=&date=2024-12-24&time=19%3A00&guests=4&occasion=&notes=Window+seat";

#[tokio::test]
async fn test_index_renders_all_sections() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    for id in ["about", "menu", "gallery", "events", "contact"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
    }
    assert!(html.contains("Meridian Escapes"));
    assert!(html.contains("Friday Sunset Sessions"));
    assert!(!html.contains("id=\"booking-modal\""));
    assert!(!html.contains("class=\"toast\""));
}

#[tokio::test]
async fn test_booking_query_opens_modal_with_defaults() {
    let html = body_string(get("/?booking=open").await).await;
    assert!(html.contains("id=\"booking-modal\""));
    assert!(html.contains("<option value=\"2\" selected>2 Guests</option>"));
    assert!(html.contains("value=\"\" placeholder=\"Your name\""));
}

#[tokio::test]
async fn test_menu_query_selects_tab() {
    let html = body_string(get("/?menu=drinks").await).await;
    assert!(html.contains("class=\"menu-tab active\">Cocktails</a>"));
    assert!(html.contains("Ceylon arrack, passion fruit, lime"));
    assert!(!html.contains("class=\"menu-tab active\">Signature Mains</a>"));
    assert!(!html.contains(LOBSTER_DESCRIPTION));
}

#[tokio::test]
async fn test_unknown_menu_tab_falls_back_to_mains() {
    let response = get("/?menu=desserts").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("class=\"menu-tab active\">Signature Mains</a>"));
    assert!(html.contains(LOBSTER_DESCRIPTION));
    assert!(!html.contains("Ceylon arrack, passion fruit, lime"));
}

#[tokio::test]
async fn test_incomplete_booking_keeps_modal_open() {
    let response = post_form("/reservations", "name=Kasun&guests=4&notes=Window+seat").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("id=\"booking-modal\""));
    assert!(html.contains("value=\"Kasun\""));
    assert!(html.contains("Please fill out: phone, date, time"));
    assert!(!html.contains("Reservation Request Sent!"));
}

#[tokio::test]
async fn test_complete_booking_shows_notice_and_closes() {
    let response = post_form("/reservations", COMPLETE_BOOKING).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Reservation Request Sent!"));
    assert!(html.contains("We&#x27;ll confirm your booking within 2 hours."));
    assert!(!html.contains("id=\"booking-modal\""));
    assert!(!html.contains("value=\"Kasun\""));
}

#[tokio::test]
async fn test_booking_reopened_after_accept_is_blank() {
    let accepted = post_form("/reservations", COMPLETE_BOOKING).await;
    assert_eq!(accepted.status(), StatusCode::OK);

    let html = body_string(get("/?booking=open").await).await;
    assert!(html.contains("id=\"booking-modal\""));
    assert!(html.contains("value=\"\" placeholder=\"Your name\""));
    assert!(html.contains("<option value=\"2\" selected>2 Guests</option>"));
    assert!(!html.contains("value=\"Kasun\""));
    assert!(!html.contains("Window seat"));
}

#[tokio::test]
async fn test_whatsapp_button_redirects_without_validation() {
    let response = post_form("/reservations/whatsapp", "name=&guests=2").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let url = location(&response);
    assert!(url.starts_with("https://wa.me/94777301747?text="));
    assert!(url.contains("Not%20specified"));
}

#[tokio::test]
async fn test_contact_form_refused_then_accepted() {
    let refused = post_form("/contact", "name=Nimali&email=&phone=&message=").await;
    assert_eq!(refused.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(refused).await;
    assert!(html.contains("Please fill out: email, message"));
    assert!(html.contains("value=\"Nimali\""));
    assert!(!html.contains("Message Sent!"));

    let accepted = post_form(
        "/contact",
        "name=Nimali&email=nimali%40example.com&phone=&message=Private+dinner%3F",
    )
    .await;
    assert_eq!(accepted.status(), StatusCode::OK);
    let html = body_string(accepted).await;
    assert!(html.contains("Message Sent!"));
    assert!(!html.contains("value=\"Nimali\""));
}

#[tokio::test]
async fn test_contact_cta_redirect() {
    let response = get("/contact/whatsapp").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("https://wa.me/94777301747?text=Hi%21"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let response = get("/assets/site.css").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = get("/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
