//! Play button handler

use axum::extract::Form;
use axum::response::Html;
use serde::Deserialize;

use crate::components::notification_toast;

/// Form data posted by a card's play button
#[derive(Debug, Deserialize)]
pub struct PlayForm {
    /// Title of the item to play
    pub title: String,
}

/// Logs the play request and confirms it with a toast.
///
/// There is no player behind this yet; the request is only recorded.
pub async fn play_item(Form(form): Form<PlayForm>) -> Html<String> {
    let title = form.title.trim();
    if title.is_empty() {
        return Html(notification_toast("Nothing to play", "error"));
    }

    tracing::info!("Playing: {title}");
    Html(notification_toast(&format!("Playing: {title}"), "info"))
}
