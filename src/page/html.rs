//! Markup for the recommendations list region

use std::fmt::Write;

use super::ListContent;
use crate::models::Recommendation;

/// CSS class carried by every recommendation card
pub const CARD_CLASS: &str = "recommendation-card";

/// Renders the whole list region
pub fn render_list(content: &ListContent) -> String {
    match content {
        ListContent::Cards(cards) => cards.iter().map(render_card).collect(),
        ListContent::Cleared => String::new(),
        other => match other.message() {
            Some(message) => format!("<p>{}</p>", escape(message)),
            None => String::new(),
        },
    }
}

/// Renders one card. Purchase count and similarity lines appear only when set.
pub fn render_card(rec: &Recommendation) -> String {
    let mut card = format!(
        "<div class=\"{}\"><h3>{}</h3><p><strong>ID:</strong> {}</p><p><strong>Category:</strong> {}</p>",
        CARD_CLASS,
        escape(&rec.name),
        escape(&rec.product_id.0),
        escape(&rec.category),
    );
    if let Some(count) = rec.purchase_count {
        let _ = write!(card, "<p><strong>Purchases:</strong> {}</p>", count);
    }
    if let Some(score) = rec.similarity_score {
        let _ = write!(card, "<p><strong>Similarity:</strong> {}</p>", score);
    }
    card.push_str("</div>");
    card
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
