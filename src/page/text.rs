//! Plain-text rendering of the recommendations list region for terminals

use super::ListContent;
use crate::models::Recommendation;

pub fn render_list(content: &ListContent) -> String {
    match content {
        ListContent::Cards(cards) => cards
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.message().map(str::to_string).unwrap_or_default(),
    }
}

pub fn render_card(rec: &Recommendation) -> String {
    let mut lines = vec![
        rec.name.clone(),
        format!("  ID: {}", rec.product_id),
        format!("  Category: {}", rec.category),
    ];
    if let Some(count) = rec.purchase_count {
        lines.push(format!("  Purchases: {}", count));
    }
    if let Some(score) = rec.similarity_score {
        lines.push(format!("  Similarity: {}", score));
    }
    let mut card = lines.join("\n");
    card.push('\n');
    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;
    use crate::page::PLACEHOLDER_TEXT;

    #[test]
    fn test_placeholder_text() {
        assert_eq!(render_list(&ListContent::Placeholder), PLACEHOLDER_TEXT);
        assert_eq!(render_list(&ListContent::Cleared), "");
    }

    #[test]
    fn test_card_lines() {
        let rec = Recommendation {
            product_id: ProductId("115".to_string()),
            name: "Instant Noodles (Pack)".to_string(),
            category: "Ready Meals".to_string(),
            purchase_count: None,
            similarity_score: Some(0.1234),
        };
        assert_eq!(
            render_list(&ListContent::Cards(vec![rec])),
            "Instant Noodles (Pack)\n  ID: 115\n  Category: Ready Meals\n  Similarity: 0.1234\n"
        );
    }
}
