use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::ProductRecord;
use crate::render::styles::PAGE_CSS;
use crate::render::{condense_number, rating_color, sort_attributes_for_display};

const EMOJI_STAR: &str = "⭐️";
const EMOJI_PACKAGE: &str = "📦";

/// Render a standalone results page with one card per record, in the given order
pub fn render_page(records: &[ProductRecord]) -> String {
    let cards: String = records.iter().map(render_card).collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Search results</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"product-card-container\">\n{}</div>\n</body>\n</html>\n",
        PAGE_CSS, cards
    )
}

fn render_card(record: &ProductRecord) -> String {
    let mut attributes = record.attributes.clone();
    sort_attributes_for_display(&mut attributes);

    let attribute_pills: String = attributes
        .iter()
        .map(|attr| format!("<li><span class=\"attribute-pill\">{}</span></li>", encode_text(attr)))
        .collect();

    let purchased = match record.num_purchased {
        Some(count) if count > 0 => format!("{} recent purchases", condense_number(count)),
        _ => String::new(),
    };

    format!(
        r#"<div class="product-card">
  <div class="product-card-image-container">
    <img src="{image}" alt="{alt}">
  </div>
  <div class="product-info">
    <div class="product-name-container">
      <a class="product-name" href="{href}" target="_blank">{name}</a>
    </div>
    <div class="review-score-container">
      {pill}
      <span class="num-purchased">{purchased}</span>
    </div>
    <div class="price-delivery-container">
      <div class="price">${price}</div>
      <div class="delivery-estimate">{package} {delivery}</div>
    </div>
  </div>
  <ul class="attributes-list">{attributes}</ul>
</div>
"#,
        image = encode_double_quoted_attribute(record.image_url.as_deref().unwrap_or_default()),
        alt = encode_double_quoted_attribute(&record.base_name),
        href = encode_double_quoted_attribute(record.product_url.as_deref().unwrap_or("#")),
        name = encode_text(&record.base_name),
        pill = rating_pill(record),
        purchased = purchased,
        price = record.rounded_price_display(),
        package = EMOJI_PACKAGE,
        delivery = encode_text(record.delivery_display()),
        attributes = attribute_pills,
    )
}

/// Nothing is rendered without a score
fn rating_pill(record: &ProductRecord) -> String {
    let Some(score) = record.review_score else {
        return String::new();
    };

    let count = match record.num_ratings {
        Some(n) if n > 0 => format!(" <span class=\"num-ratings\">{}</span>", condense_number(n)),
        _ => String::new(),
    };

    format!(
        "<span class=\"fa-pill {}\">{} {:.1}</span>{}",
        rating_color(score).class_name(),
        EMOJI_STAR,
        score,
        count
    )
}
