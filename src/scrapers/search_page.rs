use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::ListingSelectors;
use crate::error::RemixError;
use crate::models::ListingFragment;

struct CompiledSelectors {
    container: Selector,
    title: Selector,
    review_score: Selector,
    rating_count: Selector,
    purchased: Selector,
    price: Selector,
    delivery: Selector,
    image: Selector,
    product_link: Selector,
}

impl CompiledSelectors {
    fn compile(selectors: &ListingSelectors) -> Result<Self, RemixError> {
        Ok(Self {
            container: compile("container", &selectors.container)?,
            title: compile("title", &selectors.title)?,
            review_score: compile("review_score", &selectors.review_score)?,
            rating_count: compile("rating_count", &selectors.rating_count)?,
            purchased: compile("purchased", &selectors.purchased)?,
            price: compile("price", &selectors.price)?,
            delivery: compile("delivery", &selectors.delivery)?,
            image: compile("image", &selectors.image)?,
            product_link: compile("product_link", &selectors.product_link)?,
        })
    }
}

fn compile(field: &'static str, selector: &str) -> Result<Selector, RemixError> {
    Selector::parse(selector).map_err(|_| RemixError::InvalidSelector {
        field,
        selector: selector.to_string(),
    })
}

/// Cut a results document into one fragment per listing, in document order.
///
/// A document without any listing container yields an empty list. Only an
/// invalid configured selector is an error.
pub fn isolate_listings(
    html: &str,
    selectors: &ListingSelectors,
) -> Result<Vec<ListingFragment>, RemixError> {
    let compiled = CompiledSelectors::compile(selectors)?;
    let document = Html::parse_document(html);

    let fragments: Vec<ListingFragment> = document
        .select(&compiled.container)
        .map(|card| isolate_card(card, &compiled, &selectors.identity_attr))
        .collect();

    debug!("Isolated {} listing fragments", fragments.len());
    Ok(fragments)
}

fn isolate_card(card: ElementRef, selectors: &CompiledSelectors, identity_attr: &str) -> ListingFragment {
    ListingFragment {
        identity: card
            .value()
            .attr(identity_attr)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        title: text_of(card, &selectors.title),
        review_label: attr_of(card, &selectors.review_score, "aria-label"),
        ratings_label: attr_of(card, &selectors.rating_count, "aria-label"),
        purchased_text: text_of(card, &selectors.purchased),
        price_text: text_of(card, &selectors.price),
        delivery_text: text_of(card, &selectors.delivery),
        image_ref: attr_of(card, &selectors.image, "src"),
        link_ref: attr_of(card, &selectors.product_link, "href"),
    }
}

fn text_of(card: ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

fn attr_of(card: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string())
}
