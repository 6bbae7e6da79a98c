use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

use crate::routes::routes::edit_path;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_price;

/// Delay between consecutive cards' entrance animations
const STAGGER_MS: u32 = 40;

/// Display data for one product card
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCardRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub date_added: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl From<Product> for ProductCardRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.to_string_id(),
            image_url: p.image().map(str::to_string),
            name: p.name,
            description: p.description.unwrap_or_default(),
            price: format_price(p.price),
            stock: format!("Stock: {}", p.qty),
            date_added: p.date_added.as_ref().map(format_date),
            is_active: p.is_active,
        }
    }
}

impl ProductCardRow {
    /// Inactive products get the `inactive` modifier
    pub fn card_class(&self) -> &'static str {
        if self.is_active {
            "product-card"
        } else {
            "product-card inactive"
        }
    }

    /// Route of the edit form for this product
    pub fn edit_path(&self) -> String {
        edit_path(&self.id)
    }
}

/// One product in the catalog grid
#[component]
pub fn ProductCard(row: ProductCardRow, index: usize) -> impl IntoView {
    let delay_ms = (index as u32).saturating_mul(STAGGER_MS);
    let alt = row.name.clone();

    view! {
        <CardAnimated delay_ms=delay_ms style="height: 100%;">
            {row.image_url.map(|src| view! {
                <img class="product-image" src=src alt=alt.clone() title=alt height="200" />
            })}
            <div class="product-card__content">
                <h3 class="product-title">{row.name}</h3>
                <p class="product-description">{row.description}</p>
                <div class="product-price">{row.price}</div>
                <div class="product-stock">{row.stock}</div>
                {row.date_added.map(|d| view! {
                    <div class="product-date">{format!("Added: {}", d)}</div>
                })}
            </div>
        </CardAnimated>
    }
}
