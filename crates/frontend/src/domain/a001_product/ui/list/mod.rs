pub mod card;

use self::card::{ProductCard, ProductCardRow};
use crate::domain::a001_product::api;
use crate::routes::routes::ADD_PATH;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Catalog grid. Loads the products once per mount.
#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let navigate = use_navigate();
    let (items, set_items) = signal::<Vec<ProductCardRow>>(Vec::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_products().await {
                Ok(v) => {
                    log::debug!("Loaded {} products", v.len());
                    let rows: Vec<ProductCardRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                }
                Err(e) => log::error!("Failed to load products: {}", e),
            }
        });
    };

    let handle_add = move |_: leptos::ev::MouseEvent| navigate(ADD_PATH, Default::default());

    fetch();

    view! {
        <div class="product-list-container">
            <div class="header">
                <h2 class="product-list-title">{icon("products")}{"Product Catalog"}</h2>
                <div class="header__actions">
                    <button class="button button--primary add-product-button" on:click=handle_add>
                        {icon("plus")}
                        {"Add Product"}
                    </button>
                </div>
            </div>

            <div class="product-grid">
                {move || items.get().into_iter().enumerate().map(|(index, row)| {
                    let class = row.card_class();
                    let path = row.edit_path();
                    view! {
                        <A href=path>
                            <div class=class>
                                <ProductCard row=row index=index />
                            </div>
                        </A>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
