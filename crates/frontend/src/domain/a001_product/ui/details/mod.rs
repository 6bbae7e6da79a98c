mod view;
mod view_model;

use crate::routes::routes::LIST_PATH;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;
pub use view::ProductDetails;
pub use view_model::{FormMode, SubmitAction};

/// Route entry for `/add` and `/edit/:id`.
///
/// The id is read once; the form keeps its mode until it is remounted.
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id"));
    let navigate = use_navigate();
    let back_to_list: Rc<dyn Fn()> = Rc::new(move || navigate(LIST_PATH, Default::default()));

    view! {
        <ProductDetails id=id on_done=back_to_list />
    }
}
