use crate::domain::a001_product::ui::details::ProductDetailsPage;
use crate::domain::a001_product::ui::list::ProductList;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// Paths the app navigates to
pub const LIST_PATH: &str = "/";
pub const ADD_PATH: &str = "/add";

/// Edit form path for a product; the id is percent-encoded as one segment
pub fn edit_path(id: &str) -> String {
    format!("/edit/{}", urlencoding::encode(id))
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=ProductList />
                    <Route path=path!("/add") view=ProductDetailsPage />
                    <Route path=path!("/edit/:id") view=ProductDetailsPage />
                </Routes>
            </main>
        </Router>
    }
}
