//! CardAnimated: a Thaw Card that fades in when mounted.
//!
//! The `card-appear` keyframes come from the page stylesheet. Passing a growing
//! `delay_ms` to consecutive cards gives a staggered entrance.
//!
//! # Example
//! ```rust,ignore
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=40>  // card 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Longest stagger delay, so large catalogs don't keep animating for seconds
const MAX_DELAY_MS: u32 = 400;

/// Inline style for the `card-appear` animation
pub fn animation_style(delay_ms: u32, extra: &str) -> String {
    let delay_ms = delay_ms.min(MAX_DELAY_MS);
    if extra.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, extra
        )
    }
}

/// Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = animation_style(delay_ms, &style);

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
