use crate::domain::a001_product::api;
use crate::shared::error::ApiError;
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId, ValidationError};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

/// Whether the form creates a new product or edits an existing one.
///
/// Decided once from the route when the form mounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    /// The route carries the id percent-encoded
    pub fn from_route(id: Option<String>) -> Self {
        id.map(|raw| match urlencoding::decode(&raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw,
        })
        .and_then(|raw| ProductId::from_string(&raw).ok())
        .map(|id| FormMode::Edit(id.value().to_string()))
        .unwrap_or(FormMode::Create)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// Identifier a delete would target; only edit mode has one
    pub fn delete_target(&self) -> Option<&str> {
        match self {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Product"
        } else {
            "Add a New Product"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update"
        } else {
            "Submit"
        }
    }
}

/// Request a valid form submission turns into
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAction {
    Create(Product),
    Update(String, Product),
}

impl SubmitAction {
    /// Validate the form and pick the request for the current mode
    pub fn for_form(mode: &FormMode, form: &ProductDto) -> Result<Self, ValidationError> {
        form.validate()?;
        let mut payload = form.to_payload();
        Ok(match mode {
            FormMode::Create => SubmitAction::Create(payload),
            FormMode::Edit(id) => {
                payload.id = Some(ProductId::new(id.clone()));
                SubmitAction::Update(id.clone(), payload)
            }
        })
    }
}

/// Number field text to a price; anything unparsable is 0
pub fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Number field text to a stock quantity; fractions are truncated
pub fn parse_qty(raw: &str) -> i32 {
    let raw = raw.trim();
    raw.parse::<i32>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v as i32)
        })
        .unwrap_or(0)
}

/// Whether the form returns to the list once a save has finished.
///
/// A failed save keeps the user on the form.
pub fn navigate_after_save(result: &Result<Product, ApiError>) -> bool {
    result.is_ok()
}

/// Whether the form returns to the list once a delete has finished.
///
/// Always true: the outcome of a delete does not keep the user on the form.
pub fn navigate_after_delete(_result: &Result<(), ApiError>) -> bool {
    true
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// ViewModel for the product add/edit form
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub mode: FormMode,
    pub form: RwSignal<ProductDto>,
}

impl ProductDetailsViewModel {
    pub fn new(id: Option<String>) -> Self {
        Self {
            mode: FormMode::from_route(id),
            form: RwSignal::new(ProductDto::default()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode.is_edit()
    }

    /// Load the product being edited; create mode keeps the blank form
    pub fn load_if_needed(&self) {
        let FormMode::Edit(existing_id) = self.mode.clone() else {
            return;
        };
        let form = self.form;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_product_by_id(&existing_id).await {
                Ok(product) => form.set(ProductDto::from(product)),
                Err(e) => log::error!("Failed to load product {}: {}", existing_id, e),
            }
        });
    }

    /// Validate, then create or update. `on_saved` runs only on success.
    pub fn save_command(&self, on_saved: Rc<dyn Fn()>) {
        let action = match SubmitAction::for_form(&self.mode, &self.form.get_untracked()) {
            Ok(action) => action,
            Err(e) => {
                log::warn!("Submission blocked: {:?}", e);
                alert(&e.to_string());
                return;
            }
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = match &action {
                SubmitAction::Create(product) => api::create_product(product).await,
                SubmitAction::Update(id, product) => api::update_product(id, product).await,
            };
            match &result {
                Ok(saved) => log::info!("Saved product {}", saved.to_string_id()),
                Err(e) => log::error!("Failed to save product: {}", e),
            }
            if navigate_after_save(&result) {
                (on_saved)();
            }
        });
    }

    /// Delete the product being edited, then run `on_done` whatever the outcome
    pub fn delete_command(&self, on_done: Rc<dyn Fn()>) {
        let Some(id) = self.mode.delete_target().map(str::to_string) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::delete_product(&id).await;
            match &result {
                Ok(()) => log::info!("Deleted product {}", id),
                Err(e) => log::error!("Failed to delete product {}: {}", id, e),
            }
            if navigate_after_delete(&result) {
                (on_done)();
            }
        });
    }
}
