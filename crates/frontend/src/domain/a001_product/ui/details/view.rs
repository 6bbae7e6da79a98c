use super::view_model::{parse_price, parse_qty, ProductDetailsViewModel};
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ProductDetails(id: Option<String>, on_done: Rc<dyn Fn()>) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(id);
    vm.load_if_needed();

    let form = vm.form;
    let is_edit = vm.is_edit_mode();
    let title = vm.mode.title();
    let submit_label = vm.mode.submit_label();

    let on_submit = {
        let vm = vm.clone();
        let on_done = on_done.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.save_command(on_done.clone());
        }
    };

    let on_delete = {
        let vm = vm.clone();
        let on_done = on_done.clone();
        move |_: leptos::ev::MouseEvent| vm.delete_command(on_done.clone())
    };

    let on_back = move |_: leptos::ev::MouseEvent| (on_done)();

    view! {
        <form class="details-container product-form" on:submit=on_submit>
            <div class="details-header">
                <h3 class="form-title">{title}</h3>
                {move || form.get().date_added.map(|d| view! {
                    <span class="details-header__meta">{format!("Added {}", format_datetime(&d))}</span>
                })}
            </div>

            <div class="details-form">
                <Input
                    id="name"
                    label="Product Name"
                    required=true
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                />
                <div class="form-row">
                    <Input
                        id="price"
                        label="Price"
                        input_type="number"
                        step="0.01"
                        required=true
                        value=Signal::derive(move || form.get().price.to_string())
                        on_input=Callback::new(move |v: String| form.update(|f| f.price = parse_price(&v)))
                    />
                    <Input
                        id="qty"
                        label="Stock Quantity"
                        input_type="number"
                        step="1"
                        required=true
                        value=Signal::derive(move || form.get().qty.to_string())
                        on_input=Callback::new(move |v: String| form.update(|f| f.qty = parse_qty(&v)))
                    />
                </div>
                <Input
                    id="image_url"
                    label="Image URL"
                    value=Signal::derive(move || form.get().image_url)
                    on_input=Callback::new(move |v: String| form.update(|f| f.image_url = v))
                />
                <Input
                    id="category"
                    label="Category"
                    required=true
                    value=Signal::derive(move || form.get().category)
                    on_input=Callback::new(move |v: String| form.update(|f| f.category = v))
                />
                <Textarea
                    id="description"
                    label="Description"
                    required=true
                    rows=4
                    value=Signal::derive(move || form.get().description)
                    on_input=Callback::new(move |v: String| form.update(|f| f.description = v))
                />
                <Checkbox
                    id="is_active"
                    label="Is Active"
                    checked=Signal::derive(move || form.get().is_active)
                    on_change=Callback::new(move |checked: bool| form.update(|f| f.is_active = checked))
                />
            </div>

            <div class="details-actions button-container">
                <button type="submit" class="button button--primary submit-button">
                    {icon("save")}
                    {submit_label}
                </button>
                {is_edit.then(|| view! {
                    <button type="button" class="button button--danger delete-button" on:click=on_delete>
                        {icon("delete")}
                        {"Delete"}
                    </button>
                })}
                <button type="button" class="button button--secondary" on:click=on_back>
                    {icon("back")}
                    {"Back"}
                </button>
            </div>
        </form>
    }
}
