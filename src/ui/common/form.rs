use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline validation message rendered right after its field
#[component]
fn FieldErrorNode(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="field-error" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text" />
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Labeled single-line input
#[component]
pub fn TextField(
    /// Form control name
    name: &'static str,
    label: &'static str,
    /// Shows the required marker
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    /// Validation message, if any
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                id=name
                name=name
                type=input_type
                class="form-input"
                class:error=move || error.with(Option::is_some)
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldErrorNode error=error />
        </div>
    }
}

/// Labeled multi-line input
#[component]
pub fn TextAreaField(
    name: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 5)]
    rows: u32,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <textarea
                id=name
                name=name
                class="form-input form-textarea"
                class:error=move || error.with(Option::is_some)
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldErrorNode error=error />
        </div>
    }
}

/// Select with `(value, label)` options; the first option is usually a blank prompt
#[component]
pub fn SelectField(
    name: &'static str,
    label: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=name>{label}</label>
            <select
                id=name
                name=name
                class="form-input form-select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|(val, text)| view! { <option value=*val>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Checkbox with a trailing label
#[component]
pub fn CheckboxField(
    name: &'static str,
    /// Submitted value
    value: &'static str,
    label: &'static str,
    checked: Signal<bool>,
    on_change: Callback<bool>,
    /// Validation message, for checkboxes that are required
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.is_some_and(|e| e.with(Option::is_some));

    view! {
        <div class="checkbox-group">
            <label class="checkbox-label" class:error=has_error>
                <input
                    type="checkbox"
                    name=name
                    value=value
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <span>{label}</span>
            </label>
            {error.map(|error| view! { <FieldErrorNode error=error /> })}
        </div>
    }
}
