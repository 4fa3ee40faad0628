//! Form Field Components
//!
//! Labelled inputs that show the validation message for their field and
//! clear it as soon as the user edits the value.

use leptos::prelude::*;

use blanq_core::validation::FieldErrors;

/// Inline message for `field`, if any
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, #[prop(into)] field: String) -> impl IntoView {
    view! {
        {move || errors.with(|e| e.get(&field).map(str::to_string)).map(|message| view! {
            <p class="field-error">{message}</p>
        })}
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    /// Error key, also used as the input name
    #[prop(into)] field: String,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let key = field.clone();
    let name = field.clone();
    let has_error = {
        let key = field.clone();
        move || errors.with(|e| e.contains(&key))
    };

    view! {
        <label class="form-field">
            <span class="form-label">
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </span>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                name=name
                placeholder=placeholder.unwrap_or_default()
                class=move || if has_error() { "input invalid" } else { "input" }
                prop:value=move || value.get()
                on:input=move |ev| {
                    errors.update(|e| e.clear_field(&key));
                    on_input.run(event_target_value(&ev));
                }
            />
            <FieldError errors=errors field=field />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] field: String,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let key = field.clone();

    view! {
        <label class="form-field">
            <span class="form-label">
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </span>
            <textarea
                class="input"
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| {
                    errors.update(|e| e.clear_field(&key));
                    on_input.run(event_target_value(&ev));
                }
            />
            <FieldError errors=errors field=field />
        </label>
    }
}

/// Dropdown over `(value, label)` pairs; an empty `placeholder` option comes first
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] field: String,
    errors: RwSignal<FieldErrors>,
    options: Vec<(String, String)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let key = field.clone();

    view! {
        <label class="form-field">
            <span class="form-label">
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </span>
            <select
                class="input"
                prop:value=move || value.get()
                on:change=move |ev| {
                    errors.update(|e| e.clear_field(&key));
                    on_change.run(event_target_value(&ev));
                }
            >
                {placeholder.map(|p| view! { <option value="">{p}</option> })}
                {options.into_iter().map(|(v, l)| {
                    let selected_value = v.clone();
                    view! {
                        <option value=v selected=move || value.get() == selected_value>{l}</option>
                    }
                }).collect_view()}
            </select>
            <FieldError errors=errors field=field />
        </label>
    }
}

/// `(value, label)` pairs where value and label are the same text
pub fn plain_options<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|v| (v.as_ref().to_string(), v.as_ref().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_options() {
        assert_eq!(
            plain_options(["Contracts", "Finance"]),
            vec![
                ("Contracts".to_string(), "Contracts".to_string()),
                ("Finance".to_string(), "Finance".to_string())
            ]
        );
    }
}
