use dioxus::prelude::*;

/// Derive a stable element id from a field label, so the label's `for`
/// attribute reaches the input. Returns `None` when nothing usable remains.
fn field_id(label: &str) -> Option<String> {
    let slug: String = label
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | '0'..='9' => Some(c),
            'A'..='Z' => Some(c.to_ascii_lowercase()),
            ' ' | '-' | '_' => Some('-'),
            _ => None,
        })
        .collect();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        None
    } else {
        Some(format!("field-{slug}"))
    }
}

/// A labeled mobile text input.
///
/// The label, when present, is attached to the input through a derived id so
/// tapping it focuses the field.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] hint: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let id = field_id(&label);

    rsx! {
        div { class: "input-wrapper",
            if !label.is_empty() {
                label {
                    class: "input-label",
                    r#for: id.clone().unwrap_or_default(),
                    "{label}"
                }
            }
            input {
                id: id.unwrap_or_default(),
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if !hint.is_empty() {
                p { class: "input-hint", "{hint}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_id_slugifies_labels() {
        assert_eq!(field_id("Username").as_deref(), Some("field-username"));
        assert_eq!(field_id("First name").as_deref(), Some("field-first-name"));
    }

    #[test]
    fn field_id_strips_punctuation() {
        assert_eq!(field_id("Password (again)").as_deref(), Some("field-password-again"));
    }

    #[test]
    fn field_id_empty_label_yields_none() {
        assert_eq!(field_id(""), None);
        assert_eq!(field_id("!!!"), None);
    }
}
