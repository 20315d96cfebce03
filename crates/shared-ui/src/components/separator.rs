use dioxus::prelude::*;

/// A horizontal rule between content sections.
#[component]
pub fn Separator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "separator", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            role: "separator",
            ..merged,
        }
    }
}
