use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Labelled row holding a switch, used on settings forms.
#[component]
pub fn SwitchRow(
    label: String,
    #[props(default)] description: String,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "switch-row",
            div { class: "switch-row-text",
                span { class: "switch-row-label", "{label}" }
                if !description.is_empty() {
                    span { class: "switch-row-description", "{description}" }
                }
            }
            Switch {
                checked: Some(checked),
                on_checked_change: move |val: bool| on_change.call(val),
                SwitchThumb {}
            }
        }
    }
}
