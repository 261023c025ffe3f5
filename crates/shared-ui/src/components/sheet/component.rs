use dioxus::prelude::*;

/// Sliding side panel used for short create forms.
///
/// Clicking the backdrop calls `on_close`; clicks inside the panel do not.
#[component]
pub fn Sheet(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Title row of a sheet with its close button.
#[component]
pub fn SheetHeader(
    title: String,
    #[props(default)] description: String,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "sheet-header",
            div {
                h2 { class: "sheet-title", "{title}" }
                if !description.is_empty() {
                    p { class: "sheet-description", "{description}" }
                }
            }
            button {
                class: "sheet-close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| on_close.call(()),
                "\u{2715}"
            }
        }
    }
}

#[component]
pub fn SheetFooter(children: Element) -> Element {
    rsx! {
        div { class: "sheet-footer", {children} }
    }
}
