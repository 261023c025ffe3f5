use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, PageActions, PageHeader, PageTitle};

/// Inventory page header. Each click on "Add Item" calls `on_add` once; the
/// header itself keeps no state.
#[component]
pub fn InventoryHeader(on_add: EventHandler<()>) -> Element {
    rsx! {
        PageHeader { class: "inventory-header",
            PageTitle { "Inventory" }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_add.call(()),
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Add Item"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{click_until, mount, render_to_string};
    use std::cell::Cell;

    thread_local! {
        static ADD_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    fn app() -> Element {
        rsx! {
            InventoryHeader {
                on_add: move |_| ADD_CALLS.with(|calls| calls.set(calls.get() + 1)),
            }
        }
    }

    #[test]
    fn renders_title_and_add_button() {
        let html = render_to_string(app);
        assert!(html.contains("<h1 class=\"page-title\">Inventory</h1>"));
        assert!(html.contains("Add Item"));
        assert_eq!(html.matches("<button").count(), 1);
    }

    #[test]
    fn rendering_never_invokes_on_add() {
        render_to_string(app);
        render_to_string(app);
        assert_eq!(ADD_CALLS.with(Cell::get), 0);
    }

    #[test]
    fn one_click_calls_on_add_once() {
        let mut dom = mount(app);
        let clicked = click_until(&mut dom, |_| ADD_CALLS.with(Cell::get) > 0);
        assert!(clicked);
        assert_eq!(ADD_CALLS.with(Cell::get), 1);
    }

    #[test]
    fn rerender_is_identical() {
        pretty_assertions::assert_eq!(render_to_string(app), render_to_string(app));
    }
}
