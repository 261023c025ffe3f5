use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, PageHeader, PageTitle};

/// Header for a listing section: a title plus an optional "create" button.
///
/// The button is rendered only when both its text and its target path are
/// given. Activating it pushes `create_button_path` onto the router; the path
/// is treated as an opaque route string.
#[component]
pub fn SectionHeader(
    title: String,
    #[props(default)] create_button_text: Option<String>,
    #[props(default)] create_button_path: Option<String>,
) -> Element {
    rsx! {
        PageHeader { class: "section-header",
            PageTitle { "{title}" }
            if let (Some(text), Some(path)) = (create_button_text, create_button_path) {
                CreateButton { text, path }
            }
        }
    }
}

#[component]
fn CreateButton(text: String, path: String) -> Element {
    let target = path.clone();

    rsx! {
        div { class: "page-actions", "data-route": "{path}",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    navigator().push(target.clone());
                },
                "{text}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{click_until, mount, render};
    use dioxus_history::{provide_history_context, MemoryHistory};
    use std::rc::Rc;

    #[derive(Clone, Routable, Debug, PartialEq)]
    enum Section {
        #[route("/nurses")]
        Nurses {},
        #[route("/nurses/add")]
        NurseCreate {},
    }

    #[component]
    fn Nurses() -> Element {
        rsx! {
            SectionHeader {
                title: "Nurses",
                create_button_text: "Add Nurse".to_string(),
                create_button_path: "/nurses/add".to_string(),
            }
        }
    }

    #[component]
    fn NurseCreate() -> Element {
        rsx! {
            p { class: "nurse-create", "New nurse" }
        }
    }

    fn routed_app() -> Element {
        use_hook(|| provide_history_context(Rc::new(MemoryHistory::with_initial_path("/nurses"))));
        rsx! { Router::<Section> {} }
    }

    #[test]
    fn renders_title_and_create_button() {
        let html = render(|| {
            rsx! {
                SectionHeader {
                    title: "Nurses",
                    create_button_text: "Add Nurse".to_string(),
                    create_button_path: "/nurses/add".to_string(),
                }
            }
        });
        assert!(html.contains("<h1 class=\"page-title\">Nurses</h1>"));
        assert!(html.contains("Add Nurse"));
        assert!(html.contains("data-route=\"/nurses/add\""));
        assert!(html.contains("type=\"button\""));
    }

    #[test]
    fn button_omitted_without_path() {
        let html = render(|| {
            rsx! {
                SectionHeader {
                    title: "Nurses",
                    create_button_text: "Add Nurse".to_string(),
                }
            }
        });
        assert!(html.contains("Nurses"));
        assert!(!html.contains("Add Nurse"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn title_only_header() {
        let html = render(|| rsx! { SectionHeader { title: "Reports" } });
        assert!(html.contains("Reports"));
        assert!(!html.contains("page-actions"));
    }

    #[test]
    fn rendering_is_idempotent() {
        fn app() -> Element {
            rsx! {
                SectionHeader {
                    title: "Nurses",
                    create_button_text: "Add Nurse".to_string(),
                    create_button_path: "/nurses/add".to_string(),
                }
            }
        }
        pretty_assertions::assert_eq!(render(app), render(app));
    }

    #[test]
    fn clicking_create_navigates_to_path() {
        let mut dom = mount(routed_app);
        assert!(!dioxus_ssr::render(&dom).contains("nurse-create"));

        let navigated = click_until(&mut dom, |dom| dioxus_ssr::render(dom).contains("nurse-create"));
        assert!(navigated);
        assert!(!dioxus_ssr::render(&dom).contains("<h1 class=\"page-title\">Nurses</h1>"));
    }
}
