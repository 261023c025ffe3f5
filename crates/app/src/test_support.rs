//! Server-side rendering helpers for component tests.

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Event, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

const MAX_ELEMENT_ID: usize = 256;

/// Build `app` and return the mounted dom.
pub fn mount(app: fn() -> Element) -> VirtualDom {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dom
}

/// Render a root component to HTML after its first build.
pub fn render_to_string(app: fn() -> Element) -> String {
    dioxus_ssr::render(&mount(app))
}

/// Re-render whatever state changes left dirty.
pub fn flush(dom: &mut VirtualDom) {
    dom.render_immediate(&mut NoOpMutations);
}

/// Click mounted elements in creation order until `reacted` returns true.
/// Each element gets at most one click; ones without a listener ignore it.
pub fn click_until(dom: &mut VirtualDom, reacted: impl Fn(&VirtualDom) -> bool) -> bool {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

    for id in 1..MAX_ELEMENT_ID {
        let data: Rc<dyn Any> =
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default()));
        dom.runtime().handle_event("click", Event::new(data, true), ElementId(id));
        flush(dom);
        if reacted(dom) {
            return true;
        }
    }
    false
}
