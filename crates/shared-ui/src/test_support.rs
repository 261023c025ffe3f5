//! Rendering and event helpers for component tests.

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Event, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

/// Upper bound on element ids tried by [`click_until`].
const MAX_ELEMENT_ID: usize = 256;

/// Build `app` and return the mounted dom.
pub fn mount(app: fn() -> Element) -> VirtualDom {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dom
}

pub fn render(app: fn() -> Element) -> String {
    dioxus_ssr::render(&mount(app))
}

/// Send one click to mounted elements in creation order, flushing after
/// each, until `reacted` sees a change. Elements without a click listener
/// ignore the event. Returns `false` if nothing reacted.
pub fn click_until(dom: &mut VirtualDom, reacted: impl Fn(&VirtualDom) -> bool) -> bool {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

    for id in 1..MAX_ELEMENT_ID {
        let data: Rc<dyn Any> =
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default()));
        dom.runtime().handle_event("click", Event::new(data, true), ElementId(id));
        dom.render_immediate(&mut NoOpMutations);
        if reacted(dom) {
            return true;
        }
    }
    false
}
