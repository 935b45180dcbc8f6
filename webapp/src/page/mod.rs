use anyhow::Result;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, Node, Window};

use common::{Page, Projection};

pub mod config;

// web-sys reports failures as opaque JsValues, which are not std errors
pub fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{context}: {err:?}"))
}

// register `handler` for clicks on `target` for the rest of the page's life
//
// nothing ever detaches these listeners, so the closure is leaked to the js side
fn listen<F>(target: &EventTarget, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);

    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|err| js_error("failed to add click listener", err))?;

    closure.forget();
    Ok(())
}

// the browser page the module was loaded into
#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))?;

        let document = window
            .document()
            .ok_or_else(|| anyhow::Error::msg("window has no document"))?;

        Ok(WebPage { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for WebPage {
    type Element = Element;
    type Marker = ClassMarker;

    fn current_path(&self) -> Result<String> {
        self.window
            .location()
            .pathname()
            .map_err(|err| js_error("failed to read location.pathname", err))
    }

    fn viewport_width(&self) -> Result<f64> {
        self.window
            .inner_width()
            .map_err(|err| js_error("failed to read window.innerWidth", err))?
            .as_f64()
            .ok_or_else(|| anyhow::Error::msg("window.innerWidth is not a number"))
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let elements = self.document.get_elements_by_class_name(class);

        (0..elements.length())
            .filter_map(|idx| elements.item(idx))
            .collect()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn marker(&self, element: Element, class: &str) -> ClassMarker {
        ClassMarker::new(element, class)
    }

    fn contains(&self, ancestor: &Element, element: &Element) -> bool {
        let node: &Node = element;
        ancestor.contains(Some(node))
    }

    fn is_same(&self, a: &Element, b: &Element) -> bool {
        let node: &Node = b;
        a.is_same_node(Some(node))
    }

    fn on_click(&self, element: &Element, mut handler: Box<dyn FnMut()>) -> Result<()> {
        listen(element, move |_| handler())
    }

    fn on_document_click(&self, mut handler: Box<dyn FnMut(Option<Element>)>) -> Result<()> {
        listen(&self.document, move |event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok());

            handler(target)
        })
    }
}

// a boolean projected onto an element as the presence of a class
pub struct ClassMarker {
    element: Element,
    class: String,
}

impl ClassMarker {
    pub fn new(element: Element, class: &str) -> Self {
        ClassMarker {
            element,
            class: String::from(class),
        }
    }
}

impl Projection for ClassMarker {
    fn project(&self, on: bool) {
        let classes = self.element.class_list();

        let result = if on {
            classes.add_1(&self.class)
        } else {
            classes.remove_1(&self.class)
        };

        // the class name was validated with the config, so this only fails if the page
        // has replaced the element's classList with something exotic
        if let Err(err) = result {
            warn!("failed to update class {} on #{}: {err:?}", self.class, self.element.id());
        }
    }
}
