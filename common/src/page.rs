use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use tracing::{Level, debug, info, instrument, warn};

use crate::{
    config::SidebarConfig,
    controller::SidebarController,
    dismiss::Click,
    state::{NavEntry, Projection, Sidebar, highlight_entries},
};

// the parts of a rendered page the sidebar touches
//
// element handles are cheap clones of whatever the host uses to refer to a node.
// listeners registered here stay installed for the rest of the page's life
pub trait Page: Clone + 'static {
    type Element: Clone + 'static;
    type Marker: Projection + 'static;

    fn current_path(&self) -> Result<String>;

    fn viewport_width(&self) -> Result<f64>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    // matches on the class name itself, never through a selector
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn marker(&self, element: Self::Element, class: &str) -> Self::Marker;

    // an element contains itself
    fn contains(&self, ancestor: &Self::Element, element: &Self::Element) -> bool;

    fn is_same(&self, a: &Self::Element, b: &Self::Element) -> bool;

    // clicks on `element` or anything inside it
    fn on_click(&self, element: &Self::Element, handler: Box<dyn FnMut()>) -> Result<()>;

    // every click in the document, with its target if that target is an element
    fn on_document_click(&self, handler: Box<dyn FnMut(Option<Self::Element>)>) -> Result<()>;
}

pub type SharedController<M> = Rc<RefCell<SidebarController<M>>>;

// mark the navigation entries pointing at the page we are on
fn highlight_current<P: Page>(page: &P, config: &SidebarConfig) -> Result<usize> {
    let path = page.current_path()?;

    let mut entries: Vec<_> = page
        .elements_by_class(&config.entry_class)
        .into_iter()
        .map(|element| {
            let target = page.attribute(&element, &config.path_attribute);
            NavEntry::new(page.marker(element, &config.active_class), target)
        })
        .collect();

    Ok(highlight_entries(&path, &mut entries))
}

fn describe_click<P: Page>(
    page: &P,
    sidebar: &P::Element,
    toggle: Option<&P::Element>,
    target: Option<&P::Element>,
) -> Result<Click> {
    let viewport_width = page.viewport_width()?;

    // targets that are not elements (e.g. the document itself) are outside everything
    let inside_sidebar = target.is_some_and(|target| page.contains(sidebar, target));

    let on_toggle = match (target, toggle) {
        (Some(target), Some(toggle)) => page.is_same(toggle, target),
        _ => false,
    };

    Ok(Click {
        viewport_width,
        inside_sidebar,
        on_toggle,
    })
}

// attach the sidebar controller to a page
//
// highlighting runs first and on its own: neither a failure there nor a missing sidebar
// keeps the other behaviors from the page.  the sidebar container is a structural
// precondition for the toggle and outside-click listeners; without it they are not
// wired and the error is handed back to the caller
#[instrument(level=Level::DEBUG, skip_all)]
pub fn attach<P: Page>(page: &P, config: &SidebarConfig) -> Result<SharedController<P::Marker>> {
    if let Err(err) = highlight_current(page, config) {
        warn!("skipping navigation highlight: {err}");
    }

    let sidebar = page.element_by_id(&config.sidebar_id).ok_or_else(|| {
        anyhow::Error::msg(format!("no sidebar element with id {}", config.sidebar_id))
    })?;

    let toggle = page.element_by_id(&config.toggle_id);

    let is_open = page.has_class(&sidebar, &config.open_class);
    let marker = page.marker(sidebar.clone(), &config.open_class);

    let controller = Rc::new(RefCell::new(SidebarController::new(
        config,
        Sidebar::new(marker, is_open),
    )));

    match &toggle {
        Some(toggle) => {
            let controller = controller.clone();
            page.on_click(
                toggle,
                Box::new(move || {
                    controller.borrow_mut().on_toggle();
                }),
            )?;
        }
        None => debug!("no #{} on page, toggle disabled", config.toggle_id),
    }

    let listener_page = page.clone();
    let listener_controller = controller.clone();
    page.on_document_click(Box::new(move |target| {
        match describe_click(&listener_page, &sidebar, toggle.as_ref(), target.as_ref()) {
            Ok(click) => {
                listener_controller.borrow_mut().on_click(click);
            }
            Err(err) => warn!("ignoring click: {err}"),
        }
    }))?;

    info!("sidebar attached to #{}", config.sidebar_id);
    Ok(controller)
}
