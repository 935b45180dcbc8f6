use tracing::{Level, debug, instrument};

use crate::{
    config::SidebarConfig,
    dismiss::{Click, should_dismiss},
    state::{Projection, Sidebar},
};

// sidebar controller
//
// owns the open flag and applies the toggle and outside-click transitions to it.  without
// a toggle control on the page there is simply nothing calling `on_toggle`
pub struct SidebarController<P: Projection> {
    sidebar: Sidebar<P>,
    breakpoint: f64,
}

impl<P: Projection> SidebarController<P> {
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn new(config: &SidebarConfig, sidebar: Sidebar<P>) -> Self {
        debug!(
            open = sidebar.is_open(),
            breakpoint = config.breakpoint,
            "sidebar controller created"
        );

        SidebarController {
            sidebar,
            breakpoint: config.breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.sidebar.is_open()
    }

    pub fn sidebar(&self) -> &Sidebar<P> {
        &self.sidebar
    }

    // activation of the toggle control, returning the new open state
    pub fn on_toggle(&mut self) -> bool {
        self.sidebar.toggle()
    }

    // any click in the document, returning whether it closed the sidebar
    pub fn on_click(&mut self, click: Click) -> bool {
        if !should_dismiss(&click, self.breakpoint) {
            return false;
        }

        self.sidebar.close()
    }
}
