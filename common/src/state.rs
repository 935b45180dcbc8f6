use tracing::debug;

// one-way projection of a boolean onto whatever is rendering it
//
// in the browser this is a marker class on an element; the model never reads it back
// after construction, so the flag held here is the only source of truth
pub trait Projection {
    fn project(&self, on: bool);
}

// the sidebar container and its open flag
pub struct Sidebar<P: Projection> {
    view: P,
    is_open: bool,
}

impl<P: Projection> Sidebar<P> {
    // `is_open` is whatever the page was rendered with, so nothing is projected here
    pub fn new(view: P, is_open: bool) -> Self {
        Sidebar { view, is_open }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn view(&self) -> &P {
        &self.view
    }

    // flip the open flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.view.project(self.is_open);

        debug!(open = self.is_open, "sidebar toggled");
        self.is_open
    }

    // force the sidebar closed, returning whether anything changed
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }

        self.is_open = false;
        self.view.project(false);

        debug!("sidebar closed");
        true
    }
}

// a navigation link and its active flag
pub struct NavEntry<P: Projection> {
    view: P,
    target: Option<String>,
    is_active: bool,
}

impl<P: Projection> NavEntry<P> {
    pub fn new(view: P, target: Option<String>) -> Self {
        NavEntry {
            view,
            target,
            is_active: false,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn view(&self) -> &P {
        &self.view
    }

    fn activate(&mut self) {
        self.is_active = true;
        self.view.project(true);
    }
}

// exact string comparison, so "/docs/intro/" and "/docs/intro?x=1" do not match
// "/docs/intro".  entries without a target never match
pub fn is_current(target: Option<&str>, current_path: &str) -> bool {
    target.is_some_and(|target| target == current_path)
}

// mark every entry whose target is the current path, returning how many matched
//
// entries are freshly rendered, so there is no clearing step
pub fn highlight_entries<P: Projection>(current_path: &str, entries: &mut [NavEntry<P>]) -> usize {
    let mut matched = 0;

    for entry in entries.iter_mut() {
        if is_current(entry.target(), current_path) {
            entry.activate();
            matched += 1;
        }
    }

    debug!(current_path, matched, "highlighted navigation entries");
    matched
}
