// what the document-wide click listener knows about a single click
//
// `inside_sidebar` counts the sidebar container itself as inside.  `on_toggle` is identity
// with the toggle control, not containment, so a click on a child of the toggle is not
// "on" it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Click {
    pub viewport_width: f64,
    pub inside_sidebar: bool,
    pub on_toggle: bool,
}

pub fn is_mobile(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

// whether a click should force the sidebar closed
//
// wide layouts do not overlay the sidebar, clicks inside it are navigation, and a click
// on the toggle is already handled by the toggle listener
pub fn should_dismiss(click: &Click, breakpoint: f64) -> bool {
    is_mobile(click.viewport_width, breakpoint) && !click.inside_sidebar && !click.on_toggle
}
