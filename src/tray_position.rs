//! Placement of the tray popup relative to the tray icon.
//!
//! All inputs are in physical pixels. The popup is centered above the icon;
//! it is pushed back inside the work area horizontally and flipped below the
//! icon when there is no room above it.

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScreenRect {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl ScreenRect {
    pub(crate) fn right(&self) -> f64 {
        self.x + self.width
    }

    pub(crate) fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub(crate) fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PopupSize {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PopupPosition {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlacementMargins {
    pub(crate) gap: f64,
    pub(crate) inset: f64,
}

pub(crate) fn compute_popup_position(
    tray: ScreenRect,
    popup: PopupSize,
    work_area: ScreenRect,
    margins: PlacementMargins,
) -> PopupPosition {
    let mut x = tray.center_x() - popup.width / 2.0;
    let mut y = tray.y - popup.height - margins.gap;

    if x < work_area.x {
        x = work_area.x + margins.inset;
    } else if x + popup.width > work_area.right() {
        x = work_area.right() - popup.width - margins.inset;
    }

    if y < work_area.y {
        y = tray.bottom() + margins.gap;
    }

    PopupPosition {
        x: x.round() as i32,
        y: y.round() as i32,
    }
}
