use crate::domain::chart::Window;

/// Part of the minimap controls being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DragHandle {
    LeftFrame,
    RightFrame,
    Window,
}

/// Widths of the shaded areas left and right of the window, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TintWidths {
    pub left: f64,
    pub right: f64,
}

impl TintWidths {
    pub fn for_window(coord: Window, controls_width: f64) -> Self {
        Self {
            left: coord.left * controls_width,
            right: (1.0 - coord.right) * controls_width,
        }
    }
}

/// Geometry captured when the pointer went down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    pub controls_width: f64,
    pub tints: TintWidths,
}

/// Result of a drag step: the tints to draw and the window to dispatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub tints: TintWidths,
    pub coord: Window,
}

/// Maps a horizontal pointer delta (px since pointer down) to new tints and
/// window. Frame drags keep at least `min_window_px` between the tints, a
/// window drag keeps its width; no tint goes negative. This is the boundary
/// where a degenerate window is ruled out.
pub fn drag(handle: DragHandle, origin: DragOrigin, dx: f64, min_window_px: f64) -> DragUpdate {
    let width = origin.controls_width;
    let TintWidths { left, right } = origin.tints;

    let tints = match handle {
        DragHandle::LeftFrame => {
            let available = (width - right - min_window_px).max(0.0);
            TintWidths { left: (left + dx).clamp(0.0, available), right }
        }
        DragHandle::RightFrame => {
            let available = (width - left - min_window_px).max(0.0);
            TintWidths { left, right: (right - dx).clamp(0.0, available) }
        }
        DragHandle::Window => {
            let available = left + right;
            let shift = dx.clamp(-left, right);
            TintWidths {
                left: (left + shift).clamp(0.0, available),
                right: (right - shift).clamp(0.0, available),
            }
        }
    };

    DragUpdate {
        tints,
        coord: Window::new(tints.left / width, (width - tints.right) / width),
    }
}
