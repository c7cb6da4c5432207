//! Slide-menu interaction state machine.
//!
//! All transitions are synchronous and pure; the Yew layer only dispatches
//! actions from pointer callbacks and re-renders from the derived visuals.

use crate::interpolate::LinearScale;
use std::rc::Rc;
use yew::Reducible;

/// Movement below this distance is treated as a tap, not a drag.
pub const MIN_DRAG_PX: f64 = 10.0;

/// Keep-out subtracted from the viewport width before halving into the
/// release threshold: a drag must travel more than `(width - 150) / 2`
/// leftwards to commit to closing.
const RELEASE_KEEPOUT_PX: f64 = 150.0;

const OPEN_SCALE: f64 = 0.9;
const OPEN_OPACITY: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Visual parameters consumed by the renderer on every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuVisual {
    pub offset_x: f64,
    pub scale: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuState {
    pub open: bool,
    pub dragging: bool,
    /// Cumulative offset from gesture start; meaningful only while `dragging`.
    pub drag: (f64, f64),
    /// Locked on the first movement sample of a gesture, cleared at its end.
    pub axis: Option<Axis>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            open: false,
            dragging: false,
            drag: (0.0, 0.0),
            axis: None,
        }
    }
}

pub enum MenuAction {
    /// Button press; flips `open` without drag semantics.
    Toggle,
    /// Tap on the dimmed overlay while open.
    Dismiss,
    /// Drag sample past the minimum distance, relative to gesture start.
    DragMoved { dx: f64, dy: f64 },
    /// Gesture release (or cancellation) at horizontal distance `dx`.
    DragEnded { dx: f64, viewport_width: f64 },
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

impl MenuState {
    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Toggle => self.open = !self.open,
            MenuAction::Dismiss => {
                if self.open {
                    self.open = false;
                }
            }
            MenuAction::DragMoved { dx, dy } => self.drag_moved(dx, dy),
            MenuAction::DragEnded { dx, viewport_width } => self.drag_ended(dx, viewport_width),
        }
    }

    // Drags are only recognized while the menu is open.
    fn drag_moved(&mut self, dx: f64, dy: f64) {
        if !self.open {
            return;
        }
        if self.axis.is_none() {
            self.axis = Some(if dx.abs() > dy.abs() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            });
        }
        self.dragging = true;
        self.drag = (dx, dy);
    }

    fn drag_ended(&mut self, dx: f64, viewport_width: f64) {
        self.dragging = false;
        if self.open && dx < 0.0 && dx.abs() > close_threshold(viewport_width) {
            self.open = false;
        }
        self.axis = None;
    }

    fn horizontal_drag(&self) -> bool {
        self.dragging && self.axis == Some(Axis::Horizontal)
    }

    /// Panel translation in px: live drag offset, else settled open/closed.
    pub fn offset(&self, viewport_width: f64) -> f64 {
        if self.horizontal_drag() {
            self.drag.0
        } else if self.open {
            0.0
        } else {
            -viewport_width
        }
    }

    /// Content-panel scale, 1.0 closed down to 0.9 fully open.
    pub fn scale(&self, viewport_width: f64) -> f64 {
        if self.horizontal_drag() {
            LinearScale::new((0.0, -viewport_width), (OPEN_SCALE, 1.0)).map(self.drag.0)
        } else if self.open {
            OPEN_SCALE
        } else {
            1.0
        }
    }

    /// Content-panel opacity, 1.0 closed down to 0.4 fully open.
    pub fn opacity(&self, viewport_width: f64) -> f64 {
        if self.horizontal_drag() {
            LinearScale::new((0.0, -viewport_width), (OPEN_OPACITY, 1.0)).map(self.drag.0)
        } else if self.open {
            OPEN_OPACITY
        } else {
            1.0
        }
    }

    pub fn visual(&self, viewport_width: f64) -> MenuVisual {
        MenuVisual {
            offset_x: self.offset(viewport_width),
            scale: self.scale(viewport_width),
            opacity: self.opacity(viewport_width),
        }
    }
}

pub fn close_threshold(viewport_width: f64) -> f64 {
    (viewport_width - RELEASE_KEEPOUT_PX) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 375.0;
    const EPS: f64 = 1e-9;

    fn open_state() -> MenuState {
        MenuState {
            open: true,
            ..Default::default()
        }
    }

    #[test]
    fn closed_menu_sits_off_screen() {
        let st = MenuState::default();
        assert_eq!(st.offset(W), -W);
        assert_eq!(st.scale(W), 1.0);
        assert_eq!(st.opacity(W), 1.0);
    }

    #[test]
    fn toggle_opens_and_settles_at_zero_offset() {
        let mut st = MenuState::default();
        st.apply(MenuAction::Toggle);
        assert!(st.open);
        assert_eq!(st.offset(W), 0.0);
        assert_eq!(st.scale(W), 0.9);
        assert_eq!(st.opacity(W), 0.4);
        st.apply(MenuAction::Toggle);
        assert!(!st.open);
    }

    #[test]
    fn first_sample_locks_horizontal_when_dx_dominates() {
        let mut st = open_state();
        st.apply(MenuAction::DragMoved { dx: 20.0, dy: 5.0 });
        assert_eq!(st.axis, Some(Axis::Horizontal));
        assert!(st.dragging);
    }

    #[test]
    fn first_sample_locks_vertical_when_dy_dominates() {
        let mut st = open_state();
        st.apply(MenuAction::DragMoved { dx: 5.0, dy: 20.0 });
        assert_eq!(st.axis, Some(Axis::Vertical));
    }

    #[test]
    fn axis_stays_locked_until_gesture_ends() {
        let mut st = open_state();
        st.apply(MenuAction::DragMoved { dx: 5.0, dy: 20.0 });
        st.apply(MenuAction::DragMoved { dx: 80.0, dy: 21.0 });
        assert_eq!(st.axis, Some(Axis::Vertical));
        st.apply(MenuAction::DragEnded {
            dx: 80.0,
            viewport_width: W,
        });
        assert_eq!(st.axis, None);
        assert!(!st.dragging);
    }

    #[test]
    fn horizontal_drag_tracks_offset_and_interpolates() {
        let mut st = open_state();
        st.apply(MenuAction::DragMoved { dx: -187.5, dy: 2.0 });
        assert!((st.offset(W) - -187.5).abs() < EPS);
        // Halfway across the viewport: halfway through both ranges.
        assert!((st.scale(W) - 0.95).abs() < EPS);
        assert!((st.opacity(W) - 0.7).abs() < EPS);
    }

    #[test]
    fn vertical_locked_drag_leaves_visuals_at_open_defaults() {
        let mut st = open_state();
        st.apply(MenuAction::DragMoved { dx: -2.0, dy: 30.0 });
        st.apply(MenuAction::DragMoved { dx: -120.0, dy: 90.0 });
        assert_eq!(st.offset(W), 0.0);
        assert_eq!(st.scale(W), 0.9);
        assert_eq!(st.opacity(W), 0.4);
    }

    #[test]
    fn release_past_threshold_closes() {
        let mut st = open_state();
        st.apply(MenuAction::DragMoved { dx: -115.0, dy: 1.0 });
        st.apply(MenuAction::DragEnded {
            dx: -115.0,
            viewport_width: W,
        });
        // (375 - 150) / 2 = 112.5
        assert!(!st.open);
        assert!(!st.dragging);
        assert_eq!(st.axis, None);
    }

    #[test]
    fn release_short_of_threshold_snaps_back_open() {
        let mut st = open_state();
        st.apply(MenuAction::DragMoved { dx: -100.0, dy: 1.0 });
        st.apply(MenuAction::DragEnded {
            dx: -100.0,
            viewport_width: W,
        });
        assert!(st.open);
        assert_eq!(st.offset(W), 0.0);
    }

    #[test]
    fn rightward_release_never_closes() {
        let mut st = open_state();
        st.apply(MenuAction::DragMoved { dx: 200.0, dy: 0.0 });
        st.apply(MenuAction::DragEnded {
            dx: 200.0,
            viewport_width: W,
        });
        assert!(st.open);
    }

    #[test]
    fn tap_dismiss_closes_without_touching_drag_state() {
        let mut st = open_state();
        st.drag = (-33.0, 4.0);
        st.apply(MenuAction::Dismiss);
        assert!(!st.open);
        assert_eq!(st.drag, (-33.0, 4.0));
        assert_eq!(st.axis, None);
    }

    #[test]
    fn dismiss_is_a_no_op_while_closed() {
        let mut st = MenuState::default();
        st.apply(MenuAction::Dismiss);
        assert!(!st.open);
    }

    #[test]
    fn drags_are_ignored_while_closed() {
        let mut st = MenuState::default();
        st.apply(MenuAction::DragMoved { dx: -50.0, dy: 0.0 });
        assert!(!st.dragging);
        assert_eq!(st.axis, None);
        assert_eq!(st.offset(W), -W);
    }

    #[test]
    fn threshold_matches_viewport_geometry() {
        assert!((close_threshold(W) - 112.5).abs() < EPS);
    }
}
