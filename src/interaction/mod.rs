use serde::{Deserialize, Serialize};

/// Lifecycle of a graph with respect to pointer hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverState {
    /// Constructed but geometry not built yet.
    Uninitialized,
    /// Geometry built, pointer outside the surface.
    Ready,
    /// Pointer over the surface, overlay marker drawn.
    Hovering,
}

/// Value reported to the host for one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverSample {
    pub value: f64,
    /// Pointer position re-expanded for padding; may fall outside `[0, 1]`.
    pub offset: f64,
    pub index: usize,
}

/// Hover state machine with index-equality debouncing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTracker {
    state: HoverState,
    last_index: Option<usize>,
    last_pointer_x: Option<f64>,
}

impl Default for HoverTracker {
    fn default() -> Self {
        Self {
            state: HoverState::Uninitialized,
            last_index: None,
            last_pointer_x: None,
        }
    }
}

impl HoverTracker {
    #[must_use]
    pub fn state(self) -> HoverState {
        self.state
    }

    #[must_use]
    pub fn last_index(self) -> Option<usize> {
        self.last_index
    }

    #[must_use]
    pub fn last_pointer_x(self) -> Option<f64> {
        self.last_pointer_x
    }

    pub fn mark_ready(&mut self) {
        if self.state == HoverState::Uninitialized {
            self.state = HoverState::Ready;
        }
    }

    /// Enter always reports.
    pub fn on_pointer_enter(&mut self, pointer_x: f64, index: usize) -> bool {
        self.state = HoverState::Hovering;
        self.last_pointer_x = Some(pointer_x);
        self.last_index = Some(index);
        true
    }

    /// Returns `true` only when `index` differs from the last reported one.
    pub fn on_pointer_move(&mut self, pointer_x: f64, index: usize) -> bool {
        self.state = HoverState::Hovering;
        self.last_pointer_x = Some(pointer_x);
        if self.last_index == Some(index) {
            return false;
        }
        self.last_index = Some(index);
        true
    }

    pub fn on_pointer_leave(&mut self) {
        if self.state != HoverState::Uninitialized {
            self.state = HoverState::Ready;
        }
        self.last_index = None;
        self.last_pointer_x = None;
    }

    /// Records the index resolved by an overlay refresh without reporting it.
    pub fn resync_index(&mut self, index: usize) {
        if self.state == HoverState::Hovering {
            self.last_index = Some(index);
        }
    }
}

/// Host callbacks fired on hover and on pointer exit.
///
/// Both are optional; an absent callback is a no-op.
#[derive(Default)]
pub struct HoverCallbacks {
    on_value: Option<Box<dyn FnMut(HoverSample)>>,
    on_cancel: Option<Box<dyn FnMut()>>,
}

impl HoverCallbacks {
    pub fn set_on_value(&mut self, callback: impl FnMut(HoverSample) + 'static) {
        self.on_value = Some(Box::new(callback));
    }

    pub fn set_on_cancel(&mut self, callback: impl FnMut() + 'static) {
        self.on_cancel = Some(Box::new(callback));
    }

    #[must_use]
    pub fn has_on_value(&self) -> bool {
        self.on_value.is_some()
    }

    #[must_use]
    pub fn has_on_cancel(&self) -> bool {
        self.on_cancel.is_some()
    }

    pub fn emit_value(&mut self, sample: HoverSample) {
        if let Some(callback) = self.on_value.as_mut() {
            callback(sample);
        }
    }

    pub fn emit_cancel(&mut self) {
        if let Some(callback) = self.on_cancel.as_mut() {
            callback();
        }
    }

    pub fn clear(&mut self) {
        self.on_value = None;
        self.on_cancel = None;
    }
}

impl std::fmt::Debug for HoverCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoverCallbacks")
            .field("on_value", &self.on_value.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}
