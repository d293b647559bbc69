//! Named scheduling policies for interactive recomputation.
//!
//! The dashboard recomputes on every keystroke and repositions the tooltip
//! on every pointer move. Neither needs every intermediate value: searches
//! are last-write-wins, tooltip placement is at-most-once-per-frame with
//! the final position always applied. Both policies are plain data
//! structures so the contracts are directly testable, with no timers
//! involved.

/// Last-write-wins input coalescing.
///
/// Submitting replaces whatever was pending; draining yields only the most
/// recent submission. Intermediate inputs are superseded, the final
/// settled input is always delivered.
#[derive(Debug, Default)]
pub struct LatestWins<T> {
    pending: Option<T>,
}

impl<T> LatestWins<T> {
    /// Creates an empty coalescer.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Submits an input, superseding any pending one.
    pub fn submit(&mut self, input: T) {
        self.pending = Some(input);
    }

    /// Takes the most recent pending input, if any.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Whether an input is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// At-most-once-per-frame delivery gate.
///
/// The first submission inside a frame passes through; later ones are
/// held. `tick` opens the next frame and flushes the most recent held
/// value, so the last position before pointer-stop is always reflected
/// even when intermediate positions were dropped.
#[derive(Debug)]
pub struct FrameGate<T> {
    open: bool,
    held: Option<T>,
}

impl<T> Default for FrameGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameGate<T> {
    /// Creates a gate that is open for the current frame.
    pub fn new() -> Self {
        Self {
            open: true,
            held: None,
        }
    }

    /// Submits a value. Returns it when the gate is open (and closes the
    /// gate for the rest of the frame); otherwise holds it, superseding
    /// any previously held value.
    pub fn submit(&mut self, value: T) -> Option<T> {
        if self.open {
            self.open = false;
            Some(value)
        } else {
            self.held = Some(value);
            None
        }
    }

    /// Advances to the next frame. Flushes the held value when present
    /// (consuming this frame's delivery slot), otherwise just re-opens
    /// the gate.
    pub fn tick(&mut self) -> Option<T> {
        match self.held.take() {
            Some(value) => {
                self.open = false;
                Some(value)
            }
            None => {
                self.open = true;
                None
            }
        }
    }
}
