//! Loop frame bookkeeping for `for` blocks

use crate::template::value::Value;

/// One open `for` loop
#[derive(Debug, Clone)]
pub(crate) struct LoopFrame {
    /// Directive index of the originating `for`
    pub origin: usize,
    /// Items being iterated (snapshot taken when the loop starts)
    pub items: Vec<Value>,
    /// Index of the current iteration; always `< items.len()` while open
    pub current: usize,
    /// Per-iteration binding name
    pub binding: Option<String>,
}

/// Outcome of closing one iteration
#[derive(Debug, PartialEq)]
pub(crate) enum Advance {
    /// Loop finished and was popped
    Done,
    /// Another iteration follows; jump back to the `for` at this index
    Repeat { origin: usize },
}

/// Stack of open loops, innermost last
#[derive(Debug, Default)]
pub(crate) struct LoopStack {
    frames: Vec<LoopFrame>,
}

impl LoopStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the innermost open loop was started by the `for` at `index`
    pub fn is_open_at(&self, index: usize) -> bool {
        self.frames.last().is_some_and(|frame| frame.origin == index)
    }

    /// Open a loop; `items` must be non-empty
    pub fn push(&mut self, frame: LoopFrame) {
        debug_assert!(!frame.items.is_empty());
        log::trace!(
            "loop at directive {} opened with {} item(s)",
            frame.origin,
            frame.items.len()
        );
        self.frames.push(frame);
    }

    /// Finish the innermost loop's current iteration
    ///
    /// Returns `None` when no loop is open. On `Repeat`, `rebind` receives the
    /// binding name and the next item.
    pub fn advance(&mut self, mut rebind: impl FnMut(&str, Value)) -> Option<Advance> {
        let frame = self.frames.last_mut()?;
        frame.current += 1;

        if frame.current == frame.items.len() {
            log::trace!("loop at directive {} closed", frame.origin);
            self.frames.pop();
            return Some(Advance::Done);
        }

        if let Some(binding) = &frame.binding {
            rebind(binding, frame.items[frame.current].clone());
        }
        Some(Advance::Repeat {
            origin: frame.origin,
        })
    }

    /// Directive index of the innermost open loop
    pub fn innermost_origin(&self) -> Option<usize> {
        self.frames.last().map(|frame| frame.origin)
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
