//! Graphics library completion hook

/// Flush completion signal
///
/// The graphics library hands the driver a region and a pixel buffer per
/// redraw. Once the pixels have left the buffer the driver calls
/// [`flush_ready`](FlushReady::flush_ready) exactly once, after which the
/// library may reuse the buffer.
pub trait FlushReady {
    /// The last flushed buffer may be reclaimed
    fn flush_ready(&mut self);
}

// Blanket implementation so a closure can serve as the completion hook
impl<F: FnMut()> FlushReady for F {
    fn flush_ready(&mut self) {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_flush_ready() {
        let mut calls = 0;
        {
            let mut hook = || calls += 1;
            hook.flush_ready();
            hook.flush_ready();
        }
        assert_eq!(calls, 2);
    }
}
