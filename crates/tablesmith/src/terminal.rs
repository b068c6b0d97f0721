//! Terminal width injection.

use std::fmt;
use std::sync::Arc;

/// Supplies the ambient output width when a table has no explicit
/// `terminal_width`.
///
/// The probe is called once per render. Tests inject a constant; real
/// programs usually use [`WidthProbe::terminal`].
///
/// ```rust
/// use tablesmith::WidthProbe;
///
/// let probe = WidthProbe::fixed(40);
/// assert_eq!(probe.width(), Some(40));
/// ```
#[derive(Clone)]
pub struct WidthProbe(Arc<dyn Fn() -> Option<usize> + Send + Sync>);

impl WidthProbe {
    pub fn new<F>(probe: F) -> Self
    where
        F: Fn() -> Option<usize> + Send + Sync + 'static,
    {
        WidthProbe(Arc::new(probe))
    }

    /// Always reports `width`.
    pub fn fixed(width: usize) -> Self {
        WidthProbe::new(move || Some(width))
    }

    /// Reads the width of the terminal attached to stdout, if any.
    pub fn terminal() -> Self {
        WidthProbe::new(|| terminal_size::terminal_size().map(|(w, _)| w.0 as usize))
    }

    pub fn width(&self) -> Option<usize> {
        (self.0)()
    }
}

impl fmt::Debug for WidthProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WidthProbe(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_probe_is_called_each_time() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let probe = WidthProbe::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            None
        });
        assert_eq!(probe.width(), None);
        assert_eq!(probe.clone().width(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn debug_is_opaque() {
        assert_eq!(format!("{:?}", WidthProbe::fixed(3)), "WidthProbe(..)");
    }
}
