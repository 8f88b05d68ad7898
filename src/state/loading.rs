use leptos::prelude::*;

/// Shared "request in flight" indicator.
///
/// Counts outstanding operations instead of holding a flag, so one call
/// settling never hides the indicator while another is still running.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LoadingIndicator {
    in_flight: RwSignal<usize>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self {
            in_flight: RwSignal::new(0),
        }
    }

    pub fn show(&self) {
        self.in_flight.update(|n| *n += 1);
    }

    /// Unbalanced calls are ignored: the count never drops below zero.
    pub fn hide(&self) {
        self.in_flight.update(|n| *n = n.saturating_sub(1));
    }

    /// Shows the indicator until the returned guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.show();
        LoadingGuard { indicator: *self }
    }

    pub fn is_visible(&self) -> bool {
        self.in_flight.get() > 0
    }

    #[cfg(test)]
    pub fn is_visible_untracked(&self) -> bool {
        self.in_flight.get_untracked() > 0
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use = "the indicator hides as soon as the guard is dropped"]
pub(crate) struct LoadingGuard {
    indicator: LoadingIndicator,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}
