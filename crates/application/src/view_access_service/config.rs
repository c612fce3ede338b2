/// Behaviour switches for view access reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewAccessOptions {
    /// Fail requests for views absent from the fetched hierarchy instead of
    /// reporting them as inaccessible.
    pub reject_unknown_views: bool,
}

impl ViewAccessOptions {
    /// Creates options with the permissive defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether unknown views are rejected upfront.
    #[must_use]
    pub fn with_reject_unknown_views(mut self, reject_unknown_views: bool) -> Self {
        self.reject_unknown_views = reject_unknown_views;
        self
    }
}
