//! Adapter configuration.

/// Pagination settings for a [`ListAdapter`](crate::ListAdapter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagingConfig {
    /// Whether a footer slot is appended and load-more requests are issued.
    pub pagination_enabled: bool,

    /// How many slots before the end the near-end trigger may fire.
    /// Default is 0: the trigger fires only once the last slot is visible.
    pub trigger_distance: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            pagination_enabled: true,
            trigger_distance: 0,
        }
    }
}

impl PagingConfig {
    /// Creates a paginated configuration with the exact end-of-list trigger.
    pub fn paginated() -> Self {
        Self::default()
    }

    /// Creates a configuration without a footer slot or load-more requests.
    pub fn unpaginated() -> Self {
        Self {
            pagination_enabled: false,
            trigger_distance: 0,
        }
    }

    /// Lets the near-end trigger fire `distance` slots before the last slot.
    pub fn trigger_distance(mut self, distance: usize) -> Self {
        self.trigger_distance = distance;
        self
    }
}
