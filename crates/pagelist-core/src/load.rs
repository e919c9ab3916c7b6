/// Outcome of one load-more request, marshalled back by the consumer.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadResult<T> {
    /// A page arrived and more are expected.
    Page(Vec<T>),
    /// A page arrived and it is the last one.
    LastPage(Vec<T>),
    /// The request failed; the user may retry from the failed footer.
    Failed(String),
    /// No more data exists.
    EndOfData,
}

impl<T> LoadResult<T> {
    /// Whether this outcome ends pagination.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadResult::LastPage(_) | LoadResult::EndOfData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_outcomes() {
        assert!(LoadResult::<u8>::EndOfData.is_terminal());
        assert!(LoadResult::LastPage(vec![1u8]).is_terminal());
        assert!(!LoadResult::Page(vec![1u8]).is_terminal());
        assert!(!LoadResult::<u8>::Failed("timeout".into()).is_terminal());
    }
}
