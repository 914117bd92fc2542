/// Load state for a page keyed on an external identifier.
///
/// Not-found is a first-class terminal state here, distinct from failure:
/// a missing identifier or an unmatched record is a valid outcome the page
/// renders, not an error to retry.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    /// Fetch in flight (or not yet started)
    Loading,

    /// Record resolved
    Ready(T),

    /// No identifier supplied, or no record matched it
    NotFound,

    /// The source was unavailable or unparsable
    Failed(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PageState::NotFound)
    }

    /// The record if resolved, None otherwise
    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(record) => Some(record),
            _ => None,
        }
    }

    /// The failure message if the source was unavailable, None otherwise
    pub fn failure(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Collapse a lookup result: a resolved record is `Ready`, a clean miss
    /// is `NotFound`, a source failure is `Failed`.
    pub fn from_lookup(result: Result<Option<T>, String>) -> Self {
        match result {
            Ok(Some(record)) => PageState::Ready(record),
            Ok(None) => PageState::NotFound,
            Err(message) => PageState::Failed(message),
        }
    }
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states() {
        let state: PageState<i32> = PageState::Loading;
        assert!(state.is_loading());

        let state = PageState::Ready(7);
        assert_eq!(state.ready(), Some(&7));
        assert_eq!(state.failure(), None);

        let state: PageState<i32> = PageState::NotFound;
        assert!(state.is_not_found());

        let state: PageState<i32> = PageState::Failed("offline".to_string());
        assert_eq!(state.failure(), Some("offline"));
    }

    #[test]
    fn test_from_lookup() {
        let hit: PageState<i32> = PageState::from_lookup(Ok(Some(1)));
        assert_eq!(hit.ready(), Some(&1));

        let miss: PageState<i32> = PageState::from_lookup(Ok(None));
        assert!(miss.is_not_found());

        let down: PageState<i32> = PageState::from_lookup(Err("status 500".to_string()));
        assert_eq!(down.failure(), Some("status 500"));
    }
}
