// Filter module - Resolve free-text terms against resource collections
use std::fmt;
use tracing::debug;

/// A value that can be looked up with a user supplied term
pub trait Filterable {
    /// Values the term is matched against, usually id and name
    fn filter_values(&self) -> Vec<String>;

    /// Case-insensitive substring match against any filter value
    fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.filter_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&term))
    }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn filter_values(&self) -> Vec<String> {
        (**self).filter_values()
    }

    fn matches(&self, term: &str) -> bool {
        (**self).matches(term)
    }
}

/// Lookup failures of [`find_one`].
///
/// `find_one` returns the matching items themselves as candidates, so a
/// caller can present them however it likes. [`FilterError::into_labels`]
/// turns them into their display form for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError<T = String> {
    NotFound { term: String },
    Ambiguous {
        term: String,
        /// Every matching item, in collection order
        candidates: Vec<T>,
    },
}

impl<T> FilterError<T> {
    pub fn term(&self) -> &str {
        match self {
            FilterError::NotFound { term } | FilterError::Ambiguous { term, .. } => term,
        }
    }

    pub fn map_candidates<U, F>(self, f: F) -> FilterError<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            FilterError::NotFound { term } => FilterError::NotFound { term },
            FilterError::Ambiguous { term, candidates } => FilterError::Ambiguous {
                term,
                candidates: candidates.into_iter().map(f).collect(),
            },
        }
    }
}

impl<T: fmt::Display> FilterError<T> {
    /// Detach the error from the searched collection
    pub fn into_labels(self) -> FilterError {
        self.map_candidates(|candidate| candidate.to_string())
    }
}

impl<T: fmt::Display> fmt::Display for FilterError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::NotFound { term } => write!(f, "no match found for {:?}", term),
            FilterError::Ambiguous { term, candidates } => {
                write!(f, "found multiple matches for {:?}: ", term)?;
                for (idx, candidate) in candidates.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", candidate)?;
                }
                Ok(())
            }
        }
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for FilterError<T> {}

/// Every item matching `term`, in collection order
pub fn find<'a, T: Filterable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let found: Vec<&T> = items.iter().filter(|item| item.matches(term)).collect();
    debug!("Filter {:?} matched {} of {} items", term, found.len(), items.len());
    found
}

/// The single item matching `term`
pub fn find_one<'a, T: Filterable>(items: &'a [T], term: &str) -> Result<&'a T, FilterError<&'a T>> {
    let mut found = find(items, term);
    match found.len() {
        0 => Err(FilterError::NotFound {
            term: term.to_string(),
        }),
        1 => Ok(found.remove(0)),
        _ => Err(FilterError::Ambiguous {
            term: term.to_string(),
            candidates: found,
        }),
    }
}
