use std::ops::Deref;

/// Observed outputs in the order they were seen.
///
/// Values can only be appended; predictors read it as a plain slice.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ObservationHistory {
    values: Vec<u32>,
}

impl ObservationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, observed: u32) {
        self.values.push(observed);
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }
}

impl Deref for ObservationHistory {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.values
    }
}

impl Extend<u32> for ObservationHistory {
    fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
        self.values.extend(iter);
    }
}

impl FromIterator<u32> for ObservationHistory {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
