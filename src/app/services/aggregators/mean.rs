//! Arithmetic mean with its own count

/// Running sum and count of present values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanWithCount {
    sum: f64,
    count: usize,
}

impl MeanWithCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Add a value if present; absent values do not count
    pub fn add_optional(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.add(value);
        }
    }

    /// Mean of the values added, or `None` when there were none
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}
