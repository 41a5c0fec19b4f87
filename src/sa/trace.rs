//! Per-iteration record of an annealing run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One iteration of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceRecord<S> {
    /// Iteration index; 0 is the initial state.
    pub iteration: usize,

    /// Current state after this iteration's accept/reject decision.
    pub state: S,

    /// Cost of `state`.
    pub cost: f64,

    /// Temperature after cooling, floored at zero.
    pub temperature: f64,

    /// Metropolis probability `exp(-delta / T)` used for the draw, or
    /// `None` when the candidate was strictly improving (and for the
    /// initial record).
    pub acceptance_probability: Option<f64>,
}

/// Ordered, append-only sequence of [`TraceRecord`]s.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace<S> {
    records: Vec<TraceRecord<S>>,
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<S> Trace<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, record: TraceRecord<S>) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TraceRecord<S>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TraceRecord<S>> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceRecord<S>> {
        self.records.iter()
    }

    /// Cost column, in iteration order.
    pub fn costs(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.cost).collect()
    }

    /// Temperature column, in iteration order.
    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature).collect()
    }

    /// Acceptance probability column, in iteration order.
    pub fn acceptance_probabilities(&self) -> Vec<Option<f64>> {
        self.records
            .iter()
            .map(|r| r.acceptance_probability)
            .collect()
    }

    pub fn into_records(self) -> Vec<TraceRecord<S>> {
        self.records
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a TraceRecord<S>;
    type IntoIter = std::slice::Iter<'a, TraceRecord<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(iteration: usize, cost: f64, p: Option<f64>) -> TraceRecord<u8> {
        TraceRecord {
            iteration,
            state: 0,
            cost,
            temperature: 10.0 - iteration as f64,
            acceptance_probability: p,
        }
    }

    #[test]
    fn test_columns_preserve_order() {
        let mut trace = Trace::new();
        trace.push(record(0, 5.0, None));
        trace.push(record(1, 4.0, None));
        trace.push(record(2, 4.5, Some(0.3)));

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.costs(), vec![5.0, 4.0, 4.5]);
        assert_eq!(trace.temperatures(), vec![10.0, 9.0, 8.0]);
        assert_eq!(
            trace.acceptance_probabilities(),
            vec![None, None, Some(0.3)]
        );
        assert_eq!(trace.last().map(|r| r.iteration), Some(2));
        let indices: Vec<usize> = (&trace).into_iter().map(|r| r.iteration).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
