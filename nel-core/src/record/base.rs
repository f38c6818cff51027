//! Base implementation of records.
//!
//! A record is a flat set of named values describing one observation, e.g.
//! the reward of a step together with the textual definition that produced it.
use crate::error::NelError;
use std::collections::HashMap;

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, e.g. a reward or a step index.
    Scalar(f32),

    /// A text value, e.g. the description of the active reward.
    String(String),
}

/// A container for storing key-value pairs.
///
/// # Examples
///
/// ```rust
/// use nel_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("reward", 2.9);
/// record.insert("reward_def", RecordValue::String("Action[value: 2.90]".into()));
///
/// let reward = record.get_scalar("reward").unwrap();
/// assert_eq!(reward, 2.9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        let mut record = Self::empty();
        record.insert(name, RecordValue::Scalar(value));
        record
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }


    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }




    /// Merges two records, consuming both.
    ///
    /// If both records contain the same key, the value from the second record
    /// overwrites the value from the first record.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }


    /// Adds `value` to the scalar stored at `k`, inserting it if absent.
    ///
    /// A non-scalar value at `k` is replaced.
    pub fn accumulate(&mut self, k: impl Into<String>, value: f32) {
        let entry = self
            .0
            .entry(k.into())
            .or_insert(RecordValue::Scalar(0.0));
        match *entry {
            RecordValue::Scalar(ref mut v) => *v += value,
            _ => *entry = RecordValue::Scalar(value),
        }
    }

    /// Gets a scalar value from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not a scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, NelError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(NelError::RecordValueTypeError("Scalar".to_string())),
            None => Err(NelError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not a string.
    pub fn get_string(&self, k: &str) -> Result<String, NelError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(NelError::RecordValueTypeError("String".to_string())),
            None => Err(NelError::RecordKeyError(k.to_string())),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets the scalar value of a record that holds exactly one entry.
    pub fn get_scalar_without_key(&self) -> Option<f32> {
        if self.0.len() != 1 {
            return None;
        }
        match self.0.values().next() {
            Some(RecordValue::Scalar(value)) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_errors() {
        let mut record = Record::from_scalar("reward", 1.0);
        record.insert("reward_def", RecordValue::String("Action".into()));

        assert_eq!(
            record.get_scalar("missing"),
            Err(NelError::RecordKeyError("missing".into()))
        );
        assert_eq!(
            record.get_scalar("reward_def"),
            Err(NelError::RecordValueTypeError("Scalar".into()))
        );
        assert_eq!(
            record.get_string("reward"),
            Err(NelError::RecordValueTypeError("String".into()))
        );
        assert_eq!(record.get_string("reward_def").unwrap(), "Action");
    }

    #[test]
    fn test_accumulate() {
        let mut record = Record::empty();
        record.accumulate("collect/gold", 1.5);
        record.accumulate("collect/gold", 2.0);
        assert_eq!(record.get_scalar("collect/gold").unwrap(), 3.5);
        assert_eq!(record.get_scalar_without_key(), Some(3.5));
    }

    #[test]
    fn test_merge_overwrites() {
        let a = Record::from_slice(&[
            ("step", RecordValue::Scalar(1.0)),
            ("reward", RecordValue::Scalar(0.5)),
        ]);
        let b = Record::from_scalar("reward", 2.0);
        let merged = a.merge(b);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get_scalar("reward").unwrap(), 2.0);
    }
}
