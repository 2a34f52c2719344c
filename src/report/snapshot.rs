//! Metric records and ordered snapshots

use std::collections::HashMap;
use std::fmt;

/// One of the four metrics tracked per contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Deployed (runtime) bytecode size in bytes
    RuntimeSize,
    /// Creation (init) bytecode size in bytes
    InitSize,
    /// Bytes left before the runtime size limit
    RuntimeMargin,
    /// Bytes left before the initcode size limit
    InitMargin,
}

impl Field {
    /// All fields in table column order
    pub const ALL: [Field; 4] = [
        Field::RuntimeSize,
        Field::InitSize,
        Field::RuntimeMargin,
        Field::InitMargin,
    ];

    /// Key used for this field in JSON reports
    pub fn key(self) -> &'static str {
        match self {
            Self::RuntimeSize => "runtime_size",
            Self::InitSize => "init_size",
            Self::RuntimeMargin => "runtime_margin",
            Self::InitMargin => "init_margin",
        }
    }

    /// Sizes must be strictly positive; margins may go negative
    pub fn is_size(self) -> bool {
        matches!(self, Self::RuntimeSize | Self::InitSize)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A field value that violates the record contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Offending field
    pub field: Field,
    /// Human-readable reason
    pub reason: String,
}

/// Size metrics of a single contract
///
/// Constructed only through [`MetricRecord::new`], which enforces positive sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRecord {
    runtime_size: i64,
    init_size: i64,
    runtime_margin: i64,
    init_margin: i64,
}

impl MetricRecord {
    /// Create a record, rejecting non-positive sizes
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_size_diff::report::MetricRecord;
    ///
    /// let record = MetricRecord::new(3493, 4108, 21083, 45044).unwrap();
    /// assert_eq!(record.init_size(), 4108);
    ///
    /// // Margins may be negative, sizes may not
    /// assert!(MetricRecord::new(30000, 4108, -5424, 45044).is_ok());
    /// assert!(MetricRecord::new(0, 4108, 21083, 45044).is_err());
    /// ```
    pub fn new(
        runtime_size: i64,
        init_size: i64,
        runtime_margin: i64,
        init_margin: i64,
    ) -> Result<Self, FieldViolation> {
        let record = Self {
            runtime_size,
            init_size,
            runtime_margin,
            init_margin,
        };

        for field in Field::ALL {
            let value = record.value(field);
            if field.is_size() && value <= 0 {
                return Err(FieldViolation {
                    field,
                    reason: format!("must be a positive integer, got {}", value),
                });
            }
        }

        Ok(record)
    }

    /// Value of the given field
    pub fn value(&self, field: Field) -> i64 {
        match field {
            Field::RuntimeSize => self.runtime_size,
            Field::InitSize => self.init_size,
            Field::RuntimeMargin => self.runtime_margin,
            Field::InitMargin => self.init_margin,
        }
    }

    /// Runtime bytecode size in bytes
    pub fn runtime_size(&self) -> i64 {
        self.runtime_size
    }

    /// Initcode size in bytes
    pub fn init_size(&self) -> i64 {
        self.init_size
    }

    /// Runtime headroom in bytes
    pub fn runtime_margin(&self) -> i64 {
        self.runtime_margin
    }

    /// Initcode headroom in bytes
    pub fn init_margin(&self) -> i64 {
        self.init_margin
    }

    /// True when any field is negative (a size limit was exceeded)
    pub fn has_negative_field(&self) -> bool {
        Field::ALL.iter().any(|&field| self.value(field) < 0)
    }
}

/// Mapping from contract name to a value, iterated in insertion order
///
/// Keys are unique. Re-inserting an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<V = MetricRecord> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for Snapshot<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> Snapshot<V> {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// True if the key is present, regardless of its value
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Snapshot<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (key, value) in iter {
            snapshot.insert(key, value);
        }
        snapshot
    }
}
