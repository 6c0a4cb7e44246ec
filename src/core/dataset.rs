use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::value::{Value, ValueKind};
use crate::error::{ConfigurationError, DashResult};

/// One homogeneous column of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    kind: ValueKind,
    values: Vec<Value>,
}

impl Column {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Immutable named table with ordered, homogeneous columns.
///
/// A dataset is fully constructed from literals through [`DatasetBuilder`]
/// and never mutated afterwards; derived columns produce a new dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    name: String,
    columns: IndexMap<String, Column>,
}

impl Dataset {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> DatasetBuilder {
        DatasetBuilder {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns
            .first()
            .map_or(0, |(_, column)| column.len())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Returns a new dataset with one extra float column `new_name` holding
    /// `source / divisor` per row.
    ///
    /// This is the only column arithmetic the pipeline supports (for example
    /// a marker radius derived from a raw count). The receiver is unchanged.
    pub fn with_scaled_column(
        &self,
        source: &str,
        divisor: f64,
        new_name: impl Into<String>,
    ) -> DashResult<Self> {
        let new_name = new_name.into();
        if !divisor.is_finite() || divisor == 0.0 {
            return Err(ConfigurationError::InvalidDataset(format!(
                "scaled column `{new_name}` needs a finite, non-zero divisor"
            )));
        }
        if new_name.is_empty() || self.columns.contains_key(&new_name) {
            return Err(ConfigurationError::InvalidDataset(format!(
                "scaled column name `{new_name}` is empty or already taken"
            )));
        }
        let column = self.columns.get(source).ok_or_else(|| {
            ConfigurationError::InvalidDataset(format!(
                "scaled column source `{source}` does not exist in dataset `{}`",
                self.name
            ))
        })?;
        if !column.kind.is_numeric() {
            return Err(ConfigurationError::InvalidDataset(format!(
                "scaled column source `{source}` holds {}, not a numeric type",
                column.kind.as_str()
            )));
        }

        let values = column
            .values
            .iter()
            .map(|value| {
                // Guarded by the numeric kind check above.
                let raw = value.as_f64().unwrap_or_default();
                Value::Float(raw / divisor)
            })
            .collect();

        let mut columns = self.columns.clone();
        columns.insert(
            new_name,
            Column {
                kind: ValueKind::Float,
                values,
            },
        );
        Ok(Self {
            name: self.name.clone(),
            columns,
        })
    }
}

/// Literal-friendly dataset construction with build-time validation.
#[derive(Debug)]
pub struct DatasetBuilder {
    name: String,
    columns: Vec<(String, Vec<Value>)>,
}

impl DatasetBuilder {
    #[must_use]
    pub fn column<V>(mut self, name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        self.columns.push((
            name.into(),
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Validates the accumulated columns and freezes them into a [`Dataset`].
    ///
    /// Rejected: empty tables, ragged columns, mixed-type columns, and
    /// duplicate column names.
    pub fn build(self) -> DashResult<Dataset> {
        if self.name.is_empty() {
            return Err(ConfigurationError::InvalidDataset(
                "dataset name must not be empty".to_owned(),
            ));
        }
        if self.columns.is_empty() {
            return Err(ConfigurationError::InvalidDataset(format!(
                "dataset `{}` has no columns",
                self.name
            )));
        }

        let row_count = self.columns[0].1.len();
        if row_count == 0 {
            return Err(ConfigurationError::InvalidDataset(format!(
                "dataset `{}` has no rows",
                self.name
            )));
        }

        let mut columns = IndexMap::with_capacity(self.columns.len());
        for (column_name, values) in self.columns {
            if column_name.is_empty() {
                return Err(ConfigurationError::InvalidDataset(format!(
                    "dataset `{}` has a column with an empty name",
                    self.name
                )));
            }
            if values.len() != row_count {
                return Err(ConfigurationError::InvalidDataset(format!(
                    "column `{column_name}` has {} rows, expected {row_count}",
                    values.len()
                )));
            }

            let kind = values[0].kind();
            if let Some(mixed) = values.iter().find(|value| value.kind() != kind) {
                return Err(ConfigurationError::InvalidDataset(format!(
                    "column `{column_name}` mixes {} and {} cells",
                    kind.as_str(),
                    mixed.kind().as_str()
                )));
            }
            if let Some(bad) = values
                .iter()
                .filter_map(Value::as_f64)
                .find(|raw| !raw.is_finite())
            {
                return Err(ConfigurationError::InvalidDataset(format!(
                    "column `{column_name}` contains non-finite value {bad}"
                )));
            }

            if columns.insert(column_name.clone(), Column { kind, values }).is_some() {
                return Err(ConfigurationError::InvalidDataset(format!(
                    "duplicate column name `{column_name}`"
                )));
            }
        }

        Ok(Dataset {
            name: self.name,
            columns,
        })
    }
}
