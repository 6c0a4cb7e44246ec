use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{ConfigurationError, DashResult};

/// Draw intent for one geographic point marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub lat: f64,
    pub lon: f64,
    pub radius_px: f64,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MarkerPrimitive {
    #[must_use]
    pub fn new(lat: f64, lon: f64, radius_px: f64, color: Color) -> Self {
        Self {
            lat,
            lon,
            radius_px,
            color,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn validate(&self) -> DashResult<()> {
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lon) {
            return Err(ConfigurationError::InvalidElement(format!(
                "marker position ({}, {}) is outside geographic bounds",
                self.lat, self.lon
            )));
        }
        // A zero radius is a real encoding: a size cell of 0 draws nothing
        // for that row without failing the chart.
        if !self.radius_px.is_finite() || self.radius_px < 0.0 {
            return Err(ConfigurationError::InvalidElement(
                "marker radius must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw intent for one filled map region keyed by a location code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPrimitive {
    pub location: String,
    /// Normalized position within the value column's min..max, 0..=1.
    pub intensity: f64,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RegionPrimitive {
    #[must_use]
    pub fn new(location: impl Into<String>, intensity: f64, color: Color) -> Self {
        Self {
            location: location.into(),
            intensity,
            color,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn validate(&self) -> DashResult<()> {
        if self.location.is_empty() {
            return Err(ConfigurationError::InvalidElement(
                "region location code must not be empty".to_owned(),
            ));
        }
        if !self.intensity.is_finite() || !(0.0..=1.0).contains(&self.intensity) {
            return Err(ConfigurationError::InvalidElement(format!(
                "region intensity {} must be in [0, 1]",
                self.intensity
            )));
        }
        self.color.validate()
    }
}

/// Draw intent for one category bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPrimitive {
    pub label: String,
    pub value: f64,
    /// Height relative to the tallest bar, 0..=1.
    pub extent: f64,
    pub color: Color,
}

impl BarPrimitive {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, extent: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            extent,
            color,
        }
    }

    pub fn validate(&self) -> DashResult<()> {
        if self.label.is_empty() {
            return Err(ConfigurationError::InvalidElement(
                "bar label must not be empty".to_owned(),
            ));
        }
        if !self.value.is_finite() || !self.extent.is_finite() || !(0.0..=1.0).contains(&self.extent)
        {
            return Err(ConfigurationError::InvalidElement(format!(
                "bar `{}` extent {} must be finite and in [0, 1]",
                self.label, self.extent
            )));
        }
        self.color.validate()
    }
}

/// Draw intent for one radar axis spoke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokePrimitive {
    pub axis: String,
    pub value: f64,
    /// Length relative to the longest spoke, 0..=1.
    pub reach: f64,
    pub color: Color,
}

impl SpokePrimitive {
    #[must_use]
    pub fn new(axis: impl Into<String>, value: f64, reach: f64, color: Color) -> Self {
        Self {
            axis: axis.into(),
            value,
            reach,
            color,
        }
    }

    pub fn validate(&self) -> DashResult<()> {
        if self.axis.is_empty() {
            return Err(ConfigurationError::InvalidElement(
                "spoke axis label must not be empty".to_owned(),
            ));
        }
        if !self.value.is_finite() || !self.reach.is_finite() || !(0.0..=1.0).contains(&self.reach) {
            return Err(ConfigurationError::InvalidElement(format!(
                "spoke `{}` reach {} must be finite and in [0, 1]",
                self.axis, self.reach
            )));
        }
        self.color.validate()
    }
}

/// Fully materialized table: header row plus stringified cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableGrid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub header_fill: Color,
    pub cell_fill: Color,
    pub text_color: Color,
}

impl TableGrid {
    pub fn validate(&self) -> DashResult<()> {
        if self.header.is_empty() {
            return Err(ConfigurationError::InvalidElement(
                "table header must not be empty".to_owned(),
            ));
        }
        for row in &self.rows {
            if row.len() != self.header.len() {
                return Err(ConfigurationError::InvalidElement(format!(
                    "table row has {} cells, expected {}",
                    row.len(),
                    self.header.len()
                )));
            }
        }
        for color in [self.header_fill, self.cell_fill, self.text_color] {
            color.validate()?;
        }
        Ok(())
    }
}

/// Draw intent for one label (chart title, caption).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, font_size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> DashResult<()> {
        if self.text.is_empty() {
            return Err(ConfigurationError::InvalidElement(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ConfigurationError::InvalidElement(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
