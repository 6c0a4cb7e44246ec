use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::dataset::Dataset;
use crate::error::{ConfigurationError, DashResult};

/// Closed enumeration of supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    ScatterGeo,
    Choropleth,
    Bubble,
    Radar,
    Bar,
    Table,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::ScatterGeo,
        ChartKind::Choropleth,
        ChartKind::Bubble,
        ChartKind::Radar,
        ChartKind::Bar,
        ChartKind::Table,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::ScatterGeo => "scatter-geo",
            ChartKind::Choropleth => "choropleth",
            ChartKind::Bubble => "bubble",
            ChartKind::Radar => "radar",
            ChartKind::Bar => "bar",
            ChartKind::Table => "table",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ConfigurationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == input)
            .ok_or_else(|| ConfigurationError::UnsupportedKind(input.to_owned()))
    }
}

/// Visual channel a dataset column can be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Latitude,
    Longitude,
    Location,
    Category,
    Value,
    Size,
    Color,
    Label,
}

impl Channel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Latitude => "latitude",
            Channel::Longitude => "longitude",
            Channel::Location => "location",
            Channel::Category => "category",
            Channel::Value => "value",
            Channel::Size => "size",
            Channel::Color => "color",
            Channel::Label => "label",
        }
    }

    /// Channels that must resolve to a numeric column.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Channel::Latitude | Channel::Longitude | Channel::Value | Channel::Size | Channel::Color
        )
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative chart configuration: a kind plus a column-to-channel mapping.
///
/// A descriptor carries no data; it is validated against a concrete
/// [`Dataset`] before any rendering happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub kind: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    channels: IndexMap<Channel, String>,
}

impl ChartDescriptor {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            title: None,
            channels: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_channel(mut self, channel: Channel, column: impl Into<String>) -> Self {
        self.channels.insert(channel, column.into());
        self
    }

    #[must_use]
    pub fn channel(&self, channel: Channel) -> Option<&str> {
        self.channels.get(&channel).map(String::as_str)
    }

    /// Channels a descriptor of this kind must map before it can render.
    #[must_use]
    pub fn required_channels(kind: ChartKind) -> &'static [Channel] {
        match kind {
            ChartKind::ScatterGeo => &[Channel::Latitude, Channel::Longitude],
            ChartKind::Bubble => &[Channel::Latitude, Channel::Longitude, Channel::Size],
            ChartKind::Choropleth => &[Channel::Location, Channel::Value],
            ChartKind::Radar | ChartKind::Bar => &[Channel::Category, Channel::Value],
            ChartKind::Table => &[],
        }
    }

    /// Checks every referenced column against `dataset` before rendering.
    ///
    /// Fails on a missing required channel, a channel pointing at a column
    /// the dataset does not have, or a numeric channel pointing at a string
    /// column. No partial visual is ever produced after a failure here.
    pub fn validate_against(&self, dataset: &Dataset) -> DashResult<()> {
        for required in Self::required_channels(self.kind) {
            if !self.channels.contains_key(required) {
                return Err(ConfigurationError::MissingChannel {
                    kind: self.kind.to_string(),
                    channel: required.to_string(),
                });
            }
        }

        for (channel, column_name) in &self.channels {
            let Some(column) = dataset.column(column_name) else {
                return Err(ConfigurationError::MissingColumn {
                    kind: self.kind.to_string(),
                    column: column_name.clone(),
                    dataset: dataset.name().to_owned(),
                });
            };
            if channel.is_numeric() && !column.kind().is_numeric() {
                return Err(ConfigurationError::ColumnTypeMismatch {
                    kind: self.kind.to_string(),
                    channel: channel.to_string(),
                    column: column_name.clone(),
                    actual: column.kind().as_str().to_owned(),
                });
            }
        }

        Ok(())
    }
}
