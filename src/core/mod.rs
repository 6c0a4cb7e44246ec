pub mod dataset;
pub mod descriptor;
pub mod scale;
pub mod theme;
pub mod value;

pub use dataset::{Column, Dataset, DatasetBuilder};
pub use descriptor::{Channel, ChartDescriptor, ChartKind};
pub use scale::LinearScale;
pub use theme::{Color, Theme};
pub use value::{Value, ValueKind};
