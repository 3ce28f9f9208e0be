pub mod engine;
pub mod placeholder;
pub mod series;
pub mod version;

pub use crate::domain::model::{ChartSeries, ProfileDocument, VersionIdentifier, VersionList};
pub use crate::domain::ports::{ConfigProvider, SiteSource, Storage};
pub use crate::utils::error::Result;
