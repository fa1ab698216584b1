pub mod bot;
pub mod combination;
pub mod fetcher;
pub mod registry;

pub use crate::domain::model::{CombinationId, HoroscopeQuery, Period, Sign};
pub use crate::domain::ports::{ConfigProvider, ContentSource, Extractor, Transport};
pub use crate::utils::error::Result;
