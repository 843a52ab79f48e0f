//! Page fetching and HTML signal extraction for the keyphrase analysis.

pub mod client;
pub mod error;
pub mod page;
pub mod report;

pub use client::{parse_target, FetchConfig, PageFetcher};
pub use error::FetchError;
pub use page::{PageDocument, PageSignals};
pub use report::PageReport;
