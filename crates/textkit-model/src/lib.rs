pub mod error;
pub mod record;

pub use error::{IngestError, ReportError, Result};
pub use record::{Conversion, Mode, StatisticsSummary, WordFrequency};
