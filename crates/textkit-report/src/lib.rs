pub mod console;
pub mod format;
pub mod sink;

pub use console::{conversion_table, statistics_table, word_count_table};
pub use format::{conversion_report, statistics_report, word_count_report};
pub use sink::{BufferSink, FileSink, ReportSink};
