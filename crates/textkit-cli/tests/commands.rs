//! End-to-end runs of the three utilities against temp files, with the
//! report captured in a buffer sink.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use textkit_cli::commands::{run_conversion, run_statistics, run_word_count};
use textkit_report::BufferSink;

fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input file");
    path
}

/// Collects log output so tests can assert on emitted diagnostics.
#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("capture buffer lock");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut buffer = self.buffer.lock().expect("capture buffer lock");
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with logs at `warn` and above captured into the returned string.
fn capture_warnings(f: impl FnOnce()) -> String {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(LevelFilter::WARN)
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

/// Drop the elapsed-time line, which differs between runs.
fn without_elapsed(report: &str) -> Vec<String> {
    report
        .lines()
        .filter(|line| !line.starts_with("Elapsed Time:"))
        .map(String::from)
        .collect()
}

#[test]
fn statistics_run_reports_all_five_measures() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, "numbers.txt", "1\n2\n3\n4\n");
    let mut sink = BufferSink::default();

    run_statistics(&input, &mut sink).expect("run statistics");

    let lines: Vec<&str> = sink.contents.lines().collect();
    assert_eq!(lines[0], "Mean: 2.5");
    assert_eq!(lines[1], "Median: 2.5");
    // every value is equally frequent, so the mode ties out
    assert_eq!(lines[2], "Mode: #N/A");
    assert!(lines[3].starts_with("Variance: 1.666"));
    assert!(lines[4].starts_with("Standard Deviation: 1.29"));
    assert!(lines[5].starts_with("Elapsed Time: "));
    assert!(lines[5].ends_with(" seconds"));
}

#[test]
fn statistics_run_skips_unqualified_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, "numbers.txt", "2\nabc\n-3\n2\n\n2\n2\n");
    let mut sink = BufferSink::default();

    run_statistics(&input, &mut sink).expect("run statistics");

    assert!(sink.contents.contains("Mean: 2\n"));
    assert!(sink.contents.contains("Mode: 2\n"));
    assert!(sink.contents.contains("Variance: 0\n"));
}

#[test]
fn statistics_run_fails_without_writing_when_file_is_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("no-such-file.txt");
    let mut sink = BufferSink::default();

    let result = run_statistics(&missing, &mut sink);

    assert!(result.is_err());
    assert!(sink.contents.is_empty(), "no report should be written");
}

#[test]
fn statistics_run_handles_empty_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, "empty.txt", "");
    let mut sink = BufferSink::default();

    run_statistics(&input, &mut sink).expect("run statistics");

    assert!(sink.contents.contains("Mean: 0\n"));
    assert!(sink.contents.contains("Mode: #N/A\n"));
    assert!(sink.contents.contains("Standard Deviation: 0\n"));
}

#[test]
fn conversion_run_skips_bad_lines_and_continues() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, "numbers.txt", "10\n12a\n255\n0\n");
    let mut sink = BufferSink::default();

    run_conversion(&input, &mut sink).expect("run conversion");

    let lines: Vec<&str> = sink.contents.lines().collect();
    assert_eq!(lines[0], "NUM | BIN | HEX");
    assert_eq!(lines[1], "10 | 1010 | A");
    assert_eq!(lines[2], "255 | 11111111 | FF");
    assert_eq!(lines[3], "0 | 0 | 0");
    assert!(lines[4].starts_with("Elapsed Time: "));
    assert_eq!(lines.len(), 5);
}

#[test]
fn conversion_run_emits_a_diagnostic_for_each_skipped_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, "numbers.txt", "10\n12a\n255\n");
    let mut sink = BufferSink::default();

    let logs = capture_warnings(|| {
        run_conversion(&input, &mut sink).expect("run conversion");
    });

    assert!(
        logs.contains("invalid data encountered and skipped: 12a"),
        "expected a skip diagnostic for '12a', got: {logs}"
    );
    assert!(sink.contents.contains("255 | 11111111 | FF"));
}

#[test]
fn word_count_run_emits_a_diagnostic_for_skipped_tokens() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, "words.txt", "The cat sat. The CAT ran");
    let mut sink = BufferSink::default();

    let logs = capture_warnings(|| {
        run_word_count(&input, &mut sink).expect("run word count");
    });

    assert!(
        logs.contains("invalid data encountered and skipped: sat."),
        "expected a skip diagnostic for 'sat.', got: {logs}"
    );
    assert!(sink.contents.contains("ran | 1"));
}

#[test]
fn word_count_run_counts_case_insensitively() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, "words.txt", "The cat sat. The CAT ran");
    let mut sink = BufferSink::default();

    run_word_count(&input, &mut sink).expect("run word count");

    let lines: Vec<&str> = sink.contents.lines().collect();
    assert_eq!(lines[0], "WORD | FREQ");
    // descending frequency, ties broken alphabetically
    assert_eq!(lines[1], "cat | 2");
    assert_eq!(lines[2], "the | 2");
    assert_eq!(lines[3], "ran | 1");
    assert!(lines[4].starts_with("Elapsed Time: "));
}

#[test]
fn word_count_run_writes_empty_report_for_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("no-such-file.txt");
    let mut sink = BufferSink::default();

    run_word_count(&missing, &mut sink).expect("run word count");

    let lines: Vec<&str> = sink.contents.lines().collect();
    assert_eq!(lines[0], "WORD | FREQ");
    assert!(lines[1].starts_with("Elapsed Time: "));
    assert_eq!(lines.len(), 2);
}

#[test]
fn repeated_runs_differ_only_in_the_elapsed_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, "numbers.txt", "5\n7\n7\n");
    let mut first = BufferSink::default();
    let mut second = BufferSink::default();

    run_statistics(&input, &mut first).expect("first run");
    run_statistics(&input, &mut second).expect("second run");

    assert_eq!(
        without_elapsed(&first.contents),
        without_elapsed(&second.contents)
    );
}
