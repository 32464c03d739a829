//! End-to-end runs of the cleaning pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use reel_cli::{CleanRequest, PipelineError, default_output_path, run_clean};
use reel_ingest::load_canonical;
use reel_model::{CleaningOptions, SchemaConfig};
use tracing_subscriber::fmt::MakeWriter;

const HEADER: &str =
    "name,year,movie_rated,run_length,genres,release_date,rating,num_raters,num_reviews,review_url";

const KNIGHT: &str = "The Dark Knight,(2008),PG-13,2h 32min,Action; Crime; Drama; ,18 July 2008 (USA),9.0,\"2,224,522\",6836,https://example.org/tt0468569";

fn write_raw(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("movies.csv");
    let mut contents = String::from(HEADER);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    fs::write(&path, contents).unwrap();
    path
}

fn five_rows(dir: &Path) -> PathBuf {
    write_raw(
        dir,
        &[
            KNIGHT,
            "Inception,(2010),PG-13,2h 28min,Action; Adventure; Sci-Fi; ,16 July 2010 (USA),8.8,\"1,981,675\",3820,https://example.org/tt1375666",
            KNIGHT,
            "Lost Reel,(2001),R,1h 40min,Drama; ,sometime in 2001,7.0,100,2,https://example.org/tt0000001",
            "Short Film,(2015),,45min,Animation; ,3 March 2015 (USA),6.5,1200,,https://example.org/tt0000002",
        ],
    )
}

#[test]
fn cleans_five_rows_into_three() {
    let dir = tempfile::tempdir().unwrap();
    let input = five_rows(dir.path());
    let output = dir.path().join("clean.csv");

    let report = run_clean(&CleanRequest::new(&input).with_output(&output)).unwrap();

    assert_eq!(report.rows_read, 5);
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(report.undated_rows_dropped, 1);
    assert_eq!(report.unnamed_rows_dropped, 0);
    assert_eq!(report.runtime_gaps, 1);
    assert_eq!(report.rows_written, 3);
    assert_eq!(
        report.columns_dropped,
        vec!["num_reviews".to_string(), "review_url".to_string()]
    );
    assert_eq!(
        report.columns,
        vec!["name", "release_date", "genres", "rating", "run_length", "num_raters"]
    );
    assert_eq!(report.output.as_deref(), Some(output.as_path()));

    let contents = fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!(contents, @r"
    name,release_date,genres,rating,run_length,num_raters
    The Dark Knight,2008-07-18,Action; Crime; Drama,9,152,2224522
    Inception,2010-07-16,Action; Adventure; Sci-Fi,8.8,148,1981675
    Short Film,2015-03-03,Animation,6.5,,1200
    ");

    let reloaded = load_canonical(&output, &SchemaConfig::default()).unwrap();
    assert_eq!(reloaded, report.table);
    assert!(reloaded.records.iter().all(|r| !r.genres.is_empty()));
    assert_eq!(reloaded.records[0].genres, vec!["Action", "Crime", "Drama"]);
}

#[test]
fn default_output_is_written_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = five_rows(dir.path());

    let report = run_clean(&CleanRequest::new(&input)).unwrap();

    let expected = dir.path().join("movies_clean.csv");
    assert_eq!(default_output_path(&input), expected);
    assert_eq!(report.output, Some(expected.clone()));
    assert!(expected.exists());
}

#[test]
fn missing_column_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("movies.csv");
    fs::write(
        &input,
        "name,year,movie_rated,run_length,release_date,rating,num_raters\n\
         Heat,(1995),R,2h 50min,15 December 1995 (USA),8.3,\"600,000\"\n",
    )
    .unwrap();
    let output = dir.path().join("clean.csv");

    let err = run_clean(&CleanRequest::new(&input).with_output(&output)).unwrap_err();

    match &err {
        PipelineError::MissingColumn { column, .. } => assert_eq!(column, "genres"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.category(), "MissingColumnError");
    assert!(!output.exists());
}

#[test]
fn header_only_input_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_raw(dir.path(), &[]);
    let output = dir.path().join("clean.csv");

    let err = run_clean(&CleanRequest::new(&input).with_output(&output)).unwrap_err();

    assert!(matches!(err, PipelineError::EmptyInput { .. }));
    assert_eq!(err.category(), "EmptyInputError");
    assert!(!output.exists());
}

#[test]
fn missing_input_is_file_handling() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_clean(&CleanRequest::new(dir.path().join("nope.csv"))).unwrap_err();
    assert_eq!(err.category(), "FileHandlingError");
}

#[test]
fn unwritable_output_is_file_handling() {
    let dir = tempfile::tempdir().unwrap();
    let input = five_rows(dir.path());
    let output = dir.path().join("missing-dir").join("clean.csv");

    let err = run_clean(&CleanRequest::new(&input).with_output(&output)).unwrap_err();

    assert_eq!(err.category(), "FileHandlingError");
    assert!(!output.exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = five_rows(dir.path());
    let output = dir.path().join("clean.csv");

    let report = run_clean(
        &CleanRequest::new(&input)
            .with_output(&output)
            .with_dry_run(true),
    )
    .unwrap();

    assert_eq!(report.rows_written, 3);
    assert_eq!(report.output, None);
    assert!(!output.exists());
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = five_rows(dir.path());
    let output = dir.path().join("clean.csv");
    fs::write(&output, "stale contents\n").unwrap();

    run_clean(&CleanRequest::new(&input).with_output(&output)).unwrap();
    let first = fs::read_to_string(&output).unwrap();
    run_clean(&CleanRequest::new(&input).with_output(&output)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), first);
    assert!(first.starts_with("name,release_date,"));
}

#[test]
fn lenient_dates_keep_text_month_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_raw(
        dir.path(),
        &[
            KNIGHT,
            "Old Print,(1999),R,1h 55min,Drama; ,\"March 31, 1999\",7.9,\"12,000\",40,https://example.org/tt0000003",
        ],
    );
    let output = dir.path().join("clean.csv");

    let strict = run_clean(&CleanRequest::new(&input).with_output(&output)).unwrap();
    assert_eq!(strict.rows_written, 1);

    let lenient = run_clean(
        &CleanRequest::new(&input)
            .with_output(&output)
            .with_options(CleaningOptions::lenient()),
    )
    .unwrap();
    assert_eq!(lenient.rows_written, 2);
    assert_eq!(lenient.undated_rows_dropped, 0);
}

#[test]
fn inconsistent_config_is_rejected_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let input = five_rows(dir.path());
    let options = CleaningOptions::new(SchemaConfig::default().with_genre_delimiter(""));

    let err = run_clean(&CleanRequest::new(&input).with_options(options)).unwrap_err();

    assert!(matches!(err, PipelineError::Config(_)));
    assert!(!default_output_path(&input).exists());
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn several_missing_columns_warn_once() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("movies.csv");
    fs::write(&input, "name,year,movie_rated,run_length\nHeat,(1995),R,2h 50min\n").unwrap();
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();

    let err = tracing::subscriber::with_default(subscriber, || {
        run_clean(&CleanRequest::new(&input)).unwrap_err()
    });

    assert_eq!(err.category(), "MissingColumnError");
    let text = logs.text();
    assert_eq!(text.matches(" WARN ").count(), 1, "{text}");
    assert!(text.contains("genres"));
}
