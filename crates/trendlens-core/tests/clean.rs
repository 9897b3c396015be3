use polars::prelude::*;

use trendlens_core::clean::{
    clean, dedup_videos, derive_standard_category, drop_missing, parse_publish_times,
};
use trendlens_core::error::PipelineError;
use trendlens_core::schema;

type Row<'a> = (
    &'a str,
    Option<&'a str>,
    &'a str,
    Option<i64>,
    Option<i64>,
    Option<i64>,
    Option<&'a str>,
);

fn frame(rows: &[Row<'_>]) -> DataFrame {
    let ids: Vec<&str> = rows.iter().map(|r| r.0).collect();
    let titles: Vec<Option<&str>> = rows.iter().map(|r| r.1).collect();
    let categories: Vec<&str> = rows.iter().map(|r| r.2).collect();
    let views: Vec<Option<i64>> = rows.iter().map(|r| r.3).collect();
    let likes: Vec<Option<i64>> = rows.iter().map(|r| r.4).collect();
    let comments: Vec<Option<i64>> = rows.iter().map(|r| r.5).collect();
    let times: Vec<Option<&str>> = rows.iter().map(|r| r.6).collect();

    DataFrame::new(vec![
        Series::new(schema::VIDEO_ID.into(), ids).into(),
        Series::new(schema::TITLE.into(), titles).into(),
        Series::new(schema::CATEGORY.into(), categories).into(),
        Series::new(schema::VIEWS.into(), views).into(),
        Series::new(schema::LIKES.into(), likes).into(),
        Series::new(schema::COMMENT_COUNT.into(), comments).into(),
        Series::new(schema::PUBLISH_TIME.into(), times).into(),
    ])
    .unwrap()
}

fn complete_row<'a>(id: &'a str, title: &'a str, category: &'a str, time: &'a str) -> Row<'a> {
    (
        id,
        Some(title),
        category,
        Some(1_000),
        Some(100),
        Some(10),
        Some(time),
    )
}

#[test]
fn dedup_keeps_first_occurrence() {
    let df = frame(&[
        complete_row("A1", "first upload", "Music", "2023-10-25T18:00:00Z"),
        complete_row("B2", "other video", "News", "2023-10-26T09:00:00Z"),
        complete_row("A1", "reupload", "Music", "2023-10-27T12:00:00Z"),
    ]);

    let deduped = dedup_videos(&df).unwrap();
    assert_eq!(deduped.height(), 2);

    let titles = deduped.column(schema::TITLE).unwrap().str().unwrap();
    assert_eq!(titles.get(0), Some("first upload"));
    assert_eq!(titles.get(1), Some("other video"));
}

#[test]
fn drop_missing_removes_incomplete_rows() {
    let df = frame(&[
        complete_row("A1", "kept", "Music", "2023-10-25T18:00:00Z"),
        (
            "B2",
            None,
            "News",
            Some(500),
            Some(50),
            Some(5),
            Some("2023-10-26T09:00:00Z"),
        ),
        (
            "C3",
            Some("no views"),
            "News",
            None,
            Some(50),
            Some(5),
            Some("2023-10-26T10:00:00Z"),
        ),
    ]);

    let complete = drop_missing(&df).unwrap();
    assert_eq!(complete.height(), 1);
    assert_eq!(
        complete
            .column(schema::VIDEO_ID)
            .unwrap()
            .str()
            .unwrap()
            .get(0),
        Some("A1")
    );

    for column in complete.get_columns() {
        assert_eq!(column.null_count(), 0);
    }
}

#[test]
fn standard_category_uses_allow_list_with_fallback() {
    let df = frame(&[
        complete_row("A1", "a", "Music", "2023-10-25T18:00:00Z"),
        complete_row("B2", "b", "Entertainment", "2023-10-25T18:00:00Z"),
        complete_row("C3", "c", "News", "2023-10-25T18:00:00Z"),
        complete_row("D4", "d", "Vlogs", "2023-10-25T18:00:00Z"),
        complete_row("E5", "e", "Gaming", "2023-10-25T18:00:00Z"),
    ]);

    let categorized = derive_standard_category(&df).unwrap();
    let labels = categorized
        .column(schema::STANDARD_CATEGORY)
        .unwrap()
        .str()
        .unwrap();

    assert_eq!(labels.get(0), Some("Music"));
    assert_eq!(labels.get(1), Some("Entertainment"));
    assert_eq!(labels.get(2), Some("News"));
    assert_eq!(labels.get(3), Some("Others"));
    assert_eq!(labels.get(4), Some("Others"));
}

#[test]
fn publish_fields_follow_stated_zone() {
    let df = frame(&[
        complete_row("A1", "a", "Music", "2023-10-25T18:00:00Z"),
        complete_row("B2", "b", "News", "2023-10-26T00:30:00+05:30"),
    ]);

    let parsed = parse_publish_times(&df).unwrap();

    let hours = parsed.column(schema::PUBLISH_HOUR).unwrap().i32().unwrap();
    assert_eq!(hours.get(0), Some(18));
    // hour in the stated zone; in UTC this instant is 19:00 the day before
    assert_eq!(hours.get(1), Some(0));

    let days = parsed.column(schema::PUBLISH_DAY).unwrap().str().unwrap();
    assert_eq!(days.get(0), Some("Wednesday"));
    // weekday in the stated zone, not the UTC Wednesday
    assert_eq!(days.get(1), Some("Thursday"));

    let timestamps = parsed
        .column(schema::PUBLISH_TIME)
        .unwrap()
        .datetime()
        .unwrap();
    assert_eq!(timestamps.get(0), Some(1_698_256_800_000_000));
}

#[test]
fn malformed_timestamp_aborts_the_run() {
    let df = frame(&[
        complete_row("A1", "a", "Music", "2023-10-25T18:00:00Z"),
        complete_row("B2", "b", "News", "not-a-date"),
    ]);

    let err = clean(&df).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::MalformedInput {
            field: "publish_time",
            ..
        }
    ));
}

#[test]
fn missing_required_column_is_rejected() {
    let df = frame(&[complete_row("A1", "a", "Music", "2023-10-25T18:00:00Z")])
        .drop(schema::VIEWS)
        .unwrap();

    let err = clean(&df).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::MissingField { column: "views" }
    ));
}

#[test]
fn clean_runs_all_steps_in_order() {
    let df = frame(&[
        complete_row("A1", "kept", "Music", "2023-10-25T18:00:00Z"),
        complete_row("A1", "duplicate", "Gaming", "2023-10-26T10:00:00Z"),
        (
            "B2",
            None,
            "News",
            Some(500),
            Some(50),
            Some(5),
            Some("2023-10-26T09:00:00Z"),
        ),
        complete_row("C3", "bucketed", "Vlogs", "2023-10-27T07:15:00Z"),
    ]);

    let cleaned = clean(&df).unwrap();
    assert_eq!(cleaned.height(), 2);

    let labels = cleaned
        .column(schema::STANDARD_CATEGORY)
        .unwrap()
        .str()
        .unwrap();
    assert_eq!(labels.get(0), Some("Music"));
    assert_eq!(labels.get(1), Some("Others"));

    let hours = cleaned.column(schema::PUBLISH_HOUR).unwrap().i32().unwrap();
    assert_eq!(hours.get(0), Some(18));
    assert_eq!(hours.get(1), Some(7));
}
