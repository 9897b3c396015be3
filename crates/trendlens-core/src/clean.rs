use std::collections::HashSet;

use chrono::{DateTime, Timelike};
use polars::prelude::*;

use crate::error::{PipelineError, Result};
use crate::schema::{self, StandardCategory};

/// Runs the full cleaning stage: dedup, drop-missing, category bucketing,
/// timestamp parsing with derived hour/day columns. Steps are order-sensitive
/// and each produces a new DataFrame.
pub fn clean(df: &DataFrame) -> Result<DataFrame> {
    ensure_schema(df)?;
    let deduped = dedup_videos(df)?;
    let complete = drop_missing(&deduped)?;
    let categorized = derive_standard_category(&complete)?;
    parse_publish_times(&categorized)
}

pub fn ensure_schema(df: &DataFrame) -> Result<()> {
    for column in schema::REQUIRED_COLUMNS {
        if df.column(column).is_err() {
            return Err(PipelineError::MissingField { column });
        }
    }
    Ok(())
}

/// Drops rows whose video_id was already seen, keeping the first occurrence
/// in encounter order. Null ids pass through here; drop_missing removes them.
pub fn dedup_videos(df: &DataFrame) -> Result<DataFrame> {
    let ids = df.column(schema::VIDEO_ID)?.str()?;
    let mut seen: HashSet<String> = HashSet::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let first = match ids.get(idx) {
            Some(id) => seen.insert(id.to_string()),
            None => true,
        };
        keep.push(first);
    }

    filter_rows(df, keep)
}

/// Drops any row containing a null in any column.
pub fn drop_missing(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        if series.null_count() == 0 {
            continue;
        }
        let nulls = series.is_null();
        for (idx, flag) in keep.iter_mut().enumerate() {
            if nulls.get(idx).unwrap_or(false) {
                *flag = false;
            }
        }
    }

    filter_rows(df, keep)
}

/// Appends the standard_category column via the allow-list bucketing rule.
pub fn derive_standard_category(df: &DataFrame) -> Result<DataFrame> {
    let raw = df.column(schema::CATEGORY)?.str()?;
    let mut labels: Vec<Option<&'static str>> = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        labels.push(raw.get(idx).map(|c| StandardCategory::from_raw(c).as_str()));
    }

    let mut out = df.clone();
    out.hstack_mut(&[Series::new(schema::STANDARD_CATEGORY.into(), labels).into()])?;
    Ok(out)
}

/// Parses publish_time into a UTC-microsecond datetime column and derives
/// publish_hour and publish_day in the timestamp's stated zone.
///
/// The first unparseable timestamp aborts the run; there is no per-row skip.
pub fn parse_publish_times(df: &DataFrame) -> Result<DataFrame> {
    let raw = df.column(schema::PUBLISH_TIME)?.str()?;
    let mut micros: Vec<Option<i64>> = Vec::with_capacity(df.height());
    let mut hours: Vec<Option<i32>> = Vec::with_capacity(df.height());
    let mut days: Vec<Option<String>> = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let Some(value) = raw.get(idx) else {
            micros.push(None);
            hours.push(None);
            days.push(None);
            continue;
        };

        let parsed =
            DateTime::parse_from_rfc3339(value).map_err(|_| PipelineError::MalformedInput {
                row: idx + 1,
                field: schema::PUBLISH_TIME,
                value: value.to_string(),
            })?;

        micros.push(Some(parsed.timestamp_micros()));
        hours.push(Some(parsed.hour() as i32));
        days.push(Some(parsed.format("%A").to_string()));
    }

    let timestamps = Series::new(schema::PUBLISH_TIME.into(), micros).cast(&DataType::Datetime(
        TimeUnit::Microseconds,
        Some(polars::prelude::TimeZone::UTC),
    ))?;

    let mut out = df.drop(schema::PUBLISH_TIME)?;
    out.hstack_mut(&[
        timestamps.into(),
        Series::new(schema::PUBLISH_HOUR.into(), hours).into(),
        Series::new(schema::PUBLISH_DAY.into(), days).into(),
    ])?;
    Ok(out)
}

fn filter_rows(df: &DataFrame, keep: Vec<bool>) -> Result<DataFrame> {
    let mask = Series::new("keep".into(), keep);
    Ok(df.filter(mask.bool()?)?)
}
