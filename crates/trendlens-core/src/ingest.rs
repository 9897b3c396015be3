use csv::ReaderBuilder;
use polars::prelude::*;

use crate::error::{PipelineError, Result};
use crate::schema;

/// Reads delimited text with a header row into a typed DataFrame.
///
/// All seven required columns must be present in the header (extra columns
/// are ignored). Empty fields become nulls so the cleaning stage can drop
/// them; a non-empty count field that does not parse as an integer is
/// malformed input.
pub fn read_csv(content: &str) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let mut indices = [0usize; schema::REQUIRED_COLUMNS.len()];
    for (slot, column) in indices.iter_mut().zip(schema::REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|header| header.trim() == column)
            .ok_or(PipelineError::MissingField { column })?;
    }
    let [id_idx, title_idx, category_idx, views_idx, likes_idx, comments_idx, time_idx] = indices;

    let mut ids: Vec<Option<String>> = Vec::new();
    let mut titles: Vec<Option<String>> = Vec::new();
    let mut categories: Vec<Option<String>> = Vec::new();
    let mut views: Vec<Option<i64>> = Vec::new();
    let mut likes: Vec<Option<i64>> = Vec::new();
    let mut comments: Vec<Option<i64>> = Vec::new();
    let mut times: Vec<Option<String>> = Vec::new();

    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = row_idx + 1;

        ids.push(text_field(&record, id_idx));
        titles.push(text_field(&record, title_idx));
        categories.push(text_field(&record, category_idx));
        views.push(count_field(&record, views_idx, schema::VIEWS, row)?);
        likes.push(count_field(&record, likes_idx, schema::LIKES, row)?);
        comments.push(count_field(&record, comments_idx, schema::COMMENT_COUNT, row)?);
        times.push(text_field(&record, time_idx));
    }

    let df = DataFrame::new(vec![
        Series::new(schema::VIDEO_ID.into(), ids).into(),
        Series::new(schema::TITLE.into(), titles).into(),
        Series::new(schema::CATEGORY.into(), categories).into(),
        Series::new(schema::VIEWS.into(), views).into(),
        Series::new(schema::LIKES.into(), likes).into(),
        Series::new(schema::COMMENT_COUNT.into(), comments).into(),
        Series::new(schema::PUBLISH_TIME.into(), times).into(),
    ])?;

    Ok(df)
}

fn text_field(record: &csv::StringRecord, index: usize) -> Option<String> {
    match record.get(index).map(str::trim) {
        Some("") | None => None,
        Some(value) => Some(value.to_string()),
    }
}

fn count_field(
    record: &csv::StringRecord,
    index: usize,
    field: &'static str,
    row: usize,
) -> Result<Option<i64>> {
    match record.get(index).map(str::trim) {
        Some("") | None => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| PipelineError::MalformedInput {
                row,
                field,
                value: value.to_string(),
            }),
    }
}
