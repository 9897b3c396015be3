use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::info;

use crate::aggregate::{self, CategoryShare, CorrelationMatrix, HourlyViews, ScatterPoint};
use crate::clean;
use crate::error::Result;

/// The complete output of one pipeline run: the three aggregate summaries
/// plus the (views, likes) pairs handed to the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub rows: usize,
    pub category_distribution: Vec<CategoryShare>,
    pub correlation: CorrelationMatrix,
    pub hourly_views: Vec<HourlyViews>,
    pub scatter: Vec<ScatterPoint>,
}

/// Cleans the dataset and computes all aggregates. Fails without partial
/// output on a missing column or an unparseable field.
pub fn run(df: &DataFrame) -> Result<Analysis> {
    let cleaned = clean::clean(df)?;
    info!(
        rows_in = df.height(),
        rows_out = cleaned.height(),
        "dataset cleaned"
    );

    let category_distribution = aggregate::category_distribution(&cleaned)?;
    let correlation = aggregate::correlation_matrix(&cleaned)?;
    let hourly_views = aggregate::hourly_average_views(&cleaned)?;
    let scatter = aggregate::scatter_points(&cleaned)?;
    info!(
        categories = category_distribution.len(),
        hours = hourly_views.len(),
        "aggregates computed"
    );

    Ok(Analysis {
        rows: cleaned.height(),
        category_distribution,
        correlation,
        hourly_views,
        scatter,
    })
}
