use std::collections::{BTreeMap, HashMap};

use polars::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::schema;

pub const CORRELATION_FIELDS: [&str; 3] = [schema::VIEWS, schema::LIKES, schema::COMMENT_COUNT];

#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub count: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub fields: [&'static str; 3],
    pub values: [[f64; 3]; 3],
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let row = self.fields.iter().position(|field| *field == a)?;
        let col = self.fields.iter().position(|field| *field == b)?;
        Some(self.values[row][col])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HourlyViews {
    pub hour: i32,
    pub mean_views: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub views: i64,
    pub likes: i64,
}

/// Percentage share of each distinct standard_category value, descending by
/// count (ties broken by label). Shares sum to 100 for a non-empty dataset.
pub fn category_distribution(df: &DataFrame) -> Result<Vec<CategoryShare>> {
    let labels = df.column(schema::STANDARD_CATEGORY)?.str()?;
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut total = 0u32;

    for idx in 0..df.height() {
        if let Some(label) = labels.get(idx) {
            *counts.entry(label.to_string()).or_insert(0) += 1;
            total += 1;
        }
    }

    let mut shares: Vec<CategoryShare> = counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            percent: f64::from(count) / f64::from(total) * 100.0,
            category,
            count,
        })
        .collect();
    shares.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.cmp(&b.category))
    });

    Ok(shares)
}

/// Pairwise Pearson correlation across views, likes, and comment_count.
/// Symmetric with unit diagonal; entries are NaN when a field has zero
/// variance.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let views = df.column(schema::VIEWS)?.i64()?;
    let likes = df.column(schema::LIKES)?.i64()?;
    let comments = df.column(schema::COMMENT_COUNT)?.i64()?;

    let mut columns: [Vec<f64>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for idx in 0..df.height() {
        if let (Some(v), Some(l), Some(c)) = (views.get(idx), likes.get(idx), comments.get(idx)) {
            columns[0].push(v as f64);
            columns[1].push(l as f64);
            columns[2].push(c as f64);
        }
    }

    let mut values = [[f64::NAN; 3]; 3];
    for i in 0..3 {
        values[i][i] = if squared_deviation(&columns[i]) > 0.0 {
            1.0
        } else {
            f64::NAN
        };
        for j in (i + 1)..3 {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        fields: CORRELATION_FIELDS,
        values,
    })
}

/// Mean views per distinct publish_hour, ascending by hour.
pub fn hourly_average_views(df: &DataFrame) -> Result<Vec<HourlyViews>> {
    let hours = df.column(schema::PUBLISH_HOUR)?.i32()?;
    let views = df.column(schema::VIEWS)?.i64()?;

    let mut groups: BTreeMap<i32, (f64, u32)> = BTreeMap::new();
    for idx in 0..df.height() {
        if let (Some(hour), Some(count)) = (hours.get(idx), views.get(idx)) {
            let entry = groups.entry(hour).or_insert((0.0, 0));
            entry.0 += count as f64;
            entry.1 += 1;
        }
    }

    Ok(groups
        .into_iter()
        .map(|(hour, (sum, n))| HourlyViews {
            hour,
            mean_views: sum / f64::from(n),
        })
        .collect())
}

/// The cleaned (views, likes) pairs, in row order, for scatter plotting.
pub fn scatter_points(df: &DataFrame) -> Result<Vec<ScatterPoint>> {
    let views = df.column(schema::VIEWS)?.i64()?;
    let likes = df.column(schema::LIKES)?.i64()?;

    let mut points = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        if let (Some(v), Some(l)) = (views.get(idx), likes.get(idx)) {
            points.push(ScatterPoint { views: v, likes: l });
        }
    }

    Ok(points)
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    if x.is_empty() {
        return f64::NAN;
    }
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

fn squared_deviation(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let mean = x.iter().sum::<f64>() / x.len() as f64;
    x.iter().map(|value| (value - mean) * (value - mean)).sum()
}
