use polars::prelude::*;

use crate::error::Result;
use crate::schema;

/// Fixed ten-row dataset used when no input file is available.
pub fn sample_dataset() -> Result<DataFrame> {
    let ids = vec!["A1", "B2", "C3", "D4", "E5", "F6", "G7", "H8", "I9", "J10"];
    let titles = vec![
        "Music Hit 1",
        "Funny Clip",
        "Breaking News",
        "Vlog",
        "Music Hit 2",
        "Game Review",
        "News Update",
        "Interview",
        "Music Hit 3",
        "Sketch",
    ];
    let categories = vec![
        "Music",
        "Entertainment",
        "News",
        "Vlogs",
        "Music",
        "Gaming",
        "News",
        "Entertainment",
        "Music",
        "Entertainment",
    ];
    let views: Vec<i64> = vec![
        1_500_000, 800_000, 1_200_000, 300_000, 2_000_000, 500_000, 900_000, 700_000, 1_800_000,
        600_000,
    ];
    let likes: Vec<i64> = vec![
        150_000, 50_000, 80_000, 10_000, 200_000, 25_000, 60_000, 40_000, 190_000, 35_000,
    ];
    let comments: Vec<i64> = vec![5_000, 1_500, 2_500, 300, 7_000, 800, 1_800, 1_200, 6_500, 1_000];
    let publish_times = vec![
        "2023-10-25T18:00:00Z",
        "2023-10-26T14:30:00Z",
        "2023-10-27T09:00:00Z",
        "2023-10-27T16:00:00Z",
        "2023-10-28T18:30:00Z",
        "2023-10-28T10:00:00Z",
        "2023-10-29T11:00:00Z",
        "2023-10-29T20:00:00Z",
        "2023-10-29T19:00:00Z",
        "2023-10-30T15:00:00Z",
    ];

    let df = DataFrame::new(vec![
        Series::new(schema::VIDEO_ID.into(), ids).into(),
        Series::new(schema::TITLE.into(), titles).into(),
        Series::new(schema::CATEGORY.into(), categories).into(),
        Series::new(schema::VIEWS.into(), views).into(),
        Series::new(schema::LIKES.into(), likes).into(),
        Series::new(schema::COMMENT_COUNT.into(), comments).into(),
        Series::new(schema::PUBLISH_TIME.into(), publish_times).into(),
    ])?;

    Ok(df)
}
