use crate::OverviewDto;
use serde::Serialize;

/// Project overview response
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub overview: OverviewDto,
}
