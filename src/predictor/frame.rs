use crate::constants::SOIL_NUTRIENT_COLUMNS;
use crate::error::{CropcastError, Result};
use crate::models::SoilNutrientRequest;

/// Named columns over rows of numbers, the shape predictors consume.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureFrame {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(bad) = rows.iter().position(|r| r.len() != columns.len()) {
            return Err(CropcastError::Prediction(format!(
                "row {} has {} values but the frame has {} columns",
                bad,
                rows[bad].len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Single row with columns in [`SOIL_NUTRIENT_COLUMNS`] order.
    pub fn from_soil_nutrients(req: &SoilNutrientRequest) -> Self {
        Self {
            columns: SOIL_NUTRIENT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: vec![req.to_row().to_vec()],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}
