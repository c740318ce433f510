//! Static tables shared by both service variants.
//!
//! Nothing in here carries logic; the validator and the handlers read from
//! these tables so the numbers live in exactly one place.

pub const SERVICE_VERSION: &str = "1.0.0";
pub const RULES_SERVICE_NAME: &str = "Farmer Assistant ML API";
pub const ARTIFACT_SERVICE_NAME: &str = "Crop Recommendation API";

/// Relative to the working directory. Deliberately not configurable.
pub const ARTIFACT_PATH: &str = "models/crop_recommendation_model.json";

/// Routes served by this process.
pub mod routes {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const PREDICT_CROP: &str = "/predict/crop";
    pub const PREDICT_YIELD: &str = "/predict/yield";
    pub const MODELS_INFO: &str = "/models/info";
    pub const RECOMMEND: &str = "/recommend";
}

/// Paths exposed by the public gateway in front of this service. Only the
/// crop and yield entries are backed by anything here.
pub const API_ENDPOINTS: &[(&str, &str)] = &[
    ("weather", "/api/weather"),
    ("notifications", "/api/notifications"),
    ("crop_recommendation", "/api/crop-recommendation"),
    ("yield_prediction", "/api/yield-prediction"),
    ("pest_detection", "/api/pest-detection"),
    ("chatbot", "/api/chatbot"),
    ("auth", "/auth"),
    ("admin", "/api/admin"),
];

/// Crops the platform knows how to display. Wider than what the predictors
/// accept; see [`crate::models::Crop`] for that list.
pub const PLATFORM_CROPS: &[&str] = &[
    "Rice",
    "Wheat",
    "Maize",
    "Cotton",
    "Sugarcane",
    "Potato",
    "Tomato",
    "Onion",
    "Soybean",
    "Groundnut",
    "Barley",
    "Millet",
];

/// Suggested regardless of the recommendation.
pub const ALTERNATIVE_CROPS: [&str; 2] = ["Maize", "Barley"];

pub const CROP_INPUT_FEATURES: [&str; 3] = ["soil_ph", "temperature", "rainfall"];
pub const YIELD_INPUT_FEATURES: [&str; 3] = ["crop_type", "area", "input_cost"];

/// Column order the artifact was fit with. Never reorder.
pub const SOIL_NUTRIENT_COLUMNS: [&str; 7] =
    ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"];

/// Closed numeric interval for a request field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRange {
    pub min: f64,
    pub max: f64,
}

impl ValidationRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const SOIL_PH_RANGE: ValidationRange = ValidationRange::new(0.0, 14.0);
pub const TEMPERATURE_RANGE: ValidationRange = ValidationRange::new(-50.0, 60.0);
pub const RAINFALL_RANGE: ValidationRange = ValidationRange::new(0.0, 5000.0);
