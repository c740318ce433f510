pub mod crop;
pub mod crop_recommendation;
pub mod model_info;
pub mod service;
pub mod soil_nutrient;
pub mod yield_prediction;

pub use crop::*;
pub use crop_recommendation::*;
pub use model_info::*;
pub use service::*;
pub use soil_nutrient::*;
pub use yield_prediction::*;
