use serde::{Deserialize, Serialize};

/// Crops the predictors accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Rice,
    Wheat,
    Maize,
    Cotton,
    Sugarcane,
    Potato,
    Tomato,
    Onion,
}

impl Crop {
    pub const ALL: [Crop; 8] = [
        Crop::Rice,
        Crop::Wheat,
        Crop::Maize,
        Crop::Cotton,
        Crop::Sugarcane,
        Crop::Potato,
        Crop::Tomato,
        Crop::Onion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Maize => "Maize",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Potato => "Potato",
            Crop::Tomato => "Tomato",
            Crop::Onion => "Onion",
        }
    }

    /// Exact, case-sensitive match against [`Crop::ALL`].
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }

    /// Typical yield in kg per hectare.
    pub fn base_yield_per_hectare(&self) -> f64 {
        match self {
            Crop::Rice => 4000.0,
            Crop::Wheat => 3000.0,
            Crop::Maize => 5000.0,
            Crop::Cotton => 500.0,
            Crop::Sugarcane => 70000.0,
            Crop::Potato => 25000.0,
            Crop::Tomato => 40000.0,
            Crop::Onion => 20000.0,
        }
    }

    /// Market price per kg.
    pub fn price_per_unit(&self) -> f64 {
        match self {
            Crop::Rice => 25.0,
            Crop::Wheat => 20.0,
            Crop::Maize => 18.0,
            Crop::Cotton => 80.0,
            Crop::Sugarcane => 3.0,
            Crop::Potato => 15.0,
            Crop::Tomato => 25.0,
            Crop::Onion => 20.0,
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
