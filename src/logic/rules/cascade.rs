use super::{cotton::CottonRule, maize::MaizeRule, rice::RiceRule, wheat::WheatRule, CropRule};
use crate::models::{Crop, CropRecommendationRequest};

pub const DEFAULT_RULE_ID: &str = "default";

/// Ordered first-match-wins threshold cascade.
///
/// The ranges overlap (an input can satisfy wheat, maize and cotton at once),
/// so the order in [`CropRuleCascade::new`] decides the answer.
pub struct CropRuleCascade {
    rules: Vec<Box<dyn CropRule>>,
    fallback: Crop,
}

/// Which crop was picked and by which rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub crop: Crop,
    pub rule_id: &'static str,
}

impl CropRuleCascade {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn CropRule>> = vec![
            Box::new(RiceRule),
            Box::new(WheatRule),
            Box::new(MaizeRule),
            Box::new(CottonRule),
        ];

        Self {
            rules,
            fallback: Crop::Wheat,
        }
    }

    pub fn recommend(&self, conditions: &CropRecommendationRequest) -> CascadeOutcome {
        self.rules
            .iter()
            .find(|rule| rule.matches(conditions))
            .map(|rule| CascadeOutcome {
                crop: rule.crop(),
                rule_id: rule.id(),
            })
            .unwrap_or(CascadeOutcome {
                crop: self.fallback,
                rule_id: DEFAULT_RULE_ID,
            })
    }

    pub fn list_rules(&self) -> Vec<(&'static str, Crop)> {
        self.rules.iter().map(|r| (r.id(), r.crop())).collect()
    }
}

impl Default for CropRuleCascade {
    fn default() -> Self {
        Self::new()
    }
}
