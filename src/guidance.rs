//! Category guidance table
//!
//! A fixed four-entry table of display guidance, one record per category.
//! The table is compile-time static and never mutated.

use crate::types::{BmiCategory, CategoryInfo};

const UNDERWEIGHT: CategoryInfo = CategoryInfo {
    range: "< 18.5",
    description: "You are underweight. Focus on healthy weight gain.",
    tips: [
        "Eat nutrient-dense foods",
        "Include protein in every meal",
        "Consider strength training",
        "Consult a nutritionist for guidance",
    ],
};

const NORMAL: CategoryInfo = CategoryInfo {
    range: "18.5 - 24.9",
    description: "You have a healthy weight. Keep up the good work!",
    tips: [
        "Maintain a balanced diet",
        "Regular exercise",
        "Stay hydrated",
        "Get adequate sleep",
    ],
};

const OVERWEIGHT: CategoryInfo = CategoryInfo {
    range: "25 - 29.9",
    description: "You are overweight. Consider lifestyle changes.",
    tips: [
        "Monitor portion sizes",
        "Increase physical activity",
        "Choose whole foods",
        "Track your progress",
    ],
};

const OBESE: CategoryInfo = CategoryInfo {
    range: "\u{2265} 30",
    description: "You are in the obese range. Consult healthcare providers.",
    tips: [
        "Seek medical advice",
        "Start with gentle exercise",
        "Make dietary changes",
        "Consider professional support",
    ],
};

impl BmiCategory {
    /// Guidance record for this category
    pub fn guidance(&self) -> &'static CategoryInfo {
        match self {
            BmiCategory::Underweight => &UNDERWEIGHT,
            BmiCategory::Normal => &NORMAL,
            BmiCategory::Overweight => &OVERWEIGHT,
            BmiCategory::Obese => &OBESE,
        }
    }
}

impl CategoryInfo {
    /// Look up guidance by string key.
    ///
    /// Unrecognized keys fall back to the `normal` entry so a caller
    /// holding a stale or foreign key still gets a usable record.
    pub fn for_key(key: &str) -> &'static CategoryInfo {
        match key {
            "underweight" => &UNDERWEIGHT,
            "overweight" => &OVERWEIGHT,
            "obese" => &OBESE,
            _ => &NORMAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_four_tips() {
        for category in BmiCategory::ALL {
            let info = category.guidance();
            assert_eq!(info.tips.len(), 4);
            assert!(info.tips.iter().all(|t| !t.is_empty()));
            assert!(!info.range.is_empty());
            assert!(!info.description.is_empty());
        }
    }

    #[test]
    fn test_for_key_resolves_valid_keys() {
        for category in BmiCategory::ALL {
            let by_key = CategoryInfo::for_key(category.as_str());
            assert_eq!(by_key, category.guidance());
        }
    }

    #[test]
    fn test_for_key_falls_back_to_normal() {
        assert_eq!(
            CategoryInfo::for_key("morbidly-curious"),
            BmiCategory::Normal.guidance()
        );
        assert_eq!(CategoryInfo::for_key(""), BmiCategory::Normal.guidance());
    }

    #[test]
    fn test_ranges_match_thresholds() {
        assert_eq!(BmiCategory::Underweight.guidance().range, "< 18.5");
        assert_eq!(BmiCategory::Normal.guidance().range, "18.5 - 24.9");
        assert_eq!(BmiCategory::Overweight.guidance().range, "25 - 29.9");
        assert_eq!(BmiCategory::Obese.guidance().range, "\u{2265} 30");
    }
}
