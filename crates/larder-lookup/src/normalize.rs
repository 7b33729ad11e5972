//! Shared projection helpers for the per-domain normalizers

use spoonacular_client::{CaloricBreakdown, Measure, Nutrient};

use crate::error::NormalizationError;
use crate::types::{CaloricSplit, NutrientAmount, Quantity};

const INGREDIENT_IMAGE_BASE: &str = "https://img.spoonacular.com/ingredients_100x100/";

/// The record's identifying id; absent, non-numeric or non-positive ids are rejected
pub(crate) fn required_id(
    id: Option<i64>,
    record: &'static str,
) -> Result<i64, NormalizationError> {
    id.filter(|id| *id > 0)
        .ok_or(NormalizationError::MissingField { record, field: "id" })
}

/// Full CDN URL for an ingredient image file name
pub(crate) fn ingredient_image_url(image: Option<&str>) -> Option<String> {
    let image = image.map(str::trim).filter(|s| !s.is_empty())?;
    if image.starts_with("http://") || image.starts_with("https://") {
        Some(image.to_string())
    } else {
        Some(format!("{INGREDIENT_IMAGE_BASE}{image}"))
    }
}

/// Counts such as servings or minutes; negatives and overflow become `None`
pub(crate) fn count(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

/// Nutrients without a name are dropped
pub(crate) fn nutrient_amounts(nutrients: Vec<Nutrient>) -> Vec<NutrientAmount> {
    nutrients
        .into_iter()
        .filter_map(|n| {
            let name = n.name.filter(|s| !s.trim().is_empty())?;
            Some(NutrientAmount {
                name,
                amount: n.amount,
                unit: n.unit,
                percent_of_daily_needs: n.percent_of_daily_needs,
            })
        })
        .collect()
}

pub(crate) fn caloric_split(breakdown: CaloricBreakdown) -> CaloricSplit {
    CaloricSplit {
        percent_protein: breakdown.percent_protein,
        percent_fat: breakdown.percent_fat,
        percent_carbs: breakdown.percent_carbs,
    }
}

pub(crate) fn quantity(measure: Measure) -> Quantity {
    Quantity {
        amount: measure.amount,
        unit: measure.unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_id() {
        assert_eq!(required_id(Some(7), "recipe"), Ok(7));
        assert_eq!(
            required_id(None, "recipe"),
            Err(NormalizationError::MissingField {
                record: "recipe",
                field: "id"
            })
        );
        assert!(required_id(Some(0), "recipe").is_err());
    }

    #[test]
    fn test_ingredient_image_url() {
        assert_eq!(
            ingredient_image_url(Some("apple.jpg")).as_deref(),
            Some("https://img.spoonacular.com/ingredients_100x100/apple.jpg")
        );
        assert_eq!(
            ingredient_image_url(Some("https://cdn.example.com/a.png")).as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(ingredient_image_url(Some("  ")), None);
        assert_eq!(ingredient_image_url(None), None);
    }

    #[test]
    fn test_count_rejects_negative() {
        assert_eq!(count(Some(45)), Some(45));
        assert_eq!(count(Some(-1)), None);
        assert_eq!(count(None), None);
    }

    #[test]
    fn test_nameless_nutrients_dropped() {
        let nutrients = vec![
            Nutrient {
                name: Some("Calories".into()),
                amount: Some(52.0),
                unit: Some("kcal".into()),
                percent_of_daily_needs: None,
            },
            Nutrient {
                name: None,
                amount: Some(1.0),
                ..Default::default()
            },
        ];
        let out = nutrient_amounts(nutrients);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Calories");
    }
}
