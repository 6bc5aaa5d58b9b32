//! Wire types mirroring the backend's OpenAPI models (camelCase JSON).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_to_volume_conversion_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_weight_unit: Option<WeightUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_volume_unit: Option<VolumeUnit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredient_variants: Vec<IngredientVariantDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_units: Vec<CustomUnitDto>,
}

impl IngredientDto {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientVariantDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub description: String,
    #[serde(default)]
    pub default_variant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<GenericUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomUnitDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_unit_to_custom_unit_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_unit: Option<GenericUnit>,
}

/// Error body returned by the backend for 4xx answers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    Gram,
    Milligram,
    Kilogram,
    Ounce,
    Pound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    FluidOunce,
    Teaspoon,
    Tablespoon,
    Cup,
}

/// Union of weight and volume units, used where either kind is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenericUnit {
    Gram,
    Milligram,
    Kilogram,
    Ounce,
    Pound,
    Milliliter,
    Liter,
    FluidOunce,
    Teaspoon,
    Tablespoon,
    Cup,
}

impl From<WeightUnit> for GenericUnit {
    fn from(unit: WeightUnit) -> Self {
        match unit {
            WeightUnit::Gram => Self::Gram,
            WeightUnit::Milligram => Self::Milligram,
            WeightUnit::Kilogram => Self::Kilogram,
            WeightUnit::Ounce => Self::Ounce,
            WeightUnit::Pound => Self::Pound,
        }
    }
}

impl From<VolumeUnit> for GenericUnit {
    fn from(unit: VolumeUnit) -> Self {
        match unit {
            VolumeUnit::Milliliter => Self::Milliliter,
            VolumeUnit::Liter => Self::Liter,
            VolumeUnit::FluidOunce => Self::FluidOunce,
            VolumeUnit::Teaspoon => Self::Teaspoon,
            VolumeUnit::Tablespoon => Self::Tablespoon,
            VolumeUnit::Cup => Self::Cup,
        }
    }
}

impl GenericUnit {
    /// Short symbol for compact display (`g`, `ml`, `tbsp`, ...).
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Milligram => "mg",
            Self::Kilogram => "kg",
            Self::Ounce => "oz",
            Self::Pound => "lb",
            Self::Milliliter => "ml",
            Self::Liter => "l",
            Self::FluidOunce => "fl oz",
            Self::Teaspoon => "tsp",
            Self::Tablespoon => "tbsp",
            Self::Cup => "cup",
        }
    }
}
