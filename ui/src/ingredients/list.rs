use api::{GenericUnit, IngredientDto};
use dioxus::prelude::*;

use crate::t;

/// Presentational list; one row per ingredient, or a single "no ingredients" row.
#[component]
pub fn IngredientList(ingredients: Vec<IngredientDto>) -> Element {
    rsx! {
        ul { class: "item-list",
            if ingredients.is_empty() {
                li { class: "item-list__item item-list__item--empty", {t!("ingredients-empty")} }
            } else {
                for (index, ingredient) in ingredients.iter().enumerate() {
                    li { key: "{row_key(ingredient, index)}", class: "item-list__item",
                        span { class: "item-list__primary", "{ingredient.name}" }
                        if let Some(detail) = secondary_text(ingredient) {
                            span { class: "item-list__secondary", "{detail}" }
                        }
                    }
                }
            }
        }
    }
}

/// Prefer the backend id; unsaved rows fall back to their position.
fn row_key(ingredient: &IngredientDto, index: usize) -> String {
    ingredient
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| index.to_string())
}

/// Variant count, followed by the distinct serving units when any are set.
fn secondary_text(ingredient: &IngredientDto) -> Option<String> {
    let variants = &ingredient.ingredient_variants;
    if variants.is_empty() {
        return None;
    }
    let count = t!("ingredients-variant-count", count = (variants.len() as i64));

    let mut units: Vec<&str> = Vec::new();
    for symbol in variants.iter().filter_map(|v| v.unit).map(GenericUnit::symbol) {
        if !units.contains(&symbol) {
            units.push(symbol);
        }
    }
    if units.is_empty() {
        Some(count)
    } else {
        Some(format!("{count} ({})", units.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_element;
    use api::IngredientVariantDto;

    fn render(ingredients: Vec<IngredientDto>) -> String {
        crate::i18n::init_for_tests();
        render_element(rsx! { IngredientList { ingredients } })
    }

    #[test]
    fn renders_one_row_per_ingredient() {
        let html = render(vec![
            IngredientDto::named("Ingredient 1"),
            IngredientDto::named("Ingredient 2"),
        ]);
        assert!(html.contains("Ingredient 1"));
        assert!(html.contains("Ingredient 2"));
        assert_eq!(html.matches("<li").count(), 2);
        assert!(!html.contains("No ingredients found"));
    }

    #[test]
    fn empty_collection_renders_placeholder_row() {
        let html = render(Vec::new());
        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains("No ingredients found"));
    }

    #[test]
    fn shows_variant_count_when_present() {
        let mut milk = IngredientDto::named("Milk");
        milk.ingredient_variants = vec![
            IngredientVariantDto {
                description: "Whole".into(),
                ..Default::default()
            },
            IngredientVariantDto {
                description: "Skimmed".into(),
                ..Default::default()
            },
        ];
        let html = render(vec![milk, IngredientDto::named("Salt")]);
        assert_eq!(html.matches("item-list__secondary").count(), 1);
        assert!(html.contains("variants"));
    }

    #[test]
    fn secondary_text_lists_distinct_units() {
        crate::i18n::init_for_tests();
        let mut milk = IngredientDto::named("Milk");
        milk.ingredient_variants = [
            Some(GenericUnit::Milliliter),
            Some(GenericUnit::Milliliter),
            Some(GenericUnit::Gram),
            None,
        ]
        .into_iter()
        .map(|unit| IngredientVariantDto {
            unit,
            ..Default::default()
        })
        .collect();

        let text = secondary_text(&milk).unwrap();
        assert!(text.contains("variants"), "{text}");
        assert!(text.ends_with("(ml, g)"), "{text}");
    }

    #[test]
    fn secondary_text_without_units_is_just_the_count() {
        crate::i18n::init_for_tests();
        let mut salt = IngredientDto::named("Salt");
        salt.ingredient_variants = vec![IngredientVariantDto::default()];

        let text = secondary_text(&salt).unwrap();
        assert!(text.contains("variant"), "{text}");
        assert!(!text.contains('('), "{text}");
        assert_eq!(secondary_text(&IngredientDto::named("Pepper")), None);
    }

    #[test]
    fn row_keys_prefer_ids() {
        let mut with_id = IngredientDto::named("Flour");
        with_id.id = Some(uuid_nil());
        assert_eq!(row_key(&with_id, 3), uuid_nil().to_string());
        assert_eq!(row_key(&IngredientDto::named("Sugar"), 3), "3");
    }

    fn uuid_nil() -> api::Uuid {
        api::Uuid::nil()
    }
}
