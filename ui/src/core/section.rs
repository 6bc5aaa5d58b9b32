//! Navigation sections and the path → section resolver.
//!
//! The drawer highlights at most one section. Which one is a pure function of
//! the current location path, evaluated on every render so it can never drift
//! from the router:
//!
//! | path                  | section       |
//! |-----------------------|---------------|
//! | `/`                   | `Recipes`     |
//! | `/recipes…`           | `Recipes`     |
//! | `/ingredients…`       | `Ingredients` |
//! | anything else         | none          |
//!
//! Query strings and fragments are ignored, so `/?tab=x` still counts as the
//! root.

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Recipes,
    Ingredients,
}

impl Section {
    /// Drawer order.
    pub const ALL: [Section; 2] = [Section::Recipes, Section::Ingredients];

    /// Canonical route path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Recipes => "/recipes",
            Self::Ingredients => "/ingredients",
        }
    }

    /// Stable identifier used for element keys and CSS modifiers.
    pub fn key(self) -> &'static str {
        match self {
            Self::Recipes => "recipes",
            Self::Ingredients => "ingredients",
        }
    }

    /// Localized drawer label.
    pub fn label(self) -> String {
        match self {
            Self::Recipes => t!("nav-recipes"),
            Self::Ingredients => t!("nav-ingredients"),
        }
    }
}

/// Map the current location path onto the section to highlight.
pub fn resolve_section(path: &str) -> Option<Section> {
    let path = path.split(['?', '#']).next().unwrap_or(path);

    if path == "/" || path.starts_with(Section::Recipes.path()) {
        Some(Section::Recipes)
    } else if path.starts_with(Section::Ingredients.path()) {
        Some(Section::Ingredients)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_aliases_to_recipes() {
        assert_eq!(resolve_section("/"), Some(Section::Recipes));
    }

    #[test]
    fn prefixes_select_their_section() {
        assert_eq!(resolve_section("/recipes"), Some(Section::Recipes));
        assert_eq!(resolve_section("/recipes/anything"), Some(Section::Recipes));
        assert_eq!(resolve_section("/ingredients"), Some(Section::Ingredients));
        assert_eq!(
            resolve_section("/ingredients/6f1c1f8e/variants"),
            Some(Section::Ingredients)
        );
    }

    #[test]
    fn unknown_paths_select_nothing() {
        assert_eq!(resolve_section("/other"), None);
        assert_eq!(resolve_section(""), None);
        assert_eq!(resolve_section("/settings/recipes"), None);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(resolve_section("/?tab=1"), Some(Section::Recipes));
        assert_eq!(resolve_section("/ingredients#top"), Some(Section::Ingredients));
        assert_eq!(resolve_section("/other?next=/recipes"), None);
    }

    #[test]
    fn re_resolves_on_every_path_change() {
        let visited = ["/", "/ingredients", "/other", "/recipes"];
        let resolved: Vec<_> = visited.iter().map(|p| resolve_section(p)).collect();
        assert_eq!(
            resolved,
            vec![
                Some(Section::Recipes),
                Some(Section::Ingredients),
                None,
                Some(Section::Recipes)
            ]
        );
    }

    #[test]
    fn every_section_resolves_from_its_own_path() {
        for section in Section::ALL {
            assert_eq!(resolve_section(section.path()), Some(section));
        }
    }
}
