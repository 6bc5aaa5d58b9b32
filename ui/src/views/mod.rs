//! Routed pages. Component names match each platform's `Route` variants.

mod construction;
pub use construction::Construction;

mod home;
pub use home::Home;

mod ingredients;
pub use ingredients::Ingredients;

mod not_found;
pub use not_found::PageNotFound;

mod recipes;
pub use recipes::Recipes;
