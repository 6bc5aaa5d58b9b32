//! Typed REST client for the Fuzzyhome ingredient backend.
//!
//! The UI crate only needs the listing endpoint today, but the client covers
//! the read side of the ingredient resource so detail views can grow into it:
//!
//! - `GET /ingredients?page=&size=&search=`
//! - `GET /ingredients/{id}`
//! - `GET /ingredients/{id}/variants`
//! - `GET /ingredients/{id}/custom-units`
//!
//! Every call resolves to an [`ApiResponse`] whose `data` is `None` when the
//! backend answers with an empty body.

mod client;
mod dto;
mod error;

pub use client::{ApiClient, ApiResponse, ListIngredientsQuery};
pub use dto::{
    CustomUnitDto, ErrorDto, GenericUnit, IngredientDto, IngredientVariantDto, VolumeUnit,
    WeightUnit,
};
pub use error::ApiError;
pub use uuid::Uuid;
