//! # Field Contracts
//!
//! Which raw fields each record kind accepts and how they become typed DTOs.
//!
//! Creating a record requires exactly its mandatory fields. Updating accepts any subset of
//! them plus `id` (the id itself is read separately, before the contract runs). Association
//! fields are never accepted here.

use crate::model::{Actor, ActorCreate, ActorUpdate, Movie, MovieCreate, MovieUpdate};
use record_store::{Coercion, Entity, FieldContract, Fields, ValidationError};

/// Format of `date_of_birth`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Name of the identity field in raw input.
pub const ID_FIELD: &str = "id";

/// Name of the counterpart id in relation requests.
pub const RELATION_ID_FIELD: &str = "relation_id";

/// Input rules for one record kind.
pub trait Contract: Entity {
    /// Fields a new record must carry, and the only ones an update may change.
    const MANDATORY: &'static [&'static str];

    /// Adds the coercions of this kind to `contract`.
    fn coercions(contract: FieldContract) -> FieldContract;

    fn create_params(fields: &Fields) -> Result<Self::Create, ValidationError>;

    fn update_params(fields: &Fields) -> Self::Update;

    fn create_contract() -> FieldContract {
        Self::coercions(FieldContract::new().require(Self::MANDATORY))
    }

    fn update_contract() -> FieldContract {
        Self::coercions(
            FieldContract::new()
                .allow(Self::MANDATORY)
                .allow(&[ID_FIELD]),
        )
    }
}

fn required<V>(value: Option<V>, field: &str) -> Result<V, ValidationError> {
    value.ok_or_else(|| ValidationError::missing(field))
}

impl Contract for Actor {
    const MANDATORY: &'static [&'static str] = &["name", "gender", "date_of_birth"];

    fn coercions(contract: FieldContract) -> FieldContract {
        contract.coerce("date_of_birth", Coercion::Date(DATE_FORMAT))
    }

    fn create_params(fields: &Fields) -> Result<ActorCreate, ValidationError> {
        Ok(ActorCreate {
            name: required(fields.text("name"), "name")?,
            gender: required(fields.text("gender"), "gender")?,
            date_of_birth: required(fields.date("date_of_birth"), "date_of_birth")?,
        })
    }

    fn update_params(fields: &Fields) -> ActorUpdate {
        ActorUpdate {
            name: fields.text("name"),
            gender: fields.text("gender"),
            date_of_birth: fields.date("date_of_birth"),
        }
    }
}

impl Contract for Movie {
    const MANDATORY: &'static [&'static str] = &["name", "year", "genre"];

    fn coercions(contract: FieldContract) -> FieldContract {
        contract.coerce("year", Coercion::Integer)
    }

    fn create_params(fields: &Fields) -> Result<MovieCreate, ValidationError> {
        Ok(MovieCreate {
            name: required(fields.text("name"), "name")?,
            year: required(fields.integer("year"), "year")?,
            genre: required(fields.text("genre"), "genre")?,
        })
    }

    fn update_params(fields: &Fields) -> MovieUpdate {
        MovieUpdate {
            name: fields.text("name"),
            year: fields.integer("year"),
            genre: fields.text("genre"),
        }
    }
}
