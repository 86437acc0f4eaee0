//! Owners

use consign::uuids::TypedUuid;

/// The signed-in user who owns a set of records.
#[derive(Debug)]
pub struct Owner;

/// Owner UUID
pub type OwnerUuid = TypedUuid<Owner>;
