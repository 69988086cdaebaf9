//! Gender hints derived from kinship roles.
//!
//! The hint is a rendering heuristic used to place partners next to each
//! other and to order singles inside a generation row. It makes no claim
//! about a member's actual gender or relationships, and nothing outside
//! couple matching and sequencing should depend on it.

use kinchart_core::family::Role;

/// Gender suggested by a role tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderHint {
    Male,
    Female,
    Unknown,
}

impl GenderHint {
    /// Sort key used when ordering singles: male, then female, then unknown.
    pub fn order_key(self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
            Self::Unknown => 3,
        }
    }
}

/// Returns the gender suggested by `role`.
pub fn gender_hint(role: Role) -> GenderHint {
    match role {
        Role::Grandfather
        | Role::Father
        | Role::Son
        | Role::Brother
        | Role::Uncle
        | Role::Nephew
        | Role::Grandson => GenderHint::Male,
        Role::Grandmother
        | Role::Mother
        | Role::Daughter
        | Role::Sister
        | Role::Aunt
        | Role::Niece
        | Role::Granddaughter => GenderHint::Female,
        Role::Other => GenderHint::Unknown,
    }
}
