//! Generation buckets.
//!
//! Every member lands in exactly one of seven display rows, chosen from its
//! kinship role alone.

use kinchart_core::family::Role;

/// One of the seven fixed display rows of a chart, in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GenerationBucket {
    Grandparents,
    Parents,
    Uncles,
    Children,
    Nephews,
    Grandchildren,
    Other,
}

impl GenerationBucket {
    /// All buckets in display order.
    pub const ALL: [GenerationBucket; 7] = [
        Self::Grandparents,
        Self::Parents,
        Self::Uncles,
        Self::Children,
        Self::Nephews,
        Self::Grandchildren,
        Self::Other,
    ];

    /// Maps a role to its bucket. Total: unrecognized roles go to
    /// [`GenerationBucket::Other`].
    ///
    /// ```
    /// # use kinchart::GenerationBucket;
    /// # use kinchart_core::family::Role;
    /// assert_eq!(GenerationBucket::classify(Role::Sister), GenerationBucket::Children);
    /// assert_eq!(GenerationBucket::classify(Role::Other), GenerationBucket::Other);
    /// ```
    pub fn classify(role: Role) -> Self {
        match role {
            Role::Grandfather | Role::Grandmother => Self::Grandparents,
            Role::Father | Role::Mother => Self::Parents,
            Role::Uncle | Role::Aunt => Self::Uncles,
            Role::Son | Role::Daughter | Role::Brother | Role::Sister => Self::Children,
            Role::Nephew | Role::Niece => Self::Nephews,
            Role::Grandson | Role::Granddaughter => Self::Grandchildren,
            Role::Other => Self::Other,
        }
    }

    /// Stable machine name, used for SVG attributes and logs.
    pub fn key(self) -> &'static str {
        match self {
            Self::Grandparents => "grandparents",
            Self::Parents => "parents",
            Self::Uncles => "uncles",
            Self::Children => "children",
            Self::Nephews => "nephews",
            Self::Grandchildren => "grandchildren",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_pairs_share_bucket() {
        let pairs = [
            (Role::Grandfather, Role::Grandmother, GenerationBucket::Grandparents),
            (Role::Father, Role::Mother, GenerationBucket::Parents),
            (Role::Uncle, Role::Aunt, GenerationBucket::Uncles),
            (Role::Son, Role::Daughter, GenerationBucket::Children),
            (Role::Brother, Role::Sister, GenerationBucket::Children),
            (Role::Nephew, Role::Niece, GenerationBucket::Nephews),
            (Role::Grandson, Role::Granddaughter, GenerationBucket::Grandchildren),
        ];

        for (male, female, bucket) in pairs {
            assert_eq!(GenerationBucket::classify(male), bucket);
            assert_eq!(GenerationBucket::classify(female), bucket);
        }
    }

    #[test]
    fn test_known_roles_never_land_in_other() {
        for role in Role::KNOWN {
            assert_ne!(GenerationBucket::classify(role), GenerationBucket::Other);
        }
    }

    #[test]
    fn test_unrecognized_tag_lands_in_other() {
        let role: Role = "COUSIN".parse().unwrap();
        assert_eq!(GenerationBucket::classify(role), GenerationBucket::Other);
    }

    #[test]
    fn test_display_order() {
        let mut sorted = GenerationBucket::ALL;
        sorted.sort();
        assert_eq!(sorted, GenerationBucket::ALL);
        assert_eq!(GenerationBucket::ALL[0].key(), "grandparents");
        assert_eq!(GenerationBucket::ALL[6].key(), "other");
    }
}
