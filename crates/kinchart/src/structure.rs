//! Family structure: members grouped into ordered generation rows.

use log::{debug, info};

use kinchart_core::family::Member;

use crate::{couple::find_couples, generation::GenerationBucket, sequence::order_generation};

/// One non-empty generation row with its members in display order.
#[derive(Debug, Clone)]
pub struct GenerationRow<'a> {
    bucket: GenerationBucket,
    members: Vec<&'a Member>,
}

impl<'a> GenerationRow<'a> {
    pub fn bucket(&self) -> GenerationBucket {
        self.bucket
    }

    pub fn members(&self) -> &[&'a Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Members of one chart grouped into rows, top to bottom.
///
/// Only buckets with at least one member produce a row. Row order follows
/// [`GenerationBucket::ALL`].
#[derive(Debug, Clone)]
pub struct FamilyStructure<'a> {
    rows: Vec<GenerationRow<'a>>,
}

impl<'a> FamilyStructure<'a> {
    /// Classifies, pairs and orders `members`.
    pub fn from_members(members: &'a [Member]) -> Self {
        let mut buckets: [Vec<&'a Member>; 7] = Default::default();
        for member in members {
            let bucket = GenerationBucket::classify(member.role());
            buckets[bucket as usize].push(member);
        }

        let rows: Vec<GenerationRow<'a>> = GenerationBucket::ALL
            .into_iter()
            .zip(buckets)
            .filter(|(_, bucket_members)| !bucket_members.is_empty())
            .map(|(bucket, bucket_members)| {
                let couples = find_couples(&bucket_members, members);
                let ordered = order_generation(&bucket_members, &couples);
                debug!(
                    bucket = bucket.key(),
                    members = ordered.len(),
                    couples = couples.len();
                    "Generation row ordered"
                );
                GenerationRow {
                    bucket,
                    members: ordered,
                }
            })
            .collect();

        info!(members = members.len(), rows = rows.len(); "Family structure built");
        Self { rows }
    }

    pub fn rows(&self) -> &[GenerationRow<'a>] {
        &self.rows
    }

    /// Number of members across all rows.
    pub fn member_count(&self) -> usize {
        self.rows.iter().map(GenerationRow::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use kinchart_core::family::Role;

    use super::*;

    fn scenario_a() -> Vec<Member> {
        vec![
            Member::new("1", "Ivan", "Petrov", Role::Father),
            Member::new("2", "Anna", "Petrova", Role::Mother),
            Member::new("3", "Oleg", "Petrov", Role::Son)
                .with_father("1")
                .with_mother("2"),
        ]
    }

    fn row_ids(row: &GenerationRow<'_>) -> Vec<String> {
        row.members()
            .iter()
            .map(|member| member.id().to_string())
            .collect()
    }

    #[test]
    fn test_second_partner_sorts_with_singles() {
        let members = vec![
            Member::new("1", "Boris", "Petrov", Role::Uncle),
            Member::new("2", "Vera", "Petrova", Role::Aunt),
            Member::new("3", "Galina", "Orlova", Role::Aunt),
            Member::new("6", "Denis", "Petrov", Role::Uncle),
            Member::new("4", "Kira", "Petrova", Role::Niece)
                .with_father("1")
                .with_mother("2"),
            Member::new("5", "Lev", "Petrov", Role::Nephew)
                .with_father("1")
                .with_mother("3"),
        ];
        let structure = FamilyStructure::from_members(&members);

        let uncles = structure
            .rows()
            .iter()
            .find(|row| row.bucket() == GenerationBucket::Uncles)
            .unwrap();
        assert_eq!(row_ids(uncles), vec!["1", "2", "6", "3"]);
    }

    #[test]
    fn test_scenario_a_rows() {
        let members = scenario_a();
        let structure = FamilyStructure::from_members(&members);

        assert_eq!(structure.rows().len(), 2);
        assert_eq!(structure.rows()[0].bucket(), GenerationBucket::Parents);
        assert_eq!(row_ids(&structure.rows()[0]), vec!["1", "2"]);
        assert_eq!(structure.rows()[1].bucket(), GenerationBucket::Children);
        assert_eq!(row_ids(&structure.rows()[1]), vec!["3"]);
        assert_eq!(structure.member_count(), 3);
    }

    #[test]
    fn test_empty_buckets_are_skipped() {
        let members = vec![
            Member::new("1", "A", "X", Role::Granddaughter),
            Member::new("2", "B", "X", Role::Grandfather),
        ];
        let structure = FamilyStructure::from_members(&members);

        let buckets: Vec<_> = structure.rows().iter().map(GenerationRow::bucket).collect();
        assert_eq!(
            buckets,
            vec![GenerationBucket::Grandparents, GenerationBucket::Grandchildren]
        );
        assert!(structure.rows().iter().all(|row| !row.is_empty()));
    }

    #[test]
    fn test_no_members_no_rows() {
        let structure = FamilyStructure::from_members(&[]);
        assert!(structure.is_empty());
        assert_eq!(structure.member_count(), 0);
    }

    #[test]
    fn test_every_member_placed_once() {
        let mut members = scenario_a();
        members.push(Member::new("4", "Unknown", "Person", Role::Other));
        members.push(Member::new("5", "Pyotr", "Petrov", Role::Grandfather));

        let structure = FamilyStructure::from_members(&members);
        assert_eq!(structure.member_count(), members.len());
    }
}
