//! Couple inference inside one generation bucket.
//!
//! Couples are found from shared children first: two members of the bucket
//! who are named as father and mother of the same child are placed side by
//! side. When the input carries no such evidence, members are paired by the
//! gender suggested by their roles, in input order.

use std::collections::HashSet;

use indexmap::IndexSet;
use log::{debug, trace};

use kinchart_core::family::{Member, MemberId};

use crate::gender::{GenderHint, gender_hint};

/// Two members drawn next to each other in a generation row.
///
/// `left` is the father-side partner (or the male-hinted one in the
/// role-parity fallback) and `right` is the mother-side partner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Couple {
    left: MemberId,
    right: MemberId,
}

impl Couple {
    pub fn new(left: MemberId, right: MemberId) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &MemberId {
        &self.left
    }

    pub fn right(&self) -> &MemberId {
        &self.right
    }
}

/// Infers couples among `bucket`, using `all_members` as evidence.
///
/// Every member appears in at most one returned couple. Candidates are
/// reported in the order the evidence is first found.
pub fn find_couples(bucket: &[&Member], all_members: &[Member]) -> Vec<Couple> {
    let bucket_ids: HashSet<&MemberId> = bucket.iter().map(|member| member.id()).collect();

    let candidates: IndexSet<(&MemberId, &MemberId)> = all_members
        .iter()
        .filter_map(|member| Some((member.father_id()?, member.mother_id()?)))
        .filter(|(father, mother)| bucket_ids.contains(father) && bucket_ids.contains(mother))
        .collect();

    let mut matcher = CoupleMatcher::default();

    if candidates.is_empty() {
        let males = bucket
            .iter()
            .filter(|member| gender_hint(member.role()) == GenderHint::Male);
        let females = bucket
            .iter()
            .filter(|member| gender_hint(member.role()) == GenderHint::Female);

        for (male, female) in males.zip(females) {
            matcher.push(male.id(), female.id());
        }
        debug!(couples = matcher.couples.len(); "Couples paired by role");
    } else {
        for (father, mother) in candidates {
            matcher.push(father, mother);
        }
        debug!(couples = matcher.couples.len(); "Couples found from shared children");
    }

    trace!(couples:? = matcher.couples; "Couple list");
    matcher.couples
}

/// Accumulates couples while keeping each member in at most one of them.
#[derive(Default)]
struct CoupleMatcher<'a> {
    placed: HashSet<&'a MemberId>,
    couples: Vec<Couple>,
}

impl<'a> CoupleMatcher<'a> {
    fn push(&mut self, left: &'a MemberId, right: &'a MemberId) {
        if left == right || self.placed.contains(left) || self.placed.contains(right) {
            trace!(left:% = left, right:% = right; "Skipping overlapping couple");
            return;
        }
        self.placed.insert(left);
        self.placed.insert(right);
        self.couples.push(Couple::new(left.clone(), right.clone()));
    }
}
