//! Left-to-right ordering of a generation row.

use log::trace;

use kinchart_core::family::{Member, MemberId};

use crate::{couple::Couple, gender::gender_hint};

/// Orders the members of one bucket for display.
///
/// Couples come first, each as two adjacent cards (left partner then right
/// partner). The remaining members follow, sorted by gender hint (male,
/// female, unknown); the sort is stable so ties keep their input order.
///
/// The result is always a permutation of `members`, even when ids repeat or
/// a couple names an id that is not in the bucket.
pub fn order_generation<'a>(members: &[&'a Member], couples: &[Couple]) -> Vec<&'a Member> {
    let mut used = vec![false; members.len()];
    let mut ordered = Vec::with_capacity(members.len());

    let mut take = |id: &MemberId, ordered: &mut Vec<&'a Member>| {
        let found = members
            .iter()
            .enumerate()
            .find(|(index, member)| !used[*index] && member.id() == id);
        if let Some((index, member)) = found {
            used[index] = true;
            ordered.push(*member);
        }
    };

    for couple in couples {
        take(couple.left(), &mut ordered);
        take(couple.right(), &mut ordered);
    }

    let mut singles: Vec<&'a Member> = members
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(member, _)| *member)
        .collect();
    singles.sort_by_key(|member| gender_hint(member.role()).order_key());
    ordered.extend(singles);

    trace!(order:? = ordered.iter().map(|m| m.id().as_str()).collect::<Vec<_>>(); "Generation order");
    ordered
}
