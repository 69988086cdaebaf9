//! Parent to child connector routing.

use indexmap::IndexSet;
use log::{debug, trace};

use kinchart_core::{
    family::{Member, MemberId},
    geometry::Point,
};

use crate::layout::ChartLayout;

/// A drawn link from a parent's card to a child's card.
///
/// The path has three segments: down from the parent's bottom-center to the
/// midline between the two cards, across to the child's column, then down to
/// the child's top-center where the anchor marker sits.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    parent: MemberId,
    child: MemberId,
    path: [Point; 4],
}

impl Connector {
    pub fn parent(&self) -> &MemberId {
        &self.parent
    }

    pub fn child(&self) -> &MemberId {
        &self.child
    }

    /// Path vertices from the parent anchor to the child anchor.
    pub fn path(&self) -> &[Point; 4] {
        &self.path
    }

    /// Position of the anchor marker on the child's card.
    pub fn anchor(&self) -> Point {
        self.path[3]
    }
}

/// Routes one connector for every parent reference whose both ends were laid
/// out.
///
/// Edges are keyed by `(child, parent)` in an insertion-ordered set, so a
/// reference repeated in the input yields a single connector and the output
/// order follows `members`.
pub fn route_connectors(layout: &ChartLayout, members: &[Member]) -> Vec<Connector> {
    let edges: IndexSet<(&MemberId, &MemberId)> = members
        .iter()
        .filter(|member| layout.position(member.id()).is_some())
        .flat_map(|member| {
            [member.father_id(), member.mother_id()]
                .into_iter()
                .flatten()
                .filter(move |parent| layout.position(parent).is_some())
                .map(move |parent| (member.id(), parent))
        })
        .collect();

    let connectors: Vec<Connector> = edges
        .into_iter()
        .filter_map(|(child, parent)| {
            let from = layout.position(parent)?.bottom_center();
            let to = layout.position(child)?.top_center();
            let mid_y = (from.y() + to.y()) / 2.0;

            Some(Connector {
                parent: parent.clone(),
                child: child.clone(),
                path: [from, from.with_y(mid_y), to.with_y(mid_y), to],
            })
        })
        .collect();

    debug!(connectors = connectors.len(); "Connectors routed");
    trace!(connectors:? = connectors; "Connector paths");
    connectors
}
