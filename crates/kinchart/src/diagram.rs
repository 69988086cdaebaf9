//! The laid-out chart handed from the pipeline to the exporters.

use kinchart_core::family::Member;

use crate::{
    layout::{CardPosition, ChartLayout},
    routing::Connector,
    structure::FamilyStructure,
};

/// Generation rows, card positions and connectors of one chart.
///
/// Borrows the members it was built from.
#[derive(Debug, Clone)]
pub struct Diagram<'a> {
    structure: FamilyStructure<'a>,
    layout: ChartLayout,
    connectors: Vec<Connector>,
}

impl<'a> Diagram<'a> {
    pub fn new(
        structure: FamilyStructure<'a>,
        layout: ChartLayout,
        connectors: Vec<Connector>,
    ) -> Self {
        Self {
            structure,
            layout,
            connectors,
        }
    }

    pub fn structure(&self) -> &FamilyStructure<'a> {
        &self.structure
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Every member card with its position, row by row.
    pub fn cards(&self) -> impl Iterator<Item = (&'a Member, &CardPosition)> + '_ {
        self.structure
            .rows()
            .iter()
            .zip(self.layout.rows())
            .flat_map(|(row, row_layout)| row.members().iter().copied().zip(row_layout.cards()))
    }
}
