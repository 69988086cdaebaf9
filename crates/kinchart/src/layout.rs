//! Page layout of generation rows and member cards.
//!
//! The layout engine stacks the rows of a [`FamilyStructure`] below the
//! header band, centers every row horizontally and shrinks card height and
//! row gap uniformly when the rows would not fit between the header and the
//! footer.
//!
//! ```text
//!  ┌──────────────────────────────┐
//!  │ header                       │ header_height
//!  ├──────────────────────────────┤
//!  │                              │ top_margin
//!  │  ──── Grandparents ────      │ label_height
//!  │      [card] [card]           │ card_height
//!  │                              │ generation_gap
//!  │  ──── Parents ────           │
//!  │      [card] [card]           │
//!  │                              │ bottom_margin
//!  └──────────────────────────────┘
//! ```

use indexmap::IndexMap;
use log::{debug, info, trace, warn};

use kinchart_core::{
    family::MemberId,
    geometry::{Bounds, Point, Size},
};

use crate::{config::LayoutConfig, generation::GenerationBucket, structure::FamilyStructure};

/// Distance from a row's label anchor down to the top of its cards.
const LABEL_TO_CARDS: f32 = 10.0;

/// Placement of one member card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPosition {
    x_center: f32,
    y_top: f32,
    y_bottom: f32,
    y_center: f32,
}

impl CardPosition {
    pub fn new(x_center: f32, y_top: f32, height: f32) -> Self {
        Self {
            x_center,
            y_top,
            y_bottom: y_top + height,
            y_center: y_top + height / 2.0,
        }
    }

    pub fn x_center(&self) -> f32 {
        self.x_center
    }

    pub fn y_top(&self) -> f32 {
        self.y_top
    }

    pub fn y_bottom(&self) -> f32 {
        self.y_bottom
    }

    pub fn y_center(&self) -> f32 {
        self.y_center
    }

    /// Top-center anchor, where incoming connectors end.
    pub fn top_center(&self) -> Point {
        Point::new(self.x_center, self.y_top)
    }

    /// Bottom-center anchor, where outgoing connectors start.
    pub fn bottom_center(&self) -> Point {
        Point::new(self.x_center, self.y_bottom)
    }

    /// Card rectangle for a card of the given width.
    pub fn bounds(&self, width: f32) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(self.x_center - width / 2.0, self.y_top),
            Size::new(width, self.y_bottom - self.y_top),
        )
    }
}

/// Placement of one generation row.
#[derive(Debug, Clone)]
pub struct RowLayout {
    bucket: GenerationBucket,
    label_anchor: Point,
    cards: Vec<CardPosition>,
}

impl RowLayout {
    pub fn bucket(&self) -> GenerationBucket {
        self.bucket
    }

    /// Center of the row label line.
    pub fn label_anchor(&self) -> Point {
        self.label_anchor
    }

    /// Card positions, in the same order as the row's members.
    pub fn cards(&self) -> &[CardPosition] {
        &self.cards
    }
}

/// Result of laying out one chart.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    page: Size,
    header_height: f32,
    card_size: Size,
    scale: f32,
    rows: Vec<RowLayout>,
    positions: IndexMap<MemberId, CardPosition>,
}

impl ChartLayout {
    /// Page dimensions the layout was computed for.
    pub fn page(&self) -> Size {
        self.page
    }

    /// Height of the header band above the first row.
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Card size after scaling.
    pub fn card_size(&self) -> Size {
        self.card_size
    }

    /// Vertical shrink factor, `1.0` when the chart fits unscaled.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn rows(&self) -> &[RowLayout] {
        &self.rows
    }

    /// Card positions by member id, in layout order.
    pub fn positions(&self) -> &IndexMap<MemberId, CardPosition> {
        &self.positions
    }

    pub fn position(&self, id: &MemberId) -> Option<&CardPosition> {
        self.positions.get(id)
    }
}

/// Computes card positions for a [`FamilyStructure`].
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Lays out `structure` on a page of size `page`.
    ///
    /// When the rows are taller than the space between header and footer,
    /// card height and generation gap are multiplied by
    /// `available / naive_height` and truncated to whole points. Card width
    /// and label height are never scaled, so a heavily scaled chart may
    /// still reach into the bottom margin or past the page. Rows wider than
    /// the page are laid out anyway.
    pub fn calculate(&self, structure: &FamilyStructure<'_>, page: Size) -> ChartLayout {
        let cfg = &self.config;
        let row_count = structure.rows().len();

        let (card_height, generation_gap, scale) = self.vertical_metrics(row_count, page.height());
        let card_size = Size::new(cfg.card_width(), card_height);

        let mut rows = Vec::with_capacity(row_count);
        let mut positions = IndexMap::with_capacity(structure.member_count());
        let mut cursor = cfg.header_height() + cfg.top_margin();

        for row in structure.rows() {
            let cards_top = cursor + cfg.label_height();
            let label_anchor = Point::new(page.width() / 2.0, cards_top - LABEL_TO_CARDS);

            let count = row.len() as f32;
            let row_width = count * cfg.card_width() + (count - 1.0) * cfg.card_gap();
            if row_width > page.width() {
                warn!(
                    bucket = row.bucket().key(),
                    row_width,
                    page_width = page.width();
                    "Generation row is wider than the page"
                );
            }
            let start_x = (page.width() - row_width) / 2.0;

            let cards: Vec<CardPosition> = row
                .members()
                .iter()
                .enumerate()
                .map(|(index, member)| {
                    let x_center = start_x
                        + index as f32 * (cfg.card_width() + cfg.card_gap())
                        + cfg.card_width() / 2.0;
                    let position = CardPosition::new(x_center, cards_top, card_height);
                    positions.insert(member.id().clone(), position);
                    position
                })
                .collect();

            debug!(
                bucket = row.bucket().key(),
                cards = cards.len(),
                y_top = cards_top;
                "Row laid out"
            );

            rows.push(RowLayout {
                bucket: row.bucket(),
                label_anchor,
                cards,
            });
            cursor = cards_top + card_height + generation_gap;
        }

        let content_bottom = cursor - generation_gap;
        if !rows.is_empty() && content_bottom > page.height() {
            warn!(
                content_bottom,
                page_height = page.height();
                "Cards extend below the page"
            );
        }

        info!(rows = rows.len(), cards = positions.len(), scale; "Layout calculated");
        trace!(positions:? = positions; "Card positions");

        ChartLayout {
            page,
            header_height: cfg.header_height(),
            card_size,
            scale,
            rows,
            positions,
        }
    }

    /// Returns card height, generation gap and scale factor for `row_count`
    /// rows on a page of `page_height`.
    fn vertical_metrics(&self, row_count: usize, page_height: f32) -> (f32, f32, f32) {
        let cfg = &self.config;
        let unscaled = (cfg.card_height(), cfg.generation_gap(), 1.0);
        if row_count == 0 {
            return unscaled;
        }

        let rows = row_count as f32;
        let available =
            page_height - cfg.header_height() - cfg.top_margin() - cfg.bottom_margin();
        let naive = rows * (cfg.card_height() + cfg.label_height())
            + (rows - 1.0) * cfg.generation_gap();

        if naive <= available {
            return unscaled;
        }

        // Label height stays unscaled, so the scaled rows can still run past
        // `available` by up to `rows * label_height * (1 - scale)`.
        let scale = (available / naive).max(0.0);
        debug!(naive, available, scale; "Scaling rows to fit the page");
        (
            (cfg.card_height() * scale).floor(),
            (cfg.generation_gap() * scale).floor(),
            scale,
        )
    }
}
