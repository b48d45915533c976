//! Card slot geometry for each spread layout
//!
//! Layouts are described on a grid of half-card units: a card occupies 2x2
//! units, so a card can sit centered between two others (the apex of a
//! triangle, the top and bottom of the celtic cross).

use ratatui::layout::Rect;
use tarot_core::SpreadLayout;

/// Largest card tile, in terminal cells
pub const CARD_WIDTH: u16 = 24;
pub const CARD_HEIGHT: u16 = 8;

/// Smallest card tile that can still show a name
pub const MIN_CARD_WIDTH: u16 = 8;
pub const MIN_CARD_HEIGHT: u16 = 3;

/// Tile size in a scrolled reading
const SCROLL_CARD_WIDTH: u16 = CARD_WIDTH * 3 / 4;
const SCROLL_CARD_HEIGHT: u16 = 5;

/// Columns between neighbouring tiles
const GAP: u16 = 1;

const SINGLE: &[(u16, u16)] = &[(0, 0)];

const TRIANGLE: &[(u16, u16)] = &[(2, 0), (0, 2), (4, 2)];

// Present, Challenge, Past, Future, Above, Below, then the staff bottom to top
const CELTIC_CROSS: &[(u16, u16)] = &[
    (2, 2),
    (4, 2),
    (0, 2),
    (6, 2),
    (3, 0),
    (3, 4),
    (9, 6),
    (9, 4),
    (9, 2),
    (9, 0),
];

const HORSESHOE: &[(u16, u16)] = &[
    (0, 0),
    (2, 1),
    (4, 2),
    (6, 3),
    (8, 2),
    (10, 1),
    (12, 0),
];

const RELATIONSHIP: &[(u16, u16)] = &[(0, 0), (4, 0), (2, 2), (0, 4), (4, 4)];

/// Half-unit positions of each card for a layout, or `None` when the layout
/// has no fixed shape for `count` cards
fn shape(layout: SpreadLayout, count: usize) -> Option<Vec<(u16, u16)>> {
    let fixed: &[(u16, u16)] = match layout {
        SpreadLayout::Single => SINGLE,
        SpreadLayout::Triangle => TRIANGLE,
        SpreadLayout::CelticCross => CELTIC_CROSS,
        SpreadLayout::Horseshoe => HORSESHOE,
        SpreadLayout::Relationship => RELATIONSHIP,
        SpreadLayout::Horizontal => {
            return Some((0..count as u16).map(|i| (i * 2, 0)).collect());
        }
        SpreadLayout::Grid => return None,
    };

    (count <= fixed.len()).then(|| fixed[..count].to_vec())
}

/// Row-major grid positions that fit `area`
fn grid_shape(count: usize, area: Rect) -> Vec<(u16, u16)> {
    let fit = (area.width / (MIN_CARD_WIDTH.max(CARD_WIDTH * 3 / 4) + GAP)).max(1);
    let columns = fit.min(count.max(1) as u16);

    (0..count as u16)
        .map(|i| ((i % columns) * 2, (i / columns) * 2))
        .collect()
}

/// Compute one slot per card for `count` cards arranged by `layout` inside
/// `area`.
///
/// Slots that do not fit are returned as empty rects so indices stay
/// aligned with the drawn cards. A reading drawn for a different spread
/// than the selected layout falls back to the grid, as does any shape that
/// would hide more cards than the grid.
pub fn card_slots(layout: SpreadLayout, count: usize, area: Rect) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let Some(positions) = shape(layout, count) else {
        return place(grid_shape(count, area), area);
    };

    let slots = place(positions, area);
    let hidden = hidden_count(&slots);
    if hidden == 0 {
        return slots;
    }

    let grid = place(grid_shape(count, area), area);
    if hidden_count(&grid) < hidden {
        tracing::debug!("{:?} layout hides {} cards, using the grid", layout, hidden);
        grid
    } else {
        slots
    }
}

/// Number of cards without a slot
pub fn hidden_count(slots: &[Rect]) -> usize {
    slots.iter().filter(|slot| slot.is_empty()).count()
}

/// Scale half-unit positions into `area`, centered
fn place(positions: Vec<(u16, u16)>, area: Rect) -> Vec<Rect> {
    let units_x = positions.iter().map(|&(x, _)| x).max().unwrap_or(0) + 2;
    let units_y = positions.iter().map(|&(_, y)| y).max().unwrap_or(0) + 2;

    // Card size in cells, shrunk to fit the area but never below the minimum
    let card_w = (area.width.saturating_mul(2) / units_x).clamp(MIN_CARD_WIDTH, CARD_WIDTH);
    let card_h = (area.height.saturating_mul(2) / units_y).clamp(MIN_CARD_HEIGHT, CARD_HEIGHT);

    let total_w = units_x * card_w / 2;
    let total_h = units_y * card_h / 2;
    let origin_x = area.x + area.width.saturating_sub(total_w) / 2;
    let origin_y = area.y + area.height.saturating_sub(total_h) / 2;

    positions
        .into_iter()
        .map(|(x, y)| {
            let slot = Rect::new(
                origin_x + x * card_w / 2,
                origin_y + y * card_h / 2,
                card_w.saturating_sub(GAP),
                card_h,
            );
            fitted(slot, area)
        })
        .collect()
}

fn fitted(slot: Rect, area: Rect) -> Rect {
    if slot.intersection(area) == slot {
        slot
    } else {
        Rect::default()
    }
}

/// Row-major grid of fixed-size tiles for readings too large for their
/// area, shown a window of rows at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollGrid {
    area: Rect,
    count: usize,
    columns: u16,
    tile_width: u16,
    tile_height: u16,
    /// Total rows of the reading
    pub rows: u16,
    /// Rows that fit the area at once
    pub visible_rows: u16,
}

impl ScrollGrid {
    pub fn new(count: usize, area: Rect) -> Self {
        let columns = (area.width / (SCROLL_CARD_WIDTH + GAP))
            .clamp(1, count.clamp(1, usize::from(u16::MAX)) as u16);
        let tile_width = (area.width / columns).clamp(MIN_CARD_WIDTH + GAP, CARD_WIDTH + GAP);
        let tile_height = SCROLL_CARD_HEIGHT.min(area.height).max(MIN_CARD_HEIGHT);
        let rows = u16::try_from(count.div_ceil(usize::from(columns))).unwrap_or(u16::MAX);

        Self {
            area,
            count,
            columns,
            tile_width,
            tile_height,
            rows,
            visible_rows: (area.height / tile_height).max(1),
        }
    }

    /// Row holding card `index`
    pub fn row_of(&self, index: usize) -> u16 {
        u16::try_from(index / usize::from(self.columns)).unwrap_or(u16::MAX)
    }

    /// Largest useful first row
    pub fn max_first_row(&self) -> u16 {
        self.rows.saturating_sub(self.visible_rows)
    }

    /// First row that keeps card `index` in view, moving as little as
    /// possible from `first_row`
    pub fn follow(&self, first_row: u16, index: usize) -> u16 {
        let row = self.row_of(index);
        let first_row = if row < first_row {
            row
        } else if row >= first_row.saturating_add(self.visible_rows) {
            row + 1 - self.visible_rows
        } else {
            first_row
        };
        first_row.min(self.max_first_row())
    }

    /// Indices of the first and one past the last card in view
    pub fn visible_range(&self, first_row: u16) -> (usize, usize) {
        let columns = usize::from(self.columns);
        let first_row = usize::from(first_row.min(self.max_first_row()));
        let start = (first_row * columns).min(self.count);
        let end = ((first_row + usize::from(self.visible_rows)) * columns).min(self.count);
        (start, end)
    }

    /// One slot per card with `first_row` at the top; cards outside the
    /// window get empty rects
    pub fn slots(&self, first_row: u16) -> Vec<Rect> {
        let (start, end) = self.visible_range(first_row);
        let columns = usize::from(self.columns);

        (0..self.count)
            .map(|index| {
                if !(start..end).contains(&index) {
                    return Rect::default();
                }
                let offset = index - start;
                // Both fit in u16: they are bounded by the visible window
                let column = (offset % columns) as u16;
                let row = (offset / columns) as u16;
                let slot = Rect::new(
                    self.area.x + column * self.tile_width,
                    self.area.y + row * self.tile_height,
                    self.tile_width - GAP,
                    self.tile_height,
                );
                fitted(slot, self.area)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlaps(a: Rect, b: Rect) -> bool {
        !a.is_empty() && !b.is_empty() && a.intersects(b)
    }

    fn assert_disjoint(slots: &[Rect]) {
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert!(!overlaps(*a, *b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_celtic_cross_fits_large_area() {
        let area = Rect::new(0, 5, 160, 40);
        let slots = card_slots(SpreadLayout::CelticCross, 10, area);

        assert_eq!(slots.len(), 10);
        assert!(slots.iter().all(|s| !s.is_empty()));
        assert!(slots.iter().all(|s| area.intersection(*s) == *s));
        assert_disjoint(&slots);

        // Above sits over Below, between Present and Challenge
        assert_eq!(slots[4].x, slots[5].x);
        assert!(slots[4].y < slots[0].y && slots[0].y < slots[5].y);
        // Staff is to the right of the cross, built bottom to top
        assert!(slots[6].x > slots[3].x);
        assert!(slots[9].y < slots[6].y);
    }

    #[test]
    fn test_triangle_apex_is_centered() {
        let area = Rect::new(0, 0, 100, 30);
        let slots = card_slots(SpreadLayout::Triangle, 3, area);

        let apex_center = slots[0].x + slots[0].width / 2;
        let base_center = (slots[1].x + slots[2].x + slots[2].width) / 2;
        assert!(apex_center.abs_diff(base_center) <= 1);
        assert!(slots[0].y < slots[1].y);
        assert_eq!(slots[1].y, slots[2].y);
    }

    #[test]
    fn test_horizontal_is_one_row() {
        let slots = card_slots(SpreadLayout::Horizontal, 3, Rect::new(0, 0, 90, 20));
        assert!(slots.iter().all(|s| s.y == slots[0].y));
        assert!(slots[0].x < slots[1].x && slots[1].x < slots[2].x);
        assert_disjoint(&slots);
    }

    #[test]
    fn test_long_horizontal_row_wraps_into_grid() {
        let area = Rect::new(1, 9, 78, 10);
        let slots = card_slots(SpreadLayout::Horizontal, 12, area);

        assert_eq!(slots.len(), 12);
        assert_eq!(hidden_count(&slots), 0);
        assert!(slots.iter().all(|s| area.intersection(*s) == *s));
        assert_disjoint(&slots);
    }

    #[test]
    fn test_horseshoe_dips_in_the_middle() {
        let slots = card_slots(SpreadLayout::Horseshoe, 7, Rect::new(0, 0, 200, 40));
        assert!(slots[3].y > slots[0].y);
        assert_eq!(slots[0].y, slots[6].y);
        assert_disjoint(&slots);
    }

    #[test]
    fn test_grid_wraps_rows() {
        let area = Rect::new(0, 0, 80, 40);
        let slots = card_slots(SpreadLayout::Grid, 9, area);

        assert_eq!(slots.len(), 9);
        assert!(slots.iter().all(|s| !s.is_empty()));
        let rows: std::collections::BTreeSet<_> = slots.iter().map(|s| s.y).collect();
        assert!(rows.len() > 1);
        assert_disjoint(&slots);
    }

    #[test]
    fn test_more_cards_than_shape_falls_back_to_grid() {
        let area = Rect::new(0, 0, 120, 40);
        let slots = card_slots(SpreadLayout::Single, 5, area);
        assert_eq!(slots.len(), 5);
        assert_disjoint(&slots);
    }

    #[test]
    fn test_fewer_cards_than_shape_uses_prefix() {
        let area = Rect::new(0, 0, 160, 40);
        let full = card_slots(SpreadLayout::Relationship, 5, area);
        let partial = card_slots(SpreadLayout::Relationship, 2, area);
        assert_eq!(partial.len(), 2);
        assert_eq!(partial[0].y, partial[1].y);
        assert_eq!(full.len(), 5);
    }

    #[test]
    fn test_tiny_area_hides_cards_instead_of_overflowing() {
        let area = Rect::new(0, 0, 10, 4);
        let slots = card_slots(SpreadLayout::CelticCross, 10, area);
        assert_eq!(slots.len(), 10);
        assert!(slots.iter().all(|s| s.is_empty() || area.intersection(*s) == *s));
    }

    #[test]
    fn test_scroll_grid_window() {
        let area = Rect::new(1, 9, 78, 12);
        let grid = ScrollGrid::new(30, area);

        assert_eq!(grid.rows, 8);
        assert_eq!(grid.visible_rows, 2);
        assert_eq!(grid.max_first_row(), 6);
        assert_eq!(grid.visible_range(0), (0, 8));
        assert_eq!(grid.visible_range(6), (24, 30));

        let slots = grid.slots(6);
        assert_eq!(slots.len(), 30);
        assert_eq!(hidden_count(&slots), 24);
        assert!(slots[24..].iter().all(|s| area.intersection(*s) == *s));
        assert_eq!(slots[24].y, area.y);
        assert_disjoint(&slots);
    }

    #[test]
    fn test_scroll_grid_follows_index() {
        let grid = ScrollGrid::new(30, Rect::new(0, 0, 78, 12));

        assert_eq!(grid.follow(0, 3), 0);
        assert_eq!(grid.follow(0, 29), 6);
        assert_eq!(grid.follow(6, 0), 0);
        // A row already in view does not move the window
        assert_eq!(grid.follow(3, 16), 3);
        assert_eq!(grid.follow(3, 20), 4);
        assert_eq!(grid.follow(40, 0), 0);
    }

    #[test]
    fn test_no_cards() {
        assert!(card_slots(SpreadLayout::Grid, 0, Rect::new(0, 0, 80, 20)).is_empty());
    }
}
