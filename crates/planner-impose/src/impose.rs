//! Page-to-sheet imposition
//!
//! Pages are consumed in groups of four; each group fills one pair of A4
//! sheet sides (the front and back of a single piece of paper).
//!
//! **Natural (duplex printing):**
//! - Sheet A: [1, 2] (left=1, right=2)
//! - Sheet B: [3, 4] (left=3, right=4)
//!
//! **Reordered (single-sided printing):**
//! - Sheet A: [4, 1] (left=4, right=1)
//! - Sheet B: [2, 3] (left=2, right=3)
//!
//! The reordered layout is the folio ordering of a one-fold signature.
//! Print every sheet single-sided, flip the stack and print again so
//! sheet B lands on the back of sheet A, then cut the stack down the
//! middle and place the right halves on top of the left halves: the
//! pages come out in reading order.

use crate::types::{PAGES_PER_SHEET_PAIR, Sheet, SheetOrder};

/// Append blank slots until the page count is a multiple of four.
pub fn pad_pages<T>(pages: &mut Vec<Option<T>>) {
    while pages.len() % PAGES_PER_SHEET_PAIR != 0 {
        pages.push(None);
    }
}

/// Arrange a padded page sequence onto A4 sheet sides.
///
/// Each group of four pages is laid onto two sheets in the slot order
/// selected by `order`. Groups do not interact; blank slots stay where
/// the sequence put them.
///
/// # Panics
///
/// Panics when the length is not a multiple of four. Run [`pad_pages`]
/// first; imposing a misaligned sequence would scramble the print order
/// of every following sheet.
pub fn impose<T>(mut pages: Vec<Option<T>>, order: SheetOrder) -> Vec<Sheet<T>> {
    assert_eq!(
        pages.len() % PAGES_PER_SHEET_PAIR,
        0,
        "page count must be a multiple of {PAGES_PER_SHEET_PAIR}"
    );

    let mut sheets = Vec::with_capacity(pages.len() / 2);
    for group in pages.chunks_exact_mut(PAGES_PER_SHEET_PAIR) {
        let p0 = group[0].take();
        let p1 = group[1].take();
        let p2 = group[2].take();
        let p3 = group[3].take();
        match order {
            SheetOrder::Natural => {
                sheets.push(Sheet::new(p0, p1));
                sheets.push(Sheet::new(p2, p3));
            }
            SheetOrder::Reordered => {
                sheets.push(Sheet::new(p3, p0));
                sheets.push(Sheet::new(p1, p2));
            }
        }
    }
    sheets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_group_order() {
        let sheets = impose(vec![Some(1), Some(2), Some(3), Some(4)], SheetOrder::Natural);
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0], Sheet::new(Some(1), Some(2)));
        assert_eq!(sheets[1], Sheet::new(Some(3), Some(4)));
    }

    #[test]
    fn test_reordered_group_order() {
        let sheets = impose(
            vec![Some(1), Some(2), Some(3), Some(4)],
            SheetOrder::Reordered,
        );
        assert_eq!(sheets.len(), 2);
        // Folio: the last page goes left of the first, the middle pair
        // lands on the back sheet
        assert_eq!(sheets[0], Sheet::new(Some(4), Some(1)));
        assert_eq!(sheets[1], Sheet::new(Some(2), Some(3)));
    }

    #[test]
    fn test_empty_sequence() {
        let sheets = impose(Vec::<Option<u32>>::new(), SheetOrder::Natural);
        assert!(sheets.is_empty());
    }

    #[test]
    fn test_blank_slots_stay_in_place() {
        let sheets = impose(vec![None, Some("a"), Some("b"), None], SheetOrder::Reordered);
        // p3 and p0 are both blank, so the first sheet comes out empty
        assert_eq!(sheets[0], Sheet::new(None, None));
        assert!(sheets[0].is_blank());
        assert_eq!(sheets[1], Sheet::new(Some("a"), Some("b")));
    }

    #[test]
    #[should_panic(expected = "multiple of 4")]
    fn test_unpadded_sequence_panics() {
        impose(vec![Some(1), Some(2), Some(3)], SheetOrder::Natural);
    }
}
