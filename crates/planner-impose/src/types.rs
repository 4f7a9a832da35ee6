#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A5 pages consumed by one front/back pair of A4 sheet sides
pub const PAGES_PER_SHEET_PAIR: usize = 4;

/// How pages are laid across sheet sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SheetOrder {
    /// Reading order: pages (1, 2) then (3, 4). For duplex printing.
    #[default]
    Natural,
    /// Folio order: pages (4, 1) then (2, 3). For single-sided printers:
    /// print everything, flip the stack, print again, then cut and stack.
    Reordered,
}

/// One A4 sheet side holding up to two A5 pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet<T> {
    /// Page in the left slot, or None for blank
    pub left: Option<T>,
    /// Page in the right slot, or None for blank
    pub right: Option<T>,
}

impl<T> Sheet<T> {
    pub fn new(left: Option<T>, right: Option<T>) -> Self {
        Self { left, right }
    }

    /// True when both slots are blank
    pub fn is_blank(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
