//! Splitting update lists into request-sized batches.

use std::slice::Chunks;

/// Splits `items` into consecutive chunks of `size` elements.
///
/// Every chunk except the last holds exactly `size` items. An empty slice
/// yields no chunks. Each marketplace endpoint has its own limit; staying
/// under it is up to the caller.
///
/// # Panics
/// Panics if `size` is zero.
///
/// # Examples
/// ```
/// use watch_stock_sync::batch::divide;
///
/// let batches: Vec<&[i32]> = divide(&[1, 2, 3, 4, 5], 2).collect();
/// assert_eq!(batches, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
/// ```
pub fn divide<T>(items: &[T], size: usize) -> Chunks<'_, T> {
    assert!(size > 0, "batch size must be greater than zero");
    items.chunks(size)
}

/// Per-request limits for the two bulk update endpoints of a marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSizes {
    pub stocks: usize,
    pub prices: usize,
}

impl BatchSizes {
    pub const YANDEX_MARKET: BatchSizes = BatchSizes {
        stocks: 2000,
        prices: 500,
    };

    pub const OZON_SELLER: BatchSizes = BatchSizes {
        stocks: 100,
        prices: 1000,
    };
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
