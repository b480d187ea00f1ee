//! Quantity and price normalization for feed descriptors.
//!
//! Both functions return `None` when the descriptor cannot be interpreted.
//! Callers turn that into a hard error; malformed feed rows are never
//! skipped or defaulted.

use log::debug;

/// Quantity sentinel the supplier uses for "more than ten in stock".
pub const OVERSTOCK_SENTINEL: &str = ">10";
/// Stock count reported for [`OVERSTOCK_SENTINEL`].
pub const OVERSTOCK_COUNT: i64 = 100;

/// Converts a quantity descriptor into a stock count.
///
/// - `">10"` -> 100
/// - `"1"` -> 0 (a single unit is treated as out of stock)
/// - anything else is parsed as a signed integer after trimming whitespace
///
/// # Examples
/// ```
/// use watch_stock_sync::reconcile::normalize_quantity;
///
/// assert_eq!(normalize_quantity(">10"), Some(100));
/// assert_eq!(normalize_quantity("1"), Some(0));
/// assert_eq!(normalize_quantity("7"), Some(7));
/// assert_eq!(normalize_quantity("many"), None);
/// ```
pub fn normalize_quantity(descriptor: &str) -> Option<i64> {
    match descriptor {
        OVERSTOCK_SENTINEL => Some(OVERSTOCK_COUNT),
        "1" => Some(0),
        other => {
            let parsed = other.trim().parse::<i64>().ok();
            if parsed.is_none() {
                debug!("Quantity descriptor '{descriptor}' is not an integer");
            }
            parsed
        }
    }
}

/// Converts a free-form price descriptor into whole currency units.
///
/// Everything from the first `.` on is dropped, then every character that is
/// not an ASCII digit. No rounding happens, so `"1.999,50"` yields `1`.
///
/// # Examples
/// ```
/// use watch_stock_sync::reconcile::normalize_price;
///
/// assert_eq!(normalize_price("5'990.00 руб."), Some(5990));
/// assert_eq!(normalize_price("100"), Some(100));
/// ```
pub fn normalize_price(descriptor: &str) -> Option<u64> {
    let integer_part = descriptor.split('.').next().unwrap_or_default();
    let digits: String = integer_part.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        debug!("Price descriptor '{descriptor}' has no digits before the decimal point");
        return None;
    }

    digits.parse::<u64>().ok()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
