//! Ordering for the rotating promotional carousel.

/// Anything that can appear in the banner carousel.
pub trait BannerSlot {
    /// Position in the carousel; `None` keeps the item out of it.
    fn banner_order(&self) -> Option<i32>;
}

/// Keep items with a banner position and sort them by it.
///
/// Items sharing a position keep their input order.
pub fn banner_lineup<T: BannerSlot>(items: Vec<T>) -> Vec<T> {
    let mut slotted: Vec<T> = items
        .into_iter()
        .filter(|item| item.banner_order().is_some())
        .collect();
    slotted.sort_by_key(|item| item.banner_order());
    slotted
}
