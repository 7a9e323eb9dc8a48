use super::constants::FILTER_ALL;

/// A card is shown iff the filter is `all` or equals the card's category.
/// A missing `data-filter` matches cards that have no `data-category`.
#[inline]
pub fn card_visible(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(FILTER_ALL) || category == filter
}

/// Visibility for every card under `filter`, in card order.
pub fn visibility<'a>(
    filter: Option<&str>,
    categories: impl IntoIterator<Item = Option<&'a str>>,
) -> Vec<bool> {
    categories
        .into_iter()
        .map(|c| card_visible(filter, c))
        .collect()
}

/// Index of the one active filter button; last click wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active: Option<usize>,
}

impl FilterState {
    pub fn select(&mut self, index: usize) {
        self.active = Some(index);
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
