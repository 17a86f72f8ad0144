//! Navigation pages.

use crate::ids::ProductId;

/// A page of the shop. Each variant carries only what its own prompt needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// Main menu.
    #[default]
    Home,
    /// Filtered and sorted product listing.
    Browse,
    /// Current sort and filter summary.
    SearchOptions,
    /// Choice of filter kind to add.
    AddFilterMenu,
    /// Price limit prompt; `is_max` selects a maximum (`<`) or minimum (`>`).
    PriceFilter { is_max: bool },
    /// Department picker.
    DepartmentFilter,
    /// Name search prompt.
    NameFilter,
    /// Sort tier menu.
    SortMode,
    /// Cart listing.
    Cart,
    /// Cart removal prompt over the entries the cart page listed.
    RemoveCartItem { entries: Vec<ProductId> },
    /// Cash checkout.
    Checkout,
    /// Terminal state.
    Exit,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Browse => "browse",
            Page::SearchOptions => "search-options",
            Page::AddFilterMenu => "add-filter",
            Page::PriceFilter { is_max: true } => "max-price-filter",
            Page::PriceFilter { is_max: false } => "min-price-filter",
            Page::DepartmentFilter => "department-filter",
            Page::NameFilter => "name-filter",
            Page::SortMode => "sort-mode",
            Page::Cart => "cart",
            Page::RemoveCartItem { .. } => "remove-cart-item",
            Page::Checkout => "checkout",
            Page::Exit => "exit",
        }
    }

    /// Whether the session ends on this page.
    pub fn is_exit(&self) -> bool {
        matches!(self, Page::Exit)
    }
}
