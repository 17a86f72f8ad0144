//! The shop's page state machine.
//!
//! [`NavigationEngine::step`] is the single transition routine: it renders the
//! current page, reads the shopper's reply and returns the next page. Invalid
//! replies print [`INVALID_CHOICE`] and return the page unchanged.

use std::io;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::cart::CartLedger;
use crate::catalog::Catalog;
use crate::checkout;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::navigation::{parse_choice, Console, Page};
use crate::search::{CatalogView, Filter, FilterSet, SortKey, SortSpec, DEFAULT_PAGE_SIZE};

/// Printed on any unparseable or out-of-range reply.
pub const INVALID_CHOICE: &str = "Sorry, I don't understand.";
/// Printed when a session starts.
pub const WELCOME: &str = "Welcome to the shop! Please take a look around.";
/// Printed when a session ends.
pub const FAREWELL: &str = "Thank you for using our shop!";

const HOME_MENU: &str = "Choose an option:
1 - Browse Products
2 - View Cart
3 - Exit
> ";

const BROWSE_MENU: &str = "Choose an option:
1 - Search
2 - Add to cart
3 - Go Back
> ";

const SEARCH_MENU: &str = "Choose an option:
1 - Change sorting mode
2 - Apply filter
3 - Remove filter
4 - Go Back
> ";

const ADD_FILTER_MENU: &str = "Filter by what?
1 - Price (Maximum)
2 - Price (Minimum)
3 - Department
4 - Name
5 - Go Back
> ";

const SORT_MENU: &str = "1 - Reset sort
2 - Sort by name
3 - Sort by price
4 - Sort by department
5 - Go back
> ";

const CART_MENU: &str = "What would you like to do?
1 - Check out
2 - Remove an item
3 - Go back
> ";

/// Outcome of reading a menu selection.
enum Choice {
    Picked(usize),
    Invalid,
    Closed,
}

/// Drives a shopping session over a read-only catalog.
///
/// The engine owns the session state (active filters, sort and cart) and
/// mutates it only from page handlers.
pub struct NavigationEngine<'a, C> {
    catalog: &'a Catalog,
    console: C,
    filters: FilterSet,
    sort: SortSpec,
    cart: CartLedger,
    page_size: usize,
    clock: fn() -> NaiveDateTime,
}

impl<'a, C: Console> NavigationEngine<'a, C> {
    /// Create an engine with no filters, no sort and an empty cart.
    pub fn new(catalog: &'a Catalog, console: C) -> Self {
        Self {
            catalog,
            console,
            filters: FilterSet::new(),
            sort: SortSpec::unsorted(),
            cart: CartLedger::new(),
            page_size: DEFAULT_PAGE_SIZE,
            clock: local_now,
        }
    }

    /// Set how many products the browse page lists. Values below 1 are
    /// raised to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the clock used to stamp receipts.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Active filters.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Active sort tiers.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// The shopper's cart.
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// The console the session runs against.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consume the engine, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run from [`Page::Home`] until the shopper exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        self.say_line(WELCOME)?;
        let mut page = Page::Home;
        while !page.is_exit() {
            page = self.step(page)?;
        }
        self.say_line(FAREWELL)?;
        info!(items_left_in_cart = self.cart.total_count(), "session ended");
        Ok(())
    }

    /// Show one page, read the reply and return the next page.
    pub fn step(&mut self, page: Page) -> io::Result<Page> {
        debug!(page = page.name(), "showing page");
        match page {
            Page::Home => self.home(),
            Page::Browse => self.browse(),
            Page::SearchOptions => self.search_options(),
            Page::AddFilterMenu => self.add_filter_menu(),
            Page::PriceFilter { is_max } => self.price_filter(is_max),
            Page::DepartmentFilter => self.department_filter(),
            Page::NameFilter => self.name_filter(),
            Page::SortMode => self.sort_mode(),
            Page::Cart => self.cart_page(),
            Page::RemoveCartItem { entries } => self.remove_cart_item(&entries),
            Page::Checkout => self.checkout(),
            Page::Exit => Ok(Page::Exit),
        }
    }

    fn home(&mut self) -> io::Result<Page> {
        self.say(HOME_MENU)?;
        Ok(match self.read_choice(3)? {
            Choice::Picked(1) => Page::Browse,
            Choice::Picked(2) => Page::Cart,
            Choice::Picked(_) | Choice::Closed => Page::Exit,
            Choice::Invalid => Page::Home,
        })
    }

    fn browse(&mut self) -> io::Result<Page> {
        let catalog = self.catalog;
        let view = CatalogView::build(catalog, &self.filters, &self.sort, self.page_size);

        let mut text = format!(
            "There are {} products available. Showing {} based on your filters.\n",
            view.catalog_size,
            view.shown_label()
        );
        for (i, product) in view.items.iter().enumerate() {
            text.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                i + 1,
                product.department,
                product.name,
                product.price
            ));
        }
        text.push_str(BROWSE_MENU);
        self.say(text)?;

        match self.read_choice(3)? {
            Choice::Picked(1) => Ok(Page::SearchOptions),
            Choice::Picked(2) => self.add_to_cart(&view),
            Choice::Picked(_) => Ok(Page::Home),
            Choice::Invalid => Ok(Page::Browse),
            Choice::Closed => Ok(Page::Exit),
        }
    }

    /// Add one of the listed products; the index refers to `view` only.
    fn add_to_cart(&mut self, view: &CatalogView<'a>) -> io::Result<Page> {
        if view.is_empty() {
            debug!(error = %StoreError::EmptyCollection("add to cart"), "add to cart skipped");
            self.say_line("There's nothing to add to cart!")?;
            return Ok(Page::Browse);
        }

        self.say("Which product would you like to add to cart?\n> ")?;
        match self.read_choice(view.len())? {
            Choice::Picked(n) => {
                if let Some(product) = view.get(n - 1) {
                    self.cart.add_one(product);
                    self.cart_status(true)?;
                }
                Ok(Page::Browse)
            }
            Choice::Invalid => Ok(Page::Browse),
            Choice::Closed => Ok(Page::Exit),
        }
    }

    fn search_options(&mut self) -> io::Result<Page> {
        let sort_line = if self.sort.is_default() {
            "There is no sort applied.".to_string()
        } else {
            format!("You are sorting by {}.", self.sort)
        };
        let count = self.filters.len();
        self.say(format!(
            "{}\nYou have {} filter{} applied.\n{}",
            sort_line,
            count,
            plural(count),
            SEARCH_MENU
        ))?;

        match self.read_choice(4)? {
            Choice::Picked(1) => Ok(Page::SortMode),
            Choice::Picked(2) => Ok(Page::AddFilterMenu),
            Choice::Picked(3) => self.remove_filter(),
            Choice::Picked(_) => Ok(Page::Browse),
            Choice::Invalid => Ok(Page::SearchOptions),
            Choice::Closed => Ok(Page::Exit),
        }
    }

    /// Remove one active filter. Always returns to the search options.
    fn remove_filter(&mut self) -> io::Result<Page> {
        if self.filters.is_empty() {
            debug!(error = %StoreError::EmptyCollection("remove"), "filter removal skipped");
            self.say_line("There's nothing to remove!")?;
            return Ok(Page::SearchOptions);
        }

        let mut text = String::from("Which filter would you like to remove?\n");
        for (i, filter) in self.filters.iter().enumerate() {
            text.push_str(&format!("{} - {}\n", i + 1, filter));
        }
        text.push_str("> ");
        self.say(text)?;

        match self.read_choice(self.filters.len())? {
            Choice::Picked(n) => {
                if let Some(removed) = self.filters.remove(n - 1) {
                    debug!(filter = %removed, "filter removed");
                }
                Ok(Page::SearchOptions)
            }
            Choice::Invalid => Ok(Page::SearchOptions),
            Choice::Closed => Ok(Page::Exit),
        }
    }

    fn add_filter_menu(&mut self) -> io::Result<Page> {
        self.say(ADD_FILTER_MENU)?;
        Ok(match self.read_choice(5)? {
            Choice::Picked(1) => Page::PriceFilter { is_max: true },
            Choice::Picked(2) => Page::PriceFilter { is_max: false },
            Choice::Picked(3) => Page::DepartmentFilter,
            Choice::Picked(4) => Page::NameFilter,
            Choice::Picked(_) => Page::SearchOptions,
            Choice::Invalid => Page::AddFilterMenu,
            Choice::Closed => Page::Exit,
        })
    }

    fn price_filter(&mut self, is_max: bool) -> io::Result<Page> {
        self.say(format!(
            "What's the {} price?\n> ",
            if is_max { "maximum" } else { "minimum" }
        ))?;
        let Some(token) = self.read_text()? else {
            return Ok(Page::Exit);
        };

        match token.parse::<Money>() {
            Ok(limit) => {
                let filter = if is_max {
                    Filter::max_price(limit)
                } else {
                    Filter::min_price(limit)
                };
                self.add_filter(filter);
                Ok(Page::AddFilterMenu)
            }
            Err(err) => {
                debug!(error = %err, "rejected price limit");
                self.say_line(INVALID_CHOICE)?;
                Ok(Page::PriceFilter { is_max })
            }
        }
    }

    fn department_filter(&mut self) -> io::Result<Page> {
        let catalog = self.catalog;
        let departments = catalog.departments();
        if departments.is_empty() {
            debug!(error = %StoreError::EmptyCollection("filter by"), "no departments");
            self.say_line("There are no departments to choose from!")?;
            return Ok(Page::AddFilterMenu);
        }

        let mut text = String::from("Which department are you looking at?\n");
        for (i, department) in departments.iter().enumerate() {
            text.push_str(&format!("{} - {}\n", i + 1, department));
        }
        text.push_str("> ");
        self.say(text)?;

        match self.read_choice(departments.len())? {
            Choice::Picked(n) => {
                self.add_filter(Filter::department(departments[n - 1]));
                Ok(Page::AddFilterMenu)
            }
            Choice::Invalid => Ok(Page::DepartmentFilter),
            Choice::Closed => Ok(Page::Exit),
        }
    }

    fn name_filter(&mut self) -> io::Result<Page> {
        self.say("What are you looking for?\n> ")?;
        let Some(token) = self.read_text()? else {
            return Ok(Page::Exit);
        };
        self.add_filter(Filter::name_contains(&token));
        Ok(Page::AddFilterMenu)
    }

    /// Stays on this page after every change so tiers can be chained.
    fn sort_mode(&mut self) -> io::Result<Page> {
        self.say(SORT_MENU)?;
        let key = match self.read_choice(5)? {
            Choice::Picked(1) => {
                self.sort = SortSpec::unsorted();
                debug!("sort reset");
                return Ok(Page::SortMode);
            }
            Choice::Picked(2) => SortKey::Name,
            Choice::Picked(3) => SortKey::Price,
            Choice::Picked(4) => SortKey::Department,
            Choice::Picked(_) => return Ok(Page::SearchOptions),
            Choice::Invalid => return Ok(Page::SortMode),
            Choice::Closed => return Ok(Page::Exit),
        };
        self.sort = self.sort.then_by(key);
        debug!(sort = %self.sort, "sort changed");
        Ok(Page::SortMode)
    }

    fn cart_page(&mut self) -> io::Result<Page> {
        self.cart_status(false)?;

        let entries = self.cart.entries(&self.sort);
        let mut text = String::new();
        for (i, item) in entries.iter().enumerate() {
            text.push_str(&format!(
                "{} - {}x {} {}\n",
                i + 1,
                item.quantity,
                item.product.price.display_amount(),
                item.product.name
            ));
        }
        let snapshot: Vec<ProductId> = entries.iter().map(|i| i.product.id.clone()).collect();
        text.push_str(CART_MENU);
        self.say(text)?;

        Ok(match self.read_choice(3)? {
            Choice::Picked(1) => Page::Checkout,
            Choice::Picked(2) => Page::RemoveCartItem { entries: snapshot },
            Choice::Picked(_) => Page::Home,
            Choice::Invalid => Page::Cart,
            Choice::Closed => Page::Exit,
        })
    }

    /// Remove one unit of an entry listed by the cart page.
    fn remove_cart_item(&mut self, entries: &[ProductId]) -> io::Result<Page> {
        self.say("Which item to remove?\n> ")?;
        match self.read_choice(entries.len())? {
            Choice::Picked(n) => {
                self.cart.remove_one_at(n - 1, entries);
            }
            Choice::Invalid => {}
            Choice::Closed => return Ok(Page::Exit),
        }
        self.cart_status(true)?;
        Ok(Page::Cart)
    }

    fn checkout(&mut self) -> io::Result<Page> {
        let total = self.cart.total_price();
        self.say(format!(
            "Your total will be {}.\nHow much cash do you have?\n> ",
            total.display_amount()
        ))?;
        let Some(cash) = self.read_text()? else {
            return Ok(Page::Exit);
        };

        match checkout::process(&self.cart, &cash, (self.clock)()) {
            Ok(outcome) => {
                self.say(format!(
                    "Your change is {}.\n",
                    outcome.change.display_amount()
                ))?;
                self.say(outcome.receipt.to_string())?;
                self.say_line("Thank you for shopping with us!")?;
                info!(
                    total = %outcome.receipt.total,
                    items = self.cart.total_count(),
                    products = self.cart.unique_item_count(),
                    "checkout completed"
                );
                self.cart.clear();
                Ok(Page::Home)
            }
            Err(err @ StoreError::InsufficientFunds { .. }) => {
                debug!(error = %err, "checkout rejected");
                self.say_line("You don't have enough money!")?;
                Ok(Page::Cart)
            }
            Err(err) => {
                debug!(error = %err, "checkout rejected");
                self.say_line(INVALID_CHOICE)?;
                Ok(Page::Cart)
            }
        }
    }

    fn add_filter(&mut self, filter: Filter) {
        debug!(filter = %filter, "filter added");
        self.filters.add(filter);
    }

    fn cart_status(&mut self, updated: bool) -> io::Result<()> {
        let line = cart_status_line(self.cart.total_count(), updated);
        self.say_line(&line)
    }

    fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        self.console.write(text.as_ref())
    }

    fn say_line(&mut self, text: &str) -> io::Result<()> {
        self.console.write(text)?;
        self.console.write("\n")
    }

    fn read_text(&mut self) -> io::Result<Option<String>> {
        let token = self.console.read_token()?;
        if token.is_none() {
            info!("input closed, leaving the shop");
        }
        Ok(token)
    }

    /// Read a selection between 1 and `max`, printing [`INVALID_CHOICE`] on
    /// a bad reply.
    fn read_choice(&mut self, max: usize) -> io::Result<Choice> {
        let Some(token) = self.read_text()? else {
            return Ok(Choice::Closed);
        };
        match parse_choice(&token, max) {
            Ok(n) => Ok(Choice::Picked(n)),
            Err(err) => {
                debug!(error = %err, "rejected selection");
                self.say_line(INVALID_CHOICE)?;
                Ok(Choice::Invalid)
            }
        }
    }
}

/// Sentence describing the cart size, e.g. `There are now 3 items in your cart.`
fn cart_status_line(count: u32, updated: bool) -> String {
    format!(
        "There {}{} {} item{} in your cart.",
        if count == 1 { "is" } else { "are" },
        if updated { " now" } else { "" },
        count,
        plural(count as usize)
    )
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
