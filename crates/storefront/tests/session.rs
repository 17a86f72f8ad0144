//! Scripted shopping sessions driven end to end through the page engine.

use std::io::Cursor;

use chrono::{NaiveDate, NaiveDateTime};
use storefront::navigation::{FAREWELL, INVALID_CHOICE, WELCOME};
use storefront::prelude::*;

type ScriptedEngine<'a> = NavigationEngine<'a, LineConsole<Cursor<String>, Vec<u8>>>;

fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .and_then(|d| d.and_hms_opt(15, 4, 0))
        .unwrap()
}

fn catalog() -> Catalog {
    let source = "\
BK1|Rust Book|15.00|Books
BK2|Atlas|25.00|Books
TY1|Yo-yo|10.00|Toys
BK3|Cook Book|20.00|Books
TY2|Kite|7.50|Toys
GM1|Chess Set|30.00|Games
GM2|Card Deck|5.00|Games
";
    Catalog::from_reader(Cursor::new(source)).unwrap()
}

fn engine<'a>(catalog: &'a Catalog, script: &[&str]) -> ScriptedEngine<'a> {
    let mut input = script.join("\n");
    input.push('\n');
    NavigationEngine::new(catalog, LineConsole::new(Cursor::new(input), Vec::new()))
        .with_clock(fixed_clock)
}

fn run(catalog: &Catalog, script: &[&str]) -> (String, CartLedger) {
    let mut engine = engine(catalog, script);
    engine.run().unwrap();
    let cart = engine.cart().clone();
    let output = String::from_utf8(engine.into_console().into_output()).unwrap();
    (output, cart)
}

/// The product lines listed by the last browse page in `output`.
fn last_listing(output: &str) -> Vec<String> {
    let start = output.rfind("based on your filters.\n").expect("no browse page shown");
    output[start..]
        .lines()
        .skip(1)
        .take_while(|l| !l.starts_with("Choose an option:"))
        .map(str::to_string)
        .collect()
}

#[test]
fn welcome_and_farewell() {
    let (output, _) = run(&catalog(), &["3"]);
    assert!(output.starts_with(WELCOME));
    assert!(output.trim_end().ends_with(FAREWELL));
}

#[test]
fn browse_truncates_to_five() {
    let (output, _) = run(&catalog(), &["1", "3", "3"]);
    assert!(output.contains("There are 7 products available. Showing 5/7 based on your filters."));
    assert_eq!(
        last_listing(&output),
        vec![
            "1\tBooks\tRust Book\t$15.00",
            "2\tBooks\tAtlas\t$25.00",
            "3\tToys\tYo-yo\t$10.00",
            "4\tBooks\tCook Book\t$20.00",
            "5\tToys\tKite\t$7.50",
        ]
    );
}

#[test]
fn filters_combine_with_and() {
    // Browse > Search > Apply filter > max price 20 > department Books > back > back.
    let script = ["1", "1", "2", "1", "20", "3", "1", "5", "4", "3", "3"];
    let (output, _) = run(&catalog(), &script);
    assert!(output.contains("Showing 1 based on your filters."));
    assert_eq!(last_listing(&output), vec!["1\tBooks\tRust Book\t$15.00"]);
}

#[test]
fn price_filters_are_strict() {
    // Between 19.99 and 20 only the item priced exactly 20 could qualify.
    let script = ["1", "1", "2", "1", "20.00", "2", "19.99", "5", "4", "3", "3"];
    let (output, _) = run(&catalog(), &script);
    assert!(output.contains("Showing 0 based on your filters."));
    assert!(last_listing(&output).is_empty());

    let script = ["1", "1", "2", "2", "20", "5", "4", "3", "3"];
    let (output, _) = run(&catalog(), &script);
    assert_eq!(
        last_listing(&output),
        vec!["1\tBooks\tAtlas\t$25.00", "2\tGames\tChess Set\t$30.00"]
    );
}

#[test]
fn invalid_price_reprompts() {
    let script = ["1", "1", "2", "1", "twenty", "20", "5", "4", "3", "3"];
    let (output, _) = run(&catalog(), &script);
    assert!(output.contains(&format!("What's the maximum price?\n> {}\nWhat's the maximum price?", INVALID_CHOICE)));
    assert!(output.contains("You have 1 filter applied."));
}

#[test]
fn name_filter_and_removal() {
    // Add "BOOK" filter, check it, then remove it again.
    let script = ["1", "1", "2", "4", "BOOK", "5", "3", "1", "4", "3", "3"];
    let (output, _) = run(&catalog(), &script);
    assert!(output.contains("Which filter would you like to remove?\n1 - Contains \"book\"\n> "));
    assert!(output.contains("You have 1 filter applied."));
    assert!(output.contains("You have 0 filters applied."));
    assert!(output.contains("Showing 5/7 based on your filters."));
}

#[test]
fn removing_with_bad_index_keeps_filter() {
    let script = ["1", "1", "2", "3", "2", "5", "3", "9", "4", "3", "3"];
    let (output, _) = run(&catalog(), &script);
    assert!(output.contains("1 - In Toys\n> Sorry, I don't understand."));
    assert!(output.contains("Showing 2 based on your filters."));
}

#[test]
fn sort_tiers_compose_and_reset() {
    // Sort by department then price.
    let script = ["1", "1", "1", "4", "3", "5", "4", "3", "3"];
    let (output, _) = run(&catalog(), &script);
    assert!(output.contains("You are sorting by Department, then by Price."));
    assert_eq!(
        last_listing(&output),
        vec![
            "1\tBooks\tRust Book\t$15.00",
            "2\tBooks\tCook Book\t$20.00",
            "3\tBooks\tAtlas\t$25.00",
            "4\tGames\tCard Deck\t$5.00",
            "5\tGames\tChess Set\t$30.00",
        ]
    );

    // Name then price, then reset and price only.
    let script = ["1", "1", "1", "2", "3", "1", "3", "5", "4", "3", "3"];
    let (output, _) = run(&catalog(), &script);
    assert!(output.contains("You are sorting by Price."));
    assert_eq!(
        last_listing(&output),
        vec![
            "1\tGames\tCard Deck\t$5.00",
            "2\tToys\tKite\t$7.50",
            "3\tToys\tYo-yo\t$10.00",
            "4\tBooks\tRust Book\t$15.00",
            "5\tBooks\tCook Book\t$20.00",
        ]
    );
}

#[test]
fn no_sort_is_reported() {
    let (output, _) = run(&catalog(), &["1", "1", "4", "3", "3"]);
    assert!(output.contains("There is no sort applied.\nYou have 0 filters applied."));
}

#[test]
fn add_to_cart_and_view_cart() {
    // Add Atlas twice and Kite once, then view the cart sorted by name.
    let script = [
        "1", "2", "2", "2", "2", "2", "5", "1", "1", "2", "5", "4", "3", "2", "3", "3",
    ];
    let (output, cart) = run(&catalog(), &script);
    assert!(output.contains("There is now 1 item in your cart."));
    assert!(output.contains("There are now 3 items in your cart."));
    assert!(output.contains("There are 3 items in your cart.\n1 - 2x 25.00 Atlas\n2 - 1x 7.50 Kite\n"));
    assert_eq!(cart.total_count(), 3);
}

#[test]
fn add_to_cart_rejects_hidden_products() {
    // Six is beyond the five listed products.
    let (output, cart) = run(&catalog(), &["1", "2", "6", "3", "3"]);
    assert!(output.contains(&format!("Which product would you like to add to cart?\n> {}", INVALID_CHOICE)));
    assert!(cart.is_empty());
}

#[test]
fn add_to_cart_from_empty_results() {
    // Filter on a name that matches nothing, then try to add.
    let script = ["1", "1", "2", "4", "zzz", "5", "4", "2", "3", "3"];
    let (output, cart) = run(&catalog(), &script);
    assert!(output.contains("There's nothing to add to cart!"));
    assert!(cart.is_empty());
}

#[test]
fn remove_cart_item_decrements_then_deletes() {
    let script = [
        "1", "2", "1", "2", "1", "3", // Rust Book twice
        "2", "2", "1", // remove one
        "2", "1", // remove the last one
        "2", "1", // nothing left to remove
        "3", "3",
    ];
    let (output, cart) = run(&catalog(), &script);
    assert!(output.contains("There are now 2 items in your cart."));
    assert!(output.contains("There is now 1 item in your cart."));
    assert!(output.contains("There are now 0 items in your cart."));
    assert!(output.contains(&format!("Which item to remove?\n> {}\nThere are now 0 items", INVALID_CHOICE)));
    assert!(cart.is_empty());
}

#[test]
fn checkout_with_exact_cash() {
    // Kite (7.50) + Card Deck (5.00) = 12.50.
    let catalog = catalog();
    let script = [
        "1", "1", "1", "3", "5", "4", // sort by price: Card Deck, Kite, ...
        "2", "1", "2", "2", "3", // add both
        "2", "1", "12.50", "3",
    ];
    let mut engine = engine(&catalog, &script);
    engine.run().unwrap();
    assert!(engine.cart().is_empty());
    let output = String::from_utf8(engine.into_console().into_output()).unwrap();
    assert!(output.contains("Your total will be 12.50."));
    assert!(output.contains("Your change is 0.00."));
    assert!(output.contains(
        "RECEIPT:\nFri Oct 16, 2026 @ 03:04 PM\n  5.00 1x GM2 Card Deck\n  7.50 1x TY2 Kite\nTOTAL: $12.50\nPAID: $12.50\nCHANGE: $0.00\n"
    ));
    assert!(output.contains("Thank you for shopping with us!"));
}

#[test]
fn checkout_short_by_a_cent_returns_to_cart() {
    let script = [
        "1", "1", "1", "3", "5", "4", "2", "1", "2", "2", "3",
        "2", "1", "12.49", // rejected
        "3", "3",
    ];
    let (output, cart) = run(&catalog(), &script);
    assert!(output.contains("You don't have enough money!\nThere are 2 items in your cart."));
    assert!(!output.contains("RECEIPT:"));
    assert_eq!(cart.total_count(), 2);
    assert_eq!(cart.total_price(), Money::from_cents(1250));
}

#[test]
fn checkout_with_garbage_cash_returns_to_cart() {
    let script = ["1", "2", "1", "3", "2", "1", "plenty", "3", "3"];
    let (output, cart) = run(&catalog(), &script);
    assert!(output.contains(&format!("How much cash do you have?\n> {}\nThere is 1 item", INVALID_CHOICE)));
    assert_eq!(cart.total_count(), 1);
}

#[test]
fn invalid_home_choice_changes_nothing() {
    let (output, cart) = run(&catalog(), &["0", "abc", "4", "3"]);
    assert_eq!(output.matches(INVALID_CHOICE).count(), 3);
    assert_eq!(output.matches("1 - Browse Products").count(), 4);
    assert!(cart.is_empty());
}

#[test]
fn non_utf8_reply_is_an_invalid_choice() {
    let catalog = catalog();
    let console = LineConsole::new(Cursor::new(b"\xff\xfe\n3\n".to_vec()), Vec::new());
    let mut engine = NavigationEngine::new(&catalog, console).with_clock(fixed_clock);
    engine.run().unwrap();
    let output = String::from_utf8(engine.into_console().into_output()).unwrap();
    assert!(output.contains(&format!("3 - Exit\n> {}\n", INVALID_CHOICE)));
    assert!(output.trim_end().ends_with(FAREWELL));
}

#[test]
fn huge_catalog_price_is_skipped_and_checkout_still_works() {
    let source = "A|Yacht|1e17|Boats\nB|Dinghy|900.00|Boats\n";
    let catalog = Catalog::from_reader(Cursor::new(source)).unwrap();
    // Add the dinghy twice, then pay for it.
    let (output, cart) = run(&catalog, &["1", "2", "1", "2", "1", "3", "2", "1", "1800", "3"]);
    assert!(output.contains("There are 1 products available."));
    assert!(output.contains("Your total will be 1800.00."));
    assert!(output.contains("Your change is 0.00."));
    assert!(cart.is_empty());
}

#[test]
fn absurd_cash_amount_is_rejected() {
    let (output, cart) = run(&catalog(), &["1", "2", "1", "3", "2", "1", "1e30", "3", "3"]);
    assert!(output.contains(&format!("How much cash do you have?\n> {}\n", INVALID_CHOICE)));
    assert_eq!(cart.total_count(), 1);
}

#[test]
fn closed_input_ends_the_session() {
    let (output, _) = run(&catalog(), &["1", "1"]);
    assert!(output.trim_end().ends_with(FAREWELL));
}

#[test]
fn empty_catalog_still_runs() {
    let path = std::env::temp_dir().join("storefront-session-missing.csv");
    let catalog = Catalog::load(&path);
    let (output, _) = run(&catalog, &["1", "2", "3", "3"]);
    assert!(output.contains("There are 0 products available. Showing 0 based on your filters."));
    assert!(output.contains("There's nothing to add to cart!"));
}
