use rust_decimal::Decimal;
use shopcat_dataset::DatasetRecord;

use super::*;
use crate::inspect::summarize;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["shopcat"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_scrape_command() {
    let cli = Cli::try_parse_from(["shopcat", "scrape"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Scrape)));
}

#[test]
fn parses_inspect_with_default_top() {
    let cli = Cli::try_parse_from(["shopcat", "inspect"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Inspect { top: 10 })));
}

#[test]
fn parses_inspect_with_top() {
    let cli =
        Cli::try_parse_from(["shopcat", "inspect", "--top", "3"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Inspect { top: 3 })));
}

#[test]
fn rejects_unknown_command() {
    assert!(Cli::try_parse_from(["shopcat", "report"]).is_err());
}

fn record(variant_id: &str, category: &str, discount: Option<i64>) -> DatasetRecord {
    DatasetRecord {
        product_id: "1".to_owned(),
        variant_id: variant_id.to_owned(),
        handle: String::new(),
        title: format!("Item {variant_id}"),
        original_price: Some(Decimal::new(100, 0)),
        discounted_price: Some(Decimal::new(100, 0)),
        discount_pct: discount.map(|d| Decimal::new(d, 0)),
        category: category.to_owned(),
    }
}

#[test]
fn summarize_counts_categories_by_size() {
    let records = vec![
        record("1", "TVs", Some(0)),
        record("2", "Audio", Some(0)),
        record("3", "TVs", Some(0)),
        record("4", "Cameras", Some(0)),
    ];
    let summary = summarize(&records, 5);
    assert_eq!(summary.rows, 4);
    assert_eq!(
        summary.categories,
        vec![("TVs", 2), ("Audio", 1), ("Cameras", 1)]
    );
}

#[test]
fn summarize_ranks_discounts_and_skips_undiscounted() {
    let records = vec![
        record("1", "TVs", Some(10)),
        record("2", "TVs", Some(0)),
        record("3", "TVs", Some(40)),
        record("4", "TVs", None),
        record("5", "TVs", Some(25)),
    ];
    let summary = summarize(&records, 2);
    assert_eq!(summary.discounted, 3);
    let ids: Vec<&str> = summary
        .top_discounts
        .iter()
        .map(|r| r.variant_id.as_str())
        .collect();
    assert_eq!(ids, vec!["3", "5"]);
}

#[test]
fn summarize_empty_dataset() {
    let summary = summarize(&[], 10);
    assert_eq!(summary.rows, 0);
    assert!(summary.categories.is_empty());
    assert!(summary.top_discounts.is_empty());
}
