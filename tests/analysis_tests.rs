use catalog_scraper::analysis::{category_counts, price_distribution, price_trend, top_rated};
use catalog_scraper::types::Product;
use chrono::{TimeZone, Utc};

fn product(name: &str, price: f64, rating: u8, category: &str) -> Product {
    Product {
        name: name.to_string(),
        price,
        rating,
        category: category.to_string(),
        scraped_at: Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_distribution_counts_sum_to_snapshot_size() {
    let snapshot: Vec<Product> = (0..37)
        .map(|i| product(&format!("P{}", i), 5.0 + i as f64 * 3.7, 3, "X"))
        .collect();

    let histogram = price_distribution(&snapshot, 10).unwrap();
    assert_eq!(histogram.counts.len(), 10);
    assert_eq!(histogram.edges.len(), 11);
    assert_eq!(histogram.counts.iter().sum::<usize>(), snapshot.len());
}

#[test]
fn test_distribution_max_price_lands_in_last_bin() {
    let snapshot = vec![
        product("A", 0.0, 0, "X"),
        product("B", 50.0, 0, "X"),
        product("C", 100.0, 0, "X"),
    ];
    let histogram = price_distribution(&snapshot, 4).unwrap();
    assert_eq!(*histogram.counts.last().unwrap(), 1);
    assert_eq!(histogram.counts.iter().sum::<usize>(), 3);
}

#[test]
fn test_distribution_empty_snapshot_is_no_data() {
    assert!(price_distribution(&[], 10).is_none());
}

#[test]
fn test_distribution_all_equal_prices_single_bin() {
    let snapshot = vec![
        product("A", 9.99, 1, "X"),
        product("B", 9.99, 2, "X"),
        product("C", 9.99, 3, "X"),
    ];
    let histogram = price_distribution(&snapshot, 10).unwrap();
    assert_eq!(histogram.edges, vec![9.99, 9.99]);
    assert_eq!(histogram.counts, vec![3]);
}

#[test]
fn test_trend_groups_by_date_ascending() {
    let day1 = Utc.with_ymd_and_hms(2026, 8, 27, 9, 0, 0).unwrap();
    let day2 = Utc.with_ymd_and_hms(2026, 8, 28, 9, 0, 0).unwrap();

    let mut snapshot = vec![
        product("A", 10.0, 0, "X"),
        product("B", 20.0, 0, "X"),
        product("C", 40.0, 0, "X"),
    ];
    // Two sessions on day2 and day1 respectively, out of date order.
    snapshot[0].scraped_at = day2;
    snapshot[1].scraped_at = day1;
    snapshot[2].scraped_at = day2;

    let trend = price_trend(&snapshot);
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].date, day1.date_naive());
    assert_eq!(trend[0].mean_price, 20.0);
    assert_eq!(trend[1].date, day2.date_naive());
    assert_eq!(trend[1].mean_price, 25.0);
}

#[test]
fn test_trend_empty_snapshot_is_empty() {
    assert!(price_trend(&[]).is_empty());
}

#[test]
fn test_top_rated_orders_by_rating_then_name() {
    let snapshot = vec![
        product("Zeta", 10.0, 4, "X"),
        product("Alpha", 10.0, 4, "X"),
        product("Mid", 10.0, 3, "X"),
        product("Best", 10.0, 5, "X"),
    ];

    let top = top_rated(&snapshot, 3);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].name, "Best");
    assert_eq!(top[1].name, "Alpha");
    assert_eq!(top[2].name, "Zeta");
}

#[test]
fn test_top_rated_length_is_bounded_by_snapshot() {
    let snapshot = vec![product("Only", 1.0, 2, "X")];
    assert_eq!(top_rated(&snapshot, 10).len(), 1);
    assert!(top_rated(&[], 10).is_empty());
}

#[test]
fn test_category_counts_sum_and_ordering() {
    let snapshot = vec![
        product("A", 1.0, 0, "Phones"),
        product("B", 1.0, 0, "Laptops"),
        product("C", 1.0, 0, "Laptops"),
        product("D", 1.0, 0, "Monitors"),
    ];

    let counts = category_counts(&snapshot);
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), snapshot.len());
    assert_eq!(counts[0].category, "Laptops");
    assert_eq!(counts[0].count, 2);
    // tie between Monitors and Phones broken by name ascending
    assert_eq!(counts[1].category, "Monitors");
    assert_eq!(counts[2].category, "Phones");
}
