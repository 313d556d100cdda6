//! End-to-end pipeline behavior over a realistic merged batch.

use glowdex_core::{parse_feed, RawListing};
use glowdex_resolver::{
    bucketize, build_detail, build_key, distinct_categories, to_listing_cards,
};

fn merged_batch() -> Vec<RawListing> {
    let store_a = parse_feed(
        r#"[
            {"name":"Labial Rojo","brand":"MAC","category":"Maquillaje","price":1000,
             "image":"https://a.test/labial.jpg","url":"https://a.test/labial"},
            {"name":"Crema Hidratante 50ml","brand":"Nivea","category":"Piel","price":2500},
            {"name":"Crema Hidratante 100ml","brand":"Nivea","category":"Piel","price":4100},
            {"name":"Serum Vitamina C 30ml","category":"Cuidado de la piel","price":5200}
        ]"#,
        "tienda-a",
    )
    .expect("store A feed should parse");

    let store_b = parse_feed(
        r#"[
            {"nombre":"MAC Labial Rojo","marca":"MAC","categoria":"MAQUILLAJE","precio":"1200",
             "imagen":"https://b.test/labial.jpg","tienda":""},
            {"nombre":"Hidratante Crema 50ml","marca":"Nivea","categoria":"piel","precio":2350},
            {"nombre":"Esmalte Azul","precio":null}
        ]"#,
        "tienda-b",
    )
    .expect("store B feed should parse");

    let mut merged = store_a;
    merged.extend(store_b);
    merged
}

#[test]
fn same_product_across_stores_merges_into_one_card() {
    let cards = to_listing_cards(&bucketize(merged_batch()));
    let labial = cards
        .iter()
        .find(|c| c.display_name == "labial rojo")
        .expect("labial card should exist");
    assert_eq!(labial.store_count, 2);
    assert_eq!(labial.min_price, Some(1000.0));
    assert_eq!(labial.category, "makeup");
}

#[test]
fn word_order_across_stores_does_not_split_products() {
    let cards = to_listing_cards(&bucketize(merged_batch()));
    let cremas_50: Vec<_> = cards
        .iter()
        .filter(|c| c.display_name.contains("crema") && c.canonical_id.contains("50 ml"))
        .collect();
    assert_eq!(cremas_50.len(), 1, "both 50ml cream spellings should merge");
    assert_eq!(cremas_50[0].store_count, 2);
    assert_eq!(cremas_50[0].min_price, Some(2350.0));
}

#[test]
fn different_volumes_stay_separate_cards() {
    let cards = to_listing_cards(&bucketize(merged_batch()));
    assert!(cards.iter().any(|c| c.canonical_id.contains("__50 ml__")));
    assert!(cards.iter().any(|c| c.canonical_id.contains("__100 ml__")));
}

#[test]
fn unmatched_listing_becomes_a_singleton_card() {
    let cards = to_listing_cards(&bucketize(merged_batch()));
    let esmalte = cards
        .iter()
        .find(|c| c.display_name == "esmalte azul")
        .expect("esmalte card should exist");
    assert_eq!(esmalte.store_count, 1);
    assert_eq!(esmalte.min_price, None);
}

#[test]
fn card_list_is_monotonic_with_unknown_prices_last() {
    let cards = to_listing_cards(&bucketize(merged_batch()));
    let mut last = 0.0f64;
    let mut seen_unknown = false;
    for card in &cards {
        match card.min_price {
            Some(price) => {
                assert!(!seen_unknown, "known price after an unknown one");
                assert!(price >= last, "card list must be non-decreasing");
                last = price;
            }
            None => seen_unknown = true,
        }
    }
}

#[test]
fn detail_offers_are_monotonic_and_match_the_card_minimum() {
    let buckets = bucketize(merged_batch());
    for card in to_listing_cards(&buckets) {
        let detail = build_detail(&buckets, &card.canonical_id)
            .expect("every card id should resolve to a detail view");
        assert_eq!(detail.offers.len(), card.store_count);
        assert_eq!(
            detail.offers.first().and_then(|o| o.price),
            card.min_price,
            "first sorted offer must carry the card's minimum price"
        );
        let known: Vec<f64> = detail.offers.iter().filter_map(|o| o.price).collect();
        for pair in known.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}

#[test]
fn detail_ids_round_trip_percent_encoding() {
    let buckets = bucketize(merged_batch());
    for (key, _) in buckets.iter() {
        assert!(
            build_detail(&buckets, &key.encoded()).is_some(),
            "encoded id {} should resolve",
            key.encoded()
        );
    }
}

#[test]
fn rekeying_an_already_bucketed_record_is_idempotent() {
    let buckets = bucketize(merged_batch());
    for (key, members) in buckets.iter() {
        for member in members {
            let mut resolved = member.clone();
            resolved.canonical_id = Some(key.as_str().to_string());
            assert_eq!(build_key(&resolved), *key);
        }
    }
}

#[test]
fn category_menu_dedups_case_and_accent_variants() {
    let categories = distinct_categories(&merged_batch());
    assert_eq!(
        categories,
        ["Maquillaje", "Piel", "Cuidado de la piel"],
        "first-seen casing and order, one entry per normalized form"
    );
}
