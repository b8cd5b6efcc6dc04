// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The bundled sample catalog serves as-is.

use crate::prelude::*;

fn sample() -> String {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/shelldeck.yaml");
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn sample_catalog_lists_views() {
    let deck = Deck::open(&sample());
    let slugs = deck.get("/getViewConfigs").await.view_slugs();
    assert!(!slugs.is_empty());
    assert!(slugs.contains(&"uptime".to_string()));
}

#[tokio::test]
async fn sample_catalog_styles_every_category() {
    let deck = Deck::open(&sample());
    let categories = deck.get("/getCategoryConfigs").await.json();
    let css = deck.get("/categories.css").await;
    css.status(200);
    assert_eq!(css.content_type, "text/css; charset=utf-8");
    for category in categories["CategoryConfigs"].as_array().unwrap() {
        let slug = category["Slug"].as_str().unwrap();
        assert!(css.body.contains(&format!(".background--{} ", slug)));
    }
}
