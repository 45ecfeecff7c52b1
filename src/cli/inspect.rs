// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index audit for `sitesearch inspect`.
//!
//! Nothing here is an error to the widget: missing optional fields and empty
//! titles are all searchable. They are what a site author usually wants to
//! fix before publishing.

use sitesearch::Document;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub documents: usize,
    /// Count per `type` value, sorted by name.
    pub types: BTreeMap<String, usize>,
    pub missing_date: usize,
    pub missing_categories: usize,
    pub missing_tags: usize,
    /// Positions of documents whose title is blank.
    pub empty_titles: Vec<usize>,
    /// URLs that appear more than once, with every position, in first-seen order.
    pub duplicate_urls: Vec<(String, Vec<usize>)>,
}

impl IndexReport {
    pub fn from_docs(docs: &[Document]) -> Self {
        let mut report = IndexReport {
            documents: docs.len(),
            ..Default::default()
        };
        let mut by_url: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut url_order: Vec<&str> = Vec::new();

        for (i, doc) in docs.iter().enumerate() {
            *report.types.entry(doc.kind.clone()).or_default() += 1;
            if doc.date.as_deref().map_or(true, |d| d.trim().is_empty()) {
                report.missing_date += 1;
            }
            if doc.categories().is_empty() {
                report.missing_categories += 1;
            }
            if doc.tags().is_empty() {
                report.missing_tags += 1;
            }
            if doc.title.trim().is_empty() {
                report.empty_titles.push(i);
            }
            let seen = by_url.entry(doc.url.as_str()).or_default();
            if seen.is_empty() {
                url_order.push(doc.url.as_str());
            }
            seen.push(i);
        }

        report.duplicate_urls = url_order
            .into_iter()
            .filter_map(|url| {
                by_url
                    .remove(url)
                    .filter(|positions| positions.len() > 1)
                    .map(|positions| (url.to_string(), positions))
            })
            .collect();
        report
    }

    pub fn has_problems(&self) -> bool {
        !self.empty_titles.is_empty() || !self.duplicate_urls.is_empty()
    }
}
