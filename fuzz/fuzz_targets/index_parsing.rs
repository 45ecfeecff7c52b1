// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index bodies: whatever the server sends, loading either
//! succeeds or returns a `LoadError`. It never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::{build_index, parse_response, search};

fuzz_target!(|data: (u16, &[u8])| {
    let (status, body) = data;
    match parse_response("/search.json", status, body) {
        Ok(docs) => {
            assert!((200..300).contains(&status));
            let index = build_index(docs);
            let _ = search(&index, "search");
        }
        Err(e) => {
            if !(200..300).contains(&status) {
                assert_eq!(e.status(), Some(status));
            }
        }
    }
});
