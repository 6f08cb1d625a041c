#![no_main]

use cooking_english_core::{Roster, parse_lesson};
use cooking_english_pages::{RenderOptions, render_lesson_page, validate_lesson};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let roster = Roster::builtin();
    let Some(meta) = roster.first() else {
        return;
    };

    // Any document that parses must validate, then render or fail cleanly
    if let Ok(content) = parse_lesson(raw, meta) {
        let _ = validate_lesson(&content, meta.day);
        if let Ok(page) = render_lesson_page(meta.day, &content, roster, &RenderOptions::default()) {
            assert!(page.starts_with("<!DOCTYPE html>"));
        }
    }
});
