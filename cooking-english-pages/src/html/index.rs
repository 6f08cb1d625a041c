//! Course index page generation.
//!
//! Generates `index.html`, a grid linking every roster day. The index is
//! built from the roster alone, so days without content still appear.

use cooking_english_core::{DayMeta, Roster};

use crate::assets::INDEX_CSS;
use crate::html::{COURSE_TITLE, RenderOptions};

/// Generate the index page.
#[must_use]
pub fn render_index_page(roster: &Roster, options: &RenderOptions) -> String {
    let mut sections = Vec::new();

    sections.push("<!DOCTYPE html>".to_string());
    sections.push("<html lang=\"ja\">".to_string());
    sections.push("<head>".to_string());
    sections.push("  <meta charset=\"UTF-8\">".to_string());
    sections.push(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">".to_string(),
    );
    sections.push(format!("  <title>{COURSE_TITLE}</title>"));
    sections.push("  <style>".to_string());
    sections.push(format!("{INDEX_CSS}  </style>"));
    sections.push("</head>".to_string());
    sections.push("<body>".to_string());
    sections.push("  <div class=\"container\">".to_string());
    sections.push(format!("    <h1>🍳 {COURSE_TITLE}</h1>"));
    sections.push("    <p class=\"subtitle\">料理しながら英検5級レベルの英語を学ぼう！</p>".to_string());
    sections.push(String::new());
    sections.push(challenge_link());
    sections.push(String::new());
    sections.push("    <div class=\"card\">".to_string());
    sections.push("      <div class=\"day-grid\">".to_string());

    for meta in roster {
        sections.push(day_link(meta, options));
    }

    sections.push("      </div>".to_string());
    sections.push("    </div>".to_string());
    sections.push("  </div>".to_string());
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());

    sections.join("\n")
}

/// Call-out to the optional challenge page.
fn challenge_link() -> String {
    concat!(
        "    <div style=\"text-align: center; margin-bottom: 20px;\">\n",
        "      <a href=\"challenge.html\" style=\"display: inline-block; background: white; ",
        "color: #e8a4b8; font-weight: bold; font-size: 16px; padding: 16px 32px; ",
        "border-radius: 50px; text-decoration: none; box-shadow: 0 4px 20px rgba(0,0,0,0.15); ",
        "transition: all 0.2s;\" ",
        "onmouseover=\"this.style.transform='translateY(-2px)';this.style.boxShadow='0 6px 24px rgba(0,0,0,0.2)'\" ",
        "onmouseout=\"this.style.transform='';this.style.boxShadow='0 4px 20px rgba(0,0,0,0.15)'\">",
        "🎯 余力があるならチャレンジ！</a>\n",
        "    </div>"
    )
    .to_string()
}

/// One grid cell linking a day page.
fn day_link(meta: &DayMeta, options: &RenderOptions) -> String {
    format!(
        r#"        <a href="day{day}.html" class="day-link">
          <span class="day-emoji">{emoji}</span>
          <span class="day-number">Day {day}</span>
          <span class="day-name">{name}</span>
        </a>"#,
        day = meta.day,
        emoji = options.escape.apply(&meta.emoji),
        name = options.escape.apply(&meta.en),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_every_roster_day() {
        let page = render_index_page(Roster::builtin(), &RenderOptions::default());
        assert_eq!(page.matches("class=\"day-link\"").count(), 30);
        for day in 1..=30 {
            assert!(page.contains(&format!("href=\"day{day}.html\"")));
            assert!(page.contains(&format!("<span class=\"day-number\">Day {day}</span>")));
        }
    }

    #[test]
    fn test_index_order_follows_roster() {
        let page = render_index_page(Roster::builtin(), &RenderOptions::default());
        let gyoza = page.find("Gyoza").unwrap();
        let pudding = page.find("Matcha Pudding").unwrap();
        assert!(gyoza < pudding);
    }

    #[test]
    fn test_index_entry_shape() {
        let page = render_index_page(Roster::builtin(), &RenderOptions::default());
        assert!(page.contains(
            "        <a href=\"day5.html\" class=\"day-link\">\n          <span class=\"day-emoji\">🐔</span>\n          <span class=\"day-number\">Day 5</span>\n          <span class=\"day-name\">Yurinjii</span>\n        </a>"
        ));
    }

    #[test]
    fn test_index_custom_roster() {
        let roster = Roster::new(vec![DayMeta::new(1, "Tea & Toast", "トースト", "🍞")]);
        let page = render_index_page(&roster, &RenderOptions::default());
        assert_eq!(page.matches("class=\"day-link\"").count(), 1);
        assert!(page.contains("Tea &amp; Toast"));
    }

    #[test]
    fn test_index_has_challenge_link() {
        let page = render_index_page(Roster::builtin(), &RenderOptions::default());
        assert!(page.contains("href=\"challenge.html\""));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>30日間クッキング英語</title>"));
    }
}
