use super::*;
use crate::browser::{Styler, compute_layout};

fn record(id: &str, name: &str, path: &str) -> ApiRecord {
    ApiRecord {
        id: id.to_string(),
        name: name.to_string(),
        listen_path: path.to_string(),
        default_version: "Default".to_string(),
    }
}

fn two_records() -> Vec<ApiRecord> {
    vec![
        record("b1f0c2d4e6a8", "Payments", "/payments/"),
        record(
            "7d1e3c5a9b2f4e6d8c0a1b3d5f7e9c2a",
            "Customer Accounts Service With A Very Long Display Name",
            "/customers/accounts/v2/",
        ),
    ]
}

fn render_with(
    f: impl FnOnce(&mut Streams<'_>) -> io::Result<()>,
) -> (String, String) {
    let mut content = Vec::new();
    let mut chrome = Vec::new();
    {
        let mut out = Streams {
            content: &mut content,
            chrome: &mut chrome,
            content_style: Styler::plain(),
            chrome_style: Styler::plain(),
        };
        f(&mut out).unwrap();
    }
    (
        String::from_utf8(content).unwrap(),
        String::from_utf8(chrome).unwrap(),
    )
}

#[test]
fn truncate_cases() {
    assert_eq!(truncate_with_ellipsis("abcdefgh", 5), "ab...");
    assert_eq!(truncate_with_ellipsis("ab", 5), "ab");
    assert_eq!(truncate_with_ellipsis("abcdef", 2), "ab");
    assert_eq!(truncate_with_ellipsis("x", 0), "");
    assert_eq!(truncate_with_ellipsis("abcd", 3), "abc");
    assert_eq!(truncate_with_ellipsis("abcd", 4), "abcd");
}

#[test]
fn truncate_counts_chars_not_bytes() {
    assert_eq!(truncate_with_ellipsis("héllo wörld", 8), "héllo...");
    assert_eq!(truncate_with_ellipsis("日本語", 3), "日本語");
}

#[test]
fn tabular_page_at_width_80() {
    let records = two_records();
    let layout = compute_layout(80);
    let (content, chrome) = render_with(|out| render_page(out, layout, 1, &records));

    let mut lines = content.split("\r\n");
    let header = lines.next().unwrap();
    assert!(header.starts_with("ID"));
    assert!(header.contains(" | Name"));
    assert!(header.contains(" | Listen Path"));
    let divider = lines.next().unwrap();
    assert_eq!(divider, "-".repeat(80));

    assert!(content.contains("b1f0c2d4e6a8"));
    // 32-char id truncated to the 16-wide column
    assert!(content.contains("7d1e3c5a9b2f4..."));
    assert!(content.contains("/payments/"));

    assert!(chrome.starts_with("\x1b[2J\x1b[H"));
    assert!(chrome.contains("page 1"));
    assert!(chrome.contains("q quit"));
    for line in chrome.split("\r\n").filter(|l| !l.is_empty()) {
        let line = line.trim_start_matches("\x1b[2J\x1b[H");
        assert!(line.starts_with("\x1b[0G"), "chrome line {:?}", line);
    }
}

#[test]
fn tabular_rows_fit_terminal_width() {
    let records = two_records();
    let layout = compute_layout(60);
    let (content, _) = render_with(|out| render_page(out, layout, 3, &records));
    for line in content.split("\r\n").filter(|l| !l.is_empty()) {
        assert!(line.chars().count() <= 60, "{:?}", line);
    }
}

#[test]
fn stacked_page_uses_labels() {
    let records = two_records();
    let layout = compute_layout(30);
    assert!(layout.stacked);
    let (content, _) = render_with(|out| render_page(out, layout, 2, &records));

    assert!(content.contains("ID:"));
    assert!(content.contains("Name:"));
    assert!(content.contains("Listen Path:"));
    assert!(content.contains("Customer Accounts Service With A Very Long Di..."));
    assert!(!content.contains(" | "));
}

#[test]
fn empty_page_writes_notice_only_to_chrome() {
    let (content, chrome) = render_with(|out| render_page(out, compute_layout(80), 4, &[]));
    assert!(content.is_empty());
    assert!(chrome.contains("No more APIs."));
}

#[test]
fn static_page_uses_fixed_columns_and_plain_newlines() {
    let records = two_records();
    let (content, chrome) = render_with(|out| render_static_page(out, 2, &records));

    assert!(!content.contains('\r'));
    let divider = content.lines().nth(1).unwrap();
    assert_eq!(divider.len(), 36 + 28 + 18 + 6);
    assert!(content.contains("7d1e3c5a9b2f4e6d8c0a1b3d5f7e9c2a"));
    assert!(chrome.contains("Use --page 3"));
    assert!(!chrome.contains("\x1b["));
}

#[test]
fn static_empty_page_has_no_next_hint() {
    let (content, chrome) = render_with(|out| render_static_page(out, 5, &[]));
    assert!(content.is_empty());
    assert!(chrome.contains("No APIs found on page 5."));
    assert!(!chrome.contains("--page"));
}

#[test]
fn colored_header_only_when_enabled() {
    let records = two_records();
    let mut content = Vec::new();
    let mut chrome = Vec::new();
    let mut out = Streams {
        content: &mut content,
        chrome: &mut chrome,
        content_style: Styler::new(true),
        chrome_style: Styler::plain(),
    };
    render_static_page(&mut out, 1, &records).unwrap();
    let content = String::from_utf8(content).unwrap();
    assert!(content.lines().next().unwrap().contains("\x1b["));
}
