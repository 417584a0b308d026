/// Marker whose presence anywhere in a file's content suppresses injection.
/// The files themselves are the idempotency store; no side channel exists.
pub const MARKER: &str = "dashboard-console-capture.js";

const COMMENT: &str = "<!-- Console capture script for dashboard debugging -->";
const SCRIPT_TAG: &str = "<script src=\"/dashboard-console-capture.js\"></script>";

const HEAD_CLOSE: &str = "</head>";
const BODY_OPEN: &str = "<body>";
const HTML_OPEN: &str = "<html>";

pub fn already_injected(html: &str) -> bool {
    html.contains(MARKER)
}

/// Insert the capture block at the highest-priority anchor: before `</head>`,
/// else after `<body>`, else after `<html>`. Anchors are exact literals, so
/// attribute-bearing tags do not match. Content with no anchor comes back
/// unchanged; callers still write it (see run.rs).
pub fn inject_capture_block(html: &str) -> String {
    if let Some(pos) = html.find(HEAD_CLOSE) {
        splice(html, pos, &format!("  {}\n  {}\n", COMMENT, SCRIPT_TAG))
    } else if let Some(pos) = html.find(BODY_OPEN) {
        splice(
            html,
            pos + BODY_OPEN.len(),
            &format!("\n  {}\n  {}", COMMENT, SCRIPT_TAG),
        )
    } else if let Some(pos) = html.find(HTML_OPEN) {
        splice(
            html,
            pos + HTML_OPEN.len(),
            &format!("\n  {}\n  {}", COMMENT, SCRIPT_TAG),
        )
    } else {
        html.to_string()
    }
}

fn splice(html: &str, at: usize, block: &str) -> String {
    let mut result = String::with_capacity(html.len() + block.len());
    result.push_str(&html[..at]);
    result.push_str(block);
    result.push_str(&html[at..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_before_head_close() {
        let html = "<html><head><title>t</title></head><body></body></html>";
        let out = inject_capture_block(html);

        let head_close = out.find("</head>").unwrap();
        let script = out.find(SCRIPT_TAG).unwrap();
        assert!(script < head_close);
        assert!(out.contains(COMMENT));
        assert!(out.ends_with("</head><body></body></html>"));
    }

    #[test]
    fn head_wins_over_body() {
        let html = "<html><head></head><body><p>hi</p></body></html>";
        let out = inject_capture_block(html);

        let script = out.find(SCRIPT_TAG).unwrap();
        let body_open = out.find("<body>").unwrap();
        assert!(script < body_open);
    }

    #[test]
    fn falls_back_to_body_open() {
        let html = "<html><body><p>hi</p></body></html>";
        let out = inject_capture_block(html);

        assert!(out.starts_with("<html><body>\n  "));
        let script = out.find(SCRIPT_TAG).unwrap();
        let para = out.find("<p>hi</p>").unwrap();
        assert!(script < para);
    }

    #[test]
    fn falls_back_to_html_open() {
        let html = "<html><p>bare</p></html>";
        let out = inject_capture_block(html);

        assert!(out.starts_with("<html>\n  "));
        assert!(out.contains(SCRIPT_TAG));
    }

    #[test]
    fn no_anchor_returns_content_unchanged() {
        let html = "<div>fragment without structure</div>";
        assert_eq!(inject_capture_block(html), html);
    }

    #[test]
    fn attribute_bearing_tags_do_not_anchor() {
        let html = "<html lang=\"en\"><body class=\"dark\"><p>x</p></body></html>";
        assert_eq!(inject_capture_block(html), html);
    }

    #[test]
    fn marker_detected_anywhere_in_content() {
        assert!(already_injected(
            "<html><!-- dashboard-console-capture.js mentioned in a comment --></html>"
        ));
        assert!(!already_injected("<html><head></head></html>"));
    }

    #[test]
    fn injected_output_carries_marker() {
        let out = inject_capture_block("<html><head></head></html>");
        assert!(already_injected(&out));
    }

    #[test]
    fn only_first_anchor_occurrence_is_used() {
        let html = "<html><head></head><head></head></html>";
        let out = inject_capture_block(html);
        assert_eq!(out.matches(SCRIPT_TAG).count(), 1);
        let script = out.find(SCRIPT_TAG).unwrap();
        let first_close = out.find("</head>").unwrap();
        assert!(script < first_close);
    }
}
