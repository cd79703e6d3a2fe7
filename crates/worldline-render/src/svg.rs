//! SVG emission.
//!
//! Renders a [`SpaceTimeLayout`] into a single `<svg>` string: process label
//! text, timeline segments, tick polylines, event markers, and message curves
//! with directional arrowheads and a looping transit animation. Output is
//! deterministic for a given layout and options.

use crate::layout::SpaceTimeLayout;
use std::fmt::Write as _;
use worldline_core::path::fmt_path;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Id used to prefix internal SVG ids (markers). Sanitized before use so
    /// several diagrams can be inlined into one document without collisions.
    pub diagram_id: Option<String>,
    /// Embed the default stylesheet so the output is viewable standalone.
    pub include_styles: bool,
    /// Emit the looping transit-packet animation along each message curve.
    pub animate_messages: bool,
    /// Mark the root element as selection-enabled (adds the `selection`
    /// class, which the default stylesheet uses for hover affordances).
    pub interactive: bool,
    /// Duration of one transit-animation loop.
    pub transit_duration_ms: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            include_styles: true,
            animate_messages: true,
            interactive: false,
            transit_duration_ms: 1500,
        }
    }
}

/// Renders a layout to an SVG document string.
pub fn render_svg(layout: &SpaceTimeLayout, options: &RenderOptions) -> String {
    let id = sanitize_svg_id(options.diagram_id.as_deref().unwrap_or("space-time"));

    let mut out = String::with_capacity(2048);

    let root_class = if options.interactive {
        "space-time selection"
    } else {
        "space-time"
    };
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" class="{root_class}" role="img" aria-roledescription="space-time-diagram">"#,
        fmt_path(layout.width),
        fmt_path(layout.height)
    );

    if options.include_styles {
        push_default_styles(&mut out);
    }
    push_defs(&mut out, &id);

    for tick in &layout.ticks {
        out.push_str(r#"<polyline class="tick" points=""#);
        for (i, p) in tick.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", fmt_path(p.x), fmt_path(p.y));
        }
        out.push_str(r#""/>"#);
    }

    for process in &layout.processes {
        out.push_str(r#"<g class="process">"#);

        for segment in &process.segments {
            let _ = write!(
                out,
                r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                classes("segment", segment.highlight),
                fmt_path(segment.from.x),
                fmt_path(segment.from.y),
                fmt_path(segment.to.x),
                fmt_path(segment.to.y)
            );
        }

        if let Some(label) = &process.label {
            let _ = write!(
                out,
                r#"<text class="label" x="{}" y="{}" text-anchor="middle">{}</text>"#,
                fmt_path(process.label_anchor.x),
                fmt_path(process.label_anchor.y),
                escape_xml(label)
            );
        }

        for event in &process.events {
            let _ = write!(
                out,
                r#"<circle class="{}" cx="{}" cy="{}" r="{}"/>"#,
                classes("event", event.highlight),
                fmt_path(event.center.x),
                fmt_path(event.center.y),
                fmt_path(layout.event_radius)
            );
            if let Some(label) = &event.label {
                let _ = write!(
                    out,
                    r#"<text class="{}" x="{}" y="{}">{}</text>"#,
                    classes("event-label", event.highlight),
                    fmt_path(event.center.x + 4.0),
                    fmt_path(event.center.y + 2.0),
                    escape_xml(label)
                );
            }
        }

        out.push_str("</g>");
    }

    for message in &layout.messages {
        let marker = if message.highlight {
            "arrow-highlight"
        } else {
            "arrow"
        };
        let _ = write!(
            out,
            r##"<g class="{}"><path class="transit" d="{}" marker-end="url(#{id}-{marker})"/>"##,
            classes("message", message.highlight),
            message.path_data
        );
        if options.animate_messages {
            let _ = write!(
                out,
                r#"<g class="packet"><path d="M -4 -3 h 8 v 6 h -8 v -6 l 4 3 l 4 -3"/><animateMotion dur="{}ms" repeatCount="indefinite" rotate="auto" path="{}"/></g>"#,
                options.transit_duration_ms, message.path_data
            );
        }
        out.push_str("</g>");
    }

    out.push_str("</svg>");
    out
}

fn classes(base: &str, highlight: bool) -> String {
    if highlight {
        format!("{base} highlight")
    } else {
        base.to_string()
    }
}

fn push_defs(out: &mut String, id: &str) {
    out.push_str("<defs>");
    for (suffix, fill) in [("arrow", "#4a6fa5"), ("arrow-highlight", "#c0392b")] {
        let _ = write!(
            out,
            r#"<marker id="{id}-{suffix}" viewBox="0 0 10 10" refX="8" refY="5" markerWidth="7" markerHeight="7" orient="auto"><path d="M 0 0 L 10 5 L 0 10 z" fill="{fill}"/></marker>"#
        );
    }
    out.push_str("</defs>");
}

fn push_default_styles(out: &mut String) {
    // Kept minimal: enough for the output to read correctly standalone.
    // Hosts embedding the SVG are expected to restyle via the classes.
    out.push_str(
        "<style>\
.space-time{font-family:sans-serif;font-size:6px;}\
.space-time .segment{stroke:#2b2b2b;stroke-width:0.75;}\
.space-time .segment.highlight{stroke:#c0392b;stroke-width:1.25;}\
.space-time .tick{fill:none;stroke:#b5b5b5;stroke-width:0.5;stroke-dasharray:2 2;}\
.space-time .event{fill:#2b2b2b;}\
.space-time.selection .event{cursor:pointer;}\
.space-time .event.highlight{fill:#c0392b;}\
.space-time .event-label.highlight{fill:#c0392b;}\
.space-time .message .transit{fill:none;stroke:#4a6fa5;stroke-width:0.75;}\
.space-time .message.highlight .transit{stroke:#c0392b;}\
.space-time .message .packet{fill:#4a6fa5;stroke:none;}\
.space-time .message.highlight .packet{fill:#c0392b;}\
.space-time .label{fill:#2b2b2b;}\
</style>",
    );
}

/// Converts an arbitrary string into a conservative SVG id token, so several
/// diagrams can share one document without marker-id collisions.
fn sanitize_svg_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "space-time".to_string();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for ch in raw.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
        out.push(if ok { ch } else { '-' });
    }

    let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_ok {
        out.insert_str(0, "d-");
    }

    while out.contains("--") {
        out = out.replace("--", "-");
    }
    let out = out.trim_matches('-');
    if out.is_empty() {
        "space-time".to_string()
    } else {
        out.to_string()
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => Some("&amp;"),
            b'<' => Some("&lt;"),
            b'>' => Some("&gt;"),
            b'"' => Some("&quot;"),
            b'\'' => Some("&#39;"),
            _ => None,
        };
        let Some(esc) = esc else {
            continue;
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_svg_id_is_conservative() {
        assert_eq!(sanitize_svg_id("my diagram #2"), "my-diagram-2");
        assert_eq!(sanitize_svg_id("  "), "space-time");
        assert_eq!(sanitize_svg_id("42"), "d-42");
        assert_eq!(sanitize_svg_id("ok_id"), "ok_id");
    }

    #[test]
    fn escape_xml_escapes_markup() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
