//! Conditional-visibility directive resolution.
//!
//! README files can carry HTML-comment directives that mark sections as
//! visible only on GitHub, only on WordPress, or only under a named
//! environment. This module resolves those directives into plain text in
//! four fixed-order passes, each scanning the output of the previous one:
//!
//! 1. `<!-- only:github/ -->` … `<!-- /only:github -->` — span removed.
//! 2. `<!-- only:wp>` … `</only:wp -->` — span replaced by its trimmed body.
//! 3. `<!-- only:<env>>` … `</only:<env> -->` — trimmed body, for the
//!    active environment name only (literal match, not a wildcard).
//! 4. `<!-- not:<name>/ -->` … `<!-- /not:<name> -->` — removed when
//!    `<name>` is the active environment, trimmed body otherwise.
//!
//! Passes 3 and 4 are skipped entirely when no environment name is set,
//! leaving their markers verbatim in the output.

const GITHUB_START: &str = "<!-- only:github/ -->";
const GITHUB_END: &str = "<!-- /only:github -->";
const WP_START: &str = "<!-- only:wp>";
const WP_END: &str = "</only:wp -->";

const NOT_START_PREFIX: &str = "<!-- not:";
const NOT_START_SUFFIX: &str = "/ -->";
const NOT_END_PREFIX: &str = "<!-- /not:";
const NOT_END_SUFFIX: &str = " -->";

/// What to do with a matched span.
#[derive(Clone, Copy, PartialEq, Eq)]
enum SpanAction {
    /// Drop markers and body.
    Remove,
    /// Drop markers, keep the trimmed body.
    Reveal,
}

/// Resolve all visibility directives in `input`.
///
/// Spans are contiguous and non-nesting: a start marker binds to the first
/// matching end marker after it, and an inner start marker inside a body is
/// treated as inert text. Nested or overlapping same-kind spans are a known
/// limitation and are not distinguished. A start marker with no end marker
/// never matches and stays verbatim. This function never fails.
pub fn resolve(input: &str, env: Option<&str>) -> String {
    let mut doc = resolve_spans(input, GITHUB_START, GITHUB_END, SpanAction::Remove);
    doc = resolve_spans(&doc, WP_START, WP_END, SpanAction::Reveal);

    if let Some(env) = env {
        let start = format!("<!-- only:{env}>");
        let end = format!("</only:{env} -->");
        doc = resolve_spans(&doc, &start, &end, SpanAction::Reveal);
        doc = resolve_negated_spans(&doc, env);
    }

    doc
}

/// Single pass over `input` replacing every `start`…`end` span.
///
/// First-match-wins: the scanner alternates between looking for the next
/// start marker and the first end marker after it.
fn resolve_spans(input: &str, start: &str, end: &str, action: SpanAction) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(rel) = input[pos..].find(start) {
        let span_start = pos + rel;
        let body_start = span_start + start.len();
        // Dangling start marker: no match, rest of the document is verbatim.
        let Some(end_rel) = input[body_start..].find(end) else {
            break;
        };
        let body_end = body_start + end_rel;

        out.push_str(&input[pos..span_start]);
        if action == SpanAction::Reveal {
            out.push_str(input[body_start..body_end].trim());
        }
        pos = body_end + end.len();
    }

    out.push_str(&input[pos..]);
    out
}

/// Pass 4: `<!-- not:<name>/ -->` spans for ANY name.
///
/// Content inside a negated span is shown by default (trimmed) and removed
/// only when the captured name equals the active environment. The end
/// marker accepts any non-empty space-free name; it is not required to
/// match the start marker's name.
fn resolve_negated_spans(input: &str, env: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(rel) = input[pos..].find(NOT_START_PREFIX) {
        let marker = pos + rel;
        let name_start = marker + NOT_START_PREFIX.len();

        let Some((name, name_len)) = parse_start_name(&input[name_start..]) else {
            // Not a well-formed start marker; emit it and keep scanning.
            out.push_str(&input[pos..name_start]);
            pos = name_start;
            continue;
        };
        let body_start = name_start + name_len + NOT_START_SUFFIX.len();

        let Some((body_len, marker_len)) = find_end_marker(&input[body_start..]) else {
            break;
        };

        out.push_str(&input[pos..marker]);
        if name != env {
            out.push_str(input[body_start..body_start + body_len].trim());
        }
        pos = body_start + body_len + marker_len;
    }

    out.push_str(&input[pos..]);
    out
}

/// Parse `<name>/ -->` at the head of `rest`; the name may not contain `/`
/// and must be non-empty. Returns the name and its length.
fn parse_start_name(rest: &str) -> Option<(&str, usize)> {
    let slash = rest.find('/')?;
    if slash == 0 || !rest[slash..].starts_with(NOT_START_SUFFIX) {
        return None;
    }
    Some((&rest[..slash], slash))
}

/// Find the first well-formed `<!-- /not:<name> -->` in `rest`.
///
/// Returns the body length up to the marker and the marker's own length.
fn find_end_marker(rest: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(rel) = rest[from..].find(NOT_END_PREFIX) {
        let marker = from + rel;
        let name_start = marker + NOT_END_PREFIX.len();
        if let Some(close) = rest[name_start..].find(NOT_END_SUFFIX) {
            let name = &rest[name_start..name_start + close];
            if !name.is_empty() && !name.contains(' ') {
                let marker_len = NOT_END_PREFIX.len() + close + NOT_END_SUFFIX.len();
                return Some((marker, marker_len));
            }
        }
        from = name_start;
    }
    None
}
