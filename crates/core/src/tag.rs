//! Tag mini-language parser.
//!
//! A field's annotation tag is a semicolon-separated parameter list:
//! `key[=value](;key[=value])*`. Values may be double-quoted to embed `;` or
//! `=`; the in-quote state toggles on each unescaped `"`, and one level of
//! surrounding quotes is stripped from the parsed value. Empty segments and
//! segments with more than one unquoted `=` are dropped.
//!
//! Two whole-tag values are reserved: [`TAG_CREATOR`] and [`TAG_TEMPLATE`]
//! mark pseudo-fields whose raw value feeds the event header instead of
//! producing a content entry.

use std::collections::HashMap;

/// Reserved tag: the field holds the applicant user id.
pub const TAG_CREATOR: &str = "creator";
/// Reserved tag: the field holds the approval template id.
pub const TAG_TEMPLATE: &str = "template";

/// Names the handler for the field. A tag without it is ignored.
pub const PARAM_CONTROL: &str = "control";
/// The emitted content entry's identifier.
pub const PARAM_ID: &str = "id";
/// Date granularity, or contact single/multi.
pub const PARAM_TYPE: &str = "type";
/// Explicit selector option key override (single selectors).
pub const PARAM_OPTION: &str = "option";
/// Explicit selector single/multi override.
pub const PARAM_SELECTOR_TYPE: &str = "selector_type";
/// `"true"` forces a multi selector.
pub const PARAM_MULTI: &str = "multi";
/// Contact mode: `"user"` (default) or `"department"`.
pub const PARAM_MODE: &str = "mode";

/// Parsed tag parameters. A key present without `=value` maps to `""`.
pub type TagParams = HashMap<String, String>;

/// Parses one tag string into its parameter map.
pub fn parse_tag(tag: &str) -> TagParams {
    let mut params = TagParams::new();
    for pair in split_quoted(tag, ';') {
        let kv = split_quoted(&pair, '=');
        match kv.as_slice() {
            [key] => {
                params.insert(key.clone(), String::new());
            }
            [key, value] => {
                params.insert(key.clone(), unquote(value));
            }
            // Malformed segment (repeated unquoted '='), dropped.
            _ => {}
        }
    }
    params
}

/// Splits on `sep`, ignoring separators inside double-quoted spans. Empty
/// segments are dropped. Quote and escape characters stay in the output;
/// [`unquote`] removes them where appropriate.
fn split_quoted(input: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut prev_backslash = false;

    for ch in input.chars() {
        if ch == '"' && !prev_backslash {
            in_quote = !in_quote;
            current.push(ch);
        } else if ch == sep && !in_quote {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
        prev_backslash = ch == '\\' && !prev_backslash;
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Strips one level of surrounding double quotes and unescapes `\"`.
/// Unquoted input is returned unchanged.
fn unquote(value: &str) -> String {
    match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\""),
        None => value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_pairs() {
        let params = parse_tag("control=Text;id=Text-1745736790921");
        assert_eq!(params.len(), 2);
        assert_eq!(params[PARAM_CONTROL], "Text");
        assert_eq!(params[PARAM_ID], "Text-1745736790921");
    }

    #[test]
    fn key_without_value_maps_to_empty_string() {
        let params = parse_tag("creator");
        assert_eq!(params.len(), 1);
        assert_eq!(params["creator"], "");
    }

    #[test]
    fn drops_empty_segments() {
        let params = parse_tag(";control=Text;;id=T1;");
        assert_eq!(params.len(), 2);
        assert_eq!(params[PARAM_CONTROL], "Text");
    }

    #[test]
    fn quoted_value_may_embed_separators() {
        let params = parse_tag(r#"control=Text;id="a;b=c";type=day"#);
        assert_eq!(params[PARAM_ID], "a;b=c");
        assert_eq!(params[PARAM_TYPE], "day");
    }

    #[test]
    fn escaped_quote_does_not_toggle_quoting() {
        let params = parse_tag(r#"id="a\";b";control=Text"#);
        assert_eq!(params[PARAM_ID], r#"a";b"#);
        assert_eq!(params[PARAM_CONTROL], "Text");
    }

    #[test]
    fn unbalanced_quote_swallows_separators_to_the_end() {
        // No stricter validation: the open span protects the rest of the tag.
        let params = parse_tag(r#"id="a;control=Text"#);
        assert_eq!(params.len(), 1);
        assert_eq!(params[PARAM_ID], "\"a;control=Text");
    }

    #[test]
    fn segment_with_repeated_equals_is_dropped() {
        let params = parse_tag("a=b=c;control=Text");
        assert!(!params.contains_key("a"));
        assert_eq!(params[PARAM_CONTROL], "Text");
    }

    #[test]
    fn last_occurrence_of_a_key_wins() {
        let params = parse_tag("control=Text;control=Money");
        assert_eq!(params[PARAM_CONTROL], "Money");
    }
}
