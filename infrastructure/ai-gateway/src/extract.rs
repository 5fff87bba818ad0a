/// Returns the first balanced `{ ... }` object embedded in `text`, if any.
///
/// Models sometimes wrap their JSON in prose or markdown fences. This scans
/// for the first opening brace and tracks depth until it closes, skipping
/// braces inside string literals and escape sequences.
pub fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_extract_object_wrapped_in_prose() {
        let text = "Sure! Here you go: {\"recipes\": []} Enjoy!";
        assert_eq!(first_balanced_object(text), Some("{\"recipes\": []}"));
    }

    #[test]
    fn should_extract_object_from_markdown_fence() {
        let text = "```json\n{\"recipes\": [{\"name\": \"Bibimbap\"}]}\n```";
        assert_eq!(
            first_balanced_object(text),
            Some("{\"recipes\": [{\"name\": \"Bibimbap\"}]}")
        );
    }

    #[test]
    fn should_ignore_braces_inside_strings() {
        let text = r#"{"note": "use } sparingly", "ok": true}"#;
        assert_eq!(first_balanced_object(text), Some(text));
    }

    #[test]
    fn should_handle_escaped_quotes() {
        let text = r#"{"note": "say \"hi\" }", "ok": true} trailing"#;
        assert_eq!(
            first_balanced_object(text),
            Some(r#"{"note": "say \"hi\" }", "ok": true}"#)
        );
    }

    #[test]
    fn should_return_none_without_complete_object() {
        assert_eq!(first_balanced_object("no json here"), None);
        assert_eq!(first_balanced_object("{\"unterminated\": tru"), None);
    }
}
