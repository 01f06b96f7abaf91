use std::borrow::Cow;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum EntityError {
    Unclosed(String),
    Invalid(String),
}

/// Decode predefined entities and character references.
///
/// Returns the input unchanged (borrowed) if it contains no `&`.
pub(crate) fn parse_entities(content: &str) -> Result<Cow<str>, EntityError> {
    if !content.contains('&') {
        return Ok(Cow::Borrowed(content));
    }
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }
        let mut entity = String::new();
        let mut is_complete = false;
        for c in chars.by_ref() {
            if c == ';' {
                is_complete = true;
                break;
            }
            entity.push(c);
        }
        if !is_complete {
            return Err(EntityError::Unclosed(entity));
        }
        match entity.as_str() {
            "amp" => result.push('&'),
            "apos" => result.push('\''),
            "gt" => result.push('>'),
            "lt" => result.push('<'),
            "quot" => result.push('"'),
            _ => match parse_char_reference(&entity) {
                Some(c) => result.push(c),
                None => return Err(EntityError::Invalid(entity)),
            },
        }
    }
    Ok(Cow::Owned(result))
}

fn parse_char_reference(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x') {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code)
}

fn escape<'a>(content: Cow<'a, str>, is_escaped: impl Fn(char) -> bool) -> Cow<'a, str> {
    if !content.chars().any(&is_escaped) {
        return content;
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' if is_escaped(c) => result.push_str("&amp;"),
            '<' if is_escaped(c) => result.push_str("&lt;"),
            '>' if is_escaped(c) => result.push_str("&gt;"),
            '"' if is_escaped(c) => result.push_str("&quot;"),
            '\'' if is_escaped(c) => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result.into()
}

/// Escape text content: `&`, `<` and `>`.
pub(crate) fn serialize_text(content: Cow<str>) -> Cow<str> {
    escape(content, |c| matches!(c, '&' | '<' | '>'))
}

/// Escape an attribute value for use between double quotes.
pub(crate) fn serialize_attribute(content: Cow<str>) -> Cow<str> {
    escape(content, |c| matches!(c, '&' | '<' | '>' | '"' | '\''))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse_entities("A &amp; B").unwrap(), "A & B");
    }

    #[test]
    fn test_parse_multiple() {
        assert_eq!(
            parse_entities("&amp;&apos;&gt;&lt;&quot;").unwrap(),
            "&'><\""
        );
    }

    #[test]
    fn test_parse_char_references() {
        assert_eq!(parse_entities("&#60;*&#x3E;").unwrap(), "<*>");
        assert_eq!(parse_entities("&#x1F600;").unwrap(), "\u{1F600}");
    }

    #[test]
    fn test_parse_unknown_entity() {
        assert_eq!(
            parse_entities("&unknown;"),
            Err(EntityError::Invalid("unknown".to_string()))
        );
        assert_eq!(
            parse_entities("&#xZZ;"),
            Err(EntityError::Invalid("#xZZ".to_string()))
        );
    }

    #[test]
    fn test_parse_unfinished_entity() {
        assert_eq!(
            parse_entities("&amp"),
            Err(EntityError::Unclosed("amp".to_string()))
        );
    }

    #[test]
    fn test_parse_no_entities() {
        let text = "hello";
        let result = parse_entities(text).unwrap();
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_serialize_text() {
        assert_eq!(serialize_text("A & <B>".into()), "A &amp; &lt;B&gt;");
        // quotes are fine in text
        assert_eq!(serialize_text(r#"say "hi""#.into()), r#"say "hi""#);
    }

    #[test]
    fn test_serialize_attribute() {
        assert_eq!(
            serialize_attribute(r#"&'><""#.into()),
            "&amp;&apos;&gt;&lt;&quot;"
        );
    }

    #[test]
    fn test_serialize_no_entities() {
        let text = "hello";
        let result = serialize_text(text.into());
        assert!(std::ptr::eq(text, result.as_ref()));
    }
}
