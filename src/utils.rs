/// Convert a CamelCase identifier into lower_case_with_underscores.
///
/// An underscore goes in front of an upper-case letter only when the
/// character before it was not upper-case, so runs of capitals collapse into
/// one word: `HTTPServer` becomes `httpserver`.
pub fn camelcase_to_underscore(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(text.len() + 4);
    result.extend(first.to_lowercase());
    let mut prev_cap = first.is_uppercase();

    for letter in chars {
        if letter.is_uppercase() {
            if !prev_cap {
                result.push('_');
            }
            result.extend(letter.to_lowercase());
            prev_cap = true;
        } else {
            result.push(letter);
            prev_cap = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelcase_to_underscore() {
        let cases = [
            ("CamelCase", "camel_case"),
            ("camelCase", "camel_case"),
            ("Camel", "camel"),
            ("lower", "lower"),
            ("HTTPServer", "httpserver"),
            ("someHTTPThing", "some_httpthing"),
            ("Version2Name", "version2_name"),
            ("already_snake", "already_snake"),
            ("A", "a"),
            ("", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(
                camelcase_to_underscore(input),
                expected,
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(camelcase_to_underscore("ÉcoleÉté"), "école_été");
    }
}
