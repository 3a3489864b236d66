use crate::error::Result;
use crate::parsers;
use crate::pretty;
use crate::registry::Registry;
use crate::utils;

/// A string-to-string helper that can be looked up by name
pub type Transform = fn(&str) -> Result<String>;

/// Registry holding every built-in transform
pub fn builtin() -> Result<Registry<Transform>> {
    Registry::new()
        .with("text.camelcase_to_underscore", camelcase as Transform)?
        .with("html.parse_link", parse_link)?
        .with("html.link_url", link_url)?
        .with("html.link_text", link_text)
}

fn camelcase(input: &str) -> Result<String> {
    Ok(utils::camelcase_to_underscore(input))
}

fn parse_link(input: &str) -> Result<String> {
    pretty::pretty_json(&parsers::parse_link(input))
}

fn link_url(input: &str) -> Result<String> {
    Ok(parsers::parse_link(input).into_parts().0)
}

fn link_text(input: &str) -> Result<String> {
    Ok(parsers::parse_link(input).into_parts().1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = builtin().unwrap();
        let names: Vec<_> = registry.items_in("html").map(|(name, _)| name).collect();
        assert_eq!(names, vec!["link_text", "link_url", "parse_link"]);
        assert!(registry.contains("text.camelcase_to_underscore"));
    }

    #[test]
    fn test_dispatch() {
        let registry = builtin().unwrap();
        let html = "see <a href=\"/docs\">Docs</a>";

        let run = |path: &str, input: &str| (registry.load(path).unwrap())(input).unwrap();
        assert_eq!(run("html.link_url", html), "/docs");
        assert_eq!(run("html.link_text", html), "Docs");
        assert_eq!(
            run("html.parse_link", html),
            "{\n    \"text\": \"Docs\",\n    \"url\": \"/docs\"\n}"
        );
        assert_eq!(run("text.camelcase_to_underscore", "FooBar"), "foo_bar");
    }
}
