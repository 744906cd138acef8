// Unit tests for locator parsing and strategy selection

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_prefix_dispatch() {
    assert_eq!(
        Target::parse("id=submit-btn"),
        Target::Id("submit-btn".to_string())
    );
    assert_eq!(
        Target::parse("name=username"),
        Target::Name("username".to_string())
    );
    assert_eq!(
        Target::parse("class=nav-item"),
        Target::ClassName("nav-item".to_string())
    );
    assert_eq!(
        Target::parse("css=button.submit"),
        Target::Css("button.submit".to_string())
    );
    assert_eq!(
        Target::parse("link=Sign in"),
        Target::LinkText("Sign in".to_string())
    );
    assert_eq!(
        Target::parse("partialLink=Sign"),
        Target::PartialLinkText("Sign".to_string())
    );
}

#[test]
fn test_xpath_keeps_full_string() {
    let target = Target::parse("//div[@class='x']");
    assert_eq!(target, Target::XPath("//div[@class='x']".to_string()));
    assert_eq!(target.value(), "//div[@class='x']");
}

#[test]
fn test_unprefixed_falls_back_to_xpath() {
    // Unrecognized strings degrade to XPath interpretation rather than
    // failing fast; resolution is where a malformed query surfaces.
    assert_eq!(
        Target::parse("button.submit"),
        Target::XPath("button.submit".to_string())
    );
    // A typo'd prefix is just an unrecognized string
    assert_eq!(
        Target::parse("idd=submit"),
        Target::XPath("idd=submit".to_string())
    );
}

#[test]
fn test_value_may_contain_equals() {
    // Only the first '=' separates prefix from value
    assert_eq!(
        Target::parse("css=a[href='?q=1']"),
        Target::Css("a[href='?q=1']".to_string())
    );
    assert_eq!(
        Target::parse("link=a=b=c"),
        Target::LinkText("a=b=c".to_string())
    );
}

#[test]
fn test_same_prefix_same_strategy() {
    // Strategy choice depends only on the prefix family, never the value
    for value in ["x", "submit-btn", "a b c", "//nested", "link=inner"] {
        assert_eq!(Target::parse(&format!("id={value}")).strategy(), "id");
        assert_eq!(Target::parse(&format!("name={value}")).strategy(), "name");
        assert_eq!(Target::parse(&format!("css={value}")).strategy(), "css");
    }
}

#[test]
fn test_empty_value_is_kept() {
    assert_eq!(Target::parse("id="), Target::Id(String::new()));
}

#[test]
fn test_display_round_trip() {
    for raw in [
        "id=submit-btn",
        "name=q",
        "class=btn",
        "css=ul > li",
        "link=Sign in",
        "partialLink=Sign",
        "//div[@id='x']",
    ] {
        assert_eq!(Target::parse(raw).to_string(), raw);
    }
}

#[test]
fn test_lowering_to_driver_strategies() {
    assert_eq!(
        Target::parse("id=submit").selector(),
        Selector::Id("submit".to_string())
    );
    assert_eq!(
        Target::parse("name=q").selector(),
        Selector::Css("[name='q']".to_string())
    );
    assert_eq!(
        Target::parse("class=btn").selector(),
        Selector::Css(".btn".to_string())
    );
    assert_eq!(
        Target::parse("link=Sign in").selector(),
        Selector::LinkText("Sign in".to_string())
    );
    assert_eq!(
        Target::parse("partialLink=Sign").selector(),
        Selector::XPath("//a[contains(normalize-space(.), 'Sign')]".to_string())
    );
    assert_eq!(
        Target::parse("//div").selector(),
        Selector::XPath("//div".to_string())
    );
}

#[test]
fn test_quote_bearing_values_are_escaped() {
    // CSS strings take a backslash escape
    assert_eq!(
        Target::parse("name=it's").selector(),
        Selector::Css("[name='it\\'s']".to_string())
    );

    // XPath literals have no escape; quoted values are stitched with concat()
    assert_eq!(
        Target::parse("partialLink=it's here").selector(),
        Selector::XPath(
            "//a[contains(normalize-space(.), concat('it', \"'\", 's here'))]".to_string()
        )
    );

    // Quote-free values keep the plain literal form
    assert_eq!(
        Target::parse("partialLink=plain").selector(),
        Selector::XPath("//a[contains(normalize-space(.), 'plain')]".to_string())
    );
}

#[test]
fn test_xpath_string_literal_forms() {
    assert_eq!(xpath_string("plain"), "'plain'");
    assert_eq!(xpath_string("it's"), "concat('it', \"'\", 's')");
    // Leading, trailing, and repeated quotes produce empty segments
    assert_eq!(xpath_string("'"), "concat('', \"'\", '')");
    assert_eq!(xpath_string("a''b"), "concat('a', \"'\", '', \"'\", 'b')");
}

#[test]
fn test_as_locator_borrows_matching_variant() {
    let selector = Target::parse("css=button").selector();
    assert!(matches!(selector.as_locator(), Locator::Css("button")));

    let selector = Target::parse("id=submit").selector();
    assert!(matches!(selector.as_locator(), Locator::Id("submit")));
}

#[test]
fn test_serde_tagged_form() {
    let target = Target::parse("id=submit-btn");
    let json = serde_json::to_value(&target).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"strategy": "id", "value": "submit-btn"})
    );
    let back: Target = serde_json::from_value(json).unwrap();
    assert_eq!(back, target);
}
