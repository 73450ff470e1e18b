use commalint_errors::{Diagnostic, Severity, apply_fixes};
use commalint_parse::parse;
use commalint_tokenizer::{TokenId, TokenStream};

use crate::{CommaSpacing, Side, SpacingConfig};

fn config(before: bool, after: bool, ignore_first: bool) -> SpacingConfig {
    SpacingConfig {
        require_space_before: before,
        require_space_after: after,
        exempt_line_leading_separator: ignore_first,
    }
}

fn all_configs() -> impl Iterator<Item = SpacingConfig> {
    (0..8).map(|bits| config(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
}

/// Violations as `side adjacent@separator-offset`.
fn check(text: &str, config: SpacingConfig) -> Vec<String> {
    let stream = TokenStream::new(text);
    let parse = parse(&stream);

    CommaSpacing::new(config)
        .check(&stream, parse.lists())
        .iter()
        .map(|violation| {
            let offset: u32 = stream.token(violation.anchor).range.start().into();
            format!("{} {}@{offset}", violation.side, stream.text(violation.adjacent))
        })
        .collect()
}

fn fix(text: &str, config: SpacingConfig) -> String {
    let stream = TokenStream::new(text);
    let parse = parse(&stream);
    let diagnostics = CommaSpacing::new(config).diagnostics(&stream, parse.lists());

    apply_fixes(text, diagnostics.iter().filter_map(Diagnostic::fix)).0
}

#[test]
fn space_before_is_removed() {
    let defaults = SpacingConfig::default();

    assert_eq!(check("a , b", defaults), ["before a@2"]);
    assert_eq!(fix("a , b", defaults), "a, b");
}

#[test]
fn missing_space_after_is_inserted() {
    let defaults = SpacingConfig::default();

    assert_eq!(check("a,b", defaults), ["after b@1"]);
    assert_eq!(fix("a,b", defaults), "a, b");
}

#[test]
fn line_leading_separator_with_missing_space() {
    let text = "{ a: 1\n ,b: 2 }";

    assert!(check(text, config(false, true, true)).is_empty());
    assert_eq!(check(text, config(false, true, false)), ["after b@8"]);
}

#[test]
fn line_leading_separator_with_forbidden_space() {
    let text = "{ a: 1\n , b: 2 }";

    assert!(check(text, config(false, false, true)).is_empty());
    assert_eq!(check(text, config(false, false, false)), ["after b@8"]);
    assert!(check(text, config(false, true, false)).is_empty());
}

#[test]
fn hole_separator_skips_before_check() {
    for config in all_configs() {
        let violations = check("[ , x]", config);
        assert!(violations.iter().all(|v| !v.starts_with("before")), "{config:?}: {violations:?}");
    }
    assert!(check("[ , x]", SpacingConfig::default()).is_empty());
}

#[test]
fn hole_after_comment_skips_before_check() {
    let defaults = SpacingConfig::default();
    assert!(check("[a, /* gone */ , b]", defaults).is_empty());
}

#[test]
fn only_the_hole_separator_is_exempt() {
    assert_eq!(check("f(a , b), [ , c]", SpacingConfig::default()), ["before a@4"]);
}

#[test]
fn neighbouring_separators_are_not_checked() {
    assert!(check("[a,, b]", SpacingConfig::default()).is_empty());
    assert_eq!(check("[a,,b]", SpacingConfig::default()), ["after b@3"]);
}

#[test]
fn both_sides_are_reported() {
    assert_eq!(check("a ,b", SpacingConfig::default()), ["before a@2", "after b@2"]);
    assert_eq!(fix("a ,b", SpacingConfig::default()), "a, b");
}

#[test]
fn space_before_can_be_required() {
    let config = config(true, false, false);

    assert_eq!(check("a, b", config), ["before a@1", "after b@1"]);
    assert_eq!(fix("a, b", config), "a ,b");
    assert!(check("a ,b", config).is_empty());
}

#[test]
fn line_comment_keeps_its_space() {
    let no_space_after = config(false, false, false);

    assert!(check("[a, // why\n b]", no_space_after).is_empty());
    assert_eq!(check("[a,// why\n b]", SpacingConfig::default()), ["after // why@2"]);
    assert!(check("[a, // why\n b]", SpacingConfig::default()).is_empty());
}

#[test]
fn block_comment_is_an_ordinary_neighbour() {
    let no_space_after = config(false, false, false);
    assert_eq!(check("[a, /* why */ b]", no_space_after), ["after /* why */@2"]);
}

#[test]
fn cross_line_neighbours_are_ignored() {
    for config in all_configs() {
        assert!(check("[a\n,\nb]", config).is_empty(), "{config:?}");
        assert!(check("f(a\n   ,\n   b)", config).is_empty(), "{config:?}");
    }
}

#[test]
fn multi_line_comment_on_the_left_starts_on_another_line() {
    assert!(check("a /* x\n */ , b", SpacingConfig::default()).is_empty());
}

#[test]
fn line_leading_separator_never_checks_after() {
    for config in all_configs().filter(|config| config.exempt_line_leading_separator) {
        for text in ["[a\n,b]", "[a\n, b]", "a\n  ,  b", "x = {\n  a: 1\n  ,b: 2\n}"] {
            let violations = check(text, config);
            assert!(violations.iter().all(|v| !v.starts_with("after")), "{text:?} {config:?}");
        }
    }
}

#[test]
fn comment_before_separator_hides_line_start() {
    let text = "[a\n/* c */ ,b]";
    let violations = check(text, config(false, true, true));

    assert_eq!(violations, ["before /* c */@11", "after b@11"]);
}

#[test]
fn quoted_commas_are_not_separators() {
    assert!(check("f('a , b', \"c ,d\")", SpacingConfig::default()).is_empty());
    assert!(check("[<>a , b ,c</>, d]", SpacingConfig::default()).is_empty());

    let no_space_after = config(false, false, false);
    assert_eq!(check("f('a , b', \"c ,d\")", no_space_after), ["after \"c ,d\"@9"]);
}

#[test]
fn separator_at_end_of_input() {
    assert!(check("a,", SpacingConfig::default()).is_empty());
    assert_eq!(check("a ,", SpacingConfig::default()), ["before a@2"]);
    assert!(check(",", SpacingConfig::default()).is_empty());
}

#[test]
fn diagnostics_carry_message_and_fix() {
    let stream = TokenStream::new("a ,b");
    let parse = parse(&stream);
    let diagnostics =
        CommaSpacing::new(SpacingConfig::default()).diagnostics(&stream, parse.lists());
    let comma = stream.token(TokenId::from_index(1)).range;

    let messages = diagnostics.iter().map(Diagnostic::message).collect::<Vec<_>>();
    assert_eq!(messages, ["There should be no space before ','.", "A space is required after ','."]);

    for diagnostic in &diagnostics {
        assert_eq!(diagnostic.severity(), Severity::Warning);
        assert_eq!(diagnostic.range(), comma);
        assert!(diagnostic.fix().is_some());
    }
}

#[test]
fn fixes_converge() {
    let corpus = [
        "a , b",
        "a,b",
        "a ,b",
        "a  ,   b",
        "f(a,b ,c , d)",
        "[ , x]",
        "[a, , b]",
        "[a , /* gone */ , b]",
        "x = [a ,b] , y",
        "{ a: 1\n , b: 2 }",
        "{ a: 1\n ,b: 2 }",
        "[a, // why\n b ,c]",
        "[a,// why\n b]",
        "f(a /* x */ , b)",
        "g(a,\n  b ,c)",
        "[<>a , b</> , c]",
    ];

    for config in all_configs() {
        for text in corpus {
            let fixed = fix(text, config);
            assert_eq!(
                check(&fixed, config),
                Vec::<String>::new(),
                "{text:?} fixed to {fixed:?} under {config:?}"
            );
        }
    }
}

#[test]
fn deeply_nested_lists_are_still_checked() {
    let depth = 3_000;
    let text = format!("{}a ,b{}", "[".repeat(depth), "]".repeat(depth));

    assert_eq!(
        check(&text, SpacingConfig::default()),
        [format!("before a@{}", depth + 2), format!("after b@{}", depth + 2)]
    );
}

#[test]
fn side_names() {
    assert_eq!(Side::Before.to_string(), "before");
    assert_eq!(Side::After.as_str(), "after");
}
