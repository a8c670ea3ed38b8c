//! Rendering tests.

use super::*;
use crate::alias::AliasTable;
use crate::test_support::{FakeSystem, home_aliases};

fn render_with(system: &FakeSystem, template: &str) -> Result<String, TemplateError> {
    let aliases = home_aliases();
    Renderer::new(system, &aliases).render(template)
}

fn render(template: &str) -> Result<String, TemplateError> {
    render_with(&FakeSystem::default(), template)
}

// ============================================================================
// Output composition
// ============================================================================

#[test]
fn test_render_empty() {
    assert_eq!(render("").unwrap(), "");
}

#[test]
fn test_render_static_only() {
    assert_eq!(render("$ > ").unwrap(), "$ > ");
}

#[test]
fn test_render_single_command() {
    assert_eq!(render("${path}").unwrap(), "~/src/prwd");
}

#[test]
fn test_render_mixed() {
    assert_eq!(
        render("[${hostname}] ${path -n}${uid} ").unwrap(),
        "[box] ~/s/prwd$ "
    );
}

#[test]
fn test_render_quoted_arguments() {
    assert_eq!(render("${sep \"a b\"}${sep 'c'}").unwrap(), "a b'c'");
}

#[test]
fn test_render_lone_dollar_is_literal() {
    assert_eq!(render("cost: $5 ${uid}").unwrap(), "cost: $5 $");
}

#[test]
fn test_render_unterminated_command() {
    assert_eq!(render("> ${uid").unwrap(), "> $");
}

#[test]
fn test_render_colors() {
    assert_eq!(
        render("${color 2}${path}${color reset}").unwrap(),
        "\x1b[38;5;2m~/src/prwd\x1b[0;0m"
    );
}

#[test]
fn test_render_date() {
    assert_eq!(render("${date %H:%M}").unwrap(), "09:26");
}

// ============================================================================
// Separator elision
// ============================================================================

#[test]
fn test_sep_shown_after_branch() {
    let system = FakeSystem::with_branch("main");
    assert_eq!(
        render_with(&system, "${branch}${sep :}${path}").unwrap(),
        "main:~/src/prwd"
    );
}

#[test]
fn test_sep_elided_without_branch() {
    assert_eq!(
        render("${branch}${sep :}${path}").unwrap(),
        "~/src/prwd"
    );
}

#[test]
fn test_sep_after_static_text() {
    assert_eq!(render("${branch} ${sep :}").unwrap(), " :");
}

#[test]
fn test_sep_at_start_is_shown() {
    assert_eq!(render("${sep >}").unwrap(), ">");
}

#[test]
fn test_consecutive_seps_after_empty() {
    // An elided separator is itself empty.
    assert_eq!(render("${branch}${sep :}${sep -}").unwrap(), "");
}

// ============================================================================
// Command-level failures stay inline
// ============================================================================

#[test]
fn test_command_failure_is_inline() {
    assert_eq!(
        render("${color 999}${path}").unwrap(),
        "<color-bad-code>~/src/prwd"
    );
}

#[test]
fn test_working_dir_failure_is_inline() {
    let system = FakeSystem {
        working_dir: Err(crate::system::WorkingDirError::NoAccess),
        ..FakeSystem::default()
    };
    assert_eq!(
        render_with(&system, "${path}${uid}").unwrap(),
        "<path-no-access>$"
    );
}

// ============================================================================
// Fatal errors
// ============================================================================

#[test]
fn test_unknown_command() {
    assert_eq!(
        render("ok ${nope} ok"),
        Err(TemplateError::UnknownCommand("nope".to_string()))
    );
}

#[test]
fn test_empty_command() {
    assert_eq!(render("a${}b"), Err(TemplateError::EmptyCommand));
    assert_eq!(render("a${   }b"), Err(TemplateError::EmptyCommand));
}

#[test]
fn test_unmatched_quote() {
    assert_eq!(render("${sep \"abc}"), Err(TemplateError::UnmatchedQuote));
}

#[test]
fn test_token_too_long() {
    let template = format!("${{sep {}}}", "x".repeat(MAX_TOKEN_LEN));
    assert_eq!(
        render(&template),
        Err(TemplateError::TokenTooLong { max: MAX_TOKEN_LEN })
    );
}

#[test]
fn test_too_many_tokens() {
    let template = "${uid} ".repeat(MAX_TOKEN_COUNT / 2 + 1);
    assert_eq!(
        render(&template),
        Err(TemplateError::TooManyTokens {
            max: MAX_TOKEN_COUNT
        })
    );
}

#[test]
fn test_max_tokens_allowed() {
    let template = "${uid} ".repeat(MAX_TOKEN_COUNT / 2);
    assert_eq!(render(&template).unwrap(), "$ ".repeat(MAX_TOKEN_COUNT / 2));
}

#[test]
fn test_output_too_large() {
    let aliases = AliasTable::new();
    let system = FakeSystem::default();
    let renderer = Renderer::new(&system, &aliases).with_capacity(10);

    assert_eq!(renderer.render("0123456789").unwrap(), "0123456789");
    assert_eq!(
        renderer.render("0123456789${uid}"),
        Err(TemplateError::OutputTooLarge { capacity: 10 })
    );
}

#[test]
fn test_output_limit_counts_chars() {
    let aliases = AliasTable::new();
    let system = FakeSystem::default();
    let renderer = Renderer::new(&system, &aliases).with_capacity(3);

    assert_eq!(renderer.render("éàü").unwrap(), "éàü");
}

#[test]
fn test_default_capacity_overflow() {
    let system = FakeSystem::with_cwd(&format!("/{}", "d".repeat(200)));
    let template = "${path}".repeat(6);
    assert_eq!(
        render_with(&system, &template),
        Err(TemplateError::OutputTooLarge {
            capacity: MAX_OUTPUT_LEN
        })
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_render_is_deterministic() {
    let system = FakeSystem::with_branch("feature");
    let template = "${hostname -l}:${branch}${sep :}${path -c -l 8}${uid} ${date}";
    let first = render_with(&system, template).unwrap();
    for _ in 0..5 {
        assert_eq!(render_with(&system, template).unwrap(), first);
    }
    assert_eq!(first, "box.example.org:feature:.../prwd$ 09:26:53");
}
