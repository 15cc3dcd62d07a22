//! Knowledge-base file reader.
//!
//! ```text
//! Weather alerts
//! 2
//! R1: Si Temp >= 25 Entonces Alert = High
//! R2: Si Temp >= 20 y Sky = clear Entonces Alert = Low
//! ```
//!
//! The first line is the domain. Between conditions any token other than
//! `Entonces` is a connector and is skipped.

use std::path::Path;

use prodsys_foundation::{Configuration, Fact, KnowledgeBase, Result, RuleDraft};

use super::read_source;
use crate::tokenizer::Tokenizer;

const IF: &str = "Si";
const THEN: &str = "Entonces";

/// Parses knowledge-base text into its domain and untyped rule drafts.
///
/// # Errors
/// Returns `ParseError` for a bad rule count, a rule not introduced by `Si`,
/// a consequent without `=`, or truncated input.
pub fn parse_rule_drafts(source: &str) -> Result<(String, Vec<RuleDraft>)> {
    parse(&mut Tokenizer::new(source))
}

/// Parses knowledge-base text and validates it against a configuration.
///
/// # Errors
/// As [`parse_rule_drafts`], plus every error of [`KnowledgeBase::build`].
pub fn parse_knowledge_base(source: &str, config: &Configuration) -> Result<KnowledgeBase> {
    let (domain, drafts) = parse_rule_drafts(source)?;
    KnowledgeBase::build(domain, drafts, config)
}

/// Reads, parses, and validates a knowledge-base file.
///
/// # Errors
/// Returns `IoError` if the file cannot be read, otherwise as
/// [`parse_knowledge_base`].
pub fn read_knowledge_base(path: &Path, config: &Configuration) -> Result<KnowledgeBase> {
    let origin = path.display().to_string();
    let source = read_source(path)?;
    let (domain, drafts) = parse(&mut Tokenizer::new(&source).with_origin(origin.clone()))?;
    KnowledgeBase::build(domain, drafts, config).map_err(|e| e.in_source(origin))
}

fn parse(tokens: &mut Tokenizer<'_>) -> Result<(String, Vec<RuleDraft>)> {
    let domain = tokens.rest_of_line().to_string();
    let count = tokens.expect_count("rule count")?;

    let mut drafts = Vec::new();
    for _ in 0..count {
        drafts.push(parse_rule(tokens)?);
    }

    if let Some(token) = tokens.next_token() {
        return Err(tokens.error(
            format!("expected {count} rules, found more starting at '{}'", token.text),
            token,
        ));
    }

    tracing::debug!(domain = %domain, rules = drafts.len(), "read knowledge base");
    Ok((domain, drafts))
}

fn parse_rule(tokens: &mut Tokenizer<'_>) -> Result<RuleDraft> {
    let name_token = tokens.expect("rule name")?;
    let name = name_token.text.strip_suffix(':').unwrap_or(name_token.text);

    let intro = tokens.expect("'Si'")?;
    if intro.text != IF {
        return Err(tokens.error(
            format!("rule {name} must start with '{IF}', found '{}'", intro.text),
            intro,
        ));
    }

    let mut conditions = Vec::new();
    if tokens.peek().is_some_and(|t| t.text == THEN) {
        tokens.next_token();
    } else {
        loop {
            let attribute = tokens.expect("condition attribute")?;
            let operator = tokens.expect("condition operator")?;
            let value = tokens.expect("condition value")?;
            conditions.push((attribute.text, operator.text, value.text));

            let next = tokens.expect("'Entonces' or a connector")?;
            if next.text == THEN {
                break;
            }
        }
    }

    let fact = tokens.expect("consequent fact")?;
    let equals = tokens.expect("'='")?;
    if equals.text != "=" {
        return Err(tokens.error(
            format!("consequent of rule {name} must use '=', found '{}'", equals.text),
            equals,
        ));
    }
    let value = tokens.expect("consequent value")?;

    Ok(conditions.into_iter().fold(
        RuleDraft::new(name, Fact::new(fact.text, value.text)),
        |draft, (attribute, operator, value)| draft.with_condition(attribute, operator, value),
    ))
}
