use pest_derive::Parser;

use crate::compiler::ast::{Constraint, Matcher, Pattern, TokenField};
use crate::error::{HearstError, Result};

#[derive(Parser)]
#[grammar = "compiler/query.pest"]
pub struct PatternGrammar;

type Pair<'i> = pest::iterators::Pair<'i, Rule>;

fn unexpected(pair: &Pair<'_>) -> HearstError {
    HearstError::PatternParse {
        query: pair.as_str().to_string(),
        message: format!("unexpected {:?}", pair.as_rule()),
    }
}

fn first_child<'i>(pair: Pair<'i>) -> Result<Pair<'i>> {
    let query = pair.as_str().to_string();
    pair.into_inner().next().ok_or_else(|| HearstError::PatternParse {
        query,
        message: "empty expression".to_string(),
    })
}

/// Collapse single-element lists, otherwise wrap them with `wrap`
fn collapse<T>(mut items: Vec<T>, wrap: impl FnOnce(Vec<T>) -> T) -> T {
    if items.len() == 1 {
        items.remove(0)
    } else {
        wrap(items)
    }
}

/// Build a pattern from a `query`, `alternation`, `sequence` or
/// `quantified` pair
pub fn build_ast(pair: Pair<'_>) -> Result<Pattern> {
    match pair.as_rule() {
        Rule::query => build_ast(first_child(pair)?),
        Rule::alternation => {
            let branches = pair.into_inner().map(build_ast).collect::<Result<Vec<_>>>()?;
            Ok(collapse(branches, Pattern::Disjunctive))
        }
        Rule::sequence => {
            let steps = pair.into_inner().map(build_ast).collect::<Result<Vec<_>>>()?;
            Ok(collapse(steps, Pattern::Concatenated))
        }
        Rule::quantified => {
            let mut inner = pair.into_inner();
            let term = match inner.next() {
                Some(term) => build_term(term)?,
                None => return Err(HearstError::PatternParse {
                    query: String::new(),
                    message: "missing term".to_string(),
                }),
            };
            match inner.next() {
                Some(quantifier) => {
                    let (min, max) = build_quantifier(quantifier)?;
                    Ok(Pattern::Repetition { pattern: Box::new(term), min, max })
                }
                None => Ok(term),
            }
        }
        _ => Err(unexpected(&pair)),
    }
}

fn build_term(pair: Pair<'_>) -> Result<Pattern> {
    match pair.as_rule() {
        Rule::named_capture => {
            let mut inner = pair.into_inner();
            let (Some(name), Some(body)) = (inner.next(), inner.next()) else {
                return Err(HearstError::PatternParse {
                    query: String::new(),
                    message: "malformed named capture".to_string(),
                });
            };
            Ok(Pattern::NamedCapture {
                name: name.as_str().to_string(),
                pattern: Box::new(build_ast(body)?),
            })
        }
        Rule::group => build_ast(first_child(pair)?),
        Rule::constraint => match pair.into_inner().next() {
            Some(body) => Ok(Pattern::Constraint(build_constraint(body)?)),
            None => Ok(Pattern::Constraint(Constraint::Wildcard)),
        },
        _ => Err(unexpected(&pair)),
    }
}

fn build_quantifier(pair: Pair<'_>) -> Result<(usize, Option<usize>)> {
    let text = pair.as_str().trim();
    match text {
        "?" => return Ok((0, Some(1))),
        "*" => return Ok((0, None)),
        "+" => return Ok((1, None)),
        _ => {}
    }

    let range = first_child(pair)?;
    let query = range.as_str().to_string();
    let parse_number = |p: Pair<'_>| -> Result<usize> {
        p.as_str().parse::<usize>().map_err(|e| HearstError::PatternParse {
            query: query.clone(),
            message: e.to_string(),
        })
    };

    let mut inner = range.into_inner();
    let min = match inner.next() {
        Some(number) => parse_number(number)?,
        None => return Err(HearstError::PatternParse { query, message: "missing bound".to_string() }),
    };
    let max = match (inner.next(), inner.next()) {
        // {n}
        (None, _) => Some(min),
        // {n,}
        (Some(_), None) => None,
        // {n,m}
        (Some(_), Some(number)) => Some(parse_number(number)?),
    };
    if let Some(max) = max {
        if max < min {
            return Err(HearstError::PatternParse {
                query,
                message: format!("upper bound {} below lower bound {}", max, min),
            });
        }
    }
    Ok((min, max))
}

fn build_constraint(pair: Pair<'_>) -> Result<Constraint> {
    match pair.as_rule() {
        Rule::constraint_expr => {
            let children = pair.into_inner().map(build_constraint).collect::<Result<Vec<_>>>()?;
            Ok(collapse(children, Constraint::Disjunctive))
        }
        Rule::conjunction => {
            let children = pair.into_inner().map(build_constraint).collect::<Result<Vec<_>>>()?;
            Ok(collapse(children, Constraint::Conjunctive))
        }
        Rule::unary => build_constraint(first_child(pair)?),
        Rule::negation => Ok(Constraint::Negated(Box::new(build_constraint(first_child(pair)?)?))),
        Rule::field_constraint => {
            let mut inner = pair.into_inner();
            let (Some(name), Some(value)) = (inner.next(), inner.next()) else {
                return Err(HearstError::PatternParse {
                    query: String::new(),
                    message: "malformed field constraint".to_string(),
                });
            };
            let field: TokenField = name.as_str().parse()?;
            let matcher = build_matcher(value)?;
            Ok(Constraint::Field { field, matcher })
        }
        _ => Err(unexpected(&pair)),
    }
}

fn build_matcher(pair: Pair<'_>) -> Result<Matcher> {
    match pair.as_rule() {
        Rule::bare_value => Ok(Matcher::string(pair.as_str())),
        Rule::quoted_value => {
            let body = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            Ok(Matcher::string(body.replace("\\\"", "\"").replace("\\\\", "\\")))
        }
        Rule::regex_value => {
            let body = first_child(pair)?.as_str().replace("\\/", "/");
            Matcher::try_regex(body.clone()).map_err(|source| HearstError::InvalidRegex {
                pattern: body,
                source,
            })
        }
        _ => Err(unexpected(&pair)),
    }
}
