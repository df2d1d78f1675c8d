use super::{Alphabet, ClassItem, Input, Language, Parser, Regex};
use crate::ParserError;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Parses `pattern` with the default [Language] and the full [Alphabet].
pub fn parse(pattern: &str) -> Result<Regex, ParserError> {
    Parser::new(Language::default()).parse(pattern)
}

fn concat_or_return(result: Option<Regex>, regex: Regex) -> Regex {
    match result {
        None => regex,
        Some(previous) => Regex::concatenation(previous, regex),
    }
}

fn finish(result: Option<Regex>) -> Regex {
    result.unwrap_or(Regex::Epsilon)
}

impl Parser {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            alphabet: Alphabet::Full,
        }
    }

    pub fn with_alphabet(language: Language, alphabet: Alphabet) -> Self {
        Self { language, alphabet }
    }

    pub fn parse(&self, pattern: &str) -> Result<Regex, ParserError> {
        let mut input = Input::new(pattern);
        let result = self.parse_expression(&mut input)?;
        if !input.is_consumed() {
            let position = input.position();
            if let Some(character) = input.next() {
                if self.language.end_characters().contains(&character) {
                    return Err(ParserError::new(
                        format!("found unmatched {}", character),
                        input.annotated(position),
                    ));
                }
            }
            return Err(ParserError::new(
                "unexpected unconsumed input, please report this as a bug".to_string(),
                input.annotated(position),
            ));
        }
        Ok(result)
    }

    fn parse_expression(&self, input: &mut Input) -> Result<Regex, ParserError> {
        let mut result: Option<Regex> = None;
        while let Some(character) = input.lookahead(1) {
            if character == self.language.escape {
                input.consume(1);
                let literal = input
                    .next_or_fail("unexpected end of string, following escape character")?;
                result = Some(concat_or_return(result, Regex::Character(literal)));
            } else if self.language.repetition_characters().contains(&character) {
                input.consume(1);
                let repeatable = match result.take() {
                    Some(regex) => regex,
                    None => {
                        return Err(ParserError::new(
                            format!("{} is not preceded by a repeatable expression", character),
                            input.annotated(input.position() - 1),
                        ))
                    }
                };
                // `x+` desugars to `xx*`; the star is then attached to the copy,
                // which is the rightmost atom of the concatenation.
                let repeatable = if character == self.language.one_or_more {
                    Regex::concatenation(repeatable.clone(), repeatable)
                } else {
                    repeatable
                };
                result = Some(match repeatable {
                    Regex::Concatenation(left, right) => {
                        Regex::Concatenation(left, Rc::new(Regex::Repetition(right)))
                    }
                    other => Regex::Repetition(Rc::new(other)),
                });
            } else if character == self.language.union {
                input.consume(1);
                let left = finish(result.take());
                let right = self.parse_expression(input)?;
                result = Some(Regex::union(left, right));
            } else if character == self.language.group_begin {
                let group = self.parse_group(input)?;
                result = Some(concat_or_return(result, group));
            } else if character == self.language.either_begin {
                let class = self.parse_either_or_neither(input)?;
                result = Some(concat_or_return(result, class));
            } else if character == self.language.any {
                input.consume(1);
                result = Some(concat_or_return(result, Regex::Any(self.alphabet.clone())));
            } else if self.language.end_characters().contains(&character) {
                // The closing marker belongs to an enclosing construct.
                break;
            } else {
                input.consume(1);
                result = Some(concat_or_return(result, Regex::Character(character)));
            }
        }
        Ok(finish(result))
    }

    fn parse_group(&self, input: &mut Input) -> Result<Regex, ParserError> {
        let (begin, end) = self.language.group_characters();
        self.expect(input, begin)?;
        let start_position = input.position() - 1;
        let inner = self.parse_expression(input)?;
        self.expect_closing(input, begin, end, start_position)?;
        Ok(Regex::group(inner))
    }

    fn parse_either_or_neither(&self, input: &mut Input) -> Result<Regex, ParserError> {
        let (begin, end) = self.language.either_characters();
        self.expect(input, begin)?;
        let start_position = input.position() - 1;
        let class = if input.lookahead(1) == Some(self.language.neither_indicator) {
            input.consume(1);
            Regex::Neither(self.parse_class_body(input, end)?, self.alphabet.clone())
        } else {
            Regex::Either(self.parse_class_body(input, end)?)
        };
        self.expect_closing(input, begin, end, start_position)?;
        Ok(class)
    }

    fn parse_class_body(
        &self,
        input: &mut Input,
        until: char,
    ) -> Result<BTreeSet<ClassItem>, ParserError> {
        let mut items: Vec<ClassItem> = Vec::new();
        while let Some(character) = input.lookahead(1) {
            if character == until {
                break;
            }
            input.consume(1);
            if character == self.language.escape {
                let literal = input.next_or_fail("unexpected end of string")?;
                items.push(ClassItem::Character(literal));
            } else if character == self.language.range {
                let start = match items.pop() {
                    Some(ClassItem::Character(start)) => start,
                    Some(ClassItem::Range(..)) => {
                        return Err(ParserError::new(
                            "range start must be a character".to_string(),
                            input.annotated(input.position() - 1),
                        ))
                    }
                    None => {
                        return Err(ParserError::new(
                            "range is missing start".to_string(),
                            input.annotated(input.position() - 2),
                        ))
                    }
                };
                let end = self.parse_class_character(input)?;
                items.push(ClassItem::Range(start, end, self.alphabet.clone()));
            } else {
                items.push(ClassItem::Character(character));
            }
        }
        Ok(items.into_iter().collect())
    }

    fn parse_class_character(&self, input: &mut Input) -> Result<char, ParserError> {
        let character = input.next_or_fail("unexpected end of string")?;
        if character == self.language.escape {
            return input.next_or_fail("unexpected end of string");
        }
        if self.language.special_characters().contains(&character) {
            return Err(ParserError::new(
                format!("expected character, found instruction: {}", character),
                input.annotated(input.position() - 1),
            ));
        }
        Ok(character)
    }

    fn expect(&self, input: &mut Input, expected: char) -> Result<(), ParserError> {
        let actual =
            input.next_or_fail(&format!("unexpected end of string, expected {}", expected))?;
        if actual != expected {
            return Err(ParserError::new(
                format!("expected {}, got {}", expected, actual),
                input.annotated(input.position() - 1),
            ));
        }
        Ok(())
    }

    /// Consumes the closing marker of a surrounded construct, reporting a ranged
    /// annotation from the opening marker when the input ends or closes with the
    /// wrong character.
    fn expect_closing(
        &self,
        input: &mut Input,
        begin: char,
        end: char,
        start_position: usize,
    ) -> Result<(), ParserError> {
        match input.next() {
            None => Err(ParserError::new(
                format!(
                    "unexpected end of string, expected {} corresponding to {}",
                    end, begin
                ),
                input.annotated_range(start_position, input.position()),
            )),
            Some(character) if character != end => Err(ParserError::new(
                format!(
                    "expected {} corresponding to {}, got {}",
                    end, begin, character
                ),
                input.annotated_range(start_position, input.position() - 1),
            )),
            Some(_) => Ok(()),
        }
    }
}
