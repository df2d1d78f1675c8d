//! Shared debugging utilities.

mod logger;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A enum structure to assign multiple level debugging to the tokenizer and matchers.
///
/// The wrapped value is the label printed with every log line; the variant selects
/// how much is reported, from nothing ([None](Log::None)) to everything
/// ([Verbose](Log::Verbose)).
pub enum Log<T> {
    None,
    Default(T),
    Success(T),
    Result(T),
    Verbose(T),
}
