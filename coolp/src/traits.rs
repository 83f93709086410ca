use crate::Token;

/// A source of COOL tokens
///
/// The parser pulls one token at a time and never looks further ahead than the token it
/// currently holds. `None` marks the end of input. Any iterator over `Token`s is a token
/// source, which is what the scanner in `extra::scanner` and most tests rely on.
pub trait TokenSource {
    fn next_token(&mut self) -> Option<Token>;
}

impl<I> TokenSource for I
where
    I: Iterator<Item = Token>,
{
    fn next_token(&mut self) -> Option<Token> {
        self.next()
    }
}
