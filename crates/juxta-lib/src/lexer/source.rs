//! Continuation suppliers for streaming input.

/// Supplies more text when the tokenizer runs out.
///
/// Returning `None` ends the stream; the tokenizer then drops the source and behaves as
/// if it never had one.
pub trait Source {
    fn pull_more(&mut self) -> Option<String>;
}

impl<F> Source for F
where
    F: FnMut() -> Option<String>,
{
    fn pull_more(&mut self) -> Option<String> {
        self()
    }
}

/// Adapts an iterator of text chunks into a [`Source`].
#[derive(Debug, Clone)]
pub struct Chunks<I>(I);

impl<I> Chunks<I> {
    pub fn new<T>(chunks: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self(chunks.into_iter())
    }
}

impl<I, S> Source for Chunks<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    fn pull_more(&mut self) -> Option<String> {
        self.0.next().map(Into::into)
    }
}
