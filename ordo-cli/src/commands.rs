use clap::Args;
use ordo::{Chunked, Key, OrderedCollection, Value};

use crate::error;

type Collection = OrderedCollection<Key, Value>;

#[derive(Debug, Args)]
pub(crate) struct Glue {
    /// Text to put between the printed items
    #[arg(long, default_value = "\n")]
    pub(crate) glue: String,
}

#[derive(Debug, Args)]
pub(crate) struct Get {
    /// Position of the pair, starting at 0
    pub(crate) index: usize,
}

#[derive(Debug, Args)]
pub(crate) struct Slice {
    /// First position to include
    pub(crate) start: usize,
    /// Last position to include (default the last pair)
    pub(crate) end: Option<usize>,
}

#[derive(Debug, Args)]
pub(crate) struct Chunk {
    /// Number of values per chunk. A size below 1 prints all values as one
    /// chunk.
    #[arg(allow_negative_numbers = true)]
    pub(crate) size: isize,
}

pub(crate) fn keys(c: &Collection, glue: &Glue) -> String {
    c.keys().implode(&glue.glue)
}

pub(crate) fn values(c: &Collection, glue: &Glue) -> String {
    c.values().implode(&glue.glue)
}

pub(crate) fn show(c: &Collection) -> String {
    c.to_string()
}

pub(crate) fn get(c: &Collection, get: &Get) -> error::Result<String> {
    Ok(pair(c.get(get.index)?))
}

pub(crate) fn first(c: &Collection) -> error::Result<String> {
    Ok(pair(c.first()?))
}

pub(crate) fn last(c: &Collection) -> error::Result<String> {
    Ok(pair(c.last()?))
}

pub(crate) fn slice(c: &Collection, slice: &Slice) -> error::Result<String> {
    let entries = c.slice(slice.start, slice.end);
    Ok(OrderedCollection::from_pairs(entries.into_iter().collect())?.to_string())
}

pub(crate) fn chunk(c: &Collection, chunk: &Chunk) -> String {
    match c.values().chunk(chunk.size) {
        Chunked::Whole(values) => values.to_string(),
        Chunked::Chunks(chunks) => chunks.implode("\n"),
    }
}

pub(crate) fn implode(c: &Collection, glue: &Glue) -> String {
    c.implode(&glue.glue)
}

fn pair((k, v): (&Key, &Value)) -> String {
    format!("{}: {}", k, v)
}
