//! Composable text codecs.
//!
//! A `Codec<T>` pairs an encoder `&T -> String` with a fallible decoder
//! `&str -> Result<T, CodecError>`. Codecs for lists, bags and optional
//! values are built from the codec of their elements. Encoded values never
//! contain a space or a newline, so they can travel as one argument of a
//! protocol line.

use std::fmt;
use std::sync::Arc;

use super::CodecError;
use crate::core::Multiset;

type EncodeFn<T> = dyn Fn(&T) -> String + Send + Sync;
type DecodeFn<T> = dyn Fn(&str) -> Result<T, CodecError> + Send + Sync;

/// Encoder/decoder pair between `T` and a line-safe string.
pub struct Codec<T> {
    encode: Arc<EncodeFn<T>>,
    decode: Arc<DecodeFn<T>>,
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        Self {
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for Codec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Codec")
    }
}

impl<T: 'static> Codec<T> {
    /// Build a codec from its two halves.
    pub fn new(
        encode: impl Fn(&T) -> String + Send + Sync + 'static,
        decode: impl Fn(&str) -> Result<T, CodecError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    #[must_use]
    pub fn encode(&self, value: &T) -> String {
        (self.encode)(value)
    }

    pub fn decode(&self, text: &str) -> Result<T, CodecError> {
        (self.decode)(text)
    }

    /// Codec for one of a fixed list of values, encoded as its index.
    ///
    /// Encoding a value missing from `values` panics.
    pub fn one_of(values: Vec<T>) -> Self
    where
        T: PartialEq + Clone + fmt::Debug + Send + Sync,
    {
        let values = Arc::new(values);
        let lookup = Arc::clone(&values);
        Self::new(
            move |value| match lookup.iter().position(|v| v == value) {
                Some(index) => index.to_string(),
                None => panic!("{:?} is not an encodable value", value),
            },
            move |text| {
                let index = parse_index(text)?;
                values.get(index).cloned().ok_or(CodecError::OutOfRange {
                    index,
                    len: values.len(),
                })
            },
        )
    }

    /// Codec for a list, elements joined by `separator`.
    ///
    /// The empty list encodes as the empty string.
    pub fn list_of(codec: &Codec<T>, separator: char) -> Codec<Vec<T>> {
        let encoder = codec.clone();
        let decoder = codec.clone();
        Codec::new(
            move |values: &Vec<T>| {
                values
                    .iter()
                    .map(|v| encoder.encode(v))
                    .collect::<Vec<_>>()
                    .join(&separator.to_string())
            },
            move |text| split(text, separator).map(|part| decoder.decode(part)).collect(),
        )
    }

    /// Codec for a multiset, encoded as the list of its elements in
    /// ascending order.
    pub fn bag_of(codec: &Codec<T>, separator: char) -> Codec<Multiset<T>>
    where
        T: Ord + Clone,
    {
        let encoder = codec.clone();
        let decoder = codec.clone();
        Codec::new(
            move |bag: &Multiset<T>| {
                bag.iter()
                    .map(|v| encoder.encode(v))
                    .collect::<Vec<_>>()
                    .join(&separator.to_string())
            },
            move |text| split(text, separator).map(|part| decoder.decode(part)).collect(),
        )
    }

    /// Codec for an optional value; `None` encodes as the empty string.
    pub fn optional(codec: &Codec<T>) -> Codec<Option<T>> {
        let encoder = codec.clone();
        let decoder = codec.clone();
        Codec::new(
            move |value: &Option<T>| value.as_ref().map(|v| encoder.encode(v)).unwrap_or_default(),
            move |text| {
                if text.is_empty() {
                    Ok(None)
                } else {
                    decoder.decode(text).map(Some)
                }
            },
        )
    }
}

/// Split `text` on `separator`; the empty string has no part.
pub(crate) fn split(text: &str, separator: char) -> impl Iterator<Item = &str> {
    let mut parts = text.split(separator);
    if text.is_empty() {
        parts.next();
    }
    parts
}

/// Split `text` into exactly `N` fields.
pub(crate) fn fields<const N: usize>(text: &str, separator: char) -> Result<[&str; N], CodecError> {
    let parts: Vec<&str> = text.split(separator).collect();
    let found = parts.len();
    parts
        .try_into()
        .map_err(|_| CodecError::FieldCount { expected: N, found })
}

pub(crate) fn parse_index(text: &str) -> Result<usize, CodecError> {
    text.parse::<usize>()
        .map_err(|_| CodecError::InvalidInteger(text.to_string()))
}
