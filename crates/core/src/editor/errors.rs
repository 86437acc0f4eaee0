//! Editor errors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// A field the editor validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Product image
    Image,

    /// Product name
    Name,

    /// Customer name
    CustomerName,

    /// Customer phone number
    PhoneNumber,
}

impl Field {
    /// Human-readable label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Image => "image",
            Field::Name => "product name",
            Field::CustomerName => "customer name",
            Field::PhoneNumber => "phone number",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Every required field that is missing from a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("missing required fields: {}", join(.missing))]
pub struct ValidationErrors {
    missing: Vec<Field>,
}

impl ValidationErrors {
    pub(crate) fn push(&mut self, field: Field) {
        self.missing.push(field);
    }

    pub(crate) fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.missing.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// The missing fields, in form order.
    pub fn missing(&self) -> &[Field] {
        &self.missing
    }

    /// Whether `field` failed validation.
    pub fn contains(&self, field: Field) -> bool {
        self.missing.contains(&field)
    }
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while attaching an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Nothing was supplied.
    #[error("image is empty")]
    Empty,

    /// The image exceeds the configured cap.
    #[error("image is {size} bytes; the limit is {limit} bytes")]
    TooLarge {
        /// Size of the supplied image
        size: usize,

        /// Configured cap
        limit: usize,
    },

    /// The leading bytes match none of the accepted formats.
    #[error("unsupported image format (expected PNG, JPEG, GIF or WebP)")]
    UnsupportedFormat,

    /// A data URL could not be decoded.
    #[error("malformed image data URL")]
    MalformedDataUrl,
}

/// Errors raised by the editor itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A submission is in flight; inputs and submit are disabled.
    #[error("a submission is already pending")]
    Pending,

    /// The record was committed; the editor is finished.
    #[error("the editor has already been committed")]
    Committed,

    /// The draft is incomplete.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The supplied image was rejected.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Failure of [`ProductEditor::submit`](super::ProductEditor::submit).
#[derive(Debug, Error)]
pub enum SubmitError<E> {
    /// The editor refused to submit.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// The commit function rejected the payload.
    #[error("submission rejected")]
    Rejected(#[source] E),
}
