/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/

//! Request options accepted by the authenticated request helper.

use crate::error::AppError;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

/// Body of an outgoing request
///
/// Bodies are kept in an owned, replayable form because the helper may have to
/// send the same request twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// Raw text, sent as-is
    Text(String),
    /// Raw bytes, sent as-is
    Bytes(Vec<u8>),
    /// Multipart form; the transport computes the `Content-Type` boundary
    Multipart(MultipartForm),
}

impl RequestBody {
    /// True for multipart form payloads
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// A single field of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    /// Plain text field
    Text {
        /// Field name
        name: String,
        /// Field value
        value: String,
    },
    /// File field
    File {
        /// Field name
        name: String,
        /// File name reported to the server
        file_name: String,
        /// MIME type of the content, if known
        mime: Option<String>,
        /// File content
        content: Vec<u8>,
    },
}

/// Replayable multipart form payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    /// Creates an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text field
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a file field
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: Option<String>,
        content: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            mime,
            content,
        });
        self
    }

    /// Fields of the form, in insertion order
    #[must_use]
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Builds a transport form; called once per attempt
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when a MIME type cannot be parsed.
    pub fn to_form(&self) -> Result<Form, AppError> {
        let mut form = Form::new();
        for part in &self.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
                FormPart::File {
                    name,
                    file_name,
                    mime,
                    content,
                } => {
                    let mut file = Part::bytes(content.clone()).file_name(file_name.clone());
                    if let Some(mime) = mime {
                        file = file.mime_str(mime).map_err(|e| {
                            AppError::InvalidInput(format!("invalid mime type {mime}: {e}"))
                        })?;
                    }
                    form.part(name.clone(), file)
                }
            };
        }
        Ok(form)
    }
}

/// Options for a single call to the request helper
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// Caller supplied headers; copied, never mutated, by the helper
    pub headers: HeaderMap,
    /// Request body
    pub body: RequestBody,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    /// Creates options for the given method with no headers and no body
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    /// GET without body
    #[must_use]
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// POST without body
    #[must_use]
    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    /// PUT without body
    #[must_use]
    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    /// PATCH without body
    #[must_use]
    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    /// DELETE without body
    #[must_use]
    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Adds a header
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when the name or value is not a valid header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, AppError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidInput(format!("invalid header name {name}: {e}")))?;
        self.headers.insert(name, HeaderValue::from_str(value)?);
        Ok(self)
    }

    /// Serializes `body` as JSON
    ///
    /// The `Content-Type` is left to the helper, which defaults it to JSON.
    ///
    /// # Errors
    /// Returns `AppError::SerializationError` when `body` cannot be serialized.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        let text = serde_json::to_string(body)
            .map_err(|e| AppError::SerializationError(e.to_string()))?;
        self.body = RequestBody::Text(text);
        Ok(self)
    }

    /// Sets a raw text body
    #[must_use]
    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Text(body.into());
        self
    }

    /// Sets a raw byte body
    #[must_use]
    pub fn with_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = RequestBody::Bytes(body);
        self
    }

    /// Sets a multipart form body
    #[must_use]
    pub fn with_form(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }
}
