//! Tag-based resolution of polymorphic JSON shapes.
//!
//! Every polymorphic shape is a closed enum. Serialization is derived by serde
//! (`#[serde(tag = ...)]`), so the emitted tag always comes from the variant.
//! Deserialization goes through [`resolve`], which looks the tag up in the
//! shape's static registry.

use std::cell::RefCell;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Error as DeError};
use serde_json::{Map, Value};

thread_local! {
    static LAST_MISMATCH: RefCell<Option<SchemaMismatch>> = const { RefCell::new(None) };
}

/// Resolution failed before a variant could be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaMismatch {
    #[error("expected a JSON object carrying a `{field}` discriminator")]
    NotAnObject { field: &'static str },

    #[error("missing discriminator `{field}`")]
    MissingDiscriminator { field: &'static str },

    #[error("unknown `{field}` discriminator {value}; expected one of {expected:?}")]
    UnknownDiscriminator {
        field: &'static str,
        /// Offending value as JSON text (`"FOO"`, `42`, ...).
        value: String,
        expected: &'static [&'static str],
    },

    #[error("invalid body for `{field}` = {tag:?}: {message}")]
    InvalidBody {
        field: &'static str,
        tag: &'static str,
        message: String,
    },

    #[error("invalid JSON: {0}")]
    Json(String),

    /// A mismatch found inside a larger document.
    #[error("{mismatch} at `{path}`")]
    At {
        /// Dotted path to the discriminator, e.g. `content.header.type`.
        path: String,
        mismatch: Box<SchemaMismatch>,
    },
}

impl SchemaMismatch {
    /// Name of the discriminator field the failure relates to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnObject { field }
            | Self::MissingDiscriminator { field }
            | Self::UnknownDiscriminator { field, .. }
            | Self::InvalidBody { field, .. } => Some(field),
            Self::Json(_) => None,
            Self::At { mismatch, .. } => mismatch.field(),
        }
    }

    /// Path to the offending discriminator within the decoded document.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::At { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The mismatch without its location.
    pub fn root_cause(&self) -> &SchemaMismatch {
        match self {
            Self::At { mismatch, .. } => mismatch.root_cause(),
            other => other,
        }
    }

    fn at(self, parent: &str) -> Self {
        let path = match self.field() {
            Some(field) if parent.is_empty() => field.to_owned(),
            Some(field) => format!("{parent}.{field}"),
            None => parent.to_owned(),
        };
        if path.is_empty() {
            return self;
        }
        Self::At {
            path,
            mismatch: Box::new(self),
        }
    }
}

/// Failure of [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    SchemaMismatch(SchemaMismatch),

    #[error("invalid JSON: {source}")]
    Json {
        /// Dotted path to the offending value; `None` at the document root.
        path: Option<String>,
        #[source]
        source: serde_json::Error,
    },
}

/// A closed sum type selected by a string discriminator.
pub trait Discriminated: Sized {
    /// JSON field holding the tag (`type`, `format`).
    const FIELD: &'static str;

    /// Every registered tag, in declaration order.
    const TAGS: &'static [&'static str];

    /// Tag of this variant.
    fn tag(&self) -> &'static str;

    /// Build the variant registered under `tag` from the remaining fields.
    ///
    /// Returns `None` when `tag` is not registered. Body errors carry the
    /// path inside the variant.
    fn from_tagged(
        tag: &str,
        body: Value,
    ) -> Option<Result<Self, serde_path_to_error::Error<serde_json::Error>>>;

    /// Resolve an already-parsed JSON value.
    fn resolve(value: Value) -> Result<Self, SchemaMismatch> {
        resolve(value)
    }

    /// Parse and resolve JSON text.
    fn from_json(json: &str) -> Result<Self, SchemaMismatch> {
        let value: Value =
            serde_json::from_str(json).map_err(|err| SchemaMismatch::Json(err.to_string()))?;
        resolve(value)
    }
}

/// Resolve `value` into the variant of `T` registered under its discriminator.
pub fn resolve<T: Discriminated>(value: Value) -> Result<T, SchemaMismatch> {
    let Value::Object(mut map) = value else {
        return Err(SchemaMismatch::NotAnObject { field: T::FIELD });
    };
    let tag = take_tag::<T>(&mut map)?;
    let Some(registered) = T::TAGS.iter().copied().find(|known| *known == tag) else {
        return Err(SchemaMismatch::UnknownDiscriminator {
            field: T::FIELD,
            value: Value::String(tag).to_string(),
            expected: T::TAGS,
        });
    };

    match T::from_tagged(registered, Value::Object(map)) {
        Some(Ok(variant)) => Ok(variant),
        Some(Err(err)) => Err(SchemaMismatch::InvalidBody {
            field: T::FIELD,
            tag: registered,
            message: err.to_string(),
        }),
        None => Err(SchemaMismatch::UnknownDiscriminator {
            field: T::FIELD,
            value: Value::String(registered.to_owned()).to_string(),
            expected: T::TAGS,
        }),
    }
}

fn take_tag<T: Discriminated>(map: &mut Map<String, Value>) -> Result<String, SchemaMismatch> {
    match map.remove(T::FIELD) {
        None | Some(Value::Null) => Err(SchemaMismatch::MissingDiscriminator { field: T::FIELD }),
        Some(Value::String(tag)) => Ok(tag),
        Some(other) => Err(SchemaMismatch::UnknownDiscriminator {
            field: T::FIELD,
            value: other.to_string(),
            expected: T::TAGS,
        }),
    }
}

/// Serde entry point used by the `Deserialize` impls of polymorphic shapes.
pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Discriminated,
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    resolve(value).map_err(|mismatch| {
        let err = D::Error::custom(&mismatch);
        LAST_MISMATCH.with(|slot| *slot.borrow_mut() = Some(mismatch));
        err
    })
}

/// Deserialize a whole JSON document, locating discriminator failures.
///
/// Unlike `serde_json::from_str`, an unknown tag nested anywhere in the
/// document comes back as a typed [`SchemaMismatch::At`] naming the path to
/// the discriminator, e.g. `messages[0].content.type`.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, DecodeError> {
    LAST_MISMATCH.with(|slot| *slot.borrow_mut() = None);
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let result: Result<T, _> = serde_path_to_error::deserialize(&mut deserializer);
    let recorded = LAST_MISMATCH.with(|slot| slot.borrow_mut().take());

    match result {
        Ok(value) => {
            deserializer
                .end()
                .map_err(|source| DecodeError::Json { path: None, source })?;
            Ok(value)
        }
        Err(err) => {
            let path = err.path().to_string();
            let path = if path == "." { String::new() } else { path };
            let source = err.into_inner();
            match recorded {
                // The recorded mismatch may belong to an alternative serde gave up on.
                Some(mismatch) if source.to_string().starts_with(&mismatch.to_string()) => {
                    Err(DecodeError::SchemaMismatch(mismatch.at(&path)))
                }
                _ => Err(DecodeError::Json {
                    path: (!path.is_empty()).then_some(path),
                    source,
                }),
            }
        }
    }
}

/// Implements [`Discriminated`] and `Deserialize` from an explicit tag table.
///
/// The enum itself derives `Serialize` with a matching `#[serde(tag = ...)]`
/// and per-variant `rename`s.
macro_rules! discriminated {
    ($ty:ident, $field:literal { $($tag:literal => $variant:ident),+ $(,)? }) => {
        impl $crate::domain::discriminator::Discriminated for $ty {
            const FIELD: &'static str = $field;
            const TAGS: &'static [&'static str] = &[$($tag),+];

            fn tag(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $tag,)+
                }
            }

            fn from_tagged(
                tag: &str,
                body: ::serde_json::Value,
            ) -> Option<Result<Self, ::serde_path_to_error::Error<::serde_json::Error>>> {
                match tag {
                    $($tag => Some(::serde_path_to_error::deserialize(body).map(Self::$variant)),)+
                    _ => None,
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::domain::discriminator::deserialize(deserializer)
            }
        }
    };
}

pub(crate) use discriminated;
