use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::{
    de::{self, DeserializeOwned, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::delimited::{parse_segment, DELIMITER};
use crate::error::ApiError;

/// A delimited list of scalars bound from a single path segment or query value.
///
/// Binds through serde, so it composes with axum's own extractors:
///
/// ```ignore
/// async fn handler(ApiPath((tour_id, show_ids)): ApiPath<(Uuid, Delimited<Uuid>)>) { .. }
/// ```
///
/// `None` means the value was absent or blank; `Some(vec![])` means it was
/// present but held no tokens. A bad token fails deserialization with the
/// [`BindError`](super::BindError) message, which names the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimited<T>(pub Option<Vec<T>>);

impl<T> Delimited<T> {
    pub fn into_inner(self) -> Option<Vec<T>> {
        self.0
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Bound values, empty when absent
    pub fn as_slice(&self) -> &[T] {
        self.0.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> Default for Delimited<T> {
    fn default() -> Self {
        Delimited(None)
    }
}

impl<T> From<Vec<T>> for Delimited<T> {
    fn from(values: Vec<T>) -> Self {
        Delimited(Some(values))
    }
}

impl<'de, T> Deserialize<'de> for Delimited<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(DelimitedVisitor(PhantomData))
    }
}

struct DelimitedVisitor<T>(PhantomData<fn() -> T>);

impl<'de, T> Visitor<'de> for DelimitedVisitor<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Value = Delimited<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a comma-separated list of values")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_segment(Some(value)).map(Delimited).map_err(E::custom)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Delimited(None))
    }
}

impl<T: Display> Serialize for Delimited<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            None => serializer.serialize_none(),
            Some(values) => {
                let separator = DELIMITER.to_string();
                let joined = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(separator.as_str());
                serializer.serialize_str(&joined)
            }
        }
    }
}

/// `Path` extractor that rejects with an [`ApiError`] JSON body
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}

/// `Query` extractor that rejects with an [`ApiError`] JSON body
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(value))
    }
}
