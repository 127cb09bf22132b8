//! HTTP request handlers.
//!
//! Handlers extract path segments and JSON bodies, hand them to the services and
//! convert the returned domain models into DTOs. Extractor rejections are taken
//! as values and turned into `AppError::BadRequest`, so malformed input produces
//! the same `{message}` body as every other failure.

pub mod many_side;
pub mod one_side;

#[cfg(test)]
mod test;
