//! The conventional handler shape.
//!
//! Routers store handlers as an opaque `H`. Applications that do not bring
//! their own handler type can use [`Handler`]: a shared closure taking the
//! request, the response and a [`Next`] continuation, either synchronous or
//! returning a future. Nothing in this crate invokes handlers.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

/// A boxed future, as returned by async handlers.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error a handler passes on to the next one in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Creates an error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Continuation handed to a handler.
///
/// Calling it passes control to the next matching entry; failing it passes
/// an error along instead.
pub struct Next(Box<dyn FnOnce(Option<HandlerError>) + Send>);

impl Next {
    /// Wraps a continuation.
    pub fn new(f: impl FnOnce(Option<HandlerError>) + Send + 'static) -> Self {
        Self(Box::new(f))
    }

    /// A continuation that does nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Continues with the next handler.
    pub fn call(self) {
        (self.0)(None);
    }

    /// Continues with an error.
    pub fn fail(self, error: HandlerError) {
        (self.0)(Some(error));
    }
}

impl fmt::Debug for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next").finish_non_exhaustive()
    }
}

type SyncFn<Req, Res> = dyn Fn(&mut Req, &mut Res, Next) + Send + Sync;
type AsyncFn<Req, Res> = dyn for<'a> Fn(&'a mut Req, &'a mut Res, Next) -> BoxFuture<'a, ()> + Send + Sync;

/// A request handler, synchronous or asynchronous.
pub enum Handler<Req, Res> {
    /// Runs to completion before returning.
    Sync(Arc<SyncFn<Req, Res>>),
    /// Returns a future that drives the handler.
    Async(Arc<AsyncFn<Req, Res>>),
}

impl<Req, Res> Handler<Req, Res> {
    /// Wraps a synchronous closure.
    pub fn from_sync<F>(f: F) -> Self
    where
        F: Fn(&mut Req, &mut Res, Next) + Send + Sync + 'static,
    {
        Self::Sync(Arc::new(f))
    }

    /// Wraps a closure returning a boxed future.
    pub fn from_async<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a mut Req, &'a mut Res, Next) -> BoxFuture<'a, ()> + Send + Sync + 'static,
    {
        Self::Async(Arc::new(f))
    }

    /// Returns true for asynchronous handlers.
    #[must_use]
    pub fn is_async(&self) -> bool {
        matches!(self, Self::Async(_))
    }

    /// Returns true if both values share the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sync(a), Self::Sync(b)) => Arc::ptr_eq(a, b),
            (Self::Async(a), Self::Async(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<Req, Res> Clone for Handler<Req, Res> {
    fn clone(&self) -> Self {
        match self {
            Self::Sync(f) => Self::Sync(Arc::clone(f)),
            Self::Async(f) => Self::Async(Arc::clone(f)),
        }
    }
}

impl<Req, Res> fmt::Debug for Handler<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("Handler::Sync"),
            Self::Async(_) => f.write_str("Handler::Async"),
        }
    }
}
