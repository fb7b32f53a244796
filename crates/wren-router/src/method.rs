//! HTTP method tokens.
//!
//! The full set of method tokens a router accepts is declared once, in
//! [`with_methods!`]. The [`Method`] enum and the per-method registrars on
//! [`Router`](crate::Router) are both generated from that single table.

use std::fmt;
use std::str::FromStr;

use crate::error::RouterError;

/// Invokes `$callback!` with the method table as `(Variant, "TOKEN", registrar)` rows.
macro_rules! with_methods {
    ($callback:ident) => {
        $callback! {
            (Acl, "ACL", acl),
            (Bind, "BIND", bind),
            (Checkout, "CHECKOUT", checkout),
            (Connect, "CONNECT", connect),
            (Copy, "COPY", copy),
            (Delete, "DELETE", delete),
            (Get, "GET", get),
            (Head, "HEAD", head),
            (Link, "LINK", link),
            (Lock, "LOCK", lock),
            (MSearch, "M-SEARCH", msearch),
            (Merge, "MERGE", merge),
            (MkActivity, "MKACTIVITY", mkactivity),
            (MkCalendar, "MKCALENDAR", mkcalendar),
            (MkCol, "MKCOL", mkcol),
            (Move, "MOVE", r#move),
            (Notify, "NOTIFY", notify),
            (Options, "OPTIONS", options),
            (Patch, "PATCH", patch),
            (Post, "POST", post),
            (Pri, "PRI", pri),
            (PropFind, "PROPFIND", propfind),
            (PropPatch, "PROPPATCH", proppatch),
            (Purge, "PURGE", purge),
            (Put, "PUT", put),
            (Rebind, "REBIND", rebind),
            (Report, "REPORT", report),
            (Search, "SEARCH", search),
            (Source, "SOURCE", source),
            (Subscribe, "SUBSCRIBE", subscribe),
            (Trace, "TRACE", trace),
            (Unbind, "UNBIND", unbind),
            (Unlink, "UNLINK", unlink),
            (Unlock, "UNLOCK", unlock),
            (Unsubscribe, "UNSUBSCRIBE", unsubscribe),
        }
    };
}

pub(crate) use with_methods;

macro_rules! define_methods {
    ($(($variant:ident, $token:literal, $registrar:ident)),* $(,)?) => {
        /// An HTTP method token a route can be registered for.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Method {
            $(
                #[doc = concat!("`", $token, "`")]
                $variant,
            )*
        }

        /// Every method token, in table order.
        pub const METHODS: &[Method] = &[$(Method::$variant),*];

        impl Method {
            /// Returns the wire token (e.g. `"GET"`, `"M-SEARCH"`).
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)*
                }
            }

            fn from_token(token: &str) -> Option<Self> {
                $(
                    if token.eq_ignore_ascii_case($token) {
                        return Some(Self::$variant);
                    }
                )*
                None
            }
        }
    };
}

with_methods!(define_methods);

impl Method {
    /// Iterates over every method token in table order.
    pub fn all() -> impl Iterator<Item = Method> {
        METHODS.iter().copied()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| RouterError::UnknownMethod(s.to_string()))
    }
}

impl TryFrom<Method> for http::Method {
    type Error = RouterError;

    fn try_from(method: Method) -> Result<Self, Self::Error> {
        Ok(match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
            Method::Patch => Self::PATCH,
            Method::Head => Self::HEAD,
            Method::Options => Self::OPTIONS,
            Method::Trace => Self::TRACE,
            Method::Connect => Self::CONNECT,
            other => Self::from_bytes(other.as_str().as_bytes())
                .map_err(|_| RouterError::UnknownMethod(other.as_str().to_string()))?,
        })
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = RouterError;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}
