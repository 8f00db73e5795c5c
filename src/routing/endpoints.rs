//! The endpoint table.
//!
//! # Responsibilities
//! - Name every exposed endpoint and its auth requirement
//! - Resolve the downstream URL (base lookup + path-parameter suffix)
//! - Carry the per-endpoint client-facing message table
//!
//! # Design Decisions
//! - Immutable `'static` data; created once, never mutated
//! - The message strings are verbatim contract: tests assert on them
//! - `GET /users/{key}` serves both role and id lookups; an all-digit key
//!   is an id, anything else a role

use crate::config::DownstreamConfig;

/// Client-facing message table for one endpoint.
///
/// `unreachable` covers both connection failure and timeout; the two stay
/// distinct in classification and logs but share one message.
#[derive(Debug, Clone, Copy)]
pub struct EndpointMessages {
    /// 500 body when the endpoint's downstream URL is unset.
    pub not_configured: &'static str,
    /// 500 body when the backend is unreachable or times out.
    pub unreachable: &'static str,
    /// 500 body when the call could not be built or sent.
    pub internal: &'static str,
}

const LOGIN_MESSAGES: EndpointMessages = EndpointMessages {
    not_configured: "Authentication API URL not configured",
    unreachable: "Authentication service is unreachable",
    internal: "Internal server error",
};

const USER_CREATION_MESSAGES: EndpointMessages = EndpointMessages {
    not_configured: "User creation API URL not configured",
    unreachable: "User creation service is unreachable",
    internal: "Internal server error",
};

const USER_FETCH_MESSAGES: EndpointMessages = EndpointMessages {
    not_configured: "User creation API URL not configured",
    unreachable: "User fetch service is unreachable",
    internal: "Internal server error",
};

// The ping endpoint never emits the generic message.
const PING_MESSAGES: EndpointMessages = EndpointMessages {
    not_configured: "Authentication API URL not configured",
    unreachable: "OOPS your ping didnt pong too bad!!",
    internal: "OOPS your ping didnt pong too bad!!",
};

/// One exposed endpoint of the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /admin/login`
    Login,
    /// `POST /admin/users`
    CreateUser,
    /// `GET /admin/users`
    ListUsers,
    /// `GET /admin/users/{role}` → `<base>/role/{role}`
    UsersByRole,
    /// `GET|PUT|DELETE /admin/users/{id}` → `<base>/{id}`
    UserById,
    /// `GET /admin/ping`
    Ping,
}

impl Endpoint {
    /// Endpoint name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::CreateUser => "create_user",
            Endpoint::ListUsers => "list_users",
            Endpoint::UsersByRole => "users_by_role",
            Endpoint::UserById => "user_by_id",
            Endpoint::Ping => "ping",
        }
    }

    /// Whether the inbound request must carry an Authorization header.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Login | Endpoint::Ping)
    }

    /// The client-facing message table for this endpoint.
    pub fn messages(&self) -> &'static EndpointMessages {
        match self {
            Endpoint::Login => &LOGIN_MESSAGES,
            Endpoint::CreateUser | Endpoint::ListUsers | Endpoint::UsersByRole => {
                &USER_CREATION_MESSAGES
            }
            Endpoint::UserById => &USER_FETCH_MESSAGES,
            Endpoint::Ping => &PING_MESSAGES,
        }
    }

    /// Look up this endpoint's configured base URL. Empty values count as
    /// unset.
    pub fn base_url<'a>(&self, downstream: &'a DownstreamConfig) -> Option<&'a str> {
        let url = match self {
            Endpoint::Login => &downstream.login_url,
            Endpoint::Ping => &downstream.ping_url,
            Endpoint::CreateUser
            | Endpoint::ListUsers
            | Endpoint::UsersByRole
            | Endpoint::UserById => &downstream.users_base_url,
        };
        url.as_deref().filter(|u| !u.is_empty())
    }

    /// Substitute the path parameter into the downstream URL template.
    pub fn downstream_url(&self, base: &str, param: Option<&str>) -> String {
        match self {
            Endpoint::UsersByRole => format!("{}/role/{}", base, param.unwrap_or_default()),
            Endpoint::UserById => format!("{}/{}", base, param.unwrap_or_default()),
            _ => base.to_string(),
        }
    }

    /// Disambiguate `GET /admin/users/{key}`: an all-digit key is an id
    /// lookup, anything else a role lookup.
    pub fn classify_user_key(key: &str) -> Endpoint {
        if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
            Endpoint::UserById
        } else {
            Endpoint::UsersByRole
        }
    }
}
