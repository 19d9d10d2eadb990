//! Auth module — session state + permission normalization + capability checks.
//!
//! # Resources
//!
//! - **PermissionSet** — backend permission payload, normalized once
//! - **Session** — logged-in user identity plus their permission set
//! - **Capability checks** — pure boolean questions over the set
//!
//! Backends answer "what may this user do" in more than one shape: a
//! list of `{page, actions}` grants, or an older map keyed by page
//! name, with `"*"`/`"global"`/`"any"` wildcards sprinkled through
//! both. All of that is collapsed into a [`PermissionSet`] the moment
//! a session is built; after that, feature code asks
//! [`has_capability`] and friends and never handles raw payloads.
//!
//! # Usage
//!
//! ```ignore
//! use auth::{Session, actions, pages, require_capability};
//!
//! let session = Session::from_payload(user_id, &payload);
//! if session.can_view(pages::LEADS) {
//!     // render the leads surface
//! }
//! require_capability(&session, pages::LEADS, actions::DELETE)?;
//! ```

pub mod model;
pub mod service;

pub use model::{ActionSet, Grant, PageScope, PermissionSet, Session};
pub use service::AuthError;
pub use service::permissions::{
    VIEW_FAMILY, actions, can_view, has_capability, pages, require_capability, require_session,
    session_has_capability,
};
