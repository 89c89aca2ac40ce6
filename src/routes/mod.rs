//! One handler module per logical resource.
//!
//! Every handler implements the same contract: resolve the backend target,
//! project the allow-listed headers, invoke with a timeout, translate the
//! outcome into the `{success: bool, ...}` envelope. Deviations are local
//! and explicit: search short-circuits empty terms, adverts degrade instead
//! of erroring, logout always clears the session cookie, home fans out to
//! two concurrent backend calls.

pub mod adverts;
pub mod analytics;
pub mod auth;
pub mod backup;
pub mod categories;
pub mod home;
pub mod permissions;
pub mod quotes;
pub mod roles;
pub mod search;
pub mod tracking;
