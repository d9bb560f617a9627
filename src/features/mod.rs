//! Domain-level frontend features (auth, profile, session) and their shared
//! logic. Routes import these modules to keep view code focused while state
//! transitions and API handling live in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod profile;
pub(crate) mod session;
