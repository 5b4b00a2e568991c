//! Simulated authentication for Bozor.
//!
//! There is no real backend: "logging in" means checking a hardcoded demo
//! credential pair after a fixed fake-network delay. The delay is modeled
//! as an explicit, cancellable [`Deferred`] task so an abandoned view can
//! drop the pending result without corrupting any state.
//!
//! The storefront's two fake-auth behaviors are deliberately
//! inconsistent: the login screen requires the demo credential pair,
//! while order submission only requires a complete delivery form.

pub mod deferred;
pub mod error;
pub mod login;
pub mod session;

pub use deferred::{defer, Deferred};
pub use error::AuthError;
pub use login::{Credentials, SimulatedAuth, DEMO_EMAIL, DEMO_PASSWORD};
pub use session::{Session, SessionId, UserProfile};
