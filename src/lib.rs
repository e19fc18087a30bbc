//! # neo_orbit
//!
//! Orbital kinematics and orbit lookup for a near-Earth asteroid visualization.
//!
//! - [`orbital_elements`] – validated planar elements `(a, e, P)`.
//! - [`kepler`] – position on the ellipse, Earth position and per-frame scalars.
//! - [`orbit_path`] – closed polylines for the asteroid orbit and Earth's reference circle.
//! - [`orbit_clock`] – phase angles advanced once per frame, with speed and pause controls.
//! - [`body_catalog`] – offline table of well-known minor bodies.
//! - [`sbdb`] – JPL Small-Body Database transports and payload parsing.
//! - [`resolver`] – catalog → local proxy → public relay lookup chain.
//! - [`session`] – single owner of the current orbit, clock and paths.
//!
//! ```rust,no_run
//! use neo_orbit::{LookupConfig, LookupEnv, Session};
//!
//! # async fn run() -> Result<(), neo_orbit::OrbitError> {
//! let env = LookupEnv::new(LookupConfig::default())?;
//! let resolver = env.resolver()?;
//!
//! let mut session = Session::new();
//! let outcome = session.search(&resolver, "Bennu").await?;
//! println!("{}", outcome.status_message("bennu"));
//! println!("{:.3} AU", session.tick().distance_au);
//! # Ok(())
//! # }
//! ```

pub mod body_catalog;
pub mod constants;
pub mod env_state;
pub mod kepler;
pub mod orbit_clock;
pub mod orbit_errors;
pub mod orbit_path;
pub mod orbital_elements;
pub mod resolver;
pub mod sbdb;
pub mod session;

pub use env_state::{LookupConfig, LookupEnv};
pub use kepler::FrameState;
pub use orbit_clock::OrbitClock;
pub use orbit_errors::OrbitError;
pub use orbit_path::OrbitPath;
pub use orbital_elements::OrbitalElements;
pub use resolver::{OrbitResolver, SearchOutcome};
pub use sbdb::transport::LookupTransport;
pub use session::{OrbitRenderer, Session};
