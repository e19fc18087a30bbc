//! # Simulation session
//!
//! [`Session`] owns all the mutable state of one visualization: the current
//! [`OrbitalElements`], the [`OrbitClock`], the cached [`OrbitPath`]s and the last evaluated
//! [`FrameState`]. The host render loop holds it by `&mut` and calls [`Session::render_frame`]
//! once per frame; searches feed their [`SearchOutcome`] back through
//! [`Session::apply_outcome`].
//!
//! ## Overlapping searches
//!
//! Each search is tagged with a [`SearchTicket`] taken from a generation counter. An outcome
//! carrying a ticket older than the most recent one is dropped, so a slow lookup can never
//! overwrite the body loaded by a later search.
//!
//! ## Typical loop
//!
//! ```rust
//! use neo_orbit::session::{OrbitRenderer, Session};
//! use neo_orbit::{FrameState, OrbitPath, OrbitalElements};
//!
//! struct Console;
//!
//! impl OrbitRenderer for Console {
//!     fn set_paths(&mut self, _asteroid: &OrbitPath, _earth: &OrbitPath) {}
//!     fn draw(&mut self, elements: &OrbitalElements, frame: &FrameState) {
//!         println!("{} at {:.3} AU", elements.name(), frame.distance_au);
//!     }
//! }
//!
//! let mut session = Session::new();
//! let mut console = Console;
//! for _ in 0..3 {
//!     session.render_frame(&mut console);
//! }
//! ```

use tracing::{debug, info};

use crate::{
    body_catalog,
    constants::VISUAL_SCALE,
    kepler::FrameState,
    orbit_clock::OrbitClock,
    orbit_errors::OrbitError,
    orbit_path::OrbitPath,
    orbital_elements::OrbitalElements,
    resolver::{OrbitResolver, SearchOutcome},
    sbdb::transport::LookupTransport,
};

/// Drawing side of the visualization.
pub trait OrbitRenderer {
    /// Replace the static line strips. Called before the first frame and after each new body.
    fn set_paths(&mut self, asteroid: &OrbitPath, earth: &OrbitPath);

    /// Draw one frame and refresh the displayed scalars.
    fn draw(&mut self, elements: &OrbitalElements, frame: &FrameState);
}

/// Generation number identifying one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone)]
pub struct Session {
    elements: OrbitalElements,
    clock: OrbitClock,
    asteroid_path: OrbitPath,
    earth_path: OrbitPath,
    frame: FrameState,
    paths_changed: bool,
    search_generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session displaying 433 Eros.
    pub fn new() -> Self {
        Self::with_elements(body_catalog::default_body())
    }

    /// Session displaying `elements`, clock at rest.
    pub fn with_elements(elements: OrbitalElements) -> Self {
        let clock = OrbitClock::new();
        let frame = FrameState::evaluate(&elements, clock.asteroid_angle(), clock.earth_angle());

        Session {
            asteroid_path: OrbitPath::asteroid(&elements),
            earth_path: OrbitPath::earth(),
            elements,
            clock,
            frame,
            paths_changed: true,
            search_generation: 0,
        }
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn clock(&self) -> &OrbitClock {
        &self.clock
    }

    pub fn asteroid_path(&self) -> &OrbitPath {
        &self.asteroid_path
    }

    pub fn earth_path(&self) -> &OrbitPath {
        &self.earth_path
    }

    /// Last evaluated frame.
    pub fn frame(&self) -> &FrameState {
        &self.frame
    }

    pub fn set_speed(&mut self, delta: f64) {
        self.clock.set_speed(delta);
    }

    pub fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
    }

    /// Make `elements` the current body.
    ///
    /// The asteroid path is regenerated, the asteroid goes back to perihelion and the Earth
    /// keeps its phase.
    pub fn load_elements(&mut self, elements: OrbitalElements) {
        info!(name = elements.name(), "loading orbit");
        self.asteroid_path = OrbitPath::asteroid(&elements);
        self.elements = elements;
        self.clock.reset_asteroid();
        self.frame = self.evaluate();
        self.paths_changed = true;
    }

    fn evaluate(&self) -> FrameState {
        FrameState::evaluate_scaled(
            &self.elements,
            self.clock.asteroid_angle(),
            self.clock.earth_angle(),
            VISUAL_SCALE,
        )
    }

    /// Advance the clock by one tick and re-evaluate the model.
    ///
    /// While paused the previous frame is returned untouched.
    pub fn tick(&mut self) -> &FrameState {
        if self.clock.advance() {
            self.frame = self.evaluate();
        }
        &self.frame
    }

    /// One iteration of the render loop: tick, then hand the result to `renderer`.
    pub fn render_frame<R: OrbitRenderer + ?Sized>(&mut self, renderer: &mut R) {
        if self.paths_changed {
            renderer.set_paths(&self.asteroid_path, &self.earth_path);
            self.paths_changed = false;
        }
        self.tick();
        renderer.draw(&self.elements, &self.frame);
    }

    /// Open a new search; every ticket issued before this one becomes stale.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.search_generation += 1;
        SearchTicket(self.search_generation)
    }

    /// Apply the outcome of the search identified by `ticket`.
    ///
    /// Return
    /// ------
    /// * `true` when a new body was loaded, `false` for stale tickets and for outcomes other
    ///   than [`SearchOutcome::Found`].
    pub fn apply_outcome(&mut self, ticket: SearchTicket, outcome: &SearchOutcome) -> bool {
        if ticket.0 != self.search_generation {
            debug!(
                ticket = ticket.0,
                latest = self.search_generation,
                "dropping stale search outcome"
            );
            return false;
        }

        match outcome {
            SearchOutcome::Found(elements) => {
                self.load_elements(elements.clone());
                true
            }
            _ => false,
        }
    }

    /// Resolve `query` and apply its outcome.
    ///
    /// Return
    /// ------
    /// * The outcome, or [`OrbitError::EmptyQuery`] for a blank query.
    pub async fn search<P, F>(
        &mut self,
        resolver: &OrbitResolver<P, F>,
        query: &str,
    ) -> Result<SearchOutcome, OrbitError>
    where
        P: LookupTransport,
        F: LookupTransport,
    {
        let ticket = self.begin_search();
        let outcome = resolver.resolve(query).await?;
        self.apply_outcome(ticket, &outcome);
        Ok(outcome)
    }
}
