//! # Extras Core
//!
//! Gameplay script extras for an RMXP-style host engine, reworked from
//! runtime patches into plain functions and state structs that the host
//! integration layer drives explicitly.
//!
//! ## Components
//!
//! - **inspect**: flags events as inspectable via a page annotation and
//!   decides, once per frame, whether a loop animation should play over the
//!   player
//! - **audio**: master volume control, indoor volume ducking, and BGM
//!   pause/resume bookkeeping
//! - **savefile**: offline converter between marshalled save sections and a
//!   single YAML document, for inspecting and editing save data
//! - **config**: TOML-loaded tunables for the above
//!
//! ## Design Philosophy
//!
//! - **Host-Driven**: nothing here owns a loop or a thread; the host calls
//!   in once per frame or per transfer and reads the results back
//! - **Explicit State**: no process-wide globals; every function takes the
//!   views and state it works on as parameters

pub mod audio;
pub mod config;
pub mod inspect;
pub mod savefile;

pub use audio::*;
pub use config::*;
pub use inspect::*;
pub use savefile::*;
