//! Double pendulum physics with fixed-step RK4 integration.
//!
//! `double_pendulum` models two point masses on rigid, massless rods swinging
//! frictionlessly under gravity. It owns only the physics: build a
//! [`DoublePendulum`], call [`DoublePendulum::step`] from your own loop, and
//! read bob positions and energies for drawing. Rendering and frame pacing
//! stay with the host.
//!
//! # Features
//!
//! - **Closed-form dynamics**: Lagrangian equations of motion for the two-link chain
//! - **RK4 integration**: Stages run on state snapshots, energy drift stays tiny
//! - **Bounded angles**: Angles wrapped into `(-π, π]` after every step
//! - **Energy bookkeeping**: Kinetic/potential readout with a movable reference
//! - **Observable**: Watch steps through the `StepObserver` trait, or track
//!   drift with `EnergyMonitor`
//! - **`no_std` compatible**: Works in embedded and WASM environments
//! - **`tracing`** (optional feature): construction, wraps and divergence are logged

#![no_std]

pub mod float;
pub mod vec;
pub mod point_mass;
pub mod state;
pub mod angle;
pub mod motion;
pub mod integrator;
pub mod pendulum;
pub mod observer;
pub mod monitor;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point_mass::PointMass;
pub use state::AngularState;
pub use angle::limit_angle;
pub use motion::BobKinematics;
pub use integrator::rk4;
pub use pendulum::{Arm, DoublePendulum, Energy, PendulumArm};
pub use observer::{StepObserver, NoOpStepObserver};
pub use monitor::EnergyMonitor;
pub use config::PendulumConfig;
pub use error::PendulumError;
