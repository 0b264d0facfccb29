// Input handling system
//
// Input reaches the simulation as per-tick `InputFrame`s produced by a
// pollable `InputDevice`. The match controller is agnostic to whether a
// device is scripted, a live capture shim, or an AI adapter.
//
// - `action`: the discrete in-game actions
// - `frame`: the set of action flags held for one tick
// - `device`: pollable frame sources

pub mod action;
pub mod device;
pub mod frame;

// Re-export commonly used types
pub use action::Action;
pub use device::{InputDevice, ScriptedInput};
pub use frame::InputFrame;
