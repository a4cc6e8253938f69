//! Desktop input: winit events folded into the steering contract.
//!
//! Tracks held and just-pressed keys from raw window events, then flattens
//! them into a [`Steering`] once per tick. Held movement keys act as fully
//! deflected analog axes; Space and Escape are rising edges.

use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::host::{AxisInput, Steering};

/// Keyboard state between polls.
///
/// `pressed` holds rising edges only: a key held across many frames fires
/// once. OS key repeat is filtered out the same way the held set is: a
/// repeat arrives as another `Pressed` for a key already held.
#[derive(Debug, Default)]
pub struct Input {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl Input {
    /// Empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(key) = event.physical_key {
                match event.state {
                    ElementState::Pressed => {
                        if !self.held.contains(&key) {
                            self.pressed.insert(key);
                        }
                        self.held.insert(key);
                    }
                    ElementState::Released => {
                        self.held.remove(&key);
                    }
                }
            }
        }
    }

    fn axis(&self, positive: &[KeyCode], negative: &[KeyCode]) -> f32 {
        let any = |keys: &[KeyCode]| keys.iter().any(|k| self.held.contains(k));
        match (any(positive), any(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

impl AxisInput for Input {
    /// Flatten the accumulated key state into this tick's steering.
    ///
    /// Consumes the rising edges: a second poll without new events reports
    /// no button presses.
    fn poll(&mut self) -> Steering {
        let steering = Steering {
            turn: self.axis(
                &[KeyCode::KeyA, KeyCode::ArrowLeft],
                &[KeyCode::KeyD, KeyCode::ArrowRight],
            ),
            thrust: self.axis(
                &[KeyCode::KeyW, KeyCode::ArrowUp],
                &[KeyCode::KeyS, KeyCode::ArrowDown],
            ),
            reset: self.pressed.contains(&KeyCode::Space),
            quit: self.pressed.contains(&KeyCode::Escape),
        };
        self.pressed.clear();
        steering
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_deflect_axes() {
        let mut input = Input::new();
        input.held.insert(KeyCode::KeyW);
        input.held.insert(KeyCode::KeyD);

        let steering = input.poll();
        assert_eq!(steering.thrust, 1.0);
        assert_eq!(steering.turn, -1.0);

        // Still held next tick.
        let steering = input.poll();
        assert_eq!(steering.thrust, 1.0);
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut input = Input::new();
        input.held.insert(KeyCode::KeyW);
        input.held.insert(KeyCode::KeyS);
        assert_eq!(input.poll().thrust, 0.0);
    }

    #[test]
    fn test_edge_fires_exactly_once() {
        let mut input = Input::new();
        input.pressed.insert(KeyCode::Space);
        input.held.insert(KeyCode::Space);

        assert!(input.poll().reset);
        // Held across frames, but the edge is gone.
        assert!(!input.poll().reset);
    }

    #[test]
    fn test_quit_edge() {
        let mut input = Input::new();
        input.pressed.insert(KeyCode::Escape);
        assert!(input.poll().quit);
        assert!(!input.poll().quit);
    }
}
