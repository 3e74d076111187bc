// src/engine_lib/controller.rs

use glam::Vec2;
use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window},
};
use room_raycaster::Scene;

/// Pointer-drag light placement and the F11 fullscreen toggle.
pub struct LightController {
    cursor_position: Option<Vec2>,
    primary_held: bool,
    fullscreen_toggled: bool,
}

impl LightController {
    pub fn new() -> Self {
        Self {
            cursor_position: None,
            primary_held: false,
            fullscreen_toggled: false,
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor_position(Vec2::new(position.x as f32, position.y as f32));
                false
            }
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                self.set_primary_held(*state == ElementState::Pressed);
                true
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.state == ElementState::Pressed
                    && !key_event.repeat
                    && key_event.physical_key == PhysicalKey::Code(KeyCode::F11)
                {
                    self.toggle_fullscreen(window);
                    return true;
                }
                false
            }
            WindowEvent::Focused(false) => {
                // The release may be delivered to another window.
                self.primary_held = false;
                false
            }
            _ => false,
        }
    }

    pub fn set_cursor_position(&mut self, position: Vec2) {
        self.cursor_position = Some(position);
    }

    pub fn set_primary_held(&mut self, held: bool) {
        self.primary_held = held;
    }

    /// True once after a fullscreen toggle; the caller re-reads the window size.
    pub fn take_fullscreen_toggled(&mut self) -> bool {
        std::mem::take(&mut self.fullscreen_toggled)
    }

    fn toggle_fullscreen(&mut self, window: &Window) {
        if window.fullscreen().is_some() {
            window.set_fullscreen(None);
            log::debug!("Leaving fullscreen");
        } else {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            log::debug!("Entering borderless fullscreen");
        }
        self.fullscreen_toggled = true;
    }

    /// Moves the light to the pointer while the primary button is held.
    /// Returns whether the light moved.
    pub fn apply_to_scene(&self, scene: &mut Scene) -> bool {
        match self.cursor_position {
            Some(position) if self.primary_held => {
                scene.set_light_position(position);
                true
            }
            _ => false,
        }
    }
}

impl Default for LightController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_raycaster::demo_scene::create_demo_scene;
    use room_raycaster::RaycastConfig;

    fn scene() -> Scene {
        create_demo_scene(&RaycastConfig::default(), 1200, 800)
    }

    #[test]
    fn test_light_follows_pointer_only_while_held() {
        let mut scene = scene();
        let mut controller = LightController::new();

        controller.set_cursor_position(Vec2::new(500.0, 400.0));
        assert!(!controller.apply_to_scene(&mut scene));
        assert_eq!(scene.light().center, Vec2::new(150.0, 150.0));

        controller.set_primary_held(true);
        assert!(controller.apply_to_scene(&mut scene));
        assert_eq!(scene.light().center, Vec2::new(500.0, 400.0));

        controller.set_primary_held(false);
        controller.set_cursor_position(Vec2::new(10.0, 10.0));
        controller.apply_to_scene(&mut scene);
        assert_eq!(scene.light().center, Vec2::new(500.0, 400.0));
    }

    #[test]
    fn test_held_without_cursor_does_nothing() {
        let mut scene = scene();
        let mut controller = LightController::new();
        controller.set_primary_held(true);
        assert!(!controller.apply_to_scene(&mut scene));
    }

    #[test]
    fn test_fullscreen_flag_is_taken_once() {
        let mut controller = LightController::new();
        controller.fullscreen_toggled = true;
        assert!(controller.take_fullscreen_toggled());
        assert!(!controller.take_fullscreen_toggled());
    }
}
