// src/demo_scene.rs

use glam::Vec2;
use crate::config::RaycastConfig;
use crate::scene::Scene;
use crate::shape::{Circle, Line, Rectangle, Rgba, Shape};

const WALL_COLOR: Rgba = Rgba::new(100, 100, 120, 255);
const PILLAR_COLOR: Rgba = Rgba::new(80, 80, 100, 255);
const FURNITURE_COLOR: Rgba = Rgba::new(120, 80, 60, 255);
const WALL_THICKNESS: f32 = 8.0;

fn wall(x1: f32, y1: f32, x2: f32, y2: f32) -> Shape {
    Line::new(Vec2::new(x1, y1), Vec2::new(x2, y2), WALL_THICKNESS, WALL_COLOR).into()
}

fn pillar(x: f32, y: f32, radius: f32) -> Shape {
    Circle::new(x, y, radius, PILLAR_COLOR).into()
}

fn furniture(x: f32, y: f32, width: f32, height: f32) -> Shape {
    Rectangle::new(x, y, width, height, FURNITURE_COLOR).into()
}

/// Fixed floor plan laid out for a 1200x800 window: an outer boundary,
/// six rooms (three with doorway gaps), five pillars and two pieces of furniture.
pub fn create_room_map() -> Vec<Shape> {
    vec![
        // Outer boundary
        wall(50.0, 50.0, 1150.0, 50.0),
        wall(1150.0, 50.0, 1150.0, 750.0),
        wall(1150.0, 750.0, 50.0, 750.0),
        wall(50.0, 750.0, 50.0, 50.0),
        // Room 1, top left
        wall(50.0, 300.0, 350.0, 300.0),
        wall(350.0, 300.0, 350.0, 50.0),
        // Room 2, top middle; doorway between y=200 and y=280
        wall(450.0, 50.0, 450.0, 200.0),
        wall(450.0, 280.0, 450.0, 350.0),
        wall(450.0, 350.0, 750.0, 350.0),
        wall(750.0, 350.0, 750.0, 50.0),
        // Room 3, top right
        wall(850.0, 50.0, 850.0, 300.0),
        wall(850.0, 300.0, 1150.0, 300.0),
        // Room 4, bottom left; doorway between x=250 and x=330
        wall(50.0, 450.0, 250.0, 450.0),
        wall(330.0, 450.0, 400.0, 450.0),
        wall(400.0, 450.0, 400.0, 750.0),
        // Room 5, bottom middle
        wall(500.0, 500.0, 700.0, 500.0),
        wall(700.0, 500.0, 700.0, 750.0),
        // Room 6, bottom right; doorway between y=470 and y=550
        wall(800.0, 750.0, 800.0, 550.0),
        wall(800.0, 470.0, 800.0, 400.0),
        wall(800.0, 400.0, 1150.0, 400.0),
        // Pillars
        pillar(250.0, 150.0, 30.0),
        pillar(600.0, 200.0, 35.0),
        pillar(950.0, 180.0, 40.0),
        pillar(200.0, 600.0, 45.0),
        pillar(550.0, 650.0, 30.0),
        // Furniture
        furniture(900.0, 500.0, 80.0, 50.0),
        furniture(150.0, 380.0, 60.0, 40.0),
    ]
}

pub fn create_light(config: &RaycastConfig) -> Circle {
    Circle::new(
        config.light_position.x,
        config.light_position.y,
        config.light_radius,
        config.light_color,
    )
}

pub fn create_demo_scene(config: &RaycastConfig, width: u32, height: u32) -> Scene {
    let scene = Scene::new(create_room_map(), create_light(config), width, height);
    log::info!(
        "Built room map with {} obstacles, max ray distance {}",
        scene.obstacles().len(),
        scene.max_distance()
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_map_inventory() {
        let map = create_room_map();
        let walls = map.iter().filter(|s| matches!(s, Shape::Line(_))).count();
        let pillars = map.iter().filter(|s| matches!(s, Shape::Circle(_))).count();
        let furniture = map.iter().filter(|s| matches!(s, Shape::Rectangle(_))).count();
        assert_eq!((walls, pillars, furniture), (20, 5, 2));
    }

    #[test]
    fn test_doorway_walls_match_floor_plan() {
        let map = create_room_map();
        let doorway_walls = [
            (7, (450.0, 280.0), (450.0, 350.0)),
            (13, (330.0, 450.0), (400.0, 450.0)),
            (18, (800.0, 470.0), (800.0, 400.0)),
        ];
        for (index, (x1, y1), (x2, y2)) in doorway_walls {
            match map[index] {
                Shape::Line(line) => {
                    assert_eq!(line.start, Vec2::new(x1, y1), "wall {index}");
                    assert_eq!(line.end, Vec2::new(x2, y2), "wall {index}");
                    assert_eq!(line.thickness, WALL_THICKNESS);
                    assert_eq!(line.color, WALL_COLOR);
                }
                other => panic!("obstacle {index} is not a wall: {other:?}"),
            }
        }
    }

    #[test]
    fn test_light_is_not_an_obstacle() {
        let config = RaycastConfig::default();
        let scene = create_demo_scene(&config, 1200, 800);
        let light = Shape::Circle(*scene.light());
        assert!(!scene.obstacles().contains(&light));
        assert_eq!(scene.light().center, Vec2::new(150.0, 150.0));
    }
}
