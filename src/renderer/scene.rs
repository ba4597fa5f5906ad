//! Scene drawing for body, cannon, rays and targets

use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::{DrawRectangleParams, draw_circle, draw_line, draw_rectangle, draw_rectangle_ex};
use macroquad::window::clear_background;

use crate::consts::{CANNON_LENGTH, CANNON_THICKNESS};
use crate::sim::{Rect, SimState, cannon_rotation};

const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const BODY_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const CANNON_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const RAY_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const HIT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const TARGET_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);

const RAY_THICKNESS: f32 = 2.0;
const HIT_MARKER_RADIUS: f32 = 4.0;

fn fill_rect(rect: &Rect, color: Color) {
    draw_rectangle(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y, color);
}

/// macroquad rotates clockwise on screen, so the counter-clockwise sprite
/// angle is flipped back here
fn screen_rotation(ccw_deg: f32) -> f32 {
    (-ccw_deg).to_radians()
}

/// Draw a full frame; call once per tick after `sim::tick`
pub fn draw_frame(state: &SimState) {
    clear_background(BACKGROUND);

    fill_rect(&state.body.bounds(), BODY_COLOR);

    let center = state.body.center();
    draw_rectangle_ex(
        center.x,
        center.y,
        CANNON_LENGTH,
        CANNON_THICKNESS,
        DrawRectangleParams {
            offset: vec2(0.5, 0.5),
            rotation: screen_rotation(cannon_rotation(state.aim_deg)),
            color: CANNON_COLOR,
        },
    );

    // Rays are drawn per target before that target, as targets cover earlier rays
    let mut rays = state.rays.iter().peekable();
    for (index, target) in state.targets.iter().enumerate() {
        while let Some(ray) = rays.next_if(|r| r.target_index == index) {
            let end = ray.result.end().as_vec2();
            draw_line(ray.origin.x, ray.origin.y, end.x, end.y, RAY_THICKNESS, RAY_COLOR);
            if ray.result.is_hit() {
                draw_circle(end.x, end.y, HIT_MARKER_RADIUS, HIT_COLOR);
            }
        }
        fill_rect(target.bounds(), TARGET_COLOR);
    }
}
