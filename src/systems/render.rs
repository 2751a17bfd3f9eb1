//! Rendering.
//!
//! Everything is drawn into the fixed-size [`RenderTarget`] canvas first and
//! the canvas is then scaled into the window. World x coordinates are
//! translated by [`Scroll`]; the HUD and overlays are drawn in canvas space.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::{COIN_SIZE, Coin, CoinSpin};
use crate::components::enemy::Enemy;
use crate::components::flag::{FLAG_CLOTH_HEIGHT, Flag};
use crate::components::mapposition::MapPosition;
use crate::components::platform::{Pipe, Platform};
use crate::components::player::Player;
use crate::components::tint::{RED, SKY_BLUE, Tint, WHITE};
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::level::LevelProgress;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::scroll::Scroll;
use crate::resources::worldtime::WorldTime;

const HUD_FONT_SIZE: i32 = 20;
const CLOUD_COUNT: i32 = 5;
const CLOUD_SPACING: f32 = 200.0;

/// Everything the renderer reads from the world.
#[derive(SystemParam)]
pub struct Scene<'w, 's> {
    pub scroll: Res<'w, Scroll>,
    pub state: Res<'w, GameState>,
    pub progress: Res<'w, LevelProgress>,
    pub time: Res<'w, WorldTime>,
    pub debug: Option<Res<'w, DebugMode>>,
    pub platforms: Query<'w, 's, (&'static MapPosition, &'static BoxCollider, &'static Tint), With<Platform>>,
    pub pipes: Query<'w, 's, (&'static MapPosition, &'static BoxCollider, &'static Tint), With<Pipe>>,
    pub coins: Query<
        'w,
        's,
        (&'static MapPosition, &'static BoxCollider, &'static Tint, Option<&'static CoinSpin>),
        With<Coin>,
    >,
    pub enemies: Query<'w, 's, (&'static MapPosition, &'static BoxCollider, &'static Tint), With<Enemy>>,
    pub flags: Query<'w, 's, (&'static MapPosition, &'static BoxCollider), With<Flag>>,
    pub players: Query<'w, 's, (&'static Player, &'static MapPosition, &'static BoxCollider, &'static Tint)>,
    pub colliders: Query<'w, 's, (&'static MapPosition, &'static BoxCollider)>,
}

pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    scene: Scene,
) {
    let fps = rl.get_fps();
    let (window_w, window_h) = (rl.get_screen_width(), rl.get_screen_height());

    {
        let mut d = rl.begin_texture_mode(&th, &mut target.texture);
        draw_background(&mut d, scene.scroll.offset);
        draw_world(&mut d, &scene);
        draw_hud(&mut d, &scene);
        draw_overlay(&mut d, &scene);
        if scene.debug.is_some() {
            draw_debug(&mut d, &scene, fps);
        }
    }

    let source = target.source_rect();
    let dest = target.dest_rect(window_w, window_h);
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    d.draw_texture_pro(&target.texture, source, dest, Vector2::zero(), 0.0, Color::WHITE);
}

/// Sky and two rows of clouds moving at half the scroll speed.
fn draw_background<D: RaylibDraw>(d: &mut D, scroll: f32) {
    d.clear_background(SKY_BLUE);
    let parallax = (scroll / 2.0).floor();
    for i in 0..CLOUD_COUNT {
        let x = i as f32 * CLOUD_SPACING - parallax;
        draw_ellipse_in(d, Rectangle::new(x, 50.0, 100.0, 50.0), WHITE);
        draw_ellipse_in(d, Rectangle::new(x + 50.0, 30.0, 80.0, 60.0), WHITE);
    }
}

fn draw_ellipse_in<D: RaylibDraw>(d: &mut D, rect: Rectangle, color: Color) {
    d.draw_ellipse(
        (rect.x + rect.width / 2.0) as i32,
        (rect.y + rect.height / 2.0) as i32,
        rect.width / 2.0,
        rect.height / 2.0,
        color,
    );
}

/// Collider box translated to canvas space.
fn screen_rect(scroll: &Scroll, position: &MapPosition, collider: &BoxCollider) -> Rectangle {
    let (x, y, w, h) = collider.get_aabb(position.pos);
    Rectangle::new(scroll.to_screen(x), y, w, h)
}

fn draw_world<D: RaylibDraw>(d: &mut D, scene: &Scene) {
    let scroll = &*scene.scroll;

    for (position, collider, tint) in scene.platforms.iter() {
        d.draw_rectangle_rec(screen_rect(scroll, position, collider), tint.color);
    }
    for (position, collider, tint) in scene.pipes.iter() {
        d.draw_rectangle_rec(screen_rect(scroll, position, collider), tint.color);
    }

    for (position, collider, tint, spin) in scene.coins.iter() {
        let rect = screen_rect(scroll, position, collider);
        let factor = spin.map_or(1.0, CoinSpin::width_factor);
        let radius = COIN_SIZE / 2.0;
        d.draw_ellipse(
            (rect.x + radius) as i32,
            (rect.y + radius) as i32,
            radius * factor,
            radius,
            tint.color,
        );
    }

    for (position, collider, tint) in scene.enemies.iter() {
        d.draw_rectangle_rec(screen_rect(scroll, position, collider), tint.color);
    }

    for (position, collider) in scene.flags.iter() {
        let rect = screen_rect(scroll, position, collider);
        d.draw_rectangle_rec(rect, WHITE);
        d.draw_rectangle_rec(Rectangle::new(rect.x, rect.y, rect.width, FLAG_CLOTH_HEIGHT), RED);
    }

    for (player, position, collider, tint) in scene.players.iter() {
        let rect = screen_rect(scroll, position, collider);
        d.draw_rectangle_rec(rect, tint.color);
        // Eye on the facing side.
        let eye_x = if player.flip {
            rect.x + 4.0
        } else {
            rect.x + rect.width - 10.0
        };
        d.draw_rectangle_rec(Rectangle::new(eye_x, rect.y + 8.0, 6.0, 6.0), WHITE);
    }
}

fn draw_hud<D: RaylibDraw>(d: &mut D, scene: &Scene) {
    let Some((player, ..)) = scene.players.iter().next() else {
        return;
    };
    d.draw_text(&format!("SCORE: {}", player.score), 10, 10, HUD_FONT_SIZE, WHITE);
    d.draw_text(&format!("LIVES: {}", player.lives), 10, 40, HUD_FONT_SIZE, WHITE);
    let level = format!("LEVEL: {}/{}", scene.progress.index, scene.progress.max_levels);
    d.draw_text(&level, 440, 10, HUD_FONT_SIZE, WHITE);
}

fn draw_overlay<D: RaylibDraw>(d: &mut D, scene: &Scene) {
    let lines: Vec<(String, i32, i32)> = match scene.state.get() {
        GameStates::LevelComplete => vec![
            ("LEVEL COMPLETE!".to_string(), 200, 150),
            ("Press SPACE to continue".to_string(), 180, 200),
        ],
        GameStates::GameOver => vec![
            ("GAME OVER".to_string(), 230, 150),
            ("Press SPACE to restart".to_string(), 190, 200),
        ],
        GameStates::GameComplete => vec![
            ("CONGRATULATIONS!".to_string(), 200, 150),
            (format!("YOU BEAT ALL {} LEVELS!", scene.progress.max_levels), 170, 200),
            ("Press SPACE to play again".to_string(), 170, 250),
        ],
        _ => return,
    };
    for (text, x, y) in lines {
        d.draw_text(&text, x, y, HUD_FONT_SIZE, WHITE);
    }
}

fn draw_debug<D: RaylibDraw>(d: &mut D, scene: &Scene, fps: u32) {
    for (position, collider) in scene.colliders.iter() {
        let rect = screen_rect(&scene.scroll, position, collider);
        d.draw_rectangle_lines_ex(rect, 1.0, Color::BLACK);
    }
    d.draw_text(&debug_line(fps, &scene.time, &scene.scroll), 10, 375, 10, Color::BLACK);
}

fn debug_line(fps: u32, time: &WorldTime, scroll: &Scroll) -> String {
    format!(
        "DEBUG (F11) | FPS: {} | tick: {} | time: {:.1}s | scroll: {:.1}",
        fps, time.frame_count, time.elapsed, scroll.offset
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_line_shows_clock_and_scroll() {
        let time = WorldTime {
            elapsed: 12.5,
            frame_count: 735,
        };
        let scroll = Scroll { offset: 40.0 };
        assert_eq!(
            debug_line(60, &time, &scroll),
            "DEBUG (F11) | FPS: 60 | tick: 735 | time: 12.5s | scroll: 40.0"
        );
    }
}
