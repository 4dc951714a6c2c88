//! Per-frame simulation update
//!
//! The host calls `Simulation::update` once per rendered frame with the
//! elapsed time and the keys held that frame, then reads state back for
//! rendering.

use glam::Vec2;

use super::collision::{
    BounceZone, ball_box, ball_out_of_bounds, ball_wall_hit, paddle_box, paddle_breaches_field,
};
use super::cpu::cpu_intent;
use super::menu::{Menu, MenuAction};
use super::rng::{BitSource, SeededBits};
use super::state::{GameEvent, GameState, MenuOption, Scene, Side, Snapshot};
use crate::consts::*;

/// Keys held during a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    /// Enter/space
    pub confirm: bool,
}

impl FrameInput {
    /// Player paddle intent: +1 up, -1 down, 0 idle. Up wins if both are held.
    pub fn vertical_intent(&self) -> f32 {
        if self.up {
            1.0
        } else if self.down {
            -1.0
        } else {
            0.0
        }
    }
}

/// What the host loop should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Continue,
    /// Quit was chosen from the menu
    Exit,
}

/// Owns all game state and advances it one frame at a time
#[derive(Debug, Clone)]
pub struct Simulation<B: BitSource = SeededBits> {
    scene: Scene,
    menu: Menu,
    state: GameState,
    /// Seconds spent frozen since the last goal
    round_timer: f32,
    bits: B,
    events: Vec<GameEvent>,
}

impl Simulation<SeededBits> {
    /// Simulation whose bounce coin flips are reproducible for `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededBits::new(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SeededBits::from_entropy())
    }
}

impl<B: BitSource> Simulation<B> {
    /// Fresh simulation at the main menu
    pub fn new(bits: B) -> Self {
        Self {
            scene: Scene::MainMenu,
            menu: Menu::new(),
            state: GameState::new(),
            round_timer: 0.0,
            bits,
            events: Vec::with_capacity(8),
        }
    }

    /// Resume play from an existing game state, skipping the menu
    pub fn from_state(state: GameState, bits: B) -> Self {
        Self {
            scene: Scene::InGame,
            state,
            ..Self::new(bits)
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn menu_option(&self) -> MenuOption {
        self.menu.selected()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn round_timer(&self) -> f32 {
        self.round_timer
    }

    /// Take the events produced by the latest update
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Advance one frame. `dt` is the elapsed time in seconds and must be
    /// non-negative. Events left undrained from the previous frame are
    /// discarded.
    pub fn update(&mut self, dt: f32, input: &FrameInput) -> UpdateOutcome {
        self.events.clear();
        match self.scene {
            Scene::MainMenu => self.update_menu(input),
            Scene::InGame => {
                self.update_game(dt, input);
                UpdateOutcome::Continue
            }
        }
    }

    fn update_menu(&mut self, input: &FrameInput) -> UpdateOutcome {
        match self.menu.update(input.up, input.down, input.confirm) {
            MenuAction::Stay => UpdateOutcome::Continue,
            MenuAction::StartGame => {
                log::info!("Starting game");
                self.scene = Scene::InGame;
                self.events.push(GameEvent::SceneChanged(Scene::InGame));
                UpdateOutcome::Continue
            }
            MenuAction::Quit => {
                log::info!("Quit requested from menu");
                UpdateOutcome::Exit
            }
        }
    }

    fn update_game(&mut self, dt: f32, input: &FrameInput) {
        if !self.state.scored {
            // x strictly before y, paddles last
            let step = self.state.ball.dir * dt * BALL_SPEED;
            self.move_ball_x(step.x);
            self.move_ball_y(step.y);
            self.resolve_paddle_hits();
        } else {
            self.round_timer += dt;
            if self.round_timer >= ROUND_DELAY {
                self.round_timer = 0.0;
                self.state.scored = false;
                self.state.ball.reset();
                log::info!(
                    "Serve toward {} (score {}-{})",
                    if self.state.ball.dir.x > 0.0 { "cpu" } else { "player" },
                    self.state.player_score,
                    self.state.cpu_score
                );
                self.events.push(GameEvent::Served);
            }
        }

        // Paddles move every frame, even while the ball is frozen
        let player_delta = PADDLE_SPEED * input.vertical_intent() * dt;
        self.state.player.y = move_paddle(self.state.player.y, player_delta);

        let cpu_delta = PADDLE_SPEED * cpu_intent(&self.state.ball, &self.state.cpu) * dt;
        self.state.cpu.y = move_paddle(self.state.cpu.y, cpu_delta);
    }

    /// Horizontal step. Leaving the field ends the round and the step is
    /// not committed.
    fn move_ball_x(&mut self, delta: f32) {
        let x = self.state.ball.pos.x + delta;

        if let Some(scorer) = ball_out_of_bounds(x) {
            self.state.award_point(scorer);
            log::debug!(
                "Goal for {:?}: {}-{}",
                scorer,
                self.state.player_score,
                self.state.cpu_score
            );
            self.events.push(GameEvent::Goal { scorer });
            return;
        }

        self.state.ball.pos.x = x;
    }

    /// Vertical step. Touching a wall turns the ball around and skips the
    /// step.
    fn move_ball_y(&mut self, delta: f32) {
        let y = self.state.ball.pos.y + delta;

        if let Some(wall) = ball_wall_hit(y) {
            self.state.ball.dir.y = wall.reflect(self.state.ball.dir.y);
            self.events.push(GameEvent::WallBounce);
            return;
        }

        self.state.ball.pos.y = y;
    }

    /// Bounce off whichever paddle the ball overlaps. Both paddles are
    /// tested; the cpu paddle wins if both overlap.
    fn resolve_paddle_hits(&mut self) {
        let ball = ball_box(self.state.ball.pos);

        let mut hit = None;
        for side in [Side::Player, Side::Cpu] {
            let paddle_y = self.state.paddle(side).y;
            if ball.overlaps(&paddle_box(side, paddle_y)) {
                self.state.ball.dir.x = side.bounce_dx();
                hit = Some((side, BounceZone::classify(self.state.ball.pos.y, paddle_y)));
            }
        }

        let Some((side, zone)) = hit else {
            return;
        };

        let dy = match zone {
            BounceZone::Upper => BOUNCE_MAX,
            BounceZone::Lower => -BOUNCE_MAX,
            BounceZone::Middle => {
                if self.bits.next_bit() {
                    BOUNCE_MIDDLE
                } else {
                    -BOUNCE_MIDDLE
                }
            }
        };
        self.state.ball.dir = Vec2::new(self.state.ball.dir.x, dy).normalize();

        log::debug!("{:?} paddle hit ({:?} third)", side, zone);
        self.events.push(GameEvent::PaddleHit { side });
    }
}

/// Paddle y after moving by `delta`. A move that would touch or cross the
/// field edge is dropped entirely.
fn move_paddle(y: f32, delta: f32) -> f32 {
    let moved = y + delta;
    if paddle_breaches_field(moved) { y } else { moved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::FixedBits;

    const FRAME: f32 = 1.0 / 60.0;

    fn in_play(bits: FixedBits) -> Simulation<FixedBits> {
        let mut state = GameState::new();
        state.scored = false;
        state.ball.dir = Vec2::X;
        Simulation::from_state(state, bits)
    }

    #[test]
    fn test_menu_start_enters_game() {
        let mut sim = Simulation::seeded(1);
        assert_eq!(sim.scene(), Scene::MainMenu);

        let confirm = FrameInput {
            confirm: true,
            ..Default::default()
        };
        assert_eq!(sim.update(FRAME, &confirm), UpdateOutcome::Continue);
        assert_eq!(sim.scene(), Scene::InGame);
        assert_eq!(
            sim.drain_events().collect::<Vec<_>>(),
            vec![GameEvent::SceneChanged(Scene::InGame)]
        );
        // Entering the game does not advance it on the same frame
        assert_eq!(sim.round_timer(), 0.0);
    }

    #[test]
    fn test_menu_quit_requests_exit() {
        let mut sim = Simulation::seeded(1);
        let down = FrameInput {
            down: true,
            ..Default::default()
        };
        assert_eq!(sim.update(FRAME, &down), UpdateOutcome::Continue);
        assert_eq!(sim.menu_option(), MenuOption::QuitGame);

        let confirm = FrameInput {
            confirm: true,
            ..Default::default()
        };
        assert_eq!(sim.update(FRAME, &confirm), UpdateOutcome::Exit);
        assert_eq!(sim.scene(), Scene::MainMenu);
        assert_eq!(sim.menu_option(), MenuOption::QuitGame);
        assert_eq!(sim.state(), &GameState::new());
    }

    #[test]
    fn test_ball_moves_by_direction_times_speed() {
        let mut sim = in_play(FixedBits::always(true));
        sim.state.ball.dir = Vec2::new(0.6, 0.8);
        sim.update(0.5, &FrameInput::default());

        let expected = Vec2::new(0.6, 0.8) * 0.5 * BALL_SPEED;
        assert!((sim.state.ball.pos - expected).length() < 1e-6);
    }

    #[test]
    fn test_initial_serve_waits_for_round_delay() {
        let mut sim = Simulation::from_state(GameState::new(), FixedBits::always(true));
        sim.update(ROUND_DELAY / 2.0, &FrameInput::default());
        assert!(sim.state.scored);
        assert_eq!(sim.round_timer(), ROUND_DELAY / 2.0);

        sim.update(ROUND_DELAY / 2.0, &FrameInput::default());
        assert!(!sim.state.scored);
        assert_eq!(sim.round_timer(), 0.0);
        // Initial direction is -x, so the first serve heads toward the cpu
        assert_eq!(sim.state.ball.dir, Vec2::X);
        assert_eq!(sim.drain_events().collect::<Vec<_>>(), vec![GameEvent::Served]);
    }

    #[test]
    fn test_frozen_ball_does_not_move() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(0.3, 0.2);
        let mut sim = Simulation::from_state(state, FixedBits::always(true));
        sim.update(0.1, &FrameInput::default());
        assert_eq!(sim.state.ball.pos, Vec2::new(0.3, 0.2));
    }

    #[test]
    fn test_player_paddle_moves_while_frozen() {
        let mut sim = Simulation::from_state(GameState::new(), FixedBits::always(true));
        let up = FrameInput {
            up: true,
            ..Default::default()
        };
        sim.update(0.1, &up);
        assert!((sim.state.player.y - PADDLE_SPEED * 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_player_up_wins_over_down() {
        let mut sim = in_play(FixedBits::always(true));
        let both = FrameInput {
            up: true,
            down: true,
            ..Default::default()
        };
        sim.update(0.1, &both);
        assert!(sim.state.player.y > 0.0);
    }

    #[test]
    fn test_paddle_move_rejected_at_edge() {
        let near_top = FIELD_H - PADDLE_HALF_H - 0.01;
        assert_eq!(move_paddle(near_top, 0.05), near_top);
        assert_eq!(move_paddle(-near_top, -0.05), -near_top);
        assert!((move_paddle(near_top, -0.05) - (near_top - 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_wall_bounce_skips_vertical_step() {
        let mut sim = in_play(FixedBits::always(true));
        let y = FIELD_H - BALL_HALF_SIZE - 0.001;
        sim.state.ball.pos = Vec2::new(0.0, y);
        sim.state.ball.dir = Vec2::new(0.6, 0.8);
        sim.update(0.1, &FrameInput::default());

        assert_eq!(sim.state.ball.pos.y, y);
        assert_eq!(sim.state.ball.dir.y, -0.8);
        assert!(sim.state.ball.pos.x > 0.0);
        assert!(sim.drain_events().any(|e| e == GameEvent::WallBounce));
    }

    #[test]
    fn test_bottom_wall_turns_ball_up() {
        let mut sim = in_play(FixedBits::always(true));
        let y = -FIELD_H + BALL_HALF_SIZE + 0.001;
        sim.state.ball.pos = Vec2::new(0.0, y);
        sim.state.ball.dir = Vec2::new(0.6, -0.8);
        sim.update(0.1, &FrameInput::default());

        assert_eq!(sim.state.ball.pos.y, y);
        assert_eq!(sim.state.ball.dir.y, 0.8);
    }

    #[test]
    fn test_left_exit_scores_for_cpu() {
        let mut sim = in_play(FixedBits::always(true));
        sim.state.ball.pos = Vec2::new(-FIELD_W + 0.01, 0.5);
        sim.state.ball.dir = Vec2::NEG_X;
        sim.update(0.5, &FrameInput::default());

        assert!(sim.state.scored);
        assert_eq!(sim.state.cpu_score, 1);
        assert_eq!(sim.state.player_score, 0);
        assert_eq!(sim.state.ball.pos, Vec2::new(-FIELD_W + 0.01, 0.5));
        assert!(
            sim.drain_events()
                .any(|e| e == GameEvent::Goal { scorer: Side::Cpu })
        );
    }

    #[test]
    fn test_player_paddle_upper_third_bounce() {
        let mut sim = in_play(FixedBits::always(true));
        sim.state.ball.pos = Vec2::new(-PADDLE_X_POS + 0.05, PADDLE_HALF_H * 0.9);
        sim.state.ball.dir = Vec2::NEG_X;
        sim.update(FRAME, &FrameInput::default());

        let expected = Vec2::new(1.0, BOUNCE_MAX).normalize();
        assert!((sim.state.ball.dir - expected).length() < 1e-6);
        assert!(
            sim.drain_events()
                .any(|e| e == GameEvent::PaddleHit { side: Side::Player })
        );
    }

    #[test]
    fn test_cpu_paddle_lower_third_bounce() {
        let mut sim = in_play(FixedBits::always(true));
        sim.state.ball.pos = Vec2::new(PADDLE_X_POS - 0.05, -PADDLE_HALF_H * 0.9);
        sim.state.ball.dir = Vec2::X;
        sim.update(FRAME, &FrameInput::default());

        let expected = Vec2::new(-1.0, -BOUNCE_MAX).normalize();
        assert!((sim.state.ball.dir - expected).length() < 1e-6);
    }

    #[test]
    fn test_middle_third_follows_coin() {
        for (bit, sign) in [(true, 1.0), (false, -1.0)] {
            let mut sim = in_play(FixedBits::always(bit));
            sim.state.ball.pos = Vec2::new(-PADDLE_X_POS + 0.05, 0.0);
            sim.state.ball.dir = Vec2::NEG_X;
            sim.update(FRAME, &FrameInput::default());

            let expected = Vec2::new(1.0, sign * BOUNCE_MIDDLE).normalize();
            assert!((sim.state.ball.dir - expected).length() < 1e-6);
            assert!((sim.state.ball.dir.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_wall_and_paddle_same_frame_paddle_wins() {
        let mut sim = in_play(FixedBits::always(true));
        // Paddle pushed up against the top wall, ball in its upper third
        sim.state.player.y = FIELD_H - PADDLE_HALF_H - 0.01;
        let y = FIELD_H - BALL_HALF_SIZE - 0.001;
        sim.state.ball.pos = Vec2::new(-PADDLE_X_POS + 0.02, y);
        sim.state.ball.dir = Vec2::new(-0.6, 0.8);
        sim.update(FRAME, &FrameInput::default());

        // Wall flipped dy downward, then the paddle overwrote it
        let expected = Vec2::new(1.0, BOUNCE_MAX).normalize();
        assert!((sim.state.ball.dir - expected).length() < 1e-6);
        let events: Vec<_> = sim.drain_events().collect();
        assert_eq!(
            events,
            vec![
                GameEvent::WallBounce,
                GameEvent::PaddleHit { side: Side::Player }
            ]
        );
    }

    #[test]
    fn test_undrained_events_do_not_pile_up() {
        let mut sim = in_play(FixedBits::always(true));
        // Straight up and down: a wall bounce every few frames
        sim.state.ball.dir = Vec2::Y;
        for _ in 0..20_000 {
            sim.update(0.1, &FrameInput::default());
        }
        assert!(sim.events.len() <= 1);

        // Next frame hits the top wall; only that frame's event is kept
        sim.state.ball.pos = Vec2::new(0.0, FIELD_H - BALL_HALF_SIZE - 0.001);
        sim.state.ball.dir = Vec2::Y;
        sim.update(0.1, &FrameInput::default());
        assert_eq!(sim.drain_events().collect::<Vec<_>>(), vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_cpu_follows_ball_on_its_side() {
        let mut sim = in_play(FixedBits::always(true));
        sim.state.ball.pos = Vec2::new(1.0, 0.6);
        sim.state.ball.dir = Vec2::X;
        sim.update(0.1, &FrameInput::default());
        assert!((sim.state.cpu.y - PADDLE_SPEED * 0.1).abs() < 1e-6);

        // Ball back on the player's side: cpu stays put
        let cpu_y = sim.state.cpu.y;
        sim.state.ball.pos = Vec2::new(-0.5, -0.6);
        sim.update(0.1, &FrameInput::default());
        assert_eq!(sim.state.cpu.y, cpu_y);
    }
}
