// src/render/renderer.rs
// the renderer coordinates one frame: background, arrows, then the animation step

use nannou::prelude::Rgb;
use std::time::Instant;

use crate::animation::{AnimationDriver, FrameControl};
use crate::config::{Config, DrawMode, Orientation, BACKGROUND_COLOR, NODE_COLOR, NODE_COUNT};
use crate::draw::{Canvas, Paint};
use crate::models::Chain;
use crate::utilities::hex_color;

pub struct Renderer {
    chain: Chain,
    driver: AnimationDriver,
    step: f32,
    orientation: Orientation,
    draw_mode: DrawMode,
    background: Rgb,
    node_color: Rgb,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            chain: Chain::new(NODE_COUNT),
            driver: AnimationDriver::new(config.animation.frame_interval()),
            step: config.animation.step(),
            orientation: config.layout.orientation,
            draw_mode: config.layout.draw_mode,
            background: hex_color(BACKGROUND_COLOR),
            node_color: hex_color(NODE_COLOR),
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// True while repaints are still needed: during a cycle and until the
    /// frame after the settle has been rendered.
    pub fn needs_repaint(&self) -> bool {
        self.driver.is_animating() || self.driver.has_pending_frame()
    }

    /// Draws the current state, then advances the animation if a frame is due.
    /// The loop stops as soon as a node settles: one cycle per tap.
    pub fn render<C>(&mut self, canvas: &mut C, now: Instant)
    where
        C: Canvas + ?Sized,
    {
        canvas.fill_background(self.background);
        let paint = Paint::for_surface(self.node_color, canvas.width(), canvas.height());
        self.chain.draw(canvas, &paint, self.orientation, self.draw_mode);

        let chain = &mut self.chain;
        let step = self.step;
        self.driver.tick(now, || match chain.advance(step) {
            Some(_) => FrameControl::Stop,
            None => FrameControl::Continue,
        });
    }

    /// Returns true when the tap started a cycle on the active node.
    pub fn handle_tap(&mut self, now: Instant) -> bool {
        if !self.chain.start_cycle() {
            return false;
        }
        self.driver.start(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::RecordingCanvas;
    use std::time::Duration;

    fn config(toml: &str) -> Config {
        Config::from_toml_str(toml).unwrap()
    }

    /// Renders frames every `interval` until the driver stops.
    fn run_until_idle(
        renderer: &mut Renderer,
        canvas: &mut RecordingCanvas,
        start: Instant,
        interval: Duration,
    ) -> usize {
        let mut frames = 0;
        let mut now = start;
        while renderer.is_animating() {
            frames += 1;
            assert!(frames < 1000, "animation never stopped");
            canvas.clear();
            renderer.render(canvas, now);
            now += interval;
        }
        frames
    }

    #[test]
    fn test_idle_frame_draws_background_and_chain() {
        let mut renderer = Renderer::new(&Config::default());
        let mut canvas = RecordingCanvas::new(480.0, 800.0);
        renderer.render(&mut canvas, Instant::now());

        assert_eq!(canvas.backgrounds, vec![hex_color(BACKGROUND_COLOR)]);
        assert_eq!(canvas.polygons.len(), NODE_COUNT * 4);
        assert!(canvas
            .polygons
            .iter()
            .all(|p| p.paint.color == hex_color(NODE_COLOR)));
        assert_eq!(canvas.polygons[0].paint.stroke_weight, 480.0 / 80.0);
        assert!(!renderer.is_animating());
    }

    #[test]
    fn test_tap_while_idle_starts_driver_once() {
        let now = Instant::now();
        let mut renderer = Renderer::new(&Config::default());

        assert!(renderer.handle_tap(now));
        assert!(renderer.is_animating());

        // the active node is now cycling, so further taps change nothing
        let before = *renderer.chain().active().state();
        assert!(!renderer.handle_tap(now));
        assert!(!renderer.handle_tap(now + Duration::from_millis(10)));
        assert_eq!(*renderer.chain().active().state(), before);
    }

    #[test]
    fn test_tap_runs_one_cycle_then_stops() {
        let start = Instant::now();
        let mut renderer = Renderer::new(&Config::default());
        let mut canvas = RecordingCanvas::new(480.0, 800.0);

        renderer.handle_tap(start);
        let frames = run_until_idle(&mut renderer, &mut canvas, start, Duration::from_millis(50));

        assert!((40..=41).contains(&frames));
        let chain = renderer.chain();
        assert_eq!(chain.active().index(), 1);
        assert_eq!(chain.node(0).unwrap().state().scale, 1.0);
        assert_eq!(chain.node(1).unwrap().state().dir, 0.0);

        // nothing moves without another tap
        let settled = *chain.node(0).unwrap().state();
        renderer.render(&mut canvas, start + Duration::from_secs(60));
        assert_eq!(*renderer.chain().node(0).unwrap().state(), settled);
        assert!(!renderer.is_animating());
    }

    #[test]
    fn test_frames_wait_for_interval() {
        let start = Instant::now();
        let mut renderer = Renderer::new(&Config::default());
        let mut canvas = RecordingCanvas::new(480.0, 800.0);
        renderer.handle_tap(start);

        renderer.render(&mut canvas, start);
        let after_first = renderer.chain().active().state().scale;
        assert!((after_first - 0.025).abs() < 1e-6);

        // repaints faster than the frame interval only redraw
        renderer.render(&mut canvas, start + Duration::from_millis(16));
        renderer.render(&mut canvas, start + Duration::from_millis(32));
        assert_eq!(renderer.chain().active().state().scale, after_first);

        renderer.render(&mut canvas, start + Duration::from_millis(50));
        assert!(renderer.chain().active().state().scale > after_first);
    }

    #[test]
    fn test_last_frame_before_idle_shows_settled_node() {
        let start = Instant::now();
        let mut renderer = Renderer::new(&config("[animation]\nspeed = \"fast\"\n"));
        let mut canvas = RecordingCanvas::new(480.0, 800.0);
        let interval = Duration::from_millis(50);

        renderer.handle_tap(start);
        let mut now = start;
        let mut frames = 0;
        while renderer.needs_repaint() {
            frames += 1;
            assert!(frames < 1000, "repaints never stopped");
            canvas.clear();
            renderer.render(&mut canvas, now);
            now += interval;
        }

        // node 0 fully deployed: second arrow's tip on the left edge
        assert_eq!(renderer.chain().node(0).unwrap().state().scale, 1.0);
        let tip = canvas.polygons[3].points[1];
        assert!(tip.x.abs() < 1e-3, "second arrow tip at x = {}", tip.x);
        assert!(!renderer.is_animating());
    }

    #[test]
    fn test_fast_speed_and_active_mode() {
        let start = Instant::now();
        let mut renderer = Renderer::new(&config(
            "[animation]\nspeed = \"fast\"\nframe_interval_ms = 10\n[layout]\ndraw_mode = \"active\"\n",
        ));
        let mut canvas = RecordingCanvas::new(800.0, 480.0);

        renderer.handle_tap(start);
        let frames = run_until_idle(&mut renderer, &mut canvas, start, Duration::from_millis(10));
        assert!((10..=11).contains(&frames));
        assert_eq!(canvas.polygons.len(), 4);
        assert_eq!(renderer.chain().active().index(), 1);
    }

    #[test]
    fn test_each_tap_advances_one_node() {
        let start = Instant::now();
        let mut renderer = Renderer::new(&config("[animation]\nspeed = \"fast\"\n"));
        let mut canvas = RecordingCanvas::new(480.0, 800.0);
        let interval = Duration::from_millis(50);

        let mut now = start;
        for expected_active in [1, 2, 3, 4, 4, 3] {
            assert!(renderer.handle_tap(now));
            let frames = run_until_idle(&mut renderer, &mut canvas, now, interval);
            now += interval * frames as u32;
            assert_eq!(renderer.chain().active().index(), expected_active);
        }
    }
}
