// src/views/arrow_view.rs
//
// The window the arrow chain lives in. Taps and clicks start a cycle;
// each app update records one frame into a Draw that `view` presents.

use log::{debug, info, warn};
use nannou::prelude::*;
use std::time::Instant;
use thiserror::Error;

use crate::config::Config;
use crate::draw::NannouCanvas;
use crate::render::Renderer;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to build window: {0}")]
    Window(String),

    #[error("window {0:?} disappeared right after it was built")]
    MissingWindow(WindowId),
}

pub struct ArrowFillRotView {
    renderer: Renderer,
    draw: Draw,
    continuous: bool,
}

impl ArrowFillRotView {
    /// Builds the window, attaches the view to it and returns the model
    /// nannou drives.
    pub fn create(app: &App, config: &Config) -> Result<Self, ViewError> {
        let window_id = app
            .new_window()
            .title(config.window.title.as_str())
            .size(config.window.width, config.window.height)
            .view(view)
            .mouse_pressed(mouse_pressed)
            .touch(touch)
            .build()
            .map_err(|err| ViewError::Window(format!("{:?}", err)))?;

        if config.window.fullscreen {
            app.window(window_id)
                .ok_or(ViewError::MissingWindow(window_id))?
                .set_fullscreen(true);
        }

        // redraw on events only until something animates
        app.set_loop_mode(LoopMode::wait());

        info!(
            "Created {}x{} window, {:?} layout, {:?} speed",
            config.window.width,
            config.window.height,
            config.layout.orientation,
            config.animation.speed
        );

        Ok(Self {
            renderer: Renderer::new(config),
            draw: Draw::new(),
            continuous: false,
        })
    }

    /// Records the next frame.
    pub fn update(&mut self, app: &App) {
        self.draw.reset();
        let mut canvas = NannouCanvas::new(&self.draw, app.window_rect());
        self.renderer.render(&mut canvas, Instant::now());
        self.sync_loop_mode(app);
    }

    pub fn handle_tap(&mut self, app: &App) {
        if self.renderer.handle_tap(Instant::now()) {
            debug!("Tap started a cycle");
        }
        self.sync_loop_mode(app);
    }

    // Keeps the event loop refreshing continuously while frames are still
    // owed, including the one that paints the settled node.
    fn sync_loop_mode(&mut self, app: &App) {
        let needed = self.renderer.needs_repaint();
        if needed == self.continuous {
            return;
        }
        self.continuous = needed;
        if needed {
            app.set_loop_mode(LoopMode::refresh_sync());
        } else {
            app.set_loop_mode(LoopMode::wait());
        }
    }
}

fn view(app: &App, model: &ArrowFillRotView, frame: Frame) {
    if let Err(err) = model.draw.to_frame(app, &frame) {
        warn!("Failed to present frame: {:?}", err);
    }
}

fn mouse_pressed(app: &App, model: &mut ArrowFillRotView, _button: MouseButton) {
    model.handle_tap(app);
}

fn touch(app: &App, model: &mut ArrowFillRotView, event: TouchEvent) {
    if event.phase == TouchPhase::Started {
        model.handle_tap(app);
    }
}
