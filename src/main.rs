// src/main.rs
use log::error;
use nannou::prelude::*;

use arrowfillrot::{config::Config, views::ArrowFillRotView};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> ArrowFillRotView {
    // Load config
    let config = Config::load().unwrap_or_else(|err| {
        error!("{}", err);
        std::process::exit(1);
    });

    ArrowFillRotView::create(app, &config).unwrap_or_else(|err| {
        error!("{}", err);
        std::process::exit(1);
    })
}

fn update(app: &App, model: &mut ArrowFillRotView, _update: Update) {
    model.update(app);
}
