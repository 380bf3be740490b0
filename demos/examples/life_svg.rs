// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless life-in-weeks demo.
//!
//! Builds a session, scripts a few wheel and drag inputs, and writes the
//! final frame as an SVG file.
//!
//! Run:
//! - `cargo run -p lifeweeks_demos --example life_svg -- 1990-01-01 life.svg`
//! - `RUST_LOG=debug cargo run -p lifeweeks_demos --example life_svg` to see
//!   render spans and zoom events.
//!
//! A session configuration can be passed as JSON through the
//! `LIFEWEEKS_CONFIG` environment variable, for example
//! `LIFEWEEKS_CONFIG='{"layout":"Packed"}'`.

use std::error::Error;

use chrono::{Local, NaiveDate};
use kurbo::Point;
use lifeweeks_demos::SvgSurface;
use lifeweeks_plan::DrawOpKind;
use lifeweeks_session::{InputEvent, LifeGridSession, SessionConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let birth = match args.next() {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")?,
        None => NaiveDate::from_ymd_opt(1990, 1, 1).ok_or("invalid default birth date")?,
    };
    let out_path = args.next().unwrap_or_else(|| "life.svg".to_owned());

    let config = match std::env::var("LIFEWEEKS_CONFIG") {
        Ok(json) => serde_json::from_str::<SessionConfig>(&json)?,
        Err(_) => SessionConfig::default(),
    };
    let canvas = config.canvas.size();
    let today = Local::now().date_naive();

    let mut session = LifeGridSession::new(config, today);
    session.set_birth_date(Some(birth));
    session.set_life_expectancy(80);
    session.add_event_hex(
        "School",
        "#f59e0b",
        NaiveDate::from_ymd_opt(1996, 9, 1).ok_or("bad date")?,
        NaiveDate::from_ymd_opt(2008, 6, 30).ok_or("bad date")?,
    )?;
    session.add_event_hex(
        "First job",
        "#10b981",
        NaiveDate::from_ymd_opt(2012, 3, 5).ok_or("bad date")?,
        NaiveDate::from_ymd_opt(2012, 3, 5).ok_or("bad date")?,
    )?;

    // Zoom in a little around the top-left corner, then drag the grid.
    for _ in 0..3 {
        session.handle(&InputEvent::Wheel {
            client: Point::new(60.0, 60.0),
            delta_y: -1.0,
        });
    }
    session.handle(&InputEvent::PointerDown {
        client: Point::new(300.0, 300.0),
    });
    session.handle(&InputEvent::PointerMove {
        client: Point::new(320.0, 280.0),
    });
    session.handle(&InputEvent::PointerUp);

    let plan = session.frame().ok_or("a fresh session always renders")?;
    tracing::info!(
        cells = plan.count(DrawOpKind::FillRect),
        rings = plan.count(DrawOpKind::StrokeCircle),
        lines = plan.count(DrawOpKind::Line),
        labels = plan.count(DrawOpKind::Text),
        zoom = session.transform().zoom,
        "frame ready"
    );

    let mut svg = SvgSurface::new();
    plan.present(&mut svg);
    let (width, height) = (canvas.width.round() as u32, canvas.height.round() as u32);
    std::fs::write(&out_path, svg.to_svg(width, height))?;
    tracing::info!(path = %out_path, elements = svg.elements(), "wrote SVG");

    let summary = serde_json::json!({
        "birth": birth.to_string(),
        "today": today.to_string(),
        "weeks_lived": session.span().map(|s| s.weeks_lived(today)),
        "transform": session.transform(),
    });
    println!("{summary:#}");
    Ok(())
}
