#![forbid(unsafe_code)]

//! Wander travel-board demo.
//!
//! A scripted walkthrough of the wander widgets: seeds the city
//! recommendation board from pre-rendered host entries, replays a
//! visitor's keystrokes, and pages through a photo carousel, printing
//! each frame to stdout.
//!
//! # Running
//!
//! ```sh
//! cargo run -p wander-demo
//! ```
//!
//! Set `RUST_LOG=debug` to see the widgets' structured trace events.

use std::error::Error;

use wander_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use wander_core::geometry::Rect;
use wander_render::frame::{Frame, HitId};
use wander_widgets::StatefulWidget;
use wander_widgets::carousel::{Carousel, Slide};
use wander_widgets::recs::{RecBoard, RecPanel, RecsState};

const BOARD_WIDTH: u16 = 24;

/// Seed entries as the host page renders them: label plus count cell.
const SEEDED: [(&str, &str); 3] = [("Tokyo", "+4"), ("Lisbon", "+2"), ("Cusco", "+1")];

/// The visitor's scripted submissions.
const SUBMISSIONS: [&str; 4] = ["Kyoto", "lisbon", "Paris, France", "paris japan"];

/// Stand-in photos for the carousel strip.
const PHOTOS: [[&str; 3]; 3] = [
    ["+--------+", "|  fuji  |", "+--------+"],
    ["+--------+", "| alfama |", "+--------+"],
    ["+--------+", "| andes  |", "+--------+"],
];

fn init_logging() {
    if std::env::var_os("RUST_LOG").is_some() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn print_frame(title: &str, frame: &Frame) {
    println!("── {title}");
    for y in 0..frame.buffer.height() {
        let row: String = (0..frame.buffer.width())
            .map(|x| frame.buffer.get(x, y).map_or(' ', |c| c.ch))
            .collect();
        println!("  {}", row.trim_end());
    }
    println!();
}

fn render_board(panel: &RecPanel, recs: &mut RecsState, frame: &mut Frame) {
    let width = frame.buffer.width();
    let height = frame.buffer.height();
    recs.render(
        panel,
        Rect::new(0, 0, width, 1),
        Rect::new(0, 1, width, height.saturating_sub(1)),
        frame,
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    tracing::info!("seeding recommendation board");
    let board = RecBoard::from_rendered(SEEDED)?;
    let mut recs = RecsState::new(board);
    let panel = RecPanel::new();

    let mut frame = Frame::new(BOARD_WIDTH, 6);
    render_board(&panel, &mut recs, &mut frame);
    print_frame("travel board, as seeded", &frame);

    for submission in SUBMISSIONS {
        for ch in submission.chars() {
            recs.handle_key(&KeyEvent::new(KeyCode::Char(ch)));
        }
        recs.handle_key(&KeyEvent::new(KeyCode::Enter));

        frame.reset();
        render_board(&panel, &mut recs, &mut frame);
        print_frame(&format!("after submitting {submission:?}"), &frame);
    }

    tracing::info!("paging the photo carousel");
    let carousel = Carousel::new(PHOTOS.iter().map(|lines| Slide::new(lines.iter().copied())))?
        .hit_id(HitId::new(1));
    let mut state = carousel.state();
    let area = Rect::new(0, 0, 12, 3);

    let mut frame = Frame::new(12, 3);
    StatefulWidget::render(&carousel, area, &mut frame, &mut state);
    print_frame("carousel, first photo", &frame);

    state.advance();
    frame.reset();
    StatefulWidget::render(&carousel, area, &mut frame, &mut state);
    print_frame("after advance", &frame);

    state.retreat();
    state.retreat();
    frame.reset();
    StatefulWidget::render(&carousel, area, &mut frame, &mut state);
    print_frame("after two retreats (wrapped to the last photo)", &frame);

    // A click on the next button routes through the frame's hit regions.
    let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 11, 1);
    let hit = frame.hit_test(click.x, click.y);
    state.handle_mouse(&click, hit, HitId::new(1));
    frame.reset();
    StatefulWidget::render(&carousel, area, &mut frame, &mut state);
    print_frame("after clicking ›", &frame);

    Ok(())
}
