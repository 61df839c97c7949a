use std::collections::HashSet;

use vgu_engine::backend::recording::{Call, RecordingBackend};
use vgu_engine::backend::{ResourceHandle, TextAlign};
use vgu_engine::coords::{Alignment, CornerRadii, Rect, Vec2};
use vgu_engine::paint::{Color, LinearDirection, LinearGradient, RadialGradient};
use vgu_engine::shapes::{Border, TriangleCorner};
use vgu_engine::{Canvas, Error};

fn allocated(calls: &[Call]) -> Vec<ResourceHandle> {
    calls
        .iter()
        .filter_map(|c| match c {
            Call::AllocColor(_, h) => Some(ResourceHandle::Color(*h)),
            Call::AllocLinearGradient { paint, .. }
            | Call::AllocRadialGradient { paint, .. }
            | Call::AllocImagePattern(_, paint) => Some(ResourceHandle::Paint(*paint)),
            _ => None,
        })
        .collect()
}

#[test]
fn every_allocation_is_released_exactly_once() {
    let mut canvas = Canvas::with_defaults(RecordingBackend::new()).unwrap();
    canvas.create_font("arial", b"ttf").unwrap();
    canvas.create_texture("tile", b"png", None).unwrap();

    canvas
        .frame(600.0, 300.0, |c| {
            let r = Rect::new(5.0, 5.0, 30.0, 30.0);
            c.rect(r, Color::BLUE)?;
            c.rect_border(r, Border::inside(1.0), Color::RED)?;
            c.rounded_rect(r, CornerRadii::new(1.0, 2.0, 3.0, 4.0), Color::WHITE)?;
            c.circle(Vec2::new(90.0, 20.0), 15.0, Color::WHITE)?;
            c.circle_border(Vec2::new(125.0, 20.0), 15.0, 1.0, Color::GREEN)?;

            let radial = c.radial_gradient(&RadialGradient::new(
                r,
                1.0,
                35.0,
                Color::YELLOW,
                Color::MAGENTA,
                Alignment::LeftTop,
            ))?;
            c.rounded_rect(r, 10.0, radial)?;
            c.rounded_rect_border(r, 10.0, Border::outside(2.0), radial)?;

            let diag = c.linear_gradient(&LinearGradient::new(
                r,
                Color::CYAN,
                Color::MAGENTA,
                LinearDirection::DiagonalLeftToRightUp,
            ))?;
            c.right_triangle_border(r, TriangleCorner::TopRight, 1.0, diag)?;
            c.right_triangle(r, TriangleCorner::BottomRight, Color::ORANGE)?;
            c.polygon(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)], Color::WHITE)?;
            c.textured_rounded_rect(r, 4.0, "tile")?;

            c.set_font_data("arial", 10.0, Alignment::LeftTop);
            c.text("Smaller text!", Vec2::new(10.0, 55.0), Color::BLUE)
        })
        .unwrap();

    let calls = canvas.backend().calls();
    let alloc = allocated(calls);
    let released = canvas.backend().released();

    assert_eq!(released.len(), alloc.len());
    let unique: HashSet<_> = released.iter().collect();
    assert_eq!(unique.len(), released.len(), "a handle was released twice");
    assert_eq!(unique, alloc.iter().collect::<HashSet<_>>());
    assert_eq!(canvas.backend().live_resources(), 0);
    assert!(calls.contains(&Call::TextAlign(TextAlign::LEFT | TextAlign::TOP)));
}

#[test]
fn free_resources_can_run_mid_frame() {
    let mut canvas = Canvas::with_defaults(RecordingBackend::new()).unwrap();
    canvas.begin_frame(10.0, 10.0).unwrap();
    canvas.rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED).unwrap();

    assert_eq!(canvas.free_resources(), Ok(1));
    assert_eq!(canvas.free_resources(), Ok(0));
    canvas.end_frame().unwrap();
}

#[test]
fn paints_from_a_previous_frame_are_rejected() {
    let mut canvas = Canvas::with_defaults(RecordingBackend::new()).unwrap();
    let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);

    let stale = canvas
        .frame(10.0, 10.0, |c| {
            c.linear_gradient(&LinearGradient::new(
                bounds,
                Color::RED,
                Color::BLUE,
                LinearDirection::TopToBottom,
            ))
        })
        .unwrap();

    let out = canvas.frame(10.0, 10.0, |c| c.rect(bounds, stale));
    assert_eq!(out, Err(Error::StalePaint));
    assert_eq!(canvas.backend().live_resources(), 0);
}

#[test]
fn partial_release_failure_still_sweeps_everything() {
    let mut canvas = Canvas::with_defaults(RecordingBackend::new()).unwrap();
    canvas.begin_frame(10.0, 10.0).unwrap();
    for _ in 0..4 {
        canvas.rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED).unwrap();
    }
    let second = allocated(canvas.backend().calls())[1];
    canvas.backend_mut().fail_release_of(second);
    canvas.end_frame().unwrap();

    assert_eq!(
        canvas.free_resources(),
        Err(Error::Release {
            failed: 1,
            total: 4,
        })
    );
    assert_eq!(canvas.tracked_resources(), 0);
    assert_eq!(canvas.backend().released().len(), 3);
}

#[test]
fn paints_cannot_cross_canvases() {
    let mut a = Canvas::with_defaults(RecordingBackend::new()).unwrap();
    let mut b = Canvas::with_defaults(RecordingBackend::new()).unwrap();
    let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);

    a.begin_frame(10.0, 10.0).unwrap();
    b.begin_frame(10.0, 10.0).unwrap();
    let fade = a
        .linear_gradient(&LinearGradient::new(
            bounds,
            Color::RED,
            Color::BLUE,
            LinearDirection::LeftToRight,
        ))
        .unwrap();
    b.backend_mut().take_calls();

    assert_eq!(b.rect(bounds, fade), Err(Error::ForeignPaint));
    assert_eq!(b.rect_border(bounds, 1.0, fade), Err(Error::ForeignPaint));
    assert_eq!(
        b.backend()
            .count(|c| matches!(c, Call::FillPaint(_) | Call::StrokePaint(_))),
        0
    );
    assert!(b.backend().calls().is_empty());

    // a freed paint from another canvas is still foreign, not merely stale
    a.end_frame().unwrap();
    a.free_resources().unwrap();
    b.end_frame().unwrap();
    b.free_resources().unwrap();
    b.begin_frame(10.0, 10.0).unwrap();
    assert_eq!(b.rect(bounds, fade), Err(Error::ForeignPaint));
}
