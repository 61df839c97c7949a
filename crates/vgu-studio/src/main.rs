use anyhow::{Context, Result};
use vgu_engine::backend::recording::{Call, RecordingBackend};
use vgu_engine::coords::{Alignment, Rect, Vec2};
use vgu_engine::logging::{LoggingConfig, init_logging};
use vgu_engine::paint::{Color, LinearDirection, LinearGradient, RadialGradient};
use vgu_engine::shapes::{Border, TriangleCorner};
use vgu_engine::{Canvas, CanvasConfig};

const WIDTH: f32 = 600.0;
const HEIGHT: f32 = 300.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║            VGU SHAPES STUDIO           ║");
    println!("  ║   recording backend  ·  one frame      ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut canvas = Canvas::new(RecordingBackend::new(), CanvasConfig::default())
        .context("creating canvas")?;
    canvas.create_font("arial", &load_font()).context("loading font")?;
    canvas
        .create_texture("checker", &checker(16), None)
        .context("loading texture")?;
    canvas.backend_mut().take_calls();

    canvas
        .frame(WIDTH, HEIGHT, draw_showcase)
        .context("rendering showcase")?;

    let backend = canvas.backend();
    for call in backend.calls() {
        println!("  {call:?}");
    }
    println!();
    println!(
        "  {} calls · {} allocations · {} released · {} live",
        backend.calls().len(),
        backend.count(Call::is_alloc),
        backend.released().len(),
        backend.live_resources(),
    );
    println!();

    canvas.destroy().context("destroying canvas")?;
    Ok(())
}

fn draw_showcase(c: &mut Canvas<RecordingBackend>) -> vgu_engine::Result<()> {
    // ── solids and borders ────────────────────────────────────────────────
    c.rect(Rect::new(0.0, 0.0, WIDTH, HEIGHT), Color::rgb(0.08, 0.08, 0.1))?;
    c.rect(Rect::new(5.0, 5.0, 30.0, 30.0), Color::BLUE)?;
    c.rect_border(Rect::new(40.0, 5.0, 30.0, 30.0), Border::inside(2.0), Color::RED)?;
    c.circle(Vec2::new(90.0, 20.0), 15.0, Color::WHITE)?;
    c.circle_border(Vec2::new(125.0, 20.0), 15.0, 1.0, Color::GREEN)?;

    // scaled and rotated about its own centre
    c.scope(|c| {
        let pivot = Vec2::new(165.0, 20.0);
        c.scale_uniform(pivot, 0.75)?;
        c.rotate_degrees(pivot, 45.0)?;
        c.rect(Rect::new(150.0, 5.0, 30.0, 30.0), Color::CYAN)
    })?;

    // ── gradients ─────────────────────────────────────────────────────────
    let fade_bounds = Rect::new(185.0, 5.0, 30.0, 30.0);
    let fade = c.linear_gradient(
        &LinearGradient::new(fade_bounds, Color::RED, Color::GREEN, LinearDirection::LeftToRight)
            .with_feather(10.0),
    )?;
    c.rect(fade_bounds, fade)?;

    let orb_bounds = Rect::new(220.0, 5.0, 30.0, 30.0);
    let orb = c.linear_gradient(&LinearGradient::new(
        orb_bounds,
        Color::YELLOW,
        Color::MAGENTA,
        LinearDirection::DiagonalLeftToRightDown,
    ))?;
    c.circle(Vec2::new(235.0, 20.0), 15.0, orb)?;

    let pill_bounds = Rect::new(255.0, 5.0, 60.0, 30.0);
    let pill = c.linear_gradient(&LinearGradient::new(
        pill_bounds,
        Color::BLUE,
        Color::CYAN,
        LinearDirection::TopToBottom,
    ))?;
    c.rounded_rect(pill_bounds, 8.0, pill)?;

    let glow_bounds = Rect::new(320.0, 5.0, 30.0, 30.0);
    let glow = c.radial_gradient(&RadialGradient::new(
        glow_bounds,
        1.0,
        35.0,
        Color::ORANGE,
        Color::TRANSPARENT,
        Alignment::LeftTop,
    ))?;
    c.rounded_rect(glow_bounds, 6.0, glow)?;

    // ── triangles and polygons ────────────────────────────────────────────
    c.right_triangle(
        Rect::new(355.0, 5.0, 30.0, 30.0),
        TriangleCorner::BottomRight,
        Color::ORANGE,
    )?;

    let wedge_bounds = Rect::new(390.0, 5.0, 30.0, 30.0);
    let wedge = c.linear_gradient(&LinearGradient::new(
        wedge_bounds,
        Color::CYAN,
        Color::MAGENTA,
        LinearDirection::DiagonalLeftToRightUp,
    ))?;
    c.right_triangle_border(wedge_bounds, TriangleCorner::TopRight, 2.0, wedge)?;

    c.polygon(
        &[
            Vec2::new(430.0, 35.0),
            Vec2::new(445.0, 5.0),
            Vec2::new(460.0, 35.0),
            Vec2::new(445.0, 25.0),
        ],
        Color::WHITE,
    )?;

    // ── textures ──────────────────────────────────────────────────────────
    c.textured_rounded_rect(Rect::new(465.0, 5.0, 30.0, 30.0), 4.0, "checker")?;

    // ── text ──────────────────────────────────────────────────────────────
    c.set_font_data("arial", 20.0, Alignment::LeftTop);
    c.text("Hello, shapes!", Vec2::new(5.0, 50.0), Color::WHITE)?;

    c.set_font_data("arial", 12.0, Alignment::LeftTop);
    let label = "Smaller text!";
    let width = c.text_width(label)?;
    c.text(label, Vec2::new(5.0, 80.0), Color::BLUE)?;
    c.text("<- measured", Vec2::new(5.0 + width + 4.0, 80.0), Color::YELLOW)?;

    let banner_bounds = Rect::new(5.0, 100.0, 200.0, 24.0);
    let banner = c.linear_gradient(&LinearGradient::new(
        banner_bounds,
        Color::ORANGE,
        Color::MAGENTA,
        LinearDirection::LeftToRight,
    ))?;
    c.set_font_data("arial", 20.0, Alignment::LeftTop);
    c.text("Gradient text", banner_bounds.min(), banner)?;

    log::info!("showcase drawn ({} frame resources)", c.tracked_resources());
    Ok(())
}

fn load_font() -> Vec<u8> {
    let found = [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok());

    // The recording backend only checks that font data is present.
    found.unwrap_or_else(|| {
        log::warn!("no system font found; using placeholder font data");
        b"placeholder".to_vec()
    })
}

/// RGBA checkerboard, `size` × `size` pixels.
fn checker(size: usize) -> Vec<u8> {
    (0..size * size)
        .flat_map(|i| {
            let (x, y) = (i % size, i / size);
            if (x / 4 + y / 4) % 2 == 0 {
                [255, 255, 255, 255]
            } else {
                [40, 40, 40, 255]
            }
        })
        .collect()
}
