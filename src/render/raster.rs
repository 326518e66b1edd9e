use crate::foundation::core::Rgb8;
use crate::foundation::error::{TumbleError, TumbleResult};
use crate::foundation::math::mul_div255_u16;
use crate::model::pyramid::{Face, Model};
use crate::projection::perspective::{Perspective, ProjectedPoint};
use crate::render::frame::FrameRgb;
use crate::transform::rotate::rotate_about_vertical_axis;

/// Largest supported buffer side; `vello_cpu` surfaces are addressed with `u16`.
pub const MAX_FRAME_SIZE: u32 = u16::MAX as u32;

/// Fixed drawing parameters shared by every frame of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterSettings {
    /// Side length of the square output buffer in pixels.
    pub size: u32,
    /// Color every frame is cleared to.
    pub background: Rgb8,
    /// Polygon outline color.
    pub outline: Rgb8,
    /// Outline stroke width in pixels.
    pub outline_width: f64,
    /// Camera used to project rotated vertices.
    pub perspective: Perspective,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            size: 500,
            background: Rgb8::BLACK,
            outline: Rgb8::WHITE,
            outline_width: 1.0,
            perspective: Perspective::default(),
        }
    }
}

impl RasterSettings {
    /// Check the buffer size against the rasterizer limits.
    pub fn validate(&self) -> TumbleResult<()> {
        if self.size == 0 {
            return Err(TumbleError::validation("frame size must be non-zero"));
        }
        if self.size > MAX_FRAME_SIZE {
            return Err(TumbleError::validation(format!(
                "frame size {} exceeds the maximum of {MAX_FRAME_SIZE}",
                self.size
            )));
        }
        if !self.outline_width.is_finite() || self.outline_width < 0.0 {
            return Err(TumbleError::validation(
                "outline width must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Pair faces with colors positionally, stopping at the shorter list.
///
/// Faces past the end of `colors` are not drawn.
pub fn paired_faces<'a>(
    faces: &'a [Face],
    colors: &'a [Rgb8],
) -> impl Iterator<Item = (Face, Rgb8)> + 'a {
    faces.iter().copied().zip(colors.iter().copied())
}

/// CPU rasterizer for the rotating model.
///
/// Owns a reusable `vello_cpu` context and target surface; every call to
/// [`Rasterizer::draw_frame`] clears both and returns a fresh, independently owned frame.
pub struct Rasterizer {
    settings: RasterSettings,
    model: Model,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Rasterizer {
    /// Create a rasterizer for the built-in pyramid.
    pub fn new(settings: RasterSettings) -> TumbleResult<Self> {
        Self::with_model(settings, Model::pyramid())
    }

    /// Create a rasterizer for an explicit model.
    pub fn with_model(settings: RasterSettings, model: Model) -> TumbleResult<Self> {
        settings.validate()?;
        let side: u16 = settings
            .size
            .try_into()
            .map_err(|_| TumbleError::validation("frame size exceeds u16"))?;
        Ok(Self {
            settings,
            model,
            ctx: vello_cpu::RenderContext::new(side, side),
            pixmap: vello_cpu::Pixmap::new(side, side),
        })
    }

    /// Settings this rasterizer was built with.
    pub fn settings(&self) -> &RasterSettings {
        &self.settings
    }

    /// Render the model rotated by `angle` radians.
    ///
    /// Clears to the background, rotates and projects every vertex, then fills each
    /// `(face, color)` pair in face order with an outline on top. No depth test is performed.
    pub fn draw_frame(&mut self, angle: f64, colors: &[Rgb8]) -> TumbleResult<FrameRgb> {
        let size = self.settings.size;
        let rotated = rotate_about_vertical_axis(self.model.vertices(), angle);
        let projected = self.settings.perspective.project_all(&rotated, size);

        let ctx = &mut self.ctx;
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(self.settings.background.to_cpu_color());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(size),
            f64::from(size),
        ));

        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(self.settings.outline_width));
        for (face, color) in paired_faces(self.model.faces(), colors) {
            let path = bezpath_to_cpu(&face_path(face, &projected)?);
            ctx.set_paint(color.to_cpu_color());
            ctx.fill_path(&path);
            if self.settings.outline_width > 0.0 {
                ctx.set_paint(self.settings.outline.to_cpu_color());
                ctx.stroke_path(&path);
            }
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        let src = self.pixmap.data_as_u8_slice();
        let mut data = vec![0u8; FrameRgb::byte_len_for(size, size)];
        flatten_premul_to_rgb8(&mut data, src, self.settings.background)?;
        Ok(FrameRgb {
            width: size,
            height: size,
            data,
        })
    }
}

/// Render one frame with a throwaway rasterizer.
pub fn draw_frame(angle: f64, colors: &[Rgb8], settings: RasterSettings) -> TumbleResult<FrameRgb> {
    Rasterizer::new(settings)?.draw_frame(angle, colors)
}

/// Closed polygon through the projected corners of `face`.
///
/// Integer pixel coordinates address pixel centers, hence the half-pixel shift.
pub(crate) fn face_path(face: Face, projected: &[ProjectedPoint]) -> TumbleResult<kurbo::BezPath> {
    let mut path = kurbo::BezPath::new();
    for (n, &i) in face.indices().iter().enumerate() {
        let p = projected
            .get(i)
            .ok_or_else(|| TumbleError::render(format!("face references missing vertex {i}")))?;
        let pt = kurbo::Point::new(f64::from(p.x) + 0.5, f64::from(p.y) + 0.5);
        if n == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
    Ok(path)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Drop alpha from premultiplied RGBA8, compositing any translucent pixel over `bg`.
fn flatten_premul_to_rgb8(dst: &mut [u8], src_premul: &[u8], bg: Rgb8) -> TumbleResult<()> {
    if src_premul.len() % 4 != 0 || dst.len() / 3 != src_premul.len() / 4 || dst.len() % 3 != 0 {
        return Err(TumbleError::render(format!(
            "surface readback size mismatch: {} rgba bytes for {} rgb bytes",
            src_premul.len(),
            dst.len()
        )));
    }

    let [bg_r, bg_g, bg_b] = bg.to_array().map(u16::from);
    for (d, s) in dst.chunks_exact_mut(3).zip(src_premul.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(&s[..3]);
            continue;
        }

        let inv = 255u16 - a;
        d[0] = (u16::from(s[0]) + mul_div255_u16(bg_r, inv)).min(255) as u8;
        d[1] = (u16::from(s[1]) + mul_div255_u16(bg_g, inv)).min(255) as u8;
        d[2] = (u16::from(s[2]) + mul_div255_u16(bg_b, inv)).min(255) as u8;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
