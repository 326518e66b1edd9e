/// Large off-buffer pixel coordinate used when a projection degenerates.
pub(crate) const OFF_BUFFER_COORD: i32 = 1 << 20;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Floor a pixel coordinate and saturate it to the off-buffer range.
pub(crate) fn floor_to_pixel(v: f64) -> i32 {
    if v.is_nan() {
        return OFF_BUFFER_COORD;
    }
    v.floor()
        .clamp(-f64::from(OFF_BUFFER_COORD), f64::from(OFF_BUFFER_COORD)) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
