use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 128), 128);
    assert_eq!(mul_div255_u16(0, 200), 0);
}

#[test]
fn floor_to_pixel_floors_negative_values() {
    assert_eq!(floor_to_pixel(199.999), 199);
    assert_eq!(floor_to_pixel(-0.5), -1);
    assert_eq!(floor_to_pixel(250.0), 250);
}

#[test]
fn floor_to_pixel_saturates_non_finite() {
    assert_eq!(floor_to_pixel(f64::INFINITY), OFF_BUFFER_COORD);
    assert_eq!(floor_to_pixel(f64::NEG_INFINITY), -OFF_BUFFER_COORD);
    assert_eq!(floor_to_pixel(f64::NAN), OFF_BUFFER_COORD);
}
