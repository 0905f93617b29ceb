/// Unscaled ADC result, 12 bits on the ESP32 oneshot driver.
pub type RawCount = u16;
/// Fixed point knob position, `FULL_SCALE` is 100%.
pub type Percent = u16;
pub type KnobIndex = usize;

pub const FULL_SCALE: Percent = 32768;

pub fn percent_to_float(percent: Percent) -> f32 {
    percent as f32 * 100.0 / FULL_SCALE as f32
}

pub fn percent_to_byte(percent: Percent) -> u8 {
    (percent.min(FULL_SCALE) as u32 * 255 / FULL_SCALE as u32) as u8
}
