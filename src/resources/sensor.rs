/*
    IR Distance Sensor
*/

use crate::config::ADC_FULL_SCALE;
use crate::config::IR_REFERENCE_MV;

/// Scales a raw ADC sample to millivolts at the sensor output.
pub fn adc_to_millivolts(raw: u16) -> f32 {
    let raw = raw.min(ADC_FULL_SCALE);
    return raw as f32 / ADC_FULL_SCALE as f32 * IR_REFERENCE_MV;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_is_reference_voltage() {
        assert_eq!(adc_to_millivolts(0), 0.0);
        assert!((adc_to_millivolts(ADC_FULL_SCALE) - IR_REFERENCE_MV).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_samples_saturate() {
        assert_eq!(adc_to_millivolts(u16::MAX), adc_to_millivolts(ADC_FULL_SCALE));
    }

    #[test]
    fn midscale_is_half_reference() {
        let mv = adc_to_millivolts(2048);
        assert!((mv - 1650.4).abs() < 1.0);
    }
}
