/*
    Resource Allocation Module

    Motor PWM pins sit on channel A (CCW) and B (CW) of their slice.
*/

use super::*;

assign_resources! {
    wheel: WheelResources {
        PWM_CW_PIN: PIN_15,
        PWM_CCW_PIN: PIN_14,
        ENCODER_PIN_A: PIN_6,
        ENCODER_PIN_B: PIN_7,
        SLICE: PWM_SLICE7,
    },

    arm: ArmResources {
        PWM_CW_PIN: PIN_3,
        PWM_CCW_PIN: PIN_2,
        ENCODER_PIN_A: PIN_4,
        ENCODER_PIN_B: PIN_5,
        SLICE: PWM_SLICE1,
    },

    inputs: InputResources {
        BUTTON_PIN: PIN_16,
        SENSOR_GATE_PIN: PIN_17,
        IR_PIN: PIN_26,
    },

    indicators: IndicatorResources {
        HEARTBEAT_LED_PIN: PIN_25,
        STATUS_LED_PIN: PIN_18,
        MOTOR_ENABLE_PIN: PIN_19,
    },
}

bind_interrupts!(pub struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<peripherals::PIO0>;
    USBCTRL_IRQ => UsbInterruptHandler<peripherals::USB>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});
