/*
* Button Task
*/

// Resources
use crate::resources::BUTTON_DEBOUNCE_MS;
use crate::resources::BUTTON_EVENTS;

// Library
use dc_robot::ButtonEvent;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

/* --------------------------- Code -------------------------- */
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    loop {
        button.wait_for_falling_edge().await;
        Timer::after_millis(BUTTON_DEBOUNCE_MS).await;

        if button.is_low() {
            if BUTTON_EVENTS.try_send(ButtonEvent::Pressed).is_err() {
                log::warn!("button queue full, press dropped");
            }
            button.wait_for_high().await;
        }
    }
}
