/* 
* Resources Hub
*/

/* --------------------------- Library -------------------------- */
use defmt_rtt as _;
use panic_probe as _;
use assign_resources::assign_resources;
use dc_robot::ButtonEvent;
use dc_robot::SharedCount;

use embassy_rp::bind_interrupts;
use embassy_rp::peripherals;
use embassy_rp::adc::InterruptHandler as AdcInterruptHandler;
use embassy_rp::pio::InterruptHandler as PioInterruptHandler;
use embassy_rp::usb::InterruptHandler as UsbInterruptHandler;
use embassy_sync::channel::Channel;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/* --------------------------- Declare Modules -------------------------- */
pub mod gpio_list;
pub mod config;
pub mod global_resources;

pub use gpio_list::*;
pub use config::*;
pub use global_resources::*;
