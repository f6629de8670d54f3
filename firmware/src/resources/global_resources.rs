/* 
* Global Resources 
*/

use super::*;

/* --------------------------- Channels-------------------------- */
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_SIZE> = Channel::new();

/* --------------------------- Encoders -------------------------- */
pub static WHEEL_COUNT: SharedCount = SharedCount::new();
pub static ARM_COUNT: SharedCount = SharedCount::new();
