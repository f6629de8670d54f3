/* 
* Resources Hub

  Seams between the control code and the hardware it runs on.
*/

/* --------------------------- Declare Modules -------------------------- */
pub mod encoder;
pub mod actuator;
pub mod indicators;
pub mod sensor;

pub use encoder::*;
pub use actuator::*;
pub use indicators::*;
pub use sensor::*;
