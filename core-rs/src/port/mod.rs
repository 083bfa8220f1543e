/**
 * port module
 * Random free-port selection for test harness targets
 */

pub mod finder;

pub use finder::{
    pick_available_port, LoopbackProbe, PortFinder, PortProbe, PortRange, MAX_PORT_NUMBER,
    MIN_PORT_NUMBER,
};
