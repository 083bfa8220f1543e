/**
 * finder.rs
 * Random free-port selection for test harness targets
 *
 * Strategy:
 * - Sample a port uniformly from [start, end]
 * - Probe 127.0.0.1:<port> with a TCP connect
 * - Connect refused => nobody listens there => port is handed out
 * - Otherwise resample (no retry limit)
 *
 * Default range: [10000, 30000]
 */

use rand::Rng;
use std::net::{Ipv4Addr, TcpStream};
use tracing::{debug, info};

use crate::errors::DgError;

/// Lowest port handed out by default
pub const MIN_PORT_NUMBER: u16 = 10000;

/// Highest port handed out by default
pub const MAX_PORT_NUMBER: u16 = 30000;

/// Closed range of candidate ports, always `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: u16, max: u16) -> Result<Self, DgError> {
        if min > max {
            return Err(DgError::InvalidPortRange(format!(
                "lower bound {} is above upper bound {}",
                min, max
            )));
        }

        Ok(PortRange { start: min, end: max })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Check if port is within this range
    pub fn contains(&self, port: u16) -> bool {
        port >= self.start && port <= self.end
    }

    /// Number of candidate ports in the range
    pub fn size(&self) -> usize {
        (self.end - self.start) as usize + 1
    }
}

impl Default for PortRange {
    fn default() -> Self {
        PortRange {
            start: MIN_PORT_NUMBER,
            end: MAX_PORT_NUMBER,
        }
    }
}

/// Decides whether a port is free for a new listener
pub trait PortProbe {
    fn is_available(&self, port: u16) -> bool;
}

/// Probes by connecting to the loopback interface.
///
/// A refused (or otherwise failed) connection means the port is unused.
/// The probe socket is closed as soon as it goes out of scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopbackProbe;

impl PortProbe for LoopbackProbe {
    fn is_available(&self, port: u16) -> bool {
        TcpStream::connect((Ipv4Addr::LOCALHOST, port)).is_err()
    }
}

/// Port Finder - samples a range until the probe reports a free port
pub struct PortFinder<P: PortProbe = LoopbackProbe> {
    range: PortRange,
    probe: P,
}

impl PortFinder<LoopbackProbe> {
    /// Create a finder over `range` using the loopback probe
    pub fn new(range: PortRange) -> Self {
        PortFinder {
            range,
            probe: LoopbackProbe,
        }
    }
}

impl<P: PortProbe> PortFinder<P> {
    /// Create a finder with a custom probe
    pub fn with_probe(range: PortRange, probe: P) -> Self {
        PortFinder { range, probe }
    }

    pub fn range(&self) -> PortRange {
        self.range
    }

    /// Pick a free port using the thread-local RNG.
    ///
    /// Loops forever when every port in the range is taken.
    pub fn pick(&self) -> u16 {
        self.pick_with_rng(&mut rand::thread_rng())
    }

    /// Pick a free port drawing candidates from `rng`
    pub fn pick_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> u16 {
        let mut attempts: u64 = 0;

        loop {
            attempts += 1;
            let port = rng.gen_range(self.range.start..=self.range.end);

            if self.probe.is_available(port) {
                info!(
                    port,
                    attempts,
                    candidates = self.range.size(),
                    "picked available port"
                );
                return port;
            }

            debug!(port, attempts, "port in use, resampling");
        }
    }
}

/// Pick a random free loopback port in `[min, max]`.
///
/// # Errors
/// Only when `min > max`. An exhausted range never returns.
///
/// # Example
/// ```no_run
/// let port = dg_tools::pick_available_port(10000, 30000)?;
/// assert!((10000..=30000).contains(&port));
/// # Ok::<(), dg_tools::DgError>(())
/// ```
pub fn pick_available_port(min: u16, max: u16) -> Result<u16, DgError> {
    let range = PortRange::new(min, max)?;
    Ok(PortFinder::new(range).pick())
}
