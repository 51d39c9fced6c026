//! CPU client and its configuration

use crate::runtime::{Device, RuntimeClient};

/// Tunables for the iterative linear-algebra kernels
///
/// # Example
///
/// ```
/// use tensr::runtime::cpu::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_max_jacobi_sweeps(50)
///     .with_singular_tolerance(10.0);
/// assert_eq!(config.max_jacobi_sweeps, 50);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Sweep budget for one-sided (SVD) and two-sided (symmetric eig) Jacobi
    pub max_jacobi_sweeps: usize,
    /// Shifted-QR iterations allowed per eigenvalue of a nonsymmetric matrix
    pub max_qr_iterations: usize,
    /// Scale applied to `n * eps * max|A|` when deciding a pivot is zero
    pub singular_tolerance: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_jacobi_sweeps: 30,
            max_qr_iterations: 200,
            singular_tolerance: 1.0,
        }
    }
}

impl ClientConfig {
    /// Set the Jacobi sweep budget
    pub fn with_max_jacobi_sweeps(mut self, sweeps: usize) -> Self {
        self.max_jacobi_sweeps = sweeps;
        self
    }

    /// Set the per-eigenvalue QR iteration budget
    pub fn with_max_qr_iterations(mut self, iterations: usize) -> Self {
        self.max_qr_iterations = iterations;
        self
    }

    /// Set the singularity tolerance scale
    pub fn with_singular_tolerance(mut self, scale: f64) -> Self {
        self.singular_tolerance = scale;
        self
    }
}

/// CPU client for operation dispatch
///
/// Operations are exposed through the traits in [`crate::ops`], e.g.
/// `client.add(&a, &b)?`. Results carry the device tag of their first input.
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: Device,
    pub(crate) config: ClientConfig,
}

impl CpuClient {
    /// Create a new CPU client with default configuration
    pub fn new(device: Device) -> Self {
        Self::with_config(device, ClientConfig::default())
    }

    /// Create a new CPU client with explicit configuration
    pub fn with_config(device: Device, config: ClientConfig) -> Self {
        tracing::debug!(%device, ?config, "creating cpu client");
        Self { device, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for CpuClient {
    fn default() -> Self {
        Self::new(Device::cpu())
    }
}

impl RuntimeClient for CpuClient {
    fn device(&self) -> &Device {
        &self.device
    }

    fn synchronize(&self) {
        // CPU operations are synchronous, nothing to do
    }
}
