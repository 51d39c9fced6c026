//! Device tags
//!
//! Only the CPU performs real work. The accelerator kinds are accepted as
//! tags so that tensors can carry them through transfers, but operations on
//! such tensors still execute on the host.

use std::fmt;

/// Execution-target kind
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Host CPU
    #[default]
    Cpu,
    /// NVIDIA CUDA (tag only)
    Cuda,
    /// Intel XPU (tag only)
    Xpu,
    /// Neural processing unit (tag only)
    Npu,
    /// Tensor processing unit (tag only)
    Tpu,
}

impl DeviceKind {
    /// Lowercase name ("cpu", "cuda", ...)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Cuda => "cuda",
            Self::Xpu => "xpu",
            Self::Npu => "npu",
            Self::Tpu => "tpu",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A device tag: kind plus ordinal
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Device {
    kind: DeviceKind,
    id: usize,
}

impl Device {
    /// Create a device tag
    pub const fn new(kind: DeviceKind, id: usize) -> Self {
        Self { kind, id }
    }

    /// The host CPU
    pub const fn cpu() -> Self {
        Self::new(DeviceKind::Cpu, 0)
    }

    /// Device kind
    #[inline]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Device ordinal
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Number of available devices of `kind` (0 means unavailable)
pub fn device_count(kind: DeviceKind) -> usize {
    match kind {
        DeviceKind::Cpu => 1,
        DeviceKind::Cuda | DeviceKind::Xpu | DeviceKind::Npu | DeviceKind::Tpu => 0,
    }
}
