use std::fmt;
use std::str::FromStr;

/// Execution backend the engine should initialize against.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Cpu,
    Cuda { device_id: i32 },
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "CPU"),
            Device::Cuda { device_id } => write!(f, "CUDA(device_id={device_id})"),
        }
    }
}

impl FromStr for Device {
    type Err = String;

    /// Parse a backend hint: "cpu", "cuda", or "cuda:N".
    fn from_str(hint: &str) -> Result<Self, Self::Err> {
        match hint {
            "cpu" => Ok(Device::Cpu),
            "cuda" => Ok(Device::Cuda { device_id: 0 }),
            _ => {
                if let Some(ordinal) = hint.strip_prefix("cuda:") {
                    let device_id = ordinal
                        .parse::<i32>()
                        .map_err(|_| format!("invalid CUDA ordinal in hint '{hint}'"))?;
                    Ok(Device::Cuda { device_id })
                } else {
                    Err(format!("unknown backend hint '{hint}'"))
                }
            }
        }
    }
}
