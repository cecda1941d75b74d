//! Gateway requests issued by the update loop and their results

use gpanel_core::{
    AcCommand, AcState, LearnStatus, LedConfig, OtaInfo, Rgb, SystemColor, SystemStats,
    WifiNetwork,
};
use gpanel_gateway::LedPush;

/// A read of one gateway resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    Stats,
    AcState,
    IrKeys,
    Brands,
    Logs,
    LedConfig,
    SystemColors,
    LearnStatus,
    WifiScan,
    OtaCheck,
}

/// Data returned by a successful [`Fetch`].
#[derive(Debug, Clone)]
pub enum Pulled {
    Stats(SystemStats),
    AcState(AcState),
    IrKeys(Vec<String>),
    Brands(Vec<String>),
    Logs(String),
    LedConfig(LedConfig),
    SystemColors(Vec<SystemColor>),
    LearnStatus(LearnStatus),
    WifiNetworks(Vec<WifiNetwork>),
    Ota(OtaInfo),
}

impl Pulled {
    pub fn fetch(&self) -> Fetch {
        match self {
            Pulled::Stats(_) => Fetch::Stats,
            Pulled::AcState(_) => Fetch::AcState,
            Pulled::IrKeys(_) => Fetch::IrKeys,
            Pulled::Brands(_) => Fetch::Brands,
            Pulled::Logs(_) => Fetch::Logs,
            Pulled::LedConfig(_) => Fetch::LedConfig,
            Pulled::SystemColors(_) => Fetch::SystemColors,
            Pulled::LearnStatus(_) => Fetch::LearnStatus,
            Pulled::WifiNetworks(_) => Fetch::WifiScan,
            Pulled::Ota(_) => Fetch::OtaCheck,
        }
    }
}

/// A state-changing call. Exactly one gateway request per push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Push {
    SetAc(AcCommand),
    SendKey(String),
    DeleteKey(String),
    RenameKey { old: String, new: String },
    SaveLearnedKey(String),
    StartLearn,
    StopLearn,
    Led(LedPush),
    SystemColor { id: u32, color: Rgb },
    SaveLedPreset,
    AddBrand(String),
    RenameBrand { old: String, new: String },
    DeleteBrand(String),
    WifiConfig { ssid: String, password: String },
    OtaStart,
    ClearLogs,
}

/// Background timers owned by the action layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Poller {
    /// Stats refresh while the dashboard is visible
    Dashboard,
    /// Learn-status refresh while a learn session is open
    Learn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulled_maps_back_to_fetch() {
        assert_eq!(Pulled::Logs(String::new()).fetch(), Fetch::Logs);
        assert_eq!(Pulled::WifiNetworks(Vec::new()).fetch(), Fetch::WifiScan);
        assert_eq!(
            Pulled::LearnStatus(LearnStatus::default()).fetch(),
            Fetch::LearnStatus
        );
    }
}
