//! Device REST paths

pub const SYSTEM_LOGS: &str = "/api/system/logs";
pub const SYSTEM_LOGS_CLEAR: &str = "/api/system/logs/clear";
pub const SYSTEM_STATS: &str = "/api/system/stats";

pub const AC_STATE: &str = "/api/ac/state";
pub const AC_CONTROL: &str = "/api/ac/control";

pub const IR_LIST: &str = "/api/ir/list";
pub const IR_SEND: &str = "/api/send";
pub const IR_DELETE: &str = "/api/ir/delete";
pub const IR_RENAME: &str = "/api/ir/rename";
pub const IR_SAVE: &str = "/api/save";

pub const LEARN_START: &str = "/api/learn/start";
pub const LEARN_STOP: &str = "/api/learn/stop";
pub const LEARN_STATUS: &str = "/api/learn/status";

pub const LED_CONFIG: &str = "/api/led/config";
pub const LED_STATE_CONFIG: &str = "/api/led/state-config";
pub const LED_SAVE_PRESET: &str = "/api/led/save_preset";

pub const BRAND_LIST: &str = "/api/brand/list";
pub const BRAND_ADD: &str = "/api/brand/add";
pub const BRAND_RENAME: &str = "/api/brand/rename";
pub const BRAND_DELETE: &str = "/api/brand/delete";

pub const WIFI_SCAN: &str = "/api/wifi/scan";
pub const WIFI_CONFIG: &str = "/api/wifi/config";

pub const OTA_CHECK: &str = "/api/ota/check";
pub const OTA_START: &str = "/api/ota/start";
