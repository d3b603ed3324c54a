pub mod dashboard_use_case;
pub mod ports;
