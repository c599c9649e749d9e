//! Infrastructure layer: everything that touches the disk, the environment,
//! or the logger.

pub mod log_sink;
pub mod paths;
pub mod storage;
pub mod ui_bridge;
