pub mod clean;
pub mod conf;
pub mod ctx;
pub mod device;
pub mod logging;
pub mod route;
