//! HTML fragment builders. Pure string assembly; widgets decide where the
//! fragments land.

pub mod notifications;
pub mod wallet;
