//! Core support infrastructure shared by the acquisition pipeline and
//! platform glue.

pub mod logging;
