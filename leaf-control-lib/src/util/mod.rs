pub mod endpoint;
pub mod external_control;
pub mod ranges;
