/// Content service interface
pub mod content;
