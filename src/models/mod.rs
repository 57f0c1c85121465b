// Module exports for models

pub mod appointment;
