pub mod reactive_core;
