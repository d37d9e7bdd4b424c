pub mod run;
pub mod verify;

pub use run::*;
pub use verify::*;
