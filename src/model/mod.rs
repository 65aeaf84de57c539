pub use vivarium_core::{BrainLogic, CreatureLogic, EyeLogic};
pub mod brain {
    pub use vivarium_core::brain::*;
}
pub mod config {
    pub use vivarium_core::config::*;
}
pub mod collision {
    pub use vivarium_core::collision::*;
}
pub mod lifecycle {
    pub use vivarium_core::lifecycle::*;
}
pub mod population {
    pub use vivarium_core::population::*;
}
pub mod world {
    pub use vivarium_core::world::*;
}
pub mod state {
    pub use vivarium_data::*;
}

pub mod simulation;
pub mod subscription;
pub mod ticker;
