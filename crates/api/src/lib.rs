mod env;
mod global_state;
mod response;
mod utils;
mod routes;

pub use routes::{
    app_routes,
    misc_routes,
    pack_routes,
};

pub use env::ApiServerEnv;
pub use global_state::GlobalState;
pub use utils::setup_tracing;
pub use response::{AppError, GenericResponse};
