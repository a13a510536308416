mod misc;
mod pack;

use axum::Router;

use crate::GlobalState;

pub use misc::misc_routes;
pub use pack::pack_routes;

pub fn app_routes() -> Router<GlobalState> {
    Router::new()
        .merge(misc_routes())
        .merge(pack_routes())
}
