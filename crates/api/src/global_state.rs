use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use axum::http::StatusCode;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pack_opener_runtime::{Pack, PackGenerator};

use crate::env::ApiServerEnv;
use crate::response::AppError;

#[derive(Clone)]
pub struct GlobalState {
    pub env: Arc<ApiServerEnv>,
    seeded_rng: Option<Arc<Mutex<StdRng>>>,
}

impl GlobalState {
    pub fn new(env: ApiServerEnv) -> Self {
        let seeded_rng = env
            .pack_seed
            .map(|seed| Arc::new(Mutex::new(StdRng::seed_from_u64(seed))));

        Self {
            env: Arc::new(env),
            seeded_rng,
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded_rng.is_some()
    }

    /// Opens a pack on the shared seeded RNG if configured, otherwise on the
    /// calling thread's RNG.
    pub fn open_pack(&self, size: usize) -> Result<Pack, AppError> {
        let pack = match &self.seeded_rng {
            Some(rng) => {
                let mut rng = rng.lock().map_err(|_| AppError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    anyhow!("pack rng lock poisoned"),
                ))?;
                let mut generator = PackGenerator::new(&mut *rng);
                generator.open_pack(size)
            }
            None => PackGenerator::thread_local().open_pack(size),
        };

        pack.map_err(AppError::unprocessable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_state(seed: u64) -> GlobalState {
        GlobalState::new(ApiServerEnv {
            pack_seed: Some(seed),
            ..Default::default()
        })
    }

    #[test]
    fn test_seeded_states_agree() {
        let a = seeded_state(17);
        let b = seeded_state(17);
        assert!(a.is_seeded());
        for _ in 0..5 {
            assert_eq!(a.open_pack(10).unwrap(), b.open_pack(10).unwrap());
        }
    }

    #[test]
    fn test_state_rejects_bad_size() {
        let state = GlobalState::new(ApiServerEnv::default());
        assert!(!state.is_seeded());
        let err = state.open_pack(2).unwrap_err();
        assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.open_pack(12).unwrap().len(), 12);
    }
}
