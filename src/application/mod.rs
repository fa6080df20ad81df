pub mod evaluation;
pub mod experiments;
pub mod game_service;
