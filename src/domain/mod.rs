pub mod game;
pub mod models;
pub mod rules;
pub mod services;
