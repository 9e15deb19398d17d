//! Use-Cases: fachliche Operationen auf dem `AppState`.

pub mod export;
pub mod painting;
