pub mod token_engine;
