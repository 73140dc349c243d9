mod genesis_tests;
mod owner_tests;
