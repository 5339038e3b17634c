// Interface adapters: HTTP clients, token storage, navigation and shared state.

pub mod clients;
pub mod interceptor;
pub mod navigator;
pub mod protocol;
pub mod state;
pub mod token_store;
