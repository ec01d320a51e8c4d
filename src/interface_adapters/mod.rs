// Interface adapters: HTTP clients, wire DTOs and the headless scene.

pub mod clients;
pub mod frames;
pub mod protocol;
pub mod scene;
