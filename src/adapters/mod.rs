// Adapters layer: concrete implementations for external systems (html parsing, chat transport).

pub mod console;
pub mod html;
